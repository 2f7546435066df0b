use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use kodama::{BackgroundStyle, ExportOptions, Options, Shape, create_faces, render_export_svg};

#[derive(Parser, Debug)]
#[command(name = "kodama", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an avatar as an SVG document.
    Svg(SvgArgs),
    /// Rasterize the static export SVG to a PNG file.
    Png(PngArgs),
}

#[derive(Args, Debug)]
struct AvatarArgs {
    /// Input name the avatar is derived from.
    name: String,

    /// Pixel size (also drives the auto detail level).
    #[arg(long, default_value_t = 128)]
    size: u32,

    /// Clip shape: circle, squircle or square (unknown values fall back to circle).
    #[arg(long, default_value = "circle")]
    shape: String,

    /// Background style: gradient or solid.
    #[arg(long)]
    background: Option<String>,

    /// Mood override: happy, surprised, sleepy, cool or cheeky.
    #[arg(long)]
    mood: Option<String>,

    /// Detail level: minimal, basic, standard or full.
    #[arg(long)]
    detail_level: Option<String>,

    /// Depth preset: none, subtle, medium or dramatic.
    #[arg(long)]
    depth: Option<String>,

    /// Comma-separated animation list, e.g. blink,float,glance.
    #[arg(long)]
    animations: Option<String>,

    /// Comma-separated gradient pairs, e.g. E8D5F5-C7A4E0,FFE0D0-FFB899.
    #[arg(long)]
    gradients: Option<String>,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    avatar: AvatarArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    avatar: AvatarArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn build_options(args: &AvatarArgs) -> Options {
    let mut options = Options::new(&args.name)
        .size(args.size)
        .shape(Shape::parse_or_default(&args.shape));

    // Variant props pass through as-is; the library validates them strictly.
    if let Some(background) = &args.background {
        options = options.prop("background", background.as_str());
    }
    if let Some(mood) = &args.mood {
        options = options.prop("mood", mood.as_str());
    }
    if let Some(detail_level) = &args.detail_level {
        options = options.prop("detailLevel", detail_level.as_str());
    }
    if let Some(depth) = &args.depth {
        options = options.prop("depth", depth.as_str());
    }
    if let Some(animations) = &args.animations {
        let list: Vec<serde_json::Value> = animations
            .split(',')
            .filter(|a| !a.is_empty())
            .map(|a| serde_json::Value::String(a.to_string()))
            .collect();
        options = options.prop("animations", list);
    }
    if let Some(gradients) = &args.gradients {
        options = options.prop("gradients", parse_gradients_param(gradients));
    }
    options
}

/// Parse `RRGGBB-RRGGBB,...` into gradient records; malformed entries are
/// dropped at this edge layer rather than rejected.
fn parse_gradients_param(param: &str) -> Vec<serde_json::Value> {
    param
        .split(',')
        .filter_map(|pair| {
            let (from, to) = pair.split_once('-')?;
            if from.is_empty() || to.is_empty() {
                return None;
            }
            Some(serde_json::json!({
                "from": format!("#{from}"),
                "to": format!("#{to}"),
            }))
        })
        .collect()
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let result = create_faces(&build_options(&args.avatar))?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, &result.svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{}", result.svg),
    }
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let options = build_options(&args.avatar);
    let result = create_faces(&options)?;

    let background = match args.avatar.background.as_deref() {
        Some("solid") => BackgroundStyle::Solid,
        _ => BackgroundStyle::Gradient,
    };
    let export = render_export_svg(&ExportOptions {
        size: args.avatar.size,
        shape: Shape::parse_or_default(&args.avatar.shape),
        background,
        gradient: &result.gradient,
        seed: kodama::hash(&args.avatar.name),
        layout: &result.layout,
    });

    let rgba = rasterize(&export, args.avatar.size)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &rgba,
        args.avatar.size,
        args.avatar.size,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Rasterize the export SVG at `size` pixels square, returning straight
/// (non-premultiplied) RGBA8 bytes. Deterministic for deterministic input,
/// so a failure here is never retried.
fn rasterize(svg: &str, size: u32) -> anyhow::Result<Vec<u8>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse export svg")?;

    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(size, size).context("allocate raster target")?;
    let scale = size as f32 / tree.size().width();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    Ok(rgba)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}
