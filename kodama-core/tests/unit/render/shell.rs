use super::*;

fn options<'a>(gradient: &'a GradientPair, content: &'a str) -> ShellOptions<'a> {
    ShellOptions {
        seed: 97_717,
        shape: Shape::Circle,
        background: BackgroundStyle::Gradient,
        gradient,
        content,
        keyframes: None,
        svg_style: None,
        root_style: None,
    }
}

#[test]
fn shell_structure_and_ids_are_stable() {
    let gradient = GradientPair::new("#111111", "#222222");
    let svg = render_svg_shell(&options(&gradient, "<p>x</p>"));
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" width=\"100%\" height=\"100%\">"
    ));
    // seed 97717 is 23ed in base 36.
    assert!(svg.contains("<clipPath id=\"kodama-c-23ed\">"));
    assert!(svg.contains("<g clip-path=\"url(#kodama-c-23ed)\">"));
    assert!(svg.contains("url(#kodama-g-23ed)"));
    assert!(svg.contains("<foreignObject x=\"0\" y=\"0\" width=\"100\" height=\"100\">"));
    assert!(svg.contains("<div xmlns=\"http://www.w3.org/1999/xhtml\""));
    assert!(svg.contains("<p>x</p>"));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn gradient_background_emits_base_and_shine_gradients() {
    let gradient = GradientPair::new("#111111", "#222222");
    let svg = render_svg_shell(&options(&gradient, ""));
    assert!(svg.contains("<radialGradient id=\"kodama-g-23ed\" cx=\"40%\" cy=\"40%\" r=\"85%\">"));
    assert!(svg.contains("stop-color=\"#111111\""));
    assert!(svg.contains("stop-color=\"#222222\""));
    assert!(svg.contains("<radialGradient id=\"kodama-g-23ed-s\""));
    assert!(svg.contains("rgba(255,255,255,0.15)"));
    assert!(svg.contains("url(#kodama-g-23ed-s)"));
}

#[test]
fn solid_background_uses_the_from_color_and_skips_shine() {
    let gradient = GradientPair::new("#111111", "#222222");
    let mut opts = options(&gradient, "");
    opts.background = BackgroundStyle::Solid;
    let svg = render_svg_shell(&opts);
    assert!(svg.contains("fill=\"#111111\""));
    assert!(!svg.contains("radialGradient"));
    assert!(!svg.contains("-s)"));
}

#[test]
fn squircle_path_is_reproduced_exactly() {
    let gradient = GradientPair::new("#111111", "#222222");
    let mut opts = options(&gradient, "");
    opts.shape = Shape::Squircle;
    let svg = render_svg_shell(&opts);
    assert!(svg.contains(
        "M 0 44 C 0 5.86 5.86 0 44 0 L 56 0 C 94.14 0 100 5.86 100 44 L 100 56 C 100 94.14 94.14 100 56 100 L 44 100 C 5.86 100 0 94.14 0 56 Z"
    ));
}

#[test]
fn square_shape_clips_with_a_rect() {
    let gradient = GradientPair::new("#111111", "#222222");
    let mut opts = options(&gradient, "");
    opts.shape = Shape::Square;
    let svg = render_svg_shell(&opts);
    assert!(svg.contains("<clipPath id=\"kodama-c-23ed\"><rect x=\"0\" y=\"0\" width=\"100\" height=\"100\"/></clipPath>"));
}

#[test]
fn keyframes_and_styles_are_conditional() {
    let gradient = GradientPair::new("#111111", "#222222");
    let mut opts = options(&gradient, "");
    opts.keyframes = Some("@keyframes k { }");
    opts.svg_style = Some("animation:kodama-entrance-scale 0.4s ease-out 0s forwards");
    opts.root_style = Some("color:#000;perspective:300px");
    let svg = render_svg_shell(&opts);
    assert!(svg.contains("<style>@keyframes k { }</style>"));
    assert!(svg.contains("height=\"100%\" style=\"animation:kodama-entrance-scale"));
    assert!(
        svg.contains("style=\"width:100%;height:100%;position:relative;overflow:hidden;color:#000;perspective:300px\"")
    );

    let plain = render_svg_shell(&options(&gradient, ""));
    assert!(!plain.contains("<style>"));
    assert!(plain.contains("style=\"width:100%;height:100%;position:relative;overflow:hidden\""));
}
