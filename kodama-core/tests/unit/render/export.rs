use super::*;
use crate::render::layout::PlacedFeature;

fn layout() -> FaceLayout {
    FaceLayout {
        items: vec![PlacedFeature {
            slot: "eyes".to_string(),
            x: 40.0,
            y: 31.666_666_7,
            width: 20.0,
            height: 6.451_612_9,
            view_box: "0 0 62 20".to_string(),
            body: "<circle cx=\"10\" cy=\"10\" r=\"6\" fill=\"#000\"/>".to_string(),
        }],
    }
}

fn options<'a>(gradient: &'a GradientPair, layout: &'a FaceLayout) -> ExportOptions<'a> {
    ExportOptions {
        size: 128,
        shape: Shape::Circle,
        background: BackgroundStyle::Gradient,
        gradient,
        seed: 97_717,
        layout,
    }
}

#[test]
fn export_svg_is_pure_vector_markup() {
    let gradient = GradientPair::new("#111111", "#222222");
    let layout = layout();
    let svg = render_export_svg(&options(&gradient, &layout));
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"128\" height=\"128\" viewBox=\"0 0 100 100\">"
    ));
    assert!(!svg.contains("foreignObject"));
    assert!(!svg.contains("<style>"));
    assert!(!svg.contains("animation"));
    assert!(!svg.contains("currentColor"));
}

#[test]
fn features_are_positioned_from_the_layout() {
    let gradient = GradientPair::new("#111111", "#222222");
    let layout = layout();
    let svg = render_export_svg(&options(&gradient, &layout));
    assert!(svg.contains(
        "<svg x=\"40\" y=\"31.667\" width=\"20\" height=\"6.452\" viewBox=\"0 0 62 20\" overflow=\"visible\">"
    ));
    assert!(svg.contains("<circle cx=\"10\" cy=\"10\" r=\"6\" fill=\"#000\"/>"));
}

#[test]
fn export_shares_shell_defs_and_background() {
    let gradient = GradientPair::new("#111111", "#222222");
    let layout = layout();
    let svg = render_export_svg(&options(&gradient, &layout));
    assert!(svg.contains("<clipPath id=\"kodama-c-23ed\">"));
    assert!(svg.contains("url(#kodama-g-23ed)"));
    assert!(svg.contains("url(#kodama-g-23ed-s)"));

    let mut solid = options(&gradient, &layout);
    solid.background = BackgroundStyle::Solid;
    let svg = render_export_svg(&solid);
    assert!(svg.contains("fill=\"#111111\""));
    assert!(!svg.contains("radialGradient"));
}
