use super::*;

const DOT: FeatureShape = FeatureShape {
    view_box: "0 0 10 10",
    circles: &[CircleSpec {
        cx: "5",
        cy: "5",
        r: "2",
        fill: None,
        stroke: None,
        stroke_width: None,
        opacity: None,
    }],
    ..FeatureShape::EMPTY
};

const MIXED: FeatureShape = FeatureShape {
    view_box: "0 0 20 10",
    paths: &[PathSpec {
        d: "M0 0 L20 10",
        fill: Some("#abc"),
        opacity: Some("0.5"),
    }],
    strokes: &[StrokeSpec {
        d: "M0 5 L20 5",
        stroke_width: "2",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    rects: &[RectSpec {
        x: "1",
        y: "1",
        width: "3",
        height: "3",
        rx: Some("1"),
        fill: None,
        opacity: None,
    }],
    ..FeatureShape::EMPTY
};

#[test]
fn golden_markup_for_a_simple_shape() {
    assert_eq!(
        render_shape_content(&DOT, "#111", "#111"),
        "<circle cx=\"5\" cy=\"5\" r=\"2\" fill=\"#111\"/>"
    );
}

#[test]
fn primitive_order_is_paths_strokes_circles_ellipses_rects() {
    let markup = render_shape_content(&MIXED, "#111", "#222");
    let path = markup.find("<path d=\"M0 0").unwrap();
    let stroke = markup.find("<path d=\"M0 5").unwrap();
    let rect = markup.find("<rect").unwrap();
    assert!(path < stroke && stroke < rect);
}

#[test]
fn overrides_beat_defaults_and_opacity_is_conditional() {
    let markup = render_shape_content(&MIXED, "#111", "#222");
    assert!(markup.contains("fill=\"#abc\" opacity=\"0.5\""));
    assert!(markup.contains("stroke=\"#222\" stroke-width=\"2\" stroke-linecap=\"round\""));
    // The rect inherits the default fill and emits no opacity.
    assert!(markup.contains("<rect x=\"1\" y=\"1\" width=\"3\" height=\"3\" fill=\"#111\" rx=\"1\"/>"));
}

#[test]
fn feature_wrapper_defaults_to_fluid_sizing() {
    let markup = render_feature(&DOT, "#111", "#111", None, None);
    assert!(markup.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\" viewBox=\"0 0 10 10\" style=\"overflow:visible;width:100%;height:auto\">"
    ));
    assert!(markup.ends_with("</svg>"));
    assert!(!markup.contains("<g"));
}

#[test]
fn inner_group_style_wraps_the_content() {
    let markup = render_feature(&DOT, "#111", "#111", Some("animation:x 1s"), None);
    assert!(markup.contains("<g style=\"animation:x 1s\"><circle"));
    assert!(markup.contains("</g></svg>"));
}

#[test]
fn svg_style_override_replaces_the_default() {
    let markup = render_feature(&DOT, "#111", "#111", None, Some("width:110%;height:auto"));
    assert!(markup.contains("style=\"overflow:visible;width:110%;height:auto\""));
    assert!(!markup.contains("width:100%"));
}

#[test]
fn view_box_size_parses_width_and_height() {
    assert_eq!(MIXED.view_box_size(), (20.0, 10.0));
    let broken = FeatureShape {
        view_box: "garbage",
        ..FeatureShape::EMPTY
    };
    assert_eq!(broken.view_box_size(), (1.0, 1.0));
}
