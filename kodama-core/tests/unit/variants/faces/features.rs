use super::*;
use crate::render::feature::render_shape_content;

#[test]
fn every_eye_style_has_a_shape_with_content() {
    for kind in EyeKind::ALL {
        let shape = eye_shape(kind);
        assert!(shape.view_box.starts_with("0 0 "), "{kind:?}");
        let markup = render_shape_content(shape, "#000", "#000");
        assert!(!markup.is_empty(), "{kind:?}");
    }
}

#[test]
fn none_styles_have_no_shape() {
    assert!(eyebrow_shape(EyebrowKind::None).is_none());
    assert!(cheek_shape(CheekKind::None).is_none());
    assert!(accessory_shape(AccessoryKind::None).is_none());
}

#[test]
fn drawn_styles_have_shapes() {
    for kind in [EyebrowKind::Arched, EyebrowKind::Flat, EyebrowKind::Raised] {
        assert!(eyebrow_shape(kind).is_some(), "{kind:?}");
    }
    for kind in MouthKind::ALL {
        let markup = render_shape_content(mouth_shape(kind), "#000", "#000");
        assert!(!markup.is_empty(), "{kind:?}");
    }
    assert!(cheek_shape(CheekKind::Blush).is_some());
    assert!(accessory_shape(AccessoryKind::Glasses).is_some());
    assert!(accessory_shape(AccessoryKind::Sunglasses).is_some());
}

#[test]
fn view_boxes_parse_to_positive_sizes() {
    let mut shapes: Vec<&FeatureShape> = Vec::new();
    shapes.extend(EyeKind::ALL.iter().map(|k| eye_shape(*k)));
    shapes.extend(MouthKind::ALL.iter().map(|k| mouth_shape(*k)));
    shapes.extend(eyebrow_shape(EyebrowKind::Arched));
    shapes.extend(cheek_shape(CheekKind::Blush));
    shapes.extend(accessory_shape(AccessoryKind::Sunglasses));
    for shape in shapes {
        let (w, h) = shape.view_box_size();
        assert!(w > 1.0 && h > 1.0, "{}", shape.view_box);
    }
}

#[test]
fn tongue_and_blush_carry_their_own_pink() {
    let tongue = render_shape_content(mouth_shape(MouthKind::Tongue), "#000", "#000");
    assert!(tongue.contains("#FF9EBB"));
    let blush = cheek_shape(CheekKind::Blush).unwrap();
    assert!(render_shape_content(blush, "#FF9EBB", "#FF9EBB").contains("#FF9EBB"));
}
