use super::*;

#[test]
fn default_palette_has_sixteen_entries() {
    let palette = default_gradients();
    assert_eq!(palette.len(), DEFAULT_GRADIENT_COUNT);
    assert_eq!(palette[0], GradientPair::new("#E8D5F5", "#C7A4E0"));
    assert_eq!(palette[15], GradientPair::new("#D0F5E0", "#A0E8BF"));
}

#[test]
fn index_wraps_modulo_palette_length() {
    assert_eq!(pick_gradient(None, 0), pick_gradient(None, 16));
    assert_eq!(pick_gradient(None, 3), pick_gradient(None, 19));
}

#[test]
fn custom_palette_is_used_when_non_empty() {
    let custom = vec![
        GradientPair::new("#111111", "#222222"),
        GradientPair::new("#333333", "#444444"),
    ];
    assert_eq!(pick_gradient(Some(&custom), 0), custom[0]);
    assert_eq!(pick_gradient(Some(&custom), 1), custom[1]);
    assert_eq!(pick_gradient(Some(&custom), 2), custom[0]);
}

#[test]
fn empty_custom_palette_falls_back_to_default() {
    let empty: Vec<GradientPair> = Vec::new();
    assert_eq!(pick_gradient(Some(&empty), 5), pick_gradient(None, 5));
}
