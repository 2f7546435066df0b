//! Structured feature layout.
//!
//! The generation pipeline emits its computed layout as first-class data:
//! an ordered list of positioned feature elements in the 0-100 shell space.
//! Both the static-export path and any downstream raster/export consumer
//! read this IR directly instead of re-extracting geometry from previously
//! generated markup.

/// One feature placed in the 0-100 shell coordinate space.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedFeature {
    /// Slot name this element renders ("eyes", "mouth", ...).
    pub slot: String,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height (width scaled by the feature's view-box aspect ratio).
    pub height: f64,
    /// The feature's own coordinate space.
    pub view_box: String,
    /// Inner markup with concrete colors (no CSS dependencies).
    pub body: String,
}

/// The full positioned layout of a rendered face.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLayout {
    /// Placed features in paint order.
    pub items: Vec<PlacedFeature>,
}

/// An element participating in vertical flex-column centering.
#[derive(Clone, Debug)]
pub struct ColumnItem {
    /// Slot name carried through to the placed feature.
    pub slot: &'static str,
    /// The feature's view box.
    pub view_box: String,
    /// Inner markup with concrete colors.
    pub body: String,
    /// Layout width in shell units.
    pub width: f64,
    /// Height derived from width and view-box aspect.
    pub height: f64,
    /// Gap inserted after this item (ignored for the last item).
    pub gap_after: f64,
}

/// Center a column of items vertically within `extent` units, each item
/// horizontally centered. Mirrors a flex column with `justify-content:
/// center` and per-item margins.
pub fn resolve_column_layout(items: Vec<ColumnItem>, extent: f64) -> Vec<PlacedFeature> {
    let mut total = 0.0;
    for (index, item) in items.iter().enumerate() {
        total += item.height;
        if index + 1 < items.len() {
            total += item.gap_after;
        }
    }

    let mut y = (extent - total) / 2.0;
    let count = items.len();
    let mut placed = Vec::with_capacity(count);
    for (index, item) in items.into_iter().enumerate() {
        placed.push(PlacedFeature {
            slot: item.slot.to_string(),
            x: (extent - item.width) / 2.0,
            y,
            width: item.width,
            height: item.height,
            view_box: item.view_box,
            body: item.body,
        });
        y += item.height;
        if index + 1 < count {
            y += item.gap_after;
        }
    }
    placed
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
