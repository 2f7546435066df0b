//! Feature shape catalogs.
//!
//! Process-wide immutable drawing data for every slot style. Each entry is
//! a [`FeatureShape`] in its own small coordinate space; layout and color
//! are applied by the renderer, never stored here.

use crate::render::feature::{CircleSpec, EllipseSpec, FeatureShape, PathSpec, RectSpec, StrokeSpec};

use super::model::{AccessoryKind, CheekKind, EyeKind, EyebrowKind, MouthKind};

const EYE_ROUND: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    circles: &[
        CircleSpec {
            cx: "10",
            cy: "10",
            r: "6",
            fill: None,
            stroke: None,
            stroke_width: None,
            opacity: None,
        },
        CircleSpec {
            cx: "52",
            cy: "10",
            r: "6",
            fill: None,
            stroke: None,
            stroke_width: None,
            opacity: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYE_CROSS: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    strokes: &[
        StrokeSpec {
            d: "M5 5 L15 15 M15 5 L5 15",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M47 5 L57 15 M57 5 L47 15",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYE_LINE: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    strokes: &[
        StrokeSpec {
            d: "M4 10 L16 10",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M46 10 L58 10",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYE_CURVED: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    strokes: &[
        StrokeSpec {
            d: "M4 12 Q10 4 16 12",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M46 12 Q52 4 58 12",
            stroke_width: "3",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYE_WINK: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    strokes: &[StrokeSpec {
        d: "M46 12 Q52 4 58 12",
        stroke_width: "3",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    circles: &[CircleSpec {
        cx: "10",
        cy: "10",
        r: "6",
        fill: None,
        stroke: None,
        stroke_width: None,
        opacity: None,
    }],
    ..FeatureShape::EMPTY
};

const EYE_HEART: FeatureShape = FeatureShape {
    view_box: "0 0 62 20",
    paths: &[
        PathSpec {
            d: "M10 16 C4 11 3 6 6.5 4.5 C8.5 3.6 10 5 10 6.5 C10 5 11.5 3.6 13.5 4.5 C17 6 16 11 10 16 Z",
            fill: None,
            opacity: None,
        },
        PathSpec {
            d: "M52 16 C46 11 45 6 48.5 4.5 C50.5 3.6 52 5 52 6.5 C52 5 53.5 3.6 55.5 4.5 C59 6 58 11 52 16 Z",
            fill: None,
            opacity: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYEBROW_ARCHED: FeatureShape = FeatureShape {
    view_box: "0 0 55 10",
    strokes: &[
        StrokeSpec {
            d: "M3 8 Q10 2 17 7",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M38 7 Q45 2 52 8",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYEBROW_FLAT: FeatureShape = FeatureShape {
    view_box: "0 0 55 10",
    strokes: &[
        StrokeSpec {
            d: "M3 6 L17 6",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M38 6 L52 6",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const EYEBROW_RAISED: FeatureShape = FeatureShape {
    view_box: "0 0 55 10",
    strokes: &[
        StrokeSpec {
            d: "M3 7 Q10 1 17 4",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
        StrokeSpec {
            d: "M38 4 Q45 1 52 7",
            stroke_width: "2.5",
            stroke_linecap: Some("round"),
            fill: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const MOUTH_SMILE: FeatureShape = FeatureShape {
    view_box: "0 0 35 14",
    strokes: &[StrokeSpec {
        d: "M4 4 Q17.5 14 31 4",
        stroke_width: "3",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    ..FeatureShape::EMPTY
};

const MOUTH_GRIN: FeatureShape = FeatureShape {
    view_box: "0 0 35 18",
    paths: &[PathSpec {
        d: "M3 4 Q17.5 22 32 4 Q17.5 9 3 4 Z",
        fill: None,
        opacity: None,
    }],
    ..FeatureShape::EMPTY
};

const MOUTH_O: FeatureShape = FeatureShape {
    view_box: "0 0 35 18",
    ellipses: &[EllipseSpec {
        cx: "17.5",
        cy: "9",
        rx: "5",
        ry: "6.5",
        stroke: None,
        stroke_width: Some("2.5"),
        fill: None,
    }],
    ..FeatureShape::EMPTY
};

const MOUTH_CAT: FeatureShape = FeatureShape {
    view_box: "0 0 35 14",
    strokes: &[StrokeSpec {
        d: "M3 5 Q10 12 17.5 5 Q25 12 32 5",
        stroke_width: "2.5",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    ..FeatureShape::EMPTY
};

const MOUTH_TONGUE: FeatureShape = FeatureShape {
    view_box: "0 0 35 20",
    paths: &[
        PathSpec {
            d: "M3 4 Q17.5 20 32 4 Q17.5 9 3 4 Z",
            fill: None,
            opacity: None,
        },
        PathSpec {
            d: "M13 10 Q17.5 12 22 10 L22 13 Q17.5 19 13 13 Z",
            fill: Some("#FF9EBB"),
            opacity: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const MOUTH_SMIRK: FeatureShape = FeatureShape {
    view_box: "0 0 35 14",
    strokes: &[StrokeSpec {
        d: "M6 8 Q20 12 30 4",
        stroke_width: "3",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    ..FeatureShape::EMPTY
};

const MOUTH_FLAT: FeatureShape = FeatureShape {
    view_box: "0 0 35 14",
    strokes: &[StrokeSpec {
        d: "M6 7 L29 7",
        stroke_width: "3",
        stroke_linecap: Some("round"),
        fill: None,
    }],
    ..FeatureShape::EMPTY
};

const CHEEK_BLUSH: FeatureShape = FeatureShape {
    view_box: "0 0 65 12",
    ellipses: &[
        EllipseSpec {
            cx: "8",
            cy: "6",
            rx: "7",
            ry: "4",
            stroke: Some("none"),
            stroke_width: None,
            fill: Some("#FF9EBB"),
        },
        EllipseSpec {
            cx: "57",
            cy: "6",
            rx: "7",
            ry: "4",
            stroke: Some("none"),
            stroke_width: None,
            fill: Some("#FF9EBB"),
        },
    ],
    ..FeatureShape::EMPTY
};

const ACCESSORY_GLASSES: FeatureShape = FeatureShape {
    view_box: "0 0 66 24",
    strokes: &[StrokeSpec {
        d: "M27 12 Q33 9 39 12",
        stroke_width: "2",
        stroke_linecap: None,
        fill: None,
    }],
    circles: &[
        CircleSpec {
            cx: "15",
            cy: "12",
            r: "10",
            fill: Some("none"),
            stroke: None,
            stroke_width: Some("2.5"),
            opacity: None,
        },
        CircleSpec {
            cx: "51",
            cy: "12",
            r: "10",
            fill: Some("none"),
            stroke: None,
            stroke_width: Some("2.5"),
            opacity: None,
        },
    ],
    ..FeatureShape::EMPTY
};

const ACCESSORY_SUNGLASSES: FeatureShape = FeatureShape {
    view_box: "0 0 66 24",
    strokes: &[StrokeSpec {
        d: "M27 10 Q33 7 39 10",
        stroke_width: "2.5",
        stroke_linecap: None,
        fill: None,
    }],
    rects: &[
        RectSpec {
            x: "4",
            y: "4",
            width: "22",
            height: "15",
            rx: Some("6"),
            fill: None,
            opacity: None,
        },
        RectSpec {
            x: "40",
            y: "4",
            width: "22",
            height: "15",
            rx: Some("6"),
            fill: None,
            opacity: None,
        },
    ],
    ..FeatureShape::EMPTY
};

/// Eye shape for the given style.
pub fn eye_shape(kind: EyeKind) -> &'static FeatureShape {
    match kind {
        EyeKind::Round => &EYE_ROUND,
        EyeKind::Cross => &EYE_CROSS,
        EyeKind::Line => &EYE_LINE,
        EyeKind::Curved => &EYE_CURVED,
        EyeKind::Wink => &EYE_WINK,
        EyeKind::Heart => &EYE_HEART,
    }
}

/// Eyebrow shape for the given style; `None` for no-eyebrow faces.
pub fn eyebrow_shape(kind: EyebrowKind) -> Option<&'static FeatureShape> {
    match kind {
        EyebrowKind::Arched => Some(&EYEBROW_ARCHED),
        EyebrowKind::Flat => Some(&EYEBROW_FLAT),
        EyebrowKind::Raised => Some(&EYEBROW_RAISED),
        EyebrowKind::None => None,
    }
}

/// Mouth shape for the given style.
pub fn mouth_shape(kind: MouthKind) -> &'static FeatureShape {
    match kind {
        MouthKind::Smile => &MOUTH_SMILE,
        MouthKind::Grin => &MOUTH_GRIN,
        MouthKind::O => &MOUTH_O,
        MouthKind::Cat => &MOUTH_CAT,
        MouthKind::Tongue => &MOUTH_TONGUE,
        MouthKind::Smirk => &MOUTH_SMIRK,
        MouthKind::Flat => &MOUTH_FLAT,
    }
}

/// Cheek shape for the given style; `None` for plain faces.
pub fn cheek_shape(kind: CheekKind) -> Option<&'static FeatureShape> {
    match kind {
        CheekKind::Blush => Some(&CHEEK_BLUSH),
        CheekKind::None => None,
    }
}

/// Accessory shape for the given style; `None` when bare-faced.
pub fn accessory_shape(kind: AccessoryKind) -> Option<&'static FeatureShape> {
    match kind {
        AccessoryKind::None => None,
        AccessoryKind::Glasses => Some(&ACCESSORY_GLASSES),
        AccessoryKind::Sunglasses => Some(&ACCESSORY_SUNGLASSES),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/features.rs"]
mod tests;
