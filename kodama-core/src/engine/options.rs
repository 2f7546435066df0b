use serde_json::Value;

use crate::engine::variant::VariantSelection;

/// Dynamic prop bag passed to variant modules.
///
/// `serde_json::Map` keeps keys sorted, so iteration (and therefore error
/// reporting and output) is deterministic.
pub type PropMap = serde_json::Map<String, Value>;

/// Option keys owned by the composition engine itself; everything else must
/// be declared by the resolved variant module.
pub const BASE_OPTION_KEYS: [&str; 4] = ["name", "size", "shape", "variant"];

/// Outer clip shape of the avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Full circle (the default).
    #[default]
    Circle,
    /// Apple-style continuous-curvature superellipse.
    Squircle,
    /// Plain square.
    Square,
}

impl Shape {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Squircle => "squircle",
            Self::Square => "square",
        }
    }

    /// Permissive parse: unrecognized input falls back to [`Shape::Circle`].
    ///
    /// Shape is cosmetic and has a render-layer fallback, so this is the one
    /// option that degrades instead of erroring.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "squircle" => Self::Squircle,
            "square" => Self::Square,
            _ => Self::Circle,
        }
    }
}

/// Call-time options for [`create_kodama`](crate::create_kodama).
///
/// Base fields (`name`, `size`, `shape`, `variant`) are typed; variant props
/// travel in a dynamic bag and are validated against the resolved module's
/// declared prop set before any generation work happens.
///
/// ```
/// use kodama::{Options, Shape};
///
/// let options = Options::new("alice")
///     .size(64)
///     .shape(Shape::Squircle)
///     .prop("mood", "happy");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub(crate) name: String,
    pub(crate) size: Option<u32>,
    pub(crate) shape: Shape,
    pub(crate) variant: Option<VariantSelection>,
    pub(crate) props: PropMap,
}

/// Default avatar size in pixels when none is requested.
pub const DEFAULT_SIZE: u32 = 40;

impl Options {
    /// Options for the given input name, everything else defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Requested pixel size (default 40); also drives the auto detail level.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Outer clip shape (default circle).
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Select a variant module, bare or pre-configured.
    pub fn variant(mut self, selection: impl Into<VariantSelection>) -> Self {
        self.variant = Some(selection.into());
        self
    }

    /// Set a variant prop by its declared key.
    ///
    /// Keys are checked against the resolved module's prop set at
    /// [`create_kodama`](crate::create_kodama) time; a typo is a hard error,
    /// not a silent no-op.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// The input name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective pixel size.
    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/options.rs"]
mod tests;
