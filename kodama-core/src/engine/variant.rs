use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::engine::options::{PropMap, Shape};
use crate::foundation::error::{KodamaError, KodamaResult};

/// Capability description published by a variant module.
#[derive(Clone, Copy, Debug)]
pub struct VariantCapabilities {
    /// Background styles the module understands.
    pub backgrounds: &'static [&'static str],
    /// Animation kinds the module understands.
    pub animations: &'static [&'static str],
}

/// Per-call context handed to a variant module.
///
/// Built once by the composition engine; the seed is computed exactly once
/// per call and shared between normalization and resolution.
#[derive(Clone, Debug)]
pub struct VariantContext {
    /// Input name the avatar is derived from.
    pub name: String,
    /// Requested pixel size.
    pub size: u32,
    /// `hash(name)`.
    pub seed: u32,
    /// Outer clip shape.
    pub shape: Shape,
}

/// Result of resolving a variant module.
///
/// The engine guarantees only `variant` and `svg`; everything richer lives
/// in `details` as the module's own JSON shape, recoverable through
/// [`VariantOutput::decode`]. This is the polymorphic seam that lets
/// multiple visual styles share one entry point.
#[derive(Clone, Debug)]
pub struct VariantOutput {
    /// Id of the module that produced this output.
    pub variant: &'static str,
    /// The rendered SVG document.
    pub svg: String,
    /// Module-specific payload (slots, palette, layout, ...).
    pub details: Value,
}

impl VariantOutput {
    /// Decode the module-specific payload into a typed result.
    pub fn decode<T: DeserializeOwned>(&self) -> KodamaResult<T> {
        Ok(serde_json::from_value(self.details.clone())?)
    }
}

/// A pluggable visual style.
///
/// The composition engine never inspects a concrete module beyond this
/// interface: it validates caller keys against `prop_keys`, runs
/// `normalize_props` (which must reject any invalid value up front), and
/// delegates rendering to `resolve`. Normalized props travel as JSON so the
/// trait stays object-safe; a module deserializes them back into its own
/// typed props inside `resolve`.
pub trait Variant: Send + Sync {
    /// Stable module id, used in error messages and results.
    fn id(&self) -> &'static str;

    /// The exhaustive set of prop keys this module accepts.
    fn prop_keys(&self) -> &'static [&'static str];

    /// Published capabilities.
    fn capabilities(&self) -> VariantCapabilities;

    /// Validate and default the raw prop bag.
    ///
    /// Must fail fast on any invalid value, naming the variant id, prop,
    /// received value and allowed set; never silently defaults an invalid
    /// input.
    fn normalize_props(&self, raw: &PropMap, ctx: &VariantContext) -> KodamaResult<Value>;

    /// Render from normalized props.
    fn resolve(&self, ctx: &VariantContext, props: Value) -> KodamaResult<VariantOutput>;
}

/// A variant module bundled with baked-in default props.
///
/// Used when callers want to fix settings once instead of passing them on
/// every call. Mixing a configured variant with top-level props for the same
/// module is ambiguous and rejected by the engine.
#[derive(Clone)]
pub struct ConfiguredVariant {
    module: &'static dyn Variant,
    defaults: PropMap,
}

impl ConfiguredVariant {
    /// Wrap a module with an empty default set.
    pub fn new(module: &'static dyn Variant) -> Self {
        Self {
            module,
            defaults: PropMap::new(),
        }
    }

    /// Bake in a default prop. The key must be declared by the module.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> KodamaResult<Self> {
        let key = key.into();
        if !self.module.prop_keys().contains(&key.as_str()) {
            return Err(KodamaError::unknown_option(self.module.id(), &key));
        }
        self.defaults.insert(key, value.into());
        Ok(self)
    }

    /// The wrapped module.
    pub fn module(&self) -> &'static dyn Variant {
        self.module
    }

    /// The baked-in default props.
    pub fn defaults(&self) -> &PropMap {
        &self.defaults
    }
}

impl fmt::Debug for ConfiguredVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredVariant")
            .field("module", &self.module.id())
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// How the caller selected a variant: a bare module reference, or a
/// pre-configured descriptor carrying its own defaults.
#[derive(Clone)]
pub enum VariantSelection {
    /// A bare module; props come from the top-level option bag.
    Bare(&'static dyn Variant),
    /// A configured descriptor; props come from its baked-in defaults.
    Configured(ConfiguredVariant),
}

impl VariantSelection {
    /// The module behind this selection.
    pub fn module(&self) -> &'static dyn Variant {
        match self {
            Self::Bare(module) => *module,
            Self::Configured(configured) => configured.module(),
        }
    }
}

impl fmt::Debug for VariantSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(module) => f.debug_tuple("Bare").field(&module.id()).finish(),
            Self::Configured(configured) => f.debug_tuple("Configured").field(configured).finish(),
        }
    }
}

impl From<&'static dyn Variant> for VariantSelection {
    fn from(module: &'static dyn Variant) -> Self {
        Self::Bare(module)
    }
}

impl<V: Variant> From<&'static V> for VariantSelection {
    fn from(module: &'static V) -> Self {
        Self::Bare(module)
    }
}

impl From<ConfiguredVariant> for VariantSelection {
    fn from(configured: ConfiguredVariant) -> Self {
        Self::Configured(configured)
    }
}
