/// Convenience alias used across the crate.
pub type KodamaResult<T> = Result<T, KodamaError>;

/// Errors surfaced by the generation engine.
///
/// All variants except [`KodamaError::Other`] are configuration errors meant
/// to be fixed at the call site; none of them is retryable. Validation
/// happens up front (prop normalization and option-key checks), so an error
/// is always raised before any SVG output is produced.
#[derive(thiserror::Error, Debug)]
pub enum KodamaError {
    /// An enum-valued prop received a value outside its allowed set.
    #[error("variant \"{variant}\" received invalid value \"{value}\" for prop \"{prop}\"; allowed values: {allowed}")]
    InvalidProp {
        /// Id of the variant module that rejected the prop.
        variant: String,
        /// The offending prop name.
        prop: String,
        /// The received value, rendered for display.
        value: String,
        /// Comma-separated allowed set.
        allowed: String,
    },

    /// An option key is neither a base option nor declared by the variant.
    #[error("unsupported option \"{key}\" for variant \"{variant}\"")]
    UnknownOption {
        /// Id of the resolved variant module.
        variant: String,
        /// The unrecognized key.
        key: String,
    },

    /// Top-level variant props were mixed with a pre-configured variant.
    #[error("variant \"{variant}\" is configured via descriptor; remove top-level props ({keys}) or pass the bare variant instead")]
    ConfiguredVariantConflict {
        /// Id of the configured variant module.
        variant: String,
        /// Comma-separated list of the conflicting keys.
        keys: String,
    },

    /// Interchange (de)serialization failed; indicates a variant-module bug.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Opaque failure from an external collaborator (e.g. a rasterizer).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KodamaError {
    pub(crate) fn invalid_prop(
        variant: &str,
        prop: &str,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidProp {
            variant: variant.to_string(),
            prop: prop.to_string(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub(crate) fn unknown_option(variant: &str, key: &str) -> Self {
        Self::UnknownOption {
            variant: variant.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn configured_conflict(variant: &str, keys: &[&str]) -> Self {
        Self::ConfiguredVariantConflict {
            variant: variant.to_string(),
            keys: keys.join(", "),
        }
    }

    pub(crate) fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KodamaError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
