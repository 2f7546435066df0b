use crate::engine::options::Options;
use crate::engine::variant::{VariantContext, VariantOutput, VariantSelection};
use crate::foundation::error::{KodamaError, KodamaResult};
use crate::foundation::hash::hash;
use crate::variants::faces::{FacesResult, faces};

/// Derive an avatar from the given options.
///
/// Resolves the variant module (the built-in faces style when none is
/// selected), validates every prop key against the module's declared set,
/// rejects top-level props mixed with a pre-configured variant, computes the
/// seed once, and delegates to the module's normalize/resolve steps.
///
/// The whole call is a pure function of its options: identical options
/// produce byte-identical SVG output.
///
/// ```
/// use kodama::Options;
///
/// let out = kodama::create_kodama(&Options::new("alice"))?;
/// assert_eq!(out.variant, "faces");
/// assert!(out.svg.starts_with("<svg"));
/// # Ok::<(), kodama::KodamaError>(())
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(name = %options.name))]
pub fn create_kodama(options: &Options) -> KodamaResult<VariantOutput> {
    let selection = options
        .variant
        .clone()
        .unwrap_or_else(|| VariantSelection::Bare(faces()));
    let module = selection.module();

    // Unknown keys are checked first, before any conflict or generation
    // work, so a typo always surfaces as the same error.
    for key in options.props.keys() {
        if !module.prop_keys().contains(&key.as_str()) {
            return Err(KodamaError::unknown_option(module.id(), key));
        }
    }

    let raw = match &selection {
        VariantSelection::Configured(configured) => {
            let mixed: Vec<&str> = module
                .prop_keys()
                .iter()
                .copied()
                .filter(|key| options.props.contains_key(*key))
                .collect();
            if !mixed.is_empty() {
                return Err(KodamaError::configured_conflict(module.id(), &mixed));
            }
            configured.defaults().clone()
        }
        VariantSelection::Bare(_) => options.props.clone(),
    };

    let seed = hash(&options.name);
    let ctx = VariantContext {
        name: options.name.clone(),
        size: options.effective_size(),
        seed,
        shape: options.shape,
    };
    tracing::debug!(variant = module.id(), seed, size = ctx.size, "resolving variant");

    let props = module.normalize_props(&raw, &ctx)?;
    module.resolve(&ctx, props)
}

/// [`create_kodama`] for the default faces variant, with a typed result.
pub fn create_faces(options: &Options) -> KodamaResult<FacesResult> {
    create_kodama(options)?.decode()
}

#[cfg(test)]
#[path = "../../tests/unit/engine/create.rs"]
mod tests;
