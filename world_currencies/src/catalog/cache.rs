//! Process-wide default catalog.
//!
//! Loaded on first access and never replaced. The source is the file named
//! by [`DATA_ENV_VAR`] when that variable is set, otherwise the dataset
//! compiled into the crate.
//!
//! A dataset that cannot be loaded is unrecoverable: the first caller of
//! [`default_catalog`] panics with the load error. Callers that want to
//! handle the failure use [`load_default_catalog`] and keep the result
//! themselves.

use once_cell::sync::Lazy;
use shared_utils::config::get_env_path;
use tracing::info;

use crate::catalog::{
    Catalog,
    config::load_catalog_path,
};

/// Environment variable pointing at an alternative dataset file.
pub const DATA_ENV_VAR: &str = "WORLD_CURRENCIES_DATA";

static DEFAULT: Lazy<Catalog> = Lazy::new(|| match load_default_catalog() {
    Ok(cat) => cat,
    Err(e) => panic!("currency catalog could not be loaded: {e:#}"),
});

/// The shared catalog used by the crate-level query functions and
/// [`crate::Currency::new`].
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT
}

/// Resolve and load the default dataset without caching it.
///
/// Errors:
/// - [`DATA_ENV_VAR`] set to a non-unicode value
/// - the override file is missing or malformed
pub fn load_default_catalog() -> anyhow::Result<Catalog> {
    let cat = match get_env_path(DATA_ENV_VAR)? {
        Some(path) => {
            info!(path = %path.display(), "loading currency dataset override");
            load_catalog_path(path)?
        }
        None => Catalog::bundled()?,
    };
    info!(currencies = cat.len(), "currency catalog ready");
    Ok(cat)
}
