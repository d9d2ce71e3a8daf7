//! Error types for the currency wrapper.

use thiserror::Error;

/// Errors raised when building a [`crate::Currency`].
///
/// Catalog queries never fail; a missing code there is `None` or an empty
/// list. Only the wrapper insists that the currency exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The code is not present in the catalog. Holds the code as given.
    #[error("Currency code '{code}' not found")]
    NotFound {
        /// Code passed by the caller, before normalization.
        code: String,
    },
}
