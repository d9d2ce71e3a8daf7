//! Reference data for world currencies.
//!
//! The crate bundles a dataset of ISO 4217 currencies (names, symbols,
//! precision, countries, denominations) and exposes read-only queries over it.
//!
//! Two ways in:
//! - explicit: load a [`Catalog`] (bundled, from a file, or from a string)
//!   and call its methods;
//! - implicit: the free functions below, which query the process-wide
//!   [`default_catalog`].
//!
//! ```no_run
//! use world_currencies::{Currency, get_currencies_by_country};
//!
//! assert!(get_currencies_by_country("us").contains(&"USD"));
//! let gbp = Currency::new("gbp").unwrap();
//! assert_eq!(gbp.to_string(), "British Pound (GBP)");
//! ```

#![deny(missing_docs)]

pub mod catalog;
pub mod currency;
pub mod errors;
pub mod models;

use indexmap::IndexMap;

pub use catalog::{Catalog, DATA_ENV_VAR, default_catalog, load_default_catalog};
pub use currency::Currency;
pub use errors::CurrencyError;
pub use models::currency::CurrencyRecord;

/// Case-insensitive lookup by ISO 4217 code in the default catalog.
pub fn get_currency(code: &str) -> Option<&'static CurrencyRecord> {
    default_catalog().get_currency(code)
}

/// Every currency in the default catalog, keyed by code.
pub fn get_all_currencies() -> &'static IndexMap<String, CurrencyRecord> {
    default_catalog().get_all_currencies()
}

/// Codes of the currencies used in a country (ISO 3166-1 alpha-2, any case).
pub fn get_currencies_by_country(country_code: &str) -> Vec<&'static str> {
    default_catalog().get_currencies_by_country(country_code)
}

/// Currencies whose symbol or native symbol is exactly `symbol`.
pub fn get_currency_by_symbol(symbol: &str) -> Vec<&'static CurrencyRecord> {
    default_catalog().get_currency_by_symbol(symbol)
}

/// Currencies with `digits` minor-unit decimal places.
pub fn get_currencies_by_decimal_digits(digits: u32) -> Vec<&'static CurrencyRecord> {
    default_catalog().get_currencies_by_decimal_digits(digits)
}

/// All codes in the default catalog, in dataset order.
pub fn get_currency_codes() -> Vec<&'static str> {
    default_catalog().get_currency_codes()
}

/// Case-insensitive name search.
pub fn search_currencies(search_term: &str) -> Vec<&'static CurrencyRecord> {
    default_catalog().search_currencies(search_term)
}

/// Whether the default catalog knows `code` (any case).
pub fn currency_exists(code: &str) -> bool {
    default_catalog().currency_exists(code)
}

/// Lookup by numeric ISO 4217 code.
pub fn get_currency_by_iso_number(number: &str) -> Option<&'static CurrencyRecord> {
    default_catalog().get_currency_by_iso_number(number)
}

/// Currency codes for several countries at once.
pub fn get_currencies_for_countries<I, S>(country_codes: I) -> IndexMap<String, Vec<&'static str>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_catalog().get_currencies_for_countries(country_codes)
}
