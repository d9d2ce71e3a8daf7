//! Catalog subsystem.
//!
//! A [`Catalog`] is the complete, immutable set of currency records keyed by
//! ISO 4217 code, in dataset order. It is built once by the loaders in
//! [`crate::catalog::config`] and only read afterwards, so a shared reference
//! can be handed to any number of threads.
//!
//! Every query is a linear scan; the dataset is a few hundred entries at most.
//! Misses are never errors: lookups return `None`, filters return an empty
//! `Vec`.

mod cache;
pub mod config;

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::currency::CurrencyRecord;

pub use cache::{DATA_ENV_VAR, default_catalog, load_default_catalog};

/// Currency records keyed by upper-case ISO 4217 code.
///
/// Deserializing a `Catalog` runs [`config::normalize_catalog`], so a value
/// of this type always has trimmed upper-case keys that match `iso.code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    currencies: IndexMap<String, CurrencyRecord>,
}

impl Catalog {
    /// Number of currencies in the catalog.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// True when the catalog holds no currencies.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Case-insensitive lookup by ISO 4217 code.
    pub fn get_currency(&self, code: &str) -> Option<&CurrencyRecord> {
        self.currencies.get(&code.to_uppercase())
    }

    /// The full mapping, in dataset order.
    pub fn get_all_currencies(&self) -> &IndexMap<String, CurrencyRecord> {
        &self.currencies
    }

    /// Codes of every currency used in `country_code` (ISO 3166-1 alpha-2,
    /// any case).
    ///
    /// A country can legitimately map to several currencies, so all matches
    /// are returned.
    pub fn get_currencies_by_country(&self, country_code: &str) -> Vec<&str> {
        let country = country_code.to_uppercase();
        self.currencies
            .iter()
            .filter(|(_, rec)| rec.countries.contains(&country))
            .map(|(code, _)| code.as_str())
            .collect()
    }

    /// Currencies whose `symbol` or `symbol_native` is exactly `symbol`.
    ///
    /// The comparison is case-sensitive and does no normalization.
    pub fn get_currency_by_symbol(&self, symbol: &str) -> Vec<&CurrencyRecord> {
        self.currencies
            .values()
            .filter(|rec| rec.symbol == symbol || rec.symbol_native == symbol)
            .collect()
    }

    /// Currencies with exactly `digits` minor-unit decimal places.
    pub fn get_currencies_by_decimal_digits(&self, digits: u32) -> Vec<&CurrencyRecord> {
        self.currencies
            .values()
            .filter(|rec| rec.decimal_digits == digits)
            .collect()
    }

    /// All codes in dataset order.
    pub fn get_currency_codes(&self) -> Vec<&str> {
        self.currencies.keys().map(String::as_str).collect()
    }

    /// Case-insensitive substring search over the English and native names,
    /// singular and plural.
    pub fn search_currencies(&self, search_term: &str) -> Vec<&CurrencyRecord> {
        let term = search_term.to_lowercase();
        self.currencies
            .values()
            .filter(|rec| {
                [
                    &rec.name,
                    &rec.name_native,
                    &rec.name_plural,
                    &rec.name_plural_native,
                ]
                .iter()
                .any(|name| name.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Case-insensitive membership test.
    pub fn currency_exists(&self, code: &str) -> bool {
        self.currencies.contains_key(&code.to_uppercase())
    }

    /// First currency whose numeric ISO 4217 code is `number` (e.g. "978").
    ///
    /// Some currencies have no numeric code assigned, so an empty or blank
    /// `number` never matches.
    pub fn get_currency_by_iso_number(&self, number: &str) -> Option<&CurrencyRecord> {
        if number.trim().is_empty() {
            return None;
        }
        self.currencies.values().find(|rec| rec.iso.number == number)
    }

    /// [`Catalog::get_currencies_by_country`] for several countries at once.
    ///
    /// Keys are the upper-cased country codes in request order; a country
    /// requested twice appears once. Unknown countries map to an empty list.
    pub fn get_currencies_for_countries<I, S>(&self, country_codes: I) -> IndexMap<String, Vec<&str>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = IndexMap::new();
        for country in country_codes {
            let country = country.as_ref().to_uppercase();
            if !out.contains_key(&country) {
                let codes = self.get_currencies_by_country(&country);
                out.insert(country, codes);
            }
        }
        out
    }
}
