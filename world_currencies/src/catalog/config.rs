//! Catalog loading: parsing, normalization, and the bundled dataset.
//!
//! The dataset is a JSON object mapping ISO 4217 codes to currency records
//! (see [`crate::models::currency::CurrencyRecord`]).
//!
//! Key behaviors:
//! - Normalization enforces upper-case, trimmed currency codes and rejects
//!   codes that collide after normalization.
//! - Each record's `iso.code` must agree with the key it is stored under.
//! - Country codes are upper-cased and de-duplicated while preserving order.
//!
//! Entrypoints:
//! - Parse + normalize from a JSON string: [`load_catalog_str`]
//! - Parse + normalize from a file path: [`load_catalog_path`]
//! - The dataset compiled into the crate: [`Catalog::bundled`]
//! - Normalization alone: [`normalize_catalog`]

use std::{collections::HashSet, mem, path::Path};

use anyhow::{Context, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::currency::CurrencyRecord;

/// The dataset shipped with the crate.
const BUNDLED_DATASET: &str = include_str!("../../data/world-currencies.json");

/// Summary of changes performed during normalization.
///
/// All counters are additive for the processed catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    /// Number of currency keys that changed when upper-casing/trimming.
    pub codes_renamed: usize,
    /// Number of `iso.code` values that changed when upper-casing/trimming.
    pub iso_codes_normalized: usize,
    /// Count of removed empty or duplicate country codes.
    pub countries_deduped: usize,
}

impl NormalizationReport {
    /// True when normalization left the input untouched.
    pub fn is_noop(&self) -> bool {
        self == &Self::default()
    }
}

/// Normalize a catalog in-place.
///
/// What normalization does:
/// - Upper-case + trim currency keys; reject empty keys and duplicates
/// - Upper-case + trim `iso.code` and require it to equal the key
/// - Upper-case + trim `countries`, dropping empty and repeated entries while
///   keeping the first occurrence order
///
/// Returns a [`NormalizationReport`] detailing the changes made.
///
/// On error the catalog is left empty; callers must discard it.
pub fn normalize_catalog(cat: &mut Catalog) -> anyhow::Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    let old = mem::take(&mut cat.currencies);
    let mut rebuilt: IndexMap<String, CurrencyRecord> = IndexMap::with_capacity(old.len());

    for (raw_code, mut record) in old {
        let code = raw_code.trim().to_uppercase();
        if code.is_empty() {
            bail!("currency code cannot be empty after trimming");
        }
        if code != raw_code {
            report.codes_renamed += 1;
        }
        if rebuilt.contains_key(&code) {
            bail!("duplicate currency code after normalization: {code}");
        }

        let iso_code = record.iso.code.trim().to_uppercase();
        if iso_code != record.iso.code {
            report.iso_codes_normalized += 1;
            record.iso.code = iso_code;
        }
        if record.iso.code != code {
            bail!(
                "currency {code}: iso.code '{}' does not match its key",
                record.iso.code
            );
        }

        // --- normalize countries (dedupe, preserve order)
        let before_len = record.countries.len();
        let mut seen = HashSet::new();
        let mut countries = Vec::with_capacity(before_len);
        for country in mem::take(&mut record.countries) {
            let country = country.trim().to_uppercase();
            if !country.is_empty() && seen.insert(country.clone()) {
                countries.push(country);
            }
        }
        report.countries_deduped += before_len - countries.len();
        record.countries = countries;

        rebuilt.insert(code, record);
    }

    cat.currencies = rebuilt;
    Ok(report)
}

/// Parse and normalize a catalog from a JSON string.
///
/// Errors:
/// - JSON parse failures (including records missing required fields)
/// - Normalization errors (see [`normalize_catalog`])
pub fn load_catalog_str(json: &str) -> anyhow::Result<Catalog> {
    let currencies: IndexMap<String, CurrencyRecord> =
        serde_json::from_str(json).context("failed to parse currency dataset")?;
    let mut cat = Catalog { currencies };
    let report = normalize_catalog(&mut cat).context("normalize_catalog failed")?;
    if report.is_noop() {
        debug!(currencies = cat.len(), "currency dataset parsed");
    } else {
        warn!(?report, currencies = cat.len(), "currency dataset required normalization");
    }
    Ok(cat)
}

/// Read a currency dataset from disk, parse, and normalize it.
///
/// See [`load_catalog_str`] for details on parsing and normalization.
pub fn load_catalog_path(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading currency dataset");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read currency dataset {}", path.display()))?;
    load_catalog_str(&text).with_context(|| format!("load currency dataset {}", path.display()))
}

impl Catalog {
    /// The dataset compiled into the crate.
    pub fn bundled() -> anyhow::Result<Catalog> {
        load_catalog_str(BUNDLED_DATASET).context("bundled currency dataset is invalid")
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let currencies = IndexMap::<String, CurrencyRecord>::deserialize(deserializer)?;
        let mut cat = Catalog { currencies };
        normalize_catalog(&mut cat).map_err(|e| de::Error::custom(format!("{e:#}")))?;
        Ok(cat)
    }
}
