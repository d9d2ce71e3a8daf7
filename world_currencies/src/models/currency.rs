//! Typed shape of one entry in the currency dataset.
//!
//! The dataset is a JSON object keyed by ISO 4217 code; every value
//! deserializes into a [`CurrencyRecord`]. Keys in the JSON are camelCase
//! (`nameNative`, `decimalDigits`, ...), fields here are snake_case.
//!
//! Example (no_run)
//! ```no_run
//! use world_currencies::models::currency::CurrencyRecord;
//!
//! let json = std::fs::read_to_string("usd.json").unwrap();
//! let usd: CurrencyRecord = serde_json::from_str(&json).unwrap();
//! assert_eq!(usd.decimal_digits, 2);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ----------------------- record -------------------------

/// Reference data for a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// English display name, e.g. "US Dollar".
    pub name: String,
    /// Name in the currency's main local language.
    pub name_native: String,
    /// English plural, e.g. "US dollars".
    pub name_plural: String,
    /// Plural in the local language.
    pub name_plural_native: String,
    /// ISO 4217 identifiers. `iso.code` always equals the catalog key.
    pub iso: Iso,
    /// International symbol, e.g. "CA$". Not unique across currencies.
    pub symbol: String,
    /// Symbol as written locally, e.g. "$".
    pub symbol_native: String,
    /// Number of minor-unit decimal places.
    pub decimal_digits: u32,
    /// Rounding increment for cash amounts (0 when none applies).
    pub rounding: f64,
    /// Country whose flag represents the currency; `None` for supranational ones.
    #[serde(default)]
    pub flag_code: Option<String>,
    /// Major and minor denomination units.
    pub units: Units,
    /// Banknotes in circulation.
    #[serde(default)]
    pub banknotes: Denominations,
    /// Coins in circulation.
    #[serde(default)]
    pub coins: Denominations,
    /// ISO 3166-1 alpha-2 codes of the countries using this currency.
    ///
    /// Normalized to unique upper-case values, dataset order preserved.
    #[serde(default)]
    pub countries: Vec<String>,
    /// Dataset keys not covered by the typed fields above.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

// ----------------------- iso ----------------------------

/// ISO 4217 alphabetic and numeric identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso {
    /// Alphabetic code, e.g. "EUR".
    pub code: String,
    /// Three-digit numeric code as a string, e.g. "978". Empty when unassigned.
    #[serde(default)]
    pub number: String,
}

// ----------------------- units --------------------------

/// The two denomination units of a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    /// Main unit (dollar, euro, yen).
    pub major: MajorUnit,
    /// Subdivision (cent, penny, sen).
    pub minor: MinorUnit,
}

/// Major unit name and symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorUnit {
    /// Singular unit name, e.g. "dollar".
    pub name: String,
    /// Symbol of the unit, usually the currency symbol.
    pub symbol: String,
}

/// Minor unit name, symbol and its value in major units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorUnit {
    /// Singular unit name, e.g. "cent". Empty when the currency has none.
    pub name: String,
    /// Symbol of the unit, e.g. "¢". May be empty.
    pub symbol: String,
    /// Value of one minor unit expressed in major units, e.g. 0.01.
    pub major_value: f64,
}

// ------------------- banknotes / coins ------------------

/// Face values in circulation, split by how often they are seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denominations {
    /// Commonly used face values.
    #[serde(default)]
    pub frequent: Vec<String>,
    /// Legal tender but rarely used.
    #[serde(default)]
    pub rare: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAD: &str = r#"{
        "name": "Canadian Dollar",
        "nameNative": "Canadian Dollar",
        "namePlural": "Canadian dollars",
        "namePluralNative": "Canadian Dollars",
        "iso": { "code": "CAD", "number": "124" },
        "symbol": "CA$",
        "symbolNative": "$",
        "decimalDigits": 2,
        "rounding": 0,
        "flagCode": "CA",
        "units": {
            "major": { "name": "dollar", "symbol": "$" },
            "minor": { "name": "cent", "symbol": "¢", "majorValue": 0.01 }
        },
        "banknotes": { "frequent": ["$5", "$10"], "rare": [] },
        "coins": { "frequent": ["5¢"], "rare": ["50¢"] },
        "countries": ["CA"],
        "region": "North America"
    }"#;

    #[test]
    fn deserializes_camel_case_fields() {
        let cad: CurrencyRecord = serde_json::from_str(CAD).unwrap();
        assert_eq!(cad.name_plural_native, "Canadian Dollars");
        assert_eq!(cad.symbol_native, "$");
        assert_eq!(cad.decimal_digits, 2);
        assert_eq!(cad.flag_code.as_deref(), Some("CA"));
        assert_eq!(cad.units.minor.major_value, 0.01);
        assert_eq!(cad.coins.rare, vec!["50¢"]);
        assert_eq!(cad.iso.number, "124");
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let cad: CurrencyRecord = serde_json::from_str(CAD).unwrap();
        assert_eq!(cad.extra.len(), 1);
        assert_eq!(cad.extra["region"], Value::from("North America"));

        let back = serde_json::to_value(&cad).unwrap();
        assert_eq!(back["region"], "North America");
        assert_eq!(back["nameNative"], "Canadian Dollar");
    }

    #[test]
    fn optional_sections_default() {
        let minimal = r#"{
            "name": "Test", "nameNative": "Test", "namePlural": "tests",
            "namePluralNative": "Tests", "iso": { "code": "TST" },
            "symbol": "T", "symbolNative": "T", "decimalDigits": 0, "rounding": 0,
            "units": {
                "major": { "name": "test", "symbol": "T" },
                "minor": { "name": "", "symbol": "", "majorValue": 0.01 }
            }
        }"#;
        let rec: CurrencyRecord = serde_json::from_str(minimal).unwrap();
        assert_eq!(rec.flag_code, None);
        assert!(rec.countries.is_empty());
        assert_eq!(rec.banknotes, Denominations::default());
        assert_eq!(rec.iso.number, "");
        assert!(rec.extra.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = serde_json::from_str::<CurrencyRecord>(r#"{ "name": "Broken" }"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
