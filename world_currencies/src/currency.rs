//! Object-style view over a single catalog entry.
//!
//! A [`Currency`] can only be built for a code that exists, so holding one
//! is proof that the currency is real. It owns a copy of its record and
//! exposes every field through typed accessors.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use serde_json::Value;

use crate::catalog::{Catalog, default_catalog};
use crate::errors::CurrencyError;
use crate::models::currency::{CurrencyRecord, Denominations, Iso, Units};

/// A currency known to the catalog.
#[derive(Clone, PartialEq)]
pub struct Currency {
    code: String,
    record: CurrencyRecord,
}

impl Currency {
    /// Look `code` up (any case) in the default catalog.
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        Self::from_catalog(default_catalog(), code)
    }

    /// Look `code` up (any case) in an explicit catalog.
    pub fn from_catalog(catalog: &Catalog, code: &str) -> Result<Self, CurrencyError> {
        let normalized = code.to_uppercase();
        let record = catalog
            .get_currency(&normalized)
            .ok_or_else(|| CurrencyError::NotFound { code: code.to_string() })?;
        Ok(Self {
            code: normalized,
            record: record.clone(),
        })
    }

    /// Upper-case ISO 4217 code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The underlying dataset record.
    pub fn record(&self) -> &CurrencyRecord {
        &self.record
    }

    /// English display name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Name in the local language.
    pub fn name_native(&self) -> &str {
        &self.record.name_native
    }

    /// English plural name.
    pub fn name_plural(&self) -> &str {
        &self.record.name_plural
    }

    /// Plural name in the local language.
    pub fn name_plural_native(&self) -> &str {
        &self.record.name_plural_native
    }

    /// International symbol.
    pub fn symbol(&self) -> &str {
        &self.record.symbol
    }

    /// Symbol as written locally.
    pub fn symbol_native(&self) -> &str {
        &self.record.symbol_native
    }

    /// Minor-unit decimal places.
    pub fn decimal_digits(&self) -> u32 {
        self.record.decimal_digits
    }

    /// Cash rounding increment.
    pub fn rounding(&self) -> f64 {
        self.record.rounding
    }

    /// Country of the representative flag, if any.
    pub fn flag_code(&self) -> Option<&str> {
        self.record.flag_code.as_deref()
    }

    /// ISO 4217 alphabetic and numeric codes.
    pub fn iso(&self) -> &Iso {
        &self.record.iso
    }

    /// Numeric ISO 4217 code, e.g. "840". Empty when unassigned.
    pub fn iso_number(&self) -> &str {
        &self.record.iso.number
    }

    /// Major and minor units.
    pub fn units(&self) -> &Units {
        &self.record.units
    }

    /// Banknotes in circulation.
    pub fn banknotes(&self) -> &Denominations {
        &self.record.banknotes
    }

    /// Coins in circulation.
    pub fn coins(&self) -> &Denominations {
        &self.record.coins
    }

    /// ISO 3166-1 alpha-2 codes of the countries using this currency.
    pub fn countries(&self) -> &[String] {
        &self.record.countries
    }

    /// Dataset keys without a typed accessor.
    pub fn extra(&self) -> &IndexMap<String, Value> {
        &self.record.extra
    }

    /// Case-insensitive check against the record's countries.
    pub fn is_used_in_country(&self, country_code: &str) -> bool {
        let country = country_code.to_uppercase();
        self.record.countries.contains(&country)
    }

    /// Every field under its dataset key, plus `"code"`.
    pub fn to_dict(&self) -> IndexMap<String, Value> {
        let mut dict = IndexMap::new();
        dict.insert("code".to_string(), Value::from(self.code.as_str()));
        // String-keyed structs always serialize to a JSON object.
        if let Ok(Value::Object(fields)) = serde_json::to_value(&self.record) {
            dict.extend(fields);
        }
        dict
    }

    /// `"<symbol> <amount>"` with `decimal_digits` places, `,` as the
    /// thousands separator and `.` as the decimal point.
    ///
    /// Rounds half away from zero on the decimal value as written, so
    /// `1.005` with two places is `1.01`. The layout is fixed and does not
    /// follow any locale. Non-finite amounts are not formatted: NaN and the
    /// infinities come out as `NaN`, `inf` and `-inf` after the symbol.
    pub fn format_amount(&self, amount: f64, use_native_symbol: bool) -> String {
        let symbol = if use_native_symbol {
            &self.record.symbol_native
        } else {
            &self.record.symbol
        };
        format!("{symbol} {}", format_number(amount, self.record.decimal_digits))
    }
}

fn format_number(amount: f64, digits: u32) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = match to_decimal(amount) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.abs().to_string()
        }
        // outside Decimal's range; fractional digits carry no information there
        None => format!("{:.prec$}", amount.abs(), prec = digits as usize),
    };
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// The decimal the caller wrote, i.e. the shortest representation that
/// round-trips to `amount`, rather than the binary value's full expansion.
fn to_decimal(amount: f64) -> Option<Decimal> {
    Decimal::from_str(&amount.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(amount))
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.record.name, self.code)
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Currency")
            .field("code", &self.code)
            .field("name", &self.record.name)
            .finish()
    }
}
