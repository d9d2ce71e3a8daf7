#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// Three hand-written records, one of them with lower-case keys and an extra
/// field, so loaders have something to normalize.
pub const FIXTURE_JSON: &str = r#"{
    "usd": {
        "name": "US Dollar", "nameNative": "US Dollar",
        "namePlural": "US dollars", "namePluralNative": "US Dollars",
        "iso": { "code": "usd", "number": "840" },
        "symbol": "$", "symbolNative": "$", "decimalDigits": 2, "rounding": 0,
        "flagCode": "US",
        "units": {
            "major": { "name": "dollar", "symbol": "$" },
            "minor": { "name": "cent", "symbol": "¢", "majorValue": 0.01 }
        },
        "banknotes": { "frequent": ["$1", "$5", "$10", "$20", "$50", "$100"], "rare": ["$2"] },
        "coins": { "frequent": ["1¢", "5¢", "10¢", "25¢"], "rare": ["50¢", "$1"] },
        "countries": ["US", "EC", "SV"],
        "status": "fixture"
    },
    "EUR": {
        "name": "Euro", "nameNative": "Euro",
        "namePlural": "euros", "namePluralNative": "Euros",
        "iso": { "code": "EUR", "number": "978" },
        "symbol": "€", "symbolNative": "€", "decimalDigits": 2, "rounding": 0,
        "flagCode": null,
        "units": {
            "major": { "name": "euro", "symbol": "€" },
            "minor": { "name": "cent", "symbol": "c", "majorValue": 0.01 }
        },
        "countries": ["DE", "FR", "IT"]
    },
    "JPY": {
        "name": "Japanese Yen", "nameNative": "日本円",
        "namePlural": "Japanese yen", "namePluralNative": "日本円",
        "iso": { "code": "JPY", "number": "392" },
        "symbol": "¥", "symbolNative": "￥", "decimalDigits": 0, "rounding": 0,
        "flagCode": "JP",
        "units": {
            "major": { "name": "yen", "symbol": "¥" },
            "minor": { "name": "sen", "symbol": "sen", "majorValue": 0.01 }
        },
        "countries": ["JP"]
    }
}"#;

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write dataset");
    file.flush().expect("flush dataset");
    file
}

pub fn record_codes<'a>(records: &[&'a world_currencies::CurrencyRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.iso.code.as_str()).collect()
}
