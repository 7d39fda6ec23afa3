use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The countries whose national identification numbers can be parsed.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, Display, AsRefStr,
)]
pub enum Country {
    #[serde(rename = "SE")]
    #[strum(serialize = "SE")]
    Sweden,
    #[serde(rename = "NO")]
    #[strum(serialize = "NO")]
    Norway,
    #[serde(rename = "DK")]
    #[strum(serialize = "DK")]
    Denmark,
    #[serde(rename = "FI")]
    #[strum(serialize = "FI")]
    Finland,
    #[serde(rename = "IS")]
    #[strum(serialize = "IS")]
    Iceland,
}

impl Country {
    /// Uppercase ISO 3166-1 alpha-2 code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Sweden => "SE",
            Country::Norway => "NO",
            Country::Denmark => "DK",
            Country::Finland => "FI",
            Country::Iceland => "IS",
        }
    }
}

/// Answers whether a string is a recognized country code, independent of which countries
/// have a parser.
pub trait CountryCodeValidator: Send + Sync {
    fn is_valid_country_code(&self, code: &str) -> bool;
}

/// Validates against the officially assigned ISO 3166-1 alpha-2 codes. Lowercase codes
/// are rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Iso3166Alpha2;

impl CountryCodeValidator for Iso3166Alpha2 {
    fn is_valid_country_code(&self, code: &str) -> bool {
        is_valid_country_code(code)
    }
}

pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODES.binary_search(&code).is_ok()
}

// Sorted for binary search
static COUNTRY_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];
