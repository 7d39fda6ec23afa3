use strum::IntoStaticStr;
use thiserror::Error;

/// Reasons a national identification number can be rejected.
///
/// Parsing stops at the first failing stage, so a string with both a bad date and a bad
/// checksum reports `InvalidDate`.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParseError {
    #[error("'{0}' is not an ISO 3166-1 alpha-2 country code")]
    InvalidCountryCode(String),

    #[error("national identification numbers from '{0}' are not supported")]
    UnsupportedCountry(String),

    #[error("Invalid format")]
    InvalidFormat,

    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Individual number {0:03} is out of range")]
    InvalidIndividualNumber(u16),

    #[error("Invalid checksum")]
    InvalidChecksum,
}

impl ParseError {
    /// Stable snake_case name of the error kind, without any of the input.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}
