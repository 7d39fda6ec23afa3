use crate::checksum::{push_digits, CheckDigitAlgorithm, DenmarkCprChecksum};
use crate::config::{ParserConfig, DENMARK_CHECKSUM_CUTOVER};
use crate::error::ParseError;
use crate::national_id::{calendar_date, capture_number, two_digit_year, Sex};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    // DDMMYY-SSSS, the dash being optional. The serial number is made of the century
    // digit, two unique digits and the check digit.
    static ref CPR_NUMBER: Regex = Regex::new(
        r"^(?P<DD>[0-9]{2})(?P<MM>[0-9]{2})(?P<YY>[0-9]{2})-?(?P<serial>(?P<century>[0-9])(?P<unique>[0-9]{2})(?P<checksum>[0-9]))$"
    )
    .expect("valid CPR number pattern");
}

/// A Danish CPR number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DenmarkNin {
    date: NaiveDate,
    serial_number: u16,
}

impl DenmarkNin {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(raw, &ParserConfig::default())
    }

    /// Whether the check digit is verified depends on `config.denmark_checksum`.
    pub fn parse_with_config(raw: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let captures = CPR_NUMBER.captures(raw).ok_or(ParseError::InvalidFormat)?;

        let day = capture_number(&captures, "DD")?;
        let month = capture_number(&captures, "MM")?;
        let yy = capture_number(&captures, "YY")?;
        let century_digit = capture_number(&captures, "century")?;
        let serial_number = capture_number(&captures, "serial")? as u16;

        let year = resolve_century(century_digit, yy) + yy as i32;

        let nin = DenmarkNin {
            date: calendar_date(year, month, day)?,
            serial_number,
        };

        if config.denmark_checksum.should_verify(nin.date) {
            let checksum = capture_number(&captures, "checksum")?;
            if nin.expected_checksum() != Some(checksum) {
                return Err(ParseError::InvalidChecksum);
            }
        }

        Ok(nin)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The four digits after the date: century digit, two unique digits and check digit.
    pub fn serial_number(&self) -> u16 {
        self.serial_number
    }

    pub fn century_digit(&self) -> u32 {
        self.serial_number as u32 / 1000
    }

    pub fn sex(&self) -> Sex {
        Sex::from_parity(self.serial_number as u32)
    }

    /// Numbers issued before 2007-10-01 satisfy the historical modulus check.
    pub fn has_verifiable_checksum(&self) -> bool {
        self.date < DENMARK_CHECKSUM_CUTOVER
    }

    /// The check digit the historical algorithm derives from the date and serial number.
    /// It may differ from the last serial digit for numbers issued after the cutover.
    pub fn expected_checksum(&self) -> Option<u32> {
        let unique_numbers = self.serial_number as u32 / 10 % 100;
        let mut payload = Vec::with_capacity(9);
        push_digits(&mut payload, self.date.day(), 2);
        push_digits(&mut payload, self.date.month(), 2);
        push_digits(&mut payload, two_digit_year(self.date), 2);
        push_digits(&mut payload, self.century_digit(), 1);
        push_digits(&mut payload, unique_numbers, 2);
        DenmarkCprChecksum.compute(&payload)
    }
}

/*
 * The century digit and the two-digit year together give the century:
 * - 0–3: 1900s
 * - 4 and 9: 2000s for years 00–36, 1900s otherwise
 * - 5–8: 2000s for years 00–57, 1800s otherwise
 */
fn resolve_century(century_digit: u32, two_digit_year: u32) -> i32 {
    match century_digit {
        0..=3 => 1900,
        4 | 9 if two_digit_year <= 36 => 2000,
        4 | 9 => 1900,
        _ if two_digit_year <= 57 => 2000,
        _ => 1800,
    }
}

impl fmt::Display for DenmarkNin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}-{:04}",
            self.date.day(),
            self.date.month(),
            two_digit_year(self.date),
            self.serial_number
        )
    }
}

impl FromStr for DenmarkNin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DenmarkNin::parse(s)
    }
}
