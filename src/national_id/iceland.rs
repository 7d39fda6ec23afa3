use crate::checksum::{push_digits, CheckDigitAlgorithm, IcelandKennitalaChecksum};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::national_id::{calendar_date, capture_number, two_digit_year};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref KENNITALA: Regex = Regex::new(
        r"^(?P<DD>[0-9]{2})(?P<MM>[0-9]{2})(?P<YY>[0-9]{2})-?(?P<individual>[0-9]{2})(?P<checksum>[0-9])(?P<century>[0-9])$"
    )
    .expect("valid kennitala pattern");
}

/// An Icelandic kennitala, `DDMMYY-NNCK` where `K` is the century digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IcelandNin {
    date: NaiveDate,
    individual_number: u16,
}

impl IcelandNin {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(raw, &ParserConfig::default())
    }

    pub fn parse_with_config(raw: &str, _config: &ParserConfig) -> Result<Self, ParseError> {
        let captures = KENNITALA.captures(raw).ok_or(ParseError::InvalidFormat)?;

        let day = capture_number(&captures, "DD")?;
        let month = capture_number(&captures, "MM")?;
        let yy = capture_number(&captures, "YY")?;
        let individual_number = capture_number(&captures, "individual")? as u16;
        let checksum = capture_number(&captures, "checksum")?;
        let century = match capture_number(&captures, "century")? {
            8 => 1800,
            9 => 1900,
            0 => 2000,
            _ => return Err(ParseError::InvalidFormat),
        };

        let nin = IcelandNin {
            date: calendar_date(century + yy as i32, month, day)?,
            individual_number,
        };

        if nin.checksum() != Some(checksum) {
            return Err(ParseError::InvalidChecksum);
        }

        Ok(nin)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn individual_number(&self) -> u16 {
        self.individual_number
    }

    /// Last digit of the number, derived from the birth year.
    pub fn century_digit(&self) -> u32 {
        (self.date.year().div_euclid(100) % 10) as u32
    }

    pub fn checksum(&self) -> Option<u32> {
        let mut payload = Vec::with_capacity(8);
        push_digits(&mut payload, self.date.day(), 2);
        push_digits(&mut payload, self.date.month(), 2);
        push_digits(&mut payload, two_digit_year(self.date), 2);
        push_digits(&mut payload, self.individual_number as u32, 2);
        IcelandKennitalaChecksum.compute(&payload)
    }
}

impl fmt::Display for IcelandNin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checksum = self.checksum().ok_or(fmt::Error)?;
        write!(
            f,
            "{:02}{:02}{:02}{:02}{}{}",
            self.date.day(),
            self.date.month(),
            two_digit_year(self.date),
            self.individual_number,
            checksum,
            self.century_digit()
        )
    }
}

impl FromStr for IcelandNin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IcelandNin::parse(s)
    }
}
