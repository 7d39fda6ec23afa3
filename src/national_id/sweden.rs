use crate::checksum::{push_digits, CheckDigitAlgorithm, SwedenPinChecksum};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::national_id::{calendar_date, capture_number, two_digit_year, Sex};
use chrono::{Datelike, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const COORDINATION_DAY_OFFSET: u32 = 60;

lazy_static! {
    // YYMMDD±NNNC, '+' marking someone at least 100 years old
    static ref PERSONAL_IDENTITY_NUMBER: Regex = Regex::new(
        r"^(?P<YY>[0-9]{2})(?P<MM>[0-9]{2})(?P<DD>[0-9]{2})(?P<separator>[-+])(?P<individual>[0-9]{3})(?P<checksum>[0-9])$"
    )
    .expect("valid personal identity number pattern");

    // YYYYMMDDNNNC, not an official format but widely used
    static ref FULL_PERSONAL_IDENTITY_NUMBER: Regex = Regex::new(
        r"^(?P<YYYY>[0-9]{4})(?P<MM>[0-9]{2})(?P<DD>[0-9]{2})(?P<individual>[0-9]{3})(?P<checksum>[0-9])$"
    )
    .expect("valid full personal identity number pattern");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwedenNinKind {
    /// Personnummer
    Personal,
    /// Samordningsnummer, day of month offset by 60
    Coordination,
}

/// A Swedish personal identity or coordination number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwedenNin {
    date: NaiveDate,
    individual_number: u16,
    kind: SwedenNinKind,
}

impl SwedenNin {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(raw, &ParserConfig::default())
    }

    /// Two-digit years are resolved relative to `config.today()`: the most recent year
    /// ending in those digits, or the one a century before it when the separator is '+'.
    pub fn parse_with_config(raw: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let (year, captures) = if let Some(captures) = PERSONAL_IDENTITY_NUMBER.captures(raw) {
            let yy = capture_number(&captures, "YY")? as i32;
            let is_centenarian = captures.name("separator").map(|m| m.as_str()) == Some("+");
            (
                resolve_year(yy, is_centenarian, config.today()),
                captures,
            )
        } else if let Some(captures) = FULL_PERSONAL_IDENTITY_NUMBER.captures(raw) {
            (capture_number(&captures, "YYYY")? as i32, captures)
        } else {
            return Err(ParseError::InvalidFormat);
        };

        let month = capture_number(&captures, "MM")?;
        let mut day = capture_number(&captures, "DD")?;
        let individual_number = capture_number(&captures, "individual")? as u16;
        let checksum = capture_number(&captures, "checksum")?;

        let kind = if is_coordination_day(day) {
            day -= COORDINATION_DAY_OFFSET;
            SwedenNinKind::Coordination
        } else {
            SwedenNinKind::Personal
        };

        let nin = SwedenNin {
            date: calendar_date(year, month, day)?,
            individual_number,
            kind,
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

    pub fn kind(&self) -> SwedenNinKind {
        self.kind
    }

    pub fn is_coordination_number(&self) -> bool {
        self.kind == SwedenNinKind::Coordination
    }

    pub fn sex(&self) -> Sex {
        Sex::from_parity(self.individual_number as u32)
    }

    /// Always `Some` for a parsed number.
    pub fn checksum(&self) -> Option<u32> {
        let mut payload = Vec::with_capacity(9);
        push_digits(&mut payload, two_digit_year(self.date), 2);
        push_digits(&mut payload, self.date.month(), 2);
        push_digits(&mut payload, self.encoded_day(), 2);
        push_digits(&mut payload, self.individual_number as u32, 3);
        SwedenPinChecksum.compute(&payload)
    }

    /// The 10-digit form, choosing '+' when the holder is at least 100 years old on `today`.
    pub fn display_relative_to(&self, today: NaiveDate) -> impl fmt::Display + '_ {
        ShortForm { nin: self, today }
    }

    /// The 12-digit `YYYYMMDDNNNC` form, which does not depend on the current date.
    pub fn long_form(&self) -> impl fmt::Display + '_ {
        LongForm { nin: self }
    }

    fn encoded_day(&self) -> u32 {
        match self.kind {
            SwedenNinKind::Personal => self.date.day(),
            SwedenNinKind::Coordination => self.date.day() + COORDINATION_DAY_OFFSET,
        }
    }

    fn separator(&self, today: NaiveDate) -> char {
        match today.years_since(self.date) {
            Some(age) if age >= 100 => '+',
            _ => '-',
        }
    }
}

fn resolve_year(two_digit_year: i32, is_centenarian: bool, today: NaiveDate) -> i32 {
    let current_year = today.year();
    let year = (current_year - two_digit_year) / 100 * 100 + two_digit_year;
    if is_centenarian {
        year - 100
    } else {
        year
    }
}

fn is_coordination_day(day: u32) -> bool {
    day > COORDINATION_DAY_OFFSET && day <= 31 + COORDINATION_DAY_OFFSET
}

struct ShortForm<'a> {
    nin: &'a SwedenNin,
    today: NaiveDate,
}

impl fmt::Display for ShortForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nin = self.nin;
        let checksum = nin.checksum().ok_or(fmt::Error)?;
        write!(
            f,
            "{:02}{:02}{:02}{}{:03}{}",
            two_digit_year(nin.date),
            nin.date.month(),
            nin.encoded_day(),
            nin.separator(self.today),
            nin.individual_number,
            checksum
        )
    }
}

struct LongForm<'a> {
    nin: &'a SwedenNin,
}

impl fmt::Display for LongForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nin = self.nin;
        let checksum = nin.checksum().ok_or(fmt::Error)?;
        write!(
            f,
            "{:04}{:02}{:02}{:03}{}",
            nin.date.year(),
            nin.date.month(),
            nin.encoded_day(),
            nin.individual_number,
            checksum
        )
    }
}

impl fmt::Display for SwedenNin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_relative_to(Utc::now().date_naive()).fmt(f)
    }
}

impl FromStr for SwedenNin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwedenNin::parse(s)
    }
}
