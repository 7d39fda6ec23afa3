use crate::checksum::{push_digits, CheckDigitAlgorithm, NorwayBirthNumberChecksum};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::national_id::{calendar_date, capture_number, two_digit_year, Sex};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const D_NUMBER_DAYS: RangeInclusive<u32> = 41..=71;
const H_NUMBER_MONTHS: RangeInclusive<u32> = 41..=52;
const OFFSET: u32 = 40;

lazy_static! {
    static ref BIRTH_NUMBER: Regex = Regex::new(
        r"^(?P<DD>[0-9]{2})(?P<MM>[0-9]{2})(?P<YY>[0-9]{2})(?P<individual>[0-9]{3})(?P<checksum>[0-9]{2})$"
    )
    .expect("valid birth number pattern");
}

/*
 * Century of a two-digit year, by individual number range. Ranges overlap, the first
 * matching row wins:
 * - 500–749 with 54–99 means 1854–1899
 * - 499–999 with 40–99 means 1940–1999
 * - 000–499 with 00–99 means 1900–1999
 * - 500–999 with 00–39 means 2000–2039
 */
const CENTURY_TABLE: [(RangeInclusive<u32>, RangeInclusive<u32>, i32); 4] = [
    (500..=749, 54..=99, 1800),
    (499..=999, 40..=99, 1900),
    (0..=499, 0..=99, 1900),
    (500..=999, 0..=39, 2000),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NorwayNinKind {
    /// Fødselsnummer
    BirthNumber,
    /// Day of month offset by 40
    DNumber,
    /// Month offset by 40
    HNumber,
}

/// A Norwegian birth number (`DDMMYYNNNCC`), D-number or H-number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NorwayNin {
    date: NaiveDate,
    individual_number: u16,
    kind: NorwayNinKind,
}

impl NorwayNin {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(raw, &ParserConfig::default())
    }

    pub fn parse_with_config(raw: &str, _config: &ParserConfig) -> Result<Self, ParseError> {
        let captures = BIRTH_NUMBER
            .captures(raw)
            .ok_or(ParseError::InvalidFormat)?;

        let mut day = capture_number(&captures, "DD")?;
        let mut month = capture_number(&captures, "MM")?;
        let yy = capture_number(&captures, "YY")?;
        let individual_number = capture_number(&captures, "individual")?;
        let checksum = capture_number(&captures, "checksum")?;

        let is_d_number = D_NUMBER_DAYS.contains(&day);
        let is_h_number = H_NUMBER_MONTHS.contains(&month);
        let kind = match (is_d_number, is_h_number) {
            (true, true) => return Err(ParseError::InvalidFormat),
            (true, false) => {
                day -= OFFSET;
                NorwayNinKind::DNumber
            }
            (false, true) => {
                month -= OFFSET;
                NorwayNinKind::HNumber
            }
            (false, false) => NorwayNinKind::BirthNumber,
        };

        let century = resolve_century(individual_number, yy)
            .ok_or(ParseError::InvalidIndividualNumber(individual_number as u16))?;
        let year = century + yy as i32;

        let nin = NorwayNin {
            date: calendar_date(year, month, day)?,
            individual_number: individual_number as u16,
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

    pub fn kind(&self) -> NorwayNinKind {
        self.kind
    }

    pub fn sex(&self) -> Sex {
        Sex::from_parity(self.individual_number as u32)
    }

    /// Both control digits as a two-digit number. Always `Some` for a parsed number.
    pub fn checksum(&self) -> Option<u32> {
        let (day, month) = self.encoded_day_and_month();
        let mut payload = Vec::with_capacity(9);
        push_digits(&mut payload, day, 2);
        push_digits(&mut payload, month, 2);
        push_digits(&mut payload, two_digit_year(self.date), 2);
        push_digits(&mut payload, self.individual_number as u32, 3);
        NorwayBirthNumberChecksum.compute(&payload)
    }

    fn encoded_day_and_month(&self) -> (u32, u32) {
        let (day, month) = (self.date.day(), self.date.month());
        match self.kind {
            NorwayNinKind::BirthNumber => (day, month),
            NorwayNinKind::DNumber => (day + OFFSET, month),
            NorwayNinKind::HNumber => (day, month + OFFSET),
        }
    }
}

fn resolve_century(individual_number: u32, two_digit_year: u32) -> Option<i32> {
    CENTURY_TABLE
        .iter()
        .find(|(individual_numbers, years, _)| {
            individual_numbers.contains(&individual_number) && years.contains(&two_digit_year)
        })
        .map(|(_, _, century)| *century)
}

impl fmt::Display for NorwayNin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (day, month) = self.encoded_day_and_month();
        let checksum = self.checksum().ok_or(fmt::Error)?;
        write!(
            f,
            "{:02}{:02}{:02}{:03}{:02}",
            day,
            month,
            two_digit_year(self.date),
            self.individual_number,
            checksum
        )
    }
}

impl FromStr for NorwayNin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NorwayNin::parse(s)
    }
}
