mod denmark;
mod finland;
mod iceland;
mod norway;
mod sweden;

pub use crate::national_id::denmark::DenmarkNin;
pub use crate::national_id::finland::{FinlandCenturySign, FinlandNin};
pub use crate::national_id::iceland::IcelandNin;
pub use crate::national_id::norway::{NorwayNin, NorwayNinKind};
pub use crate::national_id::sweden::{SwedenNin, SwedenNinKind};

use crate::config::ParserConfig;
use crate::country::Country;
use crate::error::ParseError;
use chrono::{Datelike, NaiveDate};
use regex::Captures;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    // even numbers are assigned to women, odd numbers to men
    pub(crate) fn from_parity(number: u32) -> Sex {
        if number % 2 == 0 {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

/// A parsed national identification number of any supported country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NationalIdentificationNumber {
    Sweden(SwedenNin),
    Norway(NorwayNin),
    Denmark(DenmarkNin),
    Finland(FinlandNin),
    Iceland(IcelandNin),
}

impl NationalIdentificationNumber {
    pub fn country(&self) -> Country {
        match self {
            NationalIdentificationNumber::Sweden(_) => Country::Sweden,
            NationalIdentificationNumber::Norway(_) => Country::Norway,
            NationalIdentificationNumber::Denmark(_) => Country::Denmark,
            NationalIdentificationNumber::Finland(_) => Country::Finland,
            NationalIdentificationNumber::Iceland(_) => Country::Iceland,
        }
    }

    /// Uppercase ISO 3166-1 alpha-2 code of the issuing country.
    pub fn country_code(&self) -> &'static str {
        self.country().code()
    }

    /// Birth date, with any D-, H- or coordination offsets removed.
    pub fn date(&self) -> NaiveDate {
        match self {
            NationalIdentificationNumber::Sweden(nin) => nin.date(),
            NationalIdentificationNumber::Norway(nin) => nin.date(),
            NationalIdentificationNumber::Denmark(nin) => nin.date(),
            NationalIdentificationNumber::Finland(nin) => nin.date(),
            NationalIdentificationNumber::Iceland(nin) => nin.date(),
        }
    }

    /// The sequence part following the date. For Denmark this is the whole 4-digit serial
    /// number, check digit included.
    pub fn individual_number(&self) -> u16 {
        match self {
            NationalIdentificationNumber::Sweden(nin) => nin.individual_number(),
            NationalIdentificationNumber::Norway(nin) => nin.individual_number(),
            NationalIdentificationNumber::Denmark(nin) => nin.serial_number(),
            NationalIdentificationNumber::Finland(nin) => nin.individual_number(),
            NationalIdentificationNumber::Iceland(nin) => nin.individual_number(),
        }
    }

    /// `None` for Iceland, where the number does not encode sex.
    pub fn sex(&self) -> Option<Sex> {
        match self {
            NationalIdentificationNumber::Sweden(nin) => Some(nin.sex()),
            NationalIdentificationNumber::Norway(nin) => Some(nin.sex()),
            NationalIdentificationNumber::Denmark(nin) => Some(nin.sex()),
            NationalIdentificationNumber::Finland(nin) => Some(nin.sex()),
            NationalIdentificationNumber::Iceland(_) => None,
        }
    }

    /// Canonical string, resolving "today" through `config` instead of the system clock.
    pub fn format_with_config(&self, config: &ParserConfig) -> String {
        match self {
            NationalIdentificationNumber::Sweden(nin) => {
                nin.display_relative_to(config.today()).to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for NationalIdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationalIdentificationNumber::Sweden(nin) => nin.fmt(f),
            NationalIdentificationNumber::Norway(nin) => nin.fmt(f),
            NationalIdentificationNumber::Denmark(nin) => nin.fmt(f),
            NationalIdentificationNumber::Finland(nin) => nin.fmt(f),
            NationalIdentificationNumber::Iceland(nin) => nin.fmt(f),
        }
    }
}

impl From<SwedenNin> for NationalIdentificationNumber {
    fn from(nin: SwedenNin) -> Self {
        NationalIdentificationNumber::Sweden(nin)
    }
}

impl From<NorwayNin> for NationalIdentificationNumber {
    fn from(nin: NorwayNin) -> Self {
        NationalIdentificationNumber::Norway(nin)
    }
}

impl From<DenmarkNin> for NationalIdentificationNumber {
    fn from(nin: DenmarkNin) -> Self {
        NationalIdentificationNumber::Denmark(nin)
    }
}

impl From<FinlandNin> for NationalIdentificationNumber {
    fn from(nin: FinlandNin) -> Self {
        NationalIdentificationNumber::Finland(nin)
    }
}

impl From<IcelandNin> for NationalIdentificationNumber {
    fn from(nin: IcelandNin) -> Self {
        NationalIdentificationNumber::Iceland(nin)
    }
}

/// Numeric value of a named capture group. The grammars only capture ASCII digits.
fn capture_number(captures: &Captures<'_>, name: &str) -> Result<u32, ParseError> {
    captures
        .name(name)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(ParseError::InvalidFormat)
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })
}

/// Last two digits of the year, as printed in every supported format.
fn two_digit_year(date: NaiveDate) -> u32 {
    date.year().rem_euclid(100) as u32
}
