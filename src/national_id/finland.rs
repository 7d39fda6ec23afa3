use crate::checksum::{push_digits, CheckDigitAlgorithm, FinnishHetuChecksum};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::national_id::{calendar_date, capture_number, two_digit_year, Sex};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const TEMPORARY_INDIVIDUAL_NUMBERS: u16 = 900;
const MIN_INDIVIDUAL_NUMBER: u16 = 2;

lazy_static! {
    static ref PERSONAL_IDENTITY_CODE: Regex = Regex::new(
        r"^(?P<DD>[0-9]{2})(?P<MM>[0-9]{2})(?P<YY>[0-9]{2})(?P<sign>[-+A-FU-Y])(?P<individual>[0-9]{3})(?P<checksum>[0-9A-Y])$"
    )
    .expect("valid personal identity code pattern");
}

/// The century sign between the date and the individual number.
///
/// Since 2023 the letters B–F and U–Y are issued alongside the traditional signs
/// (https://vm.fi/paatos?decisionId=0900908f807c5f3c). They are only accepted when
/// `ParserConfig::finland_additional_century_signs` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinlandCenturySign {
    /// '+', born in the 1800s
    Plus,
    /// '-', born in the 1900s
    Minus,
    /// 'U' to 'Y', born in the 1900s
    Nineteen(char),
    /// 'A', born in the 2000s
    A,
    /// 'B' to 'F', born in the 2000s
    Twenty(char),
}

impl FinlandCenturySign {
    pub fn from_char(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(FinlandCenturySign::Plus),
            '-' => Some(FinlandCenturySign::Minus),
            'U'..='Y' => Some(FinlandCenturySign::Nineteen(sign)),
            'A' => Some(FinlandCenturySign::A),
            'B'..='F' => Some(FinlandCenturySign::Twenty(sign)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            FinlandCenturySign::Plus => '+',
            FinlandCenturySign::Minus => '-',
            FinlandCenturySign::A => 'A',
            FinlandCenturySign::Nineteen(sign) | FinlandCenturySign::Twenty(sign) => *sign,
        }
    }

    /// Whether this is one of the signs introduced in 2023.
    pub fn is_additional(&self) -> bool {
        matches!(
            self,
            FinlandCenturySign::Nineteen(_) | FinlandCenturySign::Twenty(_)
        )
    }

    pub fn century(&self) -> i32 {
        match self {
            FinlandCenturySign::Plus => 1800,
            FinlandCenturySign::Minus | FinlandCenturySign::Nineteen(_) => 1900,
            FinlandCenturySign::A | FinlandCenturySign::Twenty(_) => 2000,
        }
    }
}

/// A Finnish personal identity code (henkilötunnus), `DDMMYYCZZZQ`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FinlandNin {
    date: NaiveDate,
    individual_number: u16,
    century_sign: FinlandCenturySign,
}

impl FinlandNin {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(raw, &ParserConfig::default())
    }

    pub fn parse_with_config(raw: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let captures = PERSONAL_IDENTITY_CODE
            .captures(raw)
            .ok_or(ParseError::InvalidFormat)?;

        let day = capture_number(&captures, "DD")?;
        let month = capture_number(&captures, "MM")?;
        let yy = capture_number(&captures, "YY")?;
        let individual_number = capture_number(&captures, "individual")? as u16;
        let century_sign = captures
            .name("sign")
            .and_then(|m| m.as_str().chars().next())
            .and_then(FinlandCenturySign::from_char)
            .ok_or(ParseError::InvalidFormat)?;
        if century_sign.is_additional() && !config.finland_additional_century_signs {
            return Err(ParseError::InvalidFormat);
        }
        let checksum = captures
            .name("checksum")
            .and_then(|m| m.as_str().chars().next())
            .ok_or(ParseError::InvalidFormat)?;

        if individual_number < MIN_INDIVIDUAL_NUMBER {
            return Err(ParseError::InvalidIndividualNumber(individual_number));
        }

        let year = century_sign.century() + yy as i32;

        let nin = FinlandNin {
            date: calendar_date(year, month, day)?,
            individual_number,
            century_sign,
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

    pub fn century_sign(&self) -> FinlandCenturySign {
        self.century_sign
    }

    /// Individual numbers 900–999 are given to temporary identity codes.
    pub fn is_temporary(&self) -> bool {
        self.individual_number >= TEMPORARY_INDIVIDUAL_NUMBERS
    }

    pub fn sex(&self) -> Sex {
        Sex::from_parity(self.individual_number as u32)
    }

    /// Always `Some` for a parsed code.
    pub fn checksum(&self) -> Option<char> {
        let mut payload = Vec::with_capacity(9);
        push_digits(&mut payload, self.date.day(), 2);
        push_digits(&mut payload, self.date.month(), 2);
        push_digits(&mut payload, two_digit_year(self.date), 2);
        push_digits(&mut payload, self.individual_number as u32, 3);
        FinnishHetuChecksum.compute(&payload)
    }
}

impl fmt::Display for FinlandNin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checksum = self.checksum().ok_or(fmt::Error)?;
        write!(
            f,
            "{:02}{:02}{:02}{}{:03}{}",
            self.date.day(),
            self.date.month(),
            two_digit_year(self.date),
            self.century_sign.as_char(),
            self.individual_number,
            checksum
        )
    }
}

impl FromStr for FinlandNin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FinlandNin::parse(s)
    }
}
