// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

pub mod checksum;
mod config;
mod country;
mod dispatcher;
mod error;
mod metrics;
mod national_id;

// This is the public API of the NIN library
pub use config::{DenmarkChecksumPolicy, ParserConfig, DENMARK_CHECKSUM_CUTOVER};
pub use country::{is_valid_country_code, Country, CountryCodeValidator, Iso3166Alpha2};
pub use dispatcher::{detect_country, parse, try_parse, NinParser, DETECTION_ORDER};
pub use error::ParseError;
pub use crate::metrics::{Labels, NO_LABEL};
pub use national_id::{
    DenmarkNin, FinlandCenturySign, FinlandNin, IcelandNin, NationalIdentificationNumber,
    NorwayNin, NorwayNinKind, Sex, SwedenNin, SwedenNinKind,
};
