use crate::config::ParserConfig;
use crate::country::{Country, CountryCodeValidator, Iso3166Alpha2};
use crate::error::ParseError;
use crate::metrics::{record_detection, record_parse, Labels, NO_LABEL};
use crate::national_id::{
    DenmarkNin, FinlandNin, IcelandNin, NationalIdentificationNumber, NorwayNin, SwedenNin,
};
use lazy_static::lazy_static;
use std::str::FromStr;
use std::sync::Arc;

/// Order in which `detect_country` tries the parsers. Grammars overlap (a 10-digit string
/// can be Swedish, Danish or Icelandic), so the first accepting parser wins.
pub const DETECTION_ORDER: [Country; 5] = [
    Country::Sweden,
    Country::Norway,
    Country::Denmark,
    Country::Finland,
    Country::Iceland,
];

lazy_static! {
    static ref DEFAULT_PARSER: NinParser = NinParser::default();
}

/// Selects the parser matching a country code.
///
/// A `NinParser` holds no mutable state and can be shared between threads.
#[derive(Clone)]
pub struct NinParser {
    config: ParserConfig,
    country_codes: Arc<dyn CountryCodeValidator>,
    labels: Labels,
}

impl Default for NinParser {
    fn default() -> Self {
        NinParser::new(ParserConfig::default())
    }
}

impl NinParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            country_codes: Arc::new(Iso3166Alpha2),
            labels: NO_LABEL,
        }
    }

    /// Replaces the ISO 3166-1 alpha-2 lookup used to tell invalid codes from
    /// unsupported ones.
    pub fn with_country_code_validator(
        mut self,
        validator: Arc<dyn CountryCodeValidator>,
    ) -> Self {
        self.country_codes = validator;
        self
    }

    /// Labels added to every metric emitted by this parser.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(
        &self,
        raw: &str,
        country_code: &str,
    ) -> Result<NationalIdentificationNumber, ParseError> {
        let country = self.resolve_country(country_code);
        let result = match &country {
            Ok(country) => self.parse_country(raw, *country),
            Err(err) => Err(err.clone()),
        };
        record_parse(&self.labels, country.ok(), &result);
        result
    }

    /// Same as [NinParser::parse], discarding the reason of a failure.
    pub fn try_parse(&self, raw: &str, country_code: &str) -> Option<NationalIdentificationNumber> {
        self.parse(raw, country_code).ok()
    }

    /// The first country, in [DETECTION_ORDER], whose parser accepts `raw`.
    pub fn detect_country(&self, raw: &str) -> Option<Country> {
        let detected = DETECTION_ORDER
            .iter()
            .copied()
            .find(|country| self.parse_country(raw, *country).is_ok());
        record_detection(&self.labels, detected);
        detected
    }

    fn resolve_country(&self, country_code: &str) -> Result<Country, ParseError> {
        if !self.country_codes.is_valid_country_code(country_code) {
            return Err(ParseError::InvalidCountryCode(country_code.to_string()));
        }
        Country::from_str(country_code)
            .map_err(|_| ParseError::UnsupportedCountry(country_code.to_string()))
    }

    fn parse_country(
        &self,
        raw: &str,
        country: Country,
    ) -> Result<NationalIdentificationNumber, ParseError> {
        let config = &self.config;
        Ok(match country {
            Country::Sweden => SwedenNin::parse_with_config(raw, config)?.into(),
            Country::Norway => NorwayNin::parse_with_config(raw, config)?.into(),
            Country::Denmark => DenmarkNin::parse_with_config(raw, config)?.into(),
            Country::Finland => FinlandNin::parse_with_config(raw, config)?.into(),
            Country::Iceland => IcelandNin::parse_with_config(raw, config)?.into(),
        })
    }
}

/// Parses `raw` as a national identification number of `country_code` with the default
/// configuration.
pub fn parse(raw: &str, country_code: &str) -> Result<NationalIdentificationNumber, ParseError> {
    DEFAULT_PARSER.parse(raw, country_code)
}

pub fn try_parse(raw: &str, country_code: &str) -> Option<NationalIdentificationNumber> {
    DEFAULT_PARSER.try_parse(raw, country_code)
}

pub fn detect_country(raw: &str) -> Option<Country> {
    DEFAULT_PARSER.detect_country(raw)
}

#[cfg(test)]
mod test {
    use crate::config::{DenmarkChecksumPolicy, ParserConfig};
    use crate::country::{Country, CountryCodeValidator};
    use crate::dispatcher::*;
    use crate::error::ParseError;
    use crate::metrics::Labels;
    use chrono::NaiveDate;
    use metrics::{Key, Label};
    use metrics_util::debugging::DebugValue;
    use metrics_util::debugging::DebuggingRecorder;
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;
    use std::sync::Arc;

    fn parser() -> NinParser {
        NinParser::new(
            ParserConfig::new().forced_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        )
    }

    #[test]
    fn parse_each_country() {
        let parser = parser();
        let valid = vec![
            ("790315-0667", "SE"),
            ("15121015649", "NO"),
            ("211062-5629", "DK"),
            ("131052-308T", "FI"),
            ("1201603389", "IS"),
        ];
        for (raw, code) in valid {
            let nin = parser.parse(raw, code).unwrap();
            assert_eq!(nin.country_code(), code);
            assert_eq!(nin.format_with_config(parser.config()), raw);
        }
    }

    #[test]
    fn invalid_and_unsupported_country_codes() {
        let parser = parser();
        assert_eq!(
            parser.parse("", "xx"),
            Err(ParseError::InvalidCountryCode("xx".to_string()))
        );
        assert_eq!(
            parser.parse("790315-0667", "se"),
            Err(ParseError::InvalidCountryCode("se".to_string()))
        );
        assert_eq!(
            parser.parse("", "ZZ"),
            Err(ParseError::InvalidCountryCode("ZZ".to_string()))
        );
        assert_eq!(
            parser.parse("", "PL"),
            Err(ParseError::UnsupportedCountry("PL".to_string()))
        );
        assert_eq!(
            parser.parse("", "DE"),
            Err(ParseError::UnsupportedCountry("DE".to_string()))
        );
    }

    #[test]
    fn parser_errors_are_propagated() {
        let parser = parser();
        assert_eq!(parser.parse("abc123", "SE"), Err(ParseError::InvalidFormat));
        assert_eq!(
            parser.parse("17014829936", "NO"),
            Err(ParseError::InvalidChecksum)
        );
        assert_eq!(
            parser.parse("131052-001T", "FI"),
            Err(ParseError::InvalidIndividualNumber(1))
        );
    }

    #[test]
    fn try_parse_drops_the_error() {
        let parser = parser();
        assert!(parser.try_parse("990214+0095", "SE").is_some());
        assert!(parser.try_parse("abc123", "SE").is_none());
        assert!(parser.try_parse("", "PL").is_none());
        assert!(parser.try_parse("", "xx").is_none());
    }

    #[test]
    fn detect_country_uses_fixed_order() {
        let parser = parser();
        assert_eq!(parser.detect_country("790315-0667"), Some(Country::Sweden));
        assert_eq!(parser.detect_country("15121015649"), Some(Country::Norway));
        assert_eq!(parser.detect_country("211062-5629"), Some(Country::Denmark));
        assert_eq!(parser.detect_country("131052-308T"), Some(Country::Finland));
        assert_eq!(parser.detect_country("1201603389"), Some(Country::Iceland));
        assert_eq!(parser.detect_country("abc123"), None);
        assert_eq!(parser.detect_country(""), None);
    }

    #[test]
    fn detection_order_breaks_ties() {
        let parser = NinParser::new(
            ParserConfig::new()
                .forced_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                .denmark_checksum(DenmarkChecksumPolicy::Never),
        );
        // both Swedish and, without check digit verification, Danish
        assert!(parser.parse("101010-1234", "SE").is_ok());
        assert!(parser.parse("101010-1234", "DK").is_ok());
        assert_eq!(parser.detect_country("101010-1234"), Some(Country::Sweden));
    }

    struct NordicOnly;

    impl CountryCodeValidator for NordicOnly {
        fn is_valid_country_code(&self, code: &str) -> bool {
            matches!(code, "SE" | "NO" | "DK" | "FI" | "IS" | "FO" | "GL")
        }
    }

    #[test]
    fn custom_country_code_validator() {
        let parser = parser().with_country_code_validator(Arc::new(NordicOnly));
        assert_eq!(
            parser.parse("", "PL"),
            Err(ParseError::InvalidCountryCode("PL".to_string()))
        );
        assert_eq!(
            parser.parse("", "FO"),
            Err(ParseError::UnsupportedCountry("FO".to_string()))
        );
        assert!(parser.parse("15121015649", "NO").is_ok());
    }

    #[test]
    fn default_free_functions() {
        assert!(parse("15121015649", "NO").is_ok());
        assert!(try_parse("131052-308T", "FI").is_some());
        assert_eq!(detect_country("1201603389"), Some(Country::Iceland));
    }

    #[test]
    fn parser_is_shared_between_threads() {
        let parser = Arc::new(parser());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = Arc::clone(&parser);
                std::thread::spawn(move || {
                    parser.parse("15121015649", "NO").is_ok()
                        && parser.detect_country("131052-308T") == Some(Country::Finland)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    fn counter_key(name: &'static str, labels: &[(&'static str, &'static str)]) -> CompositeKey {
        let labels: Vec<Label> = labels.iter().map(Label::from).collect();
        CompositeKey::new(Counter, Key::from_parts(name, labels))
    }

    #[test]
    fn should_submit_parse_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let parser = parser();
            parser.parse("15121015649", "NO").unwrap();
            parser.parse("15121015648", "NO").unwrap_err();
            parser.try_parse("", "PL");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let metric_value = snapshot
            .get(&counter_key(
                "nin.parse",
                &[("country", "NO"), ("outcome", "success")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&counter_key(
                "nin.parse",
                &[("country", "NO"), ("outcome", "invalid_checksum")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&counter_key(
                "nin.parse",
                &[("country", "unknown"), ("outcome", "unsupported_country")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }

    #[test]
    fn should_submit_detection_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let parser = parser().with_labels(Labels::new(&[("service", "onboarding")]));
            parser.detect_country("1201603389");
            parser.detect_country("abc123");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let metric_value = snapshot
            .get(&counter_key(
                "nin.detect_country",
                &[("service", "onboarding"), ("country", "IS")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&counter_key(
                "nin.detect_country",
                &[("service", "onboarding"), ("country", "none")],
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }
}
