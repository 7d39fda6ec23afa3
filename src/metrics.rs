use crate::country::Country;
use crate::error::ParseError;
use crate::national_id::NationalIdentificationNumber;
use metrics::{counter, IntoLabels, Label};

const COUNTRY: &str = "country";
const OUTCOME: &str = "outcome";
const SUCCESS: &str = "success";
const UNKNOWN_COUNTRY: &str = "unknown";
const NO_COUNTRY: &str = "none";

/// Labels attached to every metric a parser emits, e.g. the calling service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(labels: &[(&str, &str)]) -> Self {
        Labels(
            labels
                .iter()
                .map(|(key, value)| Label::new(key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// These labels followed by the per-event ones.
    fn with_event(&self, event_labels: &[(&'static str, &'static str)]) -> Vec<Label> {
        let mut labels = self.0.clone();
        labels.extend(
            event_labels
                .iter()
                .map(|&(key, value)| Label::from_static_parts(key, value)),
        );
        labels
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

/// Counts one parse attempt. `country` is `None` when the code did not resolve to a
/// supported country.
pub(crate) fn record_parse(
    labels: &Labels,
    country: Option<Country>,
    result: &Result<NationalIdentificationNumber, ParseError>,
) {
    let outcome = match result {
        Ok(_) => SUCCESS,
        Err(err) => err.kind(),
    };
    let country = country.map_or(UNKNOWN_COUNTRY, Country::code);
    counter!(
        "nin.parse",
        labels.with_event(&[(COUNTRY, country), (OUTCOME, outcome)])
    )
    .increment(1);
}

pub(crate) fn record_detection(labels: &Labels, country: Option<Country>) {
    let country = country.map_or(NO_COUNTRY, Country::code);
    counter!(
        "nin.detect_country",
        labels.with_event(&[(COUNTRY, country)])
    )
    .increment(1);
}
