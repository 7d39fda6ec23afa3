use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Danish CPR numbers issued on or after this date are not guaranteed to satisfy the
/// historical modulus check.
pub const DENMARK_CHECKSUM_CUTOVER: NaiveDate = match NaiveDate::from_ymd_opt(2007, 10, 1) {
    Some(date) => date,
    None => panic!("invalid cutover date"),
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DenmarkChecksumPolicy {
    /// Verify the check digit for every number.
    Always,
    /// Verify the check digit only when the birth date is before 2007-10-01.
    #[default]
    BeforeCutover,
    /// Never verify the check digit.
    Never,
}

impl DenmarkChecksumPolicy {
    pub fn should_verify(&self, date: NaiveDate) -> bool {
        match self {
            DenmarkChecksumPolicy::Always => true,
            DenmarkChecksumPolicy::BeforeCutover => date < DENMARK_CHECKSUM_CUTOVER,
            DenmarkChecksumPolicy::Never => false,
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    // Override the current date for testing. Only Swedish numbers depend on it.
    #[serde(default)]
    pub forced_date: Option<NaiveDate>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub denmark_checksum: DenmarkChecksumPolicy,

    // Accept the Finnish century signs B-F and U-Y issued since 2023, besides '+', '-' and 'A'
    #[serde(default)]
    pub finland_additional_century_signs: bool,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forced_date(&self, date: NaiveDate) -> Self {
        self.mutate_clone(|x| x.forced_date = Some(date))
    }

    pub fn denmark_checksum(&self, policy: DenmarkChecksumPolicy) -> Self {
        self.mutate_clone(|x| x.denmark_checksum = policy)
    }

    pub fn finland_additional_century_signs(&self, enabled: bool) -> Self {
        self.mutate_clone(|x| x.finland_additional_century_signs = enabled)
    }

    /// The date two-digit Swedish years are resolved against.
    pub fn today(&self) -> NaiveDate {
        self.forced_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
