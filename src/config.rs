use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HUMAN_SEPARATOR: &str = " ";

/// Settings shared by every country validator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Inserted between the fields of a number rendered with [crate::Format::Human].
    /// An empty separator makes the human format identical to the machine format.
    pub human_separator: String,
    // Override the evaluation date for testing. The UTC date of the wall clock is used otherwise.
    pub forced_date: Option<NaiveDate>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            human_separator: DEFAULT_HUMAN_SEPARATOR.to_string(),
            forced_date: None,
        }
    }
}

impl ValidatorConfig {
    pub fn human_separator(&self, separator: &str) -> Self {
        self.mutate_clone(|x| x.human_separator = separator.to_string())
    }

    pub fn forced_date(&self, date: NaiveDate) -> Self {
        self.mutate_clone(|x| x.forced_date = Some(date))
    }

    /// The date numbers are evaluated against
    pub fn today(&self) -> NaiveDate {
        self.forced_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
