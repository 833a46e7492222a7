//! Combined analytics filter

use dramaloc_core::FilterRecord;
use serde::{Deserialize, Serialize};

use crate::date::{DateRange, DateRangeMatcher};
use crate::entity::{matches_drama, matches_language, matches_translator};

/// Filter bar state shared by the analytics views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsFilter {
    pub drama: Option<String>,
    pub language: Option<String>,
    pub translator: Option<String>,
    pub date_range: DateRange,
}

impl AnalyticsFilter {
    /// Restrict the filter to a single translator
    pub fn for_translator(mut self, translator: impl Into<String>) -> Self {
        self.translator = Some(translator.into());
        self
    }

    /// A record passes when every dimension matches
    pub fn matches(&self, dates: &DateRangeMatcher, record: &FilterRecord) -> bool {
        matches_drama(record, self.drama.as_deref())
            && matches_language(record, self.language.as_deref())
            && matches_translator(record, self.translator.as_deref())
            && dates.is_date_in_range(record.date.as_deref(), &self.date_range)
    }

    pub fn apply<'a>(
        &self,
        dates: &DateRangeMatcher,
        records: &'a [FilterRecord],
    ) -> Vec<&'a FilterRecord> {
        records
            .iter()
            .filter(|r| self.matches(dates, r))
            .collect()
    }
}
