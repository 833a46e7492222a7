//! Date range matching against an injected reference day

use std::fmt;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Preset date range offered by the analytics views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateRange {
    All,
    Today,
    /// Monday-start week containing the reference day
    Week,
    Month,
    Quarter,
    Year,
    /// Unrecognized value, treated as no constraint
    Other(String),
}

impl DateRange {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => DateRange::All,
            "today" => DateRange::Today,
            "week" => DateRange::Week,
            "month" => DateRange::Month,
            "quarter" => DateRange::Quarter,
            "year" => DateRange::Year,
            other => DateRange::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
            DateRange::Other(value) => value,
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::All
    }
}

impl From<&str> for DateRange {
    fn from(value: &str) -> Self {
        DateRange::parse(value)
    }
}

impl From<String> for DateRange {
    fn from(value: String) -> Self {
        DateRange::parse(&value)
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.as_str().to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a record date, dropping any time of day
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3
}

fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.checked_sub_days(Days::new(1))
}

/// Matches record dates against a fixed reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeMatcher {
    today: NaiveDate,
}

impl DateRangeMatcher {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Use the local clock's current date as the reference day
    pub fn from_clock() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whether a record date falls inside the given range
    ///
    /// Missing or empty dates always match. Unrecognized ranges match
    /// everything. Dates that cannot be parsed, including whitespace-only
    /// ones, never match a constrained range.
    pub fn is_date_in_range(&self, date: Option<&str>, range: &DateRange) -> bool {
        let date = match date {
            Some(d) if !d.is_empty() => d,
            _ => return true,
        };

        if let DateRange::All = range {
            return true;
        }
        if let DateRange::Other(value) = range {
            debug!("Unrecognized date range '{}', not filtering", value);
            return true;
        }

        let Some(date) = parse_record_date(date) else {
            debug!("Unparseable record date '{}'", date);
            return false;
        };
        let today = self.today;

        match range {
            DateRange::Today => date == today,
            DateRange::Week => match week_start(today) {
                Some(monday) => {
                    let sunday = monday + Days::new(6);
                    date >= monday && date <= sunday
                }
                None => false,
            },
            DateRange::Month => date.year() == today.year() && date.month() == today.month(),
            DateRange::Quarter => {
                date.year() == today.year() && quarter_of(date) == quarter_of(today)
            }
            DateRange::Year => date.year() == today.year(),
            DateRange::All | DateRange::Other(_) => true,
        }
    }

    /// Inclusive first and last day covered by a range
    ///
    /// Returns `None` for ranges that do not constrain dates.
    pub fn bounds(&self, range: &DateRange) -> Option<(NaiveDate, NaiveDate)> {
        let today = self.today;
        match range {
            DateRange::All | DateRange::Other(_) => None,
            DateRange::Today => Some((today, today)),
            DateRange::Week => {
                let monday = week_start(today)?;
                Some((monday, monday.checked_add_days(Days::new(6))?))
            }
            DateRange::Month => Some((
                NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?,
                month_end(today.year(), today.month())?,
            )),
            DateRange::Quarter => {
                let first_month = quarter_of(today) * 3 + 1;
                Some((
                    NaiveDate::from_ymd_opt(today.year(), first_month, 1)?,
                    month_end(today.year(), first_month + 2)?,
                ))
            }
            DateRange::Year => Some((
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            )),
        }
    }
}
