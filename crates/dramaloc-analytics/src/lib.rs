//! Analytics filtering for dramaloc
//!
//! Predicates used by the cost, translator-performance and ROI views to
//! narrow their record sets. None of them fail: missing or unknown filter
//! values mean "no constraint".

pub mod date;
pub mod entity;
pub mod filter;

pub use date::{parse_record_date, DateRange, DateRangeMatcher};
pub use entity::{matches_drama, matches_language, matches_translator};
pub use filter::AnalyticsFilter;

// Re-export types from dramaloc-core
pub use dramaloc_core::FilterRecord;
