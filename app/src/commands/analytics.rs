//! Analytics filter commands

use chrono::NaiveDate;
use dramaloc_analytics::{AnalyticsFilter, DateRange, FilterRecord};
use dramaloc_core::Permission;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FilterInput {
    #[serde(default)]
    pub filter: AnalyticsFilter,
    pub records: Vec<FilterRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RangeInput {
    pub range: DateRange,
}

/// Inclusive date bounds of a preset
#[derive(Debug, Serialize)]
pub struct DateBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Filter analytics records for the logged-in user
///
/// Translators only ever see their own records.
pub fn filter_records(state: &AppState, input: FilterInput) -> Result<Vec<FilterRecord>, String> {
    let session = state.require(Permission::ViewAnalytics)?;

    let filter = if session.is_scoped_to_self() {
        input.filter.for_translator(session.display_name.clone())
    } else {
        input.filter
    };

    let kept: Vec<FilterRecord> = filter
        .apply(&state.dates, &input.records)
        .into_iter()
        .cloned()
        .collect();

    debug!("Filtered {} of {} records", kept.len(), input.records.len());
    Ok(kept)
}

pub fn date_range_bounds(state: &AppState, input: RangeInput) -> Result<Option<DateBounds>, String> {
    Ok(state
        .dates
        .bounds(&input.range)
        .map(|(start, end)| DateBounds { start, end }))
}

#[cfg(test)]
mod tests {
    use crate::commands::{dispatch, Request};
    use crate::state::AppState;
    use chrono::NaiveDate;
    use dramaloc_core::{DashboardConfig, Role, Session};
    use serde_json::{json, Value};

    fn state(role: Option<Role>) -> AppState {
        let config = DashboardConfig {
            anchor_date: NaiveDate::from_ymd_opt(2026, 1, 28),
            ..Default::default()
        };
        let state = AppState::new(config);
        if let Some(role) = role {
            state
                .set_session(Some(Session::new("u1", "张三", role)))
                .unwrap();
        }
        state
    }

    fn run(state: &AppState, cmd: &str, args: Value) -> Value {
        let request = Request {
            cmd: cmd.to_string(),
            args,
        };
        serde_json::to_value(dispatch(state, request)).unwrap()
    }

    fn records() -> Value {
        json!([
            {"dramaId": "d1", "languageCode": "en", "translator": "张三", "date": "2026-01-27"},
            {"dramaName": "d1", "language": "en", "name": "李四", "date": "2026-01-26"},
            {"drama": "d2", "languageCode": "ja", "translator": "张三", "date": "2026-01-19"}
        ])
    }

    #[test]
    fn test_filter_requires_login() {
        let response = run(&state(None), "filter_records", json!({"records": records()}));
        assert_eq!(response, json!({"error": "未登录"}));
    }

    #[test]
    fn test_reviewer_cannot_view_analytics() {
        let response = run(&state(Some(Role::Reviewer)), "filter_records", json!({"records": records()}));
        assert!(response["error"].as_str().unwrap().starts_with("审校"));
    }

    #[test]
    fn test_manager_filters_by_alias_and_week() {
        let response = run(
            &state(Some(Role::ProjectManager)),
            "filter_records",
            json!({"filter": {"drama": "d1", "dateRange": "week"}, "records": records()}),
        );
        let kept = response["ok"].as_array().unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_translator_sees_only_own_records() {
        let response = run(
            &state(Some(Role::Translator)),
            "filter_records",
            json!({"filter": {"translator": "李四"}, "records": records()}),
        );
        let kept = response["ok"].as_array().unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r["translator"] == "张三"));
    }

    #[test]
    fn test_date_range_bounds() {
        let s = state(None);
        assert_eq!(
            run(&s, "date_range_bounds", json!({"range": "week"})),
            json!({"ok": {"start": "2026-01-26", "end": "2026-02-01"}})
        );
        assert_eq!(run(&s, "date_range_bounds", json!({"range": "all"})), json!({"ok": null}));
    }
}
