//! Subtitle timeline commands

use dramaloc_timeline::{
    adjust_position_to_avoid_collision, find_available_time_slot, find_overlapping_pairs,
    SubtitleWithTime, TimeRange,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Slot request from frontend; duration and track length fall back to config
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInput {
    pub desired_start: f64,
    pub duration: Option<f64>,
    #[serde(default)]
    pub existing: Vec<TimeRange>,
    pub max_duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragInput {
    pub dragged_id: String,
    pub new_start: f64,
    pub new_end: f64,
    pub subtitles: Vec<SubtitleWithTime>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustInput {
    pub desired: TimeRange,
    #[serde(default)]
    pub existing: Vec<TimeRange>,
}

#[derive(Debug, Deserialize)]
pub struct TrackInput {
    pub subtitles: Vec<SubtitleWithTime>,
}

/// Two overlapping subtitles
#[derive(Debug, Serialize)]
pub struct OverlapPair {
    pub first: String,
    pub second: String,
}

pub fn find_time_slot(state: &AppState, input: SlotInput) -> Result<Option<TimeRange>, String> {
    let timeline = &state.config.timeline;
    Ok(find_available_time_slot(
        input.desired_start,
        input.duration.unwrap_or(timeline.default_subtitle_secs),
        &input.existing,
        input.max_duration.unwrap_or(timeline.max_duration_secs),
    ))
}

pub fn check_drag_collision(input: DragInput) -> Result<bool, String> {
    Ok(dramaloc_timeline::check_drag_collision(
        &input.dragged_id,
        input.new_start,
        input.new_end,
        &input.subtitles,
    ))
}

pub fn adjust_position(input: AdjustInput) -> Result<TimeRange, String> {
    Ok(adjust_position_to_avoid_collision(input.desired, &input.existing))
}

pub fn find_overlaps(input: TrackInput) -> Result<Vec<OverlapPair>, String> {
    Ok(find_overlapping_pairs(&input.subtitles)
        .into_iter()
        .map(|(first, second)| OverlapPair { first, second })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::commands::{dispatch, Request};
    use crate::state::AppState;
    use serde_json::{json, Value};

    fn run(cmd: &str, args: Value) -> Value {
        let request = Request {
            cmd: cmd.to_string(),
            args,
        };
        serde_json::to_value(dispatch(&AppState::default(), request)).unwrap()
    }

    #[test]
    fn test_find_time_slot_uses_config_defaults() {
        let response = run(
            "find_time_slot",
            json!({"desiredStart": 1.0, "existing": [{"startTime": 0.0, "endTime": 2.0}]}),
        );
        assert_eq!(response, json!({"ok": {"startTime": 2.0, "endTime": 4.0}}));
    }

    #[test]
    fn test_find_time_slot_none_when_full() {
        let response = run(
            "find_time_slot",
            json!({
                "desiredStart": 0.0,
                "duration": 3.0,
                "existing": [{"startTime": 0.0, "endTime": 5.0}],
                "maxDuration": 6.0
            }),
        );
        assert_eq!(response, json!({"ok": null}));
    }

    #[test]
    fn test_drag_and_adjust() {
        let subtitles = json!([
            {"id": "a", "startTime": 0.0, "endTime": 2.0},
            {"id": "b", "startTime": 3.0, "endTime": 5.0}
        ]);
        assert_eq!(
            run(
                "check_drag_collision",
                json!({"draggedId": "a", "newStart": 2.5, "newEnd": 3.5, "subtitles": subtitles})
            ),
            json!({"ok": true})
        );
        assert_eq!(
            run(
                "adjust_position",
                json!({
                    "desired": {"startTime": 1.0, "endTime": 2.0},
                    "existing": [{"startTime": 0.0, "endTime": 1.5}]
                })
            ),
            json!({"ok": {"startTime": 1.5, "endTime": 2.5}})
        );
    }

    #[test]
    fn test_find_overlaps() {
        let response = run(
            "find_overlaps",
            json!({"subtitles": [
                {"id": "a", "startTime": 0.0, "endTime": 2.0},
                {"id": "b", "startTime": 1.0, "endTime": 3.0}
            ]}),
        );
        assert_eq!(response, json!({"ok": [{"first": "a", "second": "b"}]}));
    }
}
