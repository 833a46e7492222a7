//! Bridge command modules

pub mod analytics;
pub mod progress;
pub mod session;
pub mod timeline;
pub mod upload;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::state::AppState;

/// One request line from the UI
#[derive(Debug, Deserialize)]
pub struct Request {
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line back to the UI: `{"ok": ...}` or `{"error": "..."}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(String),
}

/// Args for commands that take none; accepts `null`, `{}` or anything else
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArgs;

impl<'de> Deserialize<'de> for NoArgs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NoArgs)
    }
}

/// Decode one raw request line and run it
///
/// Blank lines yield `None`. Malformed lines, invalid UTF-8 included,
/// become an error response instead of stopping the bridge.
pub fn handle_line(state: &AppState, line: &[u8]) -> Option<Response> {
    let text = match std::str::from_utf8(line) {
        Ok(text) => text.trim(),
        Err(e) => return Some(Response::Error(format!("invalid request: {}", e))),
    };
    if text.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Request>(text) {
        Ok(request) => dispatch(state, request),
        Err(e) => Response::Error(format!("invalid request: {}", e)),
    };
    Some(response)
}

/// Decode args, run the command, encode its result
fn call<A, T, F>(args: Value, command: F) -> Result<Value, String>
where
    A: DeserializeOwned,
    T: Serialize,
    F: FnOnce(A) -> Result<T, String>,
{
    let args: A = serde_json::from_value(args).map_err(|e| format!("invalid args: {}", e))?;
    let output = command(args)?;
    serde_json::to_value(output).map_err(|e| e.to_string())
}

/// Route a request to its command
pub fn dispatch(state: &AppState, request: Request) -> Response {
    debug!("Command: {}", request.cmd);
    let args = request.args;

    let result = match request.cmd.as_str() {
        // Progress commands
        "stage_progress" => call(args, progress::stage_progress),
        "stage_progress_enhanced" => call(args, progress::stage_progress_enhanced),
        "pipeline_stages" => call(args, progress::pipeline_stages),
        "project_progress" => call(args, progress::project_progress),
        // Analytics commands
        "filter_records" => call(args, |a| analytics::filter_records(state, a)),
        "date_range_bounds" => call(args, |a| analytics::date_range_bounds(state, a)),
        // Timeline commands
        "find_time_slot" => call(args, |a| timeline::find_time_slot(state, a)),
        "check_drag_collision" => call(args, timeline::check_drag_collision),
        "adjust_position" => call(args, timeline::adjust_position),
        "find_overlaps" => call(args, timeline::find_overlaps),
        // Upload commands
        "parse_episode_range" => call(args, upload::parse_episode_range),
        "parse_file_name" => call(args, upload::parse_file_name),
        "validate_upload" => call(args, |a| upload::validate_upload(state, a)),
        "format_file_size" => call(args, upload::format_file_size),
        "check_batch" => call(args, |a| upload::check_batch(state, a)),
        // Session commands
        "login" => call(args, |a| session::login(state, a)),
        "logout" => call(args, |a| session::logout(state, a)),
        "current_session" => call(args, |a| session::current_session(state, a)),
        other => Err(format!("unknown command: {}", other)),
    };

    match result {
        Ok(value) => Response::Ok(value),
        Err(e) => {
            warn!("Command {} failed: {}", request.cmd, e);
            Response::Error(e)
        }
    }
}
