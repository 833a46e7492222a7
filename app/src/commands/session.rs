//! Session commands
//!
//! The UI used to keep the user and role in browser storage; here the
//! bridge owns the session and every command reads it from `AppState`.

use dramaloc_core::{Role, Session};
use serde::Deserialize;
use tracing::info;

use crate::commands::NoArgs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

pub fn login(state: &AppState, input: LoginInput) -> Result<Session, String> {
    let session = Session::new(input.user_id, input.display_name, input.role);
    info!(
        "Logged in {} as {}",
        session.user_id,
        session.role.display_name()
    );
    state.set_session(Some(session.clone()))?;
    Ok(session)
}

pub fn logout(state: &AppState, _input: NoArgs) -> Result<(), String> {
    state.set_session(None)
}

pub fn current_session(state: &AppState, _input: NoArgs) -> Result<Option<Session>, String> {
    state.current_session()
}
