//! Application state management

use std::sync::Mutex;

use dramaloc_analytics::DateRangeMatcher;
use dramaloc_core::{DashboardConfig, Permission, Session};

/// Main application state
pub struct AppState {
    /// Loaded configuration
    pub config: DashboardConfig,
    /// Reference day for analytics date ranges
    pub dates: DateRangeMatcher,
    /// Logged-in user, if any
    pub session: Mutex<Option<Session>>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let dates = DateRangeMatcher::new(config.anchor_date());
        Self {
            config,
            dates,
            session: Mutex::new(None),
        }
    }

    /// Snapshot of the current session
    pub fn current_session(&self) -> Result<Option<Session>, String> {
        self.session
            .lock()
            .map(|s| s.clone())
            .map_err(|_| "session state unavailable".to_string())
    }

    /// Replace the current session
    pub fn set_session(&self, session: Option<Session>) -> Result<(), String> {
        let mut current = self
            .session
            .lock()
            .map_err(|_| "session state unavailable".to_string())?;
        *current = session;
        Ok(())
    }

    /// Current session, provided it holds `permission`
    pub fn require(&self, permission: Permission) -> Result<Session, String> {
        match self.current_session()? {
            Some(session) if session.can(permission) => Ok(session),
            Some(session) => Err(format!(
                "{} 无权执行此操作 ({:?})",
                session.role.display_name(),
                permission
            )),
            None => Err("未登录".to_string()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
