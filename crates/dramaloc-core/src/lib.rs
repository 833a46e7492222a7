//! dramaloc-core - 短剧本地化后台核心库
//!
//! 提供共用值类型、配置与会话（角色权限）模型。

pub mod config;
pub mod session;
pub mod types;

pub use config::{ConfigError, DashboardConfig, TimelineConfig, UploadLimits};
pub use session::{Permission, Role, Session};
pub use types::*;
