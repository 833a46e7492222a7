//! 后台配置

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析配置失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 字幕时间轴设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// 时间轴最大长度（秒）
    pub max_duration_secs: f64,
    /// 新增字幕的默认时长（秒）
    pub default_subtitle_secs: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_duration_secs: 300.0,
            default_subtitle_secs: 2.0,
        }
    }
}

/// 上传大小限制
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    /// 视频文件上限（字节）
    pub max_video_bytes: u64,
    /// 字幕、术语表等文档上限（字节）
    pub max_document_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_video_bytes: 2 * 1024 * 1024 * 1024,
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

/// 后台整体配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 日期筛选的参考“今天”，未设置时使用本地时钟
    pub anchor_date: Option<NaiveDate>,
    pub timeline: TimelineConfig,
    pub upload: UploadLimits,
}

impl DashboardConfig {
    /// 从 JSON 文件载入
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串载入
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 取得参考日期
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
