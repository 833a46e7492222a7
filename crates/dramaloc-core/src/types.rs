//! 共用类型定义

use serde::{Deserialize, Serialize};

/// 时间区间（秒）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// 开始时间（秒）
    pub start_time: f64,
    /// 结束时间（秒）
    pub end_time: f64,
}

impl TimeRange {
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// 区间时长（秒）
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// 时间轴上已放置的字幕块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleWithTime {
    /// 调用方提供的字幕 ID
    pub id: String,
    /// 开始时间（秒）
    pub start_time: f64,
    /// 结束时间（秒）
    pub end_time: f64,
}

impl SubtitleWithTime {
    pub fn new(id: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
        }
    }

    /// 取得字幕块的时间区间
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

impl From<&SubtitleWithTime> for TimeRange {
    fn from(subtitle: &SubtitleWithTime) -> Self {
        subtitle.range()
    }
}

/// 项目的单一语言版本
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// 目标语言（包含“源语言”时走源语言流水线）
    pub target_language: String,
    /// 当前阶段
    pub current_stage: String,
    /// 已完成集数
    #[serde(default)]
    pub completed_episodes: Option<u32>,
    /// 总集数
    #[serde(default)]
    pub total_episodes: Option<u32>,
}

impl Variant {
    pub fn new(target_language: impl Into<String>, current_stage: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
            current_stage: current_stage.into(),
            completed_episodes: None,
            total_episodes: None,
        }
    }

    /// 附带集数完成情况
    pub fn with_episodes(mut self, completed: u32, total: u32) -> Self {
        self.completed_episodes = Some(completed);
        self.total_episodes = Some(total);
        self
    }

    /// 同时提供已完成集数与总集数时返回两者
    pub fn episode_counts(&self) -> Option<(u32, u32)> {
        self.completed_episodes.zip(self.total_episodes)
    }
}

/// 分析页筛选用的记录
///
/// 上游数据有时以 ID、有时以显示名称填写同一概念，
/// 因此每个维度都保留多个别名字段，任一字段相等即视为匹配。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterRecord {
    pub drama_id: Option<String>,
    pub drama_name: Option<String>,
    pub drama: Option<String>,
    pub language_code: Option<String>,
    pub language: Option<String>,
    pub translator: Option<String>,
    pub name: Option<String>,
    /// 记录日期（`YYYY-MM-DD` 等格式）
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_duration() {
        let range = TimeRange::new(1.5, 4.0);
        assert_eq!(range.duration(), 2.5);
    }

    #[test]
    fn test_variant_episode_counts() {
        let variant = Variant::new("英语", "人工翻译");
        assert_eq!(variant.episode_counts(), None);

        let variant = variant.with_episodes(3, 10);
        assert_eq!(variant.episode_counts(), Some((3, 10)));
    }

    #[test]
    fn test_filter_record_accepts_camel_case_and_unknown_fields() {
        let record: FilterRecord = serde_json::from_str(
            r#"{"dramaId":"d1","languageCode":"en","cost":120,"date":"2026-01-28"}"#,
        )
        .unwrap();

        assert_eq!(record.drama_id.as_deref(), Some("d1"));
        assert_eq!(record.language_code.as_deref(), Some("en"));
        assert_eq!(record.date.as_deref(), Some("2026-01-28"));
        assert!(record.translator.is_none());
    }

    #[test]
    fn test_subtitle_serializes_camel_case() {
        let subtitle = SubtitleWithTime::new("s1", 0.0, 2.0);
        let json = serde_json::to_value(&subtitle).unwrap();
        assert_eq!(json["startTime"], 0.0);
        assert_eq!(json["endTime"], 2.0);
    }
}
