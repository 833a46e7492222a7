//! Stage weight tables for the two localization pipelines

use serde::{Deserialize, Serialize};

/// Which weight table applies to a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    /// Source-language pipeline (AI extraction, erasure, AI translation, assignment)
    Source,
    /// Target-language pipeline (manual translation, QA, muxing)
    Target,
}

impl PipelineKind {
    /// Ordered stage table for this pipeline
    pub fn stages(&self) -> &'static [StageWeight] {
        match self {
            PipelineKind::Source => SOURCE_STAGES,
            PipelineKind::Target => TARGET_STAGES,
        }
    }
}

/// Share of overall completion covered by one stage, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageWeightRange {
    pub start: u8,
    pub end: u8,
}

impl StageWeightRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Zero-width ranges mark "waiting for confirmation" stages
    pub fn is_zero_width(&self) -> bool {
        self.start == self.end
    }
}

/// A named stage and its weight range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageWeight {
    pub name: &'static str,
    pub range: StageWeightRange,
}

const fn stage(name: &'static str, start: u8, end: u8) -> StageWeight {
    StageWeight {
        name,
        range: StageWeightRange::new(start, end),
    }
}

/// Source-language pipeline, in workflow order
pub static SOURCE_STAGES: &[StageWeight] = &[
    stage("待开始", 0, 0),
    stage("AI提取", 0, 30),
    stage("AI提取-待确认", 30, 30),
    stage("AI提取-已完成", 30, 30),
    stage("视频擦除", 30, 60),
    stage("视频擦除-待确认", 60, 60),
    stage("视频擦除-已完成", 60, 60),
    stage("AI翻译", 60, 90),
    stage("AI翻译-待确认", 90, 90),
    stage("AI翻译-已完成", 90, 90),
    stage("任务分配", 90, 100),
    stage("任务分配-已完成", 100, 100),
    stage("已完成", 100, 100),
];

/// Target-language pipeline, in workflow order
pub static TARGET_STAGES: &[StageWeight] = &[
    stage("待开始", 0, 0),
    stage("人工翻译", 0, 40),
    stage("翻译待确认", 40, 40),
    stage("质检审核", 40, 70),
    stage("质检待确认", 70, 70),
    stage("视频压制", 70, 100),
    stage("已完成", 100, 100),
];

/// Ordered stage table for a pipeline
pub fn stages(kind: PipelineKind) -> &'static [StageWeight] {
    kind.stages()
}

/// Look up a stage's weight range
pub fn stage_weight(kind: PipelineKind, stage: &str) -> Option<StageWeightRange> {
    kind.stages()
        .iter()
        .find(|s| s.name == stage)
        .map(|s| s.range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_table(table: &[StageWeight]) {
        for s in table {
            assert!(s.range.start <= s.range.end, "{} has start > end", s.name);
            assert!(s.range.end <= 100, "{} exceeds 100", s.name);
        }
        for pair in table.windows(2) {
            assert!(
                pair[0].range.end <= pair[1].range.start,
                "{} overlaps {}",
                pair[0].name,
                pair[1].name
            );
        }
        let last = table.last().unwrap();
        assert_eq!(last.name, "已完成");
        assert_eq!(last.range, StageWeightRange::new(100, 100));
    }

    #[test]
    fn test_tables_are_ordered_and_bounded() {
        check_table(SOURCE_STAGES);
        check_table(TARGET_STAGES);
    }

    #[test]
    fn test_stage_weight_lookup() {
        assert_eq!(
            stage_weight(PipelineKind::Source, "AI翻译-已完成"),
            Some(StageWeightRange::new(90, 90))
        );
        assert_eq!(
            stage_weight(PipelineKind::Target, "质检审核"),
            Some(StageWeightRange::new(40, 70))
        );
        // Stage names are per pipeline
        assert_eq!(stage_weight(PipelineKind::Target, "AI提取"), None);
    }

    #[test]
    fn test_zero_width() {
        assert!(StageWeightRange::new(40, 40).is_zero_width());
        assert!(!StageWeightRange::new(40, 70).is_zero_width());
    }
}
