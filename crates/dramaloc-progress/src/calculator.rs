//! Stage progress calculation
//!
//! Every function here is total: unknown stages fall back to 0% instead of
//! failing, since the result feeds straight into progress bars.

use dramaloc_core::Variant;
use tracing::debug;

use crate::stages::{stage_weight, PipelineKind, StageWeightRange};

/// Marker that selects the source-language pipeline
const SOURCE_LANGUAGE_MARKER: &str = "源语言";

/// Select the pipeline for a variant's target language
pub fn pipeline_kind_for(target_language: &str) -> PipelineKind {
    if target_language.contains(SOURCE_LANGUAGE_MARKER) {
        PipelineKind::Source
    } else {
        PipelineKind::Target
    }
}

fn lookup(kind: PipelineKind, stage: &str) -> Option<StageWeightRange> {
    let weight = stage_weight(kind, stage);
    if weight.is_none() {
        debug!("Unknown {:?} stage '{}', reporting 0%", kind, stage);
    }
    weight
}

/// Coarse progress: the start weight of the stage
pub fn stage_progress(kind: PipelineKind, stage: &str) -> u8 {
    lookup(kind, stage).map(|w| w.start).unwrap_or(0)
}

/// Progress interpolated across the stage by completed episodes
///
/// `total == 0` and zero-width stages both report the stage's start weight.
pub fn stage_progress_enhanced(kind: PipelineKind, stage: &str, completed: u32, total: u32) -> u8 {
    let Some(weight) = lookup(kind, stage) else {
        return 0;
    };

    if total == 0 || weight.is_zero_width() {
        return weight.start;
    }

    let ratio = completed.min(total) as f64 / total as f64;
    let span = (weight.end - weight.start) as f64;
    let value = weight.start as f64 + span * ratio;

    value.round() as u8
}

/// Progress shown on a variant card (stage start weight)
pub fn card_progress(variant: &Variant) -> u8 {
    stage_progress(
        pipeline_kind_for(&variant.target_language),
        &variant.current_stage,
    )
}

/// Episode-aware progress, falling back to the card progress
pub fn detailed_progress(variant: &Variant) -> u8 {
    let kind = pipeline_kind_for(&variant.target_language);
    match variant.episode_counts() {
        Some((completed, total)) => {
            stage_progress_enhanced(kind, &variant.current_stage, completed, total)
        }
        None => stage_progress(kind, &variant.current_stage),
    }
}

fn average(values: impl ExactSizeIterator<Item = u8>) -> u8 {
    let count = values.len();
    if count == 0 {
        return 0;
    }
    let sum: u32 = values.map(u32::from).sum();
    (sum as f64 / count as f64).round() as u8
}

/// Project progress: rounded mean of every variant's card progress
///
/// An empty project reports 0.
pub fn combined_project_progress(variants: &[Variant]) -> u8 {
    average(variants.iter().map(card_progress))
}

/// Project progress using episode-aware progress per variant
pub fn project_progress_detailed(variants: &[Variant]) -> u8 {
    average(variants.iter().map(detailed_progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::{SOURCE_STAGES, TARGET_STAGES};

    #[test]
    fn test_pipeline_kind_for() {
        assert_eq!(pipeline_kind_for("中文（源语言）"), PipelineKind::Source);
        assert_eq!(pipeline_kind_for("源语言"), PipelineKind::Source);
        assert_eq!(pipeline_kind_for("英语"), PipelineKind::Target);
        assert_eq!(pipeline_kind_for(""), PipelineKind::Target);
    }

    #[test]
    fn test_stage_progress_coarse() {
        assert_eq!(stage_progress(PipelineKind::Source, "待开始"), 0);
        assert_eq!(stage_progress(PipelineKind::Source, "视频擦除"), 30);
        assert_eq!(stage_progress(PipelineKind::Source, "AI翻译-已完成"), 90);
        assert_eq!(stage_progress(PipelineKind::Target, "质检审核"), 40);
        assert_eq!(stage_progress(PipelineKind::Target, "已完成"), 100);
    }

    #[test]
    fn test_unknown_stage_is_zero() {
        assert_eq!(stage_progress(PipelineKind::Target, "不存在的阶段"), 0);
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "不存在的阶段", 3, 4), 0);
    }

    #[test]
    fn test_enhanced_interpolates_and_rounds() {
        // 0 + 40 * 1/3 = 13.33
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "人工翻译", 1, 3), 13);
        // 0 + 40 * 2/3 = 26.67
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "人工翻译", 2, 3), 27);
        // 70 + 30 * 1/4 = 77.5, half rounds up
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "视频压制", 1, 4), 78);
        // 60 + 30 * 1/2 = 75
        assert_eq!(stage_progress_enhanced(PipelineKind::Source, "AI翻译", 5, 10), 75);
    }

    #[test]
    fn test_enhanced_clamps_completed() {
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "质检审核", 15, 10), 70);
    }

    #[test]
    fn test_enhanced_zero_width_stage_ignores_ratio() {
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "翻译待确认", 0, 10), 40);
        assert_eq!(stage_progress_enhanced(PipelineKind::Target, "翻译待确认", 10, 10), 40);
    }

    #[test]
    fn test_enhanced_zero_total_returns_start() {
        for (kind, stages) in [(PipelineKind::Source, SOURCE_STAGES), (PipelineKind::Target, TARGET_STAGES)] {
            for s in stages {
                for completed in [0, 1, 50] {
                    assert_eq!(
                        stage_progress_enhanced(kind, s.name, completed, 0),
                        s.range.start
                    );
                }
            }
        }
    }

    #[test]
    fn test_enhanced_boundaries() {
        for (kind, stages) in [(PipelineKind::Source, SOURCE_STAGES), (PipelineKind::Target, TARGET_STAGES)] {
            for s in stages.iter().filter(|s| !s.range.is_zero_width()) {
                for total in [1, 7, 80] {
                    assert_eq!(stage_progress_enhanced(kind, s.name, 0, total), s.range.start);
                    assert_eq!(stage_progress_enhanced(kind, s.name, total, total), s.range.end);
                }
            }
        }
    }

    #[test]
    fn test_enhanced_is_monotonic() {
        for (kind, stages) in [(PipelineKind::Source, SOURCE_STAGES), (PipelineKind::Target, TARGET_STAGES)] {
            for s in stages {
                let total = 37;
                let mut previous = 0;
                for completed in 0..=total {
                    let value = stage_progress_enhanced(kind, s.name, completed, total);
                    assert!(value >= previous, "{} decreased at {}", s.name, completed);
                    previous = value;
                }
            }
        }
    }

    #[test]
    fn test_combined_project_progress() {
        let variants = vec![
            Variant::new("中文（源语言）", "AI翻译-已完成"),
            Variant::new("英语", "人工翻译"),
        ];
        assert_eq!(combined_project_progress(&variants), 45);
    }

    #[test]
    fn test_combined_ignores_episode_counts() {
        let variants = vec![Variant::new("英语", "人工翻译").with_episodes(10, 10)];
        assert_eq!(combined_project_progress(&variants), 0);
        assert_eq!(project_progress_detailed(&variants), 40);
    }

    #[test]
    fn test_combined_rounds_half_up() {
        // (0 + 40 + 40 + 70) / 4 = 37.5
        let variants = vec![
            Variant::new("英语", "人工翻译"),
            Variant::new("日语", "质检审核"),
            Variant::new("韩语", "翻译待确认"),
            Variant::new("泰语", "视频压制"),
        ];
        assert_eq!(combined_project_progress(&variants), 38);
    }

    #[test]
    fn test_combined_empty_is_zero() {
        assert_eq!(combined_project_progress(&[]), 0);
        assert_eq!(project_progress_detailed(&[]), 0);
    }

    #[test]
    fn test_detailed_progress_without_counts_is_coarse() {
        let variant = Variant::new("中文（源语言）", "视频擦除");
        assert_eq!(detailed_progress(&variant), 30);
        assert_eq!(detailed_progress(&variant.with_episodes(4, 8)), 45);
    }
}
