//! Workflow progress for dramaloc
//!
//! Maps a variant's current workflow stage (and, optionally, how many
//! episodes of that stage are done) onto a 0-100 completion percentage.

pub mod calculator;
pub mod stages;

pub use calculator::{
    card_progress, combined_project_progress, detailed_progress, pipeline_kind_for,
    project_progress_detailed, stage_progress, stage_progress_enhanced,
};
pub use stages::{stage_weight, stages, PipelineKind, StageWeight, StageWeightRange};

// Re-export types from dramaloc-core
pub use dramaloc_core::Variant;
