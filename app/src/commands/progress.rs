//! Progress commands

use dramaloc_progress::{
    card_progress, combined_project_progress, detailed_progress, pipeline_kind_for,
    project_progress_detailed, stages, PipelineKind, StageWeight, Variant,
};
use serde::{Deserialize, Serialize};

/// Stage lookup from frontend
#[derive(Debug, Deserialize)]
pub struct StageInput {
    pub pipeline: PipelineKind,
    pub stage: String,
}

/// Stage lookup with episode counts
#[derive(Debug, Deserialize)]
pub struct EnhancedStageInput {
    pub pipeline: PipelineKind,
    pub stage: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Deserialize)]
pub struct PipelineInput {
    pub pipeline: PipelineKind,
}

#[derive(Debug, Deserialize)]
pub struct ProjectInput {
    pub variants: Vec<Variant>,
    /// Use episode counts when present
    #[serde(default)]
    pub detailed: bool,
}

/// Progress of one variant card
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantProgress {
    pub target_language: String,
    pub pipeline: PipelineKind,
    pub progress: u8,
}

/// Project-level progress
#[derive(Debug, Serialize)]
pub struct ProjectProgress {
    pub overall: u8,
    pub variants: Vec<VariantProgress>,
}

pub fn stage_progress(input: StageInput) -> Result<u8, String> {
    Ok(dramaloc_progress::stage_progress(input.pipeline, &input.stage))
}

pub fn stage_progress_enhanced(input: EnhancedStageInput) -> Result<u8, String> {
    Ok(dramaloc_progress::stage_progress_enhanced(
        input.pipeline,
        &input.stage,
        input.completed,
        input.total,
    ))
}

/// Ordered stages of a pipeline, for the stage picker
pub fn pipeline_stages(input: PipelineInput) -> Result<Vec<StageWeight>, String> {
    Ok(stages(input.pipeline).to_vec())
}

pub fn project_progress(input: ProjectInput) -> Result<ProjectProgress, String> {
    let per_variant = if input.detailed {
        detailed_progress
    } else {
        card_progress
    };

    let variants = input
        .variants
        .iter()
        .map(|v| VariantProgress {
            target_language: v.target_language.clone(),
            pipeline: pipeline_kind_for(&v.target_language),
            progress: per_variant(v),
        })
        .collect();

    let overall = if input.detailed {
        project_progress_detailed(&input.variants)
    } else {
        combined_project_progress(&input.variants)
    };

    Ok(ProjectProgress { overall, variants })
}
