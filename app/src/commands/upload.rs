//! Upload form commands

use dramaloc_core::Permission;
use dramaloc_upload::{BatchReport, UploadKind};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EpisodeRangeInput {
    pub input: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNameInput {
    pub file_name: String,
    pub kind: UploadKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInput {
    pub file_name: String,
    pub size_bytes: u64,
    pub kind: UploadKind,
}

#[derive(Debug, Deserialize)]
pub struct SizeInput {
    pub bytes: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInput {
    pub file_names: Vec<String>,
    pub kind: UploadKind,
}

/// File name check result as the upload form expects it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNameCheck {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drama_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn parse_episode_range(input: EpisodeRangeInput) -> Result<Vec<u32>, String> {
    dramaloc_upload::parse_episode_range(&input.input).map_err(|e| e.to_string())
}

/// Parse never fails at the command level; problems come back as `isValid: false`
pub fn parse_file_name(input: FileNameInput) -> Result<FileNameCheck, String> {
    let check = match dramaloc_upload::parse_file_name(&input.file_name, input.kind) {
        Ok(parsed) => FileNameCheck {
            is_valid: true,
            drama_name: Some(parsed.drama_name),
            language: Some(parsed.language),
            episode: Some(parsed.episode),
            file_type: parsed.file_type,
            error: None,
        },
        Err(e) => FileNameCheck {
            is_valid: false,
            drama_name: None,
            language: None,
            episode: None,
            file_type: None,
            error: Some(e.to_string()),
        },
    };
    Ok(check)
}

pub fn validate_upload(state: &AppState, input: UploadInput) -> Result<(), String> {
    state.require(Permission::UploadMedia)?;
    dramaloc_upload::validate_upload(
        &input.file_name,
        input.size_bytes,
        input.kind,
        &state.config.upload,
    )
    .map_err(|e| e.to_string())
}

pub fn format_file_size(input: SizeInput) -> Result<String, String> {
    Ok(dramaloc_upload::format_file_size(input.bytes))
}

pub fn check_batch(state: &AppState, input: BatchInput) -> Result<BatchReport, String> {
    state.require(Permission::UploadMedia)?;
    Ok(dramaloc_upload::check_batch(&input.file_names, input.kind))
}
