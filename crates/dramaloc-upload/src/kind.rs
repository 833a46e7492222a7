//! Upload kinds and their naming rules

use dramaloc_core::UploadLimits;
use serde::{Deserialize, Serialize};

/// What a file is being uploaded as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// Episode video
    Video,
    /// Subtitle file
    Subtitle,
    /// Terminology glossary
    Glossary,
    /// On-screen text sheet
    OnScreenText,
}

impl UploadKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UploadKind::Video => "视频",
            UploadKind::Subtitle => "字幕",
            UploadKind::Glossary => "术语表",
            UploadKind::OnScreenText => "画面字",
        }
    }

    /// Literal type segment required in the file name, if any
    pub fn type_label(&self) -> Option<&'static str> {
        match self {
            UploadKind::Video | UploadKind::Subtitle => None,
            UploadKind::Glossary => Some("术语表"),
            UploadKind::OnScreenText => Some("画面字"),
        }
    }

    /// Naming convention shown to the user
    pub fn format_hint(&self) -> &'static str {
        match self {
            UploadKind::Video | UploadKind::Subtitle => "剧名-语言-集数.扩展名",
            UploadKind::Glossary => "剧名-术语表-语言-集数.扩展名",
            UploadKind::OnScreenText => "剧名-画面字-语言-集数.扩展名",
        }
    }

    /// Accepted extensions, lowercase without the dot
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Video => &["mp4", "mov", "mkv", "avi"],
            UploadKind::Subtitle => &["srt", "ass", "vtt"],
            UploadKind::Glossary | UploadKind::OnScreenText => &["xlsx", "xls", "csv"],
        }
    }

    /// Size limit for this kind
    pub fn size_limit(&self, limits: &UploadLimits) -> u64 {
        match self {
            UploadKind::Video => limits.max_video_bytes,
            _ => limits.max_document_bytes,
        }
    }
}
