//! Structured media file names
//!
//! Video and subtitle files are named `剧名-语言-集数.ext`; glossaries and
//! on-screen text sheets carry an extra type segment,
//! `剧名-术语表-语言-集数.ext`. Segments are read from the right so drama
//! names may themselves contain `-`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::kind::UploadKind;

/// Episode segment: `12`, `EP12`, `E12`, `第12集`
static EPISODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:ep|e|第)?\s*(\d+)\s*集?$").expect("valid episode regex")
});

/// Fields recovered from a file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFileName {
    pub drama_name: String,
    pub language: String,
    pub episode: u32,
    /// Type segment for glossary / on-screen text files
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

/// Split `name.ext` into stem and extension
pub(crate) fn split_extension(file_name: &str) -> Result<(&str, &str), UploadError> {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Ok((stem, ext)),
        _ => Err(UploadError::MissingExtension(file_name.to_string())),
    }
}

fn parse_episode(segment: &str) -> Result<u32, UploadError> {
    let episode = EPISODE_RE
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| UploadError::InvalidFileEpisode(segment.to_string()))?;

    if episode == 0 {
        return Err(UploadError::InvalidFileEpisode(segment.to_string()));
    }
    Ok(episode)
}

/// Parse a file name according to the naming rule of `kind`
pub fn parse_file_name(file_name: &str, kind: UploadKind) -> Result<ParsedFileName, UploadError> {
    let file_name = file_name.trim();
    let (stem, _) = split_extension(file_name)?;
    let format_error = || UploadError::InvalidFileNameFormat {
        expected: kind.format_hint(),
    };

    // Trailing fields: [type,] language, episode
    let trailing = if kind.type_label().is_some() { 3 } else { 2 };
    let mut parts: Vec<&str> = stem.rsplitn(trailing + 1, '-').map(str::trim).collect();
    if parts.len() != trailing + 1 || parts.iter().any(|p| p.is_empty()) {
        return Err(format_error());
    }
    // rsplitn yields right to left
    parts.reverse();

    let drama_name = parts[0].to_string();
    let (file_type, language, episode) = match kind.type_label() {
        Some(expected) => {
            if parts[1] != expected {
                return Err(UploadError::TypeMismatch {
                    expected,
                    found: parts[1].to_string(),
                });
            }
            (Some(parts[1].to_string()), parts[2], parts[3])
        }
        None => (None, parts[1], parts[2]),
    };

    Ok(ParsedFileName {
        drama_name,
        language: language.to_string(),
        episode: parse_episode(episode)?,
        file_type,
    })
}
