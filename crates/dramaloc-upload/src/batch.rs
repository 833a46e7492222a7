//! Checks across a whole batch of selected files

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::filename::{parse_file_name, ParsedFileName};
use crate::kind::UploadKind;

/// A file whose name parsed cleanly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUpload {
    pub file_name: String,
    pub parsed: ParsedFileName,
}

/// A file that was rejected, with the message to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchIssue {
    pub file_name: String,
    pub error: String,
}

/// Several files that map to the same drama, language and episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub drama_name: String,
    pub language: String,
    pub episode: u32,
    pub file_names: Vec<String>,
}

/// Result of checking a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub parsed: Vec<ParsedUpload>,
    pub issues: Vec<BatchIssue>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl BatchReport {
    /// Whether the batch can be submitted as is
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.duplicates.is_empty()
    }
}

/// Parse every file name in a batch and flag duplicates
pub fn check_batch<S: AsRef<str>>(file_names: &[S], kind: UploadKind) -> BatchReport {
    let mut report = BatchReport::default();
    let mut by_key: BTreeMap<(String, String, u32), Vec<String>> = BTreeMap::new();

    for name in file_names {
        let name = name.as_ref();
        match parse_file_name(name, kind) {
            Ok(parsed) => {
                by_key
                    .entry((parsed.drama_name.clone(), parsed.language.clone(), parsed.episode))
                    .or_default()
                    .push(name.to_string());
                report.parsed.push(ParsedUpload {
                    file_name: name.to_string(),
                    parsed,
                });
            }
            Err(e) => report.issues.push(BatchIssue {
                file_name: name.to_string(),
                error: e.to_string(),
            }),
        }
    }

    report.duplicates = by_key
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|((drama_name, language, episode), file_names)| DuplicateGroup {
            drama_name,
            language,
            episode,
            file_names,
        })
        .collect();

    debug!(
        "Checked {} {} files: {} parsed, {} rejected, {} duplicate groups",
        file_names.len(),
        kind.display_name(),
        report.parsed.len(),
        report.issues.len(),
        report.duplicates.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_batch() {
        let report = check_batch(&["剧-英语-1.mp4", "剧-英语-2.mp4"], UploadKind::Video);
        assert!(report.is_clean());
        assert_eq!(report.parsed.len(), 2);
    }

    #[test]
    fn test_reports_issues_and_duplicates() {
        let files = vec![
            "剧-英语-1.mp4".to_string(),
            "剧-英语-EP01.mov".to_string(),
            "剧-英语.mp4".to_string(),
            "剧-日语-1.mp4".to_string(),
        ];
        let report = check_batch(&files, UploadKind::Video);

        assert!(!report.is_clean());
        assert_eq!(report.parsed.len(), 3);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].file_name, "剧-英语.mp4");
        assert_eq!(
            report.duplicates,
            vec![DuplicateGroup {
                drama_name: "剧".to_string(),
                language: "英语".to_string(),
                episode: 1,
                file_names: vec!["剧-英语-1.mp4".to_string(), "剧-英语-EP01.mov".to_string()],
            }]
        );
    }
}
