//! Episode range input (`1-3,5,7-9`)

use std::collections::BTreeSet;

use crate::error::UploadError;

/// Largest number of episodes a single `N-M` token may cover
pub const MAX_EPISODE_SPAN: u32 = 10_000;

fn parse_episode(token: &str, raw: &str) -> Result<u32, UploadError> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(UploadError::InvalidEpisode(raw.to_string()));
    }
    let episode: u32 = token
        .parse()
        .map_err(|_| UploadError::InvalidEpisode(raw.to_string()))?;
    if episode == 0 {
        return Err(UploadError::EpisodeNotPositive(raw.to_string()));
    }
    Ok(episode)
}

/// Parse a comma-separated list of episodes and inclusive ranges
///
/// Returns the episodes deduplicated in ascending order. Both `,` and the
/// full-width `，` separate tokens; blank tokens are skipped.
pub fn parse_episode_range(input: &str) -> Result<Vec<u32>, UploadError> {
    let mut episodes = BTreeSet::new();
    let mut seen_token = false;

    for raw in input.split([',', '，']) {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        seen_token = true;

        match token.split_once('-') {
            Some((start, end)) => {
                let start = parse_episode(start.trim(), token)?;
                let end = parse_episode(end.trim(), token)?;
                if start > end {
                    return Err(UploadError::ReversedRange { start, end });
                }
                if end - start >= MAX_EPISODE_SPAN {
                    return Err(UploadError::RangeTooWide { start, end });
                }
                episodes.extend(start..=end);
            }
            None => {
                episodes.insert(parse_episode(token, token)?);
            }
        }
    }

    if !seen_token {
        return Err(UploadError::EmptyEpisodeRange);
    }

    Ok(episodes.into_iter().collect())
}
