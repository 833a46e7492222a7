//! Subtitle collision detection and slot finding
//!
//! Blocks are half-open in practice: two blocks that only touch at an
//! endpoint do not collide.

use dramaloc_core::{SubtitleWithTime, TimeRange};
use tracing::debug;

/// Whether two time ranges overlap (touching endpoints do not count)
pub fn has_time_overlap(a: &TimeRange, b: &TimeRange) -> bool {
    a.start_time < b.end_time && b.start_time < a.end_time
}

fn sorted_by_start(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    sorted
}

/// Find a slot of `duration` seconds for a new subtitle
///
/// Tries the desired position first, then the earliest gap between existing
/// blocks, then the space after the last block, then the space before the
/// first block. Returns `None` when the track has no room left.
pub fn find_available_time_slot(
    desired_start: f64,
    duration: f64,
    existing: &[TimeRange],
    max_duration: f64,
) -> Option<TimeRange> {
    let desired = TimeRange::new(desired_start, desired_start + duration);
    let in_bounds = desired.start_time >= 0.0 && desired.end_time <= max_duration;
    if in_bounds && !existing.iter().any(|r| has_time_overlap(&desired, r)) {
        return Some(desired);
    }

    if existing.is_empty() {
        return Some(TimeRange::new(0.0, duration.min(max_duration)));
    }

    let sorted = sorted_by_start(existing);

    // Right edge of everything scanned so far
    let mut reached = sorted[0].end_time;
    for next in sorted.iter().skip(1) {
        let gap = next.start_time - reached;
        if gap >= duration && reached + duration <= max_duration {
            return Some(TimeRange::new(reached, reached + duration));
        }
        reached = reached.max(next.end_time);
    }

    if reached + duration <= max_duration {
        return Some(TimeRange::new(reached, reached + duration));
    }

    if sorted[0].start_time >= duration && duration <= max_duration {
        return Some(TimeRange::new(0.0, duration));
    }

    debug!(
        "No {:.2}s slot available among {} subtitles (max {:.2}s)",
        duration,
        existing.len(),
        max_duration
    );
    None
}

/// Whether moving `dragged_id` to `[new_start, new_end]` hits another block
pub fn check_drag_collision(
    dragged_id: &str,
    new_start: f64,
    new_end: f64,
    all: &[SubtitleWithTime],
) -> bool {
    let moved = TimeRange::new(new_start, new_end);
    all.iter()
        .filter(|s| s.id != dragged_id)
        .any(|s| has_time_overlap(&moved, &s.range()))
}

/// Push a block to just after the blocks it collides with
///
/// This is a single nudge: the moved block keeps its duration and starts at
/// the latest end among the blocks it overlapped, which can still overlap a
/// block further to the right.
pub fn adjust_position_to_avoid_collision(desired: TimeRange, existing: &[TimeRange]) -> TimeRange {
    let latest_end = existing
        .iter()
        .filter(|r| has_time_overlap(&desired, r))
        .map(|r| r.end_time)
        .reduce(f64::max);

    match latest_end {
        Some(start) => TimeRange::new(start, start + desired.duration()),
        None => desired,
    }
}

/// All pairs of subtitles on a track that overlap, earlier block first
pub fn find_overlapping_pairs(subtitles: &[SubtitleWithTime]) -> Vec<(String, String)> {
    let mut sorted: Vec<&SubtitleWithTime> = subtitles.iter().collect();
    sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    let mut pairs = Vec::new();
    for (i, current) in sorted.iter().enumerate() {
        for other in sorted.iter().skip(i + 1) {
            if other.start_time >= current.end_time {
                break;
            }
            if has_time_overlap(&current.range(), &other.range()) {
                pairs.push((current.id.clone(), other.id.clone()));
            }
        }
    }
    pairs
}
