//! Subtitle timeline placement for dramaloc
//!
//! Overlap tests and slot finding for subtitle blocks on a single track.

pub mod collision;

pub use collision::{
    adjust_position_to_avoid_collision, check_drag_collision, find_available_time_slot,
    find_overlapping_pairs, has_time_overlap,
};

// Re-export types from dramaloc-core
pub use dramaloc_core::{SubtitleWithTime, TimeRange};
