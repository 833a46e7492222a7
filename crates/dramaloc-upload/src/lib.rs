//! Upload form handling for dramaloc
//!
//! Parsing and validation behind the media upload and task-assignment
//! forms. Unlike the analytics and progress helpers, everything here
//! rejects bad input with a message the form can show to the user.

pub mod batch;
pub mod episodes;
pub mod error;
pub mod filename;
pub mod kind;
pub mod validate;

pub use batch::{check_batch, BatchIssue, BatchReport, DuplicateGroup, ParsedUpload};
pub use episodes::{parse_episode_range, MAX_EPISODE_SPAN};
pub use error::UploadError;
pub use filename::{parse_file_name, ParsedFileName};
pub use kind::UploadKind;
pub use validate::{format_file_size, validate_upload};

// Re-export types from dramaloc-core
pub use dramaloc_core::UploadLimits;
