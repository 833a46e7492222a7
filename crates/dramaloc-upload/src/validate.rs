//! Upload file checks and size formatting

use dramaloc_core::UploadLimits;

use crate::error::UploadError;
use crate::filename::split_extension;
use crate::kind::UploadKind;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size: `0 Bytes`, `1.5 KB`, `2 MB`
///
/// Base 1024, at most two decimals with trailing zeros trimmed.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, SIZE_UNITS[unit])
}

/// Check extension and size of a file before it is uploaded as `kind`
pub fn validate_upload(
    file_name: &str,
    size_bytes: u64,
    kind: UploadKind,
    limits: &UploadLimits,
) -> Result<(), UploadError> {
    let (_, extension) = split_extension(file_name.trim())?;
    let extension = extension.to_ascii_lowercase();
    let allowed = kind.allowed_extensions();

    if !allowed.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedExtension {
            extension,
            allowed: allowed.join(", "),
        });
    }

    if size_bytes == 0 {
        return Err(UploadError::EmptyFile(file_name.to_string()));
    }

    let limit = kind.size_limit(limits);
    if size_bytes > limit {
        return Err(UploadError::FileTooLarge {
            name: file_name.to_string(),
            size: format_file_size(size_bytes),
            limit: format_file_size(limit),
        });
    }

    Ok(())
}
