//! Upload validation errors

use thiserror::Error;

/// Upload form errors, worded for display next to the offending field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Episode range input is empty
    #[error("请输入集数范围")]
    EmptyEpisodeRange,

    /// Token is not a number or range
    #[error("无效的集数: {0}")]
    InvalidEpisode(String),

    /// Episode numbers start at 1
    #[error("集数必须大于 0: {0}")]
    EpisodeNotPositive(String),

    /// Range start after range end
    #[error("集数范围错误: 起始集 {start} 大于结束集 {end}")]
    ReversedRange { start: u32, end: u32 },

    /// Range covers too many episodes
    #[error("集数范围过大: {start}-{end}")]
    RangeTooWide { start: u32, end: u32 },

    /// File name has no extension
    #[error("文件缺少扩展名: {0}")]
    MissingExtension(String),

    /// File name does not follow the naming convention
    #[error("文件名格式错误，应为「{expected}」")]
    InvalidFileNameFormat { expected: &'static str },

    /// Type segment does not match the upload kind
    #[error("文件类型应为「{expected}」，实际为「{found}」")]
    TypeMismatch { expected: &'static str, found: String },

    /// Episode segment of the file name is not a positive number
    #[error("文件名中的集数无效: {0}")]
    InvalidFileEpisode(String),

    /// Extension not accepted for this upload kind
    #[error("不支持的文件格式 .{extension}，仅支持 {allowed}")]
    UnsupportedExtension { extension: String, allowed: String },

    /// Zero-byte file
    #[error("文件为空: {0}")]
    EmptyFile(String),

    /// File exceeds the size limit
    #[error("文件 {name} 大小为 {size}，超过上限 {limit}")]
    FileTooLarge {
        name: String,
        size: String,
        limit: String,
    },
}
