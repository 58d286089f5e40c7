//! # 统一错误处理模块
//!
//! 定义 qbc 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// qbc 统一错误类型
#[derive(Error, Debug)]
pub enum QbcError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to create directory: {path}: {source}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid regex pattern: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Several files would be written to {destination}, refusing to overwrite:\n  {first}\n  {second}")]
    DestinationCollision {
        destination: String,
        first: String,
        second: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 文件发现错误
    // ─────────────────────────────────────────────────────────────
    #[error("No files found to process")]
    NoFilesFound,

    #[error("No files found matching the regex pattern: {pattern}")]
    NoFilesMatched { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("{failed} of {total} file(s) failed to convert")]
    ConversionFailures { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QbcError>;
