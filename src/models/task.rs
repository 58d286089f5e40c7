//! # 转换任务数据模型
//!
//! ## 依赖关系
//! - 由 `planner/` 创建
//! - 被 `batch/runner.rs`, `batch/report.rs` 消费

use std::path::PathBuf;

/// 通过过滤后的文件及其新文件名主干（不含前缀与扩展名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub source: PathBuf,
    pub new_stem: String,
}

/// 单个文件的转换任务，创建后不可变，只被调度一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    /// 源文件（已规范化的绝对路径）
    pub source_path: PathBuf,
    /// 目标文件（已规范化的绝对路径）
    pub destination_path: PathBuf,
    /// 源文件所在目录相对基准目录的路径，空表示位于基准目录
    pub relative_directory: PathBuf,
}
