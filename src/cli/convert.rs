//! # 转换命令 CLI 定义
//!
//! 批量转换 .ipynb <-> .qmd 文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数经 `models/config.rs` 转换为 RunConfig

use clap::Args;
use std::path::PathBuf;

/// 转换参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Files, directories or glob patterns to search for files to convert
    #[arg(required = true, value_name = "INPUT_PATHS")]
    pub input_paths: Vec<String>,

    /// Convert .qmd files to .ipynb files (default: .ipynb to .qmd)
    #[arg(short, long, default_value_t = false)]
    pub qmd_to_ipynb: bool,

    /// Match pattern and optional replace pattern, separated by a forward slash.
    /// If no slash is present, only matching is performed
    #[arg(short, long, value_name = "MATCH/REPLACE")]
    pub match_replace_pattern: Option<String>,

    /// Prefix to add to the new file name (may contain directories, e.g. 'out/')
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Keep the original extension as part of the filename
    #[arg(short, long, default_value_t = false)]
    pub keep_extension: bool,

    /// Output path where to generate the files (default: current directory)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Recurse into subdirectories of directory inputs
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Path to the quarto executable (default: 'quarto' from PATH)
    #[arg(long, value_name = "PATH")]
    pub quarto: Option<PathBuf>,

    /// Write a CSV report with the outcome of every file
    #[arg(long, value_name = "CSV")]
    pub report: Option<PathBuf>,
}
