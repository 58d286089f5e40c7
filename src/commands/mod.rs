//! # 命令执行模块
//!
//! 实现转换命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `planner/`, `models/`, `utils/`
//! - 子模块: convert

pub mod convert;

use crate::cli::Cli;
use crate::error::{QbcError, Result};

/// 执行命令；相对路径以当前目录为基准，之后只显式传递
pub fn run(cli: Cli) -> Result<()> {
    let base_dir = std::env::current_dir()
        .map_err(|e| QbcError::Other(format!("Cannot determine current directory: {}", e)))?;

    convert::execute(&cli.convert, &base_dir)
}
