//! # qbc - Quarto Batch Convert
//!
//! 调用 Quarto CLI 批量转换 Jupyter Notebook (.ipynb) 与 Quarto 文档 (.qmd)。
//!
//! ## 流程
//! 文件收集 -> 过滤/重命名 -> 目标路径规划 -> 并行调度 `quarto convert` -> 汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集、并行调度、报告)
//!   │     ├── planner/  (过滤重命名、目标路径)
//!   │     └── models/   (配置与任务)
//!   ├── utils/      (输出、日志、路径、Quarto 调用)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod planner;
mod utils;

use clap::Parser;
use cli::Cli;
use error::QbcError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        if let QbcError::CommandNotFound { .. } = e {
            for hint in utils::quarto::INSTALL_HINTS {
                utils::output::print_info(hint);
            }
        }
        std::process::exit(1);
    }
}
