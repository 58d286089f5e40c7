//! # 工具函数模块
//!
//! 提供美化输出、进度条、日志初始化、路径计算与 Quarto 调用等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `planner/` 模块使用
//! - 子模块: logging, output, paths, progress, quarto

pub mod logging;
pub mod output;
pub mod paths;
pub mod progress;
pub mod quarto;
