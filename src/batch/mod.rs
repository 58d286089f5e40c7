//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 从文件、目录和 glob 模式收集文件列表
//! - 并行调度外部转换命令
//! - 结果统计与 CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner};
