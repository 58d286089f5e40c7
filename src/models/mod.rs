//! # 数据模型模块
//!
//! 定义转换方向、运行配置与单文件转换任务。
//!
//! ## 依赖关系
//! - 被 `batch/`, `planner/` 和 `commands/` 使用
//! - 子模块: config, task

pub mod config;
pub mod task;

pub use config::{Direction, RunConfig};
pub use task::{FileTask, RenamedFile};
