//! # 任务规划模块
//!
//! 把发现的候选文件变成转换任务。
//!
//! ## 功能
//! - 按正则过滤并重命名文件名主干
//! - 计算目标路径，镜像输入目录结构
//! - 检测目标路径冲突
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `models/`, `utils/paths.rs`

pub mod destination;
pub mod rename;

pub use destination::{ensure_destination_dir, prepare_output_root, DestinationPlanner};
pub use rename::{filter_and_rename, NamePattern};
