//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 将诊断日志输出到 stderr。
//! 面向用户的结果输出仍由 `utils/output.rs` 负责。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing`, `tracing-subscriber` crate

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "qbc=warn";
const VERBOSE_LOG_FILTER: &str = "qbc=debug";

/// 初始化 tracing；`RUST_LOG` 优先，其次由 `verbose` 决定级别
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    // 重复初始化（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
