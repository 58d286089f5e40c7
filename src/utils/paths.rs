//! # 路径工具
//!
//! 以显式的基准目录解析路径，不修改进程工作目录。
//! 规范化交给 `path-absolutize`（词法折叠 `.` 与 `..`，不访问文件系统），
//! 相对路径交给 `pathdiff`。
//!
//! ## 依赖关系
//! - 被 `batch/`, `planner/`, `models/config.rs`, `commands/convert.rs` 使用
//! - 使用 `path-absolutize`, `pathdiff` crate

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// 相对 `base` 解析路径（绝对路径只做规范化）
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    path.absolutize_from(base)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| base.join(path))
}

/// 计算 `path` 相对 `base` 的路径，可能以 `..` 开头；两者相同时返回空路径
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// 用于终端展示：位于 `base` 之下的路径显示为相对路径
pub fn display(path: &Path, base: &Path) -> String {
    let rel = relative_to(path, base);
    if rel.as_os_str().is_empty() || rel.starts_with("..") || rel.is_absolute() {
        path.display().to_string()
    } else {
        rel.display().to_string()
    }
}

/// 文件名是否以给定扩展名（含点）结尾
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(extension) && n.len() > extension.len())
        .unwrap_or(false)
}

/// 是否包含 glob 通配符
pub fn has_glob_meta(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '*' | '?' | '['))
}
