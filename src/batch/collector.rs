//! # 文件收集器
//!
//! 根据输入路径收集待转换文件列表。
//!
//! ## 功能
//! - 支持文件、目录和 glob 模式输入
//! - 只保留带源扩展名的文件
//! - 可选递归目录搜索
//! - 按真实路径去重（经符号链接到达的同一文件只保留一次），并排序
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 展开模式，`dunce` 求去重键
//! - 使用 `utils/paths.rs`, `utils/output.rs`

use crate::error::Result;
use crate::utils::{output, paths};

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// 已收集的文件：有序输出 + 真实路径集合
#[derive(Default)]
struct Found {
    files: BTreeSet<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Found {
    fn insert(&mut self, path: PathBuf) {
        let key = dunce::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if self.seen.insert(key) {
            self.files.insert(path);
        } else {
            debug!(path = %path.display(), "skipping duplicate of an already collected file");
        }
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 相对输入的解析基准
    base_dir: PathBuf,
    /// 源扩展名（含点）
    extension: String,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(base_dir: &Path, extension: &str) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            extension: extension.to_string(),
            recursive: false,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有输入对应的文件（绝对路径，去重且有序）
    pub fn collect<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Vec<PathBuf>> {
        let mut found = Found::default();

        for input in inputs {
            let input = input.as_ref();
            let path = paths::resolve(&self.base_dir, Path::new(input));

            if path.exists() {
                self.collect_path(&path, &mut found);
            } else if paths::has_glob_meta(input) {
                self.collect_glob(input, &mut found);
            } else {
                output::print_warning(&format!("Path not found, skipping: {}", input));
            }
        }

        Ok(found.files.into_iter().collect())
    }

    /// 处理单个已存在的路径
    fn collect_path(&self, path: &Path, found: &mut Found) {
        if path.is_file() {
            if paths::has_extension(path, &self.extension) {
                found.insert(path.to_path_buf());
            } else {
                debug!(path = %path.display(), "skipping file without source extension");
            }
        } else if path.is_dir() {
            self.collect_directory(path, found);
        }
    }

    /// 目录：直接子文件，递归时包括所有子目录
    fn collect_directory(&self, dir: &Path, found: &mut Found) {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    output::print_warning(&format!("Cannot read entry: {}", err));
                    None
                }
            });

        for entry in walker {
            let path = entry.path();
            if path.is_file() && paths::has_extension(path, &self.extension) {
                found.insert(path.to_path_buf());
            }
        }
    }

    /// 展开 glob 模式（支持 `**`），相对模式以基准目录为根；匹配到的目录不展开。
    /// 非法模式与不存在的路径一样只给出警告。
    fn collect_glob(&self, pattern: &str, found: &mut Found) {
        let full_pattern = if Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            let base = glob::Pattern::escape(&self.base_dir.to_string_lossy());
            format!("{}{}{}", base, std::path::MAIN_SEPARATOR, pattern)
        };

        let entries = match glob::glob(&full_pattern) {
            Ok(entries) => entries,
            Err(e) => {
                output::print_warning(&format!("Invalid glob pattern, skipping: {} ({})", pattern, e.msg));
                return;
            }
        };

        let mut matched = 0usize;
        for entry in entries {
            match entry {
                // 只取文件，深度由模式本身（`**`）决定
                Ok(path) if path.is_file() => {
                    matched += 1;
                    self.collect_path(&paths::resolve(&self.base_dir, &path), found);
                }
                Ok(_) => {}
                Err(err) => output::print_warning(&format!("Cannot read entry: {}", err)),
            }
        }

        if matched == 0 {
            output::print_warning(&format!("Pattern matched nothing: {}", pattern));
        }
    }
}
