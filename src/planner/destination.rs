//! # 输出路径规划
//!
//! 目标路径 = 输出根目录 / 源文件相对基准目录的目录 / (前缀 + 新文件名 + 目标扩展名)。
//! 规划本身是纯函数，目录只在调度时创建。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `models/` 的 RunConfig, RenamedFile, FileTask
//! - 使用 `utils/paths.rs`

use crate::error::{QbcError, Result};
use crate::models::{FileTask, RenamedFile, RunConfig};
use crate::utils::paths;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 目标路径规划器
pub struct DestinationPlanner<'a> {
    config: &'a RunConfig,
    output_root: PathBuf,
}

impl<'a> DestinationPlanner<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            output_root: config.output_root(),
        }
    }

    /// 输出文件名（前缀可能包含目录）
    fn file_name(&self, file: &RenamedFile) -> String {
        let body = if self.config.keep_extension {
            file.source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.new_stem.clone())
        } else {
            file.new_stem.clone()
        };

        format!(
            "{}{}{}",
            self.config.prefix,
            body,
            self.config.direction.target_extension()
        )
    }

    /// 规划单个文件
    pub fn plan(&self, file: &RenamedFile) -> FileTask {
        let base_dir = self.config.base_dir.as_path();
        let parent = file.source.parent().unwrap_or(base_dir);
        let relative_directory = paths::relative_to(parent, base_dir);

        let destination_path = paths::resolve(
            &self.output_root,
            &relative_directory.join(self.file_name(file)),
        );

        FileTask {
            source_path: file.source.clone(),
            destination_path,
            relative_directory,
        }
    }

    /// 规划全部文件，拒绝多个源写入同一目标（不会静默覆盖先写入的结果）
    pub fn plan_all(&self, files: &[RenamedFile]) -> Result<Vec<FileTask>> {
        let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut tasks = Vec::with_capacity(files.len());

        for file in files {
            let task = self.plan(file);
            if let Some(first) = seen.get(&task.destination_path) {
                return Err(QbcError::DestinationCollision {
                    destination: task.destination_path.display().to_string(),
                    first: first.display().to_string(),
                    second: task.source_path.display().to_string(),
                });
            }
            seen.insert(task.destination_path.clone(), task.source_path.clone());
            tasks.push(task);
        }

        Ok(tasks)
    }
}

/// 创建显式指定的输出根目录
pub fn prepare_output_root(config: &RunConfig) -> Result<()> {
    if config.output_path.is_some() {
        create_dir(&config.output_root())?;
    }
    Ok(())
}

/// 创建目标文件的父目录；多个 worker 同时创建同一目录是允许的
pub fn ensure_destination_dir(task: &FileTask) -> Result<()> {
    match task.destination_path.parent() {
        Some(parent) => create_dir(parent),
        None => Ok(()),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| QbcError::DirectoryCreateError {
        path: dir.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::planner::NamePattern;

    fn config() -> RunConfig {
        RunConfig::new(Path::new("/w"), vec![".".to_string()])
    }

    fn renamed(source: &str, stem: &str) -> RenamedFile {
        RenamedFile {
            source: PathBuf::from(source),
            new_stem: stem.to_string(),
        }
    }

    #[test]
    fn test_default_destination_next_to_source() {
        let config = config();
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/notebooks/_test_1.ipynb", "_test_1"));
        assert_eq!(task.destination_path, PathBuf::from("/w/notebooks/_test_1.qmd"));
        assert_eq!(task.relative_directory, PathBuf::from("notebooks"));
    }

    #[test]
    fn test_output_root_mirrors_structure() {
        let mut config = config();
        config.output_path = Some(PathBuf::from("output"));
        let task = DestinationPlanner::new(&config)
            .plan(&renamed("/w/notebooks/_test_1.ipynb", "REPLACED_test_1"));
        assert_eq!(
            task.destination_path,
            PathBuf::from("/w/output/notebooks/REPLACED_test_1.qmd")
        );
    }

    #[test]
    fn test_prefix_as_directory() {
        let mut config = config();
        config.prefix = "PREFIX/".to_string();
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/a.ipynb", "a"));
        assert_eq!(task.destination_path, PathBuf::from("/w/PREFIX/a.qmd"));
        assert_eq!(task.relative_directory, PathBuf::new());
    }

    #[test]
    fn test_prefix_with_parent_directory() {
        let mut config = config();
        config.prefix = "../PREFIX/".to_string();
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/notebooks/_test_1.ipynb", "_test_1"));
        assert_eq!(task.destination_path, PathBuf::from("/w/PREFIX/_test_1.qmd"));
    }

    #[test]
    fn test_plain_prefix() {
        let mut config = config();
        config.prefix = "prefix_".to_string();
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/notebooks/_test_1.ipynb", "_test_1"));
        assert_eq!(task.destination_path, PathBuf::from("/w/notebooks/prefix__test_1.qmd"));
    }

    #[test]
    fn test_keep_extension() {
        let mut config = config();
        config.keep_extension = true;
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/file_in_root.ipynb", "ignored"));
        assert_eq!(task.destination_path, PathBuf::from("/w/file_in_root.ipynb.qmd"));
    }

    #[test]
    fn test_reverse_direction() {
        let mut config = config();
        config.direction = Direction::QmdToIpynb;
        let task = DestinationPlanner::new(&config).plan(&renamed("/w/notebooks/TEST.qmd", "TEST"));
        assert_eq!(task.destination_path, PathBuf::from("/w/notebooks/TEST.ipynb"));
    }

    #[test]
    fn test_source_outside_base_dir() {
        let mut config = config();
        config.output_path = Some(PathBuf::from("/out"));
        let task = DestinationPlanner::new(&config).plan(&renamed("/data/nb/x.ipynb", "x"));
        assert_eq!(task.relative_directory, PathBuf::from("../data/nb"));
        assert_eq!(task.destination_path, PathBuf::from("/data/nb/x.qmd"));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let mut config = config();
        config.pattern = NamePattern::parse("^_/REPLACED_").unwrap();
        config.prefix = "out/".to_string();
        let files = vec![
            renamed("/w/notebooks/_test_1.ipynb", "REPLACED_test_1"),
            renamed("/w/notebooks/sub/test_2.ipynb", "test_2"),
        ];
        let planner = DestinationPlanner::new(&config);
        assert_eq!(planner.plan_all(&files).unwrap(), planner.plan_all(&files).unwrap());
    }

    #[test]
    fn test_destination_collision() {
        let config = config();
        let files = vec![renamed("/w/x1.ipynb", "x"), renamed("/w/x2.ipynb", "x")];
        let err = DestinationPlanner::new(&config).plan_all(&files).unwrap_err();
        assert!(matches!(err, QbcError::DestinationCollision { .. }));

        let message = err.to_string();
        assert!(message.contains("/w/x.qmd"));
        assert!(message.contains("/w/x1.ipynb") && message.contains("/w/x2.ipynb"));
        assert!(message.contains("refusing to overwrite"));
    }

    #[test]
    fn test_ensure_destination_dir_reports_io_cause() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blocker"), "").unwrap();
        let task = FileTask {
            source_path: dir.path().join("a.ipynb"),
            destination_path: dir.path().join("blocker/sub/a.qmd"),
            relative_directory: PathBuf::new(),
        };

        let err = ensure_destination_dir(&task).unwrap_err();
        let io_message = match &err {
            QbcError::DirectoryCreateError { source, .. } => source.to_string(),
            other => panic!("unexpected error: {other}"),
        };
        let message = err.to_string();
        assert!(message.contains("blocker"));
        assert!(message.ends_with(&io_message));
    }

    #[test]
    fn test_ensure_destination_dir_concurrently() {
        let dir = tempfile::tempdir().unwrap();
        let task = FileTask {
            source_path: dir.path().join("a.ipynb"),
            destination_path: dir.path().join("PREFIX/nested/a.qmd"),
            relative_directory: PathBuf::new(),
        };

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| ensure_destination_dir(&task).unwrap());
            }
        });

        assert!(dir.path().join("PREFIX/nested").is_dir());
        ensure_destination_dir(&task).unwrap();
    }

    #[test]
    fn test_prepare_output_root_only_when_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RunConfig::new(dir.path(), vec![]);
        prepare_output_root(&config).unwrap();
        assert!(!dir.path().join("out").exists());

        config.output_path = Some(PathBuf::from("out/deep"));
        prepare_output_root(&config).unwrap();
        assert!(dir.path().join("out/deep").is_dir());
    }
}
