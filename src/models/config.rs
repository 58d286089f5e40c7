//! # 运行配置
//!
//! 由命令行参数一次性构建、之后只读的运行配置。
//! 所有相对路径都相对显式传入的 `base_dir` 解析，不依赖进程当前目录。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 的 ConvertArgs
//! - 使用 `planner/rename.rs` 校验匹配模式

use crate::cli::convert::ConvertArgs;
use crate::error::Result;
use crate::planner::NamePattern;
use crate::utils::paths;

use std::path::{Path, PathBuf};

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// .ipynb -> .qmd
    #[default]
    IpynbToQmd,
    /// .qmd -> .ipynb
    QmdToIpynb,
}

impl Direction {
    pub fn from_flag(qmd_to_ipynb: bool) -> Self {
        if qmd_to_ipynb {
            Direction::QmdToIpynb
        } else {
            Direction::IpynbToQmd
        }
    }

    /// 源扩展名（含点）
    pub fn source_extension(self) -> &'static str {
        match self {
            Direction::IpynbToQmd => ".ipynb",
            Direction::QmdToIpynb => ".qmd",
        }
    }

    /// 目标扩展名（含点）
    pub fn target_extension(self) -> &'static str {
        match self {
            Direction::IpynbToQmd => ".qmd",
            Direction::QmdToIpynb => ".ipynb",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source_extension(), self.target_extension())
    }
}

/// 运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 输入文件、目录或 glob 模式，按命令行顺序
    pub input_paths: Vec<String>,
    pub direction: Direction,
    /// 文件名匹配/替换模式
    pub pattern: Option<NamePattern>,
    /// 输出文件名前缀，可包含路径分隔符
    pub prefix: String,
    /// 保留原扩展名，例如 `a.ipynb.qmd`
    pub keep_extension: bool,
    /// 显式给出的输出根目录
    pub output_path: Option<PathBuf>,
    pub recursive: bool,
    /// 基准目录（绝对路径），相对输出结构以它为根
    pub base_dir: PathBuf,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
}

impl RunConfig {
    /// 以默认选项创建配置
    pub fn new(base_dir: &Path, input_paths: Vec<String>) -> Self {
        Self {
            input_paths,
            direction: Direction::default(),
            pattern: None,
            prefix: String::new(),
            keep_extension: false,
            output_path: None,
            recursive: false,
            base_dir: base_dir.to_path_buf(),
            jobs: 0,
        }
    }

    /// 从命令行参数构建；匹配模式非法时立即失败
    pub fn from_args(args: &ConvertArgs, base_dir: &Path) -> Result<Self> {
        let pattern = match &args.match_replace_pattern {
            Some(spec) => NamePattern::parse(spec)?,
            None => None,
        };

        Ok(Self {
            direction: Direction::from_flag(args.qmd_to_ipynb),
            pattern,
            prefix: args.prefix.clone(),
            keep_extension: args.keep_extension,
            output_path: args.output_path.clone(),
            recursive: args.recursive,
            jobs: args.jobs,
            ..Self::new(base_dir, args.input_paths.clone())
        })
    }

    /// 输出根目录：未指定时为基准目录
    pub fn output_root(&self) -> PathBuf {
        match &self.output_path {
            Some(p) => paths::resolve(&self.base_dir, p),
            None => self.base_dir.clone(),
        }
    }
}
