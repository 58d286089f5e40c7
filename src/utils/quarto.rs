//! # Quarto CLI 调用
//!
//! 定位 `quarto` 可执行文件，并以固定参数形式
//! `quarto convert <input> --output <output>` 调用它。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `which` crate 查找可执行文件

use crate::error::{QbcError, Result};

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// 默认的可执行文件名
pub const QUARTO_COMMAND: &str = "quarto";

/// 未安装 Quarto 时给出的提示
pub const INSTALL_HINTS: [&str; 2] = [
    "See https://quarto.org/docs/get-started/ for installation instructions",
    "or install from PyPI using `pipx install quarto-cli` or `uv tool install quarto-cli`",
];

/// stderr 中保留的最后几行
const STDERR_TAIL_LINES: usize = 5;

/// 已定位的 Quarto 可执行文件
#[derive(Debug, Clone)]
pub struct QuartoCli {
    program: PathBuf,
}

impl QuartoCli {
    /// 查找 Quarto：优先使用显式给出的路径，否则在 PATH 中搜索 `quarto`
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        let wanted = explicit
            .map(|p| p.as_os_str().to_owned())
            .unwrap_or_else(|| QUARTO_COMMAND.into());

        let program = which::which(&wanted).map_err(|_| QbcError::CommandNotFound {
            command: wanted.to_string_lossy().to_string(),
        })?;

        debug!(program = %program.display(), "located converter");
        Ok(Self { program })
    }

    /// 可执行文件路径
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// 阻塞执行一次转换，非零退出码视为失败
    pub fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        let command = format!(
            "quarto convert {} --output {}",
            source.display(),
            destination.display()
        );
        debug!(%command, "spawning converter");

        let output = Command::new(&self.program)
            .arg("convert")
            .arg(source)
            .arg("--output")
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| QbcError::CommandFailed {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        debug!(%command, status = %output.status, "converter exited");

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail = stderr_tail(&stderr);
            Err(QbcError::CommandFailed {
                command,
                stderr: if tail.is_empty() {
                    output.status.to_string()
                } else {
                    tail
                },
            })
        }
    }
}

/// 取 stderr 的最后几行非空内容
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
