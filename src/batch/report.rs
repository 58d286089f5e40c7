//! # 转换结果导出
//!
//! 把每个任务的结果写入 CSV：source, destination, status, message。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::batch::runner::{BatchResult, ProcessResult};
use crate::error::{QbcError, Result};
use crate::utils::paths;

use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ReportRow {
    source: String,
    destination: String,
    status: &'static str,
    message: String,
}

/// 导出结果为 CSV，路径相对基准目录显示
pub fn to_csv(result: &BatchResult, base_dir: &Path, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(QbcError::CsvError)?;

    for outcome in &result.outcomes {
        let (status, message) = match &outcome.result {
            ProcessResult::Converted => ("converted", String::new()),
            ProcessResult::Failed(reason) => ("failed", reason.clone()),
        };

        wtr.serialize(ReportRow {
            source: paths::display(&outcome.task.source_path, base_dir),
            destination: paths::display(&outcome.task.destination_path, base_dir),
            status,
            message,
        })?;
    }

    wtr.flush().map_err(|e| QbcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::runner::TaskOutcome;
    use crate::models::FileTask;
    use std::path::PathBuf;

    #[test]
    fn test_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        let outcome = |name: &str, result| TaskOutcome {
            task: FileTask {
                source_path: base.join(format!("nb/{}.ipynb", name)),
                destination_path: base.join(format!("out/nb/{}.qmd", name)),
                relative_directory: PathBuf::from("nb"),
            },
            result,
        };

        let mut result = BatchResult::default();
        result.merge(outcome("a", ProcessResult::Converted));
        result.merge(outcome("b", ProcessResult::Failed("exit status: 1".to_string())));

        let report = base.join("report.csv");
        to_csv(&result, base, &report).unwrap();

        let content = std::fs::read_to_string(&report).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "source,destination,status,message");
        assert_eq!(lines[1], "nb/a.ipynb,out/nb/a.qmd,converted,");
        assert_eq!(lines[2], "nb/b.ipynb,out/nb/b.qmd,failed,exit status: 1");
    }
}
