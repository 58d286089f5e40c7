//! # 转换命令实现
//!
//! 批量调用 `quarto convert`，在 .ipynb 与 .qmd 之间转换。
//!
//! ## 流程
//! 1. 检查 Quarto 是否安装，校验匹配模式
//! 2. 收集文件 -> 过滤/重命名 -> 规划目标路径（结果为空时终止）
//! 3. 并行调度转换
//! 4. 打印耗时与统计，失败表格，可选 CSV 报告
//!
//! 单个文件转换失败不会中断其余文件，但整次运行以非零状态退出。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `planner/`, `models/`
//! - 使用 `utils/quarto.rs`, `utils/output.rs`

use crate::batch::{report, BatchResult, BatchRunner, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::error::{QbcError, Result};
use crate::models::{FileTask, RunConfig};
use crate::planner::{ensure_destination_dir, filter_and_rename, prepare_output_root, DestinationPlanner};
use crate::utils::quarto::QuartoCli;
use crate::utils::{output, paths};

use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// 执行转换命令
pub fn execute(args: &ConvertArgs, base_dir: &Path) -> Result<()> {
    let quarto = QuartoCli::locate(args.quarto.as_deref())?;
    let config = RunConfig::from_args(args, base_dir)?;
    debug!(?config, converter = %quarto.program().display(), "run configuration");

    output::print_header(&format!("Quarto Batch Convert ({})", config.direction));

    let tasks = plan(&config)?;

    output::print_info(&format!("Found {} file(s) to be converted:\n", tasks.len()));
    for task in &tasks {
        output::print_conversion(
            &paths::display(&task.source_path, &config.base_dir),
            &paths::display(&task.destination_path, &config.base_dir),
        );
    }
    println!();

    let start = Instant::now();
    let result = dispatch(&config, tasks, |task| {
        quarto.convert(&task.source_path, &task.destination_path)
    })?;
    let elapsed = start.elapsed().as_secs_f64();

    let summary = if result.failed == 0 {
        format!("Converted {} files in {:.3} seconds", result.converted, elapsed)
    } else {
        format!(
            "Converted {} of {} files in {:.3} seconds",
            result.converted,
            result.total(),
            elapsed
        )
    };
    output::print_framed(&summary);

    if let Some(report_path) = &args.report {
        let report_path = paths::resolve(&config.base_dir, report_path);
        report::to_csv(&result, &config.base_dir, &report_path)?;
        output::print_done(&format!("Report written to '{}'", report_path.display()));
    }

    if result.failed > 0 {
        let failures: Vec<(String, String)> = result
            .failures()
            .map(|(task, reason)| (paths::display(&task.source_path, &config.base_dir), reason.to_string()))
            .collect();
        output::print_failures(&failures);

        return Err(QbcError::ConversionFailures {
            failed: result.failed,
            total: result.total(),
        });
    }

    Ok(())
}

/// 收集、过滤并规划任务；任一阶段结果为空即失败
pub fn plan(config: &RunConfig) -> Result<Vec<FileTask>> {
    let files = FileCollector::new(&config.base_dir, config.direction.source_extension())
        .recursive(config.recursive)
        .collect(config.input_paths.as_slice())?;

    if files.is_empty() {
        return Err(QbcError::NoFilesFound);
    }
    debug!(count = files.len(), "discovered candidate files");

    let renamed = filter_and_rename(files, config.pattern.as_ref());
    if renamed.is_empty() {
        return Err(match &config.pattern {
            Some(pattern) => QbcError::NoFilesMatched {
                pattern: pattern.as_str().to_string(),
            },
            None => QbcError::NoFilesFound,
        });
    }

    DestinationPlanner::new(config).plan_all(&renamed)
}

/// 创建输出根目录后并行执行转换
pub fn dispatch<F>(config: &RunConfig, tasks: Vec<FileTask>, convert: F) -> Result<BatchResult>
where
    F: Fn(&FileTask) -> Result<()> + Sync + Send,
{
    prepare_output_root(config)?;

    let runner = BatchRunner::new(config.jobs);
    debug!(jobs = runner.jobs(), tasks = tasks.len(), "dispatching");
    runner.run(tasks, |task| {
        debug!(
            source = %task.source_path.display(),
            relative_directory = %task.relative_directory.display(),
            "converting"
        );
        ensure_destination_dir(task)?;
        convert(task)
    })
}
