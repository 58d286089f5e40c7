//! # 批量执行器
//!
//! 在固定大小的线程池上并行执行转换任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，每个 worker 一次执行一个任务
//! - 单个任务失败不影响其他任务
//! - 进度条显示
//! - 收集每个任务的结果并汇总
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行调度

use crate::error::{QbcError, Result};
use crate::models::FileTask;
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// 单个任务处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 转换成功
    Converted,
    /// 转换失败（错误信息）
    Failed(String),
}

/// 任务及其结果
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub task: FileTask,
    pub result: ProcessResult,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub converted: usize,
    /// 失败数量
    pub failed: usize,
    /// 按提交顺序排列的所有结果
    pub outcomes: Vec<TaskOutcome>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: TaskOutcome) {
        match outcome.result {
            ProcessResult::Converted => self.converted += 1,
            ProcessResult::Failed(_) => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }

    /// 失败的任务
    pub fn failures(&self) -> impl Iterator<Item = (&FileTask, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            ProcessResult::Failed(reason) => Some((&o.task, reason.as_str())),
            ProcessResult::Converted => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = CPU 数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行执行全部任务，阻塞直到所有任务完成或失败
    pub fn run<F>(&self, tasks: Vec<FileTask>, processor: F) -> Result<BatchResult>
    where
        F: Fn(&FileTask) -> Result<()> + Sync + Send,
    {
        let pb = progress::create_progress_bar(tasks.len() as u64, "Converting");
        let failed_count = AtomicUsize::new(0);

        // 使用独立线程池，不影响全局池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| QbcError::Other(format!("Failed to build worker pool: {}", e)))?;

        let outcomes: Vec<TaskOutcome> = pool.install(|| {
            tasks
                .into_par_iter()
                // 每个任务单独调度，避免一个 worker 串行处理一大段
                .with_max_len(1)
                .map(|task| {
                    let result = match processor(&task) {
                        Ok(()) => ProcessResult::Converted,
                        Err(e) => {
                            failed_count.fetch_add(1, Ordering::Relaxed);
                            debug!(source = %task.source_path.display(), error = %e, "task failed");
                            ProcessResult::Failed(e.to_string())
                        }
                    };

                    pb.inc(1);
                    TaskOutcome { task, result }
                })
                .collect()
        });

        let failed = failed_count.load(Ordering::Relaxed);
        if failed > 0 {
            pb.abandon_with_message(format!("{} failed", failed));
        } else {
            pb.finish_and_clear();
        }

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for outcome in outcomes {
            batch_result.merge(outcome);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::Duration;

    fn task(name: &str) -> FileTask {
        FileTask {
            source_path: PathBuf::from(format!("/w/{}.ipynb", name)),
            destination_path: PathBuf::from(format!("/w/{}.qmd", name)),
            relative_directory: PathBuf::new(),
        }
    }

    #[test]
    fn test_runner_zero_jobs_means_auto() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }

    #[test]
    fn test_runner_runs_every_task_once() {
        let tasks: Vec<FileTask> = (0..20).map(|i| task(&format!("nb{}", i))).collect();
        let seen = Mutex::new(Vec::new());

        let result = BatchRunner::new(4)
            .run(tasks.clone(), |t| {
                seen.lock().unwrap().push(t.source_path.clone());
                Ok(())
            })
            .unwrap();

        assert_eq!(result.converted, 20);
        assert_eq!(result.failed, 0);
        assert_eq!(result.total(), 20);

        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        let mut expected: Vec<PathBuf> = tasks.iter().map(|t| t.source_path.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_runner_failure_does_not_abort_others() {
        let tasks = vec![task("a"), task("bad"), task("c"), task("d")];

        let result = BatchRunner::new(2)
            .run(tasks, |t| {
                if t.source_path.ends_with("bad.ipynb") {
                    Err(QbcError::CommandFailed {
                        command: "quarto convert".to_string(),
                        stderr: "boom".to_string(),
                    })
                } else {
                    Ok(())
                }
            })
            .unwrap();

        assert_eq!(result.converted, 3);
        assert_eq!(result.failed, 1);
        let failures: Vec<_> = result.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0.source_path, PathBuf::from("/w/bad.ipynb"));
        assert!(failures[0].1.contains("boom"));
    }

    #[test]
    fn test_runner_respects_worker_bound() {
        let running = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let tasks: Vec<FileTask> = (0..12).map(|i| task(&format!("nb{}", i))).collect();

        BatchRunner::new(3)
            .run(tasks, |_| {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(10));
                running.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        assert!(peak.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn test_runner_empty_task_list() {
        let result = BatchRunner::new(2).run(Vec::new(), |_| Ok(())).unwrap();
        assert_eq!(result.total(), 0);
        assert!(result.outcomes.is_empty());
    }
}
