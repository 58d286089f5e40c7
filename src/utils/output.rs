//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 模块使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use tabled::{Table, Tabled};

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印计划中的转换
pub fn print_conversion(from: &str, to: &str) {
    println!("\t{} {} {}", from, "->".cyan(), to.dimmed());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印上下带虚线框的汇总行
pub fn print_framed(text: &str) {
    let line = "-".repeat(text.chars().count());
    println!("{}", line);
    println!("{}", text);
    println!("{}", line);
}

#[derive(Tabled)]
struct FailureRow<'a> {
    #[tabled(rename = "File")]
    file: &'a str,
    #[tabled(rename = "Reason")]
    reason: &'a str,
}

/// 以表格形式打印失败的文件
pub fn print_failures(failures: &[(String, String)]) {
    if failures.is_empty() {
        return;
    }

    let rows: Vec<FailureRow> = failures
        .iter()
        .map(|(file, reason)| FailureRow {
            file: file.as_str(),
            reason: reason.as_str(),
        })
        .collect();

    eprintln!(
        "{} {} file(s) failed to convert:",
        "[ERR]".red().bold(),
        failures.len()
    );
    eprintln!("{}", Table::new(rows));
}
