//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。qbc 只有一个命令，参数集中在 `convert`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// Quarto Batch Converter
#[derive(Parser, Debug)]
#[command(name = "qbc")]
#[command(version)]
#[command(about = "Convert .ipynb and .qmd files in bulk with the Quarto CLI", long_about = None)]
#[command(after_help = "Examples:
  qbc .
  qbc file1.ipynb file2.ipynb
  qbc \"*.ipynb\"
  qbc notebooks/* specific_file.ipynb
  qbc \"notebooks/**/*.ipynb\"
  qbc notebooks -r -o build -m \"^_/draft_\"

If two inputs would be written to the same output file, the run is rejected
before anything is converted instead of overwriting the first result.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,

    /// Print debug logs (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
