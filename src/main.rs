use anyhow::Result;
use clap::Parser;
use colored::*;
use wasm_script::cli::{Cli, Commands};
use wasm_script::pipelines;

/// CLI 主入口
///
/// - 负责参数解析
/// - 捕获错误并标准输出
/// - 调度各子命令流程
fn main() -> Result<()> {
    let cli = Cli::parse();

    // 捕获顶层错误，格式化输出，避免展示 Rust 栈信息
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let root = cli.dir.as_path();
    match cli.command {
        Commands::Build { debug } => pipelines::execute_build_pipeline(root, debug),
        Commands::Install => pipelines::execute_install_pipeline(root),
        Commands::Metadata => pipelines::execute_metadata_pipeline(root),
        Commands::Check => pipelines::execute_check_pipeline(root),
    }
}
