use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::runner::{create_task_runner, TaskRunner};
use crate::system::ProjectContext;

/// 根据项目配置实例化对应语言的 task runner，使用真实的 shell 与磁盘
pub fn open_runner(root: &Path, config: &ProjectConfig) -> Result<Box<dyn TaskRunner>> {
    create_task_runner(config.language(), ProjectContext::on_disk(root))
}

/// 依赖缺失时执行安装（可能触发网络 IO）
pub fn ensure_dependencies(runner: &dyn TaskRunner, debug: bool) -> Result<()> {
    if runner.dependencies_installed() {
        if debug {
            println!("{} node_modules present, skipping install", "[DEBUG]".dimmed());
        }
        return Ok(());
    }

    println!(
        "{} node_modules not found, installing dependencies...",
        "[INFO]".cyan()
    );
    runner
        .install_dependencies()
        .context("Install step failed")
}
