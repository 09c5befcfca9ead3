use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::config;

use super::common::open_runner;

pub fn execute_install_pipeline(root: &Path) -> Result<()> {
    let config = config::load(root)?;
    let runner = open_runner(root, &config)?;

    println!("{} Installing dependencies...", "[SCRIPT]".green().bold());
    runner
        .install_dependencies()
        .context("Install step failed")?;

    println!("{} Dependencies installed", "[DONE]".green().bold());
    Ok(())
}
