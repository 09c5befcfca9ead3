use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config;
use crate::error::TaskError;

use super::common::open_runner;

pub fn execute_check_pipeline(root: &Path) -> Result<()> {
    let config = config::load(root)?;
    let runner = open_runner(root, &config)?;
    let language = config.language();

    if !runner.dependencies_installed() {
        println!(
            "{} Dependencies are not installed. Run 'wasm-script install'.",
            "[WARN]".yellow()
        );
        return Ok(());
    }
    println!("{} Dependencies installed", "[OK]".green().bold());

    if let Some(library) = config.library() {
        match runner.library_version(library) {
            Ok(version) => println!("{} {} v{}", "[INFO]".cyan(), library, version),
            Err(TaskError::ApiLibraryNotFound(name)) => println!(
                "{} API library '{}' is not installed",
                "[WARN]".yellow(),
                name
            ),
            Err(e) => return Err(e.into()),
        }
    }

    println!(
        "{} Environment check passed for language: {}",
        "[OK]".green().bold(),
        language
    );
    Ok(())
}
