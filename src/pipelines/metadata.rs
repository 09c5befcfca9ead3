use anyhow::Result;
use std::path::Path;

use crate::config;

use super::common::open_runner;

pub fn execute_metadata_pipeline(root: &Path) -> Result<()> {
    let config = config::load(root)?;
    let runner = open_runner(root, &config)?;

    let metadata = runner.load_metadata()?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
