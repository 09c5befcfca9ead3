use crate::error::{Result, TaskError};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The parts of `package.json` the task runner cares about.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BuildManifest {
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl BuildManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(TaskError::InvalidManifest)
    }

    /// The declared `build` script.
    ///
    /// A missing entry and a blank entry are reported differently.
    pub fn build_script(&self) -> Result<&str> {
        match self.scripts.get("build") {
            None => Err(TaskError::BuildScriptNotFound),
            Some(script) if script.trim().is_empty() => Err(TaskError::InvalidBuildScript),
            Some(script) => Ok(script),
        }
    }
}
