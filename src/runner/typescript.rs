use super::TaskRunner;
use crate::error::{Result, TaskError};
use crate::manifest::BuildManifest;
use crate::metadata::MetadataDescriptor;
use crate::system::ProjectContext;
use crate::version::RuntimeVersion;
use anyhow::Context;
use std::path::Path;

const MANIFEST_FILE: &str = "package.json";
const WASM_FILE: &str = "build/index.wasm";
const METADATA_FILE: &str = "build/metadata.json";
const DEPENDENCY_DIR: &str = "node_modules";

const BUILD_COMMAND: &str = "npm run build";
const GEN_METADATA_COMMAND: &str = "npm run gen-metadata";
const NODE_VERSION_COMMAND: &str = "node --version";
const INSTALL_COMMAND: &str =
    "npm install --no-audit --no-optional --legacy-peer-deps --loglevel error";
const LIST_COMMAND: &str = "npm -s list --json";

const NODE_MIN_MAJOR: u64 = 14;
const NODE_MIN_MINOR: u64 = 15;

/// TypeScript scripts built through npm.
///
/// The project's `build` script compiles to `build/index.wasm` and
/// `gen-metadata` writes `build/metadata.json`.
pub struct TypeScriptTaskRunner {
    context: ProjectContext,
}

impl TypeScriptTaskRunner {
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }

    fn read_manifest(&self) -> Result<BuildManifest> {
        let content = self
            .context
            .files
            .read_to_string(Path::new(MANIFEST_FILE))
            .context("Failed to read package.json")?;
        BuildManifest::parse(&content)
    }

    /// Run a build step; any failure carries the captured output as is.
    fn run_build_step(&self, command: &str) -> Result<()> {
        let result = self.context.executor.capture(command)?;
        if !result.success {
            return Err(TaskError::SystemCallFailure {
                output: result.output,
            });
        }
        Ok(())
    }

    fn check_node_version(&self) -> Result<()> {
        let result = self.context.executor.capture(NODE_VERSION_COMMAND)?;
        if !result.success {
            return Err(TaskError::DependencyInstall(result.output));
        }

        let version: RuntimeVersion = result.output.parse().map_err(|e| {
            TaskError::DependencyInstall(format!("Unable to read Node version: {e}"))
        })?;

        if !version.is_at_least(NODE_MIN_MAJOR, NODE_MIN_MINOR) {
            return Err(TaskError::DependencyInstall(format!(
                "Node v{NODE_MIN_MAJOR}.{NODE_MIN_MINOR} or later is required, found {version}"
            )));
        }
        Ok(())
    }
}

impl TaskRunner for TypeScriptTaskRunner {
    fn build(&self) -> Result<Vec<u8>> {
        self.read_manifest()?.build_script()?;

        self.run_build_step(BUILD_COMMAND)?;
        self.run_build_step(GEN_METADATA_COMMAND)?;

        let wasm = Path::new(WASM_FILE);
        if !self.context.files.exists(wasm) {
            return Err(TaskError::WebAssemblyBinaryNotFound);
        }

        let bytes = self.context.files.read(wasm)?;
        self.context.files.remove_file(wasm)?;
        Ok(bytes)
    }

    fn dependencies_installed(&self) -> bool {
        self.context.files.exists(Path::new(DEPENDENCY_DIR))
    }

    fn install_dependencies(&self) -> Result<()> {
        self.check_node_version()?;

        let result = self.context.executor.capture(INSTALL_COMMAND)?;
        if !result.success {
            return Err(TaskError::DependencyInstall(result.output));
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<MetadataDescriptor> {
        let path = Path::new(METADATA_FILE);
        if !self.context.files.exists(path) {
            return Err(TaskError::MetadataNotFound);
        }

        let content = self.context.files.read_to_string(path)?;
        MetadataDescriptor::parse(&content)
    }

    fn library_version(&self, library: &str) -> Result<String> {
        let result = self.context.executor.capture(LIST_COMMAND)?;

        // npm list exits non-zero on peer dependency problems while still
        // printing a complete tree.
        let parsed = serde_json::from_str::<serde_json::Value>(&result.output);
        let tree = if result.success {
            parsed.context("Failed to parse npm list output")?
        } else {
            match parsed {
                Ok(tree) if tree.get("dependencies").is_some() => tree,
                _ => {
                    return Err(TaskError::SystemCallFailure {
                        output: result.output,
                    })
                }
            }
        };

        tree.get("dependencies")
            .and_then(|deps| deps.get(library))
            .and_then(|lib| lib.get("version"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| TaskError::ApiLibraryNotFound(library.to_string()))
    }
}
