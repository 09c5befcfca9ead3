use crate::error::Result;
use crate::metadata::MetadataDescriptor;
use crate::system::ProjectContext;

pub mod typescript;

/// Build and dependency lifecycle for one script language.
///
/// Each operation runs to completion before returning and keeps no state
/// between calls. Two runners must not share a project root at the same
/// time: nothing guards the build directory against concurrent builds.
pub trait TaskRunner {
    /// Compile the project and return the WebAssembly binary.
    ///
    /// # Side effects
    /// - Runs the package manager's build and metadata scripts.
    /// - Deletes the compiled binary from the build directory once read;
    ///   the bytes are only handed back in memory.
    fn build(&self) -> Result<Vec<u8>>;

    /// Whether the dependency directory exists. Its contents are not
    /// inspected.
    fn dependencies_installed(&self) -> bool;

    /// Check the runtime version, then install dependencies.
    fn install_dependencies(&self) -> Result<()>;

    /// Read the metadata descriptor produced by the last build.
    fn load_metadata(&self) -> Result<MetadataDescriptor>;

    /// Installed version of a dependency, as reported by the package manager.
    fn library_version(&self, library: &str) -> Result<String>;
}

pub fn create_task_runner(
    language: &str,
    context: ProjectContext,
) -> anyhow::Result<Box<dyn TaskRunner>> {
    match language.to_lowercase().as_str() {
        "ts" | "typescript" => Ok(Box::new(typescript::TypeScriptTaskRunner::new(context))),
        unsupported => anyhow::bail!("Unsupported language identifier: {unsupported}"),
    }
}
