use std::path::{Path, PathBuf};

pub mod fs;
pub mod mock;
pub mod process;

pub use fs::{DiskStore, FileStore};
pub use process::{CommandOutput, ProcessExecutor, ShellExecutor};

/// Everything a task runner needs to touch the outside world.
///
/// The project root is carried explicitly instead of relying on the
/// process working directory.
pub struct ProjectContext {
    root: PathBuf,
    pub executor: Box<dyn ProcessExecutor>,
    pub files: Box<dyn FileStore>,
}

impl ProjectContext {
    pub fn new(
        root: impl Into<PathBuf>,
        executor: Box<dyn ProcessExecutor>,
        files: Box<dyn FileStore>,
    ) -> Self {
        Self {
            root: root.into(),
            executor,
            files,
        }
    }

    /// Context backed by the real shell and disk, rooted at `root`.
    pub fn on_disk(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            executor: Box::new(ShellExecutor::new(&root)),
            files: Box::new(DiskStore::new(&root)),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
