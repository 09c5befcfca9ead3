//! In-memory stand-ins for the shell and the disk.
//!
//! Both are cheap to clone and share state between clones, so a test can
//! hand one copy to a task runner and inspect the other afterwards.

use super::{CommandOutput, FileStore, ProcessExecutor};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl MemoryState {
    fn add_parents(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = lock(&self.state);
        state.add_parents(path);
        state.files.insert(path.to_path_buf(), contents.into());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = lock(&self.state);
        state.add_parents(path);
        state.dirs.insert(path.to_path_buf());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        lock(&self.state).files.get(path.as_ref()).cloned()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| anyhow!("Invalid UTF-8 in {}: {e}", path.display()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.add_file(path, contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = lock(&self.state);
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.add_dir(path);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        lock(&self.state)
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: HashMap<String, VecDeque<CommandOutput>>,
    fallback: Option<CommandOutput>,
    calls: Vec<String>,
}

/// Replays canned responses and records every command it receives.
///
/// Responses registered for the same command are returned in order; the
/// last one repeats once the queue is down to a single entry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    script: Arc<Mutex<Script>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, command: &str, response: CommandOutput) -> Self {
        lock(&self.script)
            .responses
            .entry(command.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Response for any command without a specific entry.
    pub fn otherwise(self, response: CommandOutput) -> Self {
        lock(&self.script).fallback = Some(response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.script).calls.clone()
    }

    pub fn was_called(&self, command: &str) -> bool {
        lock(&self.script).calls.iter().any(|c| c == command)
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn capture(&self, command: &str) -> Result<CommandOutput> {
        let mut script = lock(&self.script);
        script.calls.push(command.to_string());

        if let Some(queue) = script.responses.get_mut(command) {
            let response = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            if let Some(response) = response {
                return Ok(response);
            }
        }

        script
            .fallback
            .clone()
            .ok_or_else(|| anyhow!("No scripted response for command: {command}"))
    }
}
