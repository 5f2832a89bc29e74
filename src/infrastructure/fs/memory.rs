//! In-memory File System
//!
//! Scriptable FileSystem used by tests: each path holds a queue of contents,
//! one popped per read, with the last one sticking. That is enough to model
//! a build tool rewriting the manifest between polls, or a reader catching
//! a half-written file.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, VecDeque<String>>,
    reads: HashMap<PathBuf, usize>,
}

/// In-memory FileSystem with scripted reads
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a file's content, replacing any queued reads
    pub fn insert(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.script(path, [content]);
    }

    /// Queue successive contents for a file
    pub fn script<I, S>(&self, path: impl AsRef<Path>, contents: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.files.insert(
            path.as_ref().to_path_buf(),
            contents.into_iter().map(Into::into).collect(),
        );
    }

    /// Number of reads made against `path`
    pub fn read_count(&self, path: impl AsRef<Path>) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.reads.get(path.as_ref()).copied().unwrap_or(0)
    }

    /// Number of reads made against any path
    pub fn total_reads(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.reads.values().sum()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state.reads.entry(path.to_path_buf()).or_insert(0) += 1;

        let queue = state
            .files
            .get_mut(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        let content = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        content.ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn is_file(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.files.contains_key(path)
    }
}
