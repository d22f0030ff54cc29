use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TasklyError;
use crate::models::Task;

/// Name of the persisted store, resolved against the working directory.
pub const STORE_FILE: &str = "tasks.json";

/// Handle to the persisted task store. Every command invocation opens the
/// store fresh; no state survives between invocations.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at `path`, creating it as an empty collection when it
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TasklyError> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "[]")?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full collection. Malformed content propagates as a
    /// Parse error.
    pub fn load(&self) -> Result<Vec<Task>, TasklyError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Serialize the full collection and overwrite the store in place.
    /// Not atomic: a crash mid-write can corrupt the store.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TasklyError> {
        let data = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Open the store in the working directory.
pub fn open_store() -> Result<TaskStore, TasklyError> {
    TaskStore::open(STORE_FILE)
}
