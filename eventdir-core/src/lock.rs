//! Exclusive lock on a data directory, so only one process writes its
//! documents at a time.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{EventDirError, EventDirResult};

const LOCK_FILE: &str = ".eventdir.lock";

/// A lock guard that releases the lock when dropped
pub struct DataDirLock {
    _file: File,
    path: PathBuf,
}

impl DataDirLock {
    /// Acquire an exclusive lock, failing if another process holds it
    pub fn acquire(data_dir: &Path) -> EventDirResult<Self> {
        fs::create_dir_all(data_dir)?;

        let path = data_dir.join(LOCK_FILE);
        let file = File::create(&path)?;

        file.try_lock_exclusive().map_err(|_| {
            EventDirError::Lock(format!(
                "Another eventdir process is using {}.\n\
                If you believe this is an error, remove: {}",
                data_dir.display(),
                path.display()
            ))
        })?;

        Ok(DataDirLock { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
