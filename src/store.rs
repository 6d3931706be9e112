use std::error::Error;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

const SQL_EXTENSION: &str = "sql";

#[derive(Debug)]
pub enum StoreError {
    MissingDirectory { path: PathBuf },
    Io(io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::MissingDirectory { path } => {
                write!(f, "Validation directory '{}' does not exist.", path.display())
            }
            StoreError::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::MissingDirectory { .. } => None,
            StoreError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Directory-backed validation store. One `.sql` file per validation; any
/// `.sql` file under the root counts as a validation record.
#[must_use]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    fn require_dir(&self) -> Result<(), StoreError> {
        match self.exists() {
            true => Ok(()),
            false => Err(StoreError::MissingDirectory {
                path: self.root.clone(),
            }),
        }
    }

    fn validation_path(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{stem}.{SQL_EXTENSION}"))
    }

    pub fn init(&self) -> Result<InitOutcome, StoreError> {
        if self.exists() {
            return Ok(InitOutcome::AlreadyExists);
        }
        fs::create_dir(&self.root)?;
        info!("created {}", self.root.display());
        Ok(InitOutcome::Created)
    }

    /// Removes the project directory. Without `force` the directory must be
    /// empty; the underlying io error surfaces otherwise.
    pub fn destroy(&self, force: bool) -> Result<(), StoreError> {
        self.require_dir()?;
        match force {
            true => fs::remove_dir_all(&self.root)?,
            false => fs::remove_dir(&self.root)?,
        }
        info!("removed {}", self.root.display());
        Ok(())
    }

    /// Writes (or silently overwrites) one validation file and returns its
    /// path.
    pub fn write(&self, stem: &str, sql: &str) -> Result<PathBuf, StoreError> {
        self.require_dir()?;
        let path = self.validation_path(stem);
        fs::write(&path, sql)?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    pub fn read(&self, stem: &str) -> Result<String, StoreError> {
        self.require_dir()?;
        Ok(fs::read_to_string(self.validation_path(stem))?)
    }

    /// File stems of every `.sql` file under the root, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        self.require_dir()?;
        let mut stems = vec![];
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.metadata()?.is_file() {
                continue;
            }
            let path = entry.path();
            if !path
                .extension()
                .is_some_and(|extension| extension == SQL_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem() else {
                continue;
            };
            stems.push(stem.to_string_lossy().to_string());
        }
        stems.sort();
        Ok(stems)
    }

    pub fn remove_named(&self, stem: &str) -> Result<RemoveOutcome, StoreError> {
        self.require_dir()?;
        let path = self.validation_path(stem);
        if !path.is_file() {
            return Ok(RemoveOutcome::NotFound);
        }
        fs::remove_file(&path)?;
        info!("removed {}", path.display());
        Ok(RemoveOutcome::Removed)
    }

    /// Deletes every `.sql` file and returns how many went away.
    pub fn remove_all(&self) -> Result<usize, StoreError> {
        let stems = self.list()?;
        for stem in &stems {
            fs::remove_file(self.validation_path(stem))?;
        }
        Ok(stems.len())
    }
}
