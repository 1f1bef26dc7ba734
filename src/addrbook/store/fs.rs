use super::{DataStore, RejectedLine};
use crate::error::{AddrbookError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const REJECTED_SUFFIX: &str = ".rejected";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar file that collects quarantined lines.
    pub fn rejected_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(REJECTED_SUFFIX);
        PathBuf::from(name)
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(AddrbookError::file_io(path))?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts".to_string());
        dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read(&self.path).map_err(AddrbookError::file_io(&self.path))?;
        Ok(Some(content))
    }

    fn write(&mut self, content: &str) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let tmp_file = self.tmp_path(&dir);
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AddrbookError::file_io(&tmp_file)(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AddrbookError::file_io(&self.path)(e));
        }

        log::debug!(
            "event=store_write path={} bytes={}",
            self.path.display(),
            content.len()
        );
        Ok(())
    }

    fn quarantine(&mut self, lines: &[RejectedLine]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let rejected = self.rejected_path();
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&rejected)
            .map_err(AddrbookError::file_io(&rejected))?;
        for line in lines {
            file.write_all(&line.bytes)
                .and_then(|_| file.write_all(b"\n"))
                .map_err(AddrbookError::file_io(&rejected))?;
        }

        log::warn!(
            "event=store_quarantine path={} lines={}",
            rejected.display(),
            lines.len()
        );
        Ok(())
    }

    fn last_modified(&self) -> Result<Option<DateTime<Utc>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let modified = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(AddrbookError::file_io(&self.path))?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
