use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A uniquely named directory that is removed with everything inside it on drop.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    pub async fn create(root: impl AsRef<Path>) -> io::Result<Self> {
        let path = root.as_ref().join(uuid::Uuid::new_v4().to_string());
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_dir_all(&self.path) {
                log::warn!("Failed to remove work dir {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Removes work dirs left in `root` by an earlier run, creating `root` if missing.
///
/// Only uuid-named directories are touched; anything else in `root` is kept.
pub async fn clear_work_dirs(root: impl AsRef<Path>) -> io::Result<usize> {
    let root = root.as_ref();
    tokio::fs::create_dir_all(root).await?;

    let mut removed = 0;
    let mut entries = tokio::fs::read_dir(root).await?;
    while let Some(entry) = entries.next_entry().await? {
        let is_work_dir = entry
            .file_name()
            .to_str()
            .is_some_and(|name| uuid::Uuid::parse_str(name).is_ok());

        if is_work_dir && entry.file_type().await?.is_dir() {
            tokio::fs::remove_dir_all(entry.path()).await?;
            removed += 1;
        }
    }
    Ok(removed)
}
