//! File writing helpers shared by the file-backed stores
//!
//! Updates go through a temp file in the destination directory followed
//! by a rename, so readers never observe a half-written entity.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::AsyncWriteExt;

/// Parent directory of `path`, defaulting to the current directory
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write `bytes` to `path` atomically, creating parent directories
pub(crate) fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let parent = parent_dir(path);
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create `path` exclusively and write `bytes`; fails if the file exists
pub(crate) fn create_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(parent_dir(path))?;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Unique temp sibling for `path`, for rename-into-place writes
fn tmp_sibling(path: &Path) -> PathBuf {
    let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
}

/// Async variant of [`atomic_write`]
pub(crate) async fn atomic_write_async(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(parent_dir(path)).await?;

    let tmp = tmp_sibling(path);
    let write_result = tokio::fs::write(&tmp, bytes).await;
    match write_result {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(err) => {
            let _ = tokio::fs::remove_file(&tmp).await;
            Err(err)
        }
    }
}

/// Async variant of [`create_new`]
pub(crate) async fn create_new_async(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(parent_dir(path)).await?;

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_creates_parents_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("entity.txt");

        atomic_write(&path, b"one").unwrap();
        atomic_write(&path, b"two").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn create_new_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entity.txt");

        create_new(&path, b"first").unwrap();
        let err = create_new(&path, b"second").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn tmp_sibling_stays_in_the_same_directory() {
        let path = Path::new("/data/entity.json");
        let tmp = tmp_sibling(path);
        assert_eq!(tmp.parent(), path.parent());
        assert_ne!(tmp, path);
    }
}
