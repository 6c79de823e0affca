//! Local File System
//!
//! Whole-file reads and atomic whole-file replacement for the JSON store.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

/// Local file system access
///
/// Writes go to a temp file in the target directory and are renamed over the
/// target, so readers see either the old or the new content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    pub fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Replace `path` with `content` via tempfile + rename.
    pub fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        let parent = parent_dir(path);
        fs::create_dir_all(&parent)?;

        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Run `f` while holding an exclusive advisory lock on `lock_path`.
    pub fn with_lock<T, E>(
        &self,
        lock_path: &Path,
        f: impl FnOnce() -> Result<T, E>,
    ) -> io::Result<Result<T, E>> {
        fs::create_dir_all(parent_dir(lock_path))?;
        let lock_file = File::create(lock_path)?;
        lock_file.lock_exclusive()?;

        let result = f();

        let _ = lock_file.unlock();
        Ok(result)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camps.json");

        LocalFs::new().write_atomic(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn write_atomic_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camps.json");
        fs::write(&path, "Original").unwrap();

        LocalFs::new().write_atomic(&path, "Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("victims.json");

        LocalFs::new().write_atomic(&path, "{}").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("camps.json");

        LocalFs::new().write_atomic(&path, "{}").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("camps.json")]);
    }

    #[test]
    fn with_lock_returns_inner_result() {
        let dir = tempdir().unwrap();
        let lock = dir.path().join("camps.lock");

        let result: Result<u32, ()> = LocalFs::new().with_lock(&lock, || Ok(7)).unwrap();

        assert_eq!(result, Ok(7));
        assert!(lock.exists());
    }

    #[test]
    fn parent_of_bare_file_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("camps.json")), PathBuf::from("."));
    }
}
