use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::create_dir_all(path.as_ref())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    if path.as_ref().exists() && path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Copy a file from source to destination, creating parent directories
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> io::Result<u64> {
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::copy(from, to)
}

/// Write contents to a file atomically: write a temp file in the same
/// directory, then rename it over the destination. A reader never sees a
/// half-written index.
pub fn write_file_atomic<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }

    let tmp = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("index.json");

        write_file_atomic(&target, "first").unwrap();
        write_file_atomic(&target, "second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
        assert!(!dir.path().join("index.tmp").exists());
    }

    #[test]
    fn test_write_file_atomic_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deep/index.json");

        write_file_atomic(&target, "{}").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
    }
}
