// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

/// A uniquely named directory under [`std::env::temp_dir`]. It is deleted (along with
/// everything in it) when this struct is dropped, so hold on to it for as long as the
/// files inside are needed.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns an error if the directory cannot be created (permissions, full disk, or
/// other I/O failures).
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("gapline-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_created_and_removed_on_drop() {
        let path = {
            let dir = try_create_temp_dir().unwrap();
            assert!(dir.exists());
            assert!(dir.to_string().contains("gapline-"));
            dir.inner.clone()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_dir_removes_nested_files() {
        let dir = try_create_temp_dir().unwrap();
        let file = dir.join("a.txt");
        std::fs::write(&file, "hello").unwrap();
        assert!(file.exists());
        let root = dir.inner.clone();
        drop(dir);
        assert!(!root.exists());
    }
}
