// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the commit message file handed to the commit-msg hook.

use crate::error::{HookError, Result};
use std::path::Path;

/// Read the whole commit message file.
///
/// The contents are returned untouched: no trimming and no comment
/// stripping.
pub fn read_commit_message(path: &Path) -> Result<String> {
    tracing::debug!("Reading commit message from: {:?}", path);

    std::fs::read_to_string(path).map_err(|source| HookError::MessageFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_commit_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "This is a commit message").unwrap();

        let message = read_commit_message(&path).unwrap();
        assert_eq!(message, "This is a commit message");
    }

    #[test]
    fn test_read_keeps_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "feat: parser\n\n# comment\n").unwrap();

        let message = read_commit_message(&path).unwrap();
        assert_eq!(message, "feat: parser\n\n# comment\n");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "").unwrap();

        assert_eq!(read_commit_message(&path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("non-existent.txt");

        let err = read_commit_message(&path).unwrap_err();
        match err {
            HookError::MessageFile { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
