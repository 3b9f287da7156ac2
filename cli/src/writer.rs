#![deny(missing_docs)]

//! # Module Writer
//!
//! Writes generated module texts to disk.
//!
//! Every file is first staged as a temporary file inside the destination
//! directory; only once all of them are staged are they renamed into place.
//! A failure while staging leaves existing destinations untouched.
//!
//! Renames happen one file at a time, so a failure during that last step can
//! leave earlier files replaced and later ones stale; the stale paths are
//! logged. Staged files take the permissions of the file they replace, or
//! `0o644` for new files on Unix.

use crate::error::{CliError, CliResult};
use std::collections::HashSet;
use std::fs::{self, Permissions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A file to produce: name relative to the output directory, plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile<'a> {
    /// File name, e.g. `BasicModels.py`.
    pub file_name: String,
    /// Full text.
    pub content: &'a str,
}

/// Writes all `files` into `dir`, creating it if missing.
///
/// Returns the final paths in input order.
pub fn write_modules(dir: &Path, files: &[PendingFile<'_>]) -> CliResult<Vec<PathBuf>> {
    let mut names = HashSet::new();
    for file in files {
        if !names.insert(file.file_name.as_str()) {
            return Err(CliError::General(format!(
                "Two modules would be written to the same file: {}",
                file.file_name
            )));
        }
    }

    fs::create_dir_all(dir)?;

    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        let destination = dir.join(&file.file_name);
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(file.content.as_bytes())?;
        tmp.flush()?;
        if let Some(permissions) = target_permissions(&destination)? {
            tmp.as_file().set_permissions(permissions)?;
        }
        staged.push((tmp, destination));
    }

    let mut written = Vec::with_capacity(staged.len());
    let mut pending = staged.into_iter();
    while let Some((tmp, destination)) = pending.next() {
        if let Err(e) = tmp.persist(&destination) {
            tracing::warn!(path = %destination.display(), "module left unchanged");
            for (_, stale) in pending.by_ref() {
                tracing::warn!(path = %stale.display(), "module left unchanged");
            }
            return Err(e.error.into());
        }
        tracing::debug!(path = %destination.display(), "wrote module");
        written.push(destination);
    }
    Ok(written)
}

/// Permissions the staged file should carry once renamed over `destination`.
fn target_permissions(destination: &Path) -> io::Result<Option<Permissions>> {
    match fs::metadata(destination) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_directory_and_files() {
        let root = tempdir().unwrap();
        let dir = root.path().join("nested").join("Files");
        let files = vec![
            PendingFile {
                file_name: "BasicModels.py".into(),
                content: "basic\n",
            },
            PendingFile {
                file_name: "ComplexModels.py".into(),
                content: "complex\n",
            },
        ];

        let written = write_modules(&dir, &files).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dir.join("BasicModels.py")).unwrap(), "basic\n");
        assert_eq!(
            fs::read_to_string(dir.join("ComplexModels.py")).unwrap(),
            "complex\n"
        );
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("BasicModels.py");
        fs::write(&target, "old content that is longer than the new one").unwrap();

        let files = vec![PendingFile {
            file_name: "BasicModels.py".into(),
            content: "new",
        }];
        write_modules(dir.path(), &files).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = tempdir().unwrap();
        let files = vec![PendingFile {
            file_name: "Only.py".into(),
            content: "x",
        }];
        write_modules(dir.path(), &files).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_duplicate_file_names_rejected() {
        let dir = tempdir().unwrap();
        let files = vec![
            PendingFile {
                file_name: "Models.py".into(),
                content: "basic",
            },
            PendingFile {
                file_name: "Models.py".into(),
                content: "complex",
            },
        ];
        let err = write_modules(dir.path(), &files).unwrap_err();
        assert!(matches!(err, CliError::General(_)));
        assert!(!dir.path().join("Models.py").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_files_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let files = vec![PendingFile {
            file_name: "BasicModels.py".into(),
            content: "x",
        }];
        write_modules(dir.path(), &files).unwrap();
        let mode = fs::metadata(dir.path().join("BasicModels.py"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_permissions_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("BasicModels.py");
        fs::write(&target, "old").unwrap();
        fs::set_permissions(&target, Permissions::from_mode(0o664)).unwrap();

        let files = vec![PendingFile {
            file_name: "BasicModels.py".into(),
            content: "new",
        }];
        write_modules(dir.path(), &files).unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }
}
