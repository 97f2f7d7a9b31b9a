use std::fs;
use std::path::{Path, PathBuf};

use crate::io::recovery::{RecoveryEntry, atomic_write, log_recovery};
use crate::model::list::TaskList;
use crate::parse::{LineError, parse_list, serialize_list};

/// Error loading the list file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: LineError,
    },
}

/// Error saving the list file
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the whole list in file order. A missing or unreadable file is an
/// error, never an empty list.
pub fn load_list(path: &Path) -> Result<TaskList, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::NotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    let list = parse_list(&text).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), count = list.count(), "loaded list");
    Ok(list)
}

/// Write the whole list in its current order. On failure the content is
/// copied to the recovery log before the error is returned.
pub fn save_list(path: &Path, list: &TaskList) -> Result<(), SaveError> {
    let content = serialize_list(list);
    if let Err(e) = atomic_write(path, content.as_bytes()) {
        log_recovery(
            path,
            RecoveryEntry {
                timestamp: chrono::Utc::now(),
                description: "list write failed".to_string(),
                fields: vec![
                    ("Target".to_string(), path.display().to_string()),
                    ("Error".to_string(), e.to_string()),
                ],
                body: content,
            },
        );
        return Err(SaveError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }
    tracing::debug!(path = %path.display(), count = list.count(), "saved list");
    Ok(())
}

/// Create an empty list file unless one already exists.
/// Returns true if a file was created.
pub fn init_list(path: &Path) -> Result<bool, SaveError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| SaveError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    atomic_write(path, b"").map_err(|e| SaveError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskState;
    use crate::ops::order::sort_tasks;
    use crate::parse::DecodeError;
    use crate::io::recovery::recovery_log_path;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = load_list(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn load_bad_line_fails_whole_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list");
        fs::write(&path, "1 0 0 0 fine\nnot a record\n").unwrap();
        match load_list(&path) {
            Err(LoadError::Decode { source, .. }) => {
                assert_eq!(source.line, 2);
                assert!(matches!(source.source, DecodeError::Malformed(_)));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn load_sort_save_reload_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list");
        fs::write(&path, "1 0 0 0 x\n2 0 5 3 y\n").unwrap();

        let mut list = load_list(&path).unwrap();
        sort_tasks(&mut list);
        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y"]);
        assert_eq!(list.get(1).unwrap().state, TaskState::Done);

        save_list(&path, &list).unwrap();
        let saved = fs::read(&path).unwrap();
        assert_eq!(saved, b"1 0 0 0 x\n2 0 5 3 y\n");

        let reloaded = load_list(&path).unwrap();
        assert_eq!(reloaded, list);
        save_list(&path, &reloaded).unwrap();
        assert_eq!(fs::read(&path).unwrap(), saved);
    }

    #[test]
    fn save_failure_writes_recovery_log() {
        let tmp = TempDir::new().unwrap();
        // A directory in place of the list file makes the rename fail
        let path = tmp.path().join("list");
        fs::create_dir(&path).unwrap();
        let list = TaskList::from_tasks([crate::model::task::Task::new("keep me".into(), 1)]);

        let err = save_list(&path, &list).unwrap_err();
        assert!(matches!(err, SaveError::Write { .. }));
        let log = fs::read_to_string(recovery_log_path(&path)).unwrap();
        assert!(log.contains("1 0 0 0 keep me"));
    }

    #[test]
    fn init_creates_empty_file_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("list");
        assert!(init_list(&path).unwrap());
        assert!(load_list(&path).unwrap().is_empty());

        fs::write(&path, "1 0 0 0 existing\n").unwrap();
        assert!(!init_list(&path).unwrap());
        assert_eq!(load_list(&path).unwrap().count(), 1);
    }
}
