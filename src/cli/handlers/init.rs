use std::path::Path;

use crate::io::list_io::{SaveError, init_list};

/// Create an empty list file at `path` unless one exists
pub fn cmd_init(path: &Path) -> Result<(), SaveError> {
    if init_list(path)? {
        tracing::info!(path = %path.display(), "created list file");
        eprintln!("Created {}", path.display());
    }
    Ok(())
}
