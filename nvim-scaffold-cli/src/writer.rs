//! Writes rendered files under the plugin root

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::templates::GeneratedFile;

/// Write `files` under `target` in order, creating parent directories
///
/// `on_written` runs after each successful write with the absolute path of the
/// file. The first failure stops the run; files already written stay on disk.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] for the first directory or file that cannot
/// be created.
pub fn write_files<F>(target: &Path, files: &[GeneratedFile], mut on_written: F) -> Result<()>
where
    F: FnMut(&Path, &GeneratedFile),
{
    for file in files {
        let full_path = target.join(&file.path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }

        fs::write(&full_path, &file.content).map_err(|e| ScaffoldError::io(&full_path, e))?;
        debug!(path = %full_path.display(), "wrote file");

        on_written(&full_path, file);
    }

    Ok(())
}
