//! Static file lookup
//!
//! Maps a file identifier to a regular file under the serving root.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::http::mime;
use crate::logger;

/// Outcome of looking a file identifier up under the serving root
#[derive(Debug)]
pub enum Lookup {
    /// Full file contents and their content type
    Found(Vec<u8>, &'static str),
    /// Nothing servable at that path
    Missing,
}

/// Resolve `file_id` against `root` and read the file
///
/// `root` must already be canonical. Directories, missing paths and paths
/// that escape the root all come back as `Missing`; a regular file that
/// cannot be read is an error.
pub async fn lookup(root: &Path, file_id: &str) -> io::Result<Lookup> {
    let Some(file_path) = resolve(root, file_id).await else {
        return Ok(Lookup::Missing);
    };

    let content = fs::read(&file_path).await?;
    Ok(Lookup::Found(content, mime::content_type_for(&file_path)))
}

/// Canonical path of a regular file inside `root`, if there is one
async fn resolve(root: &Path, file_id: &str) -> Option<PathBuf> {
    // Not found is the common case, nothing to log
    let canonical = fs::canonicalize(root.join(file_id)).await.ok()?;

    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {file_id} -> {}",
            canonical.display()
        ));
        return None;
    }

    let metadata = fs::metadata(&canonical).await.ok()?;
    metadata.is_file().then_some(canonical)
}
