use std::path::{Path, PathBuf};

/// Appends `.{extension}` when `path` has no extension of its own.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
