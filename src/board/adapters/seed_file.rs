//! Seed file loading through capability-based filesystem access.

use crate::board::domain::{SeedData, SeedError};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

/// Reads and parses a seed document from `path`.
///
/// # Errors
///
/// Returns [`SeedError::Read`] when the file cannot be opened or read, and
/// [`SeedError::Parse`] when its contents are not a seed document.
pub fn load_seed_file(path: &Utf8Path) -> Result<SeedData, SeedError> {
    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    let seed = SeedData::from_json(&contents)?;
    debug!(
        %path,
        columns = seed.status.len(),
        tasks = seed.users.len(),
        "loaded board seed"
    );
    Ok(seed)
}
