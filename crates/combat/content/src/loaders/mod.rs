//! Content loaders for reading combat data from files.
//!
//! Each loader offers `load` for a file on disk, `parse` for in-memory text
//! and `load_default` for the copy embedded from `data/`.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod ladder;
pub mod roster;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use ladder::LadderLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
