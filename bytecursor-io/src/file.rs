//! File load/save for regions.
//!
//! A loaded file becomes one region holding the file's entire contents;
//! saving writes a region's bytes back out. No structural knowledge of
//! the buffer format lives here. The async variants suspend only while
//! waiting on the file system.

use crate::error::Result;
use bytecursor_core::Region;
use std::path::Path;

/// Reads an entire file into a region.
pub fn load(path: impl AsRef<Path>) -> Result<Region> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded region from file");
    Ok(Region::wrap(bytes))
}

/// Writes a region's bytes to a file, replacing any existing contents.
pub fn save(path: impl AsRef<Path>, region: &Region) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, region.to_vec())?;
    tracing::debug!(path = %path.display(), len = region.len(), "saved region to file");
    Ok(())
}

/// Asynchronously reads an entire file into a region.
pub async fn load_async(path: impl AsRef<Path>) -> Result<Region> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded region from file");
    Ok(Region::wrap(bytes))
}

/// Asynchronously writes a region's bytes to a file.
pub async fn save_async(path: impl AsRef<Path>, region: &Region) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, region.to_vec()).await?;
    tracing::debug!(path = %path.display(), len = region.len(), "saved region to file");
    Ok(())
}
