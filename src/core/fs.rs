// src/core/fs.rs

//! Filesystem collaborator used by commands that persist remote artifacts.

use crate::core::TracelinkError;
use crate::core::net::RecordingStream;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use tracing::debug;

/// The narrow filesystem surface commands are allowed to touch.
#[async_trait]
pub trait FileSystem: Send + Sync {
    fn is_directory(&self, path: &Path) -> bool;

    /// Drains `source` into `destination`, returning the number of bytes
    /// written. With `overwrite` unset, an existing destination is an error.
    async fn copy(
        &self,
        source: RecordingStream,
        destination: &Path,
        overwrite: bool,
    ) -> Result<u64, TracelinkError>;
}

/// Production implementation on top of `tokio::fs`.
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    async fn copy(
        &self,
        mut source: RecordingStream,
        destination: &Path,
        overwrite: bool,
    ) -> Result<u64, TracelinkError> {
        if !overwrite && tokio::fs::try_exists(destination).await? {
            return Err(TracelinkError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", destination.display()),
            )));
        }
        let mut file = tokio::fs::File::create(destination).await?;
        let written = tokio::io::copy(&mut source, &mut file).await?;
        debug!("Copied {} bytes to {}", written, destination.display());
        Ok(written)
    }
}
