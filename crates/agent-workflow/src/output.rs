//! Output persistence

use agent_core::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Replace the file at `path` with `contents`
///
/// The text is written to a uniquely named temporary file next to `path`,
/// synced, then renamed over the destination. Readers see either the old file
/// or the complete new one. Concurrent writers to the same path never
/// interleave; the last rename wins.
pub async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = temp_path_for(path)?;

    if let Err(source) = write_and_rename(&tmp, path, contents).await {
        match fs::remove_file(&tmp).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                warn!("Failed to remove temporary file {}: {}", tmp.display(), e);
            }
            _ => {}
        }
        return Err(Error::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

async fn write_and_rename(tmp: &Path, path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, path).await
}

/// `.{file}.{uuid}.tmp` in the destination's directory
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| Error::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ),
    })?;

    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", Uuid::new_v4()));

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(dir.join(tmp_name))
}
