//! Atomic writes for the generated license file.
//!
//! Content goes to `.{filename}.tmp` next to the target, is synced to disk,
//! and is then renamed over the target. A failed run therefore never leaves
//! a half-written `LICENSE` behind; at worst the temp file survives a crash.
//!
//! A target that is a symlink is written through: the file it points at is
//! replaced and the link itself is left in place.
//!
//! The temp file is created with the process default mode (0666 minus the
//! umask on Unix), so the result is readable by everyone, like any file the
//! user would create by hand.

use crate::error::{LicenseError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, replacing any existing content.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(LicenseError::WriteFailure)` - On create, write, sync, or rename failure
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    write_atomically(path, content.as_bytes()).map_err(|source| LicenseError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomically(path: &Path, content: &[u8]) -> io::Result<()> {
    let resolved = resolve_target(path);
    let path = resolved.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = generate_temp_path(path)?;

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    // rename() replaces the destination in one step on both POSIX and Windows
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::info!(path = %path.display(), bytes = content.len(), "license written");
    Ok(())
}

/// Follow a symlinked target, including a dangling one, to the file it names.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| match fs::read_link(path) {
                Ok(link) => path.parent().unwrap_or(Path::new(".")).join(link),
                Err(_) => path.to_path_buf(),
            })
        }
        _ => path.to_path_buf(),
    }
}

/// `.{filename}.tmp` in the same directory as the target.
fn generate_temp_path(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
