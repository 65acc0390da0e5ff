//! Disk I/O for downloaded images.
//!
//! Files are never overwritten: a taken name gets `_1`, `_2`, … inserted
//! before the extension. The existence check and the creation are one
//! `create_new` open, so the first free name wins.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Safety valve against a directory that somehow reports every name as taken.
const MAX_COLLISIONS: u32 = 100_000;

/// Candidate path for the `n`th collision of `file_name` inside `dir` (`n = 0` is the name itself).
pub fn candidate_path(dir: &Path, file_name: &str, n: u32) -> PathBuf {
    if n == 0 {
        return dir.join(file_name);
    }
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    match name.extension() {
        Some(ext) => dir.join(format!("{}_{}.{}", stem, n, ext.to_string_lossy())),
        None => dir.join(format!("{}_{}", stem, n)),
    }
}

/// Creates the first free candidate for `file_name` in `dir` and returns it open.
fn create_unique(dir: &Path, file_name: &str) -> Result<(File, PathBuf)> {
    for n in 0..=MAX_COLLISIONS {
        let path = candidate_path(dir, file_name, n);
        match File::options().write(true).create_new(true).open(&path) {
            Ok(file) => {
                if n > 0 {
                    tracing::debug!(path = %path.display(), collisions = n, "file name taken, using suffix");
                }
                return Ok((file, path));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("failed to create {}", path.display()))
            }
        }
    }
    anyhow::bail!(
        "no free file name for {} in {} after {} attempts",
        file_name,
        dir.display(),
        MAX_COLLISIONS
    )
}

/// Writes `bytes` to a new file named after `file_name` in `dir`, adding a
/// numeric suffix when the name is taken. Returns the path written.
pub fn write_collision_safe(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let (mut file, path) = create_unique(dir, file_name)?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", path.display()))?;
    Ok(path)
}
