use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum accepted dependency-report size (100 MB)
/// This prevents DoS attacks via excessively large files
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is safe to read a dependency report from.
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the check applies to
/// the path itself, not to a symlink target. Combines the existence check,
/// the symlink rejection, the regular-file check and the size cap in a
/// single metadata read.
///
/// # Arguments
/// * `path` - The report path to validate
/// * `max_size` - Maximum allowed size in bytes (normally `MAX_REPORT_SIZE`)
///
/// # Errors
/// Returns an error if the path does not exist, is a symbolic link, is not
/// a regular file, or exceeds `max_size`.
pub fn validate_readable_report(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata for {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, reading through symbolic links is not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }

    Ok(())
}

/// Validates that a path is safe to write output to.
///
/// # Security
/// Rejects existing symlinks at the target path and requires the parent
/// directory (when present) to exist and be resolvable.
///
/// # Errors
/// Returns an error if the target is a symbolic link or the parent
/// directory is missing or cannot be resolved.
pub fn validate_write_target(path: &Path) -> Result<()> {
    if path.exists() {
        let metadata = fs::symlink_metadata(path).map_err(|e| {
            anyhow::anyhow!("Failed to read metadata for {}: {}", path.display(), e)
        })?;
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                path.display()
            );
        }
    }

    if let Some(parent) = path.parent() {
        if parent != Path::new("") {
            if !parent.exists() {
                anyhow::bail!("Parent directory does not exist: {}", parent.display());
            }
            parent.canonicalize().map_err(|e| {
                anyhow::anyhow!("Failed to validate parent directory {}: {}", parent.display(), e)
            })?;
        }
    }

    Ok(())
}
