//! Archive extraction stage
//!
//! Unpacks the downloaded ZIP into a working directory and renames the
//! first entry's file to a canonical name. The archive is expected to hold
//! exactly one payload file; the "first entry" policy is deliberate and no
//! name or extension check is performed before the rename.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extract the archive and return the path of the renamed payload file.
///
/// All entries are extracted into `extract_dir` (created if missing); the
/// entry at position zero is then renamed to `canonical_name` inside that
/// directory. An archive with no entries is an error.
pub fn extract_archive(
    archive_path: &Path,
    extract_dir: &Path,
    canonical_name: &str,
) -> Result<PathBuf> {
    debug!(?archive_path, ?extract_dir, "opening archive");

    std::fs::create_dir_all(extract_dir)?;

    let file = std::fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| Error::Archive(format!("failed to read ZIP archive: {e}")))?;

    if archive.is_empty() {
        return Err(Error::Archive("archive has no entries".to_string()));
    }

    // First-entry policy: the payload is whatever sits at position zero.
    let first_entry_path = {
        let entry = archive
            .by_index(0)
            .map_err(|e| Error::Archive(format!("failed to read ZIP entry: {e}")))?;
        entry
            .enclosed_name()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::Archive("first entry has an unsafe path".to_string()))?
    };

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::Archive(format!("failed to read ZIP entry: {e}")))?;

        let entry_path = match entry.enclosed_name() {
            Some(path) => extract_dir.join(path),
            None => {
                warn!(index = i, "skipping entry with unsafe path");
                continue;
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&entry_path)?;
        } else {
            if let Some(parent) = entry_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut outfile = std::fs::File::create(&entry_path)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }
    }

    let old_path = extract_dir.join(&first_entry_path);
    let new_path = extract_dir.join(canonical_name);
    std::fs::rename(&old_path, &new_path)?;

    info!(
        extract_dir = %extract_dir.display(),
        payload = %new_path.display(),
        "archive extracted"
    );

    Ok(new_path)
}
