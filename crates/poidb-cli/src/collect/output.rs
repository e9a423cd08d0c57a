use std::path::Path;

use anyhow::Context;
use poidb_places::PlaceDetail;

/// Writes `places` as a pretty-printed JSON array, replacing any existing
/// file. Non-ASCII text is written as-is.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub(crate) fn write_places_json(path: &Path, places: &[PlaceDetail]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(places).context("failed to serialize places")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
