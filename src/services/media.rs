//! Media source checks

use std::path::Path;

use tracing::info;

/// Verify that the feature media file exists and is readable
///
/// Called once at startup; a missing media file is fatal and is reported
/// before the kiosk presents anything.
pub async fn check_media_available(path: &Path) -> Result<(), String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| format!("Error loading media {}: {}. Check the media path.", path.display(), e))?;

    if !metadata.is_file() {
        return Err(format!("Media path {} is not a file", path.display()));
    }

    info!("Media source found: {}", path.display());
    Ok(())
}
