//! Smaller icon sizes derived from the generated 128px icon
//!
//! Resizing needs the `image` crate, which is only compiled in with the
//! `icons` feature. Without it the step is skipped with a warning.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Square sizes the store listing needs besides the 128px icon
pub const ICON_SIZES: [u32; 3] = [16, 32, 48];

/// Output filename for a derived icon size
pub fn icon_filename(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Whether this build can resize images
pub fn resize_available() -> bool {
    cfg!(feature = "icons")
}

/// Write `icon{16,32,48}.png` next to `base_icon` in `output_dir`.
///
/// Returns the written paths in [`ICON_SIZES`] order.
#[cfg(feature = "icons")]
pub fn derive_icon_sizes(base_icon: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    use crate::error::StorefrontError;
    use image::imageops::FilterType;

    // Decode by content; the API may hand back JPEG under a .png name
    let data = std::fs::read(base_icon)?;
    let img = image::load_from_memory(&data).map_err(|e| {
        StorefrontError::Image(format!("Failed to decode {}: {}", base_icon.display(), e))
    })?;

    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let resized = img.resize_exact(size, size, FilterType::Lanczos3);
        let path = output_dir.join(icon_filename(size));
        resized
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| {
                StorefrontError::Image(format!("Failed to save {}: {}", path.display(), e))
            })?;
        tracing::debug!(size, path = %path.display(), "icon resized");
        written.push(path);
    }
    Ok(written)
}

#[cfg(not(feature = "icons"))]
pub fn derive_icon_sizes(_base_icon: &Path, _output_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(Vec::new())
}
