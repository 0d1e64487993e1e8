//! Writing generated images to the output directory

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A file written by [`save_asset`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub bytes: usize,
    /// `sha256:<hex>` of the written bytes
    pub content_hash: String,
}

/// Write `data` to `<output_dir>/<filename>`, creating the directory if
/// needed and replacing any existing file.
pub fn save_asset(output_dir: &Path, filename: &str, data: &[u8]) -> Result<SavedFile> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(filename);
    std::fs::write(&path, data)?;

    Ok(SavedFile {
        path,
        bytes: data.len(),
        content_hash: content_hash(data),
    })
}

/// SHA-256 of `data` as a prefixed hex string
pub fn content_hash(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("sha256:{}", hex)
}
