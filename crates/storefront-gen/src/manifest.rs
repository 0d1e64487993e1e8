//! Manifest of generated assets
//!
//! `manifest.toml` in the output directory records where each saved image
//! came from (provider, model, prompt) and its content hash. Runs that only
//! regenerate some assets update their entries and leave the rest alone.

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILENAME: &str = "manifest.toml";

/// A record of a single saved asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub filename: String,
    pub provider: String,
    pub model: String,
    pub content_hash: String,
    pub bytes: u64,
    pub duration_secs: f64,
    pub generated_at: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

/// TOML wrapper
#[derive(Debug, Serialize, Deserialize)]
struct ManifestFile {
    manifest: AssetManifest,
}

impl AssetManifest {
    /// Load a manifest, or start an empty one if the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let file: ManifestFile = toml::from_str(&content).map_err(|e| {
            StorefrontError::Manifest(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(file.manifest)
    }

    /// Replace the entry with the same id, or append a new one
    pub fn upsert(&mut self, entry: ManifestEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.updated_at = now_rfc3339();

        let file = ManifestFile {
            manifest: self.clone(),
        };
        let content = toml::to_string_pretty(&file).map_err(|e| {
            StorefrontError::Manifest(format!("Failed to serialize manifest: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, hash: &str) -> ManifestEntry {
        ManifestEntry {
            id: id.to_string(),
            filename: format!("{}.png", id),
            provider: "mock".to_string(),
            model: "gemini-3-pro-image-preview".to_string(),
            content_hash: hash.to_string(),
            bytes: 70,
            duration_secs: 0.2,
            generated_at: now_rfc3339(),
            prompt: "a rocket".to_string(),
        }
    }

    #[test]
    fn test_missing_file_gives_empty_manifest() {
        let path = std::env::temp_dir()
            .join(format!("storefront_manifest_test_{}", uuid::Uuid::new_v4()))
            .join(MANIFEST_FILENAME);
        let manifest = AssetManifest::load_or_default(&path).unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut manifest = AssetManifest::default();
        manifest.upsert(entry("icon", "sha256:aa"));
        manifest.upsert(entry("promo_small", "sha256:bb"));
        manifest.upsert(entry("icon", "sha256:cc"));

        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0].id, "icon");
        assert_eq!(manifest.get("icon").unwrap().content_hash, "sha256:cc");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir()
            .join(format!("storefront_manifest_test_{}", uuid::Uuid::new_v4()));
        let path = dir.join(MANIFEST_FILENAME);

        let mut manifest = AssetManifest::default();
        manifest.upsert(entry("icon", "sha256:aa"));
        manifest.save(&path).unwrap();

        let loaded = AssetManifest::load_or_default(&path).unwrap();
        assert_eq!(loaded.entries, manifest.entries);
        assert!(loaded.updated_at.ends_with('Z'));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_manifest_is_an_error() {
        let dir = std::env::temp_dir()
            .join(format!("storefront_manifest_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(MANIFEST_FILENAME);
        std::fs::write(&path, "[[manifest.entries]\n").unwrap();

        assert!(matches!(
            AssetManifest::load_or_default(&path),
            Err(StorefrontError::Manifest(_))
        ));

        std::fs::remove_dir_all(&dir).ok();
    }
}
