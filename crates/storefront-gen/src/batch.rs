//! Batch generation over the catalog
//!
//! Assets are generated one at a time. A remote failure marks that asset
//! failed and the run moves on; local filesystem errors abort the run.
//! Once the loop is done the icon sizes are derived (if the icon was saved)
//! and the manifest is updated.

use crate::catalog::{AssetSpec, Target, ICON_ID};
use crate::error::{Result, StorefrontError};
use crate::icons;
use crate::manifest::{now_rfc3339, AssetManifest, ManifestEntry, MANIFEST_FILENAME};
use crate::model::GeminiModel;
use crate::provider::{ImageGenerator, ImageRequest};
use crate::store::{save_asset, SavedFile};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

const RULE_WIDTH: usize = 60;

/// Outcome of generating one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    Saved {
        filename: String,
        path: PathBuf,
        bytes: usize,
        content_hash: String,
    },
    Failed {
        reason: String,
    },
}

impl AssetOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, AssetOutcome::Saved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct AssetResult {
    pub id: &'static str,
    pub outcome: AssetOutcome,
}

/// What happened to the derived icon sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconDerivation {
    /// The icon was not requested or was not saved
    NotAttempted,
    /// Built without the `icons` feature
    Unavailable,
    Derived(Vec<PathBuf>),
    Failed(String),
}

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub model: GeminiModel,
    pub output_dir: PathBuf,
    pub write_manifest: bool,
}

impl BatchOptions {
    pub fn new(model: GeminiModel, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            model,
            output_dir: output_dir.into(),
            write_manifest: true,
        }
    }
}

/// Result of a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<AssetResult>,
    pub icons: IconDerivation,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_saved()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }

    #[cfg(test)]
    pub(crate) fn outcome(&self, id: &str) -> Option<&AssetOutcome> {
        self.results.iter().find(|r| r.id == id).map(|r| &r.outcome)
    }

    /// Print the per-asset summary and the aggregate tally
    pub fn print_summary(&self) {
        print_heading("Summary");
        for result in &self.results {
            match &result.outcome {
                AssetOutcome::Saved { filename, .. } => {
                    println!("  OK    {}: {}", result.id, filename)
                }
                AssetOutcome::Failed { reason } => {
                    println!("  FAIL  {}: {}", result.id, reason)
                }
            }
        }
        match &self.icons {
            IconDerivation::NotAttempted => {}
            IconDerivation::Unavailable => {
                println!("  Icon sizes: skipped (built without resize support)")
            }
            IconDerivation::Derived(paths) => println!("  Icon sizes: {} derived", paths.len()),
            IconDerivation::Failed(reason) => println!("  Icon sizes: FAILED ({})", reason),
        }
        println!("\n{}/{} succeeded", self.succeeded(), self.total());
    }
}

/// Generate every asset selected by `target`, in catalog order
pub fn run_batch(
    generator: &dyn ImageGenerator,
    target: Target,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let specs = target.resolve();
    let mut results = Vec::with_capacity(specs.len());
    let mut entries = Vec::new();

    for spec in specs {
        print_heading(&format!("{}: {}", spec.id, spec.title));

        let start = Instant::now();
        let outcome = match generate_one(generator, spec, options)? {
            Ok(saved) => {
                entries.push(ManifestEntry {
                    id: spec.id.to_string(),
                    filename: spec.filename.to_string(),
                    provider: generator.name().to_string(),
                    model: options.model.model_id().to_string(),
                    content_hash: saved.content_hash.clone(),
                    bytes: saved.bytes as u64,
                    duration_secs: start.elapsed().as_secs_f64(),
                    generated_at: now_rfc3339(),
                    prompt: spec.prompt.to_string(),
                });
                AssetOutcome::Saved {
                    filename: spec.filename.to_string(),
                    path: saved.path,
                    bytes: saved.bytes,
                    content_hash: saved.content_hash,
                }
            }
            Err(e) => {
                println!("  FAILED: {}", e);
                AssetOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        results.push(AssetResult {
            id: spec.id,
            outcome,
        });
    }

    let icons = derive_icons(&results, &options.output_dir);

    if options.write_manifest && !entries.is_empty() {
        update_manifest(&options.output_dir, entries)?;
    }

    Ok(BatchReport { results, icons })
}

/// Generate and save one asset.
///
/// The outer `Result` carries local errors that abort the run; the inner
/// one carries remote failures that only fail this asset.
fn generate_one(
    generator: &dyn ImageGenerator,
    spec: &AssetSpec,
    options: &BatchOptions,
) -> Result<std::result::Result<SavedFile, StorefrontError>> {
    println!(
        "  Generating {} via {} (model: {})...",
        spec.title,
        generator.name(),
        options.model.model_id()
    );

    let request = ImageRequest::for_asset(spec, options.model);
    let data = match generator.generate(&request) {
        Ok(data) => data,
        Err(e) if e.is_remote() => return Ok(Err(e)),
        Err(e) => return Err(e),
    };
    println!("  Image generated ({} bytes)", data.len());

    let saved = save_asset(&options.output_dir, spec.filename, &data)?;
    println!("  Saved: {}", saved.path.display());
    Ok(Ok(saved))
}

fn derive_icons(results: &[AssetResult], output_dir: &Path) -> IconDerivation {
    let icon_path = results
        .iter()
        .find(|r| r.id == ICON_ID)
        .and_then(|r| match &r.outcome {
            AssetOutcome::Saved { path, .. } => Some(path.clone()),
            AssetOutcome::Failed { .. } => None,
        })
        .filter(|p| p.exists());

    let Some(icon_path) = icon_path else {
        return IconDerivation::NotAttempted;
    };

    if !icons::resize_available() {
        warn!("built without the `icons` feature; skipping icon resizing");
        return IconDerivation::Unavailable;
    }

    let sizes: Vec<String> = icons::ICON_SIZES.iter().map(|s| s.to_string()).collect();
    print_heading(&format!("Icon sizes ({} px)", sizes.join(", ")));

    match icons::derive_icon_sizes(&icon_path, output_dir) {
        Ok(paths) => {
            for path in &paths {
                println!("  Resized: {}", path.display());
            }
            IconDerivation::Derived(paths)
        }
        Err(e) => {
            warn!(error = %e, icon = %icon_path.display(), "icon resizing failed");
            IconDerivation::Failed(e.to_string())
        }
    }
}

fn update_manifest(output_dir: &Path, entries: Vec<ManifestEntry>) -> Result<()> {
    let path = output_dir.join(MANIFEST_FILENAME);
    let mut manifest = match AssetManifest::load_or_default(&path) {
        Ok(m) => m,
        Err(StorefrontError::Manifest(msg)) => {
            warn!(%msg, "leaving unreadable manifest untouched");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    for entry in entries {
        manifest.upsert(entry);
    }
    manifest.save(&path)?;
    debug!(path = %path.display(), entries = manifest.entries.len(), "manifest updated");
    Ok(())
}

fn print_heading(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(RULE_WIDTH));
}
