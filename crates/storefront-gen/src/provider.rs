//! Image generator trait and request type

use crate::catalog::AssetSpec;
use crate::error::Result;
use crate::model::GeminiModel;

/// A request for one image
#[derive(Debug, Clone)]
pub struct ImageRequest<'a> {
    /// Prompt text sent to the model
    pub prompt: &'a str,
    /// Human-readable title, used only for logging
    pub title: &'a str,
    pub model: GeminiModel,
    /// Nominal output size, used by offline generators
    pub width: u32,
    pub height: u32,
}

impl<'a> ImageRequest<'a> {
    /// Build a request for a catalog entry
    pub fn for_asset(spec: &'a AssetSpec, model: GeminiModel) -> Self {
        Self {
            prompt: spec.prompt,
            title: spec.title,
            model,
            width: spec.width,
            height: spec.height,
        }
    }
}

/// Trait implemented by each image source (Gemini, Mock)
///
/// `generate` blocks until the image is available and returns the raw
/// encoded image bytes. Remote failures come back as errors for which
/// [`crate::StorefrontError::is_remote`] is true.
pub trait ImageGenerator {
    /// Provider name (e.g. "gemini", "mock")
    fn name(&self) -> &str;

    fn generate(&self, request: &ImageRequest<'_>) -> Result<Vec<u8>>;
}
