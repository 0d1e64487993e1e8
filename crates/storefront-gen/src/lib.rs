//! Storefront Gen - store-listing image generation
//!
//! Generates the icon, promo tiles and screenshots for a browser-extension
//! store listing through the Gemini `generateContent` API, saves them to an
//! output directory, derives the small icon sizes and records a manifest.

pub mod batch;
pub mod catalog;
pub mod config;
mod error;
pub mod icons;
pub mod manifest;
pub mod model;
mod prompts;
pub mod provider;
pub mod providers;
pub mod store;

pub use batch::{run_batch, AssetOutcome, BatchOptions, BatchReport, IconDerivation};
pub use catalog::{AssetSpec, Target};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use model::GeminiModel;
pub use provider::{ImageGenerator, ImageRequest};
