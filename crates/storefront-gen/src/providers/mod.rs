//! Provider registry
//!
//! Maps provider names to concrete implementations.

pub mod gemini;
pub mod mock;

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::provider::ImageGenerator;

/// Create a provider by name with configuration
pub fn create_provider(name: &str, config: &StorefrontConfig) -> Result<Box<dyn ImageGenerator>> {
    match name {
        "gemini" => Ok(Box::new(gemini::GeminiProvider::from_config(config)?)),
        "mock" => Ok(Box::new(mock::MockProvider::new())),
        _ => Err(StorefrontError::Config(format!(
            "Unknown provider '{}'. Available: {}",
            name,
            available_providers().join(", ")
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["gemini", "mock"]
}
