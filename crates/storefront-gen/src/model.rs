//! Gemini model table

use crate::error::{Result, StorefrontError};
use std::fmt;
use std::str::FromStr;

/// Image-capable Gemini models the tool can target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeminiModel {
    /// Gemini 3 Pro image preview (highest quality)
    #[default]
    Gemini3Pro,
    /// Gemini 2.5 Flash preview (fast, cheap)
    Gemini25Flash,
    Imagen3,
}

impl GeminiModel {
    /// All models in display order
    pub const ALL: [GeminiModel; 3] = [
        GeminiModel::Gemini3Pro,
        GeminiModel::Gemini25Flash,
        GeminiModel::Imagen3,
    ];

    /// Short name accepted on the command line and in config files
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Gemini3Pro => "gemini-3-pro",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Imagen3 => "imagen-3",
        }
    }

    /// Model identifier sent to the API
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Gemini3Pro => "gemini-3-pro-image-preview",
            Self::Gemini25Flash => "gemini-2.5-flash-preview-05-20",
            Self::Imagen3 => "imagen-3.0-generate-002",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for GeminiModel {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.short_name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|m| m.short_name()).collect();
                StorefrontError::Config(format!(
                    "Unknown model '{}'. Available: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}
