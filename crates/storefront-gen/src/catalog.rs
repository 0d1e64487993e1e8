//! Static catalog of store-listing assets
//!
//! Each entry pairs a generation prompt with the filename the Chrome Web
//! Store upload expects. Order here is the order `all` processes them in.

use crate::error::{Result, StorefrontError};
use crate::prompts::*;
use std::fmt;

/// Identifier of the primary icon; icon sizes are derived from it
pub const ICON_ID: &str = "icon";

/// Target value that selects every catalog entry
pub const ALL_TARGET: &str = "all";

/// One asset the tool knows how to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub filename: &'static str,
    /// Nominal width requested in the prompt
    pub width: u32,
    /// Nominal height requested in the prompt
    pub height: u32,
}

const CATALOG: &[AssetSpec] = &[
    AssetSpec {
        id: ICON_ID,
        title: "PasteHost Icon (128x128)",
        prompt: ICON_PROMPT,
        filename: "icon128.png",
        width: 128,
        height: 128,
    },
    AssetSpec {
        id: "promo_small",
        title: "Small Promo Tile (440x280)",
        prompt: PROMO_SMALL_PROMPT,
        filename: "promo_small_440x280.png",
        width: 440,
        height: 280,
    },
    AssetSpec {
        id: "promo_large",
        title: "Large Promo Tile (920x680)",
        prompt: PROMO_LARGE_PROMPT,
        filename: "promo_large_920x680.png",
        width: 920,
        height: 680,
    },
    AssetSpec {
        id: "screenshot_popup",
        title: "Screenshot - Popup UI (1280x800)",
        prompt: SCREENSHOT_POPUP_PROMPT,
        filename: "screenshot_popup_1280x800.png",
        width: 1280,
        height: 800,
    },
    AssetSpec {
        id: "screenshot_result",
        title: "Screenshot - Deploy Result (1280x800)",
        prompt: SCREENSHOT_RESULT_PROMPT,
        filename: "screenshot_result_1280x800.png",
        width: 1280,
        height: 800,
    },
    AssetSpec {
        id: "screenshot_options",
        title: "Screenshot - Options Page (1280x800)",
        prompt: SCREENSHOT_OPTIONS_PROMPT,
        filename: "screenshot_options_1280x800.png",
        width: 1280,
        height: 800,
    },
];

/// All catalog entries in processing order
pub fn all() -> &'static [AssetSpec] {
    CATALOG
}

/// Look up a single entry by id
pub fn find(id: &str) -> Option<&'static AssetSpec> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Catalog ids, in order
pub fn ids() -> Vec<&'static str> {
    CATALOG.iter().map(|a| a.id).collect()
}

/// Which part of the catalog a run covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    All,
    One(&'static AssetSpec),
}

impl Target {
    /// Parse a target name: a catalog id or `all`
    pub fn parse(name: &str) -> Result<Self> {
        if name == ALL_TARGET {
            return Ok(Target::All);
        }
        find(name).map(Target::One).ok_or_else(|| StorefrontError::UnknownAsset {
            id: name.to_string(),
            available: format!("{}, {}", ids().join(", "), ALL_TARGET),
        })
    }

    /// The entries this target selects
    pub fn resolve(&self) -> Vec<&'static AssetSpec> {
        match self {
            Target::All => CATALOG.iter().collect(),
            Target::One(spec) => vec![*spec],
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => f.write_str(ALL_TARGET),
            Target::One(spec) => f.write_str(spec.id),
        }
    }
}
