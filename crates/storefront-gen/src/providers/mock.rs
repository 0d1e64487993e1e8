//! Offline provider
//!
//! Renders a solid-colour placeholder PNG for each request and feeds it
//! through the same response parsing as the Gemini provider, so a full run
//! can be exercised without network access or an API key.

use crate::error::Result;
use crate::provider::{ImageGenerator, ImageRequest};
use crate::providers::gemini::parse_generate_response;
use base64::Engine;

/// A 1x1 opaque PNG, used when the `icons` feature (and so the image
/// encoder) is compiled out
#[cfg(not(feature = "icons"))]
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64,
    0x60, 0xF8, 0x5F, 0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, 0xBA, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// A provider that generates placeholder images locally
#[derive(Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImageGenerator for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn generate(&self, request: &ImageRequest<'_>) -> Result<Vec<u8>> {
        let png = placeholder_png(request.title, request.width, request.height)?;
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": format!("Placeholder for {}", request.title) },
                        { "inlineData": {
                            "mimeType": "image/png",
                            "data": base64::engine::general_purpose::STANDARD.encode(&png)
                        } }
                    ]
                },
                "finishReason": "STOP"
            }]
        });
        parse_generate_response(200, &body.to_string())
    }
}

/// Colour derived from the title so each asset is visually distinct
#[cfg_attr(not(feature = "icons"), allow(dead_code))]
fn placeholder_rgb(title: &str) -> [u8; 3] {
    let hash_val = title
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    [
        ((hash_val >> 16) & 0xFF) as u8,
        ((hash_val >> 8) & 0xFF) as u8,
        (hash_val & 0xFF) as u8,
    ]
}

#[cfg(feature = "icons")]
fn placeholder_png(title: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    use crate::error::StorefrontError;

    let [r, g, b] = placeholder_rgb(title);
    let img =
        image::RgbaImage::from_pixel(width.max(1), height.max(1), image::Rgba([r, g, b, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| StorefrontError::Image(format!("Failed to encode placeholder PNG: {}", e)))?;
    Ok(buf.into_inner())
}

#[cfg(not(feature = "icons"))]
fn placeholder_png(_title: &str, _width: u32, _height: u32) -> Result<Vec<u8>> {
    Ok(PIXEL_PNG.to_vec())
}
