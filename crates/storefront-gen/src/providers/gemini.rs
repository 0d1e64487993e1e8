//! Gemini `generateContent` image provider
//!
//! One blocking POST per image. The image comes back base64-encoded in the
//! `inlineData` of the first candidate's content parts. Requests are never
//! retried; a failed asset is reported and the batch moves on.

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::provider::{ImageGenerator, ImageRequest};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Upper bound on a response body; a 1280x800 PNG is a few MB once base64'd
const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;

/// Gemini provider for store-listing images
pub struct GeminiProvider {
    agent: ureq::Agent,
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a provider from resolved config. Fails if no API key is set.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            agent: build_agent(config.timeout),
            api_key,
            api_url: config.api_url.clone(),
            timeout: config.timeout,
        })
    }

    fn transport_error(&self, e: ureq::Error) -> StorefrontError {
        match e {
            ureq::Error::Timeout(_) => StorefrontError::Timeout(self.timeout),
            other => StorefrontError::Http(other.to_string()),
        }
    }
}

fn build_agent(timeout: Duration) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build();
    config.into()
}

/// `{api_url}/v1beta/models/{model_id}:generateContent`
pub fn endpoint_url(api_url: &str, model_id: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        api_url.trim_end_matches('/'),
        model_id
    )
}

impl ImageGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, request: &ImageRequest<'_>) -> Result<Vec<u8>> {
        let start = Instant::now();
        let url = endpoint_url(&self.api_url, request.model.model_id());
        let payload = GenerateContentRequest::new(request.prompt);

        debug!(title = request.title, url = %url, "sending generateContent request");

        let mut response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .send_json(&payload)
            .map_err(|e| {
                let err = self.transport_error(e);
                error!(title = request.title, error = %err, "Gemini request failed");
                err
            })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_RESPONSE_BYTES)
            .read_to_string()
            .map_err(|e| {
                let err = self.transport_error(e);
                error!(title = request.title, error = %err, "failed to read Gemini response");
                err
            })?;

        let bytes = parse_generate_response(status, &body)?;
        debug!(
            title = request.title,
            bytes = bytes.len(),
            elapsed_secs = start.elapsed().as_secs_f64(),
            "image received"
        );
        Ok(bytes)
    }
}

/// Turn a raw `generateContent` response into decoded image bytes.
///
/// Only 200 is success. Every failure is logged here with the status or the
/// full response body, so callers only need the returned error for their
/// summary.
pub fn parse_generate_response(status: u16, body: &str) -> Result<Vec<u8>> {
    if status != 200 {
        error!(status, response = body, "Gemini API request failed");
        return Err(StorefrontError::Api {
            status,
            body: body.to_string(),
        });
    }

    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, response = body, "failed to parse Gemini response");
        StorefrontError::UnexpectedResponse(format!("invalid response JSON: {}", e))
    })?;

    extract_image(response).map_err(|e| {
        error!(error = %e, response = %pretty_json(body), "no image in Gemini response");
        e
    })
}

fn extract_image(response: GenerateContentResponse) -> Result<Vec<u8>> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(StorefrontError::ContentBlocked(format!(
            "prompt blocked: {}",
            reason
        )));
    }

    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        StorefrontError::UnexpectedResponse("no candidates; image was not generated".to_string())
    })?;

    if let Some(ref reason) = candidate.finish_reason {
        debug!(finish_reason = %reason, "candidate finished");
    }

    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    if parts.is_empty() {
        return Err(StorefrontError::UnexpectedResponse(
            "candidate has no content parts".to_string(),
        ));
    }

    for text in parts.iter().filter_map(|p| p.text.as_deref()) {
        debug!(text, "model text part");
    }

    let inline = parts
        .into_iter()
        .find_map(|p| p.inline_data)
        .ok_or_else(|| {
            StorefrontError::UnexpectedResponse("no inlineData part in response".to_string())
        })?;

    let data = inline
        .data
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| {
            StorefrontError::UnexpectedResponse("inlineData carries no data".to_string())
        })?;

    if let Some(ref mime) = inline.mime_type {
        debug!(mime_type = %mime, "inline image");
    }

    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| StorefrontError::Decode(e.to_string()))
}

fn pretty_json(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| body.to_string())
}

// Request/Response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    response_modalities: [&'static str; 2],
    response_mime_type: &'static str,
}

impl<'a> GenerateContentRequest<'a> {
    pub(crate) fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                response_modalities: ["image", "text"],
                response_mime_type: "text/plain",
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    data: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{run_batch, BatchOptions};
    use crate::catalog::{self, Target};
    use crate::model::GeminiModel;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    /// Read one HTTP/1.1 request: headers plus a content-length or chunked body
    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
            let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&data[..end]).to_ascii_lowercase();
            if head.contains("transfer-encoding: chunked") {
                if data.ends_with(b"0\r\n\r\n") {
                    break;
                }
                continue;
            }
            let expected = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() - end - 4 >= expected {
                break;
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    /// Accept one connection, answer it, and hand back the raw request
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });
        (url, handle)
    }

    /// A local address with nothing listening on it
    fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn provider_for(url: &str, timeout: Duration) -> GeminiProvider {
        let config = StorefrontConfig {
            api_key: Some("test-key".to_string()),
            api_url: url.to_string(),
            timeout,
            ..StorefrontConfig::default()
        };
        GeminiProvider::from_config(&config).unwrap()
    }

    fn icon_request() -> ImageRequest<'static> {
        ImageRequest::for_asset(catalog::find(catalog::ICON_ID).unwrap(), GeminiModel::Gemini3Pro)
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::new("a rocket icon")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "a rocket icon" }] }],
                "generationConfig": {
                    "responseModalities": ["image", "text"],
                    "responseMimeType": "text/plain"
                }
            })
        );
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url(
                "https://generativelanguage.googleapis.com",
                "gemini-3-pro-image-preview"
            ),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-image-preview:generateContent"
        );
        assert_eq!(
            endpoint_url("http://localhost:9000/", "imagen-3.0-generate-002"),
            "http://localhost:9000/v1beta/models/imagen-3.0-generate-002:generateContent"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = StorefrontConfig::default();
        assert!(matches!(
            GeminiProvider::from_config(&config),
            Err(StorefrontError::MissingCredential(_))
        ));

        let config = StorefrontConfig {
            api_key: Some("test-key".to_string()),
            ..StorefrontConfig::default()
        };
        assert!(GeminiProvider::from_config(&config).is_ok());
    }

    #[test]
    fn test_parse_inline_image() {
        // "hello" in base64, after a leading text part
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your icon." },
                        { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(parse_generate_response(200, json).unwrap(), b"hello");
    }

    #[test]
    fn test_first_inline_part_wins() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [
                    { "inlineData": { "data": "Zmlyc3Q=" } },
                    { "inlineData": { "data": "c2Vjb25k" } }
                ] }
            }]
        }"#;
        assert_eq!(parse_generate_response(200, json).unwrap(), b"first");
    }

    #[test]
    fn test_non_success_status() {
        let err = parse_generate_response(500, r#"{"error":{"code":500}}"#).unwrap_err();
        match err {
            StorefrontError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("\"code\":500"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_inline_data_in_any_part() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [ { "text": "I can't draw that." }, {} ] }
            }]
        }"#;
        let err = parse_generate_response(200, json).unwrap_err();
        assert!(matches!(err, StorefrontError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_missing_shapes_are_failures() {
        for json in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png"}}]}}]}"#,
        ] {
            let err = parse_generate_response(200, json).unwrap_err();
            assert!(
                matches!(err, StorefrontError::UnexpectedResponse(_)),
                "{} gave {:?}",
                json,
                err
            );
        }
    }

    #[test]
    fn test_invalid_json_and_base64() {
        assert!(matches!(
            parse_generate_response(200, "<html>bad gateway</html>"),
            Err(StorefrontError::UnexpectedResponse(_))
        ));

        let json = r#"{
            "candidates": [{"content": {"parts": [{"inlineData": {"data": "@@not base64@@"}}]}}]
        }"#;
        assert!(matches!(
            parse_generate_response(200, json),
            Err(StorefrontError::Decode(_))
        ));
    }

    #[test]
    fn test_prompt_blocked() {
        let json = r#"{"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = parse_generate_response(200, json).unwrap_err();
        assert!(matches!(err, StorefrontError::ContentBlocked(_)));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_generate_posts_to_model_endpoint() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "aGVsbG8="}}]}}]}"#,
        );
        let provider = provider_for(&url, Duration::from_secs(10));

        let bytes = provider.generate(&icon_request()).unwrap();
        assert_eq!(bytes, b"hello");

        let request = server.join().unwrap();
        assert_eq!(
            request.lines().next(),
            Some(concat!(
                "POST /v1beta/models/gemini-3-pro-image-preview:generateContent",
                " HTTP/1.1"
            ))
        );
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("x-goog-api-key: test-key"));
        assert!(lower.contains("content-type: application/json"));
        assert!(request.contains("\"responseModalities\""));
    }

    #[test]
    fn test_generate_error_status_reaches_api_error() {
        let (url, server) = serve_once("500 Internal Server Error", r#"{"error":{"code":500}}"#);
        let provider = provider_for(&url, Duration::from_secs(10));

        let err = provider.generate(&icon_request()).unwrap_err();
        server.join().unwrap();

        match &err {
            StorefrontError::Api { status, body } => {
                assert_eq!(*status, 500);
                assert!(body.contains("\"code\":500"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
        assert!(err.is_remote());
    }

    #[test]
    fn test_non_200_success_status_is_a_failure() {
        let (url, server) = serve_once("204 No Content", "");
        let provider = provider_for(&url, Duration::from_secs(10));

        let err = provider.generate(&icon_request()).unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, StorefrontError::Api { status: 204, .. }));
    }

    #[test]
    fn test_connection_refused_is_remote() {
        let provider = provider_for(&refused_url(), Duration::from_secs(10));

        let err = provider.generate(&icon_request()).unwrap_err();
        assert!(matches!(err, StorefrontError::Http(_)), "got {:?}", err);
        assert!(err.is_remote());
    }

    #[test]
    fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(2));
            drop(stream);
        });
        let provider = provider_for(&url, Duration::from_millis(300));

        let err = provider.generate(&icon_request()).unwrap_err();
        assert!(matches!(err, StorefrontError::Timeout(_)), "got {:?}", err);
        assert!(err.is_remote());

        server.join().unwrap();
    }

    #[test]
    fn test_unreachable_api_fails_every_asset_without_aborting() {
        let provider = provider_for(&refused_url(), Duration::from_secs(10));
        let out = std::env::temp_dir()
            .join(format!("storefront_gemini_test_{}", uuid::Uuid::new_v4()));

        let options = BatchOptions::new(GeminiModel::default(), &out);
        let report = run_batch(&provider, Target::All, &options).unwrap();

        assert_eq!(report.total(), catalog::all().len());
        assert_eq!(report.succeeded(), 0);
        assert!(!out.join(catalog::find(catalog::ICON_ID).unwrap().filename).exists());

        std::fs::remove_dir_all(&out).ok();
    }

    #[test]
    fn test_only_200_is_success() {
        let json = r#"{
            "candidates": [{"content": {"parts": [{"inlineData": {"data": "aGVsbG8="}}]}}]
        }"#;
        assert!(parse_generate_response(200, json).is_ok());
        for status in [201, 202, 204, 301, 404, 429, 503] {
            assert!(matches!(
                parse_generate_response(status, json),
                Err(StorefrontError::Api { .. })
            ));
        }
    }
}
