use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::blocking::Client as HttpClient;
use tracing::debug;

use crate::config::ClientConfig;
use crate::consts::{MARKER_PHRASE, MEME_COUNT};
use crate::error::{MemeError, Result};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// A decoded generated image.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Remote generation services the orchestrator depends on. Split behind a
/// trait so the orchestrator can be exercised without a network.
pub trait MemeClient {
    /// Request up to [`MEME_COUNT`] meme descriptions for a topic.
    fn describe(&self, topic: &str) -> Result<Vec<String>>;

    /// Render one image for a single description.
    fn render(&self, description: &str) -> Result<GeneratedImage>;
}

/// Gemini `generateContent` client. All calls are blocking; the GUI runs
/// them on its worker thread.
pub struct GeminiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self { http, config })
    }

    fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.config.api_base, model);
        debug!(model, "Calling generateContent");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MemeError::InvalidResponse(format!(
                "{model} returned {status}: {}",
                truncate(&body, 512)
            )));
        }
        Ok(response.json()?)
    }
}

impl MemeClient for GeminiClient {
    fn describe(&self, topic: &str) -> Result<Vec<String>> {
        let request = GenerateContentRequest::text(description_prompt(topic));
        let response = self.generate_content(&self.config.text_model, &request)?;
        let text = response.first_text().ok_or_else(|| {
            MemeError::InvalidResponse("description response contained no text part".into())
        })?;
        Ok(parse_description_lines(text))
    }

    fn render(&self, description: &str) -> Result<GeneratedImage> {
        let request = GenerateContentRequest::image(description);
        let response = self.generate_content(&self.config.image_model, &request)?;
        let inline = response.first_inline_image().ok_or_else(|| {
            MemeError::ImageGeneration("image response contained no inline image part".into())
        })?;
        let bytes = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| MemeError::InvalidResponse(format!("invalid base64 image data: {e}")))?;
        Ok(GeneratedImage {
            bytes,
            mime_type: inline.mime_type.clone(),
        })
    }
}

/// Instruction sent to the text model, followed by the user topic.
pub fn description_prompt(topic: &str) -> String {
    format!(
        "Generate exactly {MEME_COUNT} short, funny meme image descriptions \
         about the topic below. Write one description per line with no \
         numbering or bullets. Every description must begin with the words \
         \"{MARKER_PHRASE}.\" and describe a single self-contained visual \
         joke.\n\nTopic: {topic}"
    )
}

/// One description per line; blank lines dropped, at most [`MEME_COUNT`]
/// retained, in response order.
pub fn parse_description_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MEME_COUNT)
        .map(str::to_string)
        .collect()
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
