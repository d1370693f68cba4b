use tracing::{info, warn};

use crate::client::MemeClient;
use crate::consts::DESCRIPTION_PROGRESS_PERCENT;
use crate::error::{MemeError, Result};

/// Generation phase, used for progress reporting.
#[derive(Clone, Copy, Debug)]
pub enum GenerationStage {
    Describing,
    Rendering,
}

impl std::fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Describing => write!(f, "Writing meme descriptions"),
            Self::Rendering => write!(f, "Rendering images"),
        }
    }
}

/// Thread-safe progress reporting for a generation cycle.
///
/// Implementors can drive progress bars or logging. All methods have
/// default no-op implementations. Percent values run 0..=100.
pub trait ProgressReporter: Send + Sync {
    fn begin_stage(&self, _stage: GenerationStage) {}
    fn progress(&self, _percent: f32) {}
}

/// No-op reporter for callers that don't track progress.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// A successfully generated meme: image bytes paired with the description
/// that produced them.
#[derive(Debug, Clone)]
pub struct MemeImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub description: String,
}

/// Run one full generation cycle for `topic`.
///
/// Requests descriptions, then renders one image per description strictly
/// in description order. A failed image request only drops that item; the
/// returned list is the order-preserving subset of successes. Progress
/// reaches [`DESCRIPTION_PROGRESS_PERCENT`] once descriptions arrive and
/// advances evenly per image, ending at 100.
///
/// Errors: [`MemeError::EmptyTopic`] for blank input,
/// [`MemeError::DescriptionGeneration`] if the description call fails or
/// returns nothing. Image failures are never surfaced as errors.
pub fn generate_memes(
    client: &dyn MemeClient,
    topic: &str,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<MemeImage>> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(MemeError::EmptyTopic);
    }

    reporter.begin_stage(GenerationStage::Describing);
    reporter.progress(0.0);

    let descriptions = client
        .describe(topic)
        .map_err(|e| MemeError::DescriptionGeneration(e.to_string()))?;
    if descriptions.is_empty() {
        return Err(MemeError::DescriptionGeneration(
            "no descriptions returned".into(),
        ));
    }
    info!(count = descriptions.len(), "Descriptions received");

    reporter.begin_stage(GenerationStage::Rendering);
    reporter.progress(DESCRIPTION_PROGRESS_PERCENT);

    let step = (100.0 - DESCRIPTION_PROGRESS_PERCENT) / descriptions.len() as f32;
    let mut percent = DESCRIPTION_PROGRESS_PERCENT;
    let mut results: Vec<Option<MemeImage>> = Vec::with_capacity(descriptions.len());

    for (index, description) in descriptions.into_iter().enumerate() {
        match client.render(&description) {
            Ok(image) => results.push(Some(MemeImage {
                bytes: image.bytes,
                mime_type: image.mime_type,
                description,
            })),
            Err(e) => {
                warn!(index, error = %e, "Image generation failed, skipping item");
                results.push(None);
            }
        }
        percent = (percent + step).min(100.0);
        reporter.progress(percent);
    }
    reporter.progress(100.0);

    let memes: Vec<MemeImage> = results.into_iter().flatten().collect();
    info!(generated = memes.len(), "Generation cycle complete");
    Ok(memes)
}
