use std::sync::Mutex;

use memeforge_core::client::{GeneratedImage, MemeClient};
use memeforge_core::error::{MemeError, Result};
use memeforge_core::generation::{generate_memes, NoOpReporter, ProgressReporter};

/// Scripted client: fixed descriptions, per-index render outcomes.
struct StubClient {
    descriptions: Result<Vec<String>>,
    /// `false` at index i makes the i-th render call fail.
    render_ok: Vec<bool>,
    describe_calls: Mutex<usize>,
    render_calls: Mutex<usize>,
}

impl StubClient {
    fn new(descriptions: Result<Vec<String>>, render_ok: Vec<bool>) -> Self {
        Self {
            descriptions,
            render_ok,
            describe_calls: Mutex::new(0),
            render_calls: Mutex::new(0),
        }
    }

    fn succeeding(count: usize) -> Self {
        let descriptions = (0..count).map(|i| format!("Square image. Meme {i}")).collect();
        Self::new(Ok(descriptions), vec![true; count])
    }
}

impl MemeClient for StubClient {
    fn describe(&self, _topic: &str) -> Result<Vec<String>> {
        *self.describe_calls.lock().unwrap() += 1;
        match &self.descriptions {
            Ok(list) => Ok(list.clone()),
            Err(_) => Err(MemeError::InvalidResponse("stubbed transport failure".into())),
        }
    }

    fn render(&self, description: &str) -> Result<GeneratedImage> {
        let mut calls = self.render_calls.lock().unwrap();
        let index = *calls;
        *calls += 1;
        if self.render_ok.get(index).copied().unwrap_or(false) {
            Ok(GeneratedImage {
                bytes: description.as_bytes().to_vec(),
                mime_type: "image/png".into(),
            })
        } else {
            Err(MemeError::ImageGeneration(format!("stub failure at {index}")))
        }
    }
}

/// Records every reported percentage.
struct RecordingReporter {
    percents: Mutex<Vec<f32>>,
}

impl RecordingReporter {
    fn new() -> Self {
        Self { percents: Mutex::new(Vec::new()) }
    }
}

impl ProgressReporter for RecordingReporter {
    fn progress(&self, percent: f32) {
        self.percents.lock().unwrap().push(percent);
    }
}

#[test]
fn test_all_renders_succeed_yields_all_in_order() {
    let client = StubClient::succeeding(4);
    let memes = generate_memes(&client, "rust compile times", &NoOpReporter).unwrap();

    assert_eq!(memes.len(), 4);
    for (i, meme) in memes.iter().enumerate() {
        assert_eq!(meme.description, format!("Square image. Meme {i}"));
        assert_eq!(meme.bytes, meme.description.as_bytes());
    }
    assert_eq!(*client.render_calls.lock().unwrap(), 4);
}

#[test]
fn test_single_render_failure_drops_only_that_item() {
    let descriptions = Ok(vec!["a".into(), "b".into(), "c".into()]);
    let client = StubClient::new(descriptions, vec![true, false, true]);
    let memes = generate_memes(&client, "topic", &NoOpReporter).unwrap();

    let kept: Vec<&str> = memes.iter().map(|m| m.description.as_str()).collect();
    assert_eq!(kept, ["a", "c"]);
}

#[test]
fn test_all_renders_failing_yields_empty_set_not_error() {
    let descriptions = Ok(vec!["a".into(), "b".into()]);
    let client = StubClient::new(descriptions, vec![false, false]);
    let memes = generate_memes(&client, "topic", &NoOpReporter).unwrap();
    assert!(memes.is_empty());
}

#[test]
fn test_describe_failure_aborts_before_any_render() {
    let client = StubClient::new(Err(MemeError::EmptyTopic), vec![true; 4]);
    let result = generate_memes(&client, "topic", &NoOpReporter);

    assert!(matches!(result, Err(MemeError::DescriptionGeneration(_))));
    assert_eq!(*client.render_calls.lock().unwrap(), 0);
}

#[test]
fn test_empty_description_list_is_a_description_failure() {
    let client = StubClient::new(Ok(Vec::new()), Vec::new());
    let result = generate_memes(&client, "topic", &NoOpReporter);

    assert!(matches!(result, Err(MemeError::DescriptionGeneration(_))));
    assert_eq!(*client.render_calls.lock().unwrap(), 0);
}

#[test]
fn test_blank_topic_makes_no_calls() {
    let client = StubClient::succeeding(4);
    let result = generate_memes(&client, "   \n", &NoOpReporter);

    assert!(matches!(result, Err(MemeError::EmptyTopic)));
    assert_eq!(*client.describe_calls.lock().unwrap(), 0);
    assert_eq!(*client.render_calls.lock().unwrap(), 0);
}

#[test]
fn test_progress_checkpoint_then_even_steps_to_100() {
    let client = StubClient::succeeding(4);
    let reporter = RecordingReporter::new();
    generate_memes(&client, "topic", &reporter).unwrap();

    let percents = reporter.percents.lock().unwrap();
    let expected = [0.0, 30.0, 47.5, 65.0, 82.5, 100.0, 100.0];
    assert_eq!(percents.len(), expected.len());
    for (got, want) in percents.iter().zip(expected) {
        assert!((got - want).abs() < 1e-3, "expected {want}, got {got}");
    }
}
