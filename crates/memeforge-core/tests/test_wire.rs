use memeforge_core::client::{description_prompt, parse_description_lines};
use memeforge_core::wire::{GenerateContentRequest, GenerateContentResponse};

#[test]
fn test_text_request_serializes_without_generation_config() {
    let request = GenerateContentRequest::text("hello");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    assert!(value.get("generationConfig").is_none());
}

#[test]
fn test_image_request_asks_for_image_modality() {
    let request = GenerateContentRequest::image("a cat");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value["generationConfig"]["responseModalities"],
        serde_json::json!(["TEXT", "IMAGE"])
    );
}

#[test]
fn test_response_text_part_extraction() {
    let json = r#"{
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": "line one\nline two" } ] } }
        ]
    }"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.first_text(), Some("line one\nline two"));
    assert!(response.first_inline_image().is_none());
}

#[test]
fn test_response_inline_image_extraction() {
    let json = r#"{
        "candidates": [
            { "content": { "parts": [
                { "text": "here is your image" },
                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } }
            ] } }
        ]
    }"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    let inline = response.first_inline_image().unwrap();
    assert_eq!(inline.mime_type, "image/png");
    assert_eq!(inline.data, "aGVsbG8=");
}

#[test]
fn test_empty_candidates_yield_no_parts() {
    let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
    assert!(response.first_text().is_none());
    assert!(response.first_inline_image().is_none());
}

#[test]
fn test_description_lines_capped_and_trimmed() {
    let text = "  one  \n\n two\nthree\nfour\nfive";
    let lines = parse_description_lines(text);
    assert_eq!(lines, ["one", "two", "three", "four"]);
}

#[test]
fn test_prompt_carries_topic_and_marker() {
    let prompt = description_prompt("tax season");
    assert!(prompt.contains("tax season"));
    assert!(prompt.contains("Square image"));
}
