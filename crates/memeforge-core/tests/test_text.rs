use memeforge_core::text::{display_description, download_filename};

#[test]
fn test_marker_variants_all_strip() {
    let variants = [
        "Square image. X",
        "Square image X",
        "square image, X",
        "SQUARE IMAGE: X",
        "SquareImage X",
        "Square  image   X",
    ];
    for raw in variants {
        assert_eq!(display_description(raw), "X", "failed for {raw:?}");
    }
}

#[test]
fn test_display_is_idempotent() {
    let once = display_description("Square image. A cat wearing a tie");
    assert_eq!(once, "A cat wearing a tie");
    assert_eq!(display_description(&once), once);
}

#[test]
fn test_no_marker_just_trims() {
    assert_eq!(display_description("  plain text  "), "plain text");
}

#[test]
fn test_partial_marker_is_untouched() {
    // "Square" alone is not the marker phrase.
    assert_eq!(
        display_description("Square dance champions"),
        "Square dance champions"
    );
}

#[test]
fn test_leading_whitespace_before_marker() {
    assert_eq!(display_description("  Square image. X"), "X");
}

#[test]
fn test_non_ascii_start_does_not_panic() {
    assert_eq!(display_description("éclair on a skateboard"), "éclair on a skateboard");
}

#[test]
fn test_filename_truncates_cleaned_body_to_30() {
    assert_eq!(
        download_filename(0, Some("A judge hammering a gavel with 'Motion Denied' text")),
        "meme-a-judge-hammering-a-gavel-with.png"
    );
}

#[test]
fn test_filename_fallback_without_description() {
    assert_eq!(download_filename(0, None), "meme-1.png");
    assert_eq!(download_filename(3, None), "meme-4.png");
}

#[test]
fn test_filename_fallback_when_cleaning_empties_body() {
    assert_eq!(download_filename(1, Some("!!! ???")), "meme-2.png");
}

#[test]
fn test_filename_collapses_whitespace_runs() {
    assert_eq!(
        download_filename(0, Some("Cat   on\tthe moon")),
        "meme-cat-on-the-moon.png"
    );
}
