/// Number of meme descriptions requested (and images attempted) per topic.
pub const MEME_COUNT: usize = 4;

/// Marker phrase the description prompt asks the model to lead with.
/// Stripped (case-insensitively, in all punctuation/spacing variants)
/// before a description is shown to the user.
pub const MARKER_PHRASE: &str = "Square image";

/// Progress percentage reached once descriptions have arrived. The
/// remaining `100 - this` is split evenly across the image requests.
pub const DESCRIPTION_PROGRESS_PERCENT: f32 = 30.0;

/// Fixed tag prefixed to every download filename.
pub const FILENAME_TAG: &str = "meme";

/// Maximum length (in chars) of the cleaned filename body, before the
/// tag prefix and extension are attached.
pub const FILENAME_BODY_MAX_CHARS: usize = 30;

/// Extension for saved images. Gemini inline payloads are PNG.
pub const IMAGE_FILE_EXTENSION: &str = "png";

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable naming an optional TOML config file with
/// endpoint/model overrides.
pub const CONFIG_PATH_ENV: &str = "MEMEFORGE_CONFIG";

/// Default Gemini REST endpoint base.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for description (text) generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Default model for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
