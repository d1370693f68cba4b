use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemeError {
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("Empty topic")]
    EmptyTopic,

    #[error("Description generation failed: {0}")]
    DescriptionGeneration(String),

    #[error("Image generation failed: {0}")]
    ImageGeneration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MemeError>;
