pub mod enlarged;
pub mod gallery;
pub mod prompt;
pub mod status;
