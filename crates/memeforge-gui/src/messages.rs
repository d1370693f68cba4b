use std::path::PathBuf;

use memeforge_core::generation::MemeImage;

/// Commands sent from the UI thread to the worker thread.
pub enum WorkerCommand {
    /// Run one full generation cycle for a topic.
    Generate { topic: String },
}

/// Results sent from the worker thread (and save threads) back to the UI.
pub enum WorkerResult {
    /// Progress update during a generation cycle, 0..=100.
    Progress { percent: f32 },

    /// Cycle finished: the order-preserving successful subset. May be empty
    /// if every image request failed.
    GenerationComplete { memes: Vec<MemeImage> },

    /// Cycle aborted; `message` is already user-facing.
    GenerationFailed { message: String },

    /// A gallery image was written to disk.
    ImageSaved { path: PathBuf },

    /// Saving a gallery image failed.
    SaveFailed { message: String },
}
