use std::sync::mpsc;

use memeforge_core::generation::{GenerationStage, ProgressReporter};
use tracing::debug;

use crate::messages::WorkerResult;

/// Progress reporter that forwards percent updates over an mpsc channel to
/// the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin_stage(&self, stage: GenerationStage) {
        debug!(%stage, "Generation stage started");
    }

    fn progress(&self, percent: f32) {
        let _ = self.tx.send(WorkerResult::Progress { percent });
        self.ctx.request_repaint();
    }
}
