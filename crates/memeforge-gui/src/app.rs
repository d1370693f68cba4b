use std::sync::mpsc;
use std::sync::Arc;

use memeforge_core::config::ClientConfig;
use memeforge_core::error::MemeError;
use memeforge_core::generation::MemeImage;
use tracing::{info, warn};

use crate::convert::meme_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{GalleryEntry, Phase, UIState};
use crate::worker;

pub struct MemeForgeApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
}

impl MemeForgeApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut ui_state = UIState::default();
        // Surface a missing credential immediately instead of on first submit.
        if let Err(MemeError::MissingApiKey(var)) = ClientConfig::from_env() {
            ui_state.setup_error = Some(worker::setup_instructions(var));
        }

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Progress { percent } => {
                    self.ui_state.progress_percent = percent;
                }
                WorkerResult::GenerationComplete { memes } => {
                    self.publish_gallery(ctx, memes);
                }
                WorkerResult::GenerationFailed { message } => {
                    self.ui_state.fail(message);
                }
                WorkerResult::ImageSaved { path } => {
                    info!(path = %path.display(), "Image saved");
                    self.ui_state.notice = Some(format!("Saved {}", path.display()));
                }
                WorkerResult::SaveFailed { message } => {
                    self.ui_state.notice = Some(message);
                }
            }
        }
    }

    /// Upload textures for the completed cycle and enter the results state.
    fn publish_gallery(&mut self, ctx: &egui::Context, memes: Vec<MemeImage>) {
        let mut entries = Vec::with_capacity(memes.len());
        for (index, meme) in memes.into_iter().enumerate() {
            match meme_to_color_image(&meme) {
                Ok(image) => {
                    let size = image.size;
                    let texture = ctx.load_texture(
                        format!("meme-{index}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    entries.push(GalleryEntry {
                        texture,
                        size,
                        description: meme.description,
                        png: Arc::new(meme.bytes),
                    });
                }
                Err(e) => {
                    warn!(index, error = %e, "Undecodable image payload, dropping item");
                }
            }
        }
        info!(count = entries.len(), "Gallery published");
        self.ui_state.gallery.entries = entries;
        self.ui_state.gallery.enlarged = None;
        self.ui_state.progress_percent = 100.0;
        self.ui_state.phase = Phase::Results;
    }

    /// Submit the current topic. No-op on blank input, while a cycle is in
    /// flight, or without a credential.
    pub fn submit_topic(&mut self) {
        if !self.ui_state.can_submit() {
            return;
        }
        let topic = std::mem::take(&mut self.ui_state.topic);
        self.ui_state.begin_generation();
        let _ = self.cmd_tx.send(WorkerCommand::Generate { topic });
    }
}

impl eframe::App for MemeForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::prompt::show(ctx, self);
        panels::status::show(ctx, self);
        panels::gallery::show(ctx, self);
        panels::enlarged::show(ctx, self);
    }
}
