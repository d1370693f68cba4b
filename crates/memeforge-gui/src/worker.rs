use std::sync::mpsc;

use memeforge_core::client::GeminiClient;
use memeforge_core::config::ClientConfig;
use memeforge_core::error::MemeError;
use memeforge_core::generation::generate_memes;
use tracing::{error, info};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::progress::ChannelProgressReporter;

/// The single user-facing failure message for an aborted cycle. Details
/// only go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate images. Please try again.";

/// Spawn the worker thread that owns all network I/O. Returns the command
/// sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("memeforge-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    // Constructed on first use so a missing credential surfaces as a
    // per-submission error rather than a startup crash.
    let mut client: Option<GeminiClient> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Generate { topic } => {
                handle_generate(&mut client, &topic, &tx, &ctx);
            }
        }
    }
}

fn handle_generate(
    client: &mut Option<GeminiClient>,
    topic: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let client = match ensure_client(client) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Client setup failed");
            let message = match e {
                MemeError::MissingApiKey(var) => setup_instructions(var),
                _ => GENERIC_FAILURE_MESSAGE.to_string(),
            };
            send(tx, ctx, WorkerResult::GenerationFailed { message });
            return;
        }
    };

    info!(topic, "Starting generation cycle");
    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone());

    match generate_memes(client, topic, &reporter) {
        Ok(memes) => send(tx, ctx, WorkerResult::GenerationComplete { memes }),
        Err(e) => {
            error!(error = %e, "Generation cycle failed");
            send(
                tx,
                ctx,
                WorkerResult::GenerationFailed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                },
            );
        }
    }
}

fn ensure_client(slot: &mut Option<GeminiClient>) -> Result<&GeminiClient, MemeError> {
    if slot.is_none() {
        let config = ClientConfig::from_env()?;
        *slot = Some(GeminiClient::new(config)?);
    }
    Ok(slot.as_ref().expect("client was just constructed"))
}

/// Instructions shown when the credential is absent.
pub fn setup_instructions(var: &str) -> String {
    format!(
        "Missing API key. Set the {var} environment variable to a Google AI \
         Studio key and restart MemeForge."
    )
}
