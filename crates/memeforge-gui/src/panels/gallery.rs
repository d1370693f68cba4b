use std::sync::mpsc;

use memeforge_core::text::{display_description, download_filename};
use tracing::error;

use crate::app::MemeForgeApp;
use crate::messages::WorkerResult;
use crate::state::Phase;

const COLUMNS: usize = 2;
const SAVE_BUTTON_SIZE: egui::Vec2 = egui::vec2(30.0, 26.0);

pub fn show(ctx: &egui::Context, app: &mut MemeForgeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        match app.ui_state.phase {
            Phase::Results if !app.ui_state.gallery.entries.is_empty() => {
                show_grid(ctx, ui, app);
            }
            Phase::Results => {
                // Every image request failed: empty set, no error banner.
                show_placeholder(ui, "No images were generated. Try a different topic.");
            }
            Phase::Loading => show_placeholder(ui, "Generating memes..."),
            _ => show_placeholder(ui, "Enter a topic above to generate memes"),
        }
    });
}

fn show_grid(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut MemeForgeApp) {
    let spacing = ui.spacing().item_spacing.x;
    let cell_width = (ui.available_width() - spacing * (COLUMNS as f32 - 1.0)) / COLUMNS as f32;

    let mut toggled: Option<usize> = None;
    let mut save: Option<usize> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let total = app.ui_state.gallery.entries.len();
        for row_start in (0..total).step_by(COLUMNS) {
            ui.horizontal(|ui| {
                for index in row_start..(row_start + COLUMNS).min(total) {
                    let entry = &app.ui_state.gallery.entries[index];
                    let aspect = entry.size[1] as f32 / entry.size[0] as f32;
                    let cell = egui::vec2(cell_width, cell_width * aspect);

                    let response = ui.add(
                        egui::Image::new(&entry.texture)
                            .fit_to_exact_size(cell)
                            .sense(egui::Sense::click()),
                    );
                    if response.clicked() {
                        toggled = Some(index);
                    }

                    // Save affordance appears on hover, pinned to the cell's
                    // top-right corner. The button sits on top of the image,
                    // so its click never reaches the enlarge handler.
                    if ui.rect_contains_pointer(response.rect) {
                        let button_rect = egui::Rect::from_min_size(
                            response.rect.right_top()
                                + egui::vec2(-SAVE_BUTTON_SIZE.x - 8.0, 8.0),
                            SAVE_BUTTON_SIZE,
                        );
                        let button = ui
                            .put(button_rect, egui::Button::new("\u{2B07}"))
                            .on_hover_text("Save image");
                        if button.clicked() {
                            save = Some(index);
                        }
                    }
                }
            });
        }
    });

    if let Some(index) = save {
        save_entry(ctx, app, index);
    } else if let Some(index) = toggled {
        app.ui_state.gallery.toggle_enlarged(index);
    }
}

/// Write the selected image via a native save dialog on its own thread,
/// pre-filled with the synthesized filename.
fn save_entry(ctx: &egui::Context, app: &MemeForgeApp, index: usize) {
    let Some(entry) = app.ui_state.gallery.entries.get(index) else {
        return;
    };
    let png = entry.png.clone();
    let filename = download_filename(index, Some(&display_description(&entry.description)));
    let result_tx: mpsc::Sender<WorkerResult> = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(&filename)
            .save_file()
        else {
            return;
        };
        let result = match std::fs::write(&path, png.as_slice()) {
            Ok(()) => WorkerResult::ImageSaved { path },
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to save image");
                WorkerResult::SaveFailed {
                    message: format!("Could not save image: {e}"),
                }
            }
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
