use crate::app::MemeForgeApp;
use crate::state::Phase;

pub fn show(ctx: &egui::Context, app: &mut MemeForgeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        match app.ui_state.phase {
            Phase::Loading => {
                let fraction = app.ui_state.progress_percent / 100.0;
                let detail = format!("{:.0}%", app.ui_state.progress_percent);
                ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
            }
            Phase::Failed(ref message) => {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            _ => {
                // Invisible placeholder — same height, no animation.
                ui.add(egui::ProgressBar::new(0.0).text(""));
            }
        }

        if let Some(ref notice) = app.ui_state.notice {
            ui.small(notice.clone());
        }

        ui.add_space(2.0);
    });
}
