use crate::app::MemeForgeApp;

/// Soft cap on the input's visible height; longer text scrolls.
const MAX_VISIBLE_LINES: f32 = 6.0;

pub fn show(ctx: &egui::Context, app: &mut MemeForgeApp) {
    egui::TopBottomPanel::top("prompt").show(ctx, |ui| {
        ui.add_space(6.0);

        if let Some(ref message) = app.ui_state.setup_error {
            ui.colored_label(ui.visuals().warn_fg_color, message);
            ui.add_space(4.0);
        }

        let edit_id = egui::Id::new("topic-input");

        // Enter submits, Shift+Enter falls through to the TextEdit and
        // inserts a line break. Consumed before the widget runs so the
        // submit keypress never becomes a newline.
        let mut submit = false;
        if ctx.memory(|m| m.has_focus(edit_id)) {
            submit = ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));
        }

        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::vertical()
            .max_height(line_height * MAX_VISIBLE_LINES)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut app.ui_state.topic)
                        .id(edit_id)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY)
                        .hint_text("What should we meme about?"),
                );
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let enabled = app.ui_state.can_submit();
            if ui.add_enabled(enabled, egui::Button::new("Generate")).clicked() {
                submit = true;
            }
            if app.ui_state.is_loading() {
                ui.spinner();
                ui.label("Generating...");
            }
        });
        ui.add_space(6.0);

        if submit {
            app.submit_topic();
        }
    });
}
