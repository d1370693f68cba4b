use memeforge_core::text::display_description;

use crate::app::MemeForgeApp;

/// Fraction of the viewport the enlarged image may occupy.
const MAX_VIEWPORT_FRACTION: f32 = 0.8;
/// Caption lines reserved below the enlarged image.
const CAPTION_LINES: f32 = 3.0;

pub fn show(ctx: &egui::Context, app: &mut MemeForgeApp) {
    let Some(index) = app.ui_state.gallery.enlarged else {
        return;
    };
    let Some(entry) = app.ui_state.gallery.entries.get(index) else {
        // Selection outlived the display set (new cycle published).
        app.ui_state.gallery.close_enlarged();
        return;
    };

    let screen = ctx.screen_rect();
    let texture = entry.texture.clone();
    let caption = display_description(&entry.description);
    let image_size = egui::vec2(entry.size[0] as f32, entry.size[1] as f32);

    let mut close = false;

    egui::Area::new(egui::Id::new("enlarged-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Dimmed backdrop. Content widgets are added after it, so a
            // click inside the content area never reaches this response.
            let backdrop = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(192));

            let line_height = ui.text_style_height(&egui::TextStyle::Body);
            let caption_height = line_height * CAPTION_LINES;

            // Fit the image inside the viewport budget, preserving aspect.
            let budget = screen.size() * MAX_VIEWPORT_FRACTION
                - egui::vec2(0.0, caption_height);
            let scale = (budget.x / image_size.x)
                .min(budget.y / image_size.y)
                .min(1.0);
            let shown = image_size * scale;

            let content = egui::Rect::from_center_size(
                screen.center(),
                egui::vec2(shown.x, shown.y + caption_height),
            );
            // Swallow clicks landing anywhere on the image or caption.
            ui.allocate_rect(content, egui::Sense::click());

            let image_rect = egui::Rect::from_min_size(content.min, shown);
            ui.put(
                image_rect,
                egui::Image::new(&texture).fit_to_exact_size(shown),
            );

            // The caption region is exactly as wide as the rendered image,
            // recomputed every frame, so it follows viewport resizes.
            let caption_rect = egui::Rect::from_min_size(
                egui::pos2(image_rect.left(), image_rect.bottom() + 8.0),
                egui::vec2(shown.x, caption_height),
            );
            ui.put(
                caption_rect,
                egui::Label::new(
                    egui::RichText::new(caption).color(egui::Color32::from_gray(230)),
                )
                .wrap(),
            );

            let close_rect = egui::Rect::from_min_size(
                screen.right_top() + egui::vec2(-44.0, 12.0),
                egui::vec2(32.0, 32.0),
            );
            if ui.put(close_rect, egui::Button::new("\u{2715}")).clicked() {
                close = true;
            }

            if backdrop.clicked() {
                close = true;
            }
        });

    if close {
        app.ui_state.gallery.close_enlarged();
    }
}
