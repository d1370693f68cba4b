use memeforge_core::generation::MemeImage;

/// Decode a generated image's bytes into an egui ColorImage.
pub fn meme_to_color_image(meme: &MemeImage) -> anyhow::Result<egui::ColorImage> {
    let decoded = image::load_from_memory(&meme.bytes)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_raw(),
    ))
}
