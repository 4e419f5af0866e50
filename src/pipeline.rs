use crate::{
    config::PackOptions,
    error::Result,
    file,
    manifest::Rect,
    packer::Packer,
};
use log::info;
use std::path::PathBuf;
use tracy_full::zone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub sprites: usize,
    pub png_path: PathBuf,
    pub json_path: PathBuf,
    pub used: Rect,
}

/// Loads every image in `options.input`, packs them and writes the atlas and
/// its manifest. Nothing is written unless loading and packing succeed.
pub fn run(options: &PackOptions) -> Result<RunSummary> {
    zone!("run");
    let sprites = file::load_sprites(&options.input)?;
    info!(
        "Loaded {} sprites from {}",
        sprites.len(),
        options.input.display()
    );

    let mut atlas = Packer::from_options(options).pack(&sprites)?;

    let png_path = options.png_path();
    let json_path = options.json_path();
    if let Some(name) = png_path.file_name().and_then(|name| name.to_str()) {
        atlas
            .spritesheet
            .meta
            .insert("image".to_owned(), name.into());
    }

    file::write_manifest(&json_path, &atlas.spritesheet, options.pretty)?;
    file::write_png(&png_path, &atlas.image)?;

    info!(
        "Packed {} sprites into {} ({}x{} canvas, {}x{} used)",
        sprites.len(),
        png_path.display(),
        options.width,
        options.height,
        atlas.used.w,
        atlas.used.h
    );

    Ok(RunSummary {
        sprites: sprites.len(),
        png_path,
        json_path,
        used: atlas.used,
    })
}
