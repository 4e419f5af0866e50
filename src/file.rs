use crate::{
    error::{Error, Result},
    manifest::Spritesheet,
    packer::Sprite,
};
use image::{ImageFormat, ImageReader, RgbaImage};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracy_full::zone;

/// Lists the files directly inside `dir`, sorted by file name. Directories,
/// and symlinks resolving to one, are skipped.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    zone!("list_files");
    let read_dir_error = |source| Error::ReadDir {
        path: dir.to_owned(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        if path.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Decodes one image file into a sprite named after the file.
pub fn load_sprite(path: &Path) -> Result<Sprite> {
    zone!("load_sprite");
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => return Err(Error::InvalidFilename(path.to_owned())),
    };

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;
    let image = reader.decode().map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;

    debug!("Loaded {name} ({}x{})", image.width(), image.height());
    Ok(Sprite::new(name, image))
}

/// Loads every file in `dir` as a sprite, in file name order. The first
/// failure aborts the whole load.
pub fn load_sprites(dir: &Path) -> Result<Vec<Sprite>> {
    zone!("load_sprites");
    let files = list_files(dir)?;

    #[cfg(feature = "parallel")]
    let sprites = files.par_iter().map(|path| load_sprite(path)).collect();
    #[cfg(not(feature = "parallel"))]
    let sprites = files.iter().map(|path| load_sprite(path)).collect();

    sprites
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn write_manifest(path: &Path, spritesheet: &Spritesheet, pretty: bool) -> Result<()> {
    zone!("write_manifest");
    create_parent(path)?;
    let json = spritesheet.to_json(pretty)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(())
}

pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    zone!("write_png");
    create_parent(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_owned(),
            source,
        })
}
