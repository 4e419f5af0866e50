use std::{io, path::PathBuf, result};

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read input directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("Error opening file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Error decoding file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Error encoding file {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Invalid or empty filename specified: {}", .0.display())]
    InvalidFilename(PathBuf),
    #[error("Cannot extrude an image with zero area ({width}x{height}).")]
    EmptyImage { width: u32, height: u32 },
    #[error("Sprite {0} has zero area.")]
    EmptySprite(String),
    #[error("Duplicate sprite name {0}.")]
    DuplicateSprite(String),
    #[error(
        "Sprite {name} needs the canvas to be at least {needed_width}x{needed_height} but it is {width}x{height}."
    )]
    CanvasOverflow {
        name: String,
        needed_width: u32,
        needed_height: u32,
        width: u32,
        height: u32,
    },
    #[error("Image dimensions exceed the addressable pixel range.")]
    DimensionsOverflow,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<Error> for String {
    fn from(error: Error) -> String {
        error.to_string()
    }
}
