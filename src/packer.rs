//! Naive strip packer.
//!
//! Sprites are laid left to right on a single row in the order given. There is
//! no wrapping and no attempt at using the canvas area efficiently.
use crate::{
    config::{OverflowPolicy, PackOptions},
    error::{Error, Result},
    extrude::{checked_buffer_len, extrude},
    manifest::{Rect, Spritesheet, SpritesheetBuilder},
};
use image::{imageops, DynamicImage, RgbaImage};
use log::{debug, warn};
use serde_json::json;
use tracy_full::zone;

/// A decoded source image and the name it is published under.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: String,
    pub image: RgbaImage,
}

impl Sprite {
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Sprite {
            name: name.into(),
            image: image.into_rgba8(),
        }
    }

    pub fn from_rgba(name: impl Into<String>, image: RgbaImage) -> Self {
        Sprite {
            name: name.into(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The packed canvas and the manifest describing it.
#[derive(Debug, Clone)]
pub struct PackedAtlas {
    pub image: RgbaImage,
    pub spritesheet: Spritesheet,
    /// Area actually covered by extruded sprites, before any clipping.
    pub used: Rect,
}

/// Where the next sprite goes, and everything placed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PlacementCursor {
    x: u32,
    y: u32,
    bounds: Rect,
}

impl PlacementCursor {
    fn place(&self, width: u32, height: u32) -> Rect {
        Rect::new(self.x, self.y, width, height)
    }

    /// Moves past `block`. The row never changes.
    fn advance(&mut self, block: &Rect) -> Result<()> {
        self.x = self
            .x
            .checked_add(block.w)
            .ok_or(Error::DimensionsOverflow)?;
        self.bounds = self.bounds.union(block);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packer {
    width: u32,
    height: u32,
    padding: u32,
    overflow: OverflowPolicy,
}

impl Packer {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Packer {
            width,
            height,
            padding,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn from_options(options: &PackOptions) -> Self {
        Packer::new(options.width, options.height, options.padding).with_overflow(options.overflow)
    }

    /// Extrudes every sprite and blits it onto a fresh canvas, recording where
    /// the original content of each one ended up.
    pub fn pack(&self, sprites: &[Sprite]) -> Result<PackedAtlas> {
        zone!("pack");
        checked_buffer_len(self.width, self.height)?;
        let mut canvas = RgbaImage::new(self.width, self.height);
        let mut cursor = PlacementCursor::default();
        let mut sheet = SpritesheetBuilder::new();
        sheet.set_meta("size", json!({ "w": self.width, "h": self.height }));
        sheet.set_meta("padding", self.padding);

        for sprite in sprites {
            zone!("place_sprite");
            if sprite.width() == 0 || sprite.height() == 0 {
                return Err(Error::EmptySprite(sprite.name.clone()));
            }
            if sheet.contains(&sprite.name) {
                return Err(Error::DuplicateSprite(sprite.name.clone()));
            }

            let extruded = extrude(&sprite.image, self.padding)?;
            let block = cursor.place(extruded.width(), extruded.height());
            if block.right() > self.width || block.bottom() > self.height {
                match self.overflow {
                    OverflowPolicy::Clip => warn!(
                        "Sprite {} at {},{} ({}x{}) does not fit on the {}x{} canvas and will be clipped",
                        sprite.name, block.x, block.y, block.w, block.h, self.width, self.height
                    ),
                    OverflowPolicy::Error => {
                        return Err(Error::CanvasOverflow {
                            name: sprite.name.clone(),
                            needed_width: block.right(),
                            needed_height: block.bottom(),
                            width: self.width,
                            height: self.height,
                        });
                    }
                }
            }

            imageops::replace(&mut canvas, &*extruded, block.x.into(), block.y.into());

            let frame = Rect::new(
                block.x + self.padding,
                block.y + self.padding,
                sprite.width(),
                sprite.height(),
            );
            sheet.insert(&sprite.name, frame)?;
            debug!(
                "Placed {} at {},{} ({}x{})",
                sprite.name, frame.x, frame.y, frame.w, frame.h
            );

            cursor.advance(&block)?;
        }

        Ok(PackedAtlas {
            image: canvas,
            spritesheet: sheet.build(),
            used: cursor.bounds,
        })
    }
}

/// Packs `sprites` onto a `width` x `height` canvas with `padding` pixels of
/// extrusion, clipping anything that overflows.
pub fn pack(sprites: &[Sprite], width: u32, height: u32, padding: u32) -> Result<PackedAtlas> {
    Packer::new(width, height, padding).pack(sprites)
}
