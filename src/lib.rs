//! Packs a directory of sprites into a single texture atlas.
//!
//! Every sprite is extruded (its edge pixels repeated outward) and laid left
//! to right on one row of a fixed-size canvas. The result is a PNG plus a JSON
//! manifest giving each sprite's rectangle inside it.

pub mod config;
pub mod error;
pub mod extrude;
pub mod file;
#[cfg(feature = "cli")]
pub mod logging;
pub mod manifest;
pub mod packer;
pub mod pipeline;

pub use config::{OverflowPolicy, PackOptions};
pub use error::{Error, Result};
pub use extrude::extrude;
pub use manifest::{Frame, Rect, Spritesheet};
pub use packer::{pack, PackedAtlas, Packer, Sprite};
