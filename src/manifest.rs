//! Spritesheet manifest written next to the packed atlas.
//!
//! The JSON shape follows the common "hash" spritesheet layout: a `frames`
//! object keyed by sprite name and a free-form `meta` object.
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies the layout of the manifest for downstream loaders.
pub const PROTOCOL: &str = "github.com/jstewart7/packer";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
    #[serde(rename = "W")]
    pub w: u32,
    #[serde(rename = "H")]
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Rect { x, y, w, h }
    }

    /// One past the right-most column.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom-most row.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Smallest rectangle covering both. An empty rectangle covers nothing.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    #[serde(rename = "W")]
    pub w: u32,
    #[serde(rename = "H")]
    pub h: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pivot {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
}

/// Placement of one sprite. Only `frame` is computed; the remaining fields are
/// reserved and always hold their zero values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Original (non-extruded) sprite content within the atlas.
    pub frame: Rect,
    pub rotated: bool,
    pub trimmed: bool,
    pub sprite_source_size: Rect,
    pub source_size: Size,
    pub pivot: Pivot,
}

impl Frame {
    pub fn new(frame: Rect) -> Self {
        Frame {
            frame,
            rotated: false,
            trimmed: false,
            sprite_source_size: Rect::default(),
            source_size: Size::default(),
            pivot: Pivot::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Spritesheet {
    /// Frames in placement order.
    pub frames: IndexMap<String, Frame>,
    pub meta: IndexMap<String, Value>,
}

impl Spritesheet {
    pub fn frame(&self, name: &str) -> Option<&Rect> {
        self.frames.get(name).map(|frame| &frame.frame)
    }

    pub fn protocol(&self) -> Option<&str> {
        self.meta.get("protocol").and_then(Value::as_str)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Collects frame records during a packing run.
#[derive(Debug, Clone)]
pub struct SpritesheetBuilder {
    frames: IndexMap<String, Frame>,
    meta: IndexMap<String, Value>,
}

impl Default for SpritesheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpritesheetBuilder {
    pub fn new() -> Self {
        let mut meta = IndexMap::new();
        meta.insert("protocol".to_owned(), Value::from(PROTOCOL));
        meta.insert(
            "version".to_owned(),
            Value::from(env!("CARGO_PKG_VERSION")),
        );
        SpritesheetBuilder {
            frames: IndexMap::new(),
            meta,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    /// Records the frame for `name`. Names are unique within one sheet.
    pub fn insert(&mut self, name: &str, frame: Rect) -> Result<()> {
        if self.contains(name) {
            return Err(Error::DuplicateSprite(name.to_owned()));
        }
        self.frames.insert(name.to_owned(), Frame::new(frame));
        Ok(())
    }

    /// Sets a metadata entry, replacing any previous value for `key`.
    pub fn set_meta(&mut self, key: &str, value: impl Into<Value>) {
        self.meta.insert(key.to_owned(), value.into());
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn build(self) -> Spritesheet {
        Spritesheet {
            frames: self.frames,
            meta: self.meta,
        }
    }
}
