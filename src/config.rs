use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input";
pub const DEFAULT_OUTPUT: &str = "packed";
pub const DEFAULT_PADDING: u32 = 1;
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 32;

/// What to do when an extruded sprite does not fit inside the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OverflowPolicy {
    /// Blit anyway and let the raster write drop whatever lands outside.
    #[default]
    Clip,
    /// Abort the run.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOptions {
    /// Directory holding one image file per sprite.
    pub input: PathBuf,
    /// Base name of the output; `.png` and `.json` are appended.
    pub output: PathBuf,
    /// Pixels of edge extrusion added on every side of every sprite.
    pub padding: u32,
    pub width: u32,
    pub height: u32,
    pub overflow: OverflowPolicy,
    /// Indent the JSON manifest.
    pub pretty: bool,
}

impl Default for PackOptions {
    fn default() -> Self {
        PackOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            padding: DEFAULT_PADDING,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            overflow: OverflowPolicy::default(),
            pretty: false,
        }
    }
}

impl PackOptions {
    pub fn png_path(&self) -> PathBuf {
        with_suffix(&self.output, "png")
    }

    pub fn json_path(&self) -> PathBuf {
        with_suffix(&self.output, "json")
    }
}

// Appends rather than replaces, so `sheet.v2` becomes `sheet.v2.png`.
fn with_suffix(base: &std::path::Path, extension: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}
