//! The fixed icon set: where the source icon lives and which sizes are rendered from it.
//!
//! The layout is embedded as a JSON table and deserialized at startup. It is not
//! exposed on the command line.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

const ICON_SET_JSON: &str = r#"
{
  "dir": "../assets/icon",
  "source": "icon.png",
  "sizes": [16, 32, 64]
}
"#;

/// A source icon and the square sizes rendered from it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconSet {
    /// Directory holding both the source and the rendered icons
    pub dir: PathBuf,

    /// File name of the source image inside `dir`
    pub source: String,

    /// Edge lengths, in pixels, of the square icons to render
    pub sizes: Vec<u32>,
}

impl IconSet {
    /// The built-in icon set, relative to the working directory.
    pub fn builtin() -> Result<Self> {
        let set: IconSet =
            serde_json::from_str(ICON_SET_JSON).context("Failed to parse built-in icon set")?;
        set.validate()?;
        Ok(set)
    }

    /// Same source name and sizes, rooted at `dir` instead.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn source_path(&self) -> PathBuf {
        self.dir.join(&self.source)
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.dir.join(format!("icon{size}.png"))
    }

    /// Every `(size, path)` pair in the order the sizes are listed.
    pub fn outputs(&self) -> impl Iterator<Item = (u32, PathBuf)> + '_ {
        self.sizes.iter().map(|&size| (size, self.output_path(size)))
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.sizes.is_empty(), "Icon set has no sizes");
        if let Some(size) = self.sizes.iter().find(|&&size| size == 0) {
            anyhow::bail!("Icon size must be positive, got {size}");
        }
        Ok(())
    }
}
