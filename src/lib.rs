//! Scan icon generator
//!
//! Procedurally draws the "scan code" tab bar glyph (four corner brackets and
//! a centered crosshair) into transparent RGBA canvases and writes them out as
//! PNG files.
//!
//! # Features
//!
//! - **png** (default): PNG encoding through the `image` crate. Without it the
//!   renderer still works, but writing files reports
//!   [`Error::MissingCapability`].
//!
//! # Example
//!
//! ```no_run
//! use scanicon::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     output_dir: "static/tabbar".into(),
//!     ..Default::default()
//! };
//!
//! for icon in scanicon::generate_icons(&config)? {
//!     println!("{} {}", icon.path.display(), icon.sha256);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub use generator::{encode_png, generate_icons, render_icon, GeneratedIcon};

pub mod rendering;
pub use rendering::{Canvas, Rgb};

/// One output file: its name inside the output directory and stroke color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconVariant {
    pub file_name: String,
    pub color: Rgb,
}

impl IconVariant {
    pub fn new(file_name: impl Into<String>, color: Rgb) -> Self {
        Self {
            file_name: file_name.into(),
            color,
        }
    }
}

/// The idle and active tab bar icons.
pub fn default_variants() -> Vec<IconVariant> {
    vec![
        IconVariant::new("scan.png", Rgb::SCAN_IDLE),
        IconVariant::new("scan-active.png", Rgb::SCAN_ACTIVE),
    ]
}

/// Configuration for an icon generation run
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change:
///
/// ```
/// let cfg: scanicon::IconConfig = serde_json::from_str(r#"{ "size": 48 }"#).unwrap();
/// assert_eq!(cfg.size, 48);
/// assert_eq!(cfg.line_width, 2);
/// assert_eq!(cfg.variants.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Canvas side length in pixels
    pub size: u32,
    /// Stroke width in pixels
    pub line_width: u32,
    /// Directory the icons are written to (created if missing)
    pub output_dir: PathBuf,
    /// Files to generate
    pub variants: Vec<IconVariant>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 81,
            line_width: 2,
            output_dir: PathBuf::from("."),
            variants: default_variants(),
        }
    }
}

impl IconConfig {
    /// Load a config from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Reject configurations that cannot produce any output.
    ///
    /// Small sizes are allowed; they only produce a cramped glyph.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ConfigError("size must be at least 1 pixel".into()));
        }
        if self.line_width == 0 {
            return Err(Error::ConfigError(
                "line_width must be at least 1 pixel".into(),
            ));
        }
        if self.variants.is_empty() {
            return Err(Error::ConfigError("no icon variants configured".into()));
        }

        let mut seen = HashSet::new();
        for v in &self.variants {
            let plain = Path::new(&v.file_name).file_name().and_then(|n| n.to_str());
            if v.file_name.is_empty() || plain != Some(v.file_name.as_str()) {
                return Err(Error::ConfigError(format!(
                    "icon file name {:?} must be a plain file name",
                    v.file_name
                )));
            }
            if !seen.insert(v.file_name.as_str()) {
                return Err(Error::ConfigError(format!(
                    "icon file name {:?} is listed twice",
                    v.file_name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.size, 81);
        assert_eq!(config.line_width, 2);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(
            config.variants,
            vec![
                IconVariant::new("scan.png", Rgb(122, 174, 131)),
                IconVariant::new("scan-active.png", Rgb(14, 165, 233)),
            ]
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let cfg = IconConfig { size: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));
        let cfg = IconConfig { line_width: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_validate_file_names() {
        let dup = IconConfig {
            variants: vec![
                IconVariant::new("a.png", Rgb::SCAN_IDLE),
                IconVariant::new("a.png", Rgb::SCAN_ACTIVE),
            ],
            ..Default::default()
        };
        assert!(dup.validate().is_err());

        let nested = IconConfig {
            variants: vec![IconVariant::new("../a.png", Rgb::SCAN_IDLE)],
            ..Default::default()
        };
        assert!(nested.validate().is_err());

        let empty = IconConfig { variants: Vec::new(), ..Default::default() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let cfg: IconConfig = serde_json::from_str(
            r##"{
                "line_width": 3,
                "output_dir": "out",
                "variants": [{ "file_name": "x.png", "color": "#102030" }]
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.size, 81);
        assert_eq!(cfg.line_width, 3);
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.variants, vec![IconVariant::new("x.png", Rgb(16, 32, 48))]);
    }
}
