//! Input icon references and their fallback chain
//!
//! An image-backed move names a vector icon file (`df1.svg`). Renderers try a
//! raster copy first, then the vector original, then give up and draw the
//! move name as text. This module only computes those candidates.

use serde::{Deserialize, Serialize};

/// Extension every icon reference must carry
pub const VECTOR_EXTENSION: &str = ".svg";

/// Extension of the primary raster form
pub const RASTER_EXTENSION: &str = ".png";

/// Reference to an input icon file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef(String);

impl IconRef {
    /// Wrap an icon file name without validation
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self(file_name.into())
    }

    /// Accept only references ending in the vector extension
    #[must_use]
    pub fn parse(file_name: &str) -> Option<Self> {
        let trimmed = file_name.trim();
        (trimmed.len() > VECTOR_EXTENSION.len() && trimmed.ends_with(VECTOR_EXTENSION))
            .then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.0
    }

    /// File name with the vector extension stripped
    #[must_use]
    pub fn stem(&self) -> &str {
        self.0.strip_suffix(VECTOR_EXTENSION).unwrap_or(&self.0)
    }

    /// Resolve both candidate asset paths
    #[must_use]
    pub fn paths(&self, bases: &IconBases) -> IconPaths {
        IconPaths {
            primary: format!("{}/{}{}", bases.png_base, self.stem(), RASTER_EXTENSION),
            fallback: format!("{}/{}", bases.svg_base, self.0),
        }
    }
}

/// Asset directories icons are resolved against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconBases {
    /// Directory holding raster icons
    #[serde(default = "default_png_base")]
    pub png_base: String,

    /// Directory holding the vector originals
    #[serde(default = "default_svg_base")]
    pub svg_base: String,
}

fn default_png_base() -> String {
    "./assets/inputs_png".to_string()
}

fn default_svg_base() -> String {
    "./assets/inputs_svg".to_string()
}

impl Default for IconBases {
    fn default() -> Self {
        Self {
            png_base: default_png_base(),
            svg_base: default_svg_base(),
        }
    }
}

/// Ordered candidate paths for one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    /// Tried first
    pub primary: String,
    /// Tried when the primary fails
    pub fallback: String,
}

impl IconPaths {
    /// Candidates in the order a renderer must attempt them
    #[must_use]
    pub fn candidates(&self) -> [&str; 2] {
        [&self.primary, &self.fallback]
    }
}

/// One token of a rendered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteToken {
    /// Icon with its fallback chain; `label` is drawn when both paths fail
    Icon { paths: IconPaths, label: String },
    /// Plain text token
    Text(String),
}

impl RouteToken {
    /// Text to show when no image can be drawn at all
    #[must_use]
    pub fn text_label(&self) -> &str {
        match self {
            Self::Icon { label, .. } => label,
            Self::Text(text) => text,
        }
    }
}
