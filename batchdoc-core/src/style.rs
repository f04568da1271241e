//! Style resolution for text runs
//!
//!     A style registry maps names ("prompt", "response", ...) to style descriptors. Every run
//!     the converter emits gets an effective style, computed by taking a base descriptor and
//!     merging overrides on top of it, field by field. Override fields win when present; absent
//!     fields keep the base value.
//!
//!     Bold and italic are plain booleans on a descriptor (false unless set), and [`apply`]
//!     always writes both of them to the run. A run therefore never picks up the emphasis of a
//!     neighbouring run or of the paragraph style.
//!
//!     Configuration keys follow the batch export settings format: `font_name`, `font_size`
//!     (points), `font_color_rgb` (`[r, g, b]`), `is_bold`, `is_italic`.

use crate::document::{DocumentModel, RunRef};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Font color as an RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Upper-case hex form without the leading `#` (e.g. `1F3864`)
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Effective formatting of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDescriptor {
    pub font_name: Option<String>,
    /// Size in points
    pub font_size: Option<f64>,
    #[serde(rename = "font_color_rgb")]
    pub font_color: Option<Rgb>,
    #[serde(rename = "is_bold")]
    pub bold: bool,
    #[serde(rename = "is_italic")]
    pub italic: bool,
}

/// Partial style used to derive a new descriptor from an existing one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub font_name: Option<String>,
    pub font_size: Option<f64>,
    #[serde(rename = "font_color_rgb")]
    pub font_color: Option<Rgb>,
    #[serde(rename = "is_bold")]
    pub bold: Option<bool>,
    #[serde(rename = "is_italic")]
    pub italic: Option<bool>,
}

impl StyleOverrides {
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    pub fn font(name: impl Into<String>) -> Self {
        Self {
            font_name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl StyleDescriptor {
    /// Shallow-merge `overrides` onto this descriptor, producing a new one.
    pub fn merge(&self, overrides: &StyleOverrides) -> StyleDescriptor {
        StyleDescriptor {
            font_name: overrides
                .font_name
                .clone()
                .or_else(|| self.font_name.clone()),
            font_size: overrides.font_size.or(self.font_size),
            font_color: overrides.font_color.or(self.font_color),
            bold: overrides.bold.unwrap_or(self.bold),
            italic: overrides.italic.unwrap_or(self.italic),
        }
    }
}

/// Named base styles supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRegistry {
    styles: BTreeMap<String, StyleDescriptor>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a named style
    pub fn insert(&mut self, name: impl Into<String>, style: StyleDescriptor) {
        self.styles.insert(name.into(), style);
    }

    /// Builder form of [`StyleRegistry::insert`]
    pub fn with_style(mut self, name: impl Into<String>, style: StyleDescriptor) -> Self {
        self.insert(name, style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(name)
    }

    /// Style names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Resolve the effective style for `name` with `overrides` on top.
    ///
    /// Unknown names resolve to the default descriptor.
    pub fn resolve(&self, name: &str, overrides: &StyleOverrides) -> StyleDescriptor {
        match self.styles.get(name) {
            Some(base) => base.merge(overrides),
            None => StyleDescriptor::default().merge(overrides),
        }
    }
}

impl FromIterator<(String, StyleDescriptor)> for StyleRegistry {
    fn from_iter<T: IntoIterator<Item = (String, StyleDescriptor)>>(iter: T) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

/// Write `style` onto `run`.
///
/// Font, size and color are only set when present (empty font names and non-positive sizes
/// count as absent). Bold and italic are always set.
pub fn apply(doc: &mut dyn DocumentModel, run: RunRef, style: &StyleDescriptor) -> Result<()> {
    if let Some(font) = style.font_name.as_deref().filter(|name| !name.is_empty()) {
        doc.set_run_font(run, font)?;
    }
    if let Some(size) = style.font_size.filter(|size| *size > 0.0) {
        doc.set_run_size(run, size)?;
    }
    if let Some(color) = style.font_color {
        doc.set_run_color(run, color)?;
    }
    doc.set_run_bold(run, style.bold)?;
    doc.set_run_italic(run, style.italic)
}

/// Replace the font of an already styled run, whatever the style said.
pub fn force_font(doc: &mut dyn DocumentModel, run: RunRef, name: &str) -> Result<()> {
    doc.set_run_font(run, name)
}
