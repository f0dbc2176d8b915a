//! Default text metrics
//!
//! The UI library sizes widgets with these callbacks, so they must report
//! exactly what the renderer will occupy: the default font's metrics when one
//! is configured, the host debug font's fixed cell size otherwise.

use std::sync::Arc;

use crate::fonts::{Font, FontHandle, FontMetrics, FontRegistry};
use crate::render::surface::{DEBUG_GLYPH_WIDTH, DEBUG_LINE_HEIGHT};

/// Width/height callbacks keyed by font handle
#[derive(Debug, Clone)]
pub struct TextMetrics {
    fonts: Arc<FontRegistry>,
    default_font: Option<Arc<Font>>,
}

impl TextMetrics {
    /// Metrics resolving handles through `fonts`
    pub fn new(fonts: Arc<FontRegistry>, default_font: Option<Arc<Font>>) -> Self {
        Self {
            fonts,
            default_font,
        }
    }

    /// Pixel width of `text` drawn with `font`
    pub fn text_width(&self, font: FontHandle, text: &str) -> i32 {
        if let Some(entry) = self.fonts.lookup(font) {
            return entry.font.text_width(text);
        }
        match &self.default_font {
            Some(default) => default.text_width(text),
            None => DEBUG_GLYPH_WIDTH * text.chars().count() as i32,
        }
    }

    /// Pixel height of one line drawn with `font`
    pub fn text_height(&self, font: FontHandle) -> i32 {
        if let Some(entry) = self.fonts.lookup(font) {
            return entry.font.text_height();
        }
        self.default_font
            .as_ref()
            .map_or(DEBUG_LINE_HEIGHT, |default| default.text_height())
    }
}
