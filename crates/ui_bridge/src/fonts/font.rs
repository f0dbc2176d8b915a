//! Renderable font resources
//!
//! A [`Font`] wraps one of a closed set of glyph sources ([`FontKind`]) and
//! optional measurement overrides. The renderer and the text-metric callbacks
//! only ever talk to it through the [`FontMetrics`] capability.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use fontdue::FontSettings;
use image::{Rgba, RgbaImage};

use crate::foundation::math::{Color, ColorScale, Rect, Transform2D};
use crate::render::surface::{ClippedSurface, DrawOptions};

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to load font from file or data
    #[error("Failed to load font: {0}")]
    LoadError(String),

    /// Requested pixel size is not usable
    #[error("Invalid font size: {0}")]
    InvalidSize(f32),
}

/// Draw and measure capability shared by every font variant
pub trait FontMetrics: Send + Sync {
    /// Draw `text` with its baseline starting at (`x`, `y`)
    fn draw(&self, target: &mut ClippedSurface<'_>, text: &str, x: i32, y: i32, color: Color);

    /// Width in pixels `text` occupies when drawn
    fn text_width(&self, text: &str) -> i32;

    /// Height in pixels of one line
    fn text_height(&self) -> i32;
}

/// Process-unique font identity
///
/// Registration is keyed on this rather than on the font's contents, so two
/// faces loaded from the same bytes are still distinct resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u64);

static NEXT_FONT_ID: AtomicU64 = AtomicU64::new(1);

impl FontId {
    fn next() -> Self {
        Self(NEXT_FONT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Text width override
pub type TextWidthFn = Box<dyn Fn(&str) -> i32 + Send + Sync>;

/// Line height override
pub type TextHeightFn = Box<dyn Fn() -> i32 + Send + Sync>;

/// Glyph source behind a [`Font`]
pub enum FontKind {
    /// Native TrueType/OpenType face rasterized with `fontdue`
    Face(GlyphFace),
    /// Caller-provided implementation
    Custom(Box<dyn FontMetrics>),
}

/// A renderable font resource
pub struct Font {
    id: FontId,
    kind: FontKind,
    text_width: Option<TextWidthFn>,
    text_height: Option<TextHeightFn>,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            FontKind::Face(face) => format!("Face({}px)", face.size()),
            FontKind::Custom(_) => "Custom".to_string(),
        };
        f.debug_struct("Font")
            .field("id", &self.id)
            .field("kind", &kind)
            .field("text_width_override", &self.text_width.is_some())
            .field("text_height_override", &self.text_height.is_some())
            .finish()
    }
}

impl Font {
    /// Wrap a glyph source
    pub fn new(kind: FontKind) -> Self {
        Self {
            id: FontId::next(),
            kind,
            text_width: None,
            text_height: None,
        }
    }

    /// Font backed by a native glyph face
    pub fn from_face(face: GlyphFace) -> Self {
        Self::new(FontKind::Face(face))
    }

    /// Font backed by a caller implementation
    pub fn custom(metrics: impl FontMetrics + 'static) -> Self {
        Self::new(FontKind::Custom(Box::new(metrics)))
    }

    /// Replace width measurement
    #[must_use]
    pub fn with_text_width(mut self, measure: impl Fn(&str) -> i32 + Send + Sync + 'static) -> Self {
        self.text_width = Some(Box::new(measure));
        self
    }

    /// Replace line height measurement
    #[must_use]
    pub fn with_text_height(mut self, measure: impl Fn() -> i32 + Send + Sync + 'static) -> Self {
        self.text_height = Some(Box::new(measure));
        self
    }

    /// Identity used by the registry
    pub const fn id(&self) -> FontId {
        self.id
    }

    fn source(&self) -> &dyn FontMetrics {
        match &self.kind {
            FontKind::Face(face) => face as &dyn FontMetrics,
            FontKind::Custom(custom) => custom.as_ref(),
        }
    }
}

impl FontMetrics for Font {
    fn draw(&self, target: &mut ClippedSurface<'_>, text: &str, x: i32, y: i32, color: Color) {
        self.source().draw(target, text, x, y, color);
    }

    fn text_width(&self, text: &str) -> i32 {
        match &self.text_width {
            Some(measure) => measure(text),
            None => self.source().text_width(text),
        }
    }

    fn text_height(&self) -> i32 {
        match &self.text_height {
            Some(measure) => measure(),
            None => self.source().text_height(),
        }
    }
}

/// Rasterized glyph kept in the face cache
struct CachedGlyph {
    metrics: fontdue::Metrics,
    /// White texels with coverage in alpha, tinted at draw time
    image: RgbaImage,
}

/// TrueType/OpenType face rasterized at a fixed pixel size
pub struct GlyphFace {
    font: fontdue::Font,
    size: f32,
    glyphs: RwLock<HashMap<char, Arc<CachedGlyph>>>,
}

impl GlyphFace {
    /// Load a face from TTF/OTF bytes
    pub fn from_bytes(font_data: &[u8], size: f32) -> FontResult<Self> {
        let font = fontdue::Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| FontError::LoadError(format!("fontdue error: {e}")))?;
        Self::from_font(font, size)
    }

    /// Wrap an already loaded `fontdue` font
    pub fn from_font(font: fontdue::Font, size: f32) -> FontResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }

        log::info!("Loaded glyph face at {size}px");
        Ok(Self {
            font,
            size,
            glyphs: RwLock::new(HashMap::new()),
        })
    }

    /// Pixel size glyphs are rasterized at
    pub const fn size(&self) -> f32 {
        self.size
    }

    fn glyph(&self, ch: char) -> Arc<CachedGlyph> {
        if let Some(glyph) = self
            .glyphs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ch)
        {
            return Arc::clone(glyph);
        }

        let (metrics, coverage) = self.font.rasterize(ch, self.size);
        let width = metrics.width as u32;
        let image = RgbaImage::from_fn(width, metrics.height as u32, |x, y| {
            Rgba([255, 255, 255, coverage[(y * width + x) as usize]])
        });
        let glyph = Arc::new(CachedGlyph { metrics, image });

        self.glyphs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ch, Arc::clone(&glyph));
        glyph
    }
}

impl FontMetrics for GlyphFace {
    fn draw(&self, target: &mut ClippedSurface<'_>, text: &str, x: i32, y: i32, color: Color) {
        let color_scale = ColorScale::from_color(color);
        let mut pen_x = x as f32;

        for ch in text.chars() {
            let glyph = self.glyph(ch);
            let metrics = &glyph.metrics;

            if metrics.width > 0 && metrics.height > 0 {
                // fontdue measures ymin upward from the baseline
                let left = pen_x.round() as i32 + metrics.xmin;
                let top = y - (metrics.ymin + metrics.height as i32);
                let options = DrawOptions {
                    transform: Transform2D::identity().translate(left as f32, top as f32),
                    color_scale,
                };
                let source = Rect::from_size(metrics.width as i32, metrics.height as i32);
                target.draw_image(&glyph.image, source, &options);
            }

            pen_x += metrics.advance_width;
        }
    }

    fn text_width(&self, text: &str) -> i32 {
        let width: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum();
        width.ceil() as i32
    }

    fn text_height(&self) -> i32 {
        self.font
            .horizontal_line_metrics(self.size)
            .map_or(self.size, |line| line.new_line_size)
            .ceil() as i32
    }
}
