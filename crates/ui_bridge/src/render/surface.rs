//! Host surface interface
//!
//! Keeps the bridge independent of any particular engine's image type. A
//! host implements [`Surface`] for its framebuffer; the renderer only ever
//! reaches it through a [`ClippedSurface`] carrying the active clip region.

use image::RgbaImage;

use crate::foundation::math::{ColorScale, Rect, Transform2D};

/// Pixel width of one glyph of the host's built-in debug text
pub const DEBUG_GLYPH_WIDTH: i32 = 6;

/// Pixel height of one line of the host's built-in debug text
pub const DEBUG_LINE_HEIGHT: i32 = 16;

/// How a source image is placed on the surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawOptions {
    /// Source-to-surface transform
    pub transform: Transform2D,
    /// Multiplicative tint
    pub color_scale: ColorScale,
}

/// Drawing surface provided by the host engine
pub trait Surface {
    /// Full drawable area
    fn bounds(&self) -> Rect;

    /// Draw the `source_rect` region of `source`, transformed by `options`,
    /// with everything outside `clip` discarded
    fn draw_image(&mut self, source: &RgbaImage, source_rect: Rect, options: &DrawOptions, clip: Rect);

    /// Draw `text` with the host's built-in debug font, top-left at (`x`, `y`)
    ///
    /// The debug font has no color control and must occupy
    /// [`DEBUG_GLYPH_WIDTH`] × [`DEBUG_LINE_HEIGHT`] pixels per character.
    fn debug_print(&mut self, text: &str, x: i32, y: i32, clip: Rect);
}

/// A surface restricted to one clip region
///
/// Counts the draw calls it forwards so the renderer can report them.
pub struct ClippedSurface<'a> {
    surface: &'a mut dyn Surface,
    clip: Rect,
    draw_calls: usize,
}

impl<'a> ClippedSurface<'a> {
    /// Restrict `surface` to `clip`
    pub fn new(surface: &'a mut dyn Surface, clip: Rect) -> Self {
        Self {
            surface,
            clip,
            draw_calls: 0,
        }
    }

    /// Active clip region
    pub const fn clip(&self) -> Rect {
        self.clip
    }

    /// Draw calls forwarded so far
    pub const fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Draw a region of `source` inside the clip
    pub fn draw_image(&mut self, source: &RgbaImage, source_rect: Rect, options: &DrawOptions) {
        self.draw_calls += 1;
        self.surface.draw_image(source, source_rect, options, self.clip);
    }

    /// Draw debug text inside the clip
    pub fn debug_print(&mut self, text: &str, x: i32, y: i32) {
        self.draw_calls += 1;
        self.surface.debug_print(text, x, y, self.clip);
    }
}
