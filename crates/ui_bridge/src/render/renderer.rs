//! Command translation
//!
//! Walks a frame's [`CommandBuffer`] in order and issues the matching image
//! draws against the host surface:
//! - Rects stretch the atlas solid-fill swatch and tint it
//! - Icons copy an atlas slot unscaled and tint it
//! - Text goes through the resolved font, or the host debug font
//! - Clips replace the active region with an absolute sub-region of the
//!   surface; a zero-sized clip suppresses drawing until the next clip

use std::sync::Arc;

use super::buffer::CommandBuffer;
use super::commands::{ClipCommand, DrawCommand, IconCommand, RectCommand, TextCommand};
use super::surface::{ClippedSurface, DrawOptions, Surface};
use crate::atlas::Atlas;
use crate::fonts::{Font, FontHandle, FontMetrics, FontRegistry};
use crate::foundation::math::{ColorScale, Rect, Transform2D, Vec2i};

/// Font used for [`FontHandle::DEFAULT`]
#[derive(Debug, Clone)]
pub struct DefaultFont {
    /// The font resource
    pub font: Arc<Font>,
    /// Pixel offset added to the draw position
    pub offset: Vec2i,
}

/// Counters for one presented frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Commands in the buffer
    pub commands: usize,
    /// Draw calls issued to the surface
    pub draw_calls: usize,
    /// Draw commands dropped by a null clip
    pub skipped: usize,
}

/// Translates buffered commands into surface draws
#[derive(Debug)]
pub struct Renderer {
    atlas: Atlas,
    fonts: Arc<FontRegistry>,
    default_font: Option<DefaultFont>,
}

impl Renderer {
    /// Create a renderer over a validated atlas
    pub fn new(atlas: Atlas, fonts: Arc<FontRegistry>, default_font: Option<DefaultFont>) -> Self {
        Self {
            atlas,
            fonts,
            default_font,
        }
    }

    /// Icon atlas
    pub const fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Font registry used for explicit handles
    pub const fn fonts(&self) -> &Arc<FontRegistry> {
        &self.fonts
    }

    /// Font used for the default handle
    pub const fn default_font(&self) -> Option<&DefaultFont> {
        self.default_font.as_ref()
    }

    /// Draw every buffered command onto `surface`, then empty the buffer
    pub fn present(&self, buffer: &mut CommandBuffer, surface: &mut dyn Surface) -> FrameStats {
        let bounds = surface.bounds();
        let mut clip = Some(bounds);
        let mut stats = FrameStats {
            commands: buffer.len(),
            ..FrameStats::default()
        };

        for command in buffer.commands() {
            if let DrawCommand::Clip(cmd) = command {
                clip = Self::clip_region(bounds, cmd);
                continue;
            }

            let Some(region) = clip else {
                stats.skipped += 1;
                continue;
            };

            let mut target = ClippedSurface::new(&mut *surface, region);
            match command {
                DrawCommand::Text(cmd) => self.draw_text(&mut target, cmd),
                DrawCommand::Rect(cmd) => self.draw_rect(&mut target, cmd),
                DrawCommand::Icon(cmd) => self.draw_icon(&mut target, cmd),
                DrawCommand::Clip(_) => {}
            }
            stats.draw_calls += target.draw_calls();
        }

        buffer.clear();
        log::trace!(
            "Presented {} commands: {} draw calls, {} clipped",
            stats.commands,
            stats.draw_calls,
            stats.skipped
        );
        stats
    }

    /// Absolute clip region for `cmd`, `None` when nothing can be drawn
    fn clip_region(bounds: Rect, cmd: &ClipCommand) -> Option<Rect> {
        if cmd.rect.w == 0 || cmd.rect.h == 0 {
            return None;
        }
        bounds.intersect(&cmd.rect)
    }

    fn resolve_font(&self, handle: FontHandle) -> Option<(Arc<Font>, Vec2i)> {
        if !handle.is_default() {
            if let Some(entry) = self.fonts.lookup(handle) {
                return Some((entry.font, entry.offset));
            }
            log::debug!("Font handle {} is not registered, using default font", handle.raw());
        }
        self.default_font
            .as_ref()
            .map(|default| (Arc::clone(&default.font), default.offset))
    }

    fn draw_text(&self, target: &mut ClippedSurface<'_>, cmd: &TextCommand) {
        match self.resolve_font(cmd.font) {
            Some((font, offset)) => {
                let pos = cmd.pos + offset;
                font.draw(target, &cmd.text, pos.x, pos.y, cmd.color);
            }
            // Debug font ignores color
            None => target.debug_print(&cmd.text, cmd.pos.x, cmd.pos.y),
        }
    }

    fn draw_rect(&self, target: &mut ClippedSurface<'_>, cmd: &RectCommand) {
        let fill = self.atlas.fill_rect();
        let origin = cmd.rect.origin();
        let transform = Transform2D::identity()
            .scale(cmd.rect.w as f32 / fill.w as f32, cmd.rect.h as f32 / fill.h as f32)
            .translate(origin.x as f32, origin.y as f32);
        let options = DrawOptions {
            transform,
            color_scale: ColorScale::from_color(cmd.color),
        };
        target.draw_image(self.atlas.texture(), fill, &options);
    }

    fn draw_icon(&self, target: &mut ClippedSurface<'_>, cmd: &IconCommand) {
        let Some(source) = self.atlas.rect(cmd.id) else {
            log::warn!("Icon id {} is outside the atlas table", cmd.id);
            return;
        };
        let origin = cmd.rect.origin();
        let options = DrawOptions {
            transform: Transform2D::identity().translate(origin.x as f32, origin.y as f32),
            color_scale: ColorScale::from_color(cmd.color),
        };
        target.draw_image(self.atlas.texture(), source, &options);
    }
}
