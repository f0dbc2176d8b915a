//! UI driver
//!
//! Owns the per-instance bridge state (input translator, command buffer,
//! renderer, font registry) and wires it into a [`UiContext`].
//!
//! Per tick the host calls [`Driver::update_inputs`] before running the UI's
//! frame, and [`Driver::draw`] from its own draw callback.

use std::sync::Arc;

use image::RgbaImage;

use crate::atlas::{Atlas, AtlasError, DEFAULT_ATLAS_RECTS};
use crate::config::{ConfigError, DriverConfig};
use crate::context::UiContext;
use crate::fonts::{Font, FontRegistry};
use crate::foundation::math::{Rect, Vec2i};
use crate::input::translator::DEFAULT_SCROLL_MULTIPLIER;
use crate::input::{HostInput, InputTranslator, UiInput};
use crate::render::{CommandBuffer, DefaultFont, FrameStats, Renderer, Surface, DEFAULT_COMMAND_CAPACITY};
use crate::style::TextMetrics;

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Driver setup errors
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Atlas could not be set up
    #[error("Atlas error: {0}")]
    Atlas(#[from] AtlasError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Driver construction options
///
/// ```no_run
/// use ui_bridge::DriverOptions;
///
/// let options = DriverOptions::new()
///     .with_scroll_multiplier(1.0, -20.0)
///     .with_default_font_offset(0, 12);
/// ```
#[derive(Debug, Clone)]
pub struct DriverOptions {
    atlas_texture: Option<RgbaImage>,
    atlas_rects: Vec<Rect>,
    scroll_multiplier: (f64, f64),
    default_font: Option<Arc<Font>>,
    default_font_offset: Vec2i,
    command_capacity: usize,
    fonts: Option<Arc<FontRegistry>>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            atlas_texture: None,
            atlas_rects: DEFAULT_ATLAS_RECTS.to_vec(),
            scroll_multiplier: DEFAULT_SCROLL_MULTIPLIER,
            default_font: None,
            default_font_offset: Vec2i::ZERO,
            command_capacity: DEFAULT_COMMAND_CAPACITY,
            fonts: None,
        }
    }
}

impl DriverOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from a config file's plain data, loading the atlas image if
    /// the config names one
    pub fn from_config(config: &DriverConfig) -> DriverResult<Self> {
        let [sx, sy] = config.scroll_multiplier;
        let [ox, oy] = config.default_font_offset;
        let mut options = Self::new()
            .with_scroll_multiplier(sx, sy)
            .with_default_font_offset(ox, oy)
            .with_command_capacity(config.command_capacity);

        if let Some(path) = &config.atlas_path {
            options = options.with_atlas_texture(Atlas::texture_from_path(path)?);
        }
        Ok(options)
    }

    /// Use `texture` instead of the embedded default atlas
    #[must_use]
    pub fn with_atlas_texture(mut self, texture: RgbaImage) -> Self {
        self.atlas_texture = Some(texture);
        self
    }

    /// Use a custom atlas slot table
    #[must_use]
    pub fn with_atlas_rects(mut self, rects: Vec<Rect>) -> Self {
        self.atlas_rects = rects;
        self
    }

    /// Font used when the UI asks for the default handle
    #[must_use]
    pub fn with_default_font(mut self, font: Arc<Font>) -> Self {
        self.default_font = Some(font);
        self
    }

    /// Pixel offset applied when drawing with the default font
    #[must_use]
    pub fn with_default_font_offset(mut self, x: i32, y: i32) -> Self {
        self.default_font_offset = Vec2i::new(x, y);
        self
    }

    /// Multipliers applied to raw wheel deltas
    #[must_use]
    pub fn with_scroll_multiplier(mut self, x: f64, y: f64) -> Self {
        self.scroll_multiplier = (x, y);
        self
    }

    /// Commands reserved up front in the frame buffer
    #[must_use]
    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    /// Share an existing font registry instead of creating one
    #[must_use]
    pub fn with_font_registry(mut self, fonts: Arc<FontRegistry>) -> Self {
        self.fonts = Some(fonts);
        self
    }
}

/// Bridges one UI context to the host engine
#[derive(Debug)]
pub struct Driver {
    input: InputTranslator,
    commands: CommandBuffer,
    renderer: Renderer,
}

impl Driver {
    /// Set up the atlas and register text metrics with `ctx`
    ///
    /// Fails if the atlas cannot be decoded or its geometry is invalid;
    /// nothing can be drawn without it.
    pub fn new<C>(ctx: &mut C, options: DriverOptions) -> DriverResult<Self>
    where
        C: UiContext + ?Sized,
    {
        let texture = match options.atlas_texture {
            Some(texture) => texture,
            None => Atlas::default_texture()?,
        };
        let atlas = Atlas::new(texture, options.atlas_rects)?;

        let fonts = options.fonts.unwrap_or_default();
        let default_font = options.default_font.map(|font| DefaultFont {
            font,
            offset: options.default_font_offset,
        });

        ctx.set_text_metrics(TextMetrics::new(
            Arc::clone(&fonts),
            default_font.as_ref().map(|default| Arc::clone(&default.font)),
        ));

        log::info!(
            "UI driver ready: {} atlas slots, default font: {}",
            atlas.rects().len(),
            default_font.is_some()
        );

        Ok(Self {
            input: InputTranslator::new(options.scroll_multiplier),
            commands: CommandBuffer::with_capacity(options.command_capacity),
            renderer: Renderer::new(atlas, fonts, default_font),
        })
    }

    /// Forward this tick's host input to the UI
    ///
    /// Call once per tick, before the UI's begin/end frame cycle.
    pub fn update_inputs<H, U>(&mut self, host: &H, ui: &mut U)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        self.input.update(host, ui);
    }

    /// Run the UI's command pass and draw the result onto `surface`
    pub fn draw<C>(&mut self, ctx: &mut C, surface: &mut dyn Surface) -> FrameStats
    where
        C: UiContext + ?Sized,
    {
        ctx.render(&mut self.commands);
        self.renderer.present(&mut self.commands, surface)
    }

    /// Registry resolving explicit font handles
    pub const fn fonts(&self) -> &Arc<FontRegistry> {
        self.renderer.fonts()
    }

    /// Font used for the default handle
    pub fn default_font(&self) -> Option<&Arc<Font>> {
        self.renderer.default_font().map(|default| &default.font)
    }

    /// Commands buffered and not yet presented
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Icon atlas in use
    pub const fn atlas(&self) -> &Atlas {
        self.renderer.atlas()
    }
}
