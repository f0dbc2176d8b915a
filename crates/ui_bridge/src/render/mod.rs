//! UI rendering module
//!
//! Backend-agnostic rendering infrastructure: the command stream the UI
//! library emits, the frame buffer that holds it, and the renderer that
//! replays it onto a host [`Surface`].

pub mod buffer;
pub mod commands;
pub mod renderer;
pub mod surface;

// Re-export commonly used types
pub use buffer::{CommandBuffer, DEFAULT_COMMAND_CAPACITY};
pub use commands::{
    ClipCommand, CommandSink, DrawCommand, IconCommand, RectCommand, TextCommand, UiCommand,
};
pub use renderer::{DefaultFont, FrameStats, Renderer};
pub use surface::{ClippedSurface, DrawOptions, Surface, DEBUG_GLYPH_WIDTH, DEBUG_LINE_HEIGHT};
