//! # UI Bridge
//!
//! Drives an immediate-mode UI library through a 2D game engine's input and
//! image drawing APIs.
//!
//! ## Features
//!
//! - **Input Translation**: pointer, wheel, text and a fixed key set, once per tick
//! - **Command Buffering**: frame-scoped copy of the UI's draw commands
//! - **Command Rendering**: rects, icons and text drawn from one icon atlas,
//!   with absolute clip regions
//! - **Font Registry**: thread-safe handle allocation for custom fonts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ui_bridge::prelude::*;
//!
//! fn frame<C: UiContext, H: HostInput, S: Surface>(
//!     driver: &mut Driver,
//!     ctx: &mut C,
//!     host: &H,
//!     screen: &mut S,
//! ) {
//!     driver.update_inputs(host, ctx);
//!     // ... run the UI's begin/end frame and build widgets ...
//!     driver.draw(ctx, screen);
//! }
//!
//! fn setup<C: UiContext>(ctx: &mut C) -> Result<Driver, DriverError> {
//!     Driver::new(ctx, DriverOptions::new().with_scroll_multiplier(1.0, -30.0))
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod atlas;
pub mod backend;
pub mod config;
pub mod fonts;
pub mod foundation;
pub mod input;
pub mod render;
pub mod style;

mod context;
mod driver;

#[cfg(test)]
mod tests;

pub use context::UiContext;
pub use driver::{Driver, DriverError, DriverOptions, DriverResult};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        atlas::{Atlas, AtlasError},
        config::{Config, DriverConfig},
        fonts::{Font, FontHandle, FontMetrics, FontRegistry, GlyphFace},
        foundation::math::{Color, Rect, Vec2i},
        input::{HostInput, HostKey, MouseButton, MouseButtons, UiInput, UiKeys},
        render::{CommandSink, FrameStats, Surface, UiCommand},
        style::TextMetrics,
        Driver, DriverError, DriverOptions, UiContext,
    };
}
