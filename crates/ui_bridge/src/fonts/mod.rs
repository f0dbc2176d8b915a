//! Font resources and the handle registry
//!
//! Fonts are shared as `Arc<Font>`; the UI library only ever sees the
//! [`FontHandle`] the registry assigns to each one.

pub mod font;
pub mod registry;

pub use font::{Font, FontError, FontId, FontKind, FontMetrics, FontResult, GlyphFace};
pub use registry::{FontHandle, FontRegistry, RegisteredFont};
