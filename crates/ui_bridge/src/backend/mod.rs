//! Reference surface backends

pub mod recording;

pub use recording::{RecordingSurface, SurfaceCall};
