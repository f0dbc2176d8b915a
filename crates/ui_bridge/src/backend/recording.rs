//! Recording surface
//!
//! A [`Surface`] that stores every draw call instead of compositing. Useful
//! for headless runs, golden tests, and checking what a frame would draw.

use image::RgbaImage;

use crate::foundation::math::Rect;
use crate::render::surface::{DrawOptions, Surface};

/// One draw call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// An image draw
    Image {
        /// Full size of the source image
        source_size: (u32, u32),
        /// Sampled region of the source image
        source_rect: Rect,
        /// Placement and tint
        options: DrawOptions,
        /// Active clip region
        clip: Rect,
    },
    /// A debug text draw
    DebugText {
        /// Text drawn
        text: String,
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Active clip region
        clip: Rect,
    },
}

impl SurfaceCall {
    /// Clip region the call was issued under
    pub const fn clip(&self) -> Rect {
        match self {
            Self::Image { clip, .. } | Self::DebugText { clip, .. } => *clip,
        }
    }
}

/// Surface that records draw calls
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Rect,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Surface of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
            calls: Vec::new(),
        }
    }

    /// Calls recorded since the last [`take_calls`](Self::take_calls)
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Remove and return the recorded calls
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw_image(&mut self, source: &RgbaImage, source_rect: Rect, options: &DrawOptions, clip: Rect) {
        self.calls.push(SurfaceCall::Image {
            source_size: source.dimensions(),
            source_rect,
            options: *options,
            clip,
        });
    }

    fn debug_print(&mut self, text: &str, x: i32, y: i32, clip: Rect) {
        self.calls.push(SurfaceCall::DebugText {
            text: text.to_string(),
            x,
            y,
            clip,
        });
    }
}
