//! UI render commands

use crate::fonts::FontHandle;
use crate::foundation::math::{Color, Rect, Vec2i};

/// Command as emitted by the UI library during its render pass
///
/// Borrows from UI-owned memory that is only valid for the duration of the
/// visit; [`DrawCommand`] is the owned, frame-scoped copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand<'a> {
    /// Draw a run of text
    Text {
        /// Font handle, [`FontHandle::DEFAULT`] for the default font
        font: FontHandle,
        /// Top-left position
        pos: Vec2i,
        /// Text color
        color: Color,
        /// Text, possibly NUL-terminated
        text: &'a str,
    },
    /// Fill a rectangle
    Rect {
        /// Target rectangle
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Draw an atlas icon
    Icon {
        /// Atlas slot index
        id: u32,
        /// Target rectangle, the icon is placed at its top-left
        rect: Rect,
        /// Tint color
        color: Color,
    },
    /// Replace the active clip region
    Clip {
        /// New clip rectangle
        rect: Rect,
    },
}

/// Visitor the UI library drives during its render pass
pub trait CommandSink {
    /// Start of the command stream for a frame
    fn begin_frame(&mut self);

    /// One command, in emission order
    fn command(&mut self, command: UiCommand<'_>);

    /// End of the command stream for a frame
    fn end_frame(&mut self);
}

/// Text draw command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCommand {
    /// Font handle
    pub font: FontHandle,
    /// Draw position
    pub pos: Vec2i,
    /// Text color
    pub color: Color,
    /// Text content
    pub text: String,
}

/// Filled rectangle command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectCommand {
    /// Target rectangle
    pub rect: Rect,
    /// Fill color
    pub color: Color,
}

/// Atlas icon command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconCommand {
    /// Atlas slot index
    pub id: u32,
    /// Target rectangle
    pub rect: Rect,
    /// Tint color
    pub color: Color,
}

/// Clip region command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipCommand {
    /// New clip rectangle
    pub rect: Rect,
}

/// Owned, frame-scoped draw command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Draw text
    Text(TextCommand),
    /// Fill a rectangle
    Rect(RectCommand),
    /// Draw an atlas icon
    Icon(IconCommand),
    /// Replace the clip region
    Clip(ClipCommand),
}

impl From<UiCommand<'_>> for DrawCommand {
    fn from(command: UiCommand<'_>) -> Self {
        match command {
            UiCommand::Text {
                font,
                pos,
                color,
                text,
            } => Self::Text(TextCommand {
                font,
                pos,
                color,
                text: truncate_at_nul(text).to_string(),
            }),
            UiCommand::Rect { rect, color } => Self::Rect(RectCommand { rect, color }),
            UiCommand::Icon { id, rect, color } => Self::Icon(IconCommand { id, rect, color }),
            UiCommand::Clip { rect } => Self::Clip(ClipCommand { rect }),
        }
    }
}

/// Text up to the first NUL byte
pub fn truncate_at_nul(text: &str) -> &str {
    text.find('\0').map_or(text, |end| &text[..end])
}
