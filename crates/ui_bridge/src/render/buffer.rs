//! Frame-scoped command buffer

use super::commands::{CommandSink, DrawCommand, UiCommand};

/// Commands reserved up front; enough for a typical UI without reallocating
pub const DEFAULT_COMMAND_CAPACITY: usize = 4096;

/// Ordered draw commands for exactly one frame
///
/// Filled while the UI library visits it, drained once during present. The
/// allocation is kept across frames.
#[derive(Debug)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_COMMAND_CAPACITY)
    }
}

impl CommandBuffer {
    /// Create a buffer with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Buffered commands in emission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of buffered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reserved capacity
    pub fn capacity(&self) -> usize {
        self.commands.capacity()
    }

    /// Drop all commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl CommandSink for CommandBuffer {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn command(&mut self, command: UiCommand<'_>) {
        self.push(command.into());
    }

    fn end_frame(&mut self) {
        // Flushed explicitly during present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Color, Rect};

    fn rect_command() -> UiCommand<'static> {
        UiCommand::Rect {
            rect: Rect::new(0, 0, 10, 10),
            color: Color::WHITE,
        }
    }

    #[test]
    fn test_default_capacity_reserved() {
        let buffer = CommandBuffer::default();
        assert!(buffer.capacity() >= DEFAULT_COMMAND_CAPACITY);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut buffer = CommandBuffer::with_capacity(8);
        buffer.command(rect_command());
        buffer.command(UiCommand::Clip {
            rect: Rect::new(0, 0, 5, 5),
        });
        assert_eq!(buffer.len(), 2);

        buffer.begin_frame();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut buffer = CommandBuffer::with_capacity(16);
        for _ in 0..16 {
            buffer.command(rect_command());
        }
        let capacity = buffer.capacity();

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), capacity);
    }

    #[test]
    fn test_emission_order_preserved() {
        let mut buffer = CommandBuffer::with_capacity(4);
        buffer.begin_frame();
        buffer.command(UiCommand::Clip {
            rect: Rect::new(1, 2, 3, 4),
        });
        buffer.command(rect_command());
        buffer.end_frame();

        assert!(matches!(buffer.commands()[0], DrawCommand::Clip(_)));
        assert!(matches!(buffer.commands()[1], DrawCommand::Rect(_)));
    }
}
