//! Immediate-mode UI library interface
//!
//! The bridge never owns the UI state machine; it only needs these hooks.

use crate::input::UiInput;
use crate::render::CommandSink;
use crate::style::TextMetrics;

/// The hooks the bridge needs from an immediate-mode UI library
pub trait UiContext: UiInput {
    /// Install the text measurement callbacks used for layout
    fn set_text_metrics(&mut self, metrics: TextMetrics);

    /// Run the command emission pass
    ///
    /// Must call `sink.begin_frame()`, then `sink.command(..)` once per
    /// pending draw command in order, then `sink.end_frame()`, all before
    /// returning.
    fn render(&mut self, sink: &mut dyn CommandSink);
}
