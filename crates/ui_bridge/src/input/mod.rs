//! Input bridging between the host engine and the UI library
//!
//! [`HostInput`] is the engine side: a read-only snapshot of this tick's
//! pointer, wheel, text and key state. [`UiInput`] is the UI side: the
//! injection calls the UI state machine exposes. [`InputTranslator`] moves
//! one tick of state from the first to the second.

pub mod translator;

pub use translator::InputTranslator;

use bitflags::bitflags;

/// Host engine mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Right,
}

/// Host engine keys the bridge translates
///
/// Only these five keys reach the UI; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    /// Either control key
    Control,
    /// Either shift key
    Shift,
    /// Either alt key
    Alt,
    /// Backspace
    Backspace,
    /// Enter / return
    Enter,
}

bitflags! {
    /// Button bitmask understood by the UI library
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u32 {
        /// Left button
        const LEFT = 1 << 0;
        /// Right button
        const RIGHT = 1 << 1;
        /// Middle button
        const MIDDLE = 1 << 2;
    }
}

bitflags! {
    /// Key bitmask understood by the UI library
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UiKeys: u32 {
        /// Shift modifier
        const SHIFT = 1 << 0;
        /// Control modifier
        const CTRL = 1 << 1;
        /// Alt modifier
        const ALT = 1 << 2;
        /// Backspace
        const BACKSPACE = 1 << 3;
        /// Return
        const RETURN = 1 << 4;
    }
}

/// Per-tick input snapshot provided by the host engine
pub trait HostInput {
    /// Absolute pointer position in surface pixels
    fn cursor_position(&self) -> (i32, i32);

    /// True if `button` went down this tick
    fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool;

    /// True if `button` went up this tick
    fn is_mouse_button_just_released(&self, button: MouseButton) -> bool;

    /// Wheel delta for this tick (positive Y is up)
    fn wheel(&self) -> (f64, f64);

    /// Append characters composed this tick to `buffer`
    fn append_input_chars(&self, buffer: &mut Vec<char>);

    /// True if `key` went down this tick
    fn is_key_just_pressed(&self, key: HostKey) -> bool;

    /// True if `key` went up this tick
    fn is_key_just_released(&self, key: HostKey) -> bool;
}

/// Input injection calls exposed by the UI library
pub trait UiInput {
    /// Pointer moved to (`x`, `y`)
    fn input_mouse_move(&mut self, x: i32, y: i32);

    /// `buttons` went down at (`x`, `y`)
    fn input_mouse_down(&mut self, x: i32, y: i32, buttons: MouseButtons);

    /// `buttons` went up at (`x`, `y`)
    fn input_mouse_up(&mut self, x: i32, y: i32, buttons: MouseButtons);

    /// Scroll by (`x`, `y`) UI units, positive Y scrolls down
    fn input_scroll(&mut self, x: i32, y: i32);

    /// Composed text typed this tick
    fn input_text(&mut self, text: &str);

    /// `key` went down
    fn input_key_down(&mut self, key: UiKeys);

    /// `key` went up
    fn input_key_up(&mut self, key: UiKeys);
}
