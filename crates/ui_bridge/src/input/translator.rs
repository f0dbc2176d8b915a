//! Per-tick input translation
//!
//! Runs once per tick, before the UI library's begin/end cycle.

use super::{HostInput, HostKey, MouseButton, MouseButtons, UiInput, UiKeys};

/// Default wheel multipliers: the host reports small positive-up deltas, the
/// UI expects larger positive-down scroll units.
pub const DEFAULT_SCROLL_MULTIPLIER: (f64, f64) = (1.0, -30.0);

const BUTTONS: [(MouseButton, MouseButtons); 3] = [
    (MouseButton::Left, MouseButtons::LEFT),
    (MouseButton::Middle, MouseButtons::MIDDLE),
    (MouseButton::Right, MouseButtons::RIGHT),
];

const KEYS: [(HostKey, UiKeys); 5] = [
    (HostKey::Control, UiKeys::CTRL),
    (HostKey::Shift, UiKeys::SHIFT),
    (HostKey::Alt, UiKeys::ALT),
    (HostKey::Backspace, UiKeys::BACKSPACE),
    (HostKey::Enter, UiKeys::RETURN),
];

/// Converts host input snapshots into UI input events
#[derive(Debug)]
pub struct InputTranslator {
    scroll_multiplier: (f64, f64),
    chars: Vec<char>,
    text: String,
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_MULTIPLIER)
    }
}

impl InputTranslator {
    /// Create a translator with the given wheel multipliers (X, Y)
    pub fn new(scroll_multiplier: (f64, f64)) -> Self {
        Self {
            scroll_multiplier,
            chars: Vec::with_capacity(1024),
            text: String::new(),
        }
    }

    /// Current wheel multipliers
    pub const fn scroll_multiplier(&self) -> (f64, f64) {
        self.scroll_multiplier
    }

    /// Forward one tick of host input to the UI
    pub fn update<H, U>(&mut self, host: &H, ui: &mut U)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        let (x, y) = host.cursor_position();
        ui.input_mouse_move(x, y);

        self.forward_scroll(host, ui);
        self.forward_buttons(host, ui, x, y);
        self.forward_text(host, ui);
        Self::forward_keys(host, ui);
    }

    fn forward_scroll<H, U>(&self, host: &H, ui: &mut U)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        let (dx, dy) = host.wheel();
        if dx != 0.0 || dy != 0.0 {
            let (mx, my) = self.scroll_multiplier;
            // Truncates toward zero
            ui.input_scroll((dx * mx) as i32, (dy * my) as i32);
        }
    }

    fn forward_buttons<H, U>(&self, host: &H, ui: &mut U, x: i32, y: i32)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        let pressed = BUTTONS
            .iter()
            .filter(|(button, _)| host.is_mouse_button_just_pressed(*button))
            .fold(MouseButtons::empty(), |mask, (_, bit)| mask | *bit);
        if !pressed.is_empty() {
            ui.input_mouse_down(x, y, pressed);
        }

        let released = BUTTONS
            .iter()
            .filter(|(button, _)| host.is_mouse_button_just_released(*button))
            .fold(MouseButtons::empty(), |mask, (_, bit)| mask | *bit);
        if !released.is_empty() {
            ui.input_mouse_up(x, y, released);
        }
    }

    fn forward_text<H, U>(&mut self, host: &H, ui: &mut U)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        host.append_input_chars(&mut self.chars);
        if self.chars.is_empty() {
            return;
        }

        self.text.clear();
        self.text.extend(self.chars.drain(..));
        ui.input_text(&self.text);
    }

    fn forward_keys<H, U>(host: &H, ui: &mut U)
    where
        H: HostInput + ?Sized,
        U: UiInput + ?Sized,
    {
        for (key, ui_key) in KEYS {
            if host.is_key_just_pressed(key) {
                ui.input_key_down(ui_key);
            }
        }
        for (key, ui_key) in KEYS {
            if host.is_key_just_released(key) {
                ui.input_key_up(ui_key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{ScriptedInput, ScriptedUi, UiEvent};

    fn run(host: &ScriptedInput) -> Vec<UiEvent> {
        let mut ui = ScriptedUi::new();
        InputTranslator::default().update(host, &mut ui);
        ui.take_events()
    }

    #[test]
    fn test_mouse_move_always_forwarded() {
        let host = ScriptedInput {
            cursor: (12, 34),
            ..ScriptedInput::default()
        };
        assert_eq!(run(&host), vec![UiEvent::MouseMove(12, 34)]);
    }

    #[test]
    fn test_buttons_batched_into_one_event() {
        let host = ScriptedInput {
            cursor: (5, 6),
            pressed_buttons: vec![MouseButton::Left, MouseButton::Right],
            ..ScriptedInput::default()
        };
        let events = run(&host);

        let downs: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, UiEvent::MouseDown(..)))
            .collect();
        assert_eq!(downs, vec![&UiEvent::MouseDown(5, 6, MouseButtons::LEFT | MouseButtons::RIGHT)]);
    }

    #[test]
    fn test_release_batched_separately() {
        let host = ScriptedInput {
            pressed_buttons: vec![MouseButton::Middle],
            released_buttons: vec![MouseButton::Left],
            ..ScriptedInput::default()
        };
        let events = run(&host);

        assert_eq!(
            &events[1..],
            &[
                UiEvent::MouseDown(0, 0, MouseButtons::MIDDLE),
                UiEvent::MouseUp(0, 0, MouseButtons::LEFT),
            ]
        );
    }

    #[test]
    fn test_scroll_default_multiplier() {
        let host = ScriptedInput {
            wheel: (0.0, 3.0),
            ..ScriptedInput::default()
        };
        assert!(run(&host).contains(&UiEvent::Scroll(0, -90)));
    }

    #[test]
    fn test_zero_wheel_not_forwarded() {
        let events = run(&ScriptedInput::default());
        assert!(!events.iter().any(|e| matches!(e, UiEvent::Scroll(..))));
    }

    #[test]
    fn test_custom_scroll_multiplier() {
        let host = ScriptedInput {
            wheel: (2.0, -0.5),
            ..ScriptedInput::default()
        };
        let mut ui = ScriptedUi::new();
        InputTranslator::new((4.0, 10.0)).update(&host, &mut ui);
        assert!(ui.take_events().contains(&UiEvent::Scroll(8, -5)));
    }

    #[test]
    fn test_text_forwarded_once_and_buffer_cleared() {
        let host = ScriptedInput {
            chars: vec!['h', 'é', '!'],
            ..ScriptedInput::default()
        };
        let mut translator = InputTranslator::default();
        let mut ui = ScriptedUi::new();

        translator.update(&host, &mut ui);
        assert!(ui.take_events().contains(&UiEvent::Text("hé!".to_string())));
        assert!(translator.chars.is_empty());

        translator.update(&ScriptedInput::default(), &mut ui);
        assert!(!ui.take_events().iter().any(|e| matches!(e, UiEvent::Text(_))));
    }

    #[test]
    fn test_keys_down_then_up() {
        let host = ScriptedInput {
            pressed_keys: vec![HostKey::Enter, HostKey::Control],
            released_keys: vec![HostKey::Shift],
            ..ScriptedInput::default()
        };
        let events = run(&host);

        assert_eq!(
            &events[1..],
            &[
                UiEvent::KeyDown(UiKeys::CTRL),
                UiEvent::KeyDown(UiKeys::RETURN),
                UiEvent::KeyUp(UiKeys::SHIFT),
            ]
        );
    }
}
