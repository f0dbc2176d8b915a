//! Scripted stand-ins for the host engine and the UI library

use image::RgbaImage;

use crate::context::UiContext;
use crate::fonts::{FontMetrics, GlyphFace};
use crate::foundation::math::{Color, ColorScale, Rect, Transform2D};
use crate::input::{HostInput, HostKey, MouseButton, MouseButtons, UiInput, UiKeys};
use crate::render::{ClippedSurface, CommandSink, DrawCommand, DrawOptions, UiCommand};
use crate::style::TextMetrics;

/// DejaVu Sans Mono, see `assets/DejaVuSansMono-LICENSE.txt`
pub static MONO_TTF: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Monospace glyph face at `size` pixels
pub fn mono_face(size: f32) -> GlyphFace {
    GlyphFace::from_bytes(MONO_TTF, size).unwrap()
}

/// Host input snapshot for one tick
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub cursor: (i32, i32),
    pub pressed_buttons: Vec<MouseButton>,
    pub released_buttons: Vec<MouseButton>,
    pub wheel: (f64, f64),
    pub chars: Vec<char>,
    pub pressed_keys: Vec<HostKey>,
    pub released_keys: Vec<HostKey>,
}

impl HostInput for ScriptedInput {
    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }

    fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    fn is_mouse_button_just_released(&self, button: MouseButton) -> bool {
        self.released_buttons.contains(&button)
    }

    fn wheel(&self) -> (f64, f64) {
        self.wheel
    }

    fn append_input_chars(&self, buffer: &mut Vec<char>) {
        buffer.extend_from_slice(&self.chars);
    }

    fn is_key_just_pressed(&self, key: HostKey) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn is_key_just_released(&self, key: HostKey) -> bool {
        self.released_keys.contains(&key)
    }
}

/// Input event received by [`ScriptedUi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    MouseMove(i32, i32),
    MouseDown(i32, i32, MouseButtons),
    MouseUp(i32, i32, MouseButtons),
    Scroll(i32, i32),
    Text(String),
    KeyDown(UiKeys),
    KeyUp(UiKeys),
}

/// UI context that records input and replays a fixed command list
#[derive(Debug, Default)]
pub struct ScriptedUi {
    events: Vec<UiEvent>,
    frame: Vec<DrawCommand>,
    metrics: Option<TextMetrics>,
    pub render_calls: usize,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the commands emitted on every render pass
    pub fn set_frame(&mut self, frame: Vec<DrawCommand>) {
        self.frame = frame;
    }

    pub const fn metrics(&self) -> Option<&TextMetrics> {
        self.metrics.as_ref()
    }
}

fn as_ui_command(command: &DrawCommand) -> UiCommand<'_> {
    match command {
        DrawCommand::Text(cmd) => UiCommand::Text {
            font: cmd.font,
            pos: cmd.pos,
            color: cmd.color,
            text: &cmd.text,
        },
        DrawCommand::Rect(cmd) => UiCommand::Rect {
            rect: cmd.rect,
            color: cmd.color,
        },
        DrawCommand::Icon(cmd) => UiCommand::Icon {
            id: cmd.id,
            rect: cmd.rect,
            color: cmd.color,
        },
        DrawCommand::Clip(cmd) => UiCommand::Clip { rect: cmd.rect },
    }
}

impl UiInput for ScriptedUi {
    fn input_mouse_move(&mut self, x: i32, y: i32) {
        self.events.push(UiEvent::MouseMove(x, y));
    }

    fn input_mouse_down(&mut self, x: i32, y: i32, buttons: MouseButtons) {
        self.events.push(UiEvent::MouseDown(x, y, buttons));
    }

    fn input_mouse_up(&mut self, x: i32, y: i32, buttons: MouseButtons) {
        self.events.push(UiEvent::MouseUp(x, y, buttons));
    }

    fn input_scroll(&mut self, x: i32, y: i32) {
        self.events.push(UiEvent::Scroll(x, y));
    }

    fn input_text(&mut self, text: &str) {
        self.events.push(UiEvent::Text(text.to_string()));
    }

    fn input_key_down(&mut self, key: UiKeys) {
        self.events.push(UiEvent::KeyDown(key));
    }

    fn input_key_up(&mut self, key: UiKeys) {
        self.events.push(UiEvent::KeyUp(key));
    }
}

impl UiContext for ScriptedUi {
    fn set_text_metrics(&mut self, metrics: TextMetrics) {
        self.metrics = Some(metrics);
    }

    fn render(&mut self, sink: &mut dyn CommandSink) {
        self.render_calls += 1;
        sink.begin_frame();
        for command in &self.frame {
            sink.command(as_ui_command(command));
        }
        sink.end_frame();
    }
}

/// Font drawing one 8x10 box per character
pub struct BoxFont;

impl FontMetrics for BoxFont {
    fn draw(&self, target: &mut ClippedSurface<'_>, text: &str, x: i32, y: i32, color: Color) {
        let pixel = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        for (i, _) in text.chars().enumerate() {
            let options = DrawOptions {
                transform: Transform2D::identity()
                    .scale(8.0, 10.0)
                    .translate((x + i as i32 * 8) as f32, y as f32),
                color_scale: ColorScale::from_color(color),
            };
            target.draw_image(&pixel, Rect::from_size(1, 1), &options);
        }
    }

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * 8
    }

    fn text_height(&self) -> i32 {
        10
    }
}
