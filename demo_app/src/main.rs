//! Headless bridge demo
//!
//! Drives a toy immediate-mode UI (one panel, a button, a checkbox and a
//! text field) through the bridge with scripted host input, and reports what
//! each frame would have drawn.
//!
//! Arguments, in any order:
//! - a `.toml` or `.ron` driver config path to override the defaults
//! - a `.ttf` or `.otf` font path to draw text with instead of the host's
//!   debug font

use ui_bridge::backend::{RecordingSurface, SurfaceCall};
use std::path::Path;
use std::sync::Arc;

use ui_bridge::prelude::*;
use ui_bridge::atlas::{ICON_CHECK, ICON_CLOSE};
use ui_bridge::render::DrawCommand;

const FONT_SIZE: f32 = 16.0;

const SCREEN_WIDTH: i32 = 640;
const SCREEN_HEIGHT: i32 = 480;

const PANEL: Rect = Rect::new(40, 40, 240, 160);
const BUTTON: Rect = Rect::new(56, 80, 96, 24);
const CHECKBOX: Rect = Rect::new(56, 116, 16, 16);
const FIELD: Rect = Rect::new(56, 148, 192, 24);

/// Minimal immediate-mode UI: widgets are rebuilt every frame from input
#[derive(Default)]
struct DemoUi {
    mouse: (i32, i32),
    mouse_down: bool,
    clicked: bool,
    scroll: i32,
    checked: bool,
    clicks: u32,
    field: String,
    shift: bool,
    metrics: Option<TextMetrics>,
    commands: Vec<DrawCommand>,
}

impl DemoUi {
    fn text_width(&self, text: &str) -> i32 {
        self.metrics
            .as_ref()
            .map_or(0, |metrics| metrics.text_width(FontHandle::DEFAULT, text))
    }

    fn push(&mut self, command: UiCommand<'_>) {
        self.commands.push(command.into());
    }

    fn label(&mut self, text: &str, x: i32, y: i32) {
        self.push(UiCommand::Text {
            font: FontHandle::DEFAULT,
            pos: Vec2i::new(x, y),
            color: Color::new(230, 230, 230, 255),
            text,
        });
    }

    /// Build this frame's widgets
    fn frame(&mut self) {
        self.commands.clear();
        let (mx, my) = self.mouse;
        let clicked = std::mem::take(&mut self.clicked);

        self.push(UiCommand::Clip { rect: PANEL });
        self.push(UiCommand::Rect {
            rect: PANEL,
            color: Color::new(50, 50, 50, 255),
        });
        self.label("Bridge demo", PANEL.x + 8, PANEL.y + 8);
        self.push(UiCommand::Icon {
            id: ICON_CLOSE,
            rect: Rect::new(PANEL.right() - 20, PANEL.y + 4, 16, 16),
            color: Color::WHITE,
        });

        let hovered = BUTTON.contains_point(mx, my);
        if hovered && clicked {
            self.clicks += 1;
        }
        let shade = if hovered && self.mouse_down { 120 } else { 80 };
        self.push(UiCommand::Rect {
            rect: BUTTON,
            color: Color::new(shade, shade, shade, 255),
        });
        let label = format!("Clicked {}", self.clicks);
        let label_x = BUTTON.x + (BUTTON.w - self.text_width(&label)) / 2;
        self.label(&label, label_x, BUTTON.y + 4);

        if CHECKBOX.contains_point(mx, my) && clicked {
            self.checked = !self.checked;
        }
        self.push(UiCommand::Rect {
            rect: CHECKBOX,
            color: Color::new(30, 30, 30, 255),
        });
        if self.checked {
            self.push(UiCommand::Icon {
                id: ICON_CHECK,
                rect: CHECKBOX,
                color: Color::WHITE,
            });
        }

        // Text field content scrolls horizontally under its own clip
        self.push(UiCommand::Clip { rect: FIELD });
        self.push(UiCommand::Rect {
            rect: FIELD,
            color: Color::new(20, 20, 20, 255),
        });
        let field = self.field.clone();
        self.label(&field, FIELD.x + 4 + self.scroll, FIELD.y + 4);

        // Collapsed section: nothing inside should reach the screen
        self.push(UiCommand::Clip {
            rect: Rect::new(0, 0, 0, 0),
        });
        self.label("hidden", PANEL.x, PANEL.bottom());
        self.push(UiCommand::Clip {
            rect: Rect::from_size(SCREEN_WIDTH, SCREEN_HEIGHT),
        });
    }
}

impl UiInput for DemoUi {
    fn input_mouse_move(&mut self, x: i32, y: i32) {
        self.mouse = (x, y);
    }

    fn input_mouse_down(&mut self, _x: i32, _y: i32, buttons: MouseButtons) {
        if buttons.contains(MouseButtons::LEFT) {
            self.mouse_down = true;
        }
    }

    fn input_mouse_up(&mut self, _x: i32, _y: i32, buttons: MouseButtons) {
        if buttons.contains(MouseButtons::LEFT) && self.mouse_down {
            self.mouse_down = false;
            self.clicked = true;
        }
    }

    fn input_scroll(&mut self, _x: i32, y: i32) {
        self.scroll = (self.scroll + y).min(0);
    }

    fn input_text(&mut self, text: &str) {
        if self.shift {
            self.field.push_str(&text.to_uppercase());
        } else {
            self.field.push_str(text);
        }
    }

    fn input_key_down(&mut self, key: UiKeys) {
        if key.contains(UiKeys::SHIFT) {
            self.shift = true;
        }
        if key.contains(UiKeys::BACKSPACE) {
            self.field.pop();
        }
    }

    fn input_key_up(&mut self, key: UiKeys) {
        if key.contains(UiKeys::SHIFT) {
            self.shift = false;
        }
    }
}

impl UiContext for DemoUi {
    fn set_text_metrics(&mut self, metrics: TextMetrics) {
        self.metrics = Some(metrics);
    }

    fn render(&mut self, sink: &mut dyn CommandSink) {
        sink.begin_frame();
        for command in &self.commands {
            let command = match command {
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
            };
            sink.command(command);
        }
        sink.end_frame();
    }
}

/// Scripted host input, one step per tick
#[derive(Default)]
struct ScriptedHost {
    tick: usize,
}

impl ScriptedHost {
    const fn cursor(&self) -> (i32, i32) {
        match self.tick {
            0..=2 => (BUTTON.x + 10, BUTTON.y + 10),
            3..=4 => (CHECKBOX.x + 4, CHECKBOX.y + 4),
            _ => (FIELD.x + 10, FIELD.y + 10),
        }
    }
}

impl HostInput for ScriptedHost {
    fn cursor_position(&self) -> (i32, i32) {
        self.cursor()
    }

    fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        button == MouseButton::Left && matches!(self.tick, 1 | 3)
    }

    fn is_mouse_button_just_released(&self, button: MouseButton) -> bool {
        button == MouseButton::Left && matches!(self.tick, 2 | 4)
    }

    fn wheel(&self) -> (f64, f64) {
        if self.tick == 7 {
            (0.0, 0.2)
        } else {
            (0.0, 0.0)
        }
    }

    fn append_input_chars(&self, buffer: &mut Vec<char>) {
        match self.tick {
            5 => buffer.extend("hello".chars()),
            6 => buffer.extend("world".chars()),
            _ => {}
        }
    }

    fn is_key_just_pressed(&self, key: HostKey) -> bool {
        matches!((self.tick, key), (6, HostKey::Shift) | (7, HostKey::Backspace))
    }

    fn is_key_just_released(&self, key: HostKey) -> bool {
        matches!((self.tick, key), (7, HostKey::Shift))
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

fn load_options() -> Result<DriverOptions, Box<dyn std::error::Error>> {
    let mut options = DriverOptions::new();
    let mut font = None;
    let mut configured = false;

    for arg in std::env::args().skip(1) {
        let path = Path::new(&arg);
        if has_extension(path, &["ttf", "otf"]) {
            log::info!("Loading default font from {}", path.display());
            font = Some(GlyphFace::from_bytes(&std::fs::read(path)?, FONT_SIZE)?);
        } else {
            log::info!("Loading driver config from {}", path.display());
            let config = DriverConfig::load_from_file(path)?;
            options = DriverOptions::from_config(&config)?;
            configured = true;
        }
    }

    if let Some(face) = font {
        options = options.with_default_font(Arc::new(Font::from_face(face)));
        // The UI positions text by its top edge; the face draws from the baseline
        if !configured {
            options = options.with_default_font_offset(0, 12);
        }
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ui_bridge::foundation::logging::init();

    log::info!("Starting headless bridge demo");

    let mut ui = DemoUi::default();
    let mut driver = Driver::new(&mut ui, load_options()?)?;
    let mut host = ScriptedHost::default();
    let mut surface = RecordingSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    for tick in 0..8 {
        host.tick = tick;
        driver.update_inputs(&host, &mut ui);
        ui.frame();
        let stats = driver.draw(&mut ui, &mut surface);

        let calls = surface.take_calls();
        let texts: Vec<&str> = calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::DebugText { text, .. } => Some(text.as_str()),
                SurfaceCall::Image { .. } => None,
            })
            .collect();
        log::info!(
            "Tick {}: {} commands, {} draw calls ({} images), {} clipped, debug text {:?}",
            tick,
            stats.commands,
            stats.draw_calls,
            calls.len() - texts.len(),
            stats.skipped,
            texts
        );
    }

    log::info!(
        "Final state: {} clicks, checkbox {}, field {:?}",
        ui.clicks,
        if ui.checked { "on" } else { "off" },
        ui.field
    );
    Ok(())
}
