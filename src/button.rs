use crate::entities::Rect;
use crate::settings::{Rgb, Settings};

const BUTTON_WIDTH: f32 = 20.0;
const BUTTON_HEIGHT: f32 = 3.0;

/// A labelled rectangle centred on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub button_color: Rgb,
    pub text_color: Rgb,
}

impl Button {
    pub fn new(settings: &Settings, label: &str) -> Self {
        let x = ((settings.screen_width - BUTTON_WIDTH) / 2.0).floor().max(0.0);
        let y = ((settings.screen_height - BUTTON_HEIGHT) / 2.0).floor().max(0.0);
        Button {
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            label: label.to_string(),
            button_color: (0, 160, 60),
            text_color: (255, 255, 255),
        }
    }

    /// Hit-test a click at terminal cell (`col`, `row`).
    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.rect.contains_point(col as f32, row as f32)
    }
}
