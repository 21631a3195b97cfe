use ratatui::style::Color;

use crate::services::Settings;

#[derive(Debug, Clone)]
pub struct ClockTheme {
    pub face: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub show_hour_marks: bool,
}

impl Default for ClockTheme {
    fn default() -> Self {
        Self {
            face: Color::White,
            minute_hand: Color::Cyan,
            second_hand: Color::Red,
            show_hour_marks: true,
        }
    }
}

impl ClockTheme {
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            face: parse_color(&settings.face_color).unwrap_or(defaults.face),
            minute_hand: parse_color(&settings.minute_hand_color).unwrap_or(defaults.minute_hand),
            second_hand: parse_color(&settings.second_hand_color).unwrap_or(defaults.second_hand),
            show_hour_marks: settings.show_hour_marks,
        }
    }
}

fn parse_color(value: &str) -> Option<Color> {
    match value.trim().parse() {
        Ok(color) => Some(color),
        Err(_) => {
            tracing::warn!(value, "unknown color in settings");
            None
        }
    }
}
