//! Fixed-palette ANSI painting.
//!
//! Unlike `colored`'s string extensions this never looks at the terminal, so
//! the output is the same whether or not stdout is a TTY.

use colored::Color;
use std::str::FromStr;

pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Tint {
    fn color(self) -> Color {
        match self {
            Tint::Red => Color::Red,
            Tint::Green => Color::Green,
            Tint::Blue => Color::Blue,
            Tint::Yellow => Color::Yellow,
        }
    }

    pub fn prefix(self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }

    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.prefix(), text, RESET)
    }
}

impl FromStr for Tint {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Tint::Red),
            "green" => Ok(Tint::Green),
            "blue" => Ok(Tint::Blue),
            "yellow" => Ok(Tint::Yellow),
            _ => Err(()),
        }
    }
}

/// Wrap `text` in the escape sequence for `color`, or `None` for a color
/// outside the palette.
pub fn color_text(text: &str, color: &str) -> Option<String> {
    color.parse::<Tint>().ok().map(|tint| tint.paint(text))
}
