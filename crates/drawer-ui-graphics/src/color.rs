//! Color representation and parsing

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses the color strings style sheets accept for backgrounds:
    /// `#rgb`, `#rrggbb`, `#rrggbbaa` and a handful of named colors.
    pub fn from_css(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(input));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "gray" | "grey" => Ok(Color::from_rgb_u8(128, 128, 128)),
            "transparent" => Ok(Color::TRANSPARENT),
            _ => Err(ColorParseError::new(input)),
        }
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_css(s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let short = |index: usize| channel(index..index + 1).map(|v| v * 17);
    match hex.len() {
        3 => Some(Color::from_rgb_u8(short(0)?, short(1)?, short(2)?)),
        6 => Some(Color::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Some(Color::from_rgba_u8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color {:?}", self.input)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
