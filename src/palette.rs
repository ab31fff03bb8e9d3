//! Display colours written by the grid helpers and the search engines.
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA colour, alpha in `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Translucent blue, `rgba(0, 0, 255, 0.6)`.
    pub const TRANSLUCENT_BLUE: Color = Color::rgba(0, 0, 255, 153);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

/// CSS-style `rgba(r, g, b, alpha)` with alpha as a fraction.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let alpha = (self.a as f32 / 255.0 * 100.0).round() / 100.0;
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// The colours a grid hands out. Engines only ever use [explored](Palette::explored).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub default: Color,
    pub wall: Color,
    pub start: Color,
    pub end: Color,
    pub explored: Color,
    pub path: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            default: Color::WHITE,
            wall: Color::BLACK,
            start: Color::GREEN,
            end: Color::RED,
            explored: Color::TRANSLUCENT_BLUE,
            path: Color::YELLOW,
        }
    }
}
