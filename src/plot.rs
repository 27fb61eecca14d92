//! Minimal 3D figures rendered to SVG.
//!
//! A [`Figure`] collects lines, scatter series, labels and arrows in data
//! coordinates. Rendering scales the data box to the figure's box aspect,
//! projects it orthographically with a [`View`] and writes SVG markup.

pub mod figure;
pub mod svg;
pub mod view;

pub use figure::{Anchor, Arrow, Figure, Line, Scatter, Text};
pub use view::View;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);
impl Color {
  pub const BLACK: Self = Self(0, 0, 0);
  pub const WHITE: Self = Self(255, 255, 255);
  pub const RED: Self = Self(255, 0, 0);
  pub const BLUE: Self = Self(0, 0, 255);
  pub const GREY: Self = Self(176, 176, 176);
}
impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
  }
}

/// Default color cycle (tab10).
pub const COLOR_CYCLE: [Color; 10] = [
  Color(0x1f, 0x77, 0xb4),
  Color(0xff, 0x7f, 0x0e),
  Color(0x2c, 0xa0, 0x2c),
  Color(0xd6, 0x27, 0x28),
  Color(0x94, 0x67, 0xbd),
  Color(0x8c, 0x56, 0x4b),
  Color(0xe3, 0x77, 0xc2),
  Color(0x7f, 0x7f, 0x7f),
  Color(0xbc, 0xbd, 0x22),
  Color(0x17, 0xbe, 0xcf),
];

/// Canvas settings independent of the figure content.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
  pub width: f64,
  pub height: f64,
  /// Free space around the projected axes box.
  pub margin: f64,
  pub font_family: String,
  pub background: Color,
}
impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      width: 640.0,
      height: 560.0,
      margin: 48.0,
      font_family: String::from("DejaVu Sans, Arial, sans-serif"),
      background: Color::WHITE,
    }
  }
}
impl RenderOptions {
  pub fn with_size(mut self, width: f64, height: f64) -> Self {
    self.width = width;
    self.height = height;
    self
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn color_hex() {
    assert_eq!(Color::RED.to_string(), "#ff0000");
    assert_eq!(COLOR_CYCLE[0].to_string(), "#1f77b4");
  }
}
