use serde::{Deserialize, Deserializer};

use crate::Error;

/// An RGBA colour packed as `0xrrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    #[must_use]
    pub const fn new(rgba: u32) -> Self {
        Self(rgba)
    }

    #[must_use]
    pub const fn rgba_u32(&self) -> u32 {
        self.0
    }

    /// The colour as floating point `(r, g, b, a)` in the range `0.0..=1.0`.
    #[must_use]
    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        let channel = |shift: u32| f64::from((self.0 >> shift) & 0xff) / 255.0;

        (channel(24), channel(16), channel(8), channel(0))
    }
}

impl From<u32> for Color {
    fn from(rgba: u32) -> Self {
        Self(rgba)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let rgba = match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(|rgb| (rgb << 8) | 0xff),
            8 => u32::from_str_radix(hex, 16),
            _ => return Err(Error::InvalidColor(s.to_string())),
        }
        .map_err(|_| Error::InvalidColor(s.to_string()))?;

        Ok(Self(rgba))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Stock colours for the group box.
pub struct Palette;
#[allow(clippy::unreadable_literal)]
impl Palette {
    pub const WHITE: u32 = 0xffffffff;
    pub const GREY: u32 = 0x404040ff;
    pub const BLACK: u32 = 0x000000ff;
    pub const BLUE: u32 = 0x215578ff;
    pub const RED: u32 = 0xff0000ff;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_with_and_without_hash() {
        assert_eq!(Color::try_from("#215578").unwrap(), Color::new(0x215578ff));
        assert_eq!(Color::try_from("FF0000").unwrap(), Color::new(Palette::RED));
    }

    #[test]
    fn parses_rgba() {
        let color = Color::try_from("#11223344").unwrap();

        assert_eq!(color, Color::new(0x11223344));
        assert_eq!(color.rgba_u32(), 0x11223344);
    }

    #[test]
    fn rejects_bad_hex() {
        for bad in ["", "#fff", "12345g", "#1234567", "+12345"] {
            assert!(
                matches!(Color::try_from(bad), Err(Error::InvalidColor(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn float_channels() {
        let (r, g, b, a) = Color::new(0xff000080).rgba();

        assert!((r - 1.0).abs() < f64::EPSILON);
        assert!(g.abs() < f64::EPSILON);
        assert!(b.abs() < f64::EPSILON);
        assert!((a - 128.0 / 255.0).abs() < f64::EPSILON);
    }
}
