//! RGB colour triple

use image::{Rgb, Rgba};

/// A pixel colour, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background colour of a level map
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Black pixels are background and never become rectangles
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<&Rgb<u8>> for Color {
    fn from(pixel: &Rgb<u8>) -> Self {
        Color::new(pixel[0], pixel[1], pixel[2])
    }
}

/// Fully transparent pixels collapse to background
impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        if pixel[3] == 0 {
            Color::BLACK
        } else {
            Color::new(pixel[0], pixel[1], pixel[2])
        }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_detection() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0, 0, 1).is_black());
        assert!(!Color::new(255, 0, 0).is_black());
    }

    #[test]
    fn test_transparent_pixel_is_background() {
        assert_eq!(Color::from(Rgba([200, 10, 10, 0])), Color::BLACK);
        assert_eq!(Color::from(Rgba([200, 10, 10, 1])), Color::new(200, 10, 10));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Color::new(10, 20, 255).to_string(), "#0a14ff");
    }
}
