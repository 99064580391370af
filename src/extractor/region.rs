//! Rectangle structure for extracted regions
//!
//! A rectangle covers the half-open pixel range `[x, x+width) x [y, y+height)`
//! in the usual image coordinate system where (0,0) is the top-left corner.

use serde::Serialize;

/// One painted block of uniform non-black colour
///
/// Serializes with exactly the fields `x`, `y`, `width` and `height`.
/// The representative colour is the pixel at `(x, y)` in the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the rectangle in pixels
    pub width: u32,

    /// Height of the rectangle in pixels
    pub height: u32,
}

impl Rectangle {
    /// Create a new rectangle
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rectangle { x, y, width, height }
    }

    /// X-coordinate immediately right of the rectangle (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Y-coordinate immediately below the rectangle (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the pixel `(x, y)` lies inside the rectangle
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Whether two rectangles share at least one pixel
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x < other.end_x()
            && other.x < self.end_x()
            && self.y < other.end_y()
            && other.y < self.end_y()
    }

    /// Iterate over every pixel coordinate in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.end_y()).flat_map(move |y| (self.x..self.end_x()).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(2, 3, 4, 5);
        assert_eq!(rect.end_x(), 6);
        assert_eq!(rect.end_y(), 8);
        assert_eq!(rect.area(), 20);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 7));
        assert!(!rect.contains(5, 8));
    }

    #[test]
    fn test_intersects() {
        let a = Rectangle::new(0, 0, 2, 2);
        assert!(a.intersects(&Rectangle::new(1, 1, 2, 2)));
        // Touching edges do not overlap
        assert!(!a.intersects(&Rectangle::new(2, 0, 2, 2)));
        assert!(!a.intersects(&Rectangle::new(0, 2, 2, 2)));
    }

    #[test]
    fn test_pixels_row_major() {
        let rect = Rectangle::new(1, 1, 2, 2);
        let pixels: Vec<_> = rect.pixels().collect();
        assert_eq!(pixels, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }
}
