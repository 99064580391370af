//! In-memory RGB raster and the pixel access trait
//!
//! The extractor only needs the image dimensions and a per-pixel colour
//! lookup, so it is written against `PixelSource` rather than a concrete
//! image type.

use image::{DynamicImage, RgbImage};

use super::color::Color;

/// Read-only access to a 2-D grid of RGB pixels
pub trait PixelSource {
    /// Width of the raster in pixels
    fn width(&self) -> u32;

    /// Height of the raster in pixels
    fn height(&self) -> u32;

    /// Colour of the pixel at `(x, y)`
    ///
    /// Callers must stay within `width() x height()`.
    fn pixel(&self, x: u32, y: u32) -> Color;
}

/// Decoded level map held as a flat row-major buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Create a bitmap filled with a single colour
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Bitmap {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Create a bitmap by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Bitmap { width, height, pixels }
    }

    /// Build a bitmap from equally sized rows, top row first
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: &[Vec<Color>]) -> Option<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;

        if rows.iter().any(|row| row.len() as u32 != width) {
            return None;
        }

        Some(Bitmap {
            width,
            height,
            pixels: rows.concat(),
        })
    }

    /// Convert a decoded image, treating fully transparent pixels as background
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        if image.color().has_alpha() {
            let rgba = image.to_rgba8();
            Bitmap {
                width: rgba.width(),
                height: rgba.height(),
                pixels: rgba.pixels().map(|p| Color::from(*p)).collect(),
            }
        } else {
            let rgb = image.to_rgb8();
            Bitmap::from(&rgb)
        }
    }

    /// Overwrite a single pixel
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = color;
        }
    }

    /// Fill the rectangle `[x, x+width) x [y, y+height)`, clipped to the bitmap
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        for py in y..y.saturating_add(height).min(self.height) {
            for px in x..x.saturating_add(width).min(self.width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Copy into an `image` buffer, e.g. for saving to disk
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self.pixel(x, y).into())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl From<&RgbImage> for Bitmap {
    fn from(image: &RgbImage) -> Self {
        Bitmap {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(Color::from).collect(),
        }
    }
}

impl PixelSource for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from(self.get_pixel(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![RED, RED], vec![RED]];
        assert!(Bitmap::from_rows(&rows).is_none());
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let rows = vec![vec![RED, Color::BLACK], vec![Color::BLACK, RED]];
        let bitmap = Bitmap::from_rows(&rows).unwrap();
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.pixel(1, 0), Color::BLACK);
        assert_eq!(bitmap.pixel(1, 1), RED);
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut bitmap = Bitmap::new(3, 3, Color::BLACK);
        bitmap.fill_rect(2, 2, 5, 5, RED);
        assert_eq!(bitmap.pixel(2, 2), RED);
        assert_eq!(bitmap.pixel(1, 2), Color::BLACK);
    }

    #[test]
    fn test_rgb_image_pixel_source() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(1, 0, Rgb([1, 2, 3]));
        assert_eq!(PixelSource::width(&image), 2);
        assert_eq!(PixelSource::pixel(&image, 1, 0), Color::new(1, 2, 3));
        assert_eq!(Bitmap::from(&image).to_rgb_image(), image);
    }
}
