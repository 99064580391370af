//! Bitmap loading from disk

use std::path::Path;

use image::ImageReader;
use log::{debug, info};

use crate::errors::{ExtractError, ExtractResult};

use super::bitmap::{Bitmap, PixelSource};

/// Check whether the file extension names a raster format we decode
pub fn supports_format(file_path: &str) -> bool {
    let extension = Path::new(file_path)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("")
        .to_lowercase();

    matches!(extension.as_str(), "bmp" | "dib" | "png" | "tga" | "pnm" | "ppm")
}

/// Load and decode a level map bitmap
///
/// The format is detected from the file contents, so a mislabelled
/// extension still decodes. Any failure to open or decode the file is
/// reported as `ImageOpenFailure` naming `path`.
///
/// # Arguments
/// * `path` - Path to the bitmap file
///
/// # Returns
/// The decoded bitmap or an error
pub fn load_bitmap(path: &str) -> ExtractResult<Bitmap> {
    info!("Loading level map: {}", path);

    if !supports_format(path) {
        debug!("Unrecognised extension on {}, relying on content sniffing", path);
    }

    let reader = ImageReader::open(path)
        .map_err(|e| ExtractError::open_failure(path, e))?
        .with_guessed_format()
        .map_err(|e| ExtractError::open_failure(path, e))?;

    debug!("Detected format for {}: {:?}", path, reader.format());

    let image = reader
        .decode()
        .map_err(|e| ExtractError::open_failure(path, e))?;

    let bitmap = Bitmap::from_dynamic(&image);
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(ExtractError::open_failure(path, "image has no pixels"));
    }

    info!("Loaded {}x{} level map", bitmap.width(), bitmap.height());
    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Color;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_supports_format() {
        assert!(supports_format("level.bmp"));
        assert!(supports_format("LEVEL.BMP"));
        assert!(supports_format("entities.png"));
        assert!(!supports_format("level.tmx"));
        assert!(!supports_format("noextension"));
    }

    #[test]
    fn test_missing_file_is_open_failure() {
        let result = load_bitmap("definitely/not/here.bmp");
        match result {
            Err(ExtractError::ImageOpenFailure { path, .. }) => {
                assert_eq!(path, "definitely/not/here.bmp")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_transparent_png_pixels_load_as_background() {
        let name = format!("image_to_entities_alpha_{}.png", std::process::id());
        let path = std::env::temp_dir().join(name);

        let mut image = RgbaImage::from_pixel(2, 2, Rgba([40, 80, 120, 255]));
        image.put_pixel(1, 0, Rgba([40, 80, 120, 0]));
        image.put_pixel(0, 1, Rgba([40, 80, 120, 128]));
        image.save(&path).unwrap();

        let bitmap = load_bitmap(path.to_str().unwrap()).unwrap();
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.pixel(0, 0), Color::new(40, 80, 120));
        assert_eq!(bitmap.pixel(1, 0), Color::BLACK);
        assert_eq!(bitmap.pixel(0, 1), Color::new(40, 80, 120));
        let _ = std::fs::remove_file(&path);
    }
}
