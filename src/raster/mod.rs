//! Raster access for level map bitmaps
//!
//! This module provides the pixel-level view the extractor works on,
//! plus loading of bitmap files from disk through the `image` crate.

mod color;
mod bitmap;
mod loader;

pub use color::Color;
pub use bitmap::{Bitmap, PixelSource};
pub use loader::{load_bitmap, supports_format};
