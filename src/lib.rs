pub mod errors;
pub mod raster;
pub mod extractor;
pub mod output;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ImageToEntities;

pub use errors::{ExtractError, ExtractResult};
pub use extractor::{extract, ExtractOptions, Rectangle, RectangleExtractor, VisitedMask};
pub use output::OutputFormat;
pub use raster::{Bitmap, Color, PixelSource};
