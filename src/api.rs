use log::info;

use crate::errors::ExtractResult;
use crate::extractor::{ExtractOptions, Rectangle, RectangleExtractor};
use crate::output::{self, OutputFormat};
use crate::raster::{self, PixelSource};
use crate::utils::progress::ProgressTracker;

/// Main interface to the library
///
/// Wraps loading, extraction and rendering behind a single type so callers
/// do not have to wire the modules together themselves.
#[derive(Clone, Default)]
pub struct ImageToEntities {
    extractor: RectangleExtractor,
    show_progress: bool,
}

impl ImageToEntities {
    /// Create a new instance with the given extraction options
    pub fn new(options: ExtractOptions) -> Self {
        ImageToEntities {
            extractor: RectangleExtractor::new(options),
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while scanning files
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        self.extractor.options()
    }

    /// Extract rectangles from an already decoded image
    pub fn extract_image<P: PixelSource + ?Sized>(&self, image: &P) -> Vec<Rectangle> {
        self.extractor.extract(image)
    }

    /// Load a bitmap file and extract its rectangles
    ///
    /// # Arguments
    /// * `input_path` - Path to the level map bitmap
    ///
    /// # Returns
    /// Rectangles in scan order, or `ImageOpenFailure` if the file is unusable
    pub fn extract_file(&self, input_path: &str) -> ExtractResult<Vec<Rectangle>> {
        let bitmap = raster::load_bitmap(input_path)?;

        let rectangles = if self.show_progress {
            let rows = self.extractor.scan_rows(bitmap.height()) as u64;
            let tracker = ProgressTracker::new(rows, input_path);
            self.extractor.clone().with_progress(tracker).extract(&bitmap)
        } else {
            self.extractor.extract(&bitmap)
        };

        info!("{}: {} rectangles", input_path, rectangles.len());
        Ok(rectangles)
    }

    /// Load a bitmap file and render its rectangles as JSON
    pub fn to_json(&self, input_path: &str, format: OutputFormat) -> ExtractResult<String> {
        let rectangles = self.extract_file(input_path)?;
        output::render(&rectangles, format)
    }
}
