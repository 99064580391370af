//! Greedy rectangle extraction over a level map
//!
//! Pixels are scanned in row-major order. Every unvisited non-black pixel
//! seeds a rectangle which is first grown to the right as far as the seed
//! colour continues, then grown downwards one full row at a time. The
//! covered pixels are marked visited so later seeds skip them.

use log::{debug, info, trace};
use serde::Deserialize;

use crate::raster::{Color, PixelSource};
use crate::utils::progress::ProgressTracker;

use super::region::Rectangle;
use super::visited_mask::VisitedMask;

/// Knobs controlling the scan
///
/// The defaults describe the behaviour level assets are built against:
/// the last image row is never used as a scan origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Also start rectangles on the last image row
    pub scan_last_row: bool,

    /// Reproduce the geometry of the old C++ converter: growth ignores the
    /// visited mask and the first failing row is counted into the height
    pub legacy_geometry: bool,
}

/// Partitions the non-black pixels of an image into rectangles
#[derive(Clone, Default)]
pub struct RectangleExtractor {
    options: ExtractOptions,
    progress: Option<ProgressTracker>,
}

impl RectangleExtractor {
    /// Create an extractor with the given options
    pub fn new(options: ExtractOptions) -> Self {
        RectangleExtractor {
            options,
            progress: None,
        }
    }

    /// Report one tick per scanned row to `tracker`
    pub fn with_progress(mut self, tracker: ProgressTracker) -> Self {
        self.progress = Some(tracker);
        self
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Number of rows used as scan origins for an image of `height` rows
    pub fn scan_rows(&self, height: u32) -> u32 {
        if self.options.scan_last_row {
            height
        } else {
            height.saturating_sub(1)
        }
    }

    /// Extract rectangles in scan order
    ///
    /// Deterministic and total: the same image always yields the same
    /// rectangles in the same order.
    ///
    /// # Arguments
    /// * `image` - The level map to scan
    ///
    /// # Returns
    /// Rectangles ordered by their top-left pixel in row-major order
    pub fn extract<P: PixelSource + ?Sized>(&self, image: &P) -> Vec<Rectangle> {
        let width = image.width();
        let height = image.height();
        let scan_rows = self.scan_rows(height);

        info!("Scanning {}x{} image ({} origin rows)", width, height, scan_rows);

        let mut visited = VisitedMask::new(width, height);
        let mut rectangles = Vec::new();

        for y in 0..scan_rows {
            for x in 0..width {
                if visited.is_visited(x, y) {
                    continue;
                }

                let color = image.pixel(x, y);
                if color.is_black() {
                    continue;
                }

                let box_width = self.grow_width(image, &visited, x, y, color);
                let box_height = self.grow_height(image, &visited, x, y, box_width, color);

                let rect = Rectangle::new(x, y, box_width, box_height);
                visited.mark_rect(&rect);

                debug!("Rectangle {} at ({}, {}) size {}x{}", color, x, y, box_width, box_height);
                rectangles.push(rect);
            }

            if let Some(progress) = &self.progress {
                progress.increment(1);
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        info!("Extracted {} rectangles covering {} pixels", rectangles.len(), visited.count());
        rectangles
    }

    /// Count matching pixels rightwards from the seed, seed included
    fn grow_width<P: PixelSource + ?Sized>(
        &self,
        image: &P,
        visited: &VisitedMask,
        x: u32,
        y: u32,
        color: Color,
    ) -> u32 {
        let legacy = self.options.legacy_geometry;
        (x..image.width())
            .take_while(|&px| {
                (legacy || !visited.is_visited(px, y)) && image.pixel(px, y) == color
            })
            .count() as u32
    }

    /// Count rows below the seed (seed row included) whose whole span matches
    fn grow_height<P: PixelSource + ?Sized>(
        &self,
        image: &P,
        visited: &VisitedMask,
        x: u32,
        y: u32,
        box_width: u32,
        color: Color,
    ) -> u32 {
        let legacy = self.options.legacy_geometry;
        let max_rows = image.height() - y;

        for offset in 0..max_rows {
            let row = y + offset;
            let row_matches = (x..x + box_width).all(|px| {
                (legacy || !visited.is_visited(px, row)) && image.pixel(px, row) == color
            });

            if !row_matches {
                trace!("Row {} stops growth of rectangle at ({}, {})", row, x, y);
                return if legacy { offset + 1 } else { offset };
            }
        }

        max_rows
    }
}

/// Extract rectangles with the default options
pub fn extract<P: PixelSource + ?Sized>(image: &P) -> Vec<Rectangle> {
    RectangleExtractor::default().extract(image)
}
