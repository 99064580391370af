//! Rectangle extraction from level map rasters
//!
//! This module turns the non-black pixels of an image into a sequence of
//! non-overlapping rectangles of uniform colour.

mod region;
mod visited_mask;
mod rect_extractor;

// Public exports
pub use region::Rectangle;
pub use visited_mask::VisitedMask;
pub use rect_extractor::{extract, ExtractOptions, RectangleExtractor};
