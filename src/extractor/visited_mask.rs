//! Visited mask for a single extraction run

use super::region::Rectangle;

/// Boolean grid recording which pixels already belong to an emitted rectangle
///
/// Stored as a flat row-major buffer indexed by `y * width + x`.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl VisitedMask {
    /// Allocate an all-false mask of the given size
    pub fn new(width: u32, height: u32) -> Self {
        VisitedMask {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` has been assigned; out-of-range pixels read as unvisited
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i])
    }

    /// Mark a single pixel; out-of-range pixels are ignored
    pub fn mark(&mut self, x: u32, y: u32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    /// Mark every pixel of `rect` that lies inside the mask
    pub fn mark_rect(&mut self, rect: &Rectangle) {
        let end_y = rect.end_y().min(self.height);
        let end_x = rect.end_x().min(self.width);
        if rect.x >= end_x {
            return;
        }
        for y in rect.y..end_y {
            let row = y as usize * self.width as usize;
            self.cells[row + rect.x as usize..row + end_x as usize].fill(true);
        }
    }

    /// Number of marked pixels
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unvisited() {
        let mask = VisitedMask::new(3, 2);
        assert_eq!(mask.count(), 0);
        assert!(!mask.is_visited(2, 1));
    }

    #[test]
    fn test_mark_rect() {
        let mut mask = VisitedMask::new(4, 4);
        mask.mark_rect(&Rectangle::new(1, 1, 2, 2));
        assert_eq!(mask.count(), 4);
        assert!(mask.is_visited(1, 1));
        assert!(mask.is_visited(2, 2));
        assert!(!mask.is_visited(3, 2));
        assert!(!mask.is_visited(0, 0));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut mask = VisitedMask::new(2, 2);
        mask.mark(5, 5);
        mask.mark_rect(&Rectangle::new(1, 1, 4, 4));
        assert!(!mask.is_visited(5, 5));
        assert_eq!(mask.count(), 1);
    }
}
