//! Cell grid mapping screen positions to span ids.

/// A hit testing grid that maps cell positions to span ids.
///
/// Regions outside the grid are clipped. Later registrations win where
/// regions overlap.
#[derive(Clone, Debug)]
pub struct HitGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<u32>>,
}

impl HitGrid {
    /// Create an empty grid. Uses saturating multiplication for the cell count.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        (idx < self.cells.len()).then_some(idx)
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Register a single-row run of `len` cells starting at `(x, y)`.
    pub fn register_run(&mut self, x: u32, y: u32, len: u32, id: u32) {
        if y >= self.height {
            return;
        }
        for col in x..x.saturating_add(len).min(self.width) {
            if let Some(idx) = self.cell_index(col, y) {
                self.cells[idx] = Some(id);
            }
        }
    }

    /// The id registered at a position.
    #[must_use]
    pub fn test(&self, x: u32, y: u32) -> Option<u32> {
        self.cell_index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Resize the grid, clearing all registrations.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for HitGrid {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_test() {
        let mut grid = HitGrid::new(20, 3);
        grid.register_run(4, 1, 6, 7);

        assert_eq!(grid.test(4, 1), Some(7));
        assert_eq!(grid.test(9, 1), Some(7));
        assert_eq!(grid.test(10, 1), None);
        assert_eq!(grid.test(4, 0), None);
    }

    #[test]
    fn test_overlap_last_wins() {
        let mut grid = HitGrid::new(20, 1);
        grid.register_run(0, 0, 10, 1);
        grid.register_run(5, 0, 10, 2);
        assert_eq!(grid.test(4, 0), Some(1));
        assert_eq!(grid.test(5, 0), Some(2));
    }

    #[test]
    fn test_clipping() {
        let mut grid = HitGrid::new(10, 2);
        grid.register_run(8, 0, 100, 3);
        grid.register_run(0, 5, 4, 4);
        assert_eq!(grid.test(9, 0), Some(3));
        assert_eq!(grid.test(10, 0), None);
        assert_eq!(grid.test(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut grid = HitGrid::default();
        assert_eq!(grid.size(), (80, 24));
        grid.register_run(0, 0, 5, 1);
        grid.clear();
        assert_eq!(grid.test(0, 0), None);

        grid.register_run(0, 0, 5, 1);
        grid.resize(4, 4);
        assert_eq!(grid.size(), (4, 4));
        assert_eq!(grid.test(0, 0), None);
    }

    #[test]
    fn test_zero_size() {
        let mut grid = HitGrid::new(0, 0);
        grid.register_run(0, 0, 1, 1);
        assert_eq!(grid.test(0, 0), None);
    }
}
