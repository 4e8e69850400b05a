//! Fixed-size 2D placement for grid-layout viewers

use crate::error::{ViewerError, ViewerResult};
use crate::model::StructureModel;

/// A fixed-size 2D array of optional structures
///
/// Dimensions are set at construction and never change. Every occupied cell
/// lies within `[0, rows) x [0, cols)`.
#[derive(Debug, Clone)]
pub struct ViewerGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<StructureModel>>,
}

impl ViewerGrid {
    /// Create an empty grid; both dimensions must be nonzero
    pub fn new(rows: usize, cols: usize) -> ViewerResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ViewerError::InvalidGrid { rows, cols });
        }
        Ok(ViewerGrid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinates lie within the grid dimensions
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The structure at a cell, if the cell is in bounds and occupied
    pub fn get(&self, row: usize, col: usize) -> Option<&StructureModel> {
        if !self.contains(row, col) {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// Place a structure at a cell, replacing any previous occupant
    pub fn place(&mut self, row: usize, col: usize, model: StructureModel) -> ViewerResult<()> {
        if !self.contains(row, col) {
            return Err(ViewerError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = Some(model);
        Ok(())
    }

    /// First empty cell in row-major order, if any
    pub fn next_free(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell.is_none())
            .map(|index| (index / self.cols, index % self.cols))
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty one cell, returning its previous occupant
    pub fn clear_cell(&mut self, row: usize, col: usize) -> ViewerResult<Option<StructureModel>> {
        if !self.contains(row, col) {
            return Err(ViewerError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row * self.cols + col].take())
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate over the rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<StructureModel>]> {
        self.cells.chunks(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molview_io::StructureFormat;

    fn model(name: &str) -> StructureModel {
        StructureModel {
            name: name.to_string(),
            data: "HEADER".to_string(),
            format: StructureFormat::Pdb,
            keep_hydrogens: false,
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            ViewerGrid::new(0, 2),
            Err(ViewerError::InvalidGrid { .. })
        ));
        assert!(matches!(
            ViewerGrid::new(2, 0),
            Err(ViewerError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_row_major_auto_placement() {
        let mut grid = ViewerGrid::new(2, 2).unwrap();
        let expected = [(0, 0), (0, 1), (1, 0), (1, 1)];
        for (i, &(row, col)) in expected.iter().enumerate() {
            assert_eq!(grid.next_free(), Some((row, col)));
            grid.place(row, col, model(&format!("m{}", i))).unwrap();
        }
        assert_eq!(grid.next_free(), None);
        assert_eq!(grid.occupied(), 4);
    }

    #[test]
    fn test_out_of_bounds_place() {
        let mut grid = ViewerGrid::new(2, 2).unwrap();
        assert!(matches!(
            grid.place(2, 0, model("m")),
            Err(ViewerError::OutOfBounds { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn test_clear_cell_is_symmetric() {
        let mut grid = ViewerGrid::new(1, 2).unwrap();
        grid.place(0, 1, model("m")).unwrap();
        assert_eq!(grid.occupied(), 1);

        let removed = grid.clear_cell(0, 1).unwrap();
        assert_eq!(removed.unwrap().name, "m");
        assert_eq!(grid.occupied(), 0);
        assert_eq!(grid.next_free(), Some((0, 0)));

        // Clearing an empty cell is a no-op, not an error.
        assert!(grid.clear_cell(0, 1).unwrap().is_none());
        assert!(grid.clear_cell(5, 5).is_err());
    }

    #[test]
    fn test_clear_all() {
        let mut grid = ViewerGrid::new(2, 2).unwrap();
        grid.place(0, 0, model("a")).unwrap();
        grid.place(1, 1, model("b")).unwrap();
        grid.clear();
        assert_eq!(grid.occupied(), 0);
    }
}
