use crate::error::EngineError;

/// A single grid cell. Pure value, no identity beyond its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub alive: bool,
}

/// A square, bounded, non-wrapping buffer of [`Cell`]s.
///
/// Coordinates are `(x, y)` where `x` indexes rows and `y` indexes
/// columns, both in `[0, size)`. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid of `size × size` cells.
    ///
    /// The dimension is taken as `i32` so that a negative request (e.g.
    /// from a UI form) is representable and rejected rather than
    /// silently wrapped.
    pub fn new(size: i32) -> Result<Self, EngineError> {
        if size < 0 {
            return Err(EngineError::InvalidDimension(size));
        }
        let size = size as usize;
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if x >= self.size || y >= self.size {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(x * self.size + y)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), EngineError> {
        let i = self.index(x, y)?;
        self.cells[i].alive = alive;
        Ok(())
    }

    /// Unchecked access for crate-internal loops whose coordinates are
    /// already known to be in bounds.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[x * self.size + y]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[x * self.size + y]
    }

    /// Kills every cell, keeping the dimension.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Iterates every coordinate/cell pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.size, i % self.size, cell))
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }
}
