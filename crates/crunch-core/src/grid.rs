//! Fixed-size two-dimensional storage.

use std::{
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::Position;

/// A `columns × rows` store mapping each cell to an optional occupant.
///
/// The dimensions are fixed at construction. Every access is bounds-checked and an
/// out-of-range coordinate panics: callers are expected to range-check first.
///
/// # Examples
///
/// ```
/// use crunch_core::{Grid, Position};
///
/// let mut grid = Grid::new(2, 3);
/// grid.set(1, 2, Some('x'));
/// assert_eq!(grid.get(1, 2), Some(&'x'));
/// assert_eq!(grid[Position::new(1, 2)], Some('x'));
/// assert_eq!(grid.iter().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(columns * rows);
        cells.resize_with(columns * rows, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns `true` if `(column, row)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows
    }

    #[track_caller]
    fn index_of(&self, column: usize, row: usize) -> usize {
        assert!(
            column < self.columns,
            "column {column} out of bounds (columns: {})",
            self.columns
        );
        assert!(
            row < self.rows,
            "row {row} out of bounds (rows: {})",
            self.rows
        );
        row * self.columns + column
    }

    /// Returns the occupant at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn get(&self, column: usize, row: usize) -> Option<&T> {
        self.cells[self.index_of(column, row)].as_ref()
    }

    /// Returns a mutable reference to the occupant at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut T> {
        let index = self.index_of(column, row);
        self.cells[index].as_mut()
    }

    /// Replaces the occupant at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[track_caller]
    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) {
        let index = self.index_of(column, row);
        self.cells[index] = value;
    }

    /// Exchanges the contents of two cells.
    ///
    /// Only storage moves; the occupants themselves are not touched.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, a: Position, b: Position) {
        let a = self.index_of(a.column, a.row);
        let b = self.index_of(b.column, b.row);
        self.cells.swap(a, b);
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.fill_with(|| None);
    }

    /// Returns all positions in row-major order, bottom row first.
    pub fn positions(&self) -> Positions {
        Positions {
            columns: self.columns,
            next: 0,
            end: self.columns * self.rows,
        }
    }

    /// Returns every occupied cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.positions()
            .zip(&self.cells)
            .filter_map(|(pos, cell)| cell.as_ref().map(|value| (pos, value)))
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = Option<T>;

    #[track_caller]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos.column, pos.row)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let index = self.index_of(pos.column, pos.row);
        &mut self.cells[index]
    }
}

/// Iterator over every position of a [`Grid`] in row-major order.
#[derive(Debug, Clone)]
pub struct Positions {
    columns: usize,
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pos = Position::new(self.next % self.columns, self.next / self.columns);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Positions {}
impl ExactSizeIterator for Positions {}
