//! # Grid
//!
//! The fixed-size board onto which words are placed. Cells are stored in
//! row-major order; every access is bounds-checked.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                   Cells.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A single grid cell: either empty or holding one letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Cell(Option<char>);

impl Cell
{
	/// The empty cell.
	pub const EMPTY: Self = Self(None);

	/// Construct a cell holding the given letter.
	#[inline]
	pub const fn letter(c: char) -> Self
	{
		Self(Some(c))
	}

	/// Check if the cell is empty.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool
	{
		self.0.is_none()
	}

	/// Get the letter in the cell, if any.
	#[inline]
	#[must_use]
	pub const fn char(&self) -> Option<char>
	{
		self.0
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Grid.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular board of [cells](Cell). The dimensions never change after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Grid
{
	/// The number of rows.
	rows: usize,

	/// The number of columns.
	cols: usize,

	/// The cells, linearized in row-major order.
	cells: Vec<Cell>
}

impl Grid
{
	/// Construct an empty grid of the given size.
	///
	/// # Arguments
	///
	/// * `rows` - The number of rows.
	/// * `cols` - The number of columns.
	///
	/// # Returns
	///
	/// The empty grid.
	pub fn new(rows: usize, cols: usize) -> Self
	{
		Self { rows, cols, cells: vec![Cell::EMPTY; rows * cols] }
	}

	/// Get the number of rows.
	#[inline]
	#[must_use]
	pub const fn rows(&self) -> usize
	{
		self.rows
	}

	/// Get the number of columns.
	#[inline]
	#[must_use]
	pub const fn cols(&self) -> usize
	{
		self.cols
	}

	/// Check that the cell storage matches the declared dimensions. Always
	/// true for grids built by [`new`](Self::new); a deserialized grid may
	/// violate it.
	#[inline]
	#[must_use]
	pub fn is_consistent(&self) -> bool
	{
		self.rows.checked_mul(self.cols) == Some(self.cells.len())
	}

	/// Check if the given coordinates lie within the grid.
	#[inline]
	#[must_use]
	pub const fn contains(&self, row: usize, col: usize) -> bool
	{
		row < self.rows && col < self.cols
	}

	/// Get the cell at the given coordinates.
	///
	/// # Returns
	///
	/// The cell, or `None` if the coordinates are out of bounds.
	#[inline]
	#[must_use]
	pub fn get(&self, row: usize, col: usize) -> Option<Cell>
	{
		if self.contains(row, col)
		{
			self.cells.get(row * self.cols + col).copied()
		}
		else
		{
			None
		}
	}

	/// Get the letter at the given coordinates.
	///
	/// # Returns
	///
	/// The letter, or `None` if the cell is empty or out of bounds.
	#[inline]
	#[must_use]
	pub fn letter(&self, row: usize, col: usize) -> Option<char>
	{
		self.get(row, col).and_then(|cell| cell.char())
	}

	/// Get the letter at a signed offset from the given coordinates. Offsets
	/// that leave the grid yield `None`, exactly like an empty cell.
	///
	/// # Arguments
	///
	/// * `row` - The base row.
	/// * `col` - The base column.
	/// * `dr` - The row offset.
	/// * `dc` - The column offset.
	#[inline]
	#[must_use]
	pub fn letter_offset(
		&self,
		row: usize,
		col: usize,
		dr: isize,
		dc: isize
	) -> Option<char>
	{
		let row = row.checked_add_signed(dr)?;
		let col = col.checked_add_signed(dc)?;
		self.letter(row, col)
	}

	/// Write a letter into the given cell. Out-of-bounds writes are ignored.
	///
	/// # Arguments
	///
	/// * `row` - The target row.
	/// * `col` - The target column.
	/// * `c` - The letter.
	pub(crate) fn set(&mut self, row: usize, col: usize, c: char)
	{
		if self.contains(row, col)
		{
			let cols = self.cols;
			if let Some(cell) = self.cells.get_mut(row * cols + col)
			{
				*cell = Cell::letter(c);
			}
		}
	}

	/// Iterate over the rows of the grid.
	#[inline]
	pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_
	{
		// `chunks` panics on zero, and a zero-width grid has no rows worth
		// showing anyway.
		self.cells.chunks(self.cols.max(1)).take(self.rows)
	}

	/// Count the occupied cells.
	#[must_use]
	pub fn occupied(&self) -> usize
	{
		self.cells.iter().filter(|cell| !cell.is_empty()).count()
	}
}

impl Display for Grid
{
	/// One line per row, with `.` for empty cells.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for row in self.iter_rows()
		{
			for cell in row
			{
				write!(f, "{}", cell.char().unwrap_or('.'))?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::grid::{Cell, Grid};

	/// Ensure that reads and writes are bounds-checked.
	#[test]
	fn test_bounds()
	{
		let mut grid = Grid::new(2, 3);
		assert!(grid.is_consistent());
		assert_eq!(grid.get(1, 2), Some(Cell::EMPTY));
		assert_eq!(grid.get(2, 0), None);
		assert_eq!(grid.get(0, 3), None);
		grid.set(1, 2, 'Q');
		grid.set(5, 5, 'Z');
		assert_eq!(grid.letter(1, 2), Some('Q'));
		assert_eq!(grid.letter_offset(0, 1, 1, 1), Some('Q'));
		assert_eq!(grid.letter_offset(0, 0, -1, 0), None);
		assert_eq!(grid.letter_offset(1, 2, 0, 1), None);
		assert_eq!(grid.occupied(), 1);
	}

	/// Ensure that the text preview shows every row.
	#[test]
	fn test_display()
	{
		let mut grid = Grid::new(2, 3);
		grid.set(0, 0, 'A');
		grid.set(1, 1, 'B');
		assert_eq!(grid.to_string(), "A..\n.B.\n");
	}
}
