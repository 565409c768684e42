//! # Placements
//!
//! Where a word sits on the board. A [`Placement`] is a candidate anchor and
//! direction; an [`ActiveWord`] is a committed placement, numbered within its
//! orientation by the [`ActiveWordRegistry`].

use std::{
	collections::HashSet,
	fmt::{self, Display, Formatter}
};

use fixedstr::str8;
use serde::{Deserialize, Serialize};

use crate::catalog::Word;

////////////////////////////////////////////////////////////////////////////////
//                                Orientation.                                //
////////////////////////////////////////////////////////////////////////////////

/// The direction of a word's run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation
{
	/// Horizontal, left to right.
	Across,

	/// Vertical, top to bottom.
	Down
}

impl Orientation
{
	/// The `(row, column)` step from one letter to the next.
	#[inline]
	#[must_use]
	pub const fn step(self) -> (isize, isize)
	{
		match self
		{
			Self::Across => (0, 1),
			Self::Down => (1, 0)
		}
	}

	/// The suffix used in clue labels.
	#[inline]
	#[must_use]
	pub const fn suffix(self) -> char
	{
		match self
		{
			Self::Across => 'A',
			Self::Down => 'D'
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                Placements.                                 //
////////////////////////////////////////////////////////////////////////////////

/// An anchor coordinate and direction for a word's first letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Placement
{
	/// The row of the first letter.
	pub row: usize,

	/// The column of the first letter.
	pub col: usize,

	/// The direction of the run.
	pub orientation: Orientation
}

impl Placement
{
	/// Construct a placement.
	#[inline]
	pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self
	{
		Self { row, col, orientation }
	}

	/// Get the coordinates of the `i`-th letter of the run.
	#[inline]
	#[must_use]
	pub const fn cell(&self, i: usize) -> (usize, usize)
	{
		match self.orientation
		{
			Orientation::Across => (self.row, self.col + i),
			Orientation::Down => (self.row + i, self.col)
		}
	}

	/// Check that a run of `len` letters stays inside a grid of the given
	/// size.
	#[inline]
	#[must_use]
	pub const fn fits(&self, len: usize, rows: usize, cols: usize) -> bool
	{
		match self.orientation
		{
			Orientation::Across => self.row < rows && self.col + len <= cols,
			Orientation::Down => self.col < cols && self.row + len <= rows
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Active words.                                //
////////////////////////////////////////////////////////////////////////////////

/// A clue label such as `12A` or `3D`.
pub type ClueId = str8;

/// A word committed to the board. Position, orientation, and number never
/// change after placement; only `solved` is updated, by gameplay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ActiveWord
{
	/// The placed word and its clue.
	pub word: Word,

	/// The row of the first letter.
	pub row: usize,

	/// The column of the first letter.
	pub col: usize,

	/// The direction of the run.
	pub orientation: Orientation,

	/// The 1-based sequence number within the orientation.
	pub number: usize,

	/// Whether a player has answered this word.
	#[serde(default)]
	pub solved: bool
}

impl ActiveWord
{
	/// Get the placement of the word.
	#[inline]
	pub const fn placement(&self) -> Placement
	{
		Placement::new(self.row, self.col, self.orientation)
	}

	/// Get the clue label, e.g. `3D`.
	#[must_use]
	pub fn clue_id(&self) -> ClueId
	{
		ClueId::from(
			format!("{}{}", self.number, self.orientation.suffix()).as_str()
		)
	}

	/// Iterate over the `(row, column)` coordinates of every letter.
	pub fn cells(&self) -> impl Iterator<Item = (usize, usize)>
	{
		let placement = self.placement();
		(0 .. self.word.len()).map(move |i| placement.cell(i))
	}

	/// Check if the word covers the given cell.
	#[must_use]
	pub fn covers(&self, row: usize, col: usize) -> bool
	{
		let len = self.word.len();
		match self.orientation
		{
			Orientation::Across =>
				row == self.row && col >= self.col && col < self.col + len,
			Orientation::Down =>
				col == self.col && row >= self.row && row < self.row + len
		}
	}
}

impl Display for ActiveWord
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(
			f,
			"{} {} ({}, {})",
			self.clue_id(),
			self.word.word,
			self.row,
			self.col
		)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Registry.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The append-only record of committed placements. Membership is keyed on
/// normalized word text, so a repeated word can never be placed twice.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct ActiveWordRegistry
{
	/// The committed words, in placement order.
	words: Vec<ActiveWord>,

	/// The normalized text of every committed word.
	placed: HashSet<String>,

	/// The number of words placed across so far.
	across: usize,

	/// The number of words placed down so far.
	down: usize
}

impl ActiveWordRegistry
{
	/// Construct an empty registry.
	#[inline]
	pub fn new() -> Self
	{
		Self::default()
	}

	/// Check if a word with the same text has already been committed.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &Word) -> bool
	{
		self.placed.contains(&word.key())
	}

	/// Record a committed placement, assigning the next number in its
	/// orientation.
	///
	/// # Arguments
	///
	/// * `word` - The placed word.
	/// * `placement` - Where the word was placed.
	///
	/// # Returns
	///
	/// The new active word.
	pub fn register(&mut self, word: Word, placement: Placement) -> &ActiveWord
	{
		let counter = match placement.orientation
		{
			Orientation::Across => &mut self.across,
			Orientation::Down => &mut self.down
		};
		*counter += 1;
		let number = *counter;
		self.placed.insert(word.key());
		self.words.push(ActiveWord {
			word,
			row: placement.row,
			col: placement.col,
			orientation: placement.orientation,
			number,
			solved: false
		});
		&self.words[self.words.len() - 1]
	}

	/// Get the committed words, in placement order.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &[ActiveWord]
	{
		&self.words
	}

	/// Get the number of committed words.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.words.len()
	}

	/// Check if nothing has been committed yet.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.words.is_empty()
	}

	/// Take the committed words, in placement order.
	#[inline]
	#[must_use]
	pub fn into_words(self) -> Vec<ActiveWord>
	{
		self.words
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		catalog::Word,
		placement::{ActiveWordRegistry, Orientation, Placement}
	};

	/// Ensure that each orientation is numbered independently, starting at 1.
	#[test]
	fn test_numbering()
	{
		let mut registry = ActiveWordRegistry::new();
		let cases = [
			("alpha", Orientation::Across, "1A"),
			("bravo", Orientation::Down, "1D"),
			("charlie", Orientation::Down, "2D"),
			("delta", Orientation::Across, "2A"),
			("echo", Orientation::Down, "3D")
		];
		for (text, orientation, expected) in cases
		{
			let active = registry.register(
				Word::new(text, ""),
				Placement::new(0, 0, orientation)
			);
			assert_eq!(active.clue_id().as_str(), expected, "{}", text);
			assert!(!active.solved);
		}
		assert_eq!(registry.len(), 5);
		let order = registry.words().iter()
			.map(|w| w.word.word.as_str())
			.collect::<Vec<_>>();
		assert_eq!(order, vec!["alpha", "bravo", "charlie", "delta", "echo"]);
	}

	/// Ensure that membership ignores case and whitespace.
	#[test]
	fn test_contains()
	{
		let mut registry = ActiveWordRegistry::new();
		assert!(registry.is_empty());
		registry.register(
			Word::new("Ice Cream", "first"),
			Placement::new(1, 1, Orientation::Across)
		);
		assert!(registry.contains(&Word::new("icecream", "second")));
		assert!(registry.contains(&Word::new("ICE CREAM", "")));
		assert!(!registry.contains(&Word::new("ice", "")));
	}

	/// Ensure that runs are laid out and bounded correctly.
	#[test]
	fn test_cells_and_fits()
	{
		let mut registry = ActiveWordRegistry::new();
		let down = registry.register(
			Word::new("cat", ""),
			Placement::new(1, 2, Orientation::Down)
		).clone();
		assert_eq!(
			down.cells().collect::<Vec<_>>(),
			vec![(1, 2), (2, 2), (3, 2)]
		);
		assert!(down.covers(3, 2));
		assert!(!down.covers(4, 2));
		assert!(!down.covers(2, 1));
		assert!(Placement::new(2, 0, Orientation::Across).fits(5, 5, 5));
		assert!(!Placement::new(2, 1, Orientation::Across).fits(5, 5, 5));
		assert!(Placement::new(0, 4, Orientation::Down).fits(5, 5, 5));
		assert!(!Placement::new(1, 4, Orientation::Down).fits(5, 5, 5));
		assert!(!Placement::new(0, 5, Orientation::Down).fits(1, 5, 5));
	}
}
