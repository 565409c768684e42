//! # Coordinate suggestion
//!
//! Candidate anchors for a word are found by lining one of its letters up with
//! the same letter already on the board. Candidates are not scored here; see
//! [`score`](crate::score).

use log::trace;

use crate::{
	grid::Grid,
	placement::{Orientation, Placement}
};

/// Propose every anchor that aligns some letter of the word with an equal
/// letter on the board, keeping the whole run inside the grid.
///
/// The scan order is fixed: letter index ascending, then rows top to bottom,
/// then columns left to right. Each matching cell yields its
/// [down](Orientation::Down) candidate before its
/// [across](Orientation::Across) candidate. Ties in
/// [generation](crate::generator::Generator) go to the earliest candidate, so
/// this order is part of the output contract.
///
/// # Arguments
///
/// * `grid` - The current board.
/// * `letters` - The normalized letters of the word.
///
/// # Returns
///
/// The candidates, in scan order. Duplicates are possible.
#[must_use]
pub fn suggest(grid: &Grid, letters: &[char]) -> Vec<Placement>
{
	let len = letters.len();
	let mut candidates = Vec::new();
	for (i, &c) in letters.iter().enumerate()
	{
		for row in 0 .. grid.rows()
		{
			for col in 0 .. grid.cols()
			{
				if grid.letter(row, col) != Some(c)
				{
					continue
				}
				if row >= i
				{
					let down = Placement::new(row - i, col, Orientation::Down);
					if down.fits(len, grid.rows(), grid.cols())
					{
						candidates.push(down);
					}
				}
				if col >= i
				{
					let across =
						Placement::new(row, col - i, Orientation::Across);
					if across.fits(len, grid.rows(), grid.cols())
					{
						candidates.push(across);
					}
				}
			}
		}
	}
	trace!("{} candidates for {:?}", candidates.len(), letters);
	candidates
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
