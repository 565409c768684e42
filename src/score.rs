//! # Placement scoring
//!
//! A fit score rates a candidate [`Placement`] against the current board:
//!
//! * [`ILLEGAL`] – the word collides with a different letter, or touches
//!   another word where it must not.
//! * [`ISOLATED`] – the word fits but crosses nothing.
//! * `N + 1` – the word fits and crosses `N` letters already on the board.

use crate::{
	grid::Grid,
	placement::{Orientation, Placement}
};

/// The score of a placement that may not be committed.
pub const ILLEGAL: usize = 0;

/// The score of a legal placement with no crossings.
pub const ISOLATED: usize = 1;

/// Score a candidate placement of the given letters.
///
/// The cells immediately before the first letter and after the last letter
/// must be empty. Each letter either lands on the same letter (a crossing) or
/// on an empty cell whose two perpendicular neighbours are also empty. Two
/// consecutive crossings mean the word would lie along another word running
/// the same way, so they are rejected too, as is a word that adds no new
/// letter to the board. Anything else is [`ILLEGAL`].
///
/// # Arguments
///
/// * `grid` - The current board.
/// * `letters` - The normalized letters of the word.
/// * `placement` - The candidate anchor and direction.
///
/// # Returns
///
/// The fit score.
#[must_use]
pub fn fit_score(grid: &Grid, letters: &[char], placement: Placement) -> usize
{
	if letters.is_empty()
		|| !placement.fits(letters.len(), grid.rows(), grid.cols())
	{
		return ILLEGAL
	}
	let (dr, dc) = placement.orientation.step();
	// The word must not extend another word end to end.
	let (first_row, first_col) = placement.cell(0);
	if grid.letter_offset(first_row, first_col, -dr, -dc).is_some()
	{
		return ILLEGAL
	}
	let (last_row, last_col) = placement.cell(letters.len() - 1);
	if grid.letter_offset(last_row, last_col, dr, dc).is_some()
	{
		return ILLEGAL
	}
	// The perpendicular neighbours of each newly filled cell.
	let sides: [(isize, isize); 2] = match placement.orientation
	{
		Orientation::Across => [(-1, 0), (1, 0)],
		Orientation::Down => [(0, -1), (0, 1)]
	};
	let mut score = ISOLATED;
	let mut crossed = false;
	for (i, &c) in letters.iter().enumerate()
	{
		let (row, col) = placement.cell(i);
		match grid.letter(row, col)
		{
			Some(existing) if existing == c =>
			{
				if crossed
				{
					return ILLEGAL
				}
				crossed = true;
				score += 1;
			},
			Some(_) => return ILLEGAL,
			None =>
			{
				crossed = false;
				let crowded = sides.iter()
					.any(|&(sr, sc)| {
						grid.letter_offset(row, col, sr, sc).is_some()
					});
				if crowded
				{
					return ILLEGAL
				}
			}
		}
	}
	if score - ISOLATED == letters.len()
	{
		return ILLEGAL
	}
	score
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
