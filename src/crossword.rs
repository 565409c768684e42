//! # Crossword
//!
//! The finished puzzle: the board plus every placed word, in placement order.
//! This is the only thing the [generator](crate::generator::Generator) hands
//! out, and the only thing players and storage ever touch.

use std::{
	fmt::{self, Display, Formatter, Write as _},
	fs::File,
	io::{self, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
	catalog::normalize,
	grid::Grid,
	placement::{ActiveWord, Orientation}
};

////////////////////////////////////////////////////////////////////////////////
//                                 Crossword.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A generated crossword. Stored field for field, so saved games stay
/// loadable across releases that do not change these types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Crossword
{
	/// The board.
	pub grid: Grid,

	/// The placed words, in placement order. The first is the seed word.
	pub words: Vec<ActiveWord>
}

impl Crossword
{
	/// Construct a crossword from a board and its placed words.
	#[inline]
	pub fn new(grid: Grid, words: Vec<ActiveWord>) -> Self
	{
		Self { grid, words }
	}

	/// Get the number of placed words.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.words.len()
	}

	/// Check if no word was placed at all.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.words.is_empty()
	}

	/// Check that the board and the placed words agree: every letter of every
	/// word is on the board where the word says it is.
	#[must_use]
	pub fn is_consistent(&self) -> bool
	{
		self.grid.is_consistent()
			&& self.words.iter().all(|word| {
				word.cells()
					.zip(word.word.letters())
					.all(|((row, col), c)| self.grid.letter(row, col) == Some(c))
			})
	}

	/// Find a word by clue label, ignoring case, e.g. `3d` finds `3D`.
	///
	/// # Arguments
	///
	/// * `clue_id` - The clue label.
	///
	/// # Returns
	///
	/// The word, if any.
	#[must_use]
	pub fn find(&self, clue_id: &str) -> Option<&ActiveWord>
	{
		let clue_id = normalize(clue_id);
		self.words.iter().find(|w| w.clue_id().as_str() == clue_id)
	}

	/// Submit a player's answer for the given clue. The guess is compared
	/// with the answer ignoring case and whitespace; a correct guess marks the
	/// word solved.
	///
	/// # Arguments
	///
	/// * `clue_id` - The clue label, e.g. `3D`.
	/// * `guess` - The player's answer.
	///
	/// # Returns
	///
	/// The outcome of the submission.
	pub fn submit(&mut self, clue_id: &str, guess: &str) -> Answer
	{
		let clue_id = normalize(clue_id);
		let Some(word) = self.words.iter_mut()
			.find(|w| w.clue_id().as_str() == clue_id)
		else
		{
			trace!("no such clue: {}", clue_id);
			return Answer::UnknownClue
		};
		if word.solved
		{
			return Answer::AlreadySolved
		}
		if normalize(guess) == word.word.key()
		{
			debug!("solved: {}", clue_id);
			word.solved = true;
			Answer::Correct
		}
		else
		{
			Answer::Incorrect
		}
	}

	/// Get the number of solved words.
	#[inline]
	#[must_use]
	pub fn solved(&self) -> usize
	{
		self.words.iter().filter(|w| w.solved).count()
	}

	/// Check if every placed word has been solved.
	#[inline]
	#[must_use]
	pub fn is_complete(&self) -> bool
	{
		self.words.iter().all(|w| w.solved)
	}

	/// Mark every word unsolved.
	pub fn reset(&mut self)
	{
		self.words.iter_mut().for_each(|w| w.solved = false);
	}

	/// Check if the given cell belongs to some solved word, so its letter may
	/// be shown to players.
	#[must_use]
	pub fn is_revealed(&self, row: usize, col: usize) -> bool
	{
		self.words.iter().any(|w| w.solved && w.covers(row, col))
	}

	/// Get the words in clue order: down clues, then across clues, each by
	/// number.
	#[must_use]
	pub fn clue_order(&self) -> Vec<&ActiveWord>
	{
		let mut words = self.words.iter().collect::<Vec<_>>();
		words.sort_by_key(|w| (w.orientation == Orientation::Across, w.number));
		words
	}

	/// Render the clue list: unsolved down clues, unsolved across clues, then
	/// the solved clues.
	///
	/// # Returns
	///
	/// The clue list, one clue per line.
	#[must_use]
	pub fn clues(&self) -> String
	{
		let order = self.clue_order();
		let sections = [
			(
				"DOWN",
				order.iter()
					.filter(|w| !w.solved && w.orientation == Orientation::Down)
					.collect::<Vec<_>>()
			),
			(
				"ACROSS",
				order.iter()
					.filter(|w| !w.solved && w.orientation == Orientation::Across)
					.collect::<Vec<_>>()
			),
			("SOLVED", order.iter().filter(|w| w.solved).collect::<Vec<_>>())
		];
		let mut out = String::new();
		for (title, words) in sections.iter().filter(|(_, w)| !w.is_empty())
		{
			if !out.is_empty()
			{
				out.push('\n');
			}
			// Writing to a `String` cannot fail.
			let _ = writeln!(out, "{}", title);
			for word in words
			{
				let _ = writeln!(out, "{}", clue_line(word));
			}
		}
		out
	}

	/// Render the crossword as pretty-printed JSON.
	///
	/// # Errors
	///
	/// [`ErrorKind::InvalidData`] if serialization fails.
	pub fn to_json(&self) -> Result<String, io::Error>
	{
		serde_json::to_string_pretty(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
	}

	/// Deserialize a crossword from the given file. The file must contain a
	/// serialized crossword in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// The crossword deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, or a board that disagrees with
	///   its words, an [`ErrorKind::InvalidData`] is returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let crossword: Self = bincode::deserialize(&content)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		if !crossword.is_consistent()
		{
			return Err(io::Error::new(
				ErrorKind::InvalidData,
				"board disagrees with placed words"
			))
		}
		Ok(crossword)
	}

	/// Serialize the crossword to the given file, in [`bincode`](bincode)
	/// format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be created or written, an error is returned.
	/// * If serialization fails, an [`ErrorKind::InvalidData`] is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let content = bincode::serialize(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		let mut file = File::create(path)?;
		file.write_all(&content)?;
		Ok(())
	}
}

impl Display for Crossword
{
	/// The placed words, one per line, then the board.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for word in &self.words
		{
			writeln!(f, "{}", word)?;
		}
		write!(f, "{}", self.grid)
	}
}

/// Render a single clue line, e.g. `[3D | 5 letters] Striped horse`.
#[must_use]
pub fn clue_line(word: &ActiveWord) -> String
{
	format!(
		"[{} | {} letters] {}",
		word.clue_id(),
		word.word.len(),
		word.word.clue
	)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Answers.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The outcome of [submitting](Crossword::submit) an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer
{
	/// The answer was right; the word is now solved.
	Correct,

	/// The word had already been solved.
	AlreadySolved,

	/// The answer was wrong.
	Incorrect,

	/// No placed word has that clue label.
	UnknownClue
}

impl Display for Answer
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Correct => write!(f, "correct"),
			Self::AlreadySolved => write!(f, "already solved"),
			Self::Incorrect => write!(f, "incorrect"),
			Self::UnknownClue => write!(f, "no such clue")
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
