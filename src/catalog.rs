//! # Word catalog
//!
//! Herein is support for loading and ordering the candidate words of a
//! crossword. The [`WordCatalog`] fixes the order in which the
//! [generator](crate::generator::Generator) considers the words, and that
//! order materially affects which words make it onto the board.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	fs::File,
	io::{self, BufReader, ErrorKind},
	ops::Index,
	path::Path
};

use log::trace;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                   Words.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A candidate word and its clue. The text is kept exactly as given; matching
/// always goes through [`normalize`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Word
{
	/// The answer, as supplied by the word list.
	pub word: String,

	/// The clue shown to players. May be empty.
	#[serde(default)]
	pub clue: String
}

impl Word
{
	/// Construct a word with the given clue.
	///
	/// # Arguments
	///
	/// * `word` - The answer text.
	/// * `clue` - The clue text.
	///
	/// # Returns
	///
	/// The new word.
	#[inline]
	pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self
	{
		Self { word: word.into(), clue: clue.into() }
	}

	/// Get the letters of the word as they will appear in the grid.
	///
	/// # Returns
	///
	/// The normalized letters, in reading order.
	#[inline]
	#[must_use]
	pub fn letters(&self) -> Vec<char>
	{
		normalized_chars(&self.word).collect()
	}

	/// Get the normalized text of the word. Two words with the same key can
	/// never both be placed.
	///
	/// # Returns
	///
	/// The normalized text.
	#[inline]
	#[must_use]
	pub fn key(&self) -> String
	{
		normalize(&self.word)
	}

	/// Get the number of grid cells the word occupies.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		normalized_chars(&self.word).count()
	}

	/// Check if the word has no letters at all.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.len() == 0
	}
}

/// Normalize text for matching: whitespace is dropped and every letter is
/// upper-cased.
///
/// # Arguments
///
/// * `text` - The text to normalize.
///
/// # Returns
///
/// The normalized text.
#[must_use]
pub fn normalize(text: &str) -> String
{
	normalized_chars(text).collect()
}

/// The characters of `text` after normalization.
fn normalized_chars(text: &str) -> impl Iterator<Item = char> + '_
{
	text.chars()
		.filter(|c| !c.is_whitespace())
		.flat_map(char::to_uppercase)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Catalog.                                  //
////////////////////////////////////////////////////////////////////////////////

/// The ordered candidate words of a crossword. Words are sorted by decreasing
/// length; words of equal length keep their input order, so the same input
/// always yields the same catalog.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[must_use]
pub struct WordCatalog(Vec<Word>);

impl WordCatalog
{
	/// Construct a catalog from the given words. Duplicates are kept; the
	/// generator refuses to place the same text twice.
	///
	/// # Arguments
	///
	/// * `words` - The raw word list, in input order.
	///
	/// # Returns
	///
	/// The catalog, longest words first.
	pub fn new(mut words: Vec<Word>) -> Self
	{
		// `sort_by_key` is stable, which keeps equal-length words in input
		// order.
		words.sort_by_key(|word| std::cmp::Reverse(word.len()));
		Self(words)
	}

	/// Parse a catalog from a JSON array of `{"word": …, "clue": …}` records.
	///
	/// # Arguments
	///
	/// * `json` - The JSON text.
	///
	/// # Returns
	///
	/// The catalog.
	///
	/// # Errors
	///
	/// [`ErrorKind::InvalidData`] if the text is not a valid word list.
	pub fn parse_json(json: &str) -> Result<Self, io::Error>
	{
		let words: Vec<Word> = serde_json::from_str(json)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		Ok(Self::new(words))
	}

	/// Read a catalog from a JSON word list file.
	///
	/// # Arguments
	///
	/// * `path` - The word list file.
	///
	/// # Returns
	///
	/// The catalog.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file is not a valid word list, an [`ErrorKind::InvalidData`]
	///   is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path.as_ref())?;
		let words: Vec<Word> = serde_json::from_reader(BufReader::new(file))
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		trace!(
			"Read {} words from {}",
			words.len(),
			path.as_ref().display()
		);
		Ok(Self::new(words))
	}

	/// Get the words, in catalog order.
	#[inline]
	#[must_use]
	pub fn words(&self) -> &[Word]
	{
		&self.0
	}

	/// Get the word at the given catalog index, if any.
	#[inline]
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Word>
	{
		self.0.get(index)
	}

	/// Get the number of words in the catalog, duplicates included.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize
	{
		self.0.len()
	}

	/// Check if the catalog is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool
	{
		self.0.is_empty()
	}

	/// Get the length of the longest word, or `0` for an empty catalog.
	#[inline]
	#[must_use]
	pub fn longest(&self) -> usize
	{
		// The catalog is sorted, so the first word is the longest.
		self.0.first().map_or(0, Word::len)
	}

	/// Verify that the catalog can be handed to a generator for a grid of the
	/// given size. The generator itself performs no such check.
	///
	/// # Arguments
	///
	/// * `rows` - The number of grid rows.
	/// * `cols` - The number of grid columns.
	///
	/// # Errors
	///
	/// * [`CatalogError::Empty`] if there are no words.
	/// * [`CatalogError::EmptyWord`] if some word has no letters.
	/// * [`CatalogError::WordTooLong`] if some word fits neither across nor
	///   down.
	pub fn check_fits(&self, rows: usize, cols: usize) -> Result<(), CatalogError>
	{
		if self.is_empty()
		{
			return Err(CatalogError::Empty)
		}
		if self.0.iter().any(Word::is_empty)
		{
			return Err(CatalogError::EmptyWord)
		}
		let limit = rows.max(cols);
		match self.0.iter().find(|word| word.len() > limit)
		{
			Some(word) => Err(CatalogError::WordTooLong {
				word: word.word.clone(),
				limit
			}),
			None => Ok(())
		}
	}
}

impl Index<usize> for WordCatalog
{
	type Output = Word;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output
	{
		&self.0[index]
	}
}

impl FromIterator<Word> for WordCatalog
{
	fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self
	{
		Self::new(iter.into_iter().collect())
	}
}

/// The complete enumeration of [`WordCatalog`] validation errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError
{
	/// The catalog contains no words.
	Empty,

	/// Some word has no letters.
	EmptyWord,

	/// Some word is longer than the grid allows.
	WordTooLong {
		/// The offending word.
		word: String,

		/// The longest run the grid can hold.
		limit: usize
	}
}

impl Display for CatalogError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Empty => write!(f, "word list is empty"),
			Self::EmptyWord => write!(f, "word list contains a blank word"),
			Self::WordTooLong { word, limit } => write!(
				f,
				"word list contained word longer than grid size ({}): {}",
				limit,
				word
			)
		}
	}
}

impl Error for CatalogError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::catalog::{normalize, CatalogError, Word, WordCatalog};
	use std::io::Write;
	use tempfile::NamedTempFile;

	/// Ensure that the catalog sorts longest first and keeps input order
	/// among words of equal length.
	#[test]
	fn test_order()
	{
		let catalog = WordCatalog::new(vec![
			Word::new("cat", ""),
			Word::new("horse", ""),
			Word::new("dog", ""),
			Word::new("zebra", ""),
			Word::new("ox", "")
		]);
		let order = catalog.words().iter()
			.map(|w| w.word.as_str())
			.collect::<Vec<_>>();
		assert_eq!(order, vec!["horse", "zebra", "cat", "dog", "ox"]);
		assert_eq!(catalog.longest(), 5);
		assert_eq!(catalog.len(), 5);
	}

	/// Ensure that normalization ignores case and whitespace.
	#[test]
	fn test_normalize()
	{
		assert_eq!(normalize("Ice Cream"), "ICECREAM");
		assert_eq!(normalize("  tab\tle "), "TABLE");
		let word = Word::new("Ice Cream", "dessert");
		assert_eq!(word.len(), 8);
		assert_eq!(word.letters(), "ICECREAM".chars().collect::<Vec<_>>());
		assert_eq!(word.key(), "ICECREAM");
		assert!(Word::new("  ", "").is_empty());
	}

	/// Ensure that JSON word lists parse, with optional clues.
	#[test]
	fn test_parse_json()
	{
		let catalog = WordCatalog::parse_json(
			r#"[{"word": "cat", "clue": "Feline"}, {"word": "giraffe"}]"#
		).unwrap();
		assert_eq!(catalog[0], Word::new("giraffe", ""));
		assert_eq!(catalog[1], Word::new("cat", "Feline"));
		assert!(WordCatalog::parse_json("{").is_err());
		assert!(WordCatalog::parse_json(r#"[{"clue": "x"}]"#).is_err());
	}

	/// Ensure that word lists can be read from files.
	#[test]
	fn test_read_from_file()
	{
		let mut file = NamedTempFile::new().unwrap();
		write!(
			file,
			r#"[{{"word": "art", "clue": "Painting"}}, {{"word": "carton"}}]"#
		).unwrap();
		let catalog = WordCatalog::read_from_file(file.path()).unwrap();
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog[0].word, "carton");
		assert_eq!(catalog[1].clue, "Painting");
	}

	/// Ensure that grid size validation catches every bad case.
	#[test]
	fn test_check_fits()
	{
		let catalog = WordCatalog::from_iter([
			Word::new("crossword", ""),
			Word::new("cat", "")
		]);
		assert_eq!(catalog.check_fits(9, 9), Ok(()));
		assert_eq!(catalog.check_fits(5, 9), Ok(()));
		assert_eq!(
			catalog.check_fits(8, 8),
			Err(CatalogError::WordTooLong {
				word: "crossword".to_string(),
				limit: 8
			})
		);
		assert_eq!(
			WordCatalog::default().check_fits(5, 5),
			Err(CatalogError::Empty)
		);
		assert_eq!(
			WordCatalog::from_iter([Word::new(" ", "")]).check_fits(5, 5),
			Err(CatalogError::EmptyWord)
		);
	}
}
