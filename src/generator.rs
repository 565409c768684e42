//! # Generator
//!
//! Herein is the placement engine. A [`Generator`] force-places a seed word
//! across the middle row, then makes a bounded number of passes over the
//! remaining words, committing each word at its best-scoring crossing. A word
//! that finds no crossing in one pass may find one in the next, once other
//! words have put more letters on the board.
//!
//! The engine never fails. Words that cannot be placed are simply missing
//! from the resulting [`Crossword`]; callers compare counts and decide whether
//! to accept the result or retry, e.g. via [`generate_best`].

use log::{debug, trace, warn};

use crate::{
	catalog::{Word, WordCatalog},
	crossword::Crossword,
	grid::Grid,
	placement::{ActiveWordRegistry, Orientation, Placement},
	score::{fit_score, ISOLATED},
	suggest::suggest
};

////////////////////////////////////////////////////////////////////////////////
//                                 Generator.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The complete state of one generation run. A generator owns its board and
/// numbering outright and is consumed by [`generate`](Self::generate), so a
/// fresh generator is needed for every crossword.
#[derive(Clone, Debug)]
#[must_use]
pub struct Generator
{
	/// The board under construction.
	grid: Grid,

	/// The candidate words, longest first.
	catalog: WordCatalog,

	/// The words committed so far.
	registry: ActiveWordRegistry
}

impl Generator
{
	/// Construct a generator for an empty board of the given size. The caller
	/// is responsible for checking that the words can fit at all; see
	/// [`WordCatalog::check_fits`].
	///
	/// # Arguments
	///
	/// * `rows` - The number of board rows.
	/// * `cols` - The number of board columns.
	/// * `catalog` - The candidate words.
	///
	/// # Returns
	///
	/// The new generator.
	pub fn new(rows: usize, cols: usize, catalog: WordCatalog) -> Self
	{
		Self {
			grid: Grid::new(rows, cols),
			catalog,
			registry: ActiveWordRegistry::new()
		}
	}

	/// Build the crossword.
	///
	/// # Arguments
	///
	/// * `seed` - The catalog index of the word to force-place first.
	/// * `passes` - The number of passes over the remaining words.
	///
	/// # Returns
	///
	/// The crossword. If the seed word does not fit across the board (or the
	/// index is out of range), nothing can cross it and the crossword is
	/// empty.
	pub fn generate(mut self, seed: usize, passes: usize) -> Crossword
	{
		self.place_seed(seed);
		for pass in 1 ..= passes
		{
			let placed = self.run_pass();
			debug!("pass {}: placed {} words", pass, placed);
			if placed == 0
			{
				// Nothing changed, so every later pass would see the same
				// board and place nothing either.
				trace!("stopping after pass {}", pass);
				break
			}
		}
		debug!(
			"placed {} of {} words",
			self.registry.len(),
			self.catalog.len()
		);
		Crossword::new(self.grid, self.registry.into_words())
	}

	/// Force-place the seed word across, starting in the first column of the
	/// middle row.
	///
	/// # Arguments
	///
	/// * `seed` - The catalog index of the seed word.
	fn place_seed(&mut self, seed: usize)
	{
		let Some(word) = self.catalog.get(seed)
		else
		{
			warn!(
				"seed index {} out of range for {} words",
				seed,
				self.catalog.len()
			);
			return
		};
		let letters = word.letters();
		let placement =
			Placement::new(self.grid.rows() / 2, 0, Orientation::Across);
		if letters.is_empty()
			|| !placement.fits(letters.len(), self.grid.rows(), self.grid.cols())
		{
			warn!(
				"seed word does not fit a {}×{} board: {}",
				self.grid.rows(),
				self.grid.cols(),
				word.word
			);
			return
		}
		trace!("seed: {}", word.word);
		commit(
			&mut self.grid,
			&mut self.registry,
			word.clone(),
			&letters,
			placement
		);
	}

	/// Attempt to place every word not yet on the board.
	///
	/// # Returns
	///
	/// The number of words placed during the pass.
	fn run_pass(&mut self) -> usize
	{
		let Self { grid, catalog, registry } = self;
		let mut placed = 0;
		for word in catalog.words()
		{
			if registry.contains(word)
			{
				continue
			}
			let letters = word.letters();
			match best_placement(grid, &letters)
			{
				Some((placement, score)) if score > ISOLATED =>
				{
					trace!("placing {} at {:?} ({})", word.word, placement, score);
					commit(grid, registry, word.clone(), &letters, placement);
					placed += 1;
				},
				_ => trace!("no crossing for {}", word.word)
			}
		}
		placed
	}
}

/// Find the best-scoring candidate placement for the given letters. Ties go
/// to the earliest candidate in [scan order](suggest).
///
/// # Arguments
///
/// * `grid` - The current board.
/// * `letters` - The normalized letters of the word.
///
/// # Returns
///
/// The best placement and its score, or `None` if no candidate is legal.
fn best_placement(grid: &Grid, letters: &[char]) -> Option<(Placement, usize)>
{
	let mut best: Option<(Placement, usize)> = None;
	for placement in suggest(grid, letters)
	{
		let score = fit_score(grid, letters, placement);
		if score > best.map_or(0, |(_, top)| top)
		{
			best = Some((placement, score));
		}
	}
	best
}

/// Write the word onto the board and record it.
///
/// # Arguments
///
/// * `grid` - The board.
/// * `registry` - The record of committed words.
/// * `word` - The word to commit.
/// * `letters` - The normalized letters of the word.
/// * `placement` - Where to put it.
fn commit(
	grid: &mut Grid,
	registry: &mut ActiveWordRegistry,
	word: Word,
	letters: &[char],
	placement: Placement
) {
	for (i, &c) in letters.iter().enumerate()
	{
		let (row, col) = placement.cell(i);
		grid.set(row, col, c);
	}
	registry.register(word, placement);
}

////////////////////////////////////////////////////////////////////////////////
//                                  Retries.                                  //
////////////////////////////////////////////////////////////////////////////////

/// Generate one crossword per seed index in `0 .. seeds` and keep the one
/// with the most placed words. The earliest seed wins ties. At least one
/// crossword is always generated.
///
/// # Arguments
///
/// * `rows` - The number of board rows.
/// * `cols` - The number of board columns.
/// * `catalog` - The candidate words.
/// * `seeds` - How many leading catalog words to try as the seed.
/// * `passes` - The number of passes per attempt.
///
/// # Returns
///
/// The fullest crossword.
pub fn generate_best(
	rows: usize,
	cols: usize,
	catalog: &WordCatalog,
	seeds: usize,
	passes: usize
) -> Crossword
{
	let attempts = seeds.min(catalog.len()).max(1);
	let mut best: Option<Crossword> = None;
	for seed in 0 .. attempts
	{
		let crossword =
			Generator::new(rows, cols, catalog.clone()).generate(seed, passes);
		debug!("seed {}: {} words", seed, crossword.len());
		if best.as_ref().map_or(true, |b| crossword.len() > b.len())
		{
			best = Some(crossword);
		}
		if best.as_ref().is_some_and(|b| b.len() == catalog.len())
		{
			// Nothing can beat a full board.
			break
		}
	}
	best.unwrap_or_default()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::{
		catalog::{Word, WordCatalog},
		crossword::Crossword,
		generator::{generate_best, Generator},
		placement::Orientation
	};

	/// Build a catalog of clueless words.
	fn catalog(words: &[&str]) -> WordCatalog
	{
		words.iter().map(|w| Word::new(*w, "")).collect()
	}

	/// A larger word list for exercising the invariants.
	const ANIMALS: [&str; 24] = [
		"elephant", "giraffe", "kangaroo", "alligator", "antelope",
		"crocodile", "dolphin", "hamster", "leopard", "penguin",
		"rabbit", "turtle", "weasel", "badger", "donkey", "ferret",
		"lizard", "monkey", "otter", "tiger", "zebra", "camel", "horse",
		"goat"
	];

	/// Check every structural invariant of a generated crossword:
	///
	/// * Every placed letter is on the board where its word says.
	/// * Every word but the seed crosses an earlier word.
	/// * Every maximal run of two or more letters, in either direction, is
	///   exactly one placed word.
	fn check_invariants(crossword: &Crossword)
	{
		assert!(crossword.is_consistent());
		for (k, word) in crossword.words.iter().enumerate().skip(1)
		{
			let crosses = word.cells().any(|(row, col)| {
				crossword.words[.. k].iter().any(|w| w.covers(row, col))
			});
			assert!(crosses, "{} crosses nothing", word);
		}
		let grid = &crossword.grid;
		for orientation in [Orientation::Across, Orientation::Down]
		{
			let (outer, inner) = match orientation
			{
				Orientation::Across => (grid.rows(), grid.cols()),
				Orientation::Down => (grid.cols(), grid.rows())
			};
			for a in 0 .. outer
			{
				let at = |b: usize| match orientation
				{
					Orientation::Across => (a, b),
					Orientation::Down => (b, a)
				};
				let filled = |b: usize| {
					let (row, col) = at(b);
					grid.letter(row, col).is_some()
				};
				let mut b = 0;
				while b < inner
				{
					if !filled(b)
					{
						b += 1;
						continue
					}
					let start = b;
					while b < inner && filled(b)
					{
						b += 1;
					}
					let len = b - start;
					if len < 2
					{
						continue
					}
					let (row, col) = at(start);
					let owners = crossword.words.iter()
						.filter(|w| {
							w.orientation == orientation
								&& w.row == row
								&& w.col == col
								&& w.word.len() == len
						})
						.count();
					assert_eq!(
						owners,
						1,
						"{:?} run of {} at ({}, {})\n{}",
						orientation,
						len,
						row,
						col,
						crossword
					);
				}
			}
		}
	}

	/// Three words sharing letters all make it onto a small board.
	#[test]
	fn test_shared_letters()
	{
		let crossword =
			Generator::new(5, 5, catalog(&["CAT", "CAR", "ART"])).generate(0, 2);
		assert_eq!(crossword.len(), 3);
		let seed = &crossword.words[0];
		assert_eq!(seed.word.word, "CAT");
		assert_eq!((seed.row, seed.col), (2, 0));
		assert_eq!(seed.orientation, Orientation::Across);
		assert_eq!(seed.number, 1);
		assert_eq!(crossword.words[1].word.word, "CAR");
		assert_eq!(crossword.words[1].orientation, Orientation::Down);
		assert_eq!(crossword.words[2].word.word, "ART");
		assert_eq!(crossword.words[2].orientation, Orientation::Down);
		assert_eq!(crossword.words[2].number, 2);
		check_invariants(&crossword);
	}

	/// Words with nothing in common with the seed are never placed.
	#[test]
	fn test_no_shared_letters()
	{
		for passes in [0, 1, 5]
		{
			let crossword = Generator::new(
				10,
				10,
				catalog(&["BOX", "CUP", "HIM", "JET"])
			).generate(0, passes);
			assert_eq!(crossword.len(), 1, "{} passes", passes);
			assert_eq!(crossword.words[0].word.word, "BOX");
		}
	}

	/// A repeated word is placed only once, whatever the case.
	#[test]
	fn test_duplicates()
	{
		let crossword = Generator::new(
			15,
			15,
			catalog(&["banana", "apple", "Apple", "APPLE"])
		).generate(0, 3);
		let apples = crossword.words.iter()
			.filter(|w| w.word.key() == "APPLE")
			.count();
		assert_eq!(apples, 1);
		assert_eq!(crossword.len(), 2);
	}

	/// A seed exactly as wide as the board fills its row; one letter more and
	/// nothing is placed.
	#[test]
	fn test_seed_boundary()
	{
		let crossword =
			Generator::new(5, 5, catalog(&["HORSE", "ROSE"])).generate(0, 2);
		assert!(!crossword.is_empty());
		let seed = &crossword.words[0];
		assert_eq!(seed.word.word, "HORSE");
		assert_eq!((seed.row, seed.col), (2, 0));
		assert_eq!(crossword.grid.to_string().lines().nth(2), Some("HORSE"));
		check_invariants(&crossword);

		let crossword =
			Generator::new(5, 5, catalog(&["HORSES", "ROSE"])).generate(0, 2);
		assert!(crossword.is_empty());
		assert_eq!(crossword.grid.occupied(), 0);

		let crossword =
			Generator::new(5, 5, catalog(&["ROSE"])).generate(3, 2);
		assert!(crossword.is_empty());
	}

	/// A word that cannot cross anything in the first pass may cross a word
	/// placed later in that pass.
	#[test]
	fn test_later_pass()
	{
		// ZIPPY shares nothing with the seed, only the Z of ZEBRA, and comes
		// before ZEBRA in the catalog.
		let words = catalog(&["BANANAS", "ZIPPY", "ZEBRA"]);
		assert_eq!(words[1].word, "ZIPPY");
		let one = Generator::new(15, 15, words.clone()).generate(0, 1);
		let two = Generator::new(15, 15, words).generate(0, 2);
		assert_eq!(one.len(), 2);
		assert_eq!(one.words[1].word.word, "ZEBRA");
		assert_eq!(two.len(), 3);
		assert_eq!(two.words[2].word.word, "ZIPPY");
		assert_eq!(two.words[2].orientation, Orientation::Across);
		check_invariants(&two);
	}

	/// Generation is deterministic.
	#[test]
	fn test_deterministic()
	{
		let words = catalog(&ANIMALS);
		let first = Generator::new(20, 20, words.clone()).generate(0, 2);
		let second = Generator::new(20, 20, words).generate(0, 2);
		assert_eq!(first, second);
	}

	/// The invariants hold for every seed over a realistic word list.
	#[test]
	fn test_invariants()
	{
		let words = catalog(&ANIMALS);
		for seed in 0 .. words.len()
		{
			for size in [12, 20]
			{
				let crossword =
					Generator::new(size, size, words.clone()).generate(seed, 3);
				check_invariants(&crossword);
			}
		}
	}

	/// Retrying seeds never does worse than the first seed alone.
	#[test]
	fn test_generate_best()
	{
		let words = catalog(&ANIMALS);
		let first = Generator::new(12, 12, words.clone()).generate(0, 2);
		let best = generate_best(12, 12, &words, 5, 2);
		assert!(best.len() >= first.len());
		check_invariants(&best);
		assert_eq!(generate_best(12, 12, &words, 1, 2), first);
		assert!(generate_best(5, 5, &WordCatalog::default(), 3, 2).is_empty());
	}
}
