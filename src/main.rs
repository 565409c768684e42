//! # Crossword Generator
//!
//! Builds crosswords from a word list and lets players solve them. A word
//! list is a JSON array of `{"word": …, "clue": …}` records. Generating a
//! crossword writes a game file, which can then be shown, answered clue by
//! clue from the command line, or played interactively in the terminal.

mod app;
mod tui;

use std::{io, path::{Path, PathBuf}};

use clap::{Parser, Subcommand};
use log::{debug, info, trace, warn};

use app::App;
use crossword_generator::{
	catalog::WordCatalog,
	crossword::{Answer, Crossword},
	generator::generate_best
};
use tui::with_tui;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for generating and solving crosswords.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Generate a crossword from a word list and write the game file.
	Generate {
		/// The JSON word list.
		#[arg(short = 'w', long, default_value = "words/animals.json")]
		word_list: PathBuf,

		/// Where to write the game file.
		#[arg(short = 'g', long, default_value = "var/crossword/game.bin")]
		game: PathBuf,

		/// The number of board rows.
		#[arg(long, default_value = "20")]
		rows: usize,

		/// The number of board columns.
		#[arg(long, default_value = "20")]
		cols: usize,

		/// How many passes to make over the unplaced words.
		#[arg(short = 'p', long, default_value = "2")]
		passes: usize,

		/// How many of the longest words to try as the seed, keeping the
		/// fullest board.
		#[arg(short = 's', long, default_value = "1")]
		seeds: usize,

		/// Suppress the preview and clue list.
		#[arg(short = 'q', long)]
		quiet: bool
	},

	/// Print a saved crossword, answers included, and its clues.
	Show {
		/// The game file.
		#[arg(short = 'g', long, default_value = "var/crossword/game.bin")]
		game: PathBuf,

		/// Dump the game as JSON instead.
		#[arg(long)]
		json: bool
	},

	/// Submit an answer for a single clue.
	Answer {
		/// The game file.
		#[arg(short = 'g', long, default_value = "var/crossword/game.bin")]
		game: PathBuf,

		/// The clue label, e.g. `3D`.
		clue: String,

		/// The answer. Spaces are ignored.
		#[arg(required = true, num_args = 1..)]
		guess: Vec<String>
	},

	/// Solve a saved crossword interactively. Progress is saved on exit.
	Play {
		/// The game file.
		#[arg(short = 'g', long, default_value = "var/crossword/game.bin")]
		game: PathBuf
	},

	/// Mark every clue of a saved crossword unsolved.
	Reset {
		/// The game file.
		#[arg(short = 'g', long, default_value = "var/crossword/game.bin")]
		game: PathBuf
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);
	match opts.command
	{
		Command::Generate {
			word_list,
			game,
			rows,
			cols,
			passes,
			seeds,
			quiet
		} =>
		{
			let catalog = WordCatalog::read_from_file(&word_list)
				.unwrap_or_else(|e|
					panic!("Failed to read word list: {}: {}", word_list.display(), e)
				);
			if let Err(e) = catalog.check_fits(rows, cols)
			{
				panic!("Cannot generate a {}×{} crossword: {}", rows, cols, e)
			}
			if catalog.longest() > cols
			{
				warn!(
					"Some words are wider than {} columns and cannot be seeds",
					cols
				);
			}
			let crossword = generate_best(rows, cols, &catalog, seeds, passes);
			save(&crossword, &game);
			if !quiet
			{
				print_crossword(&crossword);
			}
			println!("Placed {} of {} words", crossword.len(), catalog.len());
		},
		Command::Show { game, json } =>
		{
			let crossword = load(&game);
			if json
			{
				let json = crossword.to_json()
					.unwrap_or_else(|e| panic!("Failed to render JSON: {}", e));
				println!("{}", json);
			}
			else
			{
				print_crossword(&crossword);
			}
		},
		Command::Answer { game, clue, guess } =>
		{
			let mut crossword = load(&game);
			let answer = crossword.submit(&clue, &guess.join(" "));
			println!("{}: {}", clue.to_uppercase(), answer);
			if answer == Answer::Correct
			{
				save(&crossword, &game);
				if crossword.is_complete()
				{
					println!("Crossword complete!");
				}
			}
		},
		Command::Play { game } =>
		{
			let crossword = load(&game);
			trace!("Opening TUI");
			let crossword = with_tui(|tui| App::new(crossword).run(tui))
				.unwrap_or_else(|e| panic!("Failed to drive TUI: {}", e));
			save(&crossword, &game);
			println!(
				"Solved {} of {} clues",
				crossword.solved(),
				crossword.len()
			);
		},
		Command::Reset { game } =>
		{
			let mut crossword = load(&game);
			crossword.reset();
			save(&crossword, &game);
		}
	}
}

/// Load a game file, or die trying.
fn load(path: &Path) -> Crossword
{
	Crossword::deserialize_from_file(path)
		.unwrap_or_else(|e|
			panic!("Failed to read game file: {}: {}", path.display(), e)
		)
}

/// Save a game file, creating its directory if necessary, or die trying.
fn save(crossword: &Crossword, path: &Path)
{
	let result = match path.parent()
	{
		Some(dir) if !dir.as_os_str().is_empty() =>
			std::fs::create_dir_all(dir),
		_ => Ok::<(), io::Error>(())
	}
	.and_then(|()| crossword.serialize_to_file(path));
	match result
	{
		Ok(()) => info!("Wrote game file: {}", path.display()),
		Err(e) => panic!("Failed to write game file: {}: {}", path.display(), e)
	}
}

/// Print the board and the clue list to standard output.
fn print_crossword(crossword: &Crossword)
{
	println!("{}", crossword);
	print!("{}", crossword.clues());
}
