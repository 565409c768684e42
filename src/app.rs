//! # Player
//!
//! An interactive terminal front end for solving a saved crossword: the board
//! on the left, the clues on the right, and an answer line underneath.
//! Answers are typed as `<clue> <answer>`, e.g. `3D zebra`.

use std::{io, time::Duration};

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind};
use crossword_generator::crossword::{clue_line, Answer, Crossword};
use ratatui::{
	buffer::Buffer,
	layout::{Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style, Stylize},
	text::{Line, Span},
	widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
	Frame
};

use crate::tui::Tui;

/// The longest answer line accepted.
const MAX_INPUT: usize = 64;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The player state.
#[must_use]
pub struct App
{
	/// The crossword being solved.
	crossword: Crossword,

	/// The answer line being typed.
	input: String,

	/// The index of the highlighted clue, in
	/// [clue order](Crossword::clue_order).
	selected: usize,

	/// The outcome of the last submission, for display.
	feedback: Option<Feedback>,

	/// Whether the player is still running.
	running: bool
}

/// What the player last heard back.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Feedback
{
	/// An answer was submitted for the given clue.
	Answered(String, Answer),

	/// The answer line could not be understood.
	Malformed
}

// Public interface.
impl App
{
	/// Create a player for the given crossword.
	#[inline]
	pub fn new(crossword: Crossword) -> Self
	{
		Self {
			crossword,
			input: String::new(),
			selected: 0,
			feedback: None,
			running: true
		}
	}

	/// Run the player until the user exits.
	///
	/// # Arguments
	///
	/// * `tui` - The terminal.
	///
	/// # Returns
	///
	/// The crossword, with every answer solved during the session.
	///
	/// # Errors
	///
	/// Any error that occurs while drawing or reading events.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Crossword>
	{
		while self.running
		{
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(self.crossword)
	}
}

// Private implementation details.
impl App
{
	/// Render the whole frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the board. Letters are only shown once a word covering them has
	/// been solved; the highlighted clue's cells are tinted.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		let order = self.crossword.clue_order();
		let highlighted = order.get(self.selected);
		let grid = &self.crossword.grid;
		let lines = (0 .. grid.rows())
			.map(|row| {
				let spans = (0 .. grid.cols())
					.map(|col| {
						let Some(c) = grid.letter(row, col)
						else
						{
							return Span::styled(" · ", Style::default().fg(Color::DarkGray))
						};
						let bg =
							if highlighted.is_some_and(|w| w.covers(row, col))
							{
								Color::Cyan
							}
							else
							{
								Color::White
							};
						let text =
							if self.crossword.is_revealed(row, col)
							{
								format!(" {} ", c)
							}
							else
							{
								"   ".to_string()
							};
						Span::styled(text, Style::default().fg(Color::Black).bg(bg))
					})
					.collect::<Vec<_>>();
				Line::from(spans)
			})
			.collect::<Vec<_>>();
		Paragraph::new(lines)
			.block(
				Block::bordered()
					.title(Line::from("Crossword").centered())
					.title(Line::from("⎋ – exit".yellow().bold()).left_aligned())
					.title_bottom(
						Line::from(format!(
							"{}/{} solved",
							self.crossword.solved(),
							self.crossword.len()
						))
						.centered()
					)
			)
			.render(area, buf);
	}

	/// Render the clue list.
	fn render_clues(&self, area: Rect, buf: &mut Buffer)
	{
		let items = self.crossword.clue_order().into_iter()
			.map(|word| {
				let item = ListItem::new(clue_line(word));
				if word.solved
				{
					item.style(
						Style::default()
							.fg(Color::Green)
							.add_modifier(Modifier::CROSSED_OUT)
					)
				}
				else
				{
					item
				}
			})
			.collect::<Vec<_>>();
		let list = List::new(items)
			.block(
				Block::bordered()
					.title(Line::from("Clues").centered())
					.title_bottom(
						Line::from("↑↓ – select ⇥ – answer".cyan()).centered()
					)
			)
			.highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));
		let mut state = ListState::default().with_selected(Some(self.selected));
		StatefulWidget::render(list, area, buf, &mut state);
	}

	/// Render the answer line and the last outcome.
	fn render_input(&self, area: Rect, buf: &mut Buffer)
	{
		let status = match &self.feedback
		{
			Some(Feedback::Answered(clue, Answer::Correct)) =>
				Span::raw(format!("{}: correct", clue)).green().bold(),
			Some(Feedback::Answered(clue, answer)) =>
				Span::raw(format!("{}: {}", clue, answer)).red().bold(),
			Some(Feedback::Malformed) =>
				"type a clue, a space, then the answer".red().bold(),
			None if self.crossword.is_complete() =>
				"complete!".green().bold(),
			None => Span::raw("")
		};
		Paragraph::new(format!("> {}", self.input))
			.block(
				Block::bordered()
					.title(Line::from("Answer").left_aligned())
					.title(Line::from(status).right_aligned())
					.title_bottom(Line::from("↵ – submit".green()).centered())
			)
			.render(area, buf);
	}

	/// Process at most one event, waiting briefly for it.
	///
	/// # Errors
	///
	/// Any error that occurs while reading events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_millis(50))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event:
	///
	/// * Escape - Exit the player.
	/// * Up - Highlight the previous clue.
	/// * Down - Highlight the next clue.
	/// * Tab - Start an answer for the highlighted clue.
	/// * Backspace - Delete the last character of the answer line.
	/// * Enter - Submit the answer line.
	/// * Any other character - Append it to the answer line.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.running = false,
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::Tab => self.answer_selected(),
			KeyCode::Backspace =>
			{
				self.input.pop();
			},
			KeyCode::Enter => self.submit(),
			KeyCode::Char(c) if self.input.chars().count() < MAX_INPUT =>
				self.input.push(c),
			_ => {}
		}
	}

	/// Move the clue highlight, stopping at either end of the list.
	fn move_selection(&mut self, delta: isize)
	{
		let last = self.crossword.len().saturating_sub(1);
		self.selected = self.selected.saturating_add_signed(delta).min(last);
	}

	/// Replace the answer line with the highlighted clue's label.
	fn answer_selected(&mut self)
	{
		if let Some(word) = self.crossword.clue_order().get(self.selected)
		{
			self.input = format!("{} ", word.clue_id());
		}
	}

	/// Submit the answer line.
	fn submit(&mut self)
	{
		let line = self.input.trim();
		let Some((clue, guess)) = line.split_once(char::is_whitespace)
		else
		{
			self.feedback = Some(Feedback::Malformed);
			return
		};
		let clue = clue.to_uppercase();
		let answer = self.crossword.submit(&clue, guess);
		self.feedback = Some(Feedback::Answered(clue, answer));
		if answer == Answer::Correct
		{
			self.input.clear();
		}
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.margin(1)
			.constraints([Constraint::Min(5), Constraint::Length(3)])
			.split(area);
		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(55), Constraint::Min(30)])
			.split(rows[0]);
		self.render_board(columns[0], buf);
		self.render_clues(columns[1], buf);
		self.render_input(rows[1], buf);
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
