//! # Terminal
//!
//! Entering and leaving the alternate screen for the interactive player. The
//! terminal is put back the way it was on return, on error, and on a panic
//! raised by the thread that owns it.

use std::{
	io::{self, stdout, Stdout},
	panic,
	sync::{Arc, Mutex},
	thread
};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use log::warn;
use ratatui::{backend::{Backend, CrosstermBackend}, Terminal};

/// The terminal type driven by the player.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` against the terminal in raw mode on the alternate screen.
///
/// # Arguments
///
/// * `f` - The function to apply to the terminal.
///
/// # Returns
///
/// Whatever `f` returns.
///
/// # Errors
///
/// Any error from `f`, or from switching the terminal mode.
pub fn with_tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	// The previous hook is shared with our own hook, which must still be able
	// to call it, and then reinstated once we are done.
	let previous = Arc::new(Mutex::new(Some(panic::take_hook())));
	let chained = Arc::clone(&previous);
	let owner = thread::current().id();
	panic::set_hook(Box::new(move |info| {
		if thread::current().id() == owner
		{
			let _ = leave();
		}
		if let Ok(hook) = chained.lock()
		{
			if let Some(hook) = hook.as_ref()
			{
				hook(info);
			}
		}
	}));
	// Entering is not atomic, so leave even if it failed halfway.
	let result = enter().and_then(|mut terminal| f(&mut terminal));
	match previous.lock().ok().and_then(|mut hook| hook.take())
	{
		Some(hook) => panic::set_hook(hook),
		None => warn!("Failed to reinstate the previous panic hook")
	}
	leave()?;
	result
}

/// Switch to the alternate screen and raw mode.
fn enter() -> io::Result<Tui>
{
	let mut stdout = stdout();
	execute!(stdout, EnterAlternateScreen)?;
	enable_raw_mode()?;
	Terminal::new(CrosstermBackend::new(stdout))
}

/// Switch back to the main screen and cooked mode, with a visible cursor.
fn leave() -> io::Result<()>
{
	let mut stdout = stdout();
	execute!(stdout, LeaveAlternateScreen)?;
	disable_raw_mode()?;
	CrosstermBackend::new(stdout).show_cursor()
}
