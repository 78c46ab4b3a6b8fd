//! Terminal setup, teardown, and the event loop
//!
//! Everything runs on one thread: draw a frame, block until the next
//! terminal event, handle it to completion, repeat. Dashboard figures are
//! recomputed inside each draw, so there is no refresh bookkeeping anywhere.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use super::app::App;
use super::handler::handle_key;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match event::read()? {
            Event::Key(key_event) => {
                handle_key(app, key_event);
            }
            Event::Resize(_, _) => {
                // The next draw picks up the new size
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
