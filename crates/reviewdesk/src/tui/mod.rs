//! Terminal user interface for the review form.
//!
//! The form follows the Model-View-Update pattern:
//!
//! - **Model**: [`app::FormApp`], wrapping the form controller
//! - **View**: [`view::render`], a pure function producing screen lines
//! - **Update**: [`app::FormApp::update`], driven by [`messages::AppMsg`]
//!
//! [`run`] owns the terminal: it switches to raw mode and the alternate
//! screen, feeds key presses through [`input::map_key_to_message`] and
//! resizes as [`messages::AppMsg::WindowResized`], and repaints after every
//! event. Everything runs on the calling thread.
//!
//! Widgets live in [`components`] and render to rows of fixed display width.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod view;

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{execute, queue};
use tracing::{debug, info};

use crate::error::Result;
use crate::form::WINDOW_TITLE;
use crate::storage::ReviewStore;
use messages::AppMsg;

pub use app::FormApp;

/// Restores the terminal when dropped.
///
/// Raw mode and the alternate screen are undone on every exit path,
/// including errors and panics that unwind.
#[derive(Debug)]
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE), Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Paint a rendered frame.
fn draw(out: &mut impl Write, screen: &view::Screen) -> io::Result<()> {
    queue!(out, Hide)?;
    for (row, line) in screen.lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row))?;
        if line.highlighted {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(&line.text))?;
        }
    }
    if let Some((col, row)) = screen.cursor {
        queue!(out, MoveTo(col, row), Show)?;
    }
    out.flush()
}

/// Run the form until the operator quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, read or written.
/// Store failures do not end the loop; they are shown on the status line.
pub fn run<S: ReviewStore>(app: &mut FormApp<S>) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    info!("Review form opened");

    let (width, height) = terminal::size()?;
    app.update(AppMsg::WindowResized { width, height });

    while !app.should_quit() {
        draw(&mut guard.stdout, &view::render(app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(msg) = input::map_key_to_message(&key) {
                    debug!("Handling {:?}", msg);
                    app.update(msg);
                }
            }
            Event::Resize(width, height) => {
                debug!("Terminal resized to {width}x{height}");
                app.update(AppMsg::WindowResized { width, height });
            }
            _ => {}
        }
    }

    info!("Review form closed");
    Ok(())
}
