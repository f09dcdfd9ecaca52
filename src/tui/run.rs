//! TUI effects boundary: event loop, terminal lifecycle, focus handles.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A reader thread forwards crossterm events over an mpsc channel. The loop
//! alone owns the `App`: it draws, re-points the widget's focus handles at
//! the buttons of the new frame, then blocks for the next event.

use std::io;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::focus::TabButton;
use crate::types::TabSet;

use super::state::{App, AppEvent, Transition};
use super::update::handle_event;
use super::view::render;

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

/// Translate a crossterm event into an app event. Key releases and repeats
/// are dropped so each press is handled once.
fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if let Some(app_event) = to_app_event(event) {
                        if tx.send(app_event).is_err() {
                            break; // receiver dropped, TUI is shutting down
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive tab widget until the user quits.
pub fn run(tabs: TabSet) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(tabs = tabs.len(), "interactive session started");

    let result = event_loop(&mut terminal, App::new(tabs));

    restore_terminal()?;
    info!("interactive session ended");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx);

    loop {
        // The buttons of this frame live until the next draw replaces them.
        let mut buttons: Vec<Rc<TabButton>> = Vec::new();
        terminal.draw(|frame| buttons = render(&app, frame))?;
        app.widget.attach_buttons(&buttons);

        if app.should_quit {
            break;
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // reader thread gone
        };
        debug!(?event, "event");

        if handle_event(&mut app, event, &buttons) == Transition::Quit {
            app.should_quit = true;
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
