//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail_modal;
mod help;
mod helpers;
mod item_list;
mod layout;
mod loading;
mod pagination_bar;
mod search_input;
mod styles;

pub use detail_modal::{build_detail_lines, render_detail_modal};
pub use help::render_help_overlay;
pub use helpers::{pad_number, truncate_to_width};
pub use item_list::{ItemList, EMPTY_TEXT};
pub use layout::{calculate_areas, render_layout, status_line, Screen, ScreenAreas};
pub use loading::LoadingIndicator;
pub use pagination_bar::PaginationBar;
pub use search_input::SearchInput;
pub use styles::{type_color, CatalogStyles, ColorConfig, FALLBACK_TYPE_COLOR};

use crate::config::keybindings::KeyBindings;
use crate::model::{CatalogSnapshot, InputError};
use crate::source::{apply_load_result, InputSource};
use crate::state::{search_input_handler, AppState, FocusPane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest the event loop sleeps without a key press.
///
/// Bounds spinner animation and source polling; a pending debounce
/// deadline shortens it.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    snapshot: CatalogSnapshot,
    input_source: InputSource,
    source_label: String,
    key_bindings: KeyBindings,
    styles: CatalogStyles,
    spinner_tick: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        input_source: InputSource,
        app_state: AppState,
        styles: CatalogStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, input_source, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Sleeps in `event::poll`
    /// until a key arrives, the debounce deadline passes, or a tick elapses,
    /// and redraws only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.update(Instant::now());
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(self.poll_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.update(Instant::now());

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an already set-up terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        input_source: InputSource,
        styles: CatalogStyles,
    ) -> Self {
        let source_label = input_source.describe();
        let snapshot = if input_source.is_loading() {
            CatalogSnapshot::loading()
        } else {
            CatalogSnapshot::loaded(Vec::new())
        };

        Self {
            terminal,
            app_state,
            snapshot,
            input_source,
            source_label,
            key_bindings: KeyBindings::default(),
            styles,
            spinner_tick: 0,
        }
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeyBindings) {
        self.key_bindings = key_bindings;
    }

    /// UI state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Current catalog contents.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// How long the loop may block waiting for input at `now`.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.app_state.search.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK_INTERVAL),
            None => TICK_INTERVAL,
        }
    }

    /// Advance time-driven state: source delivery, debounce, spinner.
    ///
    /// Returns true if a redraw is needed.
    pub fn update(&mut self, now: Instant) -> bool {
        let mut dirty = self.poll_source();

        if self.app_state.tick(now) {
            debug!(term = %self.app_state.search.committed_term(), "search committed");
            dirty = true;
        }

        if self.snapshot.loading {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
            dirty = true;
        }

        dirty
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let overlay_open = self.app_state.help_visible || self.app_state.is_detail_open();
        if self.app_state.focus == FocusPane::Search && !overlay_open {
            self.handle_search_key(key, now);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.app_state.handle_action(action, &self.snapshot.items),
            None => false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let state = &mut self.app_state;

        match key.code {
            KeyCode::Char('u') if ctrl => {
                state.edit_search(search_input_handler::handle_clear, now);
            }
            KeyCode::Char('w') if ctrl => {
                state.edit_search(search_input_handler::handle_delete_word, now);
            }
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(ch) => {
                state.edit_search(|text| search_input_handler::handle_char_input(text, ch), now);
            }
            KeyCode::Backspace => {
                state.edit_search(search_input_handler::handle_backspace, now);
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => state.focus_grid(),
            KeyCode::Esc => state.search_escape(now),
            _ => {}
        }
    }

    fn poll_source(&mut self) -> bool {
        let Some(result) = self.input_source.poll() else {
            return false;
        };

        match apply_load_result(&mut self.snapshot, result) {
            Ok(()) => info!(
                count = self.snapshot.items.len(),
                source = %self.source_label,
                "catalog ready"
            ),
            Err(err) => {
                warn!(error = %err, source = %self.source_label, "catalog unavailable");
                self.app_state.set_load_error(err.to_string());
            }
        }
        true
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let screen = Screen {
            state: &self.app_state,
            snapshot: &self.snapshot,
            styles: &self.styles,
            source_label: &self.source_label,
            tick: self.spinner_tick,
        };

        self.terminal.draw(|frame| render_layout(frame, &screen))?;
        Ok(())
    }

    /// Cancel any pending search before shutdown.
    pub fn teardown(&mut self) {
        self.app_state.search.teardown();
    }
}

/// Initialize and run the TUI application with an input source
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    input_source: InputSource,
    app_state: AppState,
    styles: CatalogStyles,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(input_source, app_state, styles) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();
    app.teardown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
