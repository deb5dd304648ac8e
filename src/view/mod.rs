//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod detail_modal;
mod help;
mod helpers;
pub mod layout;
mod search_input;
pub mod styles;
pub mod table_view;

pub use help::render_help_overlay;
pub use helpers::{centered_rect, empty_line, key_value_line};
pub use layout::{render_layout, RenderedLayout};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{DataSelector, KeyAction, QueryResult};
use crate::parser::parse_payload;
use crate::source::InputSource;
use crate::state::{
    detect_table_click, handle_table_click, search_input_handler, AppState, SearchQuery,
    SearchState, TableGeometry,
};
use crate::table::{SortSpec, TableOptions};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
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
    input_source: InputSource,
    selector: DataSelector,
    key_bindings: KeyBindings,
    styles: TableStyles,
    /// Advanced on timer ticks while loading
    spinner_tick: usize,
    /// Table geometry of the last frame (for mouse click detection)
    last_table: Option<TableGeometry>,
    /// Dialog areas of the last frame; clicks inside them never reach the table
    last_dialogs: Vec<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(input_source: InputSource, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let mut app = Self {
            terminal,
            app_state: args.initial_state(),
            input_source,
            selector: args.selector,
            key_bindings: KeyBindings::default(),
            styles: TableStyles::with_color_config(args.color),
            spinner_tick: 0,
            last_table: None,
            last_dialogs: Vec::new(),
        };

        // A file payload is available immediately
        app.poll_input();
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Timer interval for stdin polling and the loading spinner
        const TIMER_INTERVAL: Duration = Duration::from_millis(200);

        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => continue,
                }
                self.draw()?;
                continue;
            }

            // Timer elapsed: poll the payload and animate the spinner
            let loaded = self.poll_input();
            let loading = self.app_state.query().is_loading();
            if loading {
                self.spinner_tick = self.spinner_tick.wrapping_add(1);
            }
            if loaded || loading {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Poll the input source and load the payload if it has arrived.
    ///
    /// Returns true when the query result changed. A read failure after
    /// startup is shown like any other failed fetch.
    fn poll_input(&mut self) -> bool {
        match self.input_source.poll() {
            Ok(Some(payload)) => {
                self.load_payload(&payload);
                true
            }
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "Failed to read classroom payload");
                self.app_state.set_query(QueryResult::Error {
                    message: err.to_string(),
                });
                true
            }
        }
    }

    /// Decode the payload and replace the record set wholesale.
    fn load_payload(&mut self, payload: &str) {
        let query = match parse_payload(payload, self.selector) {
            Ok(records) => {
                info!(count = records.len(), selector = self.selector.key(), "Loaded classrooms");
                QueryResult::Data(records)
            }
            Err(err) => {
                warn!(error = %err, "Failed to parse classroom payload");
                QueryResult::Error {
                    message: err.to_string(),
                }
            }
        };
        self.app_state.set_query(query);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even while typing a query
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Editing keys go to the search input while typing
        if self.app_state.search().is_typing() {
            let search = self.app_state.search().clone();
            let edited = match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(search_input_handler::handle_char_input(search, ch))
                }
                KeyCode::Backspace => Some(search_input_handler::handle_backspace(search)),
                KeyCode::Left => Some(search_input_handler::handle_cursor_left(search)),
                KeyCode::Right => Some(search_input_handler::handle_cursor_right(search)),
                KeyCode::Enter => return self.dispatch(KeyAction::SubmitSearch),
                KeyCode::Esc => return self.dispatch(KeyAction::CancelSearch),
                _ => None,
            };
            if let Some(edited) = edited {
                self.app_state.set_search(edited);
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Only help and quit get through the help overlay
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        self.dispatch(action)
    }

    /// Apply a domain action. Returns true if app should quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::SelectUp => state.select_prev_row(),
            KeyAction::SelectDown => state.select_next_row(),
            KeyAction::SelectLeft => state.select_prev_column(),
            KeyAction::SelectRight => state.select_next_column(),
            KeyAction::SelectFirst => state.select_first_row(),
            KeyAction::SelectLast => state.select_last_row(),

            KeyAction::OpenDetail => {
                state.open_selected_detail();
            }
            KeyAction::SortColumn => {
                let column = state.selected_column();
                if !state.toggle_sort(column) {
                    debug!(column, "Column cannot be sorted");
                }
            }

            KeyAction::NextPage => state.next_page(),
            KeyAction::PrevPage => state.prev_page(),
            KeyAction::NextPageSize => state.step_rows_per_page(true),
            KeyAction::PrevPageSize => state.step_rows_per_page(false),

            KeyAction::StartSearch => {
                let search = search_input_handler::activate_search_input(state.search().clone());
                state.set_search(search);
            }
            KeyAction::SubmitSearch => {
                let search = search_input_handler::submit_search(state.search().clone());
                state.set_search(search);
            }
            KeyAction::CancelSearch => {
                let search = search_input_handler::cancel_search(state.search().clone());
                state.set_search(search);
            }

            KeyAction::CloseDetail => {
                if !state.close_top_detail() && matches!(state.search(), SearchState::Active { .. })
                {
                    let search = search_input_handler::cancel_search(state.search().clone());
                    state.set_search(search);
                }
            }

            KeyAction::Quit => return true,
            KeyAction::Help => state.help_visible = !state.help_visible,
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Left click on a header sorts, on a cell opens its detail dialog.
    /// The wheel moves the row selection.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.select_prev_row(),
            MouseEventKind::ScrollDown => self.app_state.select_next_row(),
            MouseEventKind::Down(MouseButton::Left) => {
                let inside_dialog = self
                    .last_dialogs
                    .iter()
                    .any(|area| area.contains((mouse.column, mouse.row).into()));
                if inside_dialog {
                    return;
                }
                let Some(geometry) = self.last_table.as_ref() else {
                    return;
                };
                let click = detect_table_click(mouse.column, mouse.row, geometry);
                let outcome = handle_table_click(&mut self.app_state, click);
                debug!(?click, ?outcome, "Table click");
            }
            _ => {}
        }
    }

    /// Render the current frame and remember what mouse handling needs.
    fn draw(&mut self) -> Result<(), TuiError> {
        let mut rendered = RenderedLayout::default();
        self.terminal.draw(|frame| {
            rendered = render_layout(frame, &self.app_state, &self.styles, self.spinner_tick);
        })?;

        self.last_table = rendered.table;
        self.last_dialogs = rendered.dialogs;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        input_source: InputSource,
        selector: DataSelector,
    ) -> Self {
        Self {
            terminal,
            app_state,
            input_source,
            selector,
            key_bindings: KeyBindings::default(),
            styles: TableStyles::with_color_config(ColorConfig::from_env_and_args(true)),
            spinner_tick: 0,
            last_table: None,
            last_dialogs: Vec::new(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn poll_input_test(&mut self) -> bool {
        self.poll_input()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup settings for the TUI.
///
/// Carries the resolved CLI/config values into the rendering layer. Domain
/// state itself lives in [`AppState`].
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Page title (`Projekty`, or the region screen title).
    pub title: String,
    /// Which list of the payload feeds the table.
    pub selector: DataSelector,
    /// Query submitted at startup (`--search`).
    pub search: Option<String>,
    /// Startup sort (`--sort`/`--desc` or config).
    pub sort: Option<SortSpec>,
    /// Startup page size.
    pub rows_per_page: usize,
    pub color: ColorConfig,
}

impl CliArgs {
    /// Settings for the overview screen with default table options.
    pub fn new(title: impl Into<String>, selector: DataSelector) -> Self {
        Self {
            title: title.into(),
            selector,
            search: None,
            sort: None,
            rows_per_page: TableOptions::default().rows_per_page,
            color: ColorConfig::from_env_and_args(false),
        }
    }

    /// The loading state the app starts in.
    pub fn initial_state(&self) -> AppState {
        let options = TableOptions::default()
            .with_rows_per_page(self.rows_per_page)
            .unwrap_or_default();
        let mut state = AppState::new(self.title.clone(), options).with_sort(self.sort);
        if let Some(query) = self.search.clone().and_then(SearchQuery::new) {
            state.set_search(SearchState::Active { query });
        }
        state
    }
}

/// Initialize and run the TUI application with input source and args
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    match &input_source {
        InputSource::File(file) => {
            debug!(path = %file.path().display(), title = %args.title, "Starting TUI")
        }
        InputSource::Stdin(_) => {
            debug!(live = input_source.is_live(), title = %args.title, "Starting TUI")
        }
    }

    let result = TuiApp::new(input_source, args).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
