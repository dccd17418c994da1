//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::commands::{StatsSummary, compute_stats};
use crate::core::{Phase, WORD_LEN, canonical_upper, is_allowed_letter};
use crate::session::{DrawOptions, Session, SessionError};
use crate::store::WordStore;

/// Application state
pub struct App {
    pub store: WordStore,
    pub session: Session,
    pub options: DrawOptions,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: StatsSummary,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the next guess
    Typing,
    /// Game ended; waiting for new-game or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns an error if the store has no eligible word.
    pub fn new(store: WordStore, options: DrawOptions) -> Result<Self, SessionError> {
        let session = Session::start(&store, options)?;
        let stats = compute_stats(&store);

        Ok(Self {
            store,
            session,
            options,
            input: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_LEN}-letter German word. Enter submits."),
                style: MessageStyle::Info,
            }],
            stats,
            should_quit: false,
            input_mode: InputMode::Typing,
        })
    }

    /// Start a fresh game with a newly drawn secret
    pub fn new_game(&mut self) {
        match Session::start(&self.store, self.options) {
            Ok(session) => {
                self.session = session;
                self.input.clear();
                self.messages.clear();
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", &MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&err.to_string(), &MessageStyle::Error);
            }
        }
    }

    /// Append one typed character to the current guess
    pub fn push_letter(&mut self, ch: char) {
        let canonical = canonical_upper(ch);
        if is_allowed_letter(canonical) && self.input.chars().count() < WORD_LEN {
            self.input.push(canonical);
        }
    }

    /// Submit the typed guess to the session
    pub fn submit_input(&mut self) {
        let text = self.input.clone();

        match self.session.submit(&mut self.store, &text) {
            Ok(turn) => {
                self.input.clear();
                match turn.phase {
                    Phase::Won { rounds_used } => {
                        self.finish_game(&format!("Solved in {rounds_used}/6!"));
                    }
                    Phase::Lost => {
                        let secret = self.session.secret().text().to_string();
                        self.finish_game(&format!("Out of guesses! The word was {secret}."));
                    }
                    Phase::AwaitingGuess { round } => {
                        self.add_message(&format!("Round {round}/6"), &MessageStyle::Info);
                    }
                }
            }
            Err(err @ (SessionError::LengthMismatch { .. } | SessionError::NotAWord(_))) => {
                self.add_message(&err.to_string(), &MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), &MessageStyle::Error);
                self.should_quit = true;
            }
        }
    }

    fn finish_game(&mut self, text: &str) {
        self.stats = compute_stats(&self.store);
        self.input_mode = InputMode::GameOver;
        let style = if matches!(self.session.phase(), Phase::Won { .. }) {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(text, &style);
        self.add_message("Press 'n' for a new game or 'q' to quit.", &MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: &MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style: style.clone(),
        });

        // Keep only the last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys once the game ended
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
