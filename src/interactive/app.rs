//! TUI application state and event loop
//!
//! Drives one `Session` against a real clock: a committed row's reveal plan
//! is held as a pending schedule and the flips are shown as their delays
//! elapse; the poll loop calls `resolve_commit` once the plan is due.

use crate::answer::{self, Mode};
use crate::config::{MAX_ROWS, Timing};
use crate::core::{Status, Word};
use crate::render::{FinishSink, FinishSnapshot, Renderer};
use crate::session::{Key, KeyOutcome, Resolution, RevealPlan, Session};
use crate::settings::Settings;
use crate::validate::Validator;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

/// A reveal in flight: the plan plus when it started
pub struct PendingReveal {
    pub plan: RevealPlan,
    pub started: Instant,
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

/// Render collaborator that only records flash messages; the TUI redraws
/// cells and keys from session state every frame.
#[derive(Default)]
struct MessageLog {
    pending: Vec<String>,
}

impl MessageLog {
    fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl Renderer for MessageLog {
    fn set_cell(&mut self, _row: usize, _col: usize, _ch: Option<char>) {}
    fn set_cell_status(&mut self, _row: usize, _col: usize, _status: Status) {}
    fn flash_message(&mut self, text: &str) {
        self.pending.push(text.to_string());
    }
    fn update_key_style(&mut self, _letter: char, _status: Status) {}
}

#[derive(Default)]
struct CaptureFinish {
    snapshot: Option<FinishSnapshot>,
}

impl FinishSink for CaptureFinish {
    fn reveal(&mut self, snapshot: FinishSnapshot) {
        self.snapshot = Some(snapshot);
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub settings: Settings,
    pub messages: Vec<Message>,
    pub pending: Option<PendingReveal>,
    pub finish: Option<FinishSnapshot>,
    pub should_quit: bool,
    answers: Vec<Word>,
    use_validation: bool,
    flashes: MessageLog,
    finish_capture: CaptureFinish,
}

impl App {
    /// Start a new app with its first game
    ///
    /// # Errors
    /// Returns an error if the answer list is empty.
    pub fn new(
        answers: Vec<Word>,
        mode: Mode,
        settings: Settings,
        use_validation: bool,
    ) -> Result<Self> {
        let session = Self::make_session(&answers, mode, use_validation)?;

        let mut app = Self {
            session,
            mode,
            settings,
            messages: Vec::new(),
            pending: None,
            finish: None,
            should_quit: false,
            answers,
            use_validation,
            flashes: MessageLog::default(),
            finish_capture: CaptureFinish::default(),
        };
        app.add_message(
            &format!("Guess the word! Mode: {}.", mode.name()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn make_session(answers: &[Word], mode: Mode, use_validation: bool) -> Result<Session> {
        let answer = answer::pick_answer(mode, answers).context("answer list is empty")?;
        let validator =
            use_validation.then(|| Validator::from_embedded().with_extra_answers(answers));
        Ok(Session::new(answer, MAX_ROWS, validator, Timing::default()))
    }

    /// Discard the current session and start over in the given mode
    pub fn new_game(&mut self, mode: Mode) {
        match Self::make_session(&self.answers, mode, self.use_validation) {
            Ok(session) => {
                self.session = session;
                self.mode = mode;
                self.pending = None;
                self.finish = None;
                self.finish_capture = CaptureFinish::default();
                self.messages.clear();
                self.add_message(
                    &format!("New {} game started!", mode.name()),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.new_game(Mode::Random),
                KeyCode::Char('d') => self.new_game(Mode::Daily),
                KeyCode::Char('t') => {
                    self.settings.toggle_theme();
                    self.save_settings();
                }
                KeyCode::Char('p') => {
                    self.settings.toggle_spellcheck();
                    self.use_validation = self.settings.spellcheck;
                    self.save_settings();
                    let state = if self.settings.spellcheck { "on" } else { "off" };
                    self.add_message(
                        &format!("Spellcheck {state} (applies to new games)."),
                        MessageStyle::Info,
                    );
                }
                _ => {}
            }
            return;
        }

        if self.finish.is_some() {
            match code {
                KeyCode::Char('n') => self.new_game(Mode::Random),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let key = match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => Key::Letter(ch),
            KeyCode::Backspace | KeyCode::Delete => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            _ => return,
        };

        let outcome = self.session.handle_key(key, &mut self.flashes);
        if let KeyOutcome::Committed(plan) = outcome {
            self.pending = Some(PendingReveal {
                plan,
                started: Instant::now(),
            });
        }
        self.drain_flashes();
    }

    /// Advance time-based work: resolve a due reveal
    pub fn tick(&mut self) {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| p.started.elapsed() >= p.plan.resolve_after);
        if !due {
            return;
        }
        self.pending = None;

        let resolution = self
            .session
            .resolve_commit(&mut self.flashes, &mut self.finish_capture);
        self.drain_flashes();

        if let Resolution::Finished { win } = resolution {
            self.finish = self.finish_capture.snapshot.take();
            if win {
                self.add_message("🎉 You got it!", MessageStyle::Success);
            } else {
                self.add_message("Better luck next time!", MessageStyle::Error);
            }
        }
    }

    /// Whether a cell's status may be shown yet
    #[must_use]
    pub fn revealed(&self, row: usize, col: usize) -> bool {
        match &self.pending {
            Some(p) if p.plan.row == row => p
                .plan
                .flips
                .get(col)
                .is_some_and(|flip| p.started.elapsed() >= flip.at),
            _ => self.session.state().cell_status(row, col).is_some(),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn drain_flashes(&mut self) {
        for text in self.flashes.drain() {
            self.add_message(&text, MessageStyle::Error);
        }
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.settings.save() {
            tracing::warn!(%err, "failed to persist settings");
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(std::time::Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (avoids double input on Windows)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
