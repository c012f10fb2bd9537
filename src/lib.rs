//! # worldwise-quiz
//!
//! A terminal trivia quiz. Questions come from an Open Trivia DB style HTTP
//! endpoint (or a JSON file in the same format), one session at a time.
//!
//! The engine is usable without the terminal front end:
//!
//! ```rust,no_run
//! use worldwise_quiz::data::{OpenTdbConfig, OpenTdbSource};
//! use worldwise_quiz::session::SessionController;
//! use worldwise_quiz::view::project;
//!
//! # async fn demo() -> Result<(), worldwise_quiz::QuizError> {
//! let source = OpenTdbSource::new(OpenTdbConfig::default())?;
//! let mut session = SessionController::new();
//! session.start_session(&source, 10).await?;
//!
//! let first = session.state().current_question().unwrap().options()[0].clone();
//! session.submit_answer(&first)?;
//! println!("{:?}", project(session.state()));
//! # Ok(())
//! # }
//! ```

mod app;
pub mod config;
pub mod data;
mod error;
pub mod models;
pub mod session;
pub mod terminal;
mod ui;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub use app::App;
pub use config::{Config, Theme};
pub use data::QuestionSource;
pub use error::{QuizError, SessionError, SourceError};
pub use models::{AnswerRecord, Question, QuestionSet};
pub use session::{Phase, Score, SessionController, SessionState};
pub use ui::Palette;

use session::LoadTicket;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A quiz wired to a question source, ready to run in the terminal.
pub struct Quiz {
    app: App,
    source: Arc<dyn QuestionSource>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError::Source` when the configured source is unusable.
    pub fn new(config: &Config) -> Result<Self, QuizError> {
        let source = config.build_source()?;
        Ok(Self::with_source(source, config.question_count, config.theme))
    }

    pub fn with_source(source: Arc<dyn QuestionSource>, question_count: usize, theme: Theme) -> Self {
        Self {
            app: App::new(question_count, theme),
            source,
        }
    }

    /// Take over the terminal and run until the user quits. The first
    /// session starts loading immediately.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app, self.source).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

struct LoadCompletion {
    ticket: LoadTicket,
    result: Result<QuestionSet, SourceError>,
}

/// Runs question loads off the UI loop and reports back over a channel.
struct Loader {
    source: Arc<dyn QuestionSource>,
    tx: mpsc::UnboundedSender<LoadCompletion>,
    in_flight: Option<JoinHandle<()>>,
}

impl Loader {
    fn spawn(&mut self, ticket: LoadTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.load_question_set(ticket.count()).await;
            let _ = tx.send(LoadCompletion { ticket, result });
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

enum Command {
    Continue,
    Quit,
    Load(LoadTicket),
    Abandon,
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    source: Arc<dyn QuestionSource>,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut loader = Loader {
        source,
        tx,
        in_flight: None,
    };

    if let Some(ticket) = app.start_session() {
        loader.spawn(ticket);
    }

    loop {
        while let Ok(done) = rx.try_recv() {
            app.finish_load(done.ticket, done.result);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_input(app, key.code) {
            Command::Continue => {}
            Command::Quit => break,
            Command::Load(ticket) => loader.spawn(ticket),
            Command::Abandon => loader.cancel(),
        }
    }

    loader.cancel();
    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) -> Command {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Command::Quit;
    }

    match app.phase() {
        Phase::Idle => handle_welcome_input(app, key),
        Phase::Loading => handle_loading_input(app, key),
        Phase::Failed { .. } => handle_failed_input(app, key),
        Phase::InProgress => handle_quiz_input(app, key),
        Phase::Completed => handle_result_input(app, key),
    }
}

fn start(app: &mut App) -> Command {
    app.start_session().map_or(Command::Continue, Command::Load)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Enter => start(app),
        _ => Command::Continue,
    }
}

fn handle_loading_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Esc => {
            app.abandon_load();
            Command::Abandon
        }
        _ => Command::Continue,
    }
}

fn handle_failed_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => start(app),
        _ => Command::Continue,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_highlighted(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.submit_option(index);
        }
        _ => {}
    }
    Command::Continue
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            Command::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            Command::Continue
        }
        KeyCode::Char('r') | KeyCode::Char('R') => start(app),
        _ => Command::Continue,
    }
}
