//! TUI application state and logic

use crate::core::{WORD_LENGTH, Word};
use crate::game::{GameSession, OpponentWorker, Outcome, Player, Winner};
use crate::output::KeyboardState;
use crate::solver::{Decision, Difficulty};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking on the opponent
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: GameSession,
    vocabulary: Vec<Word>,
    worker: OpponentWorker,
    pub keyboard: KeyboardState,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_opponent: Option<Decision>,
    pub show_word_bank: bool,
    pub no_delay: bool,
    pub should_quit: bool,
    outcome_recorded: bool,
}

/// What the input box currently accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    OpponentThinking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub human_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
}

impl Statistics {
    fn record(&mut self, outcome: &Outcome) {
        self.total_games += 1;
        match outcome.winner {
            Winner::Human => self.human_wins += 1,
            Winner::Opponent => self.opponent_wins += 1,
            Winner::Draw => self.draws += 1,
        }
    }
}

impl App {
    /// Start a fresh duel
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary has fewer than two words.
    pub fn new(vocabulary: &[Word], difficulty: Difficulty, no_delay: bool) -> Result<Self> {
        let session = GameSession::new(vocabulary, difficulty)?;
        Ok(Self::with_session(session, no_delay))
    }

    /// Wrap an existing session
    #[must_use]
    pub fn with_session(session: GameSession, no_delay: bool) -> Self {
        let mut app = Self {
            vocabulary: session.vocabulary().to_vec(),
            session,
            worker: OpponentWorker::new(),
            keyboard: KeyboardState::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            last_opponent: None,
            show_word_bank: false,
            no_delay,
            should_quit: false,
            outcome_recorded: false,
        };
        app.add_message(
            "Welcome! Guess your word before the opponent guesses its own.",
            MessageStyle::Info,
        );
        app.add_message(
            "Type a word and press Enter. Tab changes difficulty.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.session.awaiting() {
            None => InputMode::GameOver,
            Some(Player::Human) if !self.worker.is_busy() => InputMode::Guessing,
            Some(_) => InputMode::OpponentThinking,
        }
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.worker.is_busy()
    }

    /// Add a letter to the pending guess
    pub fn push_char(&mut self, c: char) {
        if self.input_mode() == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < WORD_LENGTH
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Play the pending guess
    pub fn submit_guess(&mut self) {
        if self.input_mode() != InputMode::Guessing {
            return;
        }
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.submit_human_guess(&input) {
            Ok(outcome) => {
                if let Some((word, _)) = self.session.human().guesses().last() {
                    self.keyboard.update(word, &outcome.verdicts);
                }
                if self.session.human().is_solved() {
                    self.add_message(
                        &format!("You found it in {}!", self.session.human().attempts()),
                        MessageStyle::Success,
                    );
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.advance();
    }

    /// Start the opponent's move if it is due and record a finished game
    pub fn advance(&mut self) {
        if self.session.awaiting() == Some(Player::Opponent) && !self.worker.is_busy() {
            match self.session.prepare_opponent_turn() {
                Ok(turn) => {
                    let delay = if self.no_delay {
                        Duration::ZERO
                    } else {
                        self.difficulty().thinking_delay()
                    };
                    self.worker.spawn(turn, delay);
                }
                Err(e) => {
                    warn!("could not start opponent turn: {e}");
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
        }

        if self.session.is_terminal() && !self.outcome_recorded {
            self.outcome_recorded = true;
            if let Ok(outcome) = self.session.outcome() {
                self.stats.record(&outcome);
                let style = match outcome.winner {
                    Winner::Human => MessageStyle::Success,
                    Winner::Opponent => MessageStyle::Error,
                    Winner::Draw => MessageStyle::Info,
                };
                self.add_message(&outcome.summary(), style);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Apply the opponent's guess if the worker has finished
    pub fn poll_worker(&mut self) {
        let Some(reply) = self.worker.try_recv() else {
            return;
        };

        let guess = reply.decision.guess.clone();
        match self.session.apply_opponent_guess(guess) {
            Ok(_) => {
                if self.session.opponent().sub_game().is_solved() {
                    self.add_message(
                        &format!(
                            "The opponent found its word in {}.",
                            self.session.opponent().sub_game().attempts()
                        ),
                        MessageStyle::Error,
                    );
                }
                self.last_opponent = Some(reply.decision);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.advance();
    }

    /// Abandon the current game and start another at `difficulty`
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.worker.cancel();
        match GameSession::new(&self.vocabulary, difficulty) {
            Ok(session) => self.session = session,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.keyboard.reset();
        self.input_buffer.clear();
        self.last_opponent = None;
        self.outcome_recorded = false;
        self.messages.clear();
        self.add_message(
            &format!("New game started at {difficulty} difficulty!"),
            MessageStyle::Info,
        );
    }

    /// Move to the next difficulty, restarting the game
    pub fn cycle_difficulty(&mut self) {
        self.new_game(self.difficulty().next());
    }

    pub fn toggle_word_bank(&mut self) {
        self.show_word_bank = !self.show_word_bank;
    }

    #[must_use]
    pub fn word_bank(&self) -> &[Word] {
        &self.vocabulary
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
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
        app.poll_worker();
        app.advance();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game(app.difficulty());
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.cycle_difficulty(),
                KeyCode::Char('?') => app.toggle_word_bank(),
                code if app.input_mode() == InputMode::GameOver => match code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(app.difficulty()),
                    _ => {}
                },
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Enter => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.worker.cancel();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Instant;

    fn app(difficulty: Difficulty, seed: u64) -> App {
        let vocabulary = Vocabulary::embedded();
        let session =
            GameSession::with_rng(vocabulary.words(), difficulty, StdRng::seed_from_u64(seed))
                .unwrap();
        App::with_session(session, true)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    fn wait_for_opponent(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while app.is_thinking() && Instant::now() < deadline {
            app.poll_worker();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn input_is_capped_and_uppercased() {
        let mut app = app(Difficulty::Easy, 1);
        type_word(&mut app, "earthy");
        assert_eq!(app.input_buffer, "EARTH");

        app.push_char('1');
        app.pop_char();
        assert_eq!(app.input_buffer, "EART");
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut app = app(Difficulty::Easy, 1);
        type_word(&mut app, "ear");
        app.submit_guess();

        assert_eq!(app.session.human().attempts(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn guess_hands_turn_to_opponent() {
        let mut app = app(Difficulty::Medium, 2);
        type_word(&mut app, "earth");
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.human().attempts(), 1);
        assert!(app.keyboard.get(b'E').is_some());

        // Typing is ignored while the opponent moves
        if app.is_thinking() {
            assert_eq!(app.input_mode(), InputMode::OpponentThinking);
            app.push_char('s');
            assert!(app.input_buffer.is_empty());
        }

        wait_for_opponent(&mut app);
        assert_eq!(app.session.opponent().sub_game().attempts(), 1);
        assert!(app.last_opponent.is_some());
        assert_eq!(app.input_mode(), InputMode::Guessing);
    }

    #[test]
    fn cycling_difficulty_restarts() {
        let mut app = app(Difficulty::Easy, 3);
        type_word(&mut app, "solar");
        app.submit_guess();

        app.cycle_difficulty();
        assert_eq!(app.difficulty(), Difficulty::Medium);
        assert_eq!(app.session.human().attempts(), 0);
        assert_eq!(app.session.opponent().sub_game().attempts(), 0);
        assert!(!app.is_thinking());
        assert!(app.keyboard.get(b'S').is_none());
    }

    #[test]
    fn finished_game_is_counted_once() {
        let mut app = app(Difficulty::Easy, 4);

        let mut rounds = 0;
        while app.input_mode() != InputMode::GameOver {
            if app.input_mode() == InputMode::Guessing {
                type_word(&mut app, "fungi");
                app.submit_guess();
            }
            wait_for_opponent(&mut app);
            app.advance();
            rounds += 1;
            assert!(rounds <= 2 * MAX_ATTEMPTS);
        }

        app.advance();
        app.advance();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(
            app.stats.human_wins + app.stats.opponent_wins + app.stats.draws,
            1
        );
    }

    #[test]
    fn word_bank_toggles() {
        let mut app = app(Difficulty::Easy, 5);
        assert!(!app.show_word_bank);
        app.toggle_word_bank();
        assert!(app.show_word_bank);
        assert_eq!(app.word_bank().len(), Vocabulary::embedded().len());
    }
}
