//! Turn sequencing for a human-versus-opponent duel

use super::{GameError, Outcome, Player};
use crate::core::{Verdict, WORD_LENGTH, Word, evaluate, verdicts_to_string};
use crate::knowledge::{KnowledgeBase, filter};
use crate::solver::{Decision, Difficulty, GuessSource, SearchEngine, SearchStats};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Guesses allowed per player
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubGameState {
    InProgress,
    Solved,
    Exhausted,
}

impl SubGameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One player's progress against their own target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubGame {
    target: Word,
    guesses: Vec<(Word, [Verdict; WORD_LENGTH])>,
    state: SubGameState,
}

impl SubGame {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            state: SubGameState::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[(Word, [Verdict; WORD_LENGTH])] {
        &self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> SubGameState {
        self.state
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, SubGameState::Solved)
    }

    /// Evaluate and store a guess, advancing the state
    ///
    /// Callers must check [`is_terminal`](Self::is_terminal) first.
    pub(crate) fn record(&mut self, guess: Word) -> [Verdict; WORD_LENGTH] {
        let verdicts = evaluate(&guess, &self.target);
        let solved = guess == self.target;
        self.guesses.push((guess, verdicts));

        if solved {
            self.state = SubGameState::Solved;
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            self.state = SubGameState::Exhausted;
        }
        verdicts
    }
}

/// The computer side: its sub-game plus what it has learned
#[derive(Debug, Clone)]
pub struct Opponent {
    sub_game: SubGame,
    knowledge: KnowledgeBase,
    pool: Vec<Word>,
}

impl Opponent {
    /// Fresh opponent whose pool is the whole vocabulary
    #[must_use]
    pub fn new(target: Word, vocabulary: &[Word]) -> Self {
        Self {
            sub_game: SubGame::new(target),
            knowledge: KnowledgeBase::new(),
            pool: vocabulary.to_vec(),
        }
    }

    #[must_use]
    pub const fn sub_game(&self) -> &SubGame {
        &self.sub_game
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Vocabulary words still consistent with everything learned
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Play a guess, learn from its feedback and re-filter the pool
    ///
    /// The pool is recomputed from `vocabulary` rather than patched. Callers
    /// must check the sub-game is still in progress.
    pub fn play(&mut self, guess: Word, vocabulary: &[Word]) -> [Verdict; WORD_LENGTH] {
        let verdicts = self.sub_game.record(guess.clone());
        self.knowledge.update(&guess, &verdicts);
        self.pool = filter(vocabulary, &self.knowledge);
        verdicts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Terminal,
}

/// Feedback for one applied guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdicts: [Verdict; WORD_LENGTH],
    pub state: SessionState,
}

/// Everything needed to choose the opponent's next guess away from the session
///
/// Produced by [`GameSession::prepare_opponent_turn`]; owns its data so it can be
/// moved to a worker thread.
#[derive(Debug)]
pub struct OpponentTurn {
    pool: Vec<Word>,
    vocabulary: Arc<[Word]>,
    turn: usize,
    difficulty: Difficulty,
    rng: StdRng,
}

impl OpponentTurn {
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Run the search and return the chosen guess
    #[must_use]
    pub fn compute(self) -> Word {
        self.decide().guess
    }

    /// Run the search, falling back to a random vocabulary word on an empty pool
    #[must_use]
    pub fn decide(mut self) -> Decision {
        let engine = SearchEngine::new(self.difficulty);
        if let Some(decision) = engine.decide(&self.pool, self.turn, &mut self.rng) {
            return decision;
        }

        warn!(
            "opponent pool is empty on turn {}; guessing a random vocabulary word",
            self.turn + 1
        );
        let index = self.rng.random_range(0..self.vocabulary.len());
        Decision {
            guess: self.vocabulary[index].clone(),
            source: GuessSource::Fallback,
            stats: SearchStats::default(),
        }
    }
}

/// A single duel: two sub-games with distinct targets
///
/// The human moves first; the sides then alternate. Once one side's sub-game is
/// over the other keeps playing alone until it finishes too.
#[derive(Debug)]
pub struct GameSession {
    vocabulary: Arc<[Word]>,
    difficulty: Difficulty,
    human: SubGame,
    opponent: Opponent,
    rng: StdRng,
}

impl GameSession {
    /// Start a session with an OS-seeded random source
    ///
    /// # Errors
    /// Returns [`GameError::VocabularyTooSmall`] with fewer than two distinct words.
    pub fn new(vocabulary: &[Word], difficulty: Difficulty) -> Result<Self, GameError> {
        Self::with_rng(vocabulary, difficulty, StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a session drawing all randomness from `rng`
    ///
    /// # Errors
    /// Returns [`GameError::VocabularyTooSmall`] with fewer than two distinct words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_duel::game::GameSession;
    /// use wordle_duel::solver::Difficulty;
    /// use wordle_duel::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// let rng = StdRng::seed_from_u64(1);
    /// let session = GameSession::with_rng(vocabulary.words(), Difficulty::Hard, rng).unwrap();
    ///
    /// assert_ne!(session.human().target(), session.opponent().sub_game().target());
    /// ```
    pub fn with_rng(
        vocabulary: &[Word],
        difficulty: Difficulty,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let mut seen: FxHashSet<&Word> = FxHashSet::default();
        let vocabulary: Arc<[Word]> = vocabulary
            .iter()
            .filter(|word| seen.insert(*word))
            .cloned()
            .collect();

        if vocabulary.len() < 2 {
            return Err(GameError::VocabularyTooSmall(vocabulary.len()));
        }

        let human_index = rng.random_range(0..vocabulary.len());
        let mut opponent_index = rng.random_range(0..vocabulary.len() - 1);
        if opponent_index >= human_index {
            opponent_index += 1;
        }

        let human = SubGame::new(vocabulary[human_index].clone());
        let opponent = Opponent::new(vocabulary[opponent_index].clone(), &vocabulary);
        info!(
            "new {difficulty} session over {} words",
            vocabulary.len()
        );

        Ok(Self {
            vocabulary,
            difficulty,
            human,
            opponent,
            rng,
        })
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the difficulty used for later opponent turns
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub const fn human(&self) -> &SubGame {
        &self.human
    }

    #[must_use]
    pub const fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    #[must_use]
    pub const fn session_state(&self) -> SessionState {
        if self.human.is_terminal() && self.opponent.sub_game.is_terminal() {
            SessionState::Terminal
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.session_state(), SessionState::Terminal)
    }

    /// Whose move is expected next, or `None` once the session is over
    #[must_use]
    pub fn awaiting(&self) -> Option<Player> {
        let human_done = self.human.is_terminal();
        let opponent_done = self.opponent.sub_game.is_terminal();
        match (human_done, opponent_done) {
            (true, true) => None,
            (true, false) => Some(Player::Opponent),
            (false, true) => Some(Player::Human),
            (false, false) if self.human.attempts() > self.opponent.sub_game.attempts() => {
                Some(Player::Opponent)
            }
            (false, false) => Some(Player::Human),
        }
    }

    fn ensure_turn(&self, player: Player) -> Result<(), GameError> {
        let sub_game = match player {
            Player::Human => &self.human,
            Player::Opponent => &self.opponent.sub_game,
        };
        if sub_game.is_terminal() {
            return Err(GameError::AlreadyTerminal(player));
        }
        if self.awaiting() != Some(player) {
            return Err(GameError::OutOfTurn(player));
        }
        Ok(())
    }

    /// Play the human's guess
    ///
    /// Any input is accepted as long as it is five ASCII letters; it does not
    /// have to be a vocabulary word. A rejected guess changes nothing.
    ///
    /// # Errors
    /// [`GameError::InvalidGuess`] for malformed input, [`GameError::AlreadyTerminal`]
    /// once the human's game is over, [`GameError::OutOfTurn`] while the opponent
    /// is due to move.
    pub fn submit_human_guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_turn(Player::Human)?;
        let guess = Word::new(input)?;

        let verdicts = self.human.record(guess);
        debug!(
            "human guess {} of {MAX_ATTEMPTS}: {:?}",
            self.human.attempts(),
            self.human.state()
        );

        Ok(GuessOutcome {
            verdicts,
            state: self.session_state(),
        })
    }

    /// Snapshot what the opponent needs to pick its next guess
    ///
    /// # Errors
    /// [`GameError::AlreadyTerminal`] once the opponent's game is over,
    /// [`GameError::OutOfTurn`] while the human is due to move.
    pub fn prepare_opponent_turn(&mut self) -> Result<OpponentTurn, GameError> {
        self.ensure_turn(Player::Opponent)?;

        Ok(OpponentTurn {
            pool: self.opponent.pool.clone(),
            vocabulary: Arc::clone(&self.vocabulary),
            turn: self.opponent.sub_game.attempts(),
            difficulty: self.difficulty,
            rng: StdRng::from_rng(&mut self.rng),
        })
    }

    /// Play a guess chosen for the opponent and learn from its feedback
    ///
    /// # Errors
    /// Same conditions as [`prepare_opponent_turn`](Self::prepare_opponent_turn);
    /// a rejected guess does not count as an attempt.
    pub fn apply_opponent_guess(&mut self, guess: Word) -> Result<GuessOutcome, GameError> {
        self.ensure_turn(Player::Opponent)?;

        let verdicts = self.opponent.play(guess, &self.vocabulary);
        debug!(
            "opponent guess {} of {MAX_ATTEMPTS}: {}, {} candidates left",
            self.opponent.sub_game.attempts(),
            verdicts_to_string(&verdicts),
            self.opponent.pool.len()
        );

        Ok(GuessOutcome {
            verdicts,
            state: self.session_state(),
        })
    }

    /// Choose and play the opponent's guess in one step
    ///
    /// # Errors
    /// Same conditions as [`prepare_opponent_turn`](Self::prepare_opponent_turn).
    pub fn request_opponent_guess(&mut self) -> Result<Word, GameError> {
        let guess = self.prepare_opponent_turn()?.compute();
        self.apply_opponent_guess(guess.clone())?;
        Ok(guess)
    }

    /// Final result
    ///
    /// # Errors
    /// [`GameError::NotTerminal`] until both sub-games are over.
    pub fn outcome(&self) -> Result<Outcome, GameError> {
        if !self.is_terminal() {
            return Err(GameError::NotTerminal);
        }
        Ok(Outcome::decide(&self.human, &self.opponent.sub_game))
    }
}
