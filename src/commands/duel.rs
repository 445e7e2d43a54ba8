//! Text-mode duel
//!
//! Line-based version of the duel for terminals without TUI support.

use crate::core::Word;
use crate::game::{GameError, GameSession, OpponentWorker, Player};
use crate::output::{
    KeyboardState, print_board, print_keyboard, print_outcome, print_word_bank,
};
use crate::solver::{Decision, Difficulty};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Give up on an opponent reply after this long
const REPLY_TIMEOUT: Duration = Duration::from_secs(120);

/// Settings for a text duel
#[derive(Debug, Clone, Copy)]
pub struct DuelConfig {
    pub difficulty: Difficulty,
    /// Skip the artificial thinking pause
    pub no_delay: bool,
    pub seed: Option<u64>,
}

/// A line typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelCommand {
    Guess(String),
    Quit,
    New,
    Words,
    Help,
    Level(Difficulty),
    Unknown(String),
}

impl DuelCommand {
    /// Interpret one line of input
    ///
    /// Commands start with `:`; anything else is a guess.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix(':') else {
            return Self::Guess(input.to_string());
        };

        let mut parts = command.split_whitespace();
        match parts.next().map(str::to_ascii_lowercase).as_deref() {
            Some("q" | "quit" | "exit") => Self::Quit,
            Some("n" | "new") => Self::New,
            Some("w" | "words") => Self::Words,
            Some("h" | "help") => Self::Help,
            Some("l" | "level") => match parts.next().map(str::parse::<Difficulty>) {
                Some(Ok(difficulty)) => Self::Level(difficulty),
                _ => Self::Unknown(input.to_string()),
            },
            _ => Self::Unknown(input.to_string()),
        }
    }
}

fn new_session(vocabulary: &[Word], difficulty: Difficulty, seed: Option<u64>) -> Result<GameSession> {
    let session = match seed {
        Some(seed) => GameSession::with_rng(vocabulary, difficulty, StdRng::seed_from_u64(seed)),
        None => GameSession::new(vocabulary, difficulty),
    };
    Ok(session?)
}

fn print_help() {
    println!("\nType a five-letter word to guess. Commands:");
    println!("  :words          show the word bank");
    println!("  :level <name>   restart at easy, medium, hard or expert");
    println!("  :new            start a new game");
    println!("  :quit           leave\n");
}

/// Let the worker choose the opponent's guess while a spinner runs
///
/// # Errors
///
/// Returns an error if it is not the opponent's move or no reply arrives in time.
pub fn play_opponent_turn(
    session: &mut GameSession,
    worker: &mut OpponentWorker,
    delay: Duration,
    spinner: &ProgressBar,
) -> Result<Decision> {
    let turn = session.prepare_opponent_turn()?;
    worker.spawn(turn, delay);

    let started = Instant::now();
    let reply = loop {
        if let Some(reply) = worker.recv_timeout(Duration::from_millis(100)) {
            break reply;
        }
        if started.elapsed() > REPLY_TIMEOUT {
            worker.cancel();
            bail!("opponent did not answer within {}s", REPLY_TIMEOUT.as_secs());
        }
        spinner.tick();
    };

    session.apply_opponent_guess(reply.decision.guess.clone())?;
    Ok(reply.decision)
}

fn thinking_spinner(difficulty: Difficulty) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}")?);
    spinner.set_message(format!("Opponent ({difficulty}) is thinking..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    Ok(spinner)
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

/// Run the text duel until the player quits
///
/// # Errors
///
/// Returns an error on I/O failure or if the vocabulary is too small.
pub fn run_duel(vocabulary: &[Word], config: &DuelConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Duel - Text Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!("\nYou and the opponent each chase a different hidden word.");
    println!("Fewer attempts wins. Type :help for commands.");

    let mut difficulty = config.difficulty;
    let mut session = new_session(vocabulary, difficulty, config.seed)?;
    let mut keyboard = KeyboardState::new();
    let mut worker = OpponentWorker::new();

    loop {
        match session.awaiting() {
            None => {
                print_board(&session);
                print_outcome(&session.outcome()?);
                let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                if !matches!(again.to_lowercase().as_str(), "y" | "yes") {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session = new_session(vocabulary, difficulty, None)?;
                keyboard.reset();
            }
            Some(Player::Opponent) => {
                let delay = if config.no_delay {
                    Duration::ZERO
                } else {
                    difficulty.thinking_delay()
                };
                let spinner = thinking_spinner(difficulty)?;
                let decision = play_opponent_turn(&mut session, &mut worker, delay, &spinner)?;
                spinner.finish_and_clear();
                println!(
                    "🤖 Opponent played {}",
                    decision.guess.text().bright_magenta().bold()
                );
            }
            Some(Player::Human) => {
                print_board(&session);
                print_keyboard(&keyboard);
                let Some(line) = get_user_input("\nYour guess")? else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                };

                match DuelCommand::parse(&line) {
                    DuelCommand::Quit => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    DuelCommand::New => {
                        worker.cancel();
                        session = new_session(vocabulary, difficulty, None)?;
                        keyboard.reset();
                        println!("\n🔄 New game started!");
                    }
                    DuelCommand::Words => print_word_bank(session.vocabulary()),
                    DuelCommand::Help => print_help(),
                    DuelCommand::Level(level) => {
                        worker.cancel();
                        difficulty = level;
                        session = new_session(vocabulary, difficulty, None)?;
                        keyboard.reset();
                        println!("\n🔄 New game at {difficulty} difficulty!");
                    }
                    DuelCommand::Unknown(text) => {
                        println!("❌ Unknown command '{text}'. Type :help for commands.");
                    }
                    DuelCommand::Guess(text) => match session.submit_human_guess(&text) {
                        Ok(outcome) => {
                            if let Some((word, _)) = session.human().guesses().last() {
                                keyboard.update(word, &outcome.verdicts);
                            }
                        }
                        Err(GameError::InvalidGuess(e)) => println!("❌ {e}"),
                        Err(e) => return Err(e.into()),
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::wordlists::Vocabulary;

    #[test]
    fn plain_input_is_a_guess() {
        assert_eq!(DuelCommand::parse(" earth \n"), DuelCommand::Guess("earth".to_string()));
    }

    #[test]
    fn commands_are_recognised() {
        assert_eq!(DuelCommand::parse(":q"), DuelCommand::Quit);
        assert_eq!(DuelCommand::parse(":NEW"), DuelCommand::New);
        assert_eq!(DuelCommand::parse(":words"), DuelCommand::Words);
        assert_eq!(DuelCommand::parse(":help"), DuelCommand::Help);
        assert_eq!(
            DuelCommand::parse(":level expert"),
            DuelCommand::Level(Difficulty::Expert)
        );
    }

    #[test]
    fn bad_level_is_unknown() {
        assert!(matches!(DuelCommand::parse(":level insane"), DuelCommand::Unknown(_)));
        assert!(matches!(DuelCommand::parse(":level"), DuelCommand::Unknown(_)));
        assert!(matches!(DuelCommand::parse(":dance"), DuelCommand::Unknown(_)));
    }

    #[test]
    fn opponent_turn_through_worker() {
        let vocabulary = Vocabulary::embedded();
        let mut session = new_session(vocabulary.words(), Difficulty::Medium, Some(5)).unwrap();
        let mut worker = OpponentWorker::new();

        session.submit_human_guess("earth").unwrap();
        let decision = play_opponent_turn(
            &mut session,
            &mut worker,
            Duration::ZERO,
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(session.opponent().sub_game().attempts(), 1);
        assert_eq!(session.opponent().sub_game().guesses()[0].0, decision.guess);
        assert_eq!(session.awaiting(), Some(Player::Human));
    }

    #[test]
    fn opponent_turn_out_of_order_fails() {
        let vocabulary = Vocabulary::embedded();
        let mut session = new_session(vocabulary.words(), Difficulty::Easy, Some(5)).unwrap();
        let mut worker = OpponentWorker::new();

        let result = play_opponent_turn(
            &mut session,
            &mut worker,
            Duration::ZERO,
            &ProgressBar::hidden(),
        );
        assert!(result.is_err());
        assert!(!worker.is_busy());
    }

    #[test]
    fn full_game_reaches_an_outcome() {
        let vocabulary = Vocabulary::embedded();
        let mut session = new_session(vocabulary.words(), Difficulty::Hard, Some(11)).unwrap();
        let mut worker = OpponentWorker::new();
        let spinner = ProgressBar::hidden();

        let mut moves = 0;
        while let Some(player) = session.awaiting() {
            match player {
                Player::Human => {
                    session.submit_human_guess("fungi").unwrap();
                }
                Player::Opponent => {
                    play_opponent_turn(&mut session, &mut worker, Duration::ZERO, &spinner)
                        .unwrap();
                }
            }
            moves += 1;
            assert!(moves <= 2 * MAX_ATTEMPTS);
        }

        assert!(session.outcome().is_ok());
    }
}
