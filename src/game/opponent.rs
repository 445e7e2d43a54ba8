//! Background computation of opponent guesses
//!
//! The UI hands an [`OpponentTurn`] to the worker and keeps polling for the
//! reply. Every job is tagged with the generation current when it was spawned;
//! [`OpponentWorker::cancel`] moves to a new generation so late replies from an
//! abandoned game are dropped instead of applied.

use super::OpponentTurn;
use crate::solver::Decision;
use log::{debug, trace};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// A finished opponent computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentReply {
    pub generation: u64,
    pub decision: Decision,
}

pub struct OpponentWorker {
    sender: Sender<OpponentReply>,
    receiver: Receiver<OpponentReply>,
    generation: Arc<AtomicU64>,
    pending: bool,
}

impl Default for OpponentWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentWorker {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            generation: Arc::new(AtomicU64::new(0)),
            pending: false,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// True while a job of the current generation has not been received
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending
    }

    /// Compute `turn` on a background thread
    ///
    /// The reply is held back until at least `delay` has passed since the call,
    /// so fast searches still appear to think. Returns the job's generation.
    pub fn spawn(&mut self, turn: OpponentTurn, delay: Duration) -> u64 {
        let generation = self.generation();
        let current = Arc::clone(&self.generation);
        let sender = self.sender.clone();
        self.pending = true;

        thread::spawn(move || {
            let started = Instant::now();
            let decision = turn.decide();
            if let Some(rest) = delay.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }

            if current.load(Ordering::SeqCst) != generation {
                trace!("dropping opponent reply from generation {generation}");
                return;
            }
            // The receiver only disappears when the worker itself is dropped
            let _ = sender.send(OpponentReply {
                generation,
                decision,
            });
        });

        generation
    }

    /// Abandon any job in flight
    pub fn cancel(&mut self) {
        let previous = self.generation.fetch_add(1, Ordering::SeqCst);
        if self.pending {
            debug!("cancelled opponent job from generation {previous}");
        }
        self.pending = false;
        while self.receiver.try_recv().is_ok() {}
    }

    /// Take the current job's reply if it has arrived
    pub fn try_recv(&mut self) -> Option<OpponentReply> {
        while let Ok(reply) = self.receiver.try_recv() {
            if let Some(reply) = self.accept(reply) {
                return Some(reply);
            }
        }
        None
    }

    /// Block until the current job's reply arrives or `timeout` passes
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<OpponentReply> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let reply = self.receiver.recv_timeout(remaining).ok()?;
            if let Some(reply) = self.accept(reply) {
                return Some(reply);
            }
        }
    }

    fn accept(&mut self, reply: OpponentReply) -> Option<OpponentReply> {
        if reply.generation != self.generation() {
            trace!("ignoring stale reply from generation {}", reply.generation);
            return None;
        }
        self.pending = false;
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, Player};
    use crate::solver::Difficulty;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(difficulty: Difficulty) -> GameSession {
        let vocabulary = Vocabulary::embedded();
        let mut session =
            GameSession::with_rng(vocabulary.words(), difficulty, StdRng::seed_from_u64(21))
                .unwrap();
        session.submit_human_guess("QWERT").unwrap();
        session
    }

    #[test]
    fn reply_arrives_and_can_be_applied() {
        let mut session = session(Difficulty::Medium);
        let mut worker = OpponentWorker::new();

        let generation = worker.spawn(session.prepare_opponent_turn().unwrap(), Duration::ZERO);
        assert!(worker.is_busy());

        let reply = worker.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(reply.generation, generation);
        assert!(!worker.is_busy());

        session.apply_opponent_guess(reply.decision.guess).unwrap();
        assert_eq!(session.opponent().sub_game().attempts(), 1);
        assert_eq!(session.awaiting(), Some(Player::Human));
    }

    #[test]
    fn cancelled_job_is_ignored() {
        let mut session = session(Difficulty::Easy);
        let mut worker = OpponentWorker::new();

        worker.spawn(
            session.prepare_opponent_turn().unwrap(),
            Duration::from_millis(100),
        );
        worker.cancel();
        assert!(!worker.is_busy());

        assert!(worker.recv_timeout(Duration::from_millis(400)).is_none());
        assert!(worker.try_recv().is_none());
    }

    #[test]
    fn only_the_latest_generation_is_delivered() {
        let mut first = session(Difficulty::Easy);
        let mut second = session(Difficulty::Easy);
        let mut worker = OpponentWorker::new();

        worker.spawn(first.prepare_opponent_turn().unwrap(), Duration::ZERO);
        worker.cancel();
        let current = worker.spawn(second.prepare_opponent_turn().unwrap(), Duration::ZERO);

        let reply = worker.recv_timeout(Duration::from_secs(10)).unwrap();
        assert_eq!(reply.generation, current);
    }

    #[test]
    fn reply_waits_for_the_delay() {
        let mut session = session(Difficulty::Easy);
        let mut worker = OpponentWorker::new();
        let started = Instant::now();

        worker.spawn(
            session.prepare_opponent_turn().unwrap(),
            Duration::from_millis(150),
        );
        assert!(worker.recv_timeout(Duration::from_secs(10)).is_some());
        assert!(started.elapsed() >= Duration::from_millis(150));
    }
}
