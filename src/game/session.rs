//! Score and run state for one play session.

use super::pipe_pair::ScoreSink;
use super::signals::{Outbox, Signal, Sound};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Over,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: RunState,
    score: u32,
    high_score: u32,
}

impl GameSession {
    pub fn new(high_score: u32) -> Self {
        Self {
            state: RunState::NotStarted,
            score: 0,
            high_score,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_over(&self) -> bool {
        self.state == RunState::Over
    }

    /// NotStarted → Running with a zero score.
    pub fn begin(&mut self) -> bool {
        if self.state != RunState::NotStarted {
            return false;
        }
        self.state = RunState::Running;
        self.score = 0;
        true
    }

    /// Running → Over. Returns false if the run was not in progress.
    pub fn finish(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.state = RunState::Over;
        true
    }

    /// Promote the current score to high score if it beats it.
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// The run just ended on a fresh best.
    pub fn is_new_record(&self) -> bool {
        self.score > 0 && self.score == self.high_score
    }

    pub fn increment(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.score = self.score.saturating_add(1);
        true
    }

    /// Back to NotStarted. The high score is kept.
    pub fn reset(&mut self) {
        self.state = RunState::NotStarted;
        self.score = 0;
    }
}

/// Scoring sink handed to pipes: bumps the session and notifies the HUD.
pub struct Scoreboard<'a> {
    pub session: &'a mut GameSession,
    pub outbox: &'a mut Outbox,
}

impl ScoreSink for Scoreboard<'_> {
    fn is_running(&self) -> bool {
        self.session.is_running()
    }

    fn increment_score(&mut self) {
        if self.session.increment() {
            self.outbox.emit(Signal::ScoreChanged(self.session.score()));
            self.outbox.play(Sound::Score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut session = GameSession::new(5);
        assert_eq!(session.state(), RunState::NotStarted);
        assert!(session.begin());
        assert!(session.is_running());
        assert!(session.finish());
        assert!(session.is_over());
        assert!(!session.finish());
        session.reset();
        assert_eq!(session.state(), RunState::NotStarted);
        assert_eq!(session.high_score(), 5);
    }

    #[test]
    fn test_increment_only_while_running() {
        let mut session = GameSession::new(0);
        assert!(!session.increment());
        session.begin();
        assert!(session.increment());
        session.finish();
        assert!(!session.increment());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_high_score_monotonic() {
        let mut session = GameSession::new(3);
        session.begin();
        session.increment();
        assert!(!session.record_high_score());
        assert_eq!(session.high_score(), 3);

        for _ in 0..4 {
            session.increment();
        }
        assert!(session.record_high_score());
        assert_eq!(session.high_score(), 5);
        assert!(session.is_new_record());
    }

    #[test]
    fn test_zero_score_is_never_a_record() {
        let session = GameSession::new(0);
        assert!(!session.is_new_record());
    }

    #[test]
    fn test_scoreboard_emits_signals() {
        let mut session = GameSession::new(0);
        let mut outbox = Outbox::new();
        session.begin();

        let mut board = Scoreboard {
            session: &mut session,
            outbox: &mut outbox,
        };
        assert!(board.is_running());
        board.increment_score();

        assert_eq!(session.score(), 1);
        assert_eq!(
            outbox.drain(),
            vec![Signal::ScoreChanged(1), Signal::PlaySound(Sound::Score)]
        );
    }
}
