//! Fire-and-forget notifications from the game core to the presentation layer.
//!
//! The core never waits on these; the front-end drains them once per frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Flap,
    Hit,
    Score,
    StartMusic,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    PlaySound(Sound),
    StopSound(Sound),
    ShowScreen(Screen),
    HideScreen(Screen),
    /// Score label text changed.
    ScoreChanged(u32),
    /// Start screen high-score label.
    HighScoreChanged(u32),
    /// Final results for the game-over screen.
    GameOverShown {
        score: u32,
        high_score: u32,
        new_record: bool,
    },
    BackgroundChanged(usize),
    MuteChanged(bool),
}

/// Queue of pending signals. Sound signals are dropped while muted.
#[derive(Debug, Default)]
pub struct Outbox {
    signals: Vec<Signal>,
    muted: bool,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, signal: Signal) {
        if self.muted && matches!(signal, Signal::PlaySound(_)) {
            return;
        }
        self.signals.push(signal);
    }

    pub fn play(&mut self, sound: Sound) {
        self.emit(Signal::PlaySound(sound));
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            self.muted = muted;
            self.signals.push(Signal::MuteChanged(muted));
        }
    }

    pub fn drain(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    pub fn pending(&self) -> &[Signal] {
        &self.signals
    }
}
