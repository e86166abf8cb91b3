//! Presentation state built from the game's outbound signals.

use crate::constants::GAME_OVER_BLINK_DELAY_SECS;
use crate::game::signals::{Screen, Signal, Sound};
use crate::game::timer::DeferredTimer;

/// How long a sound cue stays on screen.
const SOUND_CUE_SECS: f32 = 0.4;

/// Results shown on the game-over card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverCard {
    pub score: u32,
    pub high_score: u32,
    pub new_record: bool,
}

#[derive(Debug, Default)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub start_screen: bool,
    pub game_over_screen: bool,
    pub game_over: Option<GameOverCard>,
    pub background: usize,
    pub muted: bool,
    pub music_playing: bool,
    /// Last sound played and how long it stays visible.
    pub sound_cue: Option<(Sound, f32)>,
    /// Restart prompt blinking on the game-over card.
    pub game_over_blinking: bool,
    blink_timer: DeferredTimer,
    elapsed: f32,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_all(&mut self, signals: impl IntoIterator<Item = Signal>) {
        for signal in signals {
            self.apply(signal);
        }
    }

    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::PlaySound(Sound::StartMusic) => self.music_playing = true,
            Signal::PlaySound(sound) => self.sound_cue = Some((sound, SOUND_CUE_SECS)),
            Signal::StopSound(Sound::StartMusic) => self.music_playing = false,
            Signal::StopSound(_) => {}
            Signal::ShowScreen(Screen::Start) => self.start_screen = true,
            Signal::HideScreen(Screen::Start) => self.start_screen = false,
            Signal::ShowScreen(Screen::GameOver) => {
                self.game_over_screen = true;
                self.game_over_blinking = false;
                self.blink_timer.arm(GAME_OVER_BLINK_DELAY_SECS);
            }
            Signal::HideScreen(Screen::GameOver) => {
                self.game_over_screen = false;
                self.game_over_blinking = false;
                self.game_over = None;
                self.blink_timer.cancel();
            }
            Signal::ScoreChanged(score) => self.score = score,
            Signal::HighScoreChanged(high_score) => self.high_score = high_score,
            Signal::GameOverShown {
                score,
                high_score,
                new_record,
            } => {
                self.game_over = Some(GameOverCard {
                    score,
                    high_score,
                    new_record,
                })
            }
            Signal::BackgroundChanged(index) => self.background = index,
            Signal::MuteChanged(muted) => {
                self.muted = muted;
                if muted {
                    self.sound_cue = None;
                }
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;

        if let Some((_, remaining)) = &mut self.sound_cue {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.sound_cue = None;
            }
        }

        if self.blink_timer.tick(dt) {
            self.game_over_blinking = true;
        }
    }

    /// Blink phase: on for 0.6s of every second.
    pub fn blink_on(&self) -> bool {
        self.elapsed.rem_euclid(1.0) < 0.6
    }

    pub fn sound_label(&self) -> Option<&'static str> {
        self.sound_cue.map(|(sound, _)| match sound {
            Sound::Flap => "flap",
            Sound::Hit => "thud",
            Sound::Score => "ding",
            Sound::GameOver => "game over",
            Sound::StartMusic => "music",
        })
    }
}
