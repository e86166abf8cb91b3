//! Game coordinator: owns every piece of the game and moves the session
//! between NotStarted, Running and Over.
//!
//! The engine loop drives it through [`GameCoordinator::advance`] (or the
//! separate physics/frame ticks) and [`GameCoordinator::primary_action`].
//! Everything it wants the presentation layer to do goes out as [`Signal`]s.

use super::background::BackgroundPicker;
use super::bird::{Bird, BirdEvent, BirdState};
use super::floor::Floor;
use super::pipe_pair::ScoreSink;
use super::pipes::Pipes;
use super::session::{GameSession, RunState, Scoreboard};
use super::signals::{Outbox, Screen, Signal, Sound};
use super::timer::DeferredTimer;
use crate::config::GameConfig;
use crate::constants::{MAX_FRAME_DELTA_SECS, PHYSICS_TICK_SECS};
use crate::geometry::Rect;
use crate::high_score::HighScoreStorage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

/// What a primary action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Restarted,
    Started,
    Flapped,
    Ignored,
}

pub struct GameCoordinator {
    config: GameConfig,
    bird: Bird,
    pipes: Pipes,
    floor: Floor,
    background: BackgroundPicker,
    session: GameSession,
    storage: Box<dyn HighScoreStorage>,
    outbox: Outbox,
    game_over_timer: DeferredTimer,
    start_screen_visible: bool,
    game_over_screen_visible: bool,
    rng: StdRng,
    /// Pipe bodies for the current physics step.
    solids: Vec<Rect>,
    physics_accumulator: f32,
    save_attempts: u32,
}

impl GameCoordinator {
    /// Build the scene: load the high score, warm the pipe pool, pick a
    /// background and show the start screen.
    pub fn new(config: GameConfig, storage: Box<dyn HighScoreStorage>, rng: StdRng) -> Self {
        let high_score = storage.load();
        let bird = Bird::new(&config.bird);
        let pipes = Pipes::new(&config.pipes, bird.position().x);
        let floor = Floor::new(&config.floor);
        let background = BackgroundPicker::new(config.session.background_count);

        let mut coordinator = Self {
            config,
            bird,
            pipes,
            floor,
            background,
            session: GameSession::new(high_score),
            storage,
            outbox: Outbox::new(),
            game_over_timer: DeferredTimer::new(),
            start_screen_visible: true,
            game_over_screen_visible: false,
            rng,
            solids: Vec::new(),
            physics_accumulator: 0.0,
            save_attempts: 0,
        };

        coordinator.pick_background();
        coordinator.outbox.emit(Signal::ScoreChanged(0));
        coordinator.outbox.emit(Signal::HighScoreChanged(high_score));
        coordinator.outbox.emit(Signal::ShowScreen(Screen::Start));
        coordinator.outbox.emit(Signal::HideScreen(Screen::GameOver));
        coordinator.outbox.play(Sound::StartMusic);

        info!(high_score, "game ready");
        coordinator
    }

    /// Convenience constructor with a deterministic RNG.
    pub fn with_seed(config: GameConfig, storage: Box<dyn HighScoreStorage>, seed: u64) -> Self {
        Self::new(config, storage, StdRng::seed_from_u64(seed))
    }

    /// The single input: restart, start or flap depending on state.
    pub fn primary_action(&mut self) -> ActionOutcome {
        if self.session.is_over() && self.game_over_screen_visible {
            self.reset();
            return ActionOutcome::Restarted;
        }

        if self.session.state() == RunState::NotStarted && self.start_screen_visible {
            self.start();
            self.bird.flap();
            self.outbox.play(Sound::Flap);
            return ActionOutcome::Started;
        }

        if self.session.is_running() && self.bird.is_flying() && self.bird.flap() {
            self.outbox.play(Sound::Flap);
            return ActionOutcome::Flapped;
        }

        ActionOutcome::Ignored
    }

    /// NotStarted → Running: zero the score, launch the bird, start the world.
    pub fn start(&mut self) -> bool {
        if !self.session.begin() {
            debug!(state = ?self.session.state(), "start ignored");
            return false;
        }

        self.outbox.emit(Signal::ScoreChanged(0));
        self.start_screen_visible = false;
        self.outbox.emit(Signal::HideScreen(Screen::Start));
        self.outbox.emit(Signal::StopSound(Sound::StartMusic));

        self.bird.start_flying();
        self.floor.start_scrolling();
        self.pipes.start_spawning();

        info!("run started");
        true
    }

    /// Running → Over. Safe to call repeatedly: only the first call in a run
    /// saves the high score and schedules the game-over screen.
    pub fn game_over(&mut self) -> bool {
        if !self.session.finish() {
            return false;
        }

        self.outbox.play(Sound::Hit);
        self.floor.stop_scrolling();
        self.pipes.stop_spawning();

        if self.session.record_high_score() {
            self.save_high_score();
        }

        if self.game_over_timer.arm(self.config.session.game_over_delay) {
            debug!("replaced a pending game-over display");
        }

        info!(
            score = self.session.score(),
            high_score = self.session.high_score(),
            "run over"
        );
        true
    }

    /// Back to NotStarted with a fresh world and a new background.
    pub fn reset(&mut self) {
        self.pick_background();
        self.game_over_timer.cancel();

        self.game_over_screen_visible = false;
        self.outbox.emit(Signal::HideScreen(Screen::GameOver));
        self.outbox
            .emit(Signal::HighScoreChanged(self.session.high_score()));
        self.start_screen_visible = true;
        self.outbox.emit(Signal::ShowScreen(Screen::Start));
        self.outbox.play(Sound::StartMusic);

        self.session.reset();
        self.outbox.emit(Signal::ScoreChanged(0));

        // Bird first: the pipes restart relative to its spawn position
        self.bird.reset();
        self.floor.reset();
        self.pipes.reset(self.bird.position().x);

        debug!("game reset");
    }

    /// Award a point if the session is running.
    pub fn increment_score(&mut self) {
        self.scoreboard().increment_score();
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Feed `dt` seconds of real time: run whole fixed physics steps, then
    /// one frame step with the full `dt`.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA_SECS);

        self.physics_accumulator += dt;
        while self.physics_accumulator >= PHYSICS_TICK_SECS {
            self.physics_accumulator -= PHYSICS_TICK_SECS;
            self.physics_tick(PHYSICS_TICK_SECS);
        }

        self.frame_tick(dt);
    }

    /// Fixed-step update: bird motion, pipe hits, scoring, ground contact.
    pub fn physics_tick(&mut self, dt: f32) {
        self.pipes.collect_solids(&mut self.solids);

        if let Some(BirdEvent::Died) = self.bird.physics_step(dt, &self.solids) {
            info!(x = self.bird.position().x, "bird hit a pipe");
            self.game_over();
        }

        if self.bird.is_flying() {
            let body = self.bird.bounds();
            let mut board = Scoreboard {
                session: &mut self.session,
                outbox: &mut self.outbox,
            };
            self.pipes.check_scoring(&body, &mut board);
        }

        if matches!(self.bird.state(), BirdState::Flying | BirdState::Dead)
            && self.floor.touches(&self.bird.bounds())
        {
            debug!(y = self.bird.position().y, "bird reached the ground");
            self.bird.stop_falling();
            self.game_over();
        }
    }

    /// Variable-step update: spawning, floor recycling, deferred display.
    pub fn frame_tick(&mut self, dt: f32) {
        let bird_x = self.bird.position().x;
        self.pipes.tick(bird_x, &mut self.rng);
        self.floor.tick(bird_x);

        if self.game_over_timer.tick(dt) {
            self.show_game_over_screen();
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.outbox.is_muted();
        self.outbox.set_muted(muted);
        muted
    }

    pub fn is_muted(&self) -> bool {
        self.outbox.is_muted()
    }

    /// Take every signal emitted since the last drain.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        self.outbox.drain()
    }

    fn show_game_over_screen(&mut self) {
        self.game_over_screen_visible = true;
        self.outbox.emit(Signal::ShowScreen(Screen::GameOver));
        self.outbox.emit(Signal::GameOverShown {
            score: self.session.score(),
            high_score: self.session.high_score(),
            new_record: self.session.is_new_record(),
        });
        self.outbox.play(Sound::GameOver);
    }

    fn save_high_score(&mut self) {
        self.save_attempts += 1;
        let score = self.session.high_score();
        match self.storage.write(score) {
            Ok(()) => debug!(score, "saved high score"),
            Err(e) => error!(score, error = %e, "failed to save high score"),
        }
    }

    fn pick_background(&mut self) {
        if let Some(index) = self.background.pick(&mut self.rng) {
            self.outbox.emit(Signal::BackgroundChanged(index));
        }
    }

    fn scoreboard(&mut self) -> Scoreboard<'_> {
        Scoreboard {
            session: &mut self.session,
            outbox: &mut self.outbox,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &Pipes {
        &self.pipes
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn background(&self) -> Option<usize> {
        self.background.current()
    }

    pub fn is_start_screen_visible(&self) -> bool {
        self.start_screen_visible
    }

    pub fn is_game_over_screen_visible(&self) -> bool {
        self.game_over_screen_visible
    }

    pub fn is_game_over_pending(&self) -> bool {
        self.game_over_timer.is_pending()
    }

    /// High-score writes attempted since construction.
    pub fn save_attempts(&self) -> u32 {
        self.save_attempts
    }

    /// Game-over displays scheduled since construction.
    pub fn display_schedules(&self) -> u32 {
        self.game_over_timer.armed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_score::MemoryHighScore;

    fn coordinator() -> GameCoordinator {
        GameCoordinator::with_seed(GameConfig::default(), Box::new(MemoryHighScore::new()), 7)
    }

    #[test]
    fn test_initial_state() {
        let mut game = coordinator();
        assert_eq!(game.session().state(), RunState::NotStarted);
        assert!(game.is_start_screen_visible());
        assert!(!game.is_game_over_screen_visible());
        assert!(game.background().is_some());

        let signals = game.drain_signals();
        assert!(signals.contains(&Signal::ShowScreen(Screen::Start)));
        assert!(signals.contains(&Signal::PlaySound(Sound::StartMusic)));
        assert!(signals.contains(&Signal::HighScoreChanged(0)));
    }

    #[test]
    fn test_first_action_starts_and_flaps() {
        let mut game = coordinator();
        game.drain_signals();

        assert_eq!(game.primary_action(), ActionOutcome::Started);
        assert!(game.is_running());
        assert!(game.bird().is_flying());
        assert_eq!(game.bird().velocity().y, game.config().bird.jump_velocity);
        assert!(!game.is_start_screen_visible());

        let signals = game.drain_signals();
        assert!(signals.contains(&Signal::HideScreen(Screen::Start)));
        assert!(signals.contains(&Signal::StopSound(Sound::StartMusic)));
        assert!(signals.contains(&Signal::PlaySound(Sound::Flap)));
    }

    #[test]
    fn test_action_while_running_flaps() {
        let mut game = coordinator();
        game.primary_action();
        game.bird_mut().set_velocity(crate::geometry::Vec2::new(0.0, 300.0));
        assert_eq!(game.primary_action(), ActionOutcome::Flapped);
        assert_eq!(game.bird().velocity().y, game.config().bird.jump_velocity);
    }

    #[test]
    fn test_start_is_only_from_not_started() {
        let mut game = coordinator();
        assert!(game.start());
        assert!(!game.start());
    }

    #[test]
    fn test_increment_score_only_while_running() {
        let mut game = coordinator();
        game.increment_score();
        assert_eq!(game.session().score(), 0);

        game.start();
        game.increment_score();
        game.increment_score();
        assert_eq!(game.session().score(), 2);

        game.game_over();
        game.increment_score();
        assert_eq!(game.session().score(), 2);
    }

    #[test]
    fn test_game_over_before_start_is_noop() {
        let mut game = coordinator();
        assert!(!game.game_over());
        assert_eq!(game.display_schedules(), 0);
    }

    #[test]
    fn test_action_ignored_before_game_over_screen() {
        let mut game = coordinator();
        game.start();
        game.bird_mut().on_pipe_hit();
        game.game_over();
        assert_eq!(game.primary_action(), ActionOutcome::Ignored);
        assert!(game.session().is_over());
    }

    #[test]
    fn test_reset_cancels_pending_display() {
        let mut game = coordinator();
        game.start();
        game.game_over();
        assert!(game.is_game_over_pending());

        game.reset();
        assert!(!game.is_game_over_pending());
        game.advance(0.1);
        game.frame_tick(5.0);
        assert!(!game.is_game_over_screen_visible());
    }

    #[test]
    fn test_toggle_mute() {
        let mut game = coordinator();
        game.drain_signals();
        assert!(game.toggle_mute());
        game.primary_action();
        let signals = game.drain_signals();
        assert!(signals.contains(&Signal::MuteChanged(true)));
        assert!(!signals.iter().any(|s| matches!(s, Signal::PlaySound(_))));
        assert!(!game.toggle_mute());
    }
}
