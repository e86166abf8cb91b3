//! The game core: pipes and their pool, the bird, the floor, and the
//! coordinator that ties them into a session.
//!
//! Nothing in here touches the terminal. The coordinator is driven by an
//! external loop and talks back through [`signals::Signal`].

pub mod background;
pub mod bird;
pub mod coordinator;
pub mod floor;
pub mod pipe_pair;
pub mod pipes;
pub mod pool;
pub mod session;
pub mod signals;
pub mod timer;

pub use bird::{Bird, BirdEvent, BirdState};
pub use coordinator::{ActionOutcome, GameCoordinator};
pub use pipe_pair::{PipePair, ScoreSink};
pub use pipes::Pipes;
pub use pool::{PipeHandle, PipePool};
pub use session::{GameSession, RunState};
pub use signals::{Screen, Signal, Sound};
