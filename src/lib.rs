//! Conway's Game of Life on a wrapped square board.
//!
//! The engine is split the way a front end consumes it: [`patterns`] builds
//! seed boards, [`generation`] holds the board and the life rule,
//! [`simulation`] owns the state a UI reads and mutates, and [`ticker`] is the
//! timer resource behind auto-ticking.

pub mod config;
pub mod error;
pub mod generation;
pub mod patterns;
pub mod settings;
pub mod simulation;
pub mod ticker;

pub use error::{ConfigError, SimulationError};
pub use generation::Generation;
pub use patterns::PatternId;
pub use settings::SimulationSettings;
pub use simulation::{Intent, Simulation, SimulationStats};
