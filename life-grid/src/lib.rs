#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod pacer;
mod random;
mod sim;

pub use error::LifeError;
pub use grid::{Cell, GridCells, GridState, Loc, Neighborhood, NUM_BUFFERS};
pub use pacer::{Clock, DEFAULT_MAX_FPS, FramePacer, SystemClock};
pub use random::Random;
pub use sim::{Command, CommandSet, RunState, SimState, SimulationLoop};
