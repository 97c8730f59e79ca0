//! Rules engine for the two-player wall-and-pawn race game Quoridor.
//!
//! The crate holds board state, enumerates legal pawn moves (straight and
//! diagonal jumps included), validates wall placements under the
//! path-existence guarantee, finds shortest paths to the goal row, and
//! transcodes state to and from the remote server's JSON wire schema. It is
//! a pure library: synchronous, single-threaded, no I/O. Rendering, audio,
//! and network transport belong to its consumers.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod moves;
mod pathfinding;
pub mod prelude;
mod protocol;
mod walls;

pub use board::{BoardState, Cell, Player, Wall, WallOrientation};
pub use common::{MoveKind, MoveRecord, PlayerId, QuoridorError};
pub use config::{BOARD_SIZE, PLAYER_ONE_START, PLAYER_TWO_START, STARTING_WALLS};
pub use game::Game;
pub use logging::init_logging;
