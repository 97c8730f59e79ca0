//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardState, Cell, Game, MoveKind, MoveRecord, PlayerId, QuoridorError, Wall, WallOrientation,
};

pub use crate::init_logging;
