//! Wire transcoding: the server's JSON snapshot schema.
//!
//! The schema is fixed by the remote server and reproduced byte-for-byte:
//!
//! ```json
//! {
//!   "joueurs": [
//!     { "nom": "...", "murs": 10, "pos": [5, 1] },
//!     { "nom": "...", "murs": 10, "pos": [5, 9] }
//!   ],
//!   "murs": { "horizontaux": [[3, 4]], "verticaux": [] }
//! }
//! ```
//!
//! Index 0 of `joueurs` is always player one. The move-kind codes ("D",
//! "MH", "MV") and the `"(x, y)"` coordinate string live in
//! [`crate::common::MoveKind`] and [`crate::common::MoveRecord`].

use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::board::{BoardState, Cell, Player, Wall};
use crate::common::QuoridorError;

#[derive(Debug, Deserialize)]
struct PlayerWire {
    nom: String,
    murs: u8,
    pos: (u8, u8),
}

#[derive(Debug, Deserialize)]
struct WallsWire {
    horizontaux: Vec<(u8, u8)>,
    verticaux: Vec<(u8, u8)>,
}

#[derive(Debug, Deserialize)]
struct SnapshotWire {
    joueurs: Vec<PlayerWire>,
    murs: WallsWire,
}

impl BoardState {
    /// Serialize the state to the server's snapshot schema. Player order is
    /// fixed and wall lists keep their insertion order, so repeated calls on
    /// an unchanged state produce identical output.
    pub fn to_json(&self) -> String {
        let joueurs: Vec<_> = self
            .players
            .iter()
            .map(|player| {
                json!({
                    "nom": player.name,
                    "murs": player.walls_left,
                    "pos": [player.position.x, player.position.y],
                })
            })
            .collect();
        json!({
            "joueurs": joueurs,
            "murs": {
                "horizontaux": self.horizontal_walls,
                "verticaux": self.vertical_walls,
            },
        })
        .to_string()
    }

    /// Reconstruct a state from a server snapshot, replacing all previous
    /// content including the wall lists.
    ///
    /// Any missing or invalid field, off-board pawn, out-of-range wall
    /// anchor, or stacked pawns aborts with
    /// [`QuoridorError::MalformedState`]; no partially populated state can
    /// escape.
    pub fn from_json(snapshot: &str) -> Result<Self, QuoridorError> {
        let wire: SnapshotWire = serde_json::from_str(snapshot).map_err(|err| {
            error!("rejected malformed snapshot: {err}");
            QuoridorError::MalformedState(err.to_string())
        })?;
        Self::from_wire(wire).map_err(|err| {
            error!("rejected malformed snapshot: {err}");
            err
        })
    }

    fn from_wire(wire: SnapshotWire) -> Result<Self, QuoridorError> {
        let [one, two]: [PlayerWire; 2] = wire
            .joueurs
            .try_into()
            .map_err(|_| QuoridorError::MalformedState("expected exactly two players".into()))?;
        let one = player_from_wire(one)?;
        let two = player_from_wire(two)?;
        if one.position == two.position {
            return Err(QuoridorError::MalformedState(format!(
                "both pawns on {}",
                one.position
            )));
        }
        for &(x, y) in &wire.murs.horizontaux {
            if !Wall::horizontal(x, y).is_anchor_in_range() {
                return Err(QuoridorError::MalformedState(format!(
                    "horizontal wall anchor ({}, {}) is out of range",
                    x, y
                )));
            }
        }
        for &(x, y) in &wire.murs.verticaux {
            if !Wall::vertical(x, y).is_anchor_in_range() {
                return Err(QuoridorError::MalformedState(format!(
                    "vertical wall anchor ({}, {}) is out of range",
                    x, y
                )));
            }
        }
        Ok(Self {
            players: [one, two],
            horizontal_walls: wire.murs.horizontaux,
            vertical_walls: wire.murs.verticaux,
            last_move: None,
        })
    }
}

fn player_from_wire(wire: PlayerWire) -> Result<Player, QuoridorError> {
    let position = Cell::new(wire.pos.0, wire.pos.1);
    if !position.is_on_board() {
        return Err(QuoridorError::MalformedState(format!(
            "pawn position {} is off the board",
            position
        )));
    }
    Ok(Player {
        name: wire.nom,
        position,
        walls_left: wire.murs,
    })
}
