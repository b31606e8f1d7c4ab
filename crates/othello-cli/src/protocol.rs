//! Match server wire format.
//!
//! The server sends one JSON object per turn and expects the chosen move back
//! as a JSON `[row, column]` array terminated by a newline.

use std::io::{self, Write};

use othello_engine::{Board, Player, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnPayload {
    pub board: Board,
    /// Per-turn time budget announced by the server. Not enforced.
    pub max_turn_time: f64,
    pub player: Player,
}

pub fn write_move<W>(writer: &mut W, position: Position) -> io::Result<Vec<u8>>
where
    W: Write,
{
    let mut response = serde_json::to_vec(&position)?;
    response.push(b'\n');
    writer.write_all(&response)?;
    writer.flush()?;
    Ok(response)
}
