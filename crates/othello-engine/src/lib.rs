pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidBoardStateError {
    #[display("expected {BOARD_SIZE} rows, got {got}")]
    RowCount { got: usize },
    #[display("expected {BOARD_SIZE} cells in row {row}, got {got}")]
    ColumnCount { row: usize, got: usize },
    #[display("expected {} cells, got {got}", BOARD_SIZE * BOARD_SIZE)]
    CellCount { got: usize },
    #[display("invalid cell value {value} at ({row}, {col})")]
    CellValue { row: usize, col: usize, value: u8 },
    #[display("invalid cell character {ch:?} at ({row}, {col})")]
    CellChar { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    #[display("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[display("{position} is already occupied")]
    Occupied { position: Position },
    #[display("{position} captures no discs for {player}")]
    NoCapture { position: Position, player: Player },
    #[display("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid player tag {value} (expected 1 or 2)")]
pub struct InvalidPlayerError {
    pub value: u8,
}
