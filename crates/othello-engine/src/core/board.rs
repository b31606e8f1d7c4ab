use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{InvalidBoardStateError, InvalidMoveError, InvalidPlayerError};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// One of the two sides of a game.
///
/// On the wire a player is the tag `1` or `2`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    #[display("player 1")]
    One,
    #[display("player 2")]
    Two,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Self::One => Cell::PlayerOne,
            Self::Two => Cell::PlayerTwo,
        }
    }

    #[must_use]
    pub const fn to_wire(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(InvalidPlayerError { value }),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.to_wire()
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Returns the player holding this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Player::One),
            Self::PlayerTwo => Some(Player::Two),
        }
    }

    #[must_use]
    pub fn is_held_by(self, player: Player) -> bool {
        self == player.to_cell()
    }

    #[must_use]
    pub const fn to_wire(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::PlayerOne => 1,
            Self::PlayerTwo => 2,
        }
    }

    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::PlayerOne),
            2 => Some(Self::PlayerTwo),
            _ => None,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::PlayerOne => 'X',
            Self::PlayerTwo => 'O',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'X' => Some(Self::PlayerOne),
            'O' => Some(Self::PlayerTwo),
            _ => None,
        }
    }
}

/// A `(row, column)` coordinate on the board, both in `0..8`.
///
/// Moves and board coordinates share this representation. On the wire a
/// position is the two-element array `[row, column]`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[display("({row}, {col})")]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, panicking when it is off the board.
    ///
    /// Intended for constants; use [`Self::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position off the board");
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, InvalidMoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidMoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Iterates over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self { row, col }))
    }

    /// Returns the neighbor in direction `(dr, dc)`, or `None` past the edge.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }
}

impl TryFrom<[usize; 2]> for Position {
    type Error = InvalidMoveError;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Self::try_new(row, col)
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

/// An 8×8 Othello board.
///
/// `Board` is a plain `Copy` value, so search code can snapshot it by
/// assignment. Snapshots received from the match server are validated by
/// [`Board::from_rows`]; the text form used by [`FromStr`] and [`fmt::Display`]
/// writes one row per line with `.` for empty, `X` for player 1 and `O` for
/// player 2.
///
/// # Example
///
/// ```
/// use othello_engine::{Board, Cell, Player, Position};
///
/// let board: Board = "
///     ........
///     ........
///     ........
///     ...OX...
///     ...XO...
///     ........
///     ........
///     ........
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board, Board::INITIAL);
/// assert_eq!(board.get(Position::new(3, 4)), Cell::PlayerOne);
/// assert_eq!(board.disc_count(Player::Two), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Standard opening position.
    pub const INITIAL: Self = {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::PlayerTwo;
        cells[3][4] = Cell::PlayerOne;
        cells[4][3] = Cell::PlayerOne;
        cells[4][4] = Cell::PlayerTwo;
        Self { cells }
    };

    /// Builds a board from wire rows (`0` empty, `1`/`2` player).
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, InvalidBoardStateError>
    where
        R: AsRef<[u8]>,
    {
        if rows.len() != BOARD_SIZE {
            return Err(InvalidBoardStateError::RowCount { got: rows.len() });
        }
        let mut board = Self::EMPTY;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(InvalidBoardStateError::ColumnCount {
                    row,
                    got: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = Cell::from_wire(value)
                    .ok_or(InvalidBoardStateError::CellValue { row, col, value })?;
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn to_rows(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::to_wire))
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    #[must_use]
    pub fn disc_count(&self, player: Player) -> usize {
        self.count(player.to_cell())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = InvalidBoardStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|ch| !ch.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(InvalidBoardStateError::CellCount { got: chars.len() });
        }
        let mut board = Self::EMPTY;
        for (pos, ch) in Position::all().zip(chars) {
            let cell = Cell::from_char(ch).ok_or(InvalidBoardStateError::CellChar {
                row: pos.row,
                col: pos.col,
                ch,
            })?;
            board.set(pos, cell);
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
