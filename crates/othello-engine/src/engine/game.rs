use crate::{
    InvalidMoveError,
    core::{
        board::{Board, Player, Position},
        rules::{self, MoveList},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

/// A game played under standard capture rules.
///
/// After every move the turn passes to the opponent; when the opponent has no
/// legal move the turn comes straight back, and when neither side can move the
/// game is over.
///
/// # Example
///
/// ```
/// use othello_engine::{Game, Player, Position};
///
/// let mut game = Game::new();
/// assert_eq!(game.to_move(), Player::One);
///
/// game.play(Position::new(2, 3)).unwrap();
/// assert_eq!(game.to_move(), Player::Two);
/// assert_eq!(game.disc_counts(), (4, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    ply: usize,
    passes: usize,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::INITIAL, Player::One)
    }

    /// Starts from an arbitrary position, passing immediately if `to_move`
    /// has no legal move.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            to_move,
            ply: 0,
            passes: 0,
            status: GameStatus::Playing,
        };
        game.settle_turn();
        game
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Number of forced passes so far.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_game_over() {
            return MoveList::new();
        }
        rules::legal_moves(self.to_move, &self.board)
    }

    /// Disc counts as `(player 1, player 2)`.
    #[must_use]
    pub fn disc_counts(&self) -> (usize, usize) {
        (
            self.board.disc_count(Player::One),
            self.board.disc_count(Player::Two),
        )
    }

    /// Returns the result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.status.is_game_over() {
            return None;
        }
        let (one, two) = self.disc_counts();
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Plays `target` for the player to move and returns the number of
    /// flipped discs.
    pub fn play(&mut self, target: Position) -> Result<usize, InvalidMoveError> {
        if self.status.is_game_over() {
            return Err(InvalidMoveError::GameOver);
        }
        let flipped = rules::play_move(self.to_move, &mut self.board, target)?;
        self.ply += 1;
        self.to_move = self.to_move.opponent();
        self.settle_turn();
        Ok(flipped)
    }

    fn settle_turn(&mut self) {
        if rules::has_legal_move(self.to_move, &self.board) {
            return;
        }
        if rules::has_legal_move(self.to_move.opponent(), &self.board) {
            self.passes += 1;
            self.to_move = self.to_move.opponent();
            return;
        }
        self.status = GameStatus::GameOver;
    }
}
