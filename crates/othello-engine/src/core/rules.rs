//! Move generation and move application.
//!
//! Two ways of applying a move exist side by side:
//!
//! - [`capture_move`] / [`play_move`] follow the standard capture rule: the
//!   target and every disc returned by [`compute_flips`] change color.
//! - [`apply_move`] gives the player every cell that is currently a legal
//!   target for them, plus the target itself. This is not an Othello rule; it
//!   is the mutation the classic client's search performs on its scratch
//!   board, and the search engine reproduces it when asked to.

use arrayvec::ArrayVec;
use rand::{Rng, seq::SliceRandom as _};

use crate::{
    InvalidMoveError,
    core::board::{BOARD_SIZE, Board, Position, Player},
};

/// Legal targets of one player; at most one entry per board cell.
pub type MoveList = ArrayVec<Position, { BOARD_SIZE * BOARD_SIZE }>;

/// Discs captured by one placement.
pub type FlipList = ArrayVec<Position, { BOARD_SIZE * BOARD_SIZE }>;

const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Returns the opponent discs `player` would capture by placing at `target`.
///
/// An occupied target captures nothing. Each direction is walked
/// independently: a run of opponent discs is captured only when it ends on a
/// disc held by `player`. Runs that reach the edge or an empty cell capture
/// nothing.
///
/// # Example
///
/// ```
/// use othello_engine::{Board, Player, Position, compute_flips};
///
/// let flips = compute_flips(Player::One, &Board::INITIAL, Position::new(2, 3));
/// assert_eq!(flips.as_slice(), &[Position::new(3, 3)]);
/// ```
#[must_use]
pub fn compute_flips(player: Player, board: &Board, target: Position) -> FlipList {
    let mut flips = FlipList::new();
    if !board.get(target).is_empty() {
        return flips;
    }

    let own = player.to_cell();
    let opponent = player.opponent().to_cell();
    for (dr, dc) in DIRECTIONS {
        let mut run = ArrayVec::<Position, BOARD_SIZE>::new();
        let mut cursor = target.offset(dr, dc);
        let bounded = loop {
            match cursor {
                Some(pos) if board.get(pos) == opponent => {
                    run.push(pos);
                    cursor = pos.offset(dr, dc);
                }
                Some(pos) => break board.get(pos) == own,
                None => break false,
            }
        };
        if bounded {
            flips.extend(run.into_iter().rev());
        }
    }
    flips
}

#[must_use]
pub fn is_legal_move(player: Player, board: &Board, target: Position) -> bool {
    !compute_flips(player, board, target).is_empty()
}

/// Returns the legal targets of `player` in row-major order.
#[must_use]
pub fn legal_moves(player: Player, board: &Board) -> MoveList {
    Position::all()
        .filter(|pos| is_legal_move(player, board, *pos))
        .collect()
}

/// Returns the legal targets of `player` in an order drawn from `rng`.
///
/// The order is the only tie-break between equally scored moves during
/// search, so a fixed seed gives a reproducible move choice.
pub fn enumerate_legal_moves<R>(player: Player, board: &Board, rng: &mut R) -> MoveList
where
    R: Rng + ?Sized,
{
    let mut moves = legal_moves(player, board);
    moves.shuffle(rng);
    moves
}

#[must_use]
pub fn has_legal_move(player: Player, board: &Board) -> bool {
    Position::all().any(|pos| is_legal_move(player, board, pos))
}

/// Gives `player` every cell that is currently a legal target for them, then
/// the target cell.
///
/// The legal targets are computed before any cell is written.
pub fn apply_move(player: Player, board: &mut Board, target: Position) {
    let cell = player.to_cell();
    for pos in legal_moves(player, board) {
        board.set(pos, cell);
    }
    board.set(target, cell);
}

/// Places a disc at `target` and flips the discs it captures.
///
/// No legality check is made; an illegal target is simply overwritten.
/// Returns the number of flipped discs.
pub fn capture_move(player: Player, board: &mut Board, target: Position) -> usize {
    let cell = player.to_cell();
    let flips = compute_flips(player, board, target);
    for pos in &flips {
        board.set(*pos, cell);
    }
    board.set(target, cell);
    flips.len()
}

/// Checked form of [`capture_move`] for authoritative play.
pub fn play_move(
    player: Player,
    board: &mut Board,
    target: Position,
) -> Result<usize, InvalidMoveError> {
    if !board.get(target).is_empty() {
        return Err(InvalidMoveError::Occupied { position: target });
    }
    if !is_legal_move(player, board, target) {
        return Err(InvalidMoveError::NoCapture {
            position: target,
            player,
        });
    }
    Ok(capture_move(player, board, target))
}
