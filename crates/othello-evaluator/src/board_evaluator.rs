//! Board evaluation: scoring a position for the search.
//!
//! # How It Works
//!
//! [`HeuristicEvaluator`] computes a weighted sum of positional factors for
//! the player on move:
//!
//! | Factor | Applies | Contribution |
//! |---|---|---|
//! | corner | always | `+w` per corner held |
//! | corner neighbor | always | `-w` per corner-adjacent cell held |
//! | corner diagonal | always | `+w` per diagonal cell, see [`DiagonalScoring`] |
//! | edge | always | `+w` per non-corner border cell held |
//! | central | mid game | `+w` per center cell held |
//! | piece count | late game | `w × (own discs - opponent discs)` |
//! | mobility | always | `w × (own legal moves - opponent legal moves)` |
//!
//! The sum is then signed for the root player: it is returned as-is when the
//! player on move is the root player and negated otherwise, so every score the
//! search sees is "goodness for the root player".

use std::fmt;

use othello_engine::{Board, Player, Position, legal_moves};
use serde::{Deserialize, Serialize};

use crate::{
    phase::GamePhase,
    regions::{CENTER, CORNER_DIAGONALS, CORNER_NEIGHBORS, CORNERS, EDGES},
    weights::FactorWeights,
};

/// Scores boards for the search engine.
pub trait BoardEvaluator: fmt::Debug + Send + Sync {
    /// Scores `board` from `root`'s point of view (higher is better for
    /// `root`), with `on_move` to play in `phase`.
    fn evaluate(&self, root: Player, board: &Board, on_move: Player, phase: GamePhase) -> f32;
}

impl<T> BoardEvaluator for &T
where
    T: BoardEvaluator + ?Sized,
{
    fn evaluate(&self, root: Player, board: &Board, on_move: Player, phase: GamePhase) -> f32 {
        (**self).evaluate(root, board, on_move, phase)
    }
}

/// How the corner-diagonal factor counts its four cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagonalScoring {
    /// Score only the first held cell of `(1,1)`, `(1,6)`, `(6,1)`, `(6,6)`,
    /// in that order, and skip the rest.
    #[default]
    FirstMatch,
    /// Score every held cell.
    EveryCell,
}

/// Per-factor contributions for the player on move, before the root sign.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FactorBreakdown {
    pub corner: f32,
    pub corner_neighbor: f32,
    pub corner_diagonal: f32,
    pub edge: f32,
    pub central: f32,
    pub piece_count: f32,
    pub mobility: f32,
}

impl FactorBreakdown {
    #[must_use]
    pub fn total(&self) -> f32 {
        self.corner
            + self.corner_neighbor
            + self.corner_diagonal
            + self.edge
            + self.central
            + self.piece_count
            + self.mobility
    }
}

/// Weighted positional evaluator.
///
/// # Example
///
/// ```
/// use othello_engine::{Board, Player};
/// use othello_evaluator::{
///     board_evaluator::{BoardEvaluator, HeuristicEvaluator},
///     phase::GamePhase,
///     weights::FactorWeights,
/// };
///
/// let evaluator = HeuristicEvaluator::new(FactorWeights::DEFAULT);
/// let own = evaluator.evaluate(Player::One, &Board::INITIAL, Player::One, GamePhase::Early);
/// let other = evaluator.evaluate(Player::Two, &Board::INITIAL, Player::One, GamePhase::Early);
/// assert_eq!(own, -other);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    weights: FactorWeights,
    diagonal: DiagonalScoring,
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self::new(FactorWeights::DEFAULT)
    }
}

impl HeuristicEvaluator {
    #[must_use]
    pub fn new(weights: FactorWeights) -> Self {
        Self {
            weights,
            diagonal: DiagonalScoring::default(),
        }
    }

    #[must_use]
    pub fn with_diagonal_scoring(self, diagonal: DiagonalScoring) -> Self {
        Self { diagonal, ..self }
    }

    #[must_use]
    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    #[must_use]
    pub fn diagonal_scoring(&self) -> DiagonalScoring {
        self.diagonal
    }

    /// Computes every factor for `on_move`. Factors outside their phase are
    /// zero.
    #[must_use]
    pub fn breakdown(&self, board: &Board, on_move: Player, phase: GamePhase) -> FactorBreakdown {
        let w = &self.weights;
        let held = |cells: &[Position]| {
            cells
                .iter()
                .filter(|pos| board.get(**pos).is_held_by(on_move))
                .count()
        };
        let opponent = on_move.opponent();

        let corner_diagonal = match self.diagonal {
            DiagonalScoring::FirstMatch => CORNER_DIAGONALS
                .iter()
                .find(|pos| board.get(**pos).is_held_by(on_move))
                .map_or(0.0, |_| w.corner_diagonal),
            DiagonalScoring::EveryCell => weighted(held(&CORNER_DIAGONALS), w.corner_diagonal),
        };
        let central = if phase.is_mid() {
            weighted(held(&CENTER), w.central)
        } else {
            0.0
        };
        let piece_count = if phase.is_late() {
            weighted(board.disc_count(on_move), w.piece_count)
                - weighted(board.disc_count(opponent), w.piece_count)
        } else {
            0.0
        };
        let mobility = weighted(legal_moves(on_move, board).len(), w.mobility)
            - weighted(legal_moves(opponent, board).len(), w.mobility);

        FactorBreakdown {
            corner: weighted(held(&CORNERS), w.corner),
            corner_neighbor: -weighted(held(&CORNER_NEIGHBORS), w.corner_neighbor),
            corner_diagonal,
            edge: weighted(held(&EDGES), w.edge),
            central,
            piece_count,
            mobility,
        }
    }
}

impl BoardEvaluator for HeuristicEvaluator {
    fn evaluate(&self, root: Player, board: &Board, on_move: Player, phase: GamePhase) -> f32 {
        let score = self.breakdown(board, on_move, phase).total();
        if on_move == root { score } else { -score }
    }
}

#[expect(clippy::cast_precision_loss)]
fn weighted(count: usize, weight: f32) -> f32 {
    count as f32 * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn evaluator() -> HeuristicEvaluator {
        HeuristicEvaluator::new(FactorWeights::DEFAULT)
    }

    #[test]
    fn test_initial_board_is_balanced() {
        for phase in [GamePhase::Early, GamePhase::Mid, GamePhase::Late] {
            let b = evaluator().breakdown(&Board::INITIAL, Player::One, phase);
            assert_close(b.mobility, 0.0);
            assert_close(b.piece_count, 0.0);
            assert_close(b.corner + b.corner_neighbor + b.corner_diagonal + b.edge, 0.0);
        }
        let mid = evaluator().breakdown(&Board::INITIAL, Player::One, GamePhase::Mid);
        assert_close(mid.central, 2.0 * 0.10);
        let early = evaluator().breakdown(&Board::INITIAL, Player::One, GamePhase::Early);
        assert_close(early.central, 0.0);
    }

    #[test]
    fn test_corner_neighbor_and_edge_factors() {
        // (0,0) corner, (0,1) corner neighbor and edge, (0,3) edge.
        let b = board(
            "
            XX.X....
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let f = evaluator().breakdown(&b, Player::One, GamePhase::Early);
        assert_close(f.corner, 0.64);
        assert_close(f.corner_neighbor, -0.39);
        assert_close(f.edge, 2.0 * 0.40);
        assert_close(f.corner_diagonal, 0.0);

        let other = evaluator().breakdown(&b, Player::Two, GamePhase::Early);
        assert_close(other.corner, 0.0);
        assert_close(other.corner_neighbor, 0.0);
        assert_close(other.edge, 0.0);
    }

    #[test]
    fn test_diagonal_first_match_counts_one_cell() {
        // (1,1) is empty, so the first held diagonal is (1,6); (6,6) is skipped.
        let b = board(
            "
            ........
            ......X.
            ........
            ........
            ........
            ........
            ......X.
            ........
            ",
        );
        let first = evaluator().breakdown(&b, Player::One, GamePhase::Early);
        assert_close(first.corner_diagonal, 0.81);

        let every = evaluator()
            .with_diagonal_scoring(DiagonalScoring::EveryCell)
            .breakdown(&b, Player::One, GamePhase::Early);
        assert_close(every.corner_diagonal, 2.0 * 0.81);
    }

    #[test]
    fn test_piece_count_only_late() {
        let b = board(
            "
            ........
            ........
            ..XXX...
            ...XO...
            ........
            ........
            ........
            ........
            ",
        );
        let early = evaluator().breakdown(&b, Player::One, GamePhase::Early);
        let mid = evaluator().breakdown(&b, Player::One, GamePhase::Mid);
        let late = evaluator().breakdown(&b, Player::One, GamePhase::Late);
        assert_close(early.piece_count, 0.0);
        assert_close(mid.piece_count, 0.0);
        assert_close(late.piece_count, (4.0 - 1.0) * 0.57);
        assert_close(mid.central, 0.10);
    }

    #[test]
    fn test_mobility_differential() {
        let mut b = Board::INITIAL;
        othello_engine::capture_move(Player::One, &mut b, Position::new(2, 3));
        let own = legal_moves(Player::One, &b).len();
        let opp = legal_moves(Player::Two, &b).len();
        let f = evaluator().breakdown(&b, Player::One, GamePhase::Early);
        #[expect(clippy::cast_precision_loss)]
        let expected = (own as f32 - opp as f32) * 0.56;
        assert_close(f.mobility, expected);
    }

    #[test]
    fn test_sign_flips_with_root() {
        let b = board(
            "
            X.......
            .O......
            ..XO....
            ...XO...
            ....X...
            ........
            ........
            .......O
            ",
        );
        let e = evaluator();
        for phase in [GamePhase::Early, GamePhase::Mid, GamePhase::Late] {
            for on_move in Player::ALL {
                let as_root = e.evaluate(on_move, &b, on_move, phase);
                let as_other = e.evaluate(on_move.opponent(), &b, on_move, phase);
                assert_close(as_root, e.breakdown(&b, on_move, phase).total());
                assert_close(as_other, -as_root);
            }
        }
    }

    #[test]
    fn test_custom_weights() {
        let weights = FactorWeights {
            corner: 10.0,
            ..FactorWeights::DEFAULT
        };
        let b = board(
            "
            X......X
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ",
        );
        let f = HeuristicEvaluator::new(weights).breakdown(&b, Player::One, GamePhase::Early);
        assert_close(f.corner, 20.0);
    }
}
