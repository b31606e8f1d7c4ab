//! Move selection: the agent's answer for one turn.
//!
//! [`MoveSelector::select_move`] picks the search depth from the game phase,
//! narrows the root candidates by priority and runs the search:
//!
//! 1. **Corner** - if any legal move lands on a corner, only those are searched.
//! 2. **Edge** - otherwise, if any legal move lands on a
//!    [priority edge](crate::regions::PRIORITY_EDGES), only those.
//! 3. **Any** - otherwise every legal move.
//!
//! The filter applies at the root only. When the player has no legal move the
//! decision is [`MoveChoice::Pass`].

use othello_engine::{Board, MoveList, MoveOrder, Player, Position};
use serde::{Deserialize, Serialize};

use crate::{
    board_evaluator::BoardEvaluator,
    phase::GamePhase,
    regions::{is_corner, is_priority_edge},
    search::{SearchEngine, SearchPolicy},
};

/// Search depth for each game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDepths {
    pub early: u32,
    pub mid: u32,
    pub late: u32,
}

impl PhaseDepths {
    pub const DEFAULT: Self = Self {
        early: 6,
        mid: 3,
        late: 2,
    };

    #[must_use]
    pub fn for_phase(&self, phase: GamePhase) -> u32 {
        match phase {
            GamePhase::Early => self.early,
            GamePhase::Mid => self.mid,
            GamePhase::Late => self.late,
        }
    }
}

impl Default for PhaseDepths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub policy: SearchPolicy,
    pub depths: PhaseDepths,
}

/// Which root filter produced the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum MovePriority {
    #[display("Prioritizing Corner...")]
    Corner,
    #[display("Prioritizing Edge...")]
    Edge,
    #[display("Finding Non-Edge/Corner Move...")]
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveChoice {
    Play(Position),
    Pass,
}

impl MoveChoice {
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Play(pos) => Some(pos),
            Self::Pass => None,
        }
    }
}

/// Outcome of one [`MoveSelector::select_move`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDecision {
    pub choice: MoveChoice,
    pub priority: MovePriority,
    pub phase: GamePhase,
    pub depth: u32,
    /// Search score of the chosen move.
    pub score: f32,
    /// Evaluation of the unchanged board for the player on move.
    pub static_score: f32,
    pub nodes: u64,
}

/// Chooses moves for one player at a time.
///
/// # Example
///
/// ```
/// use othello_engine::{Board, MoveOrder, Player, SearchSeed};
/// use othello_evaluator::{
///     board_evaluator::HeuristicEvaluator,
///     move_selector::{MoveChoice, MoveSelector, SearchConfig},
/// };
///
/// let selector = MoveSelector::new(Box::new(HeuristicEvaluator::default()), SearchConfig::default());
/// let mut order = MoveOrder::with_seed(SearchSeed::from(11));
/// let decision = selector.select_move(Player::One, &Board::INITIAL, 0, &mut order);
/// assert!(matches!(decision.choice, MoveChoice::Play(_)));
/// ```
#[derive(Debug)]
pub struct MoveSelector<'a> {
    engine: SearchEngine<'a>,
    depths: PhaseDepths,
}

impl<'a> MoveSelector<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn BoardEvaluator + 'a>, config: SearchConfig) -> Self {
        Self {
            engine: SearchEngine::new(evaluator, config.policy),
            depths: config.depths,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine<'a> {
        &self.engine
    }

    #[must_use]
    pub fn depths(&self) -> PhaseDepths {
        self.depths
    }

    pub fn select_move(
        &self,
        player: Player,
        board: &Board,
        turn: u32,
        order: &mut MoveOrder,
    ) -> MoveDecision {
        let phase = GamePhase::from_turn(turn);
        let depth = self.depths.for_phase(phase);
        let static_score = self
            .engine
            .evaluator()
            .evaluate(player, board, player, phase);

        let (priority, candidates) = prioritized_moves(order.legal_moves(player, board));
        let Some(&first) = candidates.first() else {
            return MoveDecision {
                choice: MoveChoice::Pass,
                priority,
                phase,
                depth,
                score: static_score,
                static_score,
                nodes: 0,
            };
        };

        let outcome = self
            .engine
            .search(player, board, depth, turn, &candidates, order);
        MoveDecision {
            // Only a NaN score leaves the root without a best move.
            choice: MoveChoice::Play(outcome.best_move.unwrap_or(first)),
            priority,
            phase,
            depth,
            score: outcome.score,
            static_score,
            nodes: outcome.nodes,
        }
    }
}

/// Narrows `moves` to corners, then priority edges, keeping their order.
#[must_use]
pub fn prioritized_moves(moves: MoveList) -> (MovePriority, MoveList) {
    let corners: MoveList = moves.iter().copied().filter(|pos| is_corner(*pos)).collect();
    if !corners.is_empty() {
        return (MovePriority::Corner, corners);
    }
    let edges: MoveList = moves
        .iter()
        .copied()
        .filter(|pos| is_priority_edge(*pos))
        .collect();
    if !edges.is_empty() {
        return (MovePriority::Edge, edges);
    }
    (MovePriority::Any, moves)
}
