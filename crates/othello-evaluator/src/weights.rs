//! Factor weights for the heuristic evaluator.
//!
//! Weights are a single immutable value handed to
//! [`HeuristicEvaluator`](crate::board_evaluator::HeuristicEvaluator), so they can
//! be tuned, saved and loaded without touching evaluator code. The JSON form
//! uses camelCase factor names:
//!
//! ```json
//! {
//!   "corner": 0.64,
//!   "cornerNeighbor": 0.39,
//!   "cornerDiagonal": 0.81,
//!   "edge": 0.4,
//!   "central": 0.1,
//!   "pieceCount": 0.57,
//!   "mobility": 0.56
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Weight of every positional factor.
///
/// `corner_neighbor` is applied as a penalty; all weights are stored as
/// positive magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactorWeights {
    pub corner: f32,
    pub corner_neighbor: f32,
    pub corner_diagonal: f32,
    pub edge: f32,
    pub central: f32,
    pub piece_count: f32,
    pub mobility: f32,
}

impl FactorWeights {
    pub const DEFAULT: Self = Self {
        corner: 0.64,
        corner_neighbor: 0.39,
        corner_diagonal: 0.81,
        edge: 0.40,
        central: 0.10,
        piece_count: 0.57,
        mobility: 0.56,
    };

    /// All weights paired with their JSON names, in declaration order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f32); 7] {
        [
            ("corner", self.corner),
            ("cornerNeighbor", self.corner_neighbor),
            ("cornerDiagonal", self.corner_diagonal),
            ("edge", self.edge),
            ("central", self.central),
            ("pieceCount", self.piece_count),
            ("mobility", self.mobility),
        ]
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
