//! Board evaluation and move search for the Othello agent.
//!
//! The crate is layered the same way a turn is answered:
//!
//! ```text
//! Move Selection (phase depth, root priority filter)
//!     ↓ uses
//! Search (minimax with alpha-beta over a search policy)
//!     ↓ uses
//! Board Evaluation (weighted positional factors)
//! ```
//!
//! - [`move_selector`] - [`MoveSelector`](move_selector::MoveSelector) answers
//!   one turn: it picks the depth from the [`phase`], narrows the root moves to
//!   corners or edges when possible and runs the search.
//! - [`search`] - [`SearchEngine`](search::SearchEngine) and the
//!   [`SearchPolicy`](search::SearchPolicy) axes that select between the
//!   classic match client's behavior and a standard game-tree search.
//! - [`board_evaluator`] - the [`BoardEvaluator`](board_evaluator::BoardEvaluator)
//!   trait and the weighted [`HeuristicEvaluator`](board_evaluator::HeuristicEvaluator).
//! - [`weights`] - [`FactorWeights`](weights::FactorWeights), injected into the
//!   evaluator and loadable from JSON.
//! - [`regions`] - Fixed cell sets (corners, edges, center, ...).
//!
//! # Example
//!
//! ```
//! use othello_engine::{Board, MoveOrder, Player, SearchSeed};
//! use othello_evaluator::{
//!     board_evaluator::HeuristicEvaluator,
//!     move_selector::{MovePriority, MoveSelector, SearchConfig},
//!     search::SearchPolicy,
//!     weights::FactorWeights,
//! };
//!
//! let config = SearchConfig {
//!     policy: SearchPolicy::REFERENCE,
//!     ..SearchConfig::default()
//! };
//! let selector = MoveSelector::new(Box::new(HeuristicEvaluator::new(FactorWeights::DEFAULT)), config);
//!
//! let mut order = MoveOrder::with_seed(SearchSeed::from(2024));
//! let decision = selector.select_move(Player::One, &Board::INITIAL, 0, &mut order);
//! assert_eq!(decision.priority, MovePriority::Any);
//! assert_eq!(decision.depth, 6);
//! ```

pub mod board_evaluator;
pub mod move_selector;
pub mod phase;
pub mod regions;
pub mod search;
pub mod weights;
