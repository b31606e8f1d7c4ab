//! Game-level state built on top of the core rules.
//!
//! - [`MoveOrder`] - Seeded shuffling of legal moves, the tie-break source for search
//! - [`SearchSeed`] - 128-bit seed for reproducible move orders
//! - [`Game`] - A full game under standard capture rules, with passes and game over
//!
//! # Example
//!
//! ```
//! use othello_engine::{Game, MoveOrder, SearchSeed};
//!
//! let mut order = MoveOrder::with_seed(SearchSeed::from(7));
//! let mut game = Game::new();
//!
//! while game.status().is_playing() {
//!     let moves = order.legal_moves(game.to_move(), game.board());
//!     game.play(moves[0]).unwrap();
//! }
//!
//! let (one, two) = game.disc_counts();
//! assert!(one + two <= 64);
//! assert!(game.result().is_some());
//! ```

pub use self::{game::*, move_order::*};

mod game;
mod move_order;
