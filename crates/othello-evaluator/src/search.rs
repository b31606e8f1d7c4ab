//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Every node either evaluates its board (remaining depth is zero or it has no
//! candidate moves) or tries each candidate in list order, recursing with the
//! opponent on move. A node is maximizing when the player on move is the root
//! player. The turn counter advances by one only below maximizing nodes, so a
//! search of depth `d` evaluates its leaves at turn `turn + ceil(d / 2)`.
//!
//! # Policies
//!
//! How a node generates and undoes its children is selected by
//! [`SearchPolicy`]:
//!
//! | Axis | [`SearchPolicy::REFERENCE`] | [`SearchPolicy::STANDARD`] |
//! |---|---|---|
//! | [`MoveSource`] | [`Inherited`](MoveSource::Inherited): the root list at every depth | [`PerNode`](MoveSource::PerNode): legal moves of the node's own board |
//! | [`Rollback`] | [`ForwardApply`](Rollback::ForwardApply): one shared board, "undone" by applying the move for the opponent | [`Snapshot`](Rollback::Snapshot): each child gets its own copy |
//! | [`MoveEffect`] | [`ClaimLegalTargets`](MoveEffect::ClaimLegalTargets): [`apply_move`] | [`Capture`](MoveEffect::Capture): [`capture_move`] |
//!
//! [`SearchPolicy::REFERENCE`] replays the classic match client's sequence of
//! board mutations exactly. Under it a branch may observe a board left behind
//! by its siblings, and the inherited list may name occupied or illegal cells
//! at deeper plies. [`SearchPolicy::STANDARD`]
//! searches the real game tree.
//!
//! # Example
//!
//! ```
//! use othello_engine::{Board, MoveOrder, Player, SearchSeed};
//! use othello_evaluator::{
//!     board_evaluator::HeuristicEvaluator,
//!     search::{SearchEngine, SearchPolicy},
//! };
//!
//! let engine = SearchEngine::new(Box::new(HeuristicEvaluator::default()), SearchPolicy::STANDARD);
//! let mut order = MoveOrder::with_seed(SearchSeed::from(1));
//! let candidates = order.legal_moves(Player::One, &Board::INITIAL);
//! let outcome = engine.search(Player::One, &Board::INITIAL, 3, 0, &candidates, &mut order);
//! assert!(candidates.contains(&outcome.best_move.unwrap()));
//! ```

use othello_engine::{Board, MoveList, MoveOrder, Player, Position, apply_move, capture_move};
use serde::{Deserialize, Serialize};

use crate::{board_evaluator::BoardEvaluator, phase::GamePhase};

/// Where a child node gets its candidate moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveSource {
    /// Every node searches the root's candidate list. The root list bounds
    /// the width of the whole tree.
    Inherited,
    /// Every node enumerates the legal moves of its own board, shuffled by
    /// the [`MoveOrder`] passed to the search.
    PerNode,
}

/// How a node restores its board after searching a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rollback {
    /// Mutates one shared board and then applies the same target for the
    /// opponent. This does not restore the previous cells.
    ForwardApply,
    /// Searches each child on a copy of the parent board.
    Snapshot,
}

/// How a move changes the board inside the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveEffect {
    /// [`apply_move`]: the player claims all of their legal targets and the
    /// target itself.
    ClaimLegalTargets,
    /// [`capture_move`]: standard Othello flips.
    Capture,
}

impl MoveEffect {
    pub fn apply(self, player: Player, board: &mut Board, target: Position) {
        match self {
            Self::ClaimLegalTargets => apply_move(player, board, target),
            Self::Capture => {
                capture_move(player, board, target);
            }
        }
    }
}

/// Complete description of how the search expands nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchPolicy {
    pub moves: MoveSource,
    pub rollback: Rollback,
    pub effect: MoveEffect,
}

impl SearchPolicy {
    /// Bit-for-bit behavior of the classic match client.
    pub const REFERENCE: Self = Self {
        moves: MoveSource::Inherited,
        rollback: Rollback::ForwardApply,
        effect: MoveEffect::ClaimLegalTargets,
    };

    /// Game-tree search under the real rules.
    pub const STANDARD: Self = Self {
        moves: MoveSource::PerNode,
        rollback: Rollback::Snapshot,
        effect: MoveEffect::Capture,
    };
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Plain minimax; visits every node.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// `None` when the root was terminal.
    pub best_move: Option<Position>,
    /// Score for the root player.
    pub score: f32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

#[derive(Debug)]
pub struct SearchEngine<'a> {
    evaluator: Box<dyn BoardEvaluator + 'a>,
    policy: SearchPolicy,
    pruning: Pruning,
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn BoardEvaluator + 'a>, policy: SearchPolicy) -> Self {
        Self {
            evaluator,
            policy,
            pruning: Pruning::default(),
        }
    }

    #[must_use]
    pub fn with_pruning(self, pruning: Pruning) -> Self {
        Self { pruning, ..self }
    }

    #[must_use]
    pub fn evaluator(&self) -> &dyn BoardEvaluator {
        self.evaluator.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    #[must_use]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Searches `depth` plies below `board` with `root` on move.
    ///
    /// `candidates` are the root's moves, tried in order; the first of equally
    /// scored moves wins, so the caller's ordering is the tie-break. The search
    /// runs on a copy of `board`. `order` supplies child move lists under
    /// [`MoveSource::PerNode`] and is untouched otherwise.
    pub fn search(
        &self,
        root: Player,
        board: &Board,
        depth: u32,
        turn: u32,
        candidates: &[Position],
        order: &mut MoveOrder,
    ) -> SearchOutcome {
        let mut searcher = Searcher {
            engine: self,
            root,
            order,
            nodes: 0,
        };
        let mut board = *board;
        let (best_move, score) =
            searcher.node(&mut board, depth, root, turn, Bounds::FULL, candidates);
        SearchOutcome {
            best_move,
            score,
            nodes: searcher.nodes,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    alpha: f32,
    beta: f32,
}

impl Bounds {
    const FULL: Self = Self {
        alpha: f32::NEG_INFINITY,
        beta: f32::INFINITY,
    };
}

struct Searcher<'e, 'a, 'o> {
    engine: &'e SearchEngine<'a>,
    root: Player,
    order: &'o mut MoveOrder,
    nodes: u64,
}

impl Searcher<'_, '_, '_> {
    fn node(
        &mut self,
        board: &mut Board,
        depth: u32,
        on_move: Player,
        turn: u32,
        mut bounds: Bounds,
        candidates: &[Position],
    ) -> (Option<Position>, f32) {
        self.nodes += 1;
        if depth == 0 || candidates.is_empty() {
            let phase = GamePhase::from_turn(turn);
            let score = self
                .engine
                .evaluator
                .evaluate(self.root, board, on_move, phase);
            return (None, score);
        }

        let policy = self.engine.policy;
        let maximizing = on_move == self.root;
        let next = on_move.opponent();
        let next_turn = if maximizing { turn + 1 } else { turn };

        let mut best_move = None;
        let mut best_score = if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };

        for &target in candidates {
            let score = match policy.rollback {
                Rollback::ForwardApply => {
                    policy.effect.apply(on_move, board, target);
                    let score = self.child(board, depth - 1, next, next_turn, bounds, candidates);
                    policy.effect.apply(next, board, target);
                    score
                }
                Rollback::Snapshot => {
                    let mut child = *board;
                    policy.effect.apply(on_move, &mut child, target);
                    self.child(&mut child, depth - 1, next, next_turn, bounds, candidates)
                }
            };

            if maximizing && score > best_score {
                best_move = Some(target);
                best_score = score;
                bounds.alpha = bounds.alpha.max(best_score);
            } else if !maximizing && score < best_score {
                best_move = Some(target);
                best_score = score;
                bounds.beta = bounds.beta.min(best_score);
            }

            if self.engine.pruning.is_alpha_beta() && bounds.beta <= bounds.alpha {
                break;
            }
        }

        (best_move, best_score)
    }

    fn child(
        &mut self,
        board: &mut Board,
        depth: u32,
        on_move: Player,
        turn: u32,
        bounds: Bounds,
        inherited: &[Position],
    ) -> f32 {
        match self.engine.policy.moves {
            MoveSource::Inherited => self.node(board, depth, on_move, turn, bounds, inherited).1,
            MoveSource::PerNode => {
                let moves = if depth == 0 {
                    MoveList::new()
                } else {
                    self.order.legal_moves(on_move, board)
                };
                self.node(board, depth, on_move, turn, bounds, &moves).1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use othello_engine::{SearchSeed, legal_moves};
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;
    use crate::board_evaluator::HeuristicEvaluator;

    const POLICIES: [SearchPolicy; 5] = [
        SearchPolicy::REFERENCE,
        SearchPolicy::STANDARD,
        SearchPolicy {
            moves: MoveSource::Inherited,
            rollback: Rollback::Snapshot,
            effect: MoveEffect::Capture,
        },
        SearchPolicy {
            moves: MoveSource::Inherited,
            rollback: Rollback::Snapshot,
            effect: MoveEffect::ClaimLegalTargets,
        },
        SearchPolicy {
            moves: MoveSource::PerNode,
            rollback: Rollback::Snapshot,
            effect: MoveEffect::ClaimLegalTargets,
        },
    ];

    fn engine(policy: SearchPolicy, pruning: Pruning) -> SearchEngine<'static> {
        SearchEngine::new(Box::new(HeuristicEvaluator::default()), policy).with_pruning(pruning)
    }

    /// Boards reached by a few random standard moves from the opening.
    fn random_board(rng: &mut Pcg32, plies: usize) -> (Board, Player) {
        let mut board = Board::INITIAL;
        let mut player = Player::One;
        for _ in 0..plies {
            let moves = legal_moves(player, &board);
            if moves.is_empty() {
                break;
            }
            let target = moves[rng.random_range(0..moves.len())];
            capture_move(player, &mut board, target);
            player = player.opponent();
        }
        if legal_moves(player, &board).is_empty() {
            player = player.opponent();
        }
        (board, player)
    }

    #[derive(Debug)]
    struct ConstantEvaluator;

    impl BoardEvaluator for ConstantEvaluator {
        fn evaluate(&self, _: Player, _: &Board, _: Player, _: GamePhase) -> f32 {
            1.0
        }
    }

    /// Records every evaluated board and phase.
    #[derive(Debug, Default)]
    struct RecordingEvaluator {
        seen: Mutex<Vec<(Board, GamePhase)>>,
    }

    impl BoardEvaluator for RecordingEvaluator {
        fn evaluate(&self, _: Player, board: &Board, _: Player, phase: GamePhase) -> f32 {
            self.seen.lock().unwrap().push((*board, phase));
            0.0
        }
    }

    #[test]
    fn test_terminal_root() {
        let e = engine(SearchPolicy::STANDARD, Pruning::AlphaBeta);
        assert_eq!(e.pruning(), Pruning::AlphaBeta);
        let mut order = MoveOrder::with_seed(SearchSeed::from(0));
        let candidates = legal_moves(Player::One, &Board::INITIAL);

        let at_zero = e.search(Player::One, &Board::INITIAL, 0, 0, &candidates, &mut order);
        assert_eq!(at_zero.best_move, None);
        assert_eq!(at_zero.nodes, 1);
        let expected = e
            .evaluator()
            .evaluate(Player::One, &Board::INITIAL, Player::One, GamePhase::Early);
        assert_eq!(at_zero.score, expected);

        let no_moves = e.search(Player::One, &Board::INITIAL, 4, 0, &[], &mut order);
        assert_eq!(no_moves.best_move, None);
        assert_eq!(no_moves.nodes, 1);
        assert_eq!(no_moves.score, expected);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::INITIAL;
        let candidates = legal_moves(Player::One, &board);
        let mut order = MoveOrder::with_seed(SearchSeed::from(5));
        engine(SearchPolicy::REFERENCE, Pruning::AlphaBeta)
            .search(Player::One, &board, 4, 0, &candidates, &mut order);
        assert_eq!(board, Board::INITIAL);
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut rng = Pcg32::seed_from_u64(42);
        for case in 0..12 {
            let (board, player) = random_board(&mut rng, case * 3);
            let candidates = legal_moves(player, &board);
            for policy in POLICIES {
                for depth in 1..=3 {
                    let seed = SearchSeed::from(u64::try_from(case).unwrap());
                    let pruned = engine(policy, Pruning::AlphaBeta).search(
                        player,
                        &board,
                        depth,
                        20,
                        &candidates,
                        &mut MoveOrder::with_seed(seed),
                    );
                    let full = engine(policy, Pruning::Disabled).search(
                        player,
                        &board,
                        depth,
                        20,
                        &candidates,
                        &mut MoveOrder::with_seed(seed),
                    );
                    assert_eq!(
                        pruned.score, full.score,
                        "case {case}, {policy:?}, depth {depth}"
                    );
                    assert!(
                        pruned.nodes <= full.nodes,
                        "case {case}, {policy:?}, depth {depth}: {} > {}",
                        pruned.nodes,
                        full.nodes
                    );
                }
            }
        }
    }

    #[test]
    fn test_reference_search_is_deterministic() {
        let mut rng = Pcg32::seed_from_u64(9);
        let (board, player) = random_board(&mut rng, 10);
        let candidates = legal_moves(player, &board);
        let e = engine(SearchPolicy::REFERENCE, Pruning::AlphaBeta);
        let run = |seed: u64| {
            let mut order = MoveOrder::with_seed(SearchSeed::from(seed));
            e.search(player, &board, 4, 10, &candidates, &mut order)
        };
        let a = run(1);
        let b = run(2);
        // The inherited list never consults the move order.
        assert_eq!(a, b);
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let candidates = legal_moves(Player::One, &Board::INITIAL);
        for policy in [SearchPolicy::REFERENCE, SearchPolicy::STANDARD] {
            let e = SearchEngine::new(Box::new(ConstantEvaluator), policy);
            let outcome = e.search(
                Player::One,
                &Board::INITIAL,
                3,
                0,
                &candidates,
                &mut MoveOrder::with_seed(SearchSeed::from(0)),
            );
            assert_eq!(outcome.best_move, Some(candidates[0]), "{policy:?}");
            assert_eq!(outcome.score, 1.0);
        }
    }

    #[test]
    fn test_turn_advances_only_below_maximizing_nodes() {
        let candidates = [Position::new(2, 3)];
        let policy = SearchPolicy {
            moves: MoveSource::Inherited,
            rollback: Rollback::Snapshot,
            effect: MoveEffect::ClaimLegalTargets,
        };
        for (depth, expected) in [(1, GamePhase::Mid), (2, GamePhase::Mid), (3, GamePhase::Late)] {
            let recorder = RecordingEvaluator::default();
            SearchEngine::new(Box::new(&recorder), policy).search(
                Player::One,
                &Board::INITIAL,
                depth,
                44,
                &candidates,
                &mut MoveOrder::with_seed(SearchSeed::from(0)),
            );
            let seen = recorder.seen.lock().unwrap();
            assert_eq!(seen.len(), 1);
            // 44 + ceil(depth / 2) crosses into the late game only at depth 3.
            assert_eq!(seen[0].1, expected, "depth {depth}");
        }
    }

    #[test]
    fn test_forward_apply_leaks_between_siblings() {
        // Under the reference policy the "undo" after the first root move is
        // another forward apply, so the second branch starts from a board the
        // first branch left behind. Snapshot rollback evaluates the board the
        // move actually produces.
        let candidates = [Position::new(2, 3), Position::new(3, 2)];
        let mut expected = Board::INITIAL;
        apply_move(Player::One, &mut expected, Position::new(3, 2));

        let forward = RecordingEvaluator::default();
        let reference = SearchEngine::new(Box::new(&forward), SearchPolicy::REFERENCE)
            .with_pruning(Pruning::Disabled);
        reference.search(
            Player::One,
            &Board::INITIAL,
            1,
            0,
            &candidates,
            &mut MoveOrder::with_seed(SearchSeed::from(0)),
        );
        let forward_seen = forward.seen.lock().unwrap();
        assert_eq!(forward_seen.len(), 2);
        assert_ne!(forward_seen[1].0, expected);

        let snapshot = RecordingEvaluator::default();
        let policy = SearchPolicy {
            rollback: Rollback::Snapshot,
            ..SearchPolicy::REFERENCE
        };
        SearchEngine::new(Box::new(&snapshot), policy)
            .with_pruning(Pruning::Disabled)
            .search(
                Player::One,
                &Board::INITIAL,
                1,
                0,
                &candidates,
                &mut MoveOrder::with_seed(SearchSeed::from(0)),
            );
        let snapshot_seen = snapshot.seen.lock().unwrap();
        assert_eq!(snapshot_seen.len(), 2);
        assert_eq!(snapshot_seen[1].0, expected);
    }

    #[test]
    fn test_per_node_children_only_play_legal_moves() {
        // With standard rules and snapshots every evaluated board must be
        // reachable, so discs on the board only grow by one per ply.
        let recorder = RecordingEvaluator::default();
        let candidates = legal_moves(Player::One, &Board::INITIAL);
        SearchEngine::new(Box::new(&recorder), SearchPolicy::STANDARD)
            .with_pruning(Pruning::Disabled)
            .search(
                Player::One,
                &Board::INITIAL,
                3,
                0,
                &candidates,
                &mut MoveOrder::with_seed(SearchSeed::from(3)),
            );
        let seen = recorder.seen.lock().unwrap();
        assert!(!seen.is_empty());
        for (board, _) in seen.iter() {
            let discs = board.disc_count(Player::One) + board.disc_count(Player::Two);
            assert_eq!(discs, 7, "unexpected board\n{board}");
        }
    }
}
