//! Fixed board regions used by the evaluator and by root move priority.

use othello_engine::Position;

pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 7),
    Position::new(7, 0),
    Position::new(7, 7),
];

/// Cells orthogonally adjacent to a corner. Holding one tends to hand the
/// corner to the opponent.
pub const CORNER_NEIGHBORS: [Position; 8] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(6, 0),
    Position::new(1, 7),
    Position::new(7, 1),
    Position::new(7, 6),
    Position::new(6, 7),
    Position::new(0, 6),
];

/// Cells diagonally inward of each corner, in evaluation order.
pub const CORNER_DIAGONALS: [Position; 4] = [
    Position::new(1, 1),
    Position::new(1, 6),
    Position::new(6, 1),
    Position::new(6, 6),
];

/// Border cells other than the corners.
pub const EDGES: [Position; 24] = {
    let mut cells = [Position::new(0, 1); 24];
    let mut i = 0;
    while i < 6 {
        cells[4 * i] = Position::new(0, i + 1);
        cells[4 * i + 1] = Position::new(7, i + 1);
        cells[4 * i + 2] = Position::new(i + 1, 0);
        cells[4 * i + 3] = Position::new(i + 1, 7);
        i += 1;
    }
    cells
};

pub const CENTER: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

/// Border cells that promote a root move to edge priority: the edges
/// without the corner neighbors.
pub const PRIORITY_EDGES: [Position; 16] = {
    let mut cells = [Position::new(0, 2); 16];
    let mut i = 0;
    while i < 4 {
        cells[4 * i] = Position::new(0, i + 2);
        cells[4 * i + 1] = Position::new(7, i + 2);
        cells[4 * i + 2] = Position::new(i + 2, 0);
        cells[4 * i + 3] = Position::new(i + 2, 7);
        i += 1;
    }
    cells
};

#[must_use]
pub fn is_corner(pos: Position) -> bool {
    CORNERS.contains(&pos)
}

#[must_use]
pub fn is_priority_edge(pos: Position) -> bool {
    PRIORITY_EDGES.contains(&pos)
}
