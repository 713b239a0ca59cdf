//! Move enumeration - find every swap that would produce a cluster
//!
//! Every orthogonally-adjacent pair is probed with a speculative
//! swap-detect-swap-back on a scratch copy of the board, so the caller's
//! board is never touched. The probe is O(columns + rows) detection per pair,
//! which is fine at the target board sizes and doubles as the correctness
//! oracle for any faster variant.
//!
//! Output order is deterministic: the row-major horizontal pass first, then
//! the column-major vertical pass, so "pick move k" is reproducible for a
//! given board.

use match3_types::Move;

use crate::board::Board;
use crate::cluster::find_clusters;

/// True iff the two cells are orthogonal unit-distance neighbors.
pub fn is_adjacent(column1: u8, row1: u8, column2: u8, row2: u8) -> bool {
    (column1.abs_diff(column2) == 1 && row1 == row2)
        || (row1.abs_diff(row2) == 1 && column1 == column2)
}

/// Enumerate all legal swaps on the board.
pub fn find_moves(board: &Board) -> Vec<Move> {
    let mut probe = board.clone();
    let mut moves = Vec::new();

    // Horizontal swaps.
    for row in 0..probe.rows() {
        for column in 0..probe.columns() - 1 {
            probe.swap(column, row, column + 1, row);
            let matched = !find_clusters(&probe).is_empty();
            probe.swap(column, row, column + 1, row);

            if matched {
                moves.push(Move {
                    column1: column,
                    row1: row,
                    column2: column + 1,
                    row2: row,
                });
            }
        }
    }

    // Vertical swaps.
    for column in 0..probe.columns() {
        for row in 0..probe.rows() - 1 {
            probe.swap(column, row, column, row + 1);
            let matched = !find_clusters(&probe).is_empty();
            probe.swap(column, row, column, row + 1);

            if matched {
                moves.push(Move {
                    column1: column,
                    row1: row,
                    column2: column,
                    row2: row + 1,
                });
            }
        }
    }

    moves
}
