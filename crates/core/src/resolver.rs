//! Resolver - clear, compact and refill until the board is stable
//!
//! The clear step marks every clustered cell as removed and computes, per
//! column, how far each surviving tile must fall. The shift step walks each
//! column bottom-up, sampling a fresh color into every removed cell and
//! swapping survivors down by their fall distance; the freshly sampled tiles
//! bubble up through those swaps and end at the top of the column, which is
//! exactly the refill-from-above the renderer animates.
//!
//! Resolution never awards points. Scoring belongs to the state machine,
//! which knows whether a pass came from a player swap or from board
//! legalization.

use match3_types::Cluster;

use crate::board::Board;
use crate::cluster::find_clusters;
use crate::config::GameConfig;
use crate::moves::find_moves;
use crate::rng::{random_color, SimpleRng};

/// Mark every clustered cell as removed and assign fall distances.
///
/// After this call each surviving tile's `shift` holds the number of removed
/// cells below it in its column; removed cells themselves hold 0.
pub fn remove_clusters(board: &mut Board, clusters: &[Cluster]) {
    for cluster in clusters {
        for (column, row) in cluster.cells() {
            board.set_color(column, row, None);
        }
    }

    for column in 0..board.columns() {
        let mut gap: u8 = 0;
        for row in (0..board.rows()).rev() {
            if board.color(column, row).is_none() {
                gap += 1;
                board.set_shift(column, row, 0);
            } else {
                board.set_shift(column, row, gap);
            }
        }
    }
}

/// Compact each column and refill the gaps with fresh random tiles.
///
/// Expects the fall distances computed by [`remove_clusters`]. Every `shift`
/// is reset to 0 afterwards, so the board comes out at rest.
pub fn shift_tiles(board: &mut Board, rng: &mut SimpleRng, palette_size: u8) {
    for column in 0..board.columns() {
        for row in (0..board.rows()).rev() {
            if board.color(column, row).is_none() {
                board.set_color(column, row, Some(random_color(rng, palette_size)));
            } else {
                let shift = board.shift(column, row);
                if shift > 0 {
                    board.swap(column, row, column, row + shift);
                }
            }
            board.set_shift(column, row, 0);
        }
    }
}

/// Clear, compact and refill repeatedly until no cluster remains.
///
/// Returns the number of passes. The loop has no fixed bound: every pass
/// replaces at least three tiles, and with three or more palette colors a
/// refill that re-creates a cluster becomes vanishingly unlikely to repeat,
/// so the loop terminates almost surely. It runs to completion within a
/// single call and never spans ticks.
pub fn resolve_clusters(board: &mut Board, rng: &mut SimpleRng, palette_size: u8) -> u32 {
    let mut passes = 0;
    loop {
        let clusters = find_clusters(board);
        if clusters.is_empty() {
            return passes;
        }
        remove_clusters(board, &clusters);
        shift_tiles(board, rng, palette_size);
        passes += 1;
        tracing::trace!(passes, cleared = clusters.len(), "resolve pass");
    }
}

/// Randomize and resolve until the board is stable and has at least one
/// legal move.
///
/// A board that resolves to zero clusters but offers zero moves is dead and
/// gets regenerated from scratch. Returns the number of attempts taken.
///
/// # Panics
///
/// Panics when `config.max_generate_attempts` full regenerations all come up
/// dead. With a validated configuration (palette of three or more colors on
/// a board at least 3x3) this is not reachable in practice; hitting the cap
/// means the configuration itself is degenerate.
pub fn generate_board(board: &mut Board, rng: &mut SimpleRng, config: &GameConfig) -> u32 {
    for attempt in 1..=config.max_generate_attempts {
        board.randomize(rng, config.palette_size);
        resolve_clusters(board, rng, config.palette_size);
        if !find_moves(board).is_empty() {
            tracing::debug!(attempt, "generated movable board");
            return attempt;
        }
    }
    panic!(
        "no movable board in {} attempts for {}x{} board with {} colors",
        config.max_generate_attempts,
        config.columns,
        config.rows,
        config.palette_size
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use match3_types::TileColor;

    fn patterned_board() -> Board {
        let mut board = Board::new(8, 8);
        for row in 0..8 {
            for column in 0..8 {
                board.set_color_index(column, row, (column % 2) + 2 * (row % 2));
            }
        }
        board
    }

    #[test]
    fn test_remove_clusters_marks_and_assigns_shifts() {
        let mut board = patterned_board();
        let cluster = Cluster {
            column: 2,
            row: 5,
            length: 3,
            horizontal: false,
        };

        remove_clusters(&mut board, &[cluster]);

        // Rows 5..=7 of column 2 are gone.
        assert_eq!(board.color(2, 5), None);
        assert_eq!(board.color(2, 6), None);
        assert_eq!(board.color(2, 7), None);
        // Everything above the gap falls by three; removed cells hold 0.
        for row in 0..5 {
            assert_eq!(board.shift(2, row), 3, "row {row}");
        }
        for row in 5..8 {
            assert_eq!(board.shift(2, row), 0, "row {row}");
        }
        // Untouched columns fall nowhere.
        for row in 0..8 {
            assert_eq!(board.shift(3, row), 0);
        }
    }

    #[test]
    fn test_shift_tiles_compacts_and_refills() {
        let mut board = patterned_board();
        let survivors: Vec<_> = (0..5).map(|row| board.color(2, row)).collect();
        let cluster = Cluster {
            column: 2,
            row: 5,
            length: 3,
            horizontal: false,
        };
        remove_clusters(&mut board, &[cluster]);

        let mut rng = SimpleRng::new(3);
        shift_tiles(&mut board, &mut rng, 7);

        // Survivors moved down by three, preserving order.
        for (row, color) in survivors.iter().enumerate() {
            assert_eq!(board.color(2, row as u8 + 3), *color);
        }
        // The gap at the top is refilled and every shift is cleared.
        assert!(board.is_full());
        for row in 0..8 {
            assert_eq!(board.shift(2, row), 0);
        }
    }

    #[test]
    fn test_shift_tiles_interior_gap() {
        let mut board = patterned_board();
        let top = board.color(4, 0);
        let cluster = Cluster {
            column: 4,
            row: 2,
            length: 3,
            horizontal: false,
        };
        remove_clusters(&mut board, &[cluster]);

        let mut rng = SimpleRng::new(11);
        shift_tiles(&mut board, &mut rng, 7);

        // The tile that was at the top of the column lands just above the
        // closed gap.
        assert_eq!(board.color(4, 3), top);
        assert!(board.is_full());
    }

    #[test]
    fn test_resolve_clusters_reaches_stability() {
        for seed in 0..25 {
            let mut rng = SimpleRng::new(seed);
            let mut board = Board::new(8, 8);
            board.randomize(&mut rng, 7);

            resolve_clusters(&mut board, &mut rng, 7);

            assert!(find_clusters(&board).is_empty(), "seed {seed}");
            assert!(board.is_full(), "seed {seed}");
        }
    }

    #[test]
    fn test_resolve_clusters_no_op_on_stable_board() {
        let mut board = patterned_board();
        let before = board.clone();
        let mut rng = SimpleRng::new(1);

        let passes = resolve_clusters(&mut board, &mut rng, 7);

        assert_eq!(passes, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_resolve_clears_seeded_run() {
        let mut board = patterned_board();
        for column in 0..3 {
            board.set_color(column, 0, Some(TileColor::Cyan));
        }
        let mut rng = SimpleRng::new(5);

        let passes = resolve_clusters(&mut board, &mut rng, 7);

        assert!(passes >= 1);
        assert!(find_clusters(&board).is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_generate_board_is_legal() {
        for seed in 0..10 {
            let mut rng = SimpleRng::new(seed);
            let mut board = Board::new(8, 8);
            let config = GameConfig::default();

            let attempts = generate_board(&mut board, &mut rng, &config);

            assert!(attempts >= 1, "seed {seed}");
            assert!(find_clusters(&board).is_empty(), "seed {seed}");
            assert!(!find_moves(&board).is_empty(), "seed {seed}");
        }
    }
}
