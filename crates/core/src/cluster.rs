//! Cluster detection - find matched runs on the board
//!
//! Two independent linear scans: one left-to-right over each row, one
//! top-to-bottom over each column. A run extends while consecutive cells hold
//! the same color and closes on a color change, a removed cell, or the end of
//! the line. Closed runs of [`MIN_RUN`] or longer are emitted anchored at
//! their first cell.
//!
//! A horizontal and a vertical run crossing through a shared tile are
//! reported as two clusters, and both score. Removed (`None`) cells never
//! extend a run and never emit one.

use match3_types::{Cluster, MIN_RUN};

use crate::board::Board;

/// Find all maximal matched runs on the board.
pub fn find_clusters(board: &Board) -> Vec<Cluster> {
    let mut clusters = Vec::new();

    // Horizontal runs.
    for row in 0..board.rows() {
        let mut run: u8 = 1;
        for column in 0..board.columns() {
            let mut closes = column == board.columns() - 1;
            if !closes {
                match (board.color(column, row), board.color(column + 1, row)) {
                    (Some(a), Some(b)) if a == b => run += 1,
                    _ => closes = true,
                }
            }
            if closes {
                if run >= MIN_RUN {
                    clusters.push(Cluster {
                        column: column + 1 - run,
                        row,
                        length: run,
                        horizontal: true,
                    });
                }
                run = 1;
            }
        }
    }

    // Vertical runs.
    for column in 0..board.columns() {
        let mut run: u8 = 1;
        for row in 0..board.rows() {
            let mut closes = row == board.rows() - 1;
            if !closes {
                match (board.color(column, row), board.color(column, row + 1)) {
                    (Some(a), Some(b)) if a == b => run += 1,
                    _ => closes = true,
                }
            }
            if closes {
                if run >= MIN_RUN {
                    clusters.push(Cluster {
                        column,
                        row: row + 1 - run,
                        length: run,
                        horizontal: false,
                    });
                }
                run = 1;
            }
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use match3_types::TileColor;

    /// 8x8 board with a 2x2-periodic four-color pattern: no runs anywhere.
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
    fn test_uniform_board_full_line_runs() {
        // A fresh board is all one color: one run per row and per column.
        let board = Board::new(8, 8);
        let clusters = find_clusters(&board);
        assert_eq!(clusters.len(), 16);
        assert!(clusters.iter().all(|c| c.length == 8));
    }

    #[test]
    fn test_patterned_board_has_no_clusters() {
        assert!(find_clusters(&patterned_board()).is_empty());
    }

    #[test]
    fn test_single_horizontal_run() {
        let mut board = patterned_board();
        for column in 0..3 {
            board.set_color(column, 0, Some(TileColor::Cyan));
        }

        let clusters = find_clusters(&board);
        assert_eq!(
            clusters,
            vec![Cluster {
                column: 0,
                row: 0,
                length: 3,
                horizontal: true,
            }]
        );
    }

    #[test]
    fn test_single_vertical_run() {
        let mut board = patterned_board();
        for row in 3..7 {
            board.set_color(5, row, Some(TileColor::White));
        }

        let clusters = find_clusters(&board);
        assert_eq!(
            clusters,
            vec![Cluster {
                column: 5,
                row: 3,
                length: 4,
                horizontal: false,
            }]
        );
    }

    #[test]
    fn test_run_touching_right_edge() {
        let mut board = patterned_board();
        for column in 5..8 {
            board.set_color(column, 2, Some(TileColor::Magenta));
        }

        let clusters = find_clusters(&board);
        assert_eq!(
            clusters,
            vec![Cluster {
                column: 5,
                row: 2,
                length: 3,
                horizontal: true,
            }]
        );
    }

    #[test]
    fn test_two_runs_in_one_row() {
        let mut board = patterned_board();
        for column in 0..3 {
            board.set_color(column, 4, Some(TileColor::Cyan));
        }
        for column in 4..8 {
            board.set_color(column, 4, Some(TileColor::White));
        }

        let clusters = find_clusters(&board);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].column, 0);
        assert_eq!(clusters[0].length, 3);
        assert_eq!(clusters[1].column, 4);
        assert_eq!(clusters[1].length, 4);
    }

    #[test]
    fn test_l_shape_reports_two_clusters() {
        let mut board = patterned_board();
        // Horizontal arm through (0,0)..(2,0), vertical arm through (0,0)..(0,2).
        for column in 0..3 {
            board.set_color(column, 0, Some(TileColor::Magenta));
        }
        for row in 1..3 {
            board.set_color(0, row, Some(TileColor::Magenta));
        }

        let clusters = find_clusters(&board);
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().any(|c| c.horizontal && c.length == 3));
        assert!(clusters.iter().any(|c| !c.horizontal && c.length == 3));
    }

    #[test]
    fn test_removed_cells_break_runs() {
        let mut board = Board::new(8, 8);
        // All red, but a removed cell splits row 0 into runs of 3 and 4.
        board.set_color(3, 0, None);

        let clusters = find_clusters(&board);
        let row0: Vec<_> = clusters.iter().filter(|c| c.horizontal && c.row == 0).collect();
        assert_eq!(row0.len(), 2);
        assert_eq!((row0[0].column, row0[0].length), (0, 3));
        assert_eq!((row0[1].column, row0[1].length), (4, 4));
    }

    #[test]
    fn test_removed_cells_never_match_each_other() {
        let mut board = patterned_board();
        for column in 0..5 {
            board.set_color(column, 3, None);
        }
        assert!(find_clusters(&board).is_empty());
    }

    #[test]
    fn test_two_long_runs_not_merged() {
        let mut board = patterned_board();
        // A 5-run stays one cluster, not a 3-run plus overlap.
        for column in 1..6 {
            board.set_color(column, 6, Some(TileColor::Cyan));
        }

        let clusters = find_clusters(&board);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].length, 5);
        assert_eq!(clusters[0].column, 1);
    }
}
