//! Scoring module - points for cleared clusters
//!
//! A cluster of length L is worth `CLUSTER_SCORE_BASE * (L - 2)`: longer runs
//! earn extra. Overlapping horizontal and vertical clusters through a shared
//! tile are scored independently.

use match3_types::{Cluster, CLUSTER_SCORE_BASE};

/// Points awarded for one cleared cluster of the given length.
pub fn cluster_score(length: u8) -> u32 {
    CLUSTER_SCORE_BASE * u32::from(length.saturating_sub(2))
}

/// Total points for a batch of clusters cleared in one resolve pass.
pub fn score_clusters(clusters: &[Cluster]) -> u32 {
    clusters
        .iter()
        .map(|cluster| cluster_score(cluster.length))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_score_by_length() {
        assert_eq!(cluster_score(3), 100);
        assert_eq!(cluster_score(4), 200);
        assert_eq!(cluster_score(5), 300);
        assert_eq!(cluster_score(8), 600);
    }

    #[test]
    fn test_cluster_score_short_runs_worth_nothing() {
        assert_eq!(cluster_score(0), 0);
        assert_eq!(cluster_score(2), 0);
    }

    #[test]
    fn test_score_clusters_sums_independently() {
        let clusters = [
            Cluster {
                column: 0,
                row: 0,
                length: 3,
                horizontal: true,
            },
            Cluster {
                column: 0,
                row: 0,
                length: 4,
                horizontal: false,
            },
        ];
        // An L-shape through a shared tile scores both arms.
        assert_eq!(score_clusters(&clusters), 300);
    }

    #[test]
    fn test_score_clusters_empty() {
        assert_eq!(score_clusters(&[]), 0);
    }
}
