//! Neighbour-label frequency to confidence-ranked matches.

use helpdesk_core::models::{Confidence, NeighborMatch, SimilarityMatch};

/// Count neighbour groups and rank them.
///
/// Confidence is `round(100 * count / total)`. Groups are sorted by
/// confidence descending; equal confidences keep first-encountered order.
pub fn tally_neighbors(neighbors: &[NeighborMatch]) -> Vec<SimilarityMatch> {
    let total = neighbors.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for neighbor in neighbors {
        match counts.iter_mut().find(|(group, _)| *group == neighbor.group) {
            Some((_, count)) => *count += 1,
            None => counts.push((neighbor.group.as_str(), 1)),
        }
    }

    let mut results: Vec<SimilarityMatch> = counts
        .into_iter()
        .map(|(group, count)| SimilarityMatch {
            name: group.to_string(),
            confidence: Confidence::from_f64(100.0 * count as f64 / total as f64),
            count,
        })
        .collect();
    results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(group: &str, similarity: f64) -> NeighborMatch {
        NeighborMatch {
            group: group.to_string(),
            similarity,
        }
    }

    #[test]
    fn empty_neighbours_give_no_matches() {
        assert!(tally_neighbors(&[]).is_empty());
    }

    #[test]
    fn majority_group_ranks_first() {
        let results = tally_neighbors(&[
            n("Security", 0.95),
            n("Network Operations", 0.9),
            n("Network Operations", 0.8),
            n("Security", 0.7),
            n("Network Operations", 0.6),
        ]);
        assert_eq!(results[0].name, "Network Operations");
        assert_eq!(results[0].count, 3);
        assert_eq!(results[0].confidence.value(), 60);
        assert_eq!(results[1].name, "Security");
        assert_eq!(results[1].confidence.value(), 40);
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let results = tally_neighbors(&[n("B", 0.9), n("A", 0.8), n("A", 0.7), n("B", 0.6)]);
        let names: Vec<&str> = results.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn thirds_round_to_nearest() {
        let results = tally_neighbors(&[n("A", 0.9), n("B", 0.8), n("B", 0.7)]);
        assert_eq!(results[0].confidence.value(), 67);
        assert_eq!(results[1].confidence.value(), 33);
    }
}
