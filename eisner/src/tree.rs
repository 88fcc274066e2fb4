//! Properties of head arrays.
//!
//! A head array stores the head of every vertex of a dependency tree,
//! where vertex 0 is the root and has no head.

use std::cmp::{max, min};

use itertools::Itertools;
use ndarray::ArrayView2;

/// Get the sum of the scores of the arcs of a tree.
///
/// # Panics
///
/// Panics when a head is not a vertex of the score matrix.
pub fn tree_score(scores: ArrayView2<f32>, heads: &[Option<usize>]) -> f32 {
    heads
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(dependent, head)| head.map(|head| scores[(head, dependent)]))
        .sum()
}

/// Count the tokens whose head is the gold head.
///
/// Tokens without a gold head are not counted.
pub fn correct_heads(heads: &[Option<usize>], gold: &[Option<usize>]) -> usize {
    heads
        .iter()
        .zip(gold)
        .skip(1)
        .filter(|(head, gold_head)| gold_head.is_some() && head == gold_head)
        .count()
}

/// Find a cycle in a head array.
///
/// Returns the vertices of the first cycle that is found, starting at
/// the vertex where the cycle was entered and following heads. Heads
/// that are out of bounds end a path.
pub fn find_cycle(heads: &[Option<usize>]) -> Option<Vec<usize>> {
    // The start vertex of the walk that visited a vertex.
    let mut visited_by = vec![None; heads.len()];

    for start in 0..heads.len() {
        let mut vertex = start;

        loop {
            match visited_by[vertex] {
                Some(walk) if walk == start => return Some(collect_cycle(heads, vertex)),
                Some(_) => break,
                None => visited_by[vertex] = Some(start),
            }

            match heads[vertex] {
                Some(head) if head < heads.len() => vertex = head,
                _ => break,
            }
        }
    }

    None
}

fn collect_cycle(heads: &[Option<usize>], entry: usize) -> Vec<usize> {
    let mut cycle = vec![entry];
    let mut next = heads[entry];

    while let Some(vertex) = next {
        if vertex == entry {
            break;
        }

        cycle.push(vertex);
        next = heads[vertex];
    }

    cycle
}

/// Find pairs of crossing arcs.
///
/// Arcs are `(head, dependent)` pairs. Two arcs cross when they are
/// drawn as arches above the sentence and intersect. Arcs that share
/// a vertex never cross.
pub fn crossing_arcs(heads: &[Option<usize>]) -> Vec<((usize, usize), (usize, usize))> {
    let arcs = heads
        .iter()
        .enumerate()
        .filter_map(|(dependent, head)| head.map(|head| (head, dependent)))
        .collect::<Vec<_>>();

    arcs.iter()
        .tuple_combinations()
        .filter(|&(&arc1, &arc2)| arcs_cross(arc1, arc2))
        .map(|(&arc1, &arc2)| (arc1, arc2))
        .collect()
}

fn arcs_cross(arc1: (usize, usize), arc2: (usize, usize)) -> bool {
    let (left1, right1) = (min(arc1.0, arc1.1), max(arc1.0, arc1.1));
    let (left2, right2) = (min(arc2.0, arc2.1), max(arc2.0, arc2.1));

    (left1 < left2 && left2 < right1 && right1 < right2)
        || (left2 < left1 && left1 < right2 && right2 < right1)
}

/// Check that a head array is a projective tree rooted at vertex 0.
///
/// The root must not have a head, every other vertex must have a head
/// in the sentence, and the arcs must not form cycles or cross.
pub fn is_projective_tree(heads: &[Option<usize>]) -> bool {
    let (root_head, token_heads) = match heads.split_first() {
        Some(split) => split,
        None => return false,
    };

    root_head.is_none()
        && token_heads
            .iter()
            .all(|head| matches!(head, Some(head) if *head < heads.len()))
        && find_cycle(heads).is_none()
        && crossing_arcs(heads).is_empty()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::{correct_heads, crossing_arcs, find_cycle, is_projective_tree, tree_score};

    #[test]
    fn finds_cycle() {
        assert_eq!(find_cycle(&[None, Some(0), Some(1), Some(2)]), None);
        assert_eq!(find_cycle(&[None, Some(0), Some(0), Some(0)]), None);

        // Short cycle: 3 -> 4 -> 3
        assert_eq!(
            find_cycle(&[None, Some(4), Some(4), Some(4), Some(3)]),
            Some(vec![4, 3])
        );

        // Long cycle: 1 -> 2 -> 3 -> 4 -> 1
        assert_eq!(
            find_cycle(&[None, Some(4), Some(1), Some(2), Some(3)]),
            Some(vec![1, 4, 3, 2])
        );

        // Self-cycle
        assert_eq!(find_cycle(&[None, Some(1)]), Some(vec![1]));

        // Out of bounds heads end a path.
        assert_eq!(find_cycle(&[None, Some(7), Some(1)]), None);
    }

    #[test]
    fn finds_crossing_arcs() {
        assert!(crossing_arcs(&[None, Some(0), Some(1), Some(2)]).is_empty());
        assert!(crossing_arcs(&[None, Some(3), Some(3), Some(0)]).is_empty());

        assert_eq!(
            crossing_arcs(&[None, Some(3), Some(0), Some(2)]),
            vec![((3, 1), (0, 2))]
        );
    }

    #[test]
    fn recognizes_projective_trees() {
        assert!(is_projective_tree(&[None]));
        assert!(is_projective_tree(&[None, Some(0)]));
        assert!(is_projective_tree(&[None, Some(2), Some(0), Some(2)]));

        // Empty head array.
        assert!(!is_projective_tree(&[]));

        // Root with a head.
        assert!(!is_projective_tree(&[Some(1), Some(0)]));

        // Unattached token.
        assert!(!is_projective_tree(&[None, Some(0), None]));

        // Head out of bounds.
        assert!(!is_projective_tree(&[None, Some(0), Some(3)]));

        // Cycle.
        assert!(!is_projective_tree(&[None, Some(0), Some(3), Some(2)]));

        // Crossing arcs.
        assert!(!is_projective_tree(&[None, Some(3), Some(0), Some(2)]));
    }

    #[test]
    fn scores_trees() {
        let scores = array![[0., 1., 2.], [3., 0., 4.], [5., 6., 0.]];
        assert_eq!(tree_score(scores.view(), &[None, Some(0), Some(1)]), 5.);
        assert_eq!(tree_score(scores.view(), &[None, Some(2), Some(0)]), 8.);
        assert_eq!(tree_score(scores.view(), &[None]), 0.);
    }

    #[test]
    fn counts_correct_heads() {
        let gold = [None, Some(0), Some(1), None];
        assert_eq!(correct_heads(&[None, Some(0), Some(1), Some(2)], &gold), 2);
        assert_eq!(correct_heads(&[None, Some(2), Some(1), Some(1)], &gold), 1);
        assert_eq!(correct_heads(&[None, Some(2), Some(0), Some(0)], &gold), 0);
    }
}
