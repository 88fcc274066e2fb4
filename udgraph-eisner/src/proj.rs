//! Projectivity of dependency graphs.

use std::cmp::{max, min};
use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graph::node_index;
use petgraph::visit::{Bfs, EdgeRef};
use petgraph::{Directed, Graph};
use udgraph::graph::Sentence;

/// Returns the non-projective edges of a sentence, ordered by length.
///
/// Edges are `(head, dependent)` pairs. An edge is projective when its
/// head dominates every token between the head and the dependent.
/// The decoder can only produce trees without non-projective edges.
pub fn non_projective_edges(sentence: &Sentence) -> Vec<(usize, usize)> {
    let graph = head_graph(sentence);

    let mut non_projective = Vec::new();

    for i in 0..graph.node_count() {
        let mut i_reachable = HashSet::new();
        let mut bfs = Bfs::new(&graph, node_index(i));
        while let Some(node) = bfs.next(&graph) {
            i_reachable.insert(node.index());
        }

        for edge in graph.edges(node_index(i)) {
            let dependent = edge.target().index();
            if (min(i, dependent)..max(i, dependent)).any(|j| !i_reachable.contains(&j)) {
                non_projective.push((i, dependent));
            }
        }
    }

    non_projective
        .into_iter()
        .sorted_by_key(|&(head, dependent)| max(head, dependent) - min(head, dependent))
        .collect()
}

/// Unlabeled graph of the head relations of a sentence.
fn head_graph(sentence: &Sentence) -> Graph<(), (), Directed> {
    let mut graph = Graph::with_capacity(sentence.len(), sentence.len());
    for _ in 0..sentence.len() {
        graph.add_node(());
    }

    let dep_graph = sentence.dep_graph();
    for idx in 0..sentence.len() {
        if let Some(triple) = dep_graph.head(idx) {
            graph.add_edge(node_index(triple.head()), node_index(triple.dependent()), ());
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use udgraph::graph::{DepTriple, Sentence};
    use udgraph::token::Token;

    use super::non_projective_edges;
    use crate::tests::{
        read_sentences, NONPROJECTIVE_SENTENCES_FILENAME, PROJECTIVE_SENTENCES_FILENAME,
    };

    lazy_static! {
        static ref NON_PROJECTIVE_EDGES: Vec<Vec<(usize, usize)>> = vec![vec![(2, 7)]];
    }

    #[test]
    fn non_projective_test() {
        let test_edges = read_sentences(NONPROJECTIVE_SENTENCES_FILENAME)
            .iter()
            .map(non_projective_edges)
            .collect::<Vec<_>>();
        assert_eq!(*NON_PROJECTIVE_EDGES, test_edges);
    }

    #[test]
    fn projective_test() {
        for sentence in read_sentences(PROJECTIVE_SENTENCES_FILENAME) {
            assert!(non_projective_edges(&sentence).is_empty());
        }
    }

    #[test]
    fn edges_are_ordered_by_length() {
        // 0 -> 3, 3 -> 1, 1 -> 5, 5 -> 2, 3 -> 4
        let mut sentence = Sentence::new();
        for form in &["a", "b", "c", "d", "e"] {
            sentence.push(Token::new(*form));
        }

        let mut graph = sentence.dep_graph_mut();
        for &(head, dependent) in &[(0, 3), (3, 1), (1, 5), (5, 2), (3, 4)] {
            graph
                .add_deprel(DepTriple::new(head, None::<String>, dependent))
                .unwrap();
        }

        assert_eq!(non_projective_edges(&sentence), vec![(5, 2), (1, 5)]);
    }
}
