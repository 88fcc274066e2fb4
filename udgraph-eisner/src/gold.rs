use udgraph::graph::Sentence;

/// Get the gold head of every vertex of a sentence.
///
/// The root and tokens without a head relation get `None`.
pub fn gold_heads(sentence: &Sentence) -> Vec<Option<usize>> {
    let graph = sentence.dep_graph();
    (0..sentence.len())
        .map(|idx| graph.head(idx).map(|triple| triple.head()))
        .collect()
}
