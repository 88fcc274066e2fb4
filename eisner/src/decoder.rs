use log::debug;
use ndarray::ArrayView2;

use crate::chart::Chart;
use crate::config::EisnerConfig;
use crate::cost::{ArcCost, HammingCost, NoCost};
use crate::error::{DecodeError, InvalidInput};
use crate::extract::extract_heads;

/// Result of decoding a sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoding {
    /// Head of every vertex. The root (vertex 0) does not have a head.
    pub heads: Vec<Option<usize>>,

    /// Score of the tree, including arc costs.
    pub score: f32,
}

/// Projective decoder using Eisner's algorithm.
///
/// Decoding takes `O(n^3)` time and `O(n^2)` space for a sentence
/// of `n` tokens. The decoder does not hold any per-sentence state,
/// so it can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Eisner {
    config: EisnerConfig,
}

impl Eisner {
    /// Construct a decoder.
    ///
    /// Returns an error when the margin is negative or not finite.
    pub fn new(config: EisnerConfig) -> Result<Self, DecodeError> {
        if !config.margin.is_finite() || config.margin < 0.0 {
            return Err(InvalidInput::InvalidMargin {
                value: config.margin,
            }
            .into());
        }

        Ok(Eisner { config })
    }

    /// Get the decoder configuration.
    pub fn config(&self) -> &EisnerConfig {
        &self.config
    }

    /// Find the highest-scoring projective tree.
    ///
    /// `scores[(head, dependent)]` is the score of the arc from `head` to
    /// `dependent`. Vertex 0 is the root.
    pub fn decode(&self, scores: ArrayView2<f32>) -> Result<Decoding, DecodeError> {
        self.decode_with_cost(scores, &NoCost)
    }

    /// Find the highest-scoring projective tree, where arcs that are not
    /// in the gold tree are penalized with the configured margin.
    ///
    /// `gold` contains the gold head of every vertex. Vertices with a
    /// `None` head, such as the root, are not penalized.
    pub fn decode_augmented(
        &self,
        scores: ArrayView2<f32>,
        gold: &[Option<usize>],
    ) -> Result<Decoding, DecodeError> {
        check_scores(scores)?;
        check_gold(scores.nrows(), gold)?;

        Ok(decode_checked(
            scores,
            &HammingCost::new(gold, self.config.margin),
        ))
    }

    /// Find the tree that maximizes the sum of arc scores and arc costs.
    pub fn decode_with_cost<C>(
        &self,
        scores: ArrayView2<f32>,
        cost: &C,
    ) -> Result<Decoding, DecodeError>
    where
        C: ArcCost + ?Sized,
    {
        check_scores(scores)?;
        Ok(decode_checked(scores, cost))
    }
}

/// Find the highest-scoring projective tree.
///
/// Returns the head of every vertex, see [`Eisner::decode`].
pub fn eisner(scores: ArrayView2<f32>) -> Result<Vec<Option<usize>>, DecodeError> {
    Eisner::default()
        .decode(scores)
        .map(|decoding| decoding.heads)
}

fn decode_checked<C>(scores: ArrayView2<f32>, cost: &C) -> Decoding
where
    C: ArcCost + ?Sized,
{
    let chart = Chart::fill(scores, cost);
    let heads = extract_heads(&chart);
    let score = chart.tree_score();

    debug!(
        "decoded sentence with {} tokens, score: {}",
        scores.nrows() - 1,
        score
    );

    Decoding { heads, score }
}

fn check_scores(scores: ArrayView2<f32>) -> Result<(), InvalidInput> {
    if scores.nrows() == 0 {
        return Err(InvalidInput::EmptyMatrix);
    }

    if scores.nrows() != scores.ncols() {
        return Err(InvalidInput::NonSquareMatrix {
            rows: scores.nrows(),
            cols: scores.ncols(),
        });
    }

    if let Some(((head, dependent), &value)) =
        scores.indexed_iter().find(|(_, value)| !value.is_finite())
    {
        return Err(InvalidInput::NonFiniteScore {
            head,
            dependent,
            value,
        });
    }

    Ok(())
}

fn check_gold(node_count: usize, gold: &[Option<usize>]) -> Result<(), InvalidInput> {
    if gold.len() != node_count {
        return Err(InvalidInput::GoldLength {
            len: gold.len(),
            node_count,
        });
    }

    for (dependent, &head) in gold.iter().enumerate() {
        match head {
            Some(head) if head >= node_count => {
                return Err(InvalidInput::GoldHeadOutOfBounds {
                    head,
                    dependent,
                    node_count,
                })
            }
            _ => (),
        }
    }

    Ok(())
}
