use thiserror::Error;

/// Decoder errors.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The decoder was called with malformed input.
    #[error("invalid decoder input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Malformed decoder input.
///
/// Inputs are validated before the chart is built, so a decoder call
/// either fails up front or always produces a tree.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// The score matrix does not have any rows.
    #[error("score matrix is empty")]
    EmptyMatrix,

    /// The score matrix is not square.
    #[error("score matrix must be square, has shape: ({rows:?}, {cols:?})")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// The score matrix contains NaN or an infinity.
    #[error("score of arc {head:?} -> {dependent:?} is not finite: {value:?}")]
    NonFiniteScore {
        head: usize,
        dependent: usize,
        value: f32,
    },

    /// The gold heads do not have one entry per vertex.
    #[error("gold heads have length {len:?}, the score matrix has {node_count:?} vertices")]
    GoldLength { len: usize, node_count: usize },

    /// A gold head is not a vertex of the sentence.
    #[error("gold head {head:?} of {dependent:?} is out of bounds for graph with {node_count:?} vertices")]
    GoldHeadOutOfBounds {
        head: usize,
        dependent: usize,
        node_count: usize,
    },

    /// The cost-augmentation margin is negative or not finite.
    #[error("margin must be finite and non-negative: {value:?}")]
    InvalidMargin { value: f32 },
}
