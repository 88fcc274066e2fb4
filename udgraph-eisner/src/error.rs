use eisner::DecodeError;
use udgraph::Error as GraphError;

/// Sentence decoding errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The decoder rejected its input.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded tree could not be added to the sentence.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A head is not a vertex of the sentence.
    #[error("head {head:?} of {dependent:?} is out of bounds for sentence with {sentence_len:?} vertices")]
    HeadOutOfBounds {
        head: usize,
        dependent: usize,
        sentence_len: usize,
    },

    /// The scores or heads do not have one entry per vertex.
    #[error("length {len:?} does not match sentence with {sentence_len:?} vertices")]
    LengthMismatch { len: usize, sentence_len: usize },
}
