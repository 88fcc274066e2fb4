//! Decoding of sentences.

use eisner::{Decoding, Eisner};
use log::warn;
use ndarray::ArrayView2;
use udgraph::graph::{DepTriple, Sentence};

use crate::{gold_heads, non_projective_edges, Error};

/// Dependency relation labeler.
///
/// The decoder only predicts heads. The relation of each predicted
/// arc is decided by a labeler.
pub trait Label {
    /// Get the relation of the arc `head -> dependent`.
    fn label(&self, head: usize, dependent: usize) -> Option<String>;
}

impl<F> Label for F
where
    F: Fn(usize, usize) -> Option<String>,
{
    fn label(&self, head: usize, dependent: usize) -> Option<String> {
        self(head, dependent)
    }
}

/// Labeler that leaves arcs without a relation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unlabeled;

impl Label for Unlabeled {
    fn label(&self, _head: usize, _dependent: usize) -> Option<String> {
        None
    }
}

/// Sentence decoder.
pub trait Decode {
    /// Decode a sentence
    ///
    /// The head relations of the sentence are replaced by the best tree
    /// for `scores`, which has a row and column for every vertex of the
    /// sentence.
    fn decode(&self, sentence: &mut Sentence, scores: ArrayView2<f32>) -> Result<(), Error>;
}

/// Cost-augmented sentence decoder.
pub trait DecodeAugmented {
    /// Decode a sentence, penalizing arcs that are not in its gold tree.
    ///
    /// The sentence is not modified, since the decoded tree is only used
    /// to compute a training loss.
    fn decode_augmented(
        &self,
        sentence: &Sentence,
        scores: ArrayView2<f32>,
    ) -> Result<Decoding, Error>;
}

/// Sentence decoder using Eisner's algorithm.
#[derive(Clone, Debug)]
pub struct EisnerDecoder<L = Unlabeled> {
    eisner: Eisner,
    labeler: L,
}

impl EisnerDecoder {
    /// Construct a decoder that does not assign relations.
    pub fn new(eisner: Eisner) -> Self {
        EisnerDecoder {
            eisner,
            labeler: Unlabeled,
        }
    }
}

impl<L> EisnerDecoder<L> {
    /// Replace the labeler of the decoder.
    pub fn with_labeler<M>(self, labeler: M) -> EisnerDecoder<M>
    where
        M: Label,
    {
        EisnerDecoder {
            eisner: self.eisner,
            labeler,
        }
    }

    fn check_len(&self, sentence: &Sentence, scores: ArrayView2<f32>) -> Result<(), Error> {
        if scores.nrows() != sentence.len() {
            return Err(Error::LengthMismatch {
                len: scores.nrows(),
                sentence_len: sentence.len(),
            });
        }

        Ok(())
    }
}

impl Default for EisnerDecoder {
    fn default() -> Self {
        EisnerDecoder::new(Eisner::default())
    }
}

impl<L> Decode for EisnerDecoder<L>
where
    L: Label,
{
    fn decode(&self, sentence: &mut Sentence, scores: ArrayView2<f32>) -> Result<(), Error> {
        self.check_len(sentence, scores)?;
        let decoding = self.eisner.decode(scores)?;
        update_sentence(sentence, &decoding.heads, &self.labeler)
    }
}

impl<L> DecodeAugmented for EisnerDecoder<L> {
    fn decode_augmented(
        &self,
        sentence: &Sentence,
        scores: ArrayView2<f32>,
    ) -> Result<Decoding, Error> {
        self.check_len(sentence, scores)?;
        check_projective(sentence);

        Ok(self
            .eisner
            .decode_augmented(scores, &gold_heads(sentence))?)
    }
}

/// Check that the gold tree of a sentence is projective.
///
/// Logs a warning with the offending edges when it is not.
fn check_projective(sentence: &Sentence) -> bool {
    let non_projective = non_projective_edges(sentence);
    if non_projective.is_empty() {
        return true;
    }

    warn!(
        "gold tree has non-projective edges {:?}, the decoder cannot reproduce it",
        non_projective
    );

    false
}

/// Update a sentence with the heads from a head array.
///
/// Relations are assigned by `labeler`. Tokens without a head in
/// `heads` lose their head relation. The sentence is not modified
/// when an error is returned.
pub fn update_sentence<L>(
    sentence: &mut Sentence,
    heads: &[Option<usize>],
    labeler: &L,
) -> Result<(), Error>
where
    L: Label + ?Sized,
{
    if heads.len() != sentence.len() {
        return Err(Error::LengthMismatch {
            len: heads.len(),
            sentence_len: sentence.len(),
        });
    }

    for (dependent, &head) in heads.iter().enumerate().skip(1) {
        if let Some(head) = head {
            if head >= sentence.len() {
                return Err(Error::HeadOutOfBounds {
                    head,
                    dependent,
                    sentence_len: sentence.len(),
                });
            }
        }
    }

    let mut graph = sentence.dep_graph_mut();
    for (dependent, &head) in heads.iter().enumerate().skip(1) {
        match head {
            Some(head) => graph.add_deprel(DepTriple::new(
                head,
                labeler.label(head, dependent),
                dependent,
            ))?,
            None => {
                graph.remove_head_rel(dependent);
            }
        }
    }

    Ok(())
}
