//! Projective decoding of universal dependency graphs.
//!
//! This crate connects the `eisner` decoder to `udgraph` sentences: gold
//! heads are read from sentences for cost-augmented decoding and decoded
//! trees are written back to sentences.

mod decode;
pub use crate::decode::{
    update_sentence, Decode, DecodeAugmented, EisnerDecoder, Label, Unlabeled,
};

mod error;
pub use crate::error::Error;

mod gold;
pub use crate::gold::gold_heads;

mod proj;
pub use crate::proj::non_projective_edges;
