//! Projective dependency decoding using Eisner's algorithm.
//!
//! The decoder takes a dense `(n + 1) x (n + 1)` score matrix, where
//! `scores[(head, dependent)]` is the score of attaching `dependent` to
//! `head` and vertex 0 is the artificial root. It returns the head of
//! every vertex in the highest-scoring projective tree.
//!
//! ```
//! use eisner::eisner;
//! use ndarray::Array2;
//!
//! let mut scores = Array2::<f32>::zeros((3, 3));
//! scores[(0, 1)] = 5.;
//! scores[(1, 2)] = 5.;
//!
//! assert_eq!(eisner(scores.view()).unwrap(), vec![None, Some(0), Some(1)]);
//! ```

mod chart;

mod config;
pub use crate::config::EisnerConfig;

mod cost;
pub use crate::cost::{ArcCost, HammingCost, NoCost};

mod decoder;
pub use crate::decoder::{eisner, Decoding, Eisner};

mod error;
pub use crate::error::{DecodeError, InvalidInput};

mod extract;

pub mod tree;
