//! Span charts for Eisner's algorithm.

use std::ops::{Index, IndexMut, Range};

use log::trace;
use ndarray::ArrayView2;

use crate::cost::ArcCost;

/// Side of a span that holds the head.
///
/// A left span is headed by its right boundary, a right span by its
/// left boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    fn offset(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }
}

/// Whether the head of a span can take further dependents inside it.
///
/// In an incomplete span, the arc between the two boundaries has just
/// been added and the dependent boundary may still collect its own
/// dependents. A complete span is closed off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Completeness {
    Complete,
    Incomplete,
}

/// A span of the sentence in a particular chart state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
    pub completeness: Completeness,
}

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        direction: Direction,
        completeness: Completeness,
    ) -> Self {
        debug_assert!(start <= end, "Span ({}, {}) is reversed", start, end);

        Span {
            start,
            end,
            direction,
            completeness,
        }
    }
}

/// Table of span items, stored in a flat arena.
///
/// Only cells with `start <= end` are meaningful.
pub(crate) struct SpanTable<T> {
    node_count: usize,
    cells: Vec<T>,
}

impl<T> SpanTable<T>
where
    T: Clone,
{
    fn new(node_count: usize, init: T) -> Self {
        SpanTable {
            node_count,
            cells: vec![init; node_count * node_count * 2],
        }
    }
}

impl<T> SpanTable<T> {
    fn offset(&self, start: usize, end: usize, direction: Direction) -> usize {
        debug_assert!(
            start <= end && end < self.node_count,
            "Span ({}, {}) is out of bounds for {} vertices",
            start,
            end,
            self.node_count
        );

        (start * self.node_count + end) * 2 + direction.offset()
    }
}

impl<T> Index<(usize, usize, Direction)> for SpanTable<T> {
    type Output = T;

    fn index(&self, (start, end, direction): (usize, usize, Direction)) -> &Self::Output {
        &self.cells[self.offset(start, end, direction)]
    }
}

impl<T> IndexMut<(usize, usize, Direction)> for SpanTable<T> {
    fn index_mut(&mut self, (start, end, direction): (usize, usize, Direction)) -> &mut T {
        let offset = self.offset(start, end, direction);
        &mut self.cells[offset]
    }
}

/// Score and backtrack tables for a single sentence.
pub(crate) struct Chart {
    node_count: usize,
    complete: SpanTable<f32>,
    incomplete: SpanTable<f32>,
    complete_splits: SpanTable<usize>,
    incomplete_splits: SpanTable<usize>,
}

impl Chart {
    /// Fill the chart bottom-up by span length.
    ///
    /// The score matrix must be square, non-empty, and finite.
    pub fn fill<C>(scores: ArrayView2<f32>, cost: &C) -> Self
    where
        C: ArcCost + ?Sized,
    {
        let node_count = scores.nrows();

        let mut chart = Chart {
            node_count,
            complete: SpanTable::new(node_count, 0.0),
            incomplete: SpanTable::new(node_count, 0.0),
            complete_splits: SpanTable::new(node_count, 0),
            incomplete_splits: SpanTable::new(node_count, 0),
        };

        for span_len in 1..node_count {
            for start in 0..node_count - span_len {
                let end = start + span_len;
                chart.fill_incomplete(scores, cost, start, end);
                chart.fill_complete(start, end);
            }
        }

        trace!(
            "filled chart for {} vertices, best tree score: {}",
            node_count,
            chart.tree_score()
        );

        chart
    }

    fn fill_incomplete<C>(&mut self, scores: ArrayView2<f32>, cost: &C, start: usize, end: usize)
    where
        C: ArcCost + ?Sized,
    {
        // Both directions join a right-complete span headed by start with
        // a left-complete span headed by end. Only the arc differs, so the
        // best split is shared.
        let (split, inner) = argmax(start..end, |k| {
            self.complete[(start, k, Direction::Right)]
                + self.complete[(k + 1, end, Direction::Left)]
        });

        // The root cannot be a dependent.
        let left = if start == 0 {
            f32::NEG_INFINITY
        } else {
            inner + scores[(end, start)] + cost.cost(end, start)
        };
        self.incomplete[(start, end, Direction::Left)] = left;
        self.incomplete_splits[(start, end, Direction::Left)] = split;

        self.incomplete[(start, end, Direction::Right)] =
            inner + scores[(start, end)] + cost.cost(start, end);
        self.incomplete_splits[(start, end, Direction::Right)] = split;
    }

    fn fill_complete(&mut self, start: usize, end: usize) {
        let (split, score) = argmax(start..end, |k| {
            self.complete[(start, k, Direction::Left)] + self.incomplete[(k, end, Direction::Left)]
        });
        self.complete[(start, end, Direction::Left)] = score;
        self.complete_splits[(start, end, Direction::Left)] = split;

        let (split, score) = argmax(start + 1..end + 1, |k| {
            self.incomplete[(start, k, Direction::Right)] + self.complete[(k, end, Direction::Right)]
        });
        self.complete[(start, end, Direction::Right)] = score;
        self.complete_splits[(start, end, Direction::Right)] = split;
    }

    /// Get the number of vertices, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Get the split point of the best derivation of a span.
    pub fn split(&self, span: Span) -> usize {
        let table = match span.completeness {
            Completeness::Complete => &self.complete_splits,
            Completeness::Incomplete => &self.incomplete_splits,
        };

        table[(span.start, span.end, span.direction)]
    }

    /// Get the score of the best derivation of a span.
    pub fn score(&self, span: Span) -> f32 {
        let table = match span.completeness {
            Completeness::Complete => &self.complete,
            Completeness::Incomplete => &self.incomplete,
        };

        table[(span.start, span.end, span.direction)]
    }

    /// Get the score of the best tree.
    pub fn tree_score(&self) -> f32 {
        self.score(Span::new(
            0,
            self.node_count - 1,
            Direction::Right,
            Completeness::Complete,
        ))
    }
}

/// Find the first split in `splits` that maximizes `score`.
fn argmax(splits: Range<usize>, score: impl Fn(usize) -> f32) -> (usize, f32) {
    debug_assert!(!splits.is_empty(), "Span without split points");

    let mut best_split = splits.start;
    let mut best_score = score(splits.start);

    for split in splits.start + 1..splits.end {
        let split_score = score(split);
        if split_score > best_score {
            best_split = split;
            best_score = split_score;
        }
    }

    (best_split, best_score)
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};

    use super::{argmax, Chart, Completeness, Direction, Span};
    use crate::cost::NoCost;

    #[test]
    fn argmax_prefers_first_maximizer() {
        let values = [1.0, 3.0, 2.0, 3.0];
        assert_eq!(argmax(0..4, |k| values[k]), (1, 3.0));
        assert_eq!(argmax(2..4, |k| values[k]), (3, 3.0));
        assert_eq!(argmax(0..1, |k| values[k]), (0, 1.0));
    }

    #[test]
    fn argmax_handles_unreachable_items() {
        assert_eq!(argmax(3..6, |_| f32::NEG_INFINITY), (3, f32::NEG_INFINITY));
        assert_eq!(
            argmax(3..6, |k| if k == 5 { -2.0 } else { f32::NEG_INFINITY }),
            (5, -2.0)
        );
    }

    #[test]
    fn root_is_never_a_dependent() {
        let scores = Array2::from_elem((4, 4), 1.0);
        let chart = Chart::fill(scores.view(), &NoCost);

        for end in 1..4 {
            for &completeness in &[Completeness::Complete, Completeness::Incomplete] {
                let span = Span::new(0, end, Direction::Left, completeness);
                assert_eq!(chart.score(span), f32::NEG_INFINITY);
            }
        }
    }

    #[test]
    fn single_arc_chart() {
        let scores = array![[0., 2.], [7., 0.]];
        let chart = Chart::fill(scores.view(), &NoCost);

        assert_eq!(chart.node_count(), 2);
        assert_eq!(
            chart.score(Span::new(0, 1, Direction::Right, Completeness::Incomplete)),
            2.0
        );
        assert_eq!(
            chart.split(Span::new(0, 1, Direction::Right, Completeness::Complete)),
            1
        );
        assert_eq!(chart.tree_score(), 2.0);
    }

    #[test]
    fn empty_spans_score_zero() {
        let scores = array![[0., 1., 1.], [1., 0., 1.], [1., 1., 0.]];
        let chart = Chart::fill(scores.view(), &NoCost);

        for idx in 0..3 {
            for &direction in &[Direction::Left, Direction::Right] {
                assert_eq!(
                    chart.score(Span::new(idx, idx, direction, Completeness::Complete)),
                    0.0
                );
            }
        }
    }
}
