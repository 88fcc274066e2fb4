//! Recovery of the best tree from a filled chart.

use crate::chart::{Chart, Completeness, Direction, Span};

/// Extract the head of every vertex from the best derivation.
///
/// The root has no head, every other vertex has exactly one.
pub(crate) fn extract_heads(chart: &Chart) -> Vec<Option<usize>> {
    let node_count = chart.node_count();
    let mut heads = vec![None; node_count];

    backtrack(
        chart,
        Span::new(0, node_count - 1, Direction::Right, Completeness::Complete),
        &mut heads,
    );

    debug_assert!(
        heads.iter().skip(1).all(Option::is_some),
        "Backtracking did not attach every token: {:?}",
        heads
    );

    heads
}

fn backtrack(chart: &Chart, span: Span, heads: &mut [Option<usize>]) {
    let Span {
        start,
        end,
        direction,
        completeness,
    } = span;

    if start == end {
        return;
    }

    let split = chart.split(span);

    match (completeness, direction) {
        (Completeness::Complete, Direction::Left) => {
            backtrack(
                chart,
                Span::new(start, split, Direction::Left, Completeness::Complete),
                heads,
            );
            backtrack(
                chart,
                Span::new(split, end, Direction::Left, Completeness::Incomplete),
                heads,
            );
        }
        (Completeness::Complete, Direction::Right) => {
            backtrack(
                chart,
                Span::new(start, split, Direction::Right, Completeness::Incomplete),
                heads,
            );
            backtrack(
                chart,
                Span::new(split, end, Direction::Right, Completeness::Complete),
                heads,
            );
        }
        (Completeness::Incomplete, direction) => {
            match direction {
                Direction::Left => heads[start] = Some(end),
                Direction::Right => heads[end] = Some(start),
            }

            // Both arc directions were built from the same two halves.
            backtrack(
                chart,
                Span::new(start, split, Direction::Right, Completeness::Complete),
                heads,
            );
            backtrack(
                chart,
                Span::new(split + 1, end, Direction::Left, Completeness::Complete),
                heads,
            );
        }
    }
}
