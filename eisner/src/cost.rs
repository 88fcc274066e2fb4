//! Arc costs for cost-augmented decoding.

/// Cost of an arc, added to its score while filling the chart.
///
/// Cost-augmented (loss-augmented) decoding finds the tree that
/// maximizes the sum of arc scores and arc costs. This is the
/// inference step of structured margin training.
pub trait ArcCost {
    /// Get the cost of the arc `head -> dependent`.
    fn cost(&self, head: usize, dependent: usize) -> f32;
}

impl<'a, C> ArcCost for &'a C
where
    C: ArcCost + ?Sized,
{
    fn cost(&self, head: usize, dependent: usize) -> f32 {
        (**self).cost(head, dependent)
    }
}

/// Zero cost for every arc, used for plain inference.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoCost;

impl ArcCost for NoCost {
    fn cost(&self, _head: usize, _dependent: usize) -> f32 {
        0.0
    }
}

/// Hamming cost with respect to gold heads.
///
/// An arc costs `margin` when the gold head of its dependent is
/// another vertex. Arcs whose dependent has no gold head are free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HammingCost<'a> {
    gold: &'a [Option<usize>],
    margin: f32,
}

impl<'a> HammingCost<'a> {
    /// Construct the cost function from the gold head of every vertex.
    pub fn new(gold: &'a [Option<usize>], margin: f32) -> Self {
        HammingCost { gold, margin }
    }

    /// Get the cost of an arc that is not in the gold tree.
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl<'a> ArcCost for HammingCost<'a> {
    fn cost(&self, head: usize, dependent: usize) -> f32 {
        match self.gold.get(dependent).copied().flatten() {
            Some(gold_head) if gold_head != head => self.margin,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArcCost, HammingCost, NoCost};

    #[test]
    fn hamming_cost_penalizes_non_gold_arcs() {
        let gold = [None, Some(2), Some(0), None];
        let cost = HammingCost::new(&gold, 1.5);
        assert_eq!(cost.margin(), 1.5);

        assert_eq!(cost.cost(2, 1), 0.0);
        assert_eq!(cost.cost(0, 1), 1.5);
        assert_eq!(cost.cost(0, 2), 0.0);
        assert_eq!(cost.cost(1, 2), 1.5);

        // No gold head, no cost.
        assert_eq!(cost.cost(2, 3), 0.0);
        assert_eq!(cost.cost(0, 3), 0.0);
    }

    #[test]
    fn no_cost_is_zero() {
        assert_eq!(NoCost.cost(0, 1), 0.0);
        assert_eq!((&NoCost).cost(3, 2), 0.0);
    }
}
