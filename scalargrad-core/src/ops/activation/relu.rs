// scalargrad-core/src/ops/activation/relu.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::{Op, ValueId};

// --- Forward Operation ---

impl Graph {
    /// Rectified linear unit: `max(0, a)`.
    pub fn relu(&mut self, a: ValueId) -> Result<ValueId, ScalarGradError> {
        let a_data = self.node(a, "relu")?.data;
        let data = if a_data < 0.0 { 0.0 } else { a_data };
        Ok(self.insert(data, Op::Relu(a)))
    }
}

// --- Backward Rule ---

/// The gradient passes only where the output is strictly positive. At
/// `a == 0` the output is 0, so the gradient is blocked — the chosen
/// sub-gradient convention at the kink.
pub(crate) fn backward(
    graph: &mut Graph,
    a: ValueId,
    out_data: f64,
    out_grad: f64,
) -> Result<(), ScalarGradError> {
    if out_data > 0.0 {
        graph.accumulate(a, out_grad, "backward relu")?;
    }
    Ok(())
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_clamps_negatives() {
        let mut g = Graph::new();
        let neg = g.leaf(-2.0);
        let pos = g.leaf(1.5);
        let out_neg = g.relu(neg).unwrap();
        let out_pos = g.relu(pos).unwrap();
        assert_eq!(g.data(out_neg), Ok(0.0));
        assert_eq!(g.data(out_pos), Ok(1.5));
    }

    #[test]
    fn positive_input_passes_gradient_unchanged() {
        let mut g = Graph::new();
        let a = g.leaf(2.0);
        let out = g.relu(a).unwrap();
        let scaled = g.mul_scalar(out, 3.0).unwrap();

        g.backward(scaled).unwrap();
        assert_eq!(g.grad(a), Ok(3.0));
    }

    #[test]
    fn negative_input_blocks_gradient() {
        let mut g = Graph::new();
        let a = g.leaf(-2.0);
        let out = g.relu(a).unwrap();

        g.backward(out).unwrap();
        assert_eq!(g.grad(a), Ok(0.0));
    }

    #[test]
    fn zero_input_blocks_gradient() {
        let mut g = Graph::new();
        let a = g.leaf(0.0);
        let out = g.relu(a).unwrap();

        g.backward(out).unwrap();
        assert_eq!(g.data(out), Ok(0.0));
        assert_eq!(g.grad(a), Ok(0.0));
    }
}
