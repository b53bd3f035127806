// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::{Op, ValueId};

// --- Forward Operation ---

impl Graph {
    /// Product of two nodes.
    pub fn mul(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        let data = self.node(a, "mul")?.data * self.node(b, "mul")?.data;
        Ok(self.insert(data, Op::Mul(a, b)))
    }

    /// Scalar-operand overload: wraps the literal in a fresh leaf first.
    pub fn mul_scalar(&mut self, a: ValueId, b: f64) -> Result<ValueId, ScalarGradError> {
        let b = self.leaf(b);
        self.mul(a, b)
    }
}

// --- Backward Rule ---

/// Product rule: each operand receives the other operand's datum times
/// the upstream gradient. With `a == b` the two accumulations add up to
/// `2·a·out_grad`, which is exactly d(a²)/da.
pub(crate) fn backward(
    graph: &mut Graph,
    a: ValueId,
    b: ValueId,
    out_grad: f64,
) -> Result<(), ScalarGradError> {
    let a_data = graph.node(a, "backward mul")?.data;
    let b_data = graph.node(b, "backward mul")?.data;
    graph.accumulate(a, b_data * out_grad, "backward mul")?;
    graph.accumulate(b, a_data * out_grad, "backward mul")
}

// --- Tests ---
