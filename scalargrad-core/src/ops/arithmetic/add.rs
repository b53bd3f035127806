// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::{Op, ValueId};

// --- Forward Operation ---

impl Graph {
    /// Sum of two nodes. The new node records both operands so the
    /// backward pass can route the upstream gradient to each.
    pub fn add(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        let data = self.node(a, "add")?.data + self.node(b, "add")?.data;
        Ok(self.insert(data, Op::Add(a, b)))
    }

    /// Scalar-operand overload: wraps the literal in a fresh leaf first.
    pub fn add_scalar(&mut self, a: ValueId, b: f64) -> Result<ValueId, ScalarGradError> {
        let b = self.leaf(b);
        self.add(a, b)
    }
}

// --- Backward Rule ---

/// d(a+b)/da = d(a+b)/db = 1: the upstream gradient flows to both
/// operands unchanged.
pub(crate) fn backward(
    graph: &mut Graph,
    a: ValueId,
    b: ValueId,
    out_grad: f64,
) -> Result<(), ScalarGradError> {
    graph.accumulate(a, out_grad, "backward add")?;
    graph.accumulate(b, out_grad, "backward add")
}

// --- Tests ---
