// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::{Op, ValueId};

// --- Forward Operation ---

impl Graph {
    /// Raises `base` to `exponent` via [`f64::powf`]. Domain issues —
    /// negative base with a non-integer exponent, zero base with a
    /// negative exponent — yield NaN/∞, which propagate through forward
    /// and backward computation unintercepted.
    pub fn pow(&mut self, base: ValueId, exponent: ValueId) -> Result<ValueId, ScalarGradError> {
        let data = self
            .node(base, "pow")?
            .data
            .powf(self.node(exponent, "pow")?.data);
        Ok(self.insert(data, Op::Pow(base, exponent)))
    }

    /// Scalar-exponent overload: wraps the literal in a fresh leaf first.
    pub fn pow_scalar(&mut self, base: ValueId, exponent: f64) -> Result<ValueId, ScalarGradError> {
        let exponent = self.leaf(exponent);
        self.pow(base, exponent)
    }
}

// --- Backward Rule ---

/// d(a^n)/da = n·a^(n-1). The exponent is treated as a constant: no
/// gradient is propagated into it. Known limitation, kept deliberately —
/// the operator is only ever used with constant exponents.
pub(crate) fn backward(
    graph: &mut Graph,
    base: ValueId,
    exponent: ValueId,
    out_grad: f64,
) -> Result<(), ScalarGradError> {
    let base_data = graph.node(base, "backward pow")?.data;
    let exp_data = graph.node(exponent, "backward pow")?.data;
    graph.accumulate(
        base,
        exp_data * base_data.powf(exp_data - 1.0) * out_grad,
        "backward pow",
    )
}

// --- Tests ---
