// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

impl Graph {
    /// Subtraction, derived as `a + (-b)`.
    pub fn sub(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        let neg_b = self.neg(b)?;
        self.add(a, neg_b)
    }

    /// Scalar-operand overload. Folds the sign into the literal, so it
    /// allocates a single leaf rather than a negation subgraph.
    pub fn sub_scalar(&mut self, a: ValueId, b: f64) -> Result<ValueId, ScalarGradError> {
        self.add_scalar(a, -b)
    }
}
