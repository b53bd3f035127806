// scalargrad-core/src/nn/losses/l2.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

/// L2 regularization penalty: `alpha · Σ p²` over the parameters.
///
/// Each square is built as `p * p`, so the shared-operand accumulation
/// in the product rule yields the expected `2·alpha·p` gradient.
pub fn l2_penalty(
    graph: &mut Graph,
    params: &[ValueId],
    alpha: f64,
) -> Result<ValueId, ScalarGradError> {
    let mut total = graph.leaf(0.0);
    for &p in params {
        let sq = graph.mul(p, p)?;
        total = graph.add(total, sq)?;
    }
    graph.mul_scalar(total, alpha)
}
