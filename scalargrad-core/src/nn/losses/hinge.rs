// scalargrad-core/src/nn/losses/hinge.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

/// Max-margin (hinge) data loss over scalar scores:
/// `mean(relu(1 - label·score))`.
///
/// Labels are expected in {-1, +1}. A sample contributes nothing once
/// its score clears the margin with the right sign; everything else
/// contributes linearly, and the rectifier blocks its gradient as usual.
pub fn hinge_loss(
    graph: &mut Graph,
    scores: &[ValueId],
    labels: &[ValueId],
) -> Result<ValueId, ScalarGradError> {
    if scores.len() != labels.len() {
        return Err(ScalarGradError::LengthMismatch {
            expected: labels.len(),
            actual: scores.len(),
            operation: "hinge loss".to_string(),
        });
    }

    let mut total = graph.leaf(0.0);
    for (&score, &label) in scores.iter().zip(labels) {
        let neg_label = graph.neg(label)?;
        let margin = graph.mul(neg_label, score)?;
        let shifted = graph.add_scalar(margin, 1.0)?;
        let sample = graph.relu(shifted)?;
        total = graph.add(total, sample)?;
    }
    graph.div_scalar(total, scores.len() as f64)
}
