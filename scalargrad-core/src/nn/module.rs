use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

/// The base trait for network building blocks (neurons, layers,
/// containers).
///
/// A module owns parameter handles into a [`Graph`] but never the nodes
/// themselves; a forward pass appends fresh computation nodes to the
/// graph and returns handles to the outputs.
pub trait Module {
    /// Builds the forward computation for `input`, appending nodes to
    /// `graph`.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if `input` does not match the module's
    /// fan-in or references stale nodes.
    fn forward(&self, graph: &mut Graph, input: &[ValueId])
        -> Result<Vec<ValueId>, ScalarGradError>;

    /// Every trainable parameter of the module, in a stable order.
    ///
    /// Parameters are ordinary leaf nodes created at construction time;
    /// they stay below any training-iteration checkpoint and therefore
    /// survive per-iteration [`release`](Graph::release) calls.
    fn parameters(&self) -> Vec<ValueId>;
}
