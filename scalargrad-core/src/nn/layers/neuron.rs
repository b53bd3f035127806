use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::ValueId;
use rand::Rng;

/// A single scalar neuron: `nin` weights, a bias, and an optional
/// rectification on the activation.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<ValueId>,
    bias: ValueId,
    nonlin: bool,
}

impl Neuron {
    /// Weights are drawn uniformly from `[-1, 1)`; the bias starts at 0.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        nin: usize,
        nonlin: bool,
    ) -> Self {
        let weights = init::uniform(graph, rng, nin, -1.0, 1.0);
        let bias = graph.leaf(0.0);
        Neuron {
            weights,
            bias,
            nonlin,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Builds `relu?(b + Σ wᵢ·xᵢ)` and returns the activation node.
    pub fn activate(
        &self,
        graph: &mut Graph,
        input: &[ValueId],
    ) -> Result<ValueId, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "neuron forward".to_string(),
            });
        }

        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(input) {
            let term = graph.mul(w, x)?;
            act = graph.add(act, term)?;
        }

        if self.nonlin {
            act = graph.relu(act)?;
        }
        Ok(act)
    }
}

impl Module for Neuron {
    fn forward(
        &self,
        graph: &mut Graph,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        Ok(vec![self.activate(graph, input)?])
    }

    fn parameters(&self) -> Vec<ValueId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}
