use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::Dense;
use crate::nn::module::Module;
use crate::value::ValueId;
use rand::Rng;

/// A multi-layer perceptron over scalar nodes.
///
/// `sizes` lists the input width followed by each layer's width, e.g.
/// `[2, 16, 16, 1]`. Every layer but the last is rectified; the last is
/// linear so it can produce unbounded scores.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, sizes: &[usize]) -> Self {
        let mut layers = Vec::with_capacity(sizes.len().saturating_sub(1));
        for i in 1..sizes.len() {
            let nonlin = i != sizes.len() - 1;
            layers.push(Dense::new(graph, rng, sizes[i - 1], sizes[i], nonlin));
        }
        Mlp { layers }
    }

    /// Forward pass of a single-output network, returning the one score
    /// node directly.
    ///
    /// # Errors
    /// `LengthMismatch` if the final layer is not one neuron wide.
    pub fn score(&self, graph: &mut Graph, input: &[ValueId]) -> Result<ValueId, ScalarGradError> {
        let mut out = self.forward(graph, input)?;
        if out.len() != 1 {
            return Err(ScalarGradError::LengthMismatch {
                expected: 1,
                actual: out.len(),
                operation: "mlp score".to_string(),
            });
        }
        Ok(out.remove(0))
    }
}

impl Module for Mlp {
    fn forward(
        &self,
        graph: &mut Graph,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<ValueId> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}
