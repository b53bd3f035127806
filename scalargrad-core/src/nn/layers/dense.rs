use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layers::Neuron;
use crate::nn::module::Module;
use crate::value::ValueId;
use rand::Rng;

/// A fully-connected layer: `nout` independent neurons over one shared
/// input.
#[derive(Debug, Clone)]
pub struct Dense {
    neurons: Vec<Neuron>,
}

impl Dense {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        nin: usize,
        nout: usize,
        nonlin: bool,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, rng, nin, nonlin))
            .collect();
        Dense { neurons }
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Dense {
    fn forward(
        &self,
        graph: &mut Graph,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        let mut out = Vec::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            out.push(neuron.activate(graph, input)?);
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<ValueId> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_output_per_neuron() {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Dense::new(&mut g, &mut rng, 3, 4, true);
        let x = vec![g.leaf(0.5), g.leaf(-0.5), g.leaf(1.0)];

        let out = layer.forward(&mut g, &x).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(layer.nout(), 4);
    }

    #[test]
    fn parameter_count_is_nout_times_nin_plus_one() {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = Dense::new(&mut g, &mut rng, 3, 4, false);
        assert_eq!(layer.parameters().len(), 4 * (3 + 1));
    }
}
