use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

/// Plain gradient descent over a set of parameter nodes.
///
/// The optimizer holds only the learning rate; parameters live in the
/// [`Graph`] and are passed to each call, matching the engine's
/// explicit-context style. Learning-rate schedules mutate `lr` between
/// steps via [`set_lr`](Sgd::set_lr).
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    /// Applies `data -= lr · grad` to every parameter.
    pub fn step(&self, graph: &mut Graph, params: &[ValueId]) -> Result<(), ScalarGradError> {
        for &p in params {
            let update = self.lr * graph.grad(p)?;
            let data = graph.data(p)? - update;
            graph.set_data(p, data)?;
        }
        Ok(())
    }

    /// Clears accumulated gradients. Call before each backward pass; the
    /// engine itself never zeroes anything, and skipping this doubles
    /// gradients on the next pass.
    pub fn zero_grad(&self, graph: &mut Graph, params: &[ValueId]) -> Result<(), ScalarGradError> {
        for &p in params {
            graph.set_grad(p, 0.0)?;
        }
        Ok(())
    }
}
