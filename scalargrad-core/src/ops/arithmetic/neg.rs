// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

impl Graph {
    /// Negation, derived as `a * (-1)` so the product rule supplies the
    /// derivative. Allocates the literal leaf plus the product node;
    /// derived operations keep this exact composition because graph size
    /// and gradients depend on it.
    pub fn neg(&mut self, a: ValueId) -> Result<ValueId, ScalarGradError> {
        self.mul_scalar(a, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_value_and_shape() {
        let mut g = Graph::new();
        let a = g.leaf(3.0);
        let before = g.len();
        let out = g.neg(a).unwrap();
        assert_eq!(g.data(out), Ok(-3.0));
        assert_eq!(g.len(), before + 2); // leaf(-1) and the product
    }

    #[test]
    fn gradient_is_minus_one() {
        let mut g = Graph::new();
        let a = g.leaf(3.0);
        let out = g.neg(a).unwrap();

        g.backward(out).unwrap();
        assert_eq!(g.grad(a), Ok(-1.0));
    }
}
