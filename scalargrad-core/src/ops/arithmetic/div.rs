// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

impl Graph {
    /// Division, derived as `a * b^(-1)`. Division by zero is not
    /// intercepted: `b = 0` yields ±∞ through the reciprocal, like any
    /// other pow domain issue.
    pub fn div(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        let inv_b = self.pow_scalar(b, -1.0)?;
        self.mul(a, inv_b)
    }

    /// Scalar-operand overload: wraps the divisor in a fresh leaf first.
    pub fn div_scalar(&mut self, a: ValueId, b: f64) -> Result<ValueId, ScalarGradError> {
        let b = self.leaf(b);
        self.div(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_value() {
        let mut g = Graph::new();
        let a = g.leaf(6.0);
        let b = g.leaf(2.0);
        let out = g.div(a, b).unwrap();
        assert_eq!(g.data(out), Ok(3.0));
    }

    #[test]
    fn quotient_rule_gradients() {
        let mut g = Graph::new();
        let a = g.leaf(6.0);
        let b = g.leaf(2.0);
        let out = g.div(a, b).unwrap();

        g.backward(out).unwrap();
        // d(a/b)/da = 1/b
        assert_relative_eq!(g.grad(a).unwrap(), 0.5, epsilon = 1e-12);
        // d(a/b)/db = -a/b^2
        assert_relative_eq!(g.grad(b).unwrap(), -1.5, epsilon = 1e-12);
    }

    #[test]
    fn division_by_zero_yields_infinity() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let out = g.div_scalar(a, 0.0).unwrap();
        assert!(g.data(out).unwrap().is_infinite());
    }
}
