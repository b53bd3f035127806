use crate::autograd::graph::topo_order;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::activation::relu;
use crate::ops::arithmetic::{add, mul, pow};
use crate::value::Op;
use crate::ValueId;

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Builds the topological order of everything reachable from `root`,
    /// seeds `root`'s gradient to 1 (overwriting it — the root is the
    /// output being differentiated), then walks the order in reverse,
    /// dispatching each node to its operator's accumulation rule. Every
    /// rule is additive, so a node consumed along several paths sums the
    /// contribution from each path.
    ///
    /// Gradients are not zeroed first: a second call on the same root
    /// accumulates on top of the first, doubling every operand gradient.
    /// Clearing between passes is the caller's job (see
    /// [`Sgd::zero_grad`](crate::optim::Sgd::zero_grad)).
    pub fn backward(&mut self, root: ValueId) -> Result<(), ScalarGradError> {
        let order = topo_order(self, root)?;
        log::trace!("backward: {} nodes reachable from root {}", order.len(), root);

        self.node_mut(root, "backward")?.grad = 1.0;

        for &id in order.iter().rev() {
            let node = self.node(id, "backward")?;
            let (out_data, out_grad, op) = (node.data, node.grad, node.op);
            match op {
                Op::Leaf => {}
                Op::Add(a, b) => add::backward(self, a, b, out_grad)?,
                Op::Mul(a, b) => mul::backward(self, a, b, out_grad)?,
                Op::Pow(base, exponent) => pow::backward(self, base, exponent, out_grad)?,
                Op::Relu(a) => relu::backward(self, a, out_data, out_grad)?,
            }
        }

        Ok(())
    }
}
