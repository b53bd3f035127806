use crate::autograd::graph::topo_order;
use crate::error::ScalarGradError;
use crate::value::{Node, Op, ValueId};

/// Arena owning every value node of one computation graph.
///
/// The graph assigns ids densely in creation order; a released slot is
/// vacated but never reused, so ids keep increasing for the lifetime of
/// the graph. Operand references inside nodes are plain [`ValueId`]s into
/// the same arena, never owning pointers, which is what lets a node be
/// the operand of arbitrarily many dependents without reference counting.
///
/// Each `Graph` is an independent context with its own id sequence;
/// callers that need several concurrent graphs simply create several
/// instances. All mutation goes through `&mut self`, so the borrow
/// checker serializes construction, backward passes and reclamation.
#[derive(Debug, Default)]
pub struct Graph {
    slots: Vec<Option<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { slots: Vec::new() }
    }

    /// Pre-sizes the arena for a graph whose node count is known roughly
    /// in advance (e.g. one training iteration).
    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            slots: Vec::with_capacity(nodes),
        }
    }

    /// Number of ids assigned so far, vacated slots included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of nodes still resident in the arena.
    pub fn live_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The id the next allocation will receive. Record this before
    /// building a per-iteration subgraph and pass it to [`release`]
    /// afterwards to reclaim everything built since.
    ///
    /// [`release`]: Graph::release
    pub fn checkpoint(&self) -> ValueId {
        ValueId(self.slots.len() + 1)
    }

    /// Allocates a leaf node: no operands, zero gradient.
    pub fn leaf(&mut self, data: f64) -> ValueId {
        self.insert(data, Op::Leaf)
    }

    pub(crate) fn insert(&mut self, data: f64, op: Op) -> ValueId {
        self.slots.push(Some(Node {
            data,
            grad: 0.0,
            op,
        }));
        ValueId(self.slots.len())
    }

    pub(crate) fn node(&self, id: ValueId, operation: &str) -> Result<&Node, ScalarGradError> {
        match self.slots.get(id.index()) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(ScalarGradError::NodeReleased {
                id,
                operation: operation.to_string(),
            }),
            None => Err(ScalarGradError::UnknownNode {
                id,
                operation: operation.to_string(),
            }),
        }
    }

    pub(crate) fn node_mut(
        &mut self,
        id: ValueId,
        operation: &str,
    ) -> Result<&mut Node, ScalarGradError> {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(ScalarGradError::NodeReleased {
                id,
                operation: operation.to_string(),
            }),
            None => Err(ScalarGradError::UnknownNode {
                id,
                operation: operation.to_string(),
            }),
        }
    }

    /// Adds `amount` into the gradient accumulator of `id`. Gradients are
    /// only ever accumulated, never overwritten, outside of the root seed
    /// in a backward pass and the explicit [`set_grad`](Graph::set_grad).
    pub(crate) fn accumulate(
        &mut self,
        id: ValueId,
        amount: f64,
        operation: &str,
    ) -> Result<(), ScalarGradError> {
        self.node_mut(id, operation)?.grad += amount;
        Ok(())
    }

    pub fn data(&self, id: ValueId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id, "data")?.data)
    }

    pub fn grad(&self, id: ValueId) -> Result<f64, ScalarGradError> {
        Ok(self.node(id, "grad")?.grad)
    }

    /// Overwrites the stored datum, e.g. a gradient-descent parameter
    /// update.
    pub fn set_data(&mut self, id: ValueId, value: f64) -> Result<(), ScalarGradError> {
        self.node_mut(id, "set_data")?.data = value;
        Ok(())
    }

    /// Overwrites the gradient accumulator. Callers use this to zero
    /// gradients before a new backward pass; the engine never does that
    /// on its own.
    pub fn set_grad(&mut self, id: ValueId, value: f64) -> Result<(), ScalarGradError> {
        self.node_mut(id, "set_grad")?.grad = value;
        Ok(())
    }

    /// Vacates every node reachable from `root` whose id is at or above
    /// `from`, leaving nodes below the threshold (parameters, long-lived
    /// inputs) untouched and valid. Unreachable nodes are never freed,
    /// whatever their id.
    ///
    /// Accessing a vacated id afterwards reports
    /// [`ScalarGradError::NodeReleased`]; no other liveness checking is
    /// performed, so callers must stop using handles at or above `from`
    /// once they have consumed the subgraph's results.
    pub fn release(&mut self, root: ValueId, from: ValueId) -> Result<(), ScalarGradError> {
        let order = topo_order(self, root)?;
        let mut vacated = 0usize;
        for id in order {
            if id >= from {
                self.slots[id.index()] = None;
                vacated += 1;
            }
        }
        log::debug!("release: vacated {} nodes at or above id {}", vacated, from);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_increasing() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let b = g.leaf(2.0);
        let c = g.leaf(3.0);
        assert!(a < b && b < c);
        assert_eq!(g.len(), 3);
        assert_eq!(g.checkpoint(), ValueId(4));
    }

    #[test]
    fn leaf_starts_with_zero_grad() {
        let mut g = Graph::new();
        let a = g.leaf(-4.0);
        assert_eq!(g.data(a), Ok(-4.0));
        assert_eq!(g.grad(a), Ok(0.0));
    }

    #[test]
    fn set_data_and_set_grad_overwrite() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        g.set_data(a, 2.5).unwrap();
        g.set_grad(a, -0.5).unwrap();
        assert_eq!(g.data(a), Ok(2.5));
        assert_eq!(g.grad(a), Ok(-0.5));
    }

    #[test]
    fn foreign_id_is_rejected() {
        let mut other = Graph::new();
        for _ in 0..5 {
            other.leaf(0.0);
        }
        let foreign = other.leaf(1.0);

        let g = Graph::new();
        assert_eq!(
            g.data(foreign),
            Err(ScalarGradError::UnknownNode {
                id: foreign,
                operation: "data".to_string()
            })
        );
    }

    #[test]
    fn release_vacates_reachable_range_only() {
        let mut g = Graph::new();
        let kept = g.leaf(1.0);
        let from = g.checkpoint();
        let unreachable = g.leaf(9.0);
        let out = g.add_scalar(kept, 2.0).unwrap();

        g.release(out, from).unwrap();

        // Below the threshold: untouched.
        assert_eq!(g.data(kept), Ok(1.0));
        // Reachable and at/above the threshold: vacated.
        assert!(matches!(
            g.data(out),
            Err(ScalarGradError::NodeReleased { .. })
        ));
        // At/above the threshold but not reachable from `out`: kept.
        assert_eq!(g.data(unreachable), Ok(9.0));
    }

    #[test]
    fn release_keeps_ids_increasing() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let from = g.checkpoint();
        let out = g.add_scalar(a, 1.0).unwrap();
        g.release(out, from).unwrap();

        let next = g.leaf(0.0);
        assert!(next > out, "vacated ids must never be reused");
        assert_eq!(g.live_len(), 2); // `a` and `next`
    }

    #[test]
    fn release_below_threshold_is_a_no_op() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let out = g.add_scalar(a, 1.0).unwrap();
        let from = g.checkpoint();
        g.release(out, from).unwrap();
        assert_eq!(g.live_len(), 3);
        assert_eq!(g.data(out), Ok(2.0));
    }
}
