use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::ValueId;

/// Work item for the explicit traversal stack. `Enter` expands a node's
/// operands, `Exit` emits it once its whole operand subtree has been
/// emitted.
enum Visit {
    Enter(ValueId),
    Exit(ValueId),
}

/// Builds a topological ordering of every node reachable from `root`:
/// post-order depth-first, operands in recorded order, so every operand
/// appears before any node that consumes it. A node reachable through
/// several dependents is emitted exactly once, which keeps the traversal
/// linear in graph size.
///
/// The visited marker is a dense bool vector indexed by id. An explicit
/// work stack replaces native recursion, so the longest dependency chain
/// is bounded by heap memory rather than the call stack; the emitted
/// order is identical to the recursive formulation.
///
/// Assumes the graph is acyclic, which the constructors guarantee.
pub(crate) fn topo_order(graph: &Graph, root: ValueId) -> Result<Vec<ValueId>, ScalarGradError> {
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(id) => {
                let node = graph.node(id, "topological sort")?;
                if visited[id.index()] {
                    continue;
                }
                visited[id.index()] = true;
                stack.push(Visit::Exit(id));
                // Reversed push order so the first operand is expanded
                // first, matching the recursive visit order.
                for operand in node.op.operands().into_iter().rev().flatten() {
                    if !visited[operand.index()] {
                        stack.push(Visit::Enter(operand));
                    }
                }
            }
            Visit::Exit(id) => order.push(id),
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[ValueId], id: ValueId) -> usize {
        order.iter().position(|&x| x == id).unwrap()
    }

    #[test]
    fn operands_precede_dependents() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let b = g.leaf(2.0);
        let prod = g.mul(a, b).unwrap();
        let sum = g.add(prod, a).unwrap();

        let order = topo_order(&g, sum).unwrap();
        assert_eq!(*order.last().unwrap(), sum);
        assert!(position(&order, a) < position(&order, prod));
        assert!(position(&order, b) < position(&order, prod));
        assert!(position(&order, prod) < position(&order, sum));
    }

    #[test]
    fn shared_operand_emitted_once() {
        let mut g = Graph::new();
        let x = g.leaf(3.0);
        let left = g.add_scalar(x, 1.0).unwrap();
        let right = g.mul_scalar(x, 2.0).unwrap();
        let out = g.add(left, right).unwrap();

        let order = topo_order(&g, out).unwrap();
        assert_eq!(order.iter().filter(|&&id| id == x).count(), 1);
        // x, two literal leaves, left, right, out
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn order_restricted_to_reachable_nodes() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let stray = g.leaf(5.0);
        let out = g.add_scalar(a, 1.0).unwrap();

        let order = topo_order(&g, out).unwrap();
        assert_eq!(order.len(), 3);
        assert!(!order.contains(&stray));
    }

    #[test]
    fn deep_chain_does_not_overflow_the_stack() {
        let mut g = Graph::new();
        let mut acc = g.leaf(0.0);
        for _ in 0..50_000 {
            acc = g.add_scalar(acc, 1.0).unwrap();
        }
        let order = topo_order(&g, acc).unwrap();
        assert_eq!(*order.last().unwrap(), acc);
        assert_eq!(order.len(), g.len());
    }

    #[test]
    fn released_operand_is_reported() {
        let mut g = Graph::new();
        let a = g.leaf(1.0);
        let from = g.checkpoint();
        let inner = g.add_scalar(a, 1.0).unwrap();
        g.release(inner, from).unwrap();

        // A node built on top of the vacated range is dangling; the
        // traversal surfaces that instead of reading freed state.
        assert!(matches!(
            topo_order(&g, inner),
            Err(ScalarGradError::NodeReleased { .. })
        ));
    }
}
