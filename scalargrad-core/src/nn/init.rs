use crate::graph::Graph;
use crate::value::ValueId;
use rand::Rng;

/// Allocates `n` leaf parameters drawn uniformly from `[low, high)`.
///
/// The RNG is caller-supplied so training runs can be seeded
/// deterministically.
pub fn uniform<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Vec<ValueId> {
    (0..n).map(|_| graph.leaf(rng.gen_range(low..high))).collect()
}
