use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly shuffled permutation of `0..len` (Fisher–Yates), used to
/// randomize sample order before or during training.
pub fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}
