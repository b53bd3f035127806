// Data loading for scalargrad training loops: delimited numeric text in,
// rows of leaf nodes out, plus index shuffling for sample order.

pub mod csv;
pub mod sampler;

pub use csv::{leaf_rows, read_csv, read_delimited, DataError};
pub use sampler::shuffled_indices;
