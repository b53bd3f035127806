// Core crate of the scalargrad workspace: the scalar autodiff engine
// (arena, primitive operations, backward pass, range reclamation) plus
// the network-construction and optimization layers built on top of it.

mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;

// Re-export the types every consumer touches.
pub use error::ScalarGradError;
pub use graph::Graph;
pub use value::ValueId;
