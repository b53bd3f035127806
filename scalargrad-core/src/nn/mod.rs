// Network construction on top of the engine: parameter initialization,
// the Module trait, scalar neurons composed into dense layers and MLPs,
// and the loss builders the training loop consumes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module;

pub use layers::{Dense, Neuron};
pub use losses::{hinge_loss, l2_penalty};
pub use mlp::Mlp;
pub use module::Module;
