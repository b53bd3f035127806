pub mod hinge;
pub mod l2;

pub use hinge::hinge_loss;
pub use l2::l2_penalty;
