//! Strategy implementations.

pub mod deadline;
pub mod minimax;
pub mod random;
