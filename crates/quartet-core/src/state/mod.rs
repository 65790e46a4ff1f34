//! Architectural state model primitives.

pub mod phase;
pub mod registers;

pub use phase::Phase;
pub use registers::ProcessorState;
