//! Command implementations

mod inspect;

pub use inspect::inspect;
