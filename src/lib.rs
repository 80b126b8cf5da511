use thiserror::Error;

/// Compile-time knobs: default capacity and dump formatting
pub mod constants;
/// The fixed-capacity, admission-ordered set
pub mod int_set;
pub mod logging;
#[cfg(test)]
mod tests;

pub use constants::DEFAULT_MAX_SIZE;
pub use int_set::{IntSet, equal};
pub use logging::init_logger;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntSetError {
    #[error("Set needs {required} slots but capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("Value {0} appears more than once")]
    DuplicateMember(i32),
}
