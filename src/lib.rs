pub mod evaluation;
pub mod streams;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

/// Size of the trailing window the reference mean is computed over.
pub const WINDOW: usize = 64;
