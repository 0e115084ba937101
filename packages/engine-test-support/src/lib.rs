//! Engine test support utilities
//!
//! Shared by the engine's integration tests and the simulator's tests:
//! unified logging initialization and proptest configuration.

pub mod logging;
pub mod proptest_prelude;
