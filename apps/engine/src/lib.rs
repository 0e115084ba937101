//! Rules engine for the Wizard trick-taking card game.
//!
//! Everything lives under [`domain`]; contract violations are reported as
//! [`DomainError`].

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;


pub use domain::{Card, Color, Game, GameConfig, Round, Seat, Trick};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
