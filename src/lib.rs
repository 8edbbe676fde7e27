//! fieldmarshal engine library.
//!
//! Exposes the battlefield snapshot model, the distance oracle, the order
//! strategies, and the protocol modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod engine;
pub mod path;
pub mod protocol;
pub mod strategy;
pub mod turn;
