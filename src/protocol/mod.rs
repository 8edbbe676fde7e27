//! Line protocol handling.
//!
//! Parses commands read by the main loop and converts snapshots and orders
//! to and from their JSON form.

pub mod json;
pub mod parser;

pub use json::{encode_snapshot, format_orders, parse_orders, parse_snapshot, SnapshotError};
pub use parser::{parse_command, Command};
