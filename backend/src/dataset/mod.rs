//! The survey dataset: loaded once at startup, never mutated afterwards.
//!
//! - `table`: the base columnar table, one text vector per schema column plus
//!   the parsed timestamps.
//! - `loader`: CSV parsing with header validation and timestamp parsing.
//! - `derived`: date parts and ordinal-encoded numeric columns built on top of
//!   the base table.
//! - `state`: the shared, read-only value injected into every request handler.

pub mod derived;
pub mod loader;
pub mod state;
pub mod table;

#[cfg(test)]
pub(crate) mod fixtures;
