//! Command implementations

pub mod simple;

pub use simple::{run_session, run_simple};
