//! Shared library surface for the route server and its tools.

pub mod api;
pub mod config;
pub mod state;
pub mod sweep;
