//! Library entry for blogsift exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;
