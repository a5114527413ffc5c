//! CLI module - argument collection, switch parsing and dispatch

mod args;
pub mod dispatch;
pub mod switches;

pub use args::Cli;
pub use dispatch::*;
pub use switches::*;
