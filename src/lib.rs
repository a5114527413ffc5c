//! yamljson: JSON/YAML Conversion Library
//!
//! Parses `--name:value` switches, routes them to a conversion or to the
//! help text, and converts files between JSON and YAML.

pub mod cli;
pub mod convert;
pub mod utils;
