//! Small helpers shared across the workspace crates.

#![deny(missing_docs)]

pub mod config;
