//! Data models for the bundled currency dataset.

pub mod currency;
