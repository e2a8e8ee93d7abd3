//! fetchctl — dataset collection launcher.
//!
//! Hexagonal architecture: resolution logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`], dispatch in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
