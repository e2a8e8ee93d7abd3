//! Port traits implemented by [`crate::adapters`].

pub mod config_port;
pub mod env_port;
pub mod process_port;
