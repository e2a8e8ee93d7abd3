//! Launch resolution and manifest rendering.

pub mod command;
pub mod error;
pub mod expiration;
pub mod launch;
pub mod launcher;
pub mod secrets;
pub mod settings;
pub mod tickers;
pub mod tool_lookup;
pub mod venv;
