//! Core domain + application logic for the Chat ID Finder bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! [`transport::Transport`] port implemented in the adapter crate.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod response;
pub mod transport;
pub mod update;

pub use errors::{Error, Result};
