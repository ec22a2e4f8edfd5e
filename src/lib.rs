// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod diff;
pub mod error;
pub mod extract;
pub mod file;
pub mod log;
pub mod model;
pub mod notify;
pub mod progress;
pub mod runner;
pub mod store;

pub use error::{Error, ExtractError, NotifyError, Result};
pub use model::{Beer, Snapshot};
