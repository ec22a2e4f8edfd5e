// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("{url}: body is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: corrupt snapshot: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Structural problems in one `.menu-item` block. Any of these aborts the run.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("menu item {index}: no `.{class}` element")]
    MissingElement { index: usize, class: &'static str },

    #[error("{name}: no strength text after the currency sign")]
    MissingStrength { name: String },

    #[error("{name}: strength {text:?} does not start with a number")]
    BadStrength { name: String, text: String },

    #[error("bad selector for `.{class}`: {reason}")]
    Selector { class: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("could not find email credentials at {}", .0.display())]
    MissingCredentials(PathBuf),

    #[error("unreadable credentials: {0}")]
    BadCredentials(String),

    #[error("invalid address {address:?}: {reason}")]
    Address { address: String, reason: String },

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("SMTP send failed: {0}")]
    Smtp(String),
}
