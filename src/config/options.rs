// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Try to email the report.
    pub email: bool,
    /// Never overwrite the stored snapshot.
    pub no_save: bool,
    pub url: String,
    pub store_path: PathBuf,
    pub credentials_path: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            email: false,
            no_save: false,
            url: s!(MENU_URL),
            store_path: PathBuf::from(STORE_DIR).join(SNAPSHOT_FILE),
            credentials_path: PathBuf::from(CREDENTIALS_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpOptions {
    pub host: String,
    pub port: u16,
    pub subject: String,
    pub from_name: String,
}

impl Default for SmtpOptions {
    fn default() -> Self {
        Self {
            host: s!(SMTP_HOST),
            port: SMTP_PORT,
            subject: s!(EMAIL_SUBJECT),
            from_name: s!(EMAIL_FROM_NAME),
        }
    }
}
