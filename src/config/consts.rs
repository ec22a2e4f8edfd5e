// src/config/consts.rs

// Net config
pub const MENU_URL: &str = "https://cloudwaterbrew.co/unit9menu";
pub const USER_AGENT: &str = concat!("tapwatch/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local store
pub const STORE_DIR: &str = ".store";
pub const SNAPSHOT_FILE: &str = "beer_list.json";
pub const LOG_FILE: &str = "debug.log";

// Email
pub const CREDENTIALS_FILE: &str = "credentials.json";
pub const SMTP_HOST: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 465; // implicit TLS
pub const EMAIL_SUBJECT: &str = "Cloudwater Unit-9 updates!";
pub const EMAIL_FROM_NAME: &str = "Unit-9 Notifier";
