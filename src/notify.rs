// src/notify.rs
// Emailing the report. Nothing in here may fail a run: every error stops at
// `Notifier::send`, is shown to the user, and comes back out as `false`.

use std::{fs, io, path::{Path, PathBuf}};

use lettre::address::AddressError;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials as SmtpCredentials;
use lettre::{Address, Message, Transport as _};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::config::options::SmtpOptions;
use crate::error::NotifyError;
use crate::progress::Progress;

const LESS_SECURE_HINT: &str =
    "Are less secure apps allowed? (https://myaccount.google.com/lesssecureapps)";

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl Credentials {
    /// Read `{"username": .., "password": .., "recipient": ..}` from `path`.
    pub fn load(path: &Path) -> Result<Self, NotifyError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NotifyError::MissingCredentials(path.to_path_buf()),
            _ => NotifyError::BadCredentials(format!("{}: {e}", path.display())),
        })?;
        serde_json::from_str(&text)
            .map_err(|e| NotifyError::BadCredentials(format!("{}: {e}", path.display())))
    }
}

/// A ready-to-send plain text email.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub from_name: String,
    pub subject: String,
    pub body: String,
}

/// Delivery seam. `SmtpTransport` in production, fakes in tests.
pub trait Transport {
    fn deliver(&self, creds: &Credentials, mail: &Outgoing) -> Result<(), NotifyError>;
}

/// Authenticated SMTP over implicit TLS.
pub struct SmtpTransport {
    host: String,
    port: u16,
}

impl SmtpTransport {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    fn build_message(creds: &Credentials, mail: &Outgoing) -> Result<Message, NotifyError> {
        let from_addr: Address = creds.username.parse().map_err(|e: AddressError| {
            NotifyError::Address { address: creds.username.clone(), reason: e.to_string() }
        })?;
        let to: Mailbox = creds.recipient.parse().map_err(|e: AddressError| {
            NotifyError::Address { address: creds.recipient.clone(), reason: e.to_string() }
        })?;

        Message::builder()
            .from(Mailbox::new(Some(mail.from_name.clone()), from_addr))
            .to(to)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

impl Transport for SmtpTransport {
    fn deliver(&self, creds: &Credentials, mail: &Outgoing) -> Result<(), NotifyError> {
        let email = Self::build_message(creds, mail)?;

        let transport = lettre::SmtpTransport::relay(&self.host)
            .map_err(|e| NotifyError::Smtp(e.to_string()))?
            .port(self.port)
            .credentials(SmtpCredentials::new(creds.username.clone(), creds.password.clone()))
            .build();

        transport.send(&email).map(|_| ()).map_err(|e| {
            // 535 and friends: server rejected the login
            if e.is_permanent() && e.status().is_some_and(|c| c.to_string().starts_with("53")) {
                NotifyError::Auth(e.to_string())
            } else {
                NotifyError::Smtp(e.to_string())
            }
        })
    }
}

/// Sends reports to the address in the credentials file.
pub struct Notifier<T> {
    transport: T,
    credentials_path: PathBuf,
    smtp: SmtpOptions,
}

impl Notifier<SmtpTransport> {
    pub fn smtp(credentials_path: impl Into<PathBuf>, smtp: SmtpOptions) -> Self {
        let transport = SmtpTransport::new(smtp.host.clone(), smtp.port);
        Self::new(transport, credentials_path, smtp)
    }
}

impl<T: Transport> Notifier<T> {
    pub fn new(transport: T, credentials_path: impl Into<PathBuf>, smtp: SmtpOptions) -> Self {
        Self { transport, credentials_path: credentials_path.into(), smtp }
    }

    /// Deliver `report`. `true` only if the transport accepted it.
    /// Why it didn't is logged and told to `progress`.
    pub fn send(&self, report: &str, progress: &mut dyn Progress) -> bool {
        let e = match self.try_send(report) {
            Ok(()) => {
                info!("report emailed");
                return true;
            }
            Err(e) => e,
        };

        match &e {
            NotifyError::MissingCredentials(_) => {
                warn!("{e}");
                progress.log("Could not find email credentials!");
            }
            NotifyError::Auth(_) => {
                error!("{e}");
                progress.log(&e.to_string());
                progress.log("Authentication error, is the password correct?");
                progress.log(LESS_SECURE_HINT);
            }
            _ => {
                error!("{e}");
                progress.log(&e.to_string());
            }
        }
        false
    }

    fn try_send(&self, report: &str) -> Result<(), NotifyError> {
        let creds = Credentials::load(&self.credentials_path)?;
        let mail = Outgoing {
            from_name: self.smtp.from_name.clone(),
            subject: self.smtp.subject.clone(),
            body: s!(report),
        };
        self.transport.deliver(&creds, &mail)
    }
}
