// tests/notifier.rs
//
// Notifier with stand-in transports; nothing here opens a socket.
//
use std::cell::RefCell;
use std::fs;

use tapwatch::config::options::SmtpOptions;
use tapwatch::notify::{Credentials, Notifier, Outgoing, Transport};
use tapwatch::progress::{Collect, NullProgress};
use tapwatch::NotifyError;

const CREDS: &str =
    r#"{"username": "me@example.com", "password": "hunter2", "recipient": "you@example.com"}"#;

#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<(Credentials, Outgoing)>>,
}

impl Transport for &Recorder {
    fn deliver(&self, creds: &Credentials, mail: &Outgoing) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push((creds.clone(), mail.clone()));
        Ok(())
    }
}

/// Accepts only one password, like a real server would.
struct Checking;

impl Transport for Checking {
    fn deliver(&self, creds: &Credentials, _mail: &Outgoing) -> Result<(), NotifyError> {
        if creds.password == "hunter2" {
            Ok(())
        } else {
            Err(NotifyError::Auth("535 5.7.8 Username and Password not accepted".into()))
        }
    }
}

fn creds_file(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let p = dir.path().join("credentials.json");
    fs::write(&p, body).unwrap();
    p
}

#[test]
fn sends_report_with_subject_and_sender() {
    let dir = tempfile::tempdir().unwrap();
    let rec = Recorder::default();
    let notifier = Notifier::new(&rec, creds_file(&dir, CREDS), SmtpOptions::default());

    assert!(notifier.send("Some beers were added:\nX\n", &mut NullProgress));

    let sent = rec.sent.borrow();
    assert_eq!(sent.len(), 1);
    let (creds, mail) = &sent[0];
    assert_eq!(creds.recipient, "you@example.com");
    assert_eq!(mail.subject, "Cloudwater Unit-9 updates!");
    assert_eq!(mail.from_name, "Unit-9 Notifier");
    assert_eq!(mail.body, "Some beers were added:\nX\n");
}

#[test]
fn valid_credentials_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let notifier = Notifier::new(Checking, creds_file(&dir, CREDS), SmtpOptions::default());
    let mut out = Collect::default();
    assert!(notifier.send("report", &mut out));
    assert!(out.lines.is_empty());
}

#[test]
fn rejected_login_is_false_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let wrong = CREDS.replace("hunter2", "nope");
    let notifier = Notifier::new(Checking, creds_file(&dir, &wrong), SmtpOptions::default());
    let mut out = Collect::default();
    assert!(!notifier.send("report", &mut out));
    assert!(out.lines.iter().any(|l| l == "Authentication error, is the password correct?"));
    assert!(out.lines.iter().any(|l| l.starts_with("Are less secure apps allowed?")));
}

#[test]
fn missing_credentials_file_is_false() {
    let dir = tempfile::tempdir().unwrap();
    let rec = Recorder::default();
    let notifier = Notifier::new(&rec, dir.path().join("nope.json"), SmtpOptions::default());
    let mut out = Collect::default();

    assert!(!notifier.send("report", &mut out));
    assert_eq!(out.lines, vec!["Could not find email credentials!"]);
    assert!(rec.sent.borrow().is_empty());
}

#[test]
fn credentials_missing_a_key_is_false() {
    let dir = tempfile::tempdir().unwrap();
    let rec = Recorder::default();
    let path = creds_file(&dir, r#"{"username": "me@example.com", "password": "x"}"#);
    let notifier = Notifier::new(&rec, path, SmtpOptions::default());

    let mut out = Collect::default();
    assert!(!notifier.send("report", &mut out));
    assert!(rec.sent.borrow().is_empty());
    assert!(out.lines[0].starts_with("unreadable credentials:"));
}

#[test]
fn credentials_load_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        Credentials::load(&missing),
        Err(NotifyError::MissingCredentials(p)) if p == missing
    ));

    let bad = creds_file(&dir, "{");
    assert!(matches!(Credentials::load(&bad), Err(NotifyError::BadCredentials(_))));

    let ok = creds_file(&dir, CREDS);
    assert_eq!(Credentials::load(&ok).unwrap().username, "me@example.com");
}

#[test]
fn credentials_debug_hides_password() {
    let creds: Credentials = serde_json::from_str(CREDS).unwrap();
    let shown = format!("{creds:?}");
    assert!(!shown.contains("hunter2"));
    assert!(shown.contains("me@example.com"));
}
