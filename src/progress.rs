// src/progress.rs
/// Where user-facing run output goes (report text, "Email sent.", ...).
/// The CLI prints it; tests collect it.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// The comparison report, exactly as captured.
    fn report(&mut self, text: &str) {
        self.log(text.trim_end_matches('\n'));
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Keeps every line; used by tests and embedding callers.
#[derive(Debug, Default)]
pub struct Collect {
    pub lines: Vec<String>,
}

impl Progress for Collect {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
}
