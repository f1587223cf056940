use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: StatusSeverity,
    pub timestamp: DateTime<Local>,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, StatusSeverity::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, StatusSeverity::Error)
    }

    fn new(text: impl Into<String>, severity: StatusSeverity) -> Self {
        Self {
            text: text.into(),
            severity,
            timestamp: Local::now(),
        }
    }
}
