use std::fmt;
use std::fmt::{Display, Formatter};

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Message,
    Warning,
    FatalError,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Message, Severity::Warning, Severity::FatalError];

    /// Text written in front of every message of this severity.
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Message => "Message: ",
            Severity::Warning => "Warning: ",
            Severity::FatalError => "Fatal Error: ",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Message => write!(f, "Message"),
            Severity::Warning => write!(f, "Warning"),
            Severity::FatalError => write!(f, "FatalError"),
        }
    }
}
