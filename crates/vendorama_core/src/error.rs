use std::fmt;

/// A failed page fetch, as surfaced through the observable error field.
///
/// Failures are non-fatal: they stop the current page's progress and leave
/// accumulated results untouched. Recovery is user-driven (refresh or a new
/// search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub kind: SearchFailureKind,
    pub message: String,
}

impl SearchFailure {
    pub fn new(kind: SearchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SearchFailureKind::Network => write!(f, "network error: {}", self.message),
            SearchFailureKind::HttpStatus(code) => {
                write!(f, "server returned {code}: {}", self.message)
            }
            SearchFailureKind::Decode => write!(f, "malformed response: {}", self.message),
        }
    }
}

/// Transport, status and decode failures all stop pagination the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailureKind {
    Network,
    HttpStatus(u16),
    Decode,
}
