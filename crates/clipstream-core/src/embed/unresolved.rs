//! The "no embed" outcome of clip URL resolution.

use std::fmt;

/// Returned when no embeddable target could be derived from a clip URL.
///
/// Callers only need to know that the URL cannot be embedded; `reason` is kept
/// for logs and the CLI and carries no behavioural meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub reason: UnresolvedReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// Input is not an absolute URL.
    InvalidUrl,
    /// URL parsed but has no host (e.g. `mailto:`).
    MissingHost,
    /// Host belongs to none of the supported providers.
    UnsupportedHost,
    /// A provider claimed the host but none of its URL shapes matched.
    NoMatch { provider: &'static str },
}

impl Unresolved {
    pub fn new(reason: UnresolvedReason) -> Self {
        Self { reason }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            UnresolvedReason::InvalidUrl => write!(f, "not a valid URL"),
            UnresolvedReason::MissingHost => write!(f, "URL has no host"),
            UnresolvedReason::UnsupportedHost => write!(f, "unsupported host"),
            UnresolvedReason::NoMatch { provider } => {
                write!(f, "no embeddable {} link shape matched", provider)
            }
        }
    }
}

impl std::error::Error for Unresolved {}
