//! Error tier classification.
//!
//! Every failure a view can see falls into one of three tiers. The tier
//! decides how the view reacts, not the individual error.

use std::fmt;

/// How a failed request is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTier {
    /// No response exists. The whole view redirects to the error page.
    Transport,

    /// The server rejected the request with an `Errors` payload.
    /// Rendered inline; the view stays usable.
    Domain,

    /// A response arrived but its body could not be decoded.
    /// Handled like a transport failure.
    Decode,
}

impl ErrorTier {
    /// Returns true if failures in this tier replace the view with the
    /// generic error page.
    pub fn redirects(&self) -> bool {
        matches!(self, ErrorTier::Transport | ErrorTier::Decode)
    }

    /// Returns a short label for the tier suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorTier::Transport => "transport",
            ErrorTier::Domain => "domain",
            ErrorTier::Decode => "decode",
        }
    }

    /// Returns a user-friendly description of the tier.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorTier::Transport => "The blog could not be reached",
            ErrorTier::Domain => "The request was rejected",
            ErrorTier::Decode => "The blog sent an unreadable response",
        }
    }
}

impl fmt::Display for ErrorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_redirects() {
        assert!(ErrorTier::Transport.redirects());
        assert!(ErrorTier::Decode.redirects());
        assert!(!ErrorTier::Domain.redirects());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ErrorTier::Transport.to_string(), "transport");
        assert_eq!(ErrorTier::Domain.to_string(), "domain");
        assert_eq!(ErrorTier::Decode.to_string(), "decode");
    }
}
