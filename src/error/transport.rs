//! Transport-level error types.
//!
//! A transport error means no HTTP response exists: DNS, connect, TLS,
//! timeout, cancellation or a body that could not be read. Non-2xx statuses
//! are never transport errors.

use std::fmt;

/// Transport failure variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// DNS resolution failed.
    DnsResolutionFailed { host: String },

    /// Request timed out.
    Timeout { url: String },

    /// TLS/SSL error.
    TlsError { message: String },

    /// The request URL could not be built or parsed.
    InvalidUrl { url: String, message: String },

    /// Headers arrived but the body could not be read.
    BodyRead { url: String, message: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl TransportError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::ConnectionFailed { .. } => {
                "Unable to reach the blog. Please check your internet connection.".to_string()
            }
            TransportError::DnsResolutionFailed { host } => {
                format!("Could not resolve server address '{}'.", host)
            }
            TransportError::Timeout { .. } => {
                "The server took too long to respond.".to_string()
            }
            TransportError::TlsError { .. } => {
                "A secure connection could not be established.".to_string()
            }
            TransportError::InvalidUrl { url, .. } => {
                format!("'{}' is not a valid address.", url)
            }
            TransportError::BodyRead { .. } => {
                "The connection dropped while reading the response.".to_string()
            }
            TransportError::Cancelled => "The request was cancelled.".to_string(),
            TransportError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::ConnectionFailed { .. } => "E_NET_CONN",
            TransportError::DnsResolutionFailed { .. } => "E_NET_DNS",
            TransportError::Timeout { .. } => "E_NET_TIMEOUT",
            TransportError::TlsError { .. } => "E_NET_TLS",
            TransportError::InvalidUrl { .. } => "E_NET_URL",
            TransportError::BodyRead { .. } => "E_NET_BODY",
            TransportError::Cancelled => "E_NET_CANCEL",
            TransportError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            TransportError::DnsResolutionFailed { host } => {
                write!(f, "DNS resolution failed for '{}'", host)
            }
            TransportError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            TransportError::TlsError { message } => write!(f, "TLS error: {}", message),
            TransportError::InvalidUrl { url, message } => {
                write!(f, "Invalid URL '{}': {}", url, message)
            }
            TransportError::BodyRead { url, message } => {
                write!(f, "Failed to read response body from '{}': {}", url, message)
            }
            TransportError::Cancelled => write!(f, "Request cancelled"),
            TransportError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Classify a reqwest error into a TransportError.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_body() || err.is_decode() {
        TransportError::BodyRead {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else {
        let err_str = format!("{:?}", err).to_lowercase();
        if err_str.contains("dns") || err_str.contains("resolve") {
            TransportError::DnsResolutionFailed {
                host: extract_host_from_url(url),
            }
        } else if err_str.contains("tls") || err_str.contains("certificate") {
            TransportError::TlsError {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            TransportError::Other {
                message: err.to_string(),
            }
        }
    }
}

/// Extract the host portion from a URL string.
fn extract_host_from_url(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = vec![
            TransportError::ConnectionFailed {
                url: "u".to_string(),
                message: "m".to_string(),
            },
            TransportError::DnsResolutionFailed {
                host: "h".to_string(),
            },
            TransportError::Timeout {
                url: "u".to_string(),
            },
            TransportError::TlsError {
                message: "m".to_string(),
            },
            TransportError::InvalidUrl {
                url: "u".to_string(),
                message: "m".to_string(),
            },
            TransportError::BodyRead {
                url: "u".to_string(),
                message: "m".to_string(),
            },
            TransportError::Cancelled,
            TransportError::Other {
                message: "m".to_string(),
            },
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_connection_failed_display() {
        let err = TransportError::ConnectionFailed {
            url: "http://localhost:5000/posts".to_string(),
            message: "Connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Connection failed to 'http://localhost:5000/posts': Connection refused"
        );
        assert!(err.user_message().contains("Unable to reach"));
    }

    #[test]
    fn test_dns_user_message_names_host() {
        let err = TransportError::DnsResolutionFailed {
            host: "blog.invalid".to_string(),
        };
        assert!(err.user_message().contains("blog.invalid"));
    }

    #[test]
    fn test_extract_host_from_url() {
        assert_eq!(
            extract_host_from_url("https://api.example.com:8443/posts"),
            "api.example.com"
        );
        assert_eq!(extract_host_from_url("http://localhost/x"), "localhost");
        assert_eq!(extract_host_from_url("not a url"), "not a url");
    }

    #[tokio::test]
    async fn test_classify_connection_refused() {
        let url = "http://127.0.0.1:1/posts";
        let err = reqwest::Client::new().get(url).send().await.unwrap_err();
        let classified = classify_reqwest_error(&err, url);
        assert!(matches!(
            classified,
            TransportError::ConnectionFailed { .. } | TransportError::Other { .. }
        ));
    }

    #[tokio::test]
    async fn test_classify_builder_error() {
        let url = "not-a-valid-url";
        let err = reqwest::Client::new().get(url).send().await.unwrap_err();
        let classified = classify_reqwest_error(&err, url);
        assert!(matches!(classified, TransportError::InvalidUrl { .. }));
    }
}
