//! Last.fm API error types

use std::fmt;

use lastfm_history_config::ConfigError;
use thiserror::Error;

/// Last.fm API client errors
#[derive(Error, Debug)]
pub enum LastfmError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API key is missing or blank
    #[error("API key is required for Last.fm API access")]
    MissingApiKey,

    /// HTTP request failed before a response body was read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the shape the service guarantees
    #[error("Failed to decode Last.fm response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Last.fm API returned a classified error
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl LastfmError {
    /// Kind of the classified service error, if this is one
    pub fn service_kind(&self) -> Option<ErrorKind> {
        match self {
            LastfmError::Service(e) => Some(e.kind),
            _ => None,
        }
    }
}

/// Result type for Last.fm operations
pub type LastfmResult<T> = Result<T, LastfmError>;

/// Error reported by the Last.fm web service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Last.fm API error {code} ({kind}): {message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub code: i64,
    pub message: String,
}

impl ServiceError {
    /// Build a typed error from the numeric code and message of an error body.
    ///
    /// The service formats messages as `"<code> - <description>"`; the leading
    /// code is stripped for documented codes. Messages in any other form, and
    /// messages of unknown codes, are kept verbatim.
    pub fn classify(code: i64, message: &str) -> Self {
        let kind = ErrorKind::from_code(code);
        let message = match kind {
            ErrorKind::Unknown => message,
            _ => strip_code_prefix(code, message),
        };

        Self {
            kind,
            code,
            message: message.to_string(),
        }
    }
}

fn strip_code_prefix(code: i64, message: &str) -> &str {
    match message.split_once(" - ") {
        Some((prefix, rest)) if prefix.trim().parse::<i64>() == Ok(code) => rest,
        _ => message,
    }
}

macro_rules! error_kinds {
    ($($code:literal => $kind:ident),* $(,)?) => {
        /// Error codes documented by the Last.fm web service
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $($kind,)*
            /// Any code outside the documented table
            Unknown,
        }

        impl ErrorKind {
            /// Every documented kind, in code order
            pub const ALL: &'static [ErrorKind] = &[$(ErrorKind::$kind),*];

            pub fn from_code(code: i64) -> Self {
                match code {
                    $($code => ErrorKind::$kind,)*
                    _ => ErrorKind::Unknown,
                }
            }

            /// Documented code for this kind; `None` for [`ErrorKind::Unknown`]
            pub fn code(self) -> Option<i64> {
                match self {
                    $(ErrorKind::$kind => Some($code),)*
                    ErrorKind::Unknown => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ErrorKind::$kind => stringify!($kind),)*
                    ErrorKind::Unknown => "Unknown",
                }
            }
        }
    };
}

error_kinds! {
    1 => Error,
    2 => InvalidService,
    3 => InvalidMethod,
    4 => AuthenticationFailed,
    5 => InvalidFormat,
    6 => InvalidParameters,
    7 => InvalidResource,
    8 => OperationFailed,
    9 => InvalidSessionKey,
    10 => InvalidAPIKey,
    11 => ServiceOffline,
    12 => SubscribersOnly,
    13 => InvalidMethodSignature,
    14 => UnauthorizedToken,
    15 => ItemNotAvailable,
    16 => ServiceUnavailable,
    17 => Login,
    18 => TrialExpired,
    19 => NotExist,
    20 => NotEnoughContent,
    21 => NotEnoughMembers,
    22 => NotEnoughFans,
    23 => NotEnoughNeighbours,
    24 => NoPeakRadio,
    25 => RadioNotFound,
    26 => APIKeySuspended,
    27 => Deprecated,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_documented_code_maps_to_its_kind() {
        assert_eq!(ErrorKind::ALL.len(), 27);
        for (index, kind) in ErrorKind::ALL.iter().enumerate() {
            let code = index as i64 + 1;
            assert_eq!(ErrorKind::from_code(code), *kind);
            assert_eq!(kind.code(), Some(code));
        }
    }

    #[test]
    fn test_named_kinds() {
        assert_eq!(ErrorKind::from_code(1), ErrorKind::Error);
        assert_eq!(ErrorKind::from_code(6), ErrorKind::InvalidParameters);
        assert_eq!(ErrorKind::from_code(10), ErrorKind::InvalidAPIKey);
        assert_eq!(ErrorKind::from_code(17), ErrorKind::Login);
        assert_eq!(ErrorKind::from_code(26), ErrorKind::APIKeySuspended);
        assert_eq!(ErrorKind::from_code(27), ErrorKind::Deprecated);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [0, -1, 28, 29, 500] {
            assert_eq!(ErrorKind::from_code(code), ErrorKind::Unknown);
        }
        assert_eq!(ErrorKind::Unknown.code(), None);
    }

    #[test]
    fn test_classify_strips_code_prefix() {
        let error = ServiceError::classify(6, "6 - Invalid parameters");
        assert_eq!(error.kind, ErrorKind::InvalidParameters);
        assert_eq!(error.code, 6);
        assert_eq!(error.message, "Invalid parameters");
    }

    #[test]
    fn test_classify_keeps_message_without_separator() {
        let error = ServiceError::classify(6, "User not found");
        assert_eq!(error.message, "User not found");
    }

    #[test]
    fn test_classify_keeps_dash_that_is_not_a_code_prefix() {
        let error = ServiceError::classify(
            8,
            "Operation failed - Most likely the backend service failed",
        );
        assert_eq!(
            error.message,
            "Operation failed - Most likely the backend service failed"
        );
    }

    #[test]
    fn test_classify_unknown_code_preserves_everything() {
        let error = ServiceError::classify(99, "99 - Something new");
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.code, 99);
        assert_eq!(error.message, "99 - Something new");

        let error = ServiceError::classify(42, "mystery failure");
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.code, 42);
        assert_eq!(error.message, "mystery failure");
    }

    #[test]
    fn test_display() {
        let error = ServiceError::classify(10, "10 - Invalid API key");
        assert_eq!(
            error.to_string(),
            "Last.fm API error 10 (InvalidAPIKey): Invalid API key"
        );
        assert_eq!(
            LastfmError::from(error).service_kind(),
            Some(ErrorKind::InvalidAPIKey)
        );
    }

    #[test]
    fn test_service_kind_is_none_for_other_errors() {
        assert_eq!(LastfmError::MissingApiKey.service_kind(), None);
    }
}
