//! Pipeline error taxonomy.
//!
//! Every failure is terminal for the run; each variant maps to a distinct
//! process exit code so callers can tell transport trouble apart from a
//! server-reported error or a bad document.

use std::fmt;

/// Errors from the fetch-parse-render pipeline.
#[derive(Debug)]
pub enum Error {
    /// HTTP transport failure, timeout, or non-2xx status
    Fetch { url: String, message: String },

    /// Undecodable XML or a structurally incomplete schedule document
    Document(String),

    /// The feed answered with its embedded error block instead of a schedule
    ServerReported { text: String, details: String },

    /// A minutes value that is neither "Leaving" nor a base-10 integer
    MalformedMinutes { destination: String, raw: String },
}

impl Error {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Fetch { .. } => 2,
            Error::ServerReported { .. } => 3,
            Error::Document(_) => 4,
            Error::MalformedMinutes { .. } => 5,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch { url, message } => write!(
                f,
                "cannot access the URL '{url}': {message}. The BART API site could be unavailable, try again later"
            ),
            Error::Document(message) => write!(f, "unusable schedule document: {message}"),
            Error::ServerReported { text, details } => write!(
                f,
                "error from the server: '{text}'. Error details: '{details}'. Validate your API call and try again"
            ),
            Error::MalformedMinutes { destination, raw } => write!(
                f,
                "unrecognized minutes value '{raw}' for destination '{destination}'"
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_display_names_url() {
        let err = Error::Fetch {
            url: "http://api.bart.gov/api/etd.aspx?cmd=etd&orig=MONT".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://api.bart.gov/api/etd.aspx?cmd=etd&orig=MONT"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn server_reported_display_carries_both_fields() {
        let err = Error::ServerReported {
            text: "Invalid key".into(),
            details: "Rejected".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid key"));
        assert!(msg.contains("Rejected"));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            Error::Fetch {
                url: String::new(),
                message: String::new(),
            }
            .exit_code(),
            Error::ServerReported {
                text: String::new(),
                details: String::new(),
            }
            .exit_code(),
            Error::Document(String::new()).exit_code(),
            Error::MalformedMinutes {
                destination: String::new(),
                raw: String::new(),
            }
            .exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
