use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::Client`] operations.
///
/// `Display` for [`Error::Status`] is the bare HTTP status line (e.g. `404 Not Found`).
/// Codes without a registered reason phrase display as the number alone (`599`).
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP round-trip itself failed (DNS, connect, timeout, TLS, body read).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("{}", status_line(.0))]
    Status(StatusCode),

    /// A `200 OK` body that does not match the expected JSON shape.
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing decoded output to a sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status for [`Error::Status`]; `None` for every other variant.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status(s) => Some(*s),
            _ => None,
        }
    }
}

/// `"<code> <reason>"`, or just `"<code>"` when the code has no registered reason.
fn status_line(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
