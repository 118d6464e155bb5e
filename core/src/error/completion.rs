use std::fmt;

use thiserror::Error;

/// Coarse classification of a failed round trip to the completion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Unknown,
}

impl TransportErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum CompletionError {
    /// Upstream answered with a non-2xx status.
    #[error("completion API returned HTTP {status}: {body}")]
    UpstreamHttp { status: u16, body: String },

    /// The request never produced a response.
    #[error("completion API transport error kind={kind}: {message}")]
    UpstreamTransport {
        kind: TransportErrorKind,
        message: String,
    },

    /// 2xx response whose body is not JSON.
    #[error("failed to decode completion response: {0}")]
    Decode(String),
}

impl CompletionError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}
