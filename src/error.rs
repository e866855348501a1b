use thiserror::Error;

use std::io::{Error as IOError, ErrorKind};
use std::num::TryFromIntError;
use std::string::FromUtf8Error;

/// Every failure mode the codec and the generic node/property API can surface.
///
/// Decoder and encoder failures are fatal to the operation in progress: callers
/// never receive a partially built [`crate::Document`]. Façade getters may
/// surface `PropertyMissing`, `PropertyKindMismatch`, `EmptyArray` or
/// `IndexOutOfRange`; callers that want tolerant access should reach for the
/// `_or` variants instead, which never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bad magic: expected {expected:#010x}, got {got:#010x}")]
    BadMagic { expected: u32, got: u32 },

    #[error("unsupported cast version {version} (only version 1 is supported)")]
    UnsupportedVersion { version: u32 },

    #[error("unexpected end of stream")]
    UnexpectedEof,

    #[error("{source}")]
    Io {
        #[from]
        source: IOError,
    },

    #[error("unknown property identifier {0:#06x}")]
    UnknownPropertyKind(u16),

    #[error("node size mismatch: header declared {declared} byte(s), {consumed} were consumed")]
    SizeMismatch { declared: u32, consumed: u64 },

    #[error("property '{0}' is missing")]
    PropertyMissing(String),

    #[error("property '{key}' has kind {actual}, expected {expected}")]
    PropertyKindMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("property '{0}' is an empty array")]
    EmptyArray(String),

    #[error("index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("type mismatch: expected node identifier {expected:#010x}, got {actual:#010x}")]
    TypeMismatch { expected: u32, actual: u32 },

    #[error("{source}")]
    TryFromInt {
        #[from]
        source: TryFromIntError,
    },

    #[error("{source}")]
    Utf8 {
        #[from]
        source: FromUtf8Error,
    },
}

impl Error {
    /// Maps a raw [`IOError`] the way the decoder wants it: a truncated
    /// stream becomes [`Error::UnexpectedEof`] rather than a generic I/O
    /// error, everything else passes through as [`Error::Io`].
    pub(crate) fn from_read(source: IOError) -> Self {
        match source.kind() {
            ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io { source },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
