//! The outcome of a native reader call.

use std::fmt;

use crate::error::FeatherError;

/// POSIX `EINVAL`, reported by the flat entry point for malformed records.
pub const EINVAL: i16 = 22;

/// Code carried by every failure that has no operating-system errno.
pub const GENERIC_FAILURE: i16 = -1;

/// Status kinds, following the Feather status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Ok,
    OutOfMemory,
    KeyError,
    Invalid,
    IoError,
    NotImplemented,
}

/// Success flag, diagnostic text and platform error code of a native call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    kind: StatusKind,
    message: String,
    posix_code: i16,
}

impl Status {
    pub fn new_ok() -> Self {
        Self {
            kind: StatusKind::Ok,
            message: String::new(),
            posix_code: 0,
        }
    }

    pub fn ok(&self) -> bool {
        self.kind == StatusKind::Ok
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// 0 on success; the errno for I/O failures; `GENERIC_FAILURE` otherwise.
    /// Never 0 for a failed status.
    pub fn posix_code(&self) -> i16 {
        self.posix_code
    }

    /// Builds a failed status with an explicit code. A zero code is replaced by
    /// `GENERIC_FAILURE` so failure can never read as success.
    pub fn failure(kind: StatusKind, message: impl Into<String>, posix_code: i16) -> Self {
        debug_assert!(kind != StatusKind::Ok);
        Self {
            kind,
            message: message.into(),
            posix_code: if posix_code == 0 {
                GENERIC_FAILURE
            } else {
                posix_code
            },
        }
    }
}

impl From<&FeatherError> for Status {
    fn from(err: &FeatherError) -> Self {
        let kind = match err {
            FeatherError::Io(e) if e.kind() == std::io::ErrorKind::OutOfMemory => {
                StatusKind::OutOfMemory
            }
            FeatherError::Io(_) => StatusKind::IoError,
            FeatherError::Arrow(arrow::error::ArrowError::IoError(_, _)) => StatusKind::IoError,
            FeatherError::Arrow(arrow::error::ArrowError::NotYetImplemented(_)) => {
                StatusKind::NotImplemented
            }
            FeatherError::ColumnIndex { .. } => StatusKind::KeyError,
            _ => StatusKind::Invalid,
        };
        let posix_code = match err {
            FeatherError::Io(e) => errno_of(e),
            FeatherError::Arrow(arrow::error::ArrowError::IoError(_, e)) => errno_of(e),
            _ => GENERIC_FAILURE,
        };
        Status::failure(kind, err.to_string(), posix_code)
    }
}

impl From<FeatherError> for Status {
    fn from(err: FeatherError) -> Self {
        Status::from(&err)
    }
}

fn errno_of(err: &std::io::Error) -> i16 {
    err.raw_os_error()
        .and_then(|code| i16::try_from(code).ok())
        .unwrap_or(GENERIC_FAILURE)
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            write!(f, "OK")
        } else {
            write!(f, "{}", self.message)
        }
    }
}
