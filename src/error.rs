//! Error taxonomy for the socket capability and descriptor layer.
//!
//! Every fallible operation in this crate reports through [`Error`], a
//! closed set of three classes:
//!
//! - [`Error::IllegalArgument`]: the caller handed us a value outside the
//!   accepted domain (an unknown socket-kind tag, an out-of-range
//!   descriptor, an oversized address).
//! - [`Error::AlreadyInitialized`]: a single-assignment handle was already
//!   bound; the bound value is reported and left untouched.
//! - [`Error::Os`]: the operating system rejected a call. The raw `errno`
//!   travels on the variant as data; it is never left behind in
//!   thread-local state for the caller to re-read.
//!
//! Translation into [`Error::Os`] is total: any errno value produces a
//! well-formed error, unrecognized ones included.

use std::io;
use std::os::unix::io::RawFd;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by socket capability and descriptor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value was outside the accepted domain.
    #[error("{message}")]
    IllegalArgument {
        /// What was rejected.
        message: &'static str,
    },

    /// A bind-once descriptor handle was already bound.
    #[error("Already created")]
    AlreadyInitialized {
        /// The descriptor value the handle already holds.
        fd: RawFd,
    },

    /// The operating system rejected a call.
    #[error("{} (errno {errno})", os_message(.errno))]
    Os {
        /// Raw `errno` from the failed call.
        errno: i32,
        /// Descriptor implicated in the failure, when one was involved.
        fd: Option<RawFd>,
    },
}

/// Coarse classification of an [`Error`], for callers that dispatch on
/// class rather than contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid input from the caller.
    IllegalArgument,
    /// Single-assignment violation on a descriptor handle.
    AlreadyInitialized,
    /// Failure reported by the operating system.
    Os,
}

impl Error {
    /// Builds an [`Error::IllegalArgument`] with the given message.
    pub(crate) const fn illegal(message: &'static str) -> Self {
        Self::IllegalArgument { message }
    }

    /// Builds an [`Error::AlreadyInitialized`] recording the value the
    /// handle already holds.
    pub(crate) const fn already_initialized(fd: RawFd) -> Self {
        Self::AlreadyInitialized { fd }
    }

    /// Builds an [`Error::Os`] from a raw errno, attaching the descriptor
    /// the failure concerns.
    pub(crate) const fn os_with_fd(errno: i32, fd: RawFd) -> Self {
        Self::Os {
            errno,
            fd: Some(fd),
        }
    }

    /// Captures the calling thread's current OS error.
    pub(crate) fn last_os_error() -> Self {
        Self::from(io::Error::last_os_error())
    }

    /// Captures the calling thread's current OS error, attaching the
    /// descriptor the failed call concerned.
    pub(crate) fn last_os_error_for(fd: RawFd) -> Self {
        let errno = io::Error::last_os_error()
            .raw_os_error()
            .unwrap_or(libc::EIO);
        Self::os_with_fd(errno, fd)
    }

    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalArgument { .. } => ErrorKind::IllegalArgument,
            Self::AlreadyInitialized { .. } => ErrorKind::AlreadyInitialized,
            Self::Os { .. } => ErrorKind::Os,
        }
    }

    /// Returns the raw errno for OS failures, `None` for the other
    /// classes.
    #[must_use]
    pub const fn errno(&self) -> Option<i32> {
        match self {
            Self::Os { errno, .. } => Some(*errno),
            _ => None,
        }
    }

    /// Returns the descriptor attached to this error, if any.
    #[must_use]
    pub const fn fd(&self) -> Option<RawFd> {
        match self {
            Self::AlreadyInitialized { fd } => Some(*fd),
            Self::Os { fd, .. } => *fd,
            Self::IllegalArgument { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    /// Any I/O error maps onto [`Error::Os`]. Errors without a raw OS
    /// code (synthesized ones) fall back to `EIO` so the mapping stays
    /// total.
    fn from(err: io::Error) -> Self {
        Self::Os {
            errno: err.raw_os_error().unwrap_or(libc::EIO),
            fd: None,
        }
    }
}

/// Human-readable description for a raw errno, via the OS's own message
/// table.
fn os_message(errno: &i32) -> String {
    io::Error::from_raw_os_error(*errno).to_string()
}
