#![allow(unsafe_code)]
//! Bind-once descriptor handles.
//!
//! This module uses unsafe code for the `close(2)` call in
//! [`SocketHandle::release`].
//!
//! A [`SocketHandle`] is a shared slot that holds at most one OS
//! descriptor over its lifetime of use. It starts *unset* (raw value
//! `<= 0`) and moves to *bound* (raw value `> 0`) exactly once; the bound
//! value is never overwritten. The check-and-bind step is a single atomic
//! transition, so two threads racing to populate the same handle cannot
//! both succeed.
//!
//! The handle does not close anything on drop. Descriptor teardown goes
//! through [`SocketHandle::release`], the one sanctioned bound-to-unset
//! edge; after a release the slot accepts a fresh bind again.

use std::os::unix::io::RawFd;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::error::{Error, Result};

/// Value stored while no descriptor is bound.
const UNSET: RawFd = -1;

/// A shared slot holding at most one OS descriptor.
#[derive(Debug)]
pub struct SocketHandle {
    fd: AtomicI32,
}

impl SocketHandle {
    /// Creates an unset handle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fd: AtomicI32::new(UNSET),
        }
    }

    /// Current raw value. Anything `<= 0` means the handle is unset.
    #[must_use]
    pub fn raw(&self) -> RawFd {
        self.fd.load(Ordering::Acquire)
    }

    /// Returns true once a descriptor has been bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.raw() > 0
    }

    /// Binds an externally-created descriptor into this handle.
    ///
    /// The same single-assignment contract as socket creation applies:
    /// the handle must be unset, and the bind is atomic with respect to
    /// concurrent binds.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] if `fd <= 0`;
    /// [`Error::AlreadyInitialized`] if the handle is already bound.
    pub fn adopt(&self, fd: RawFd) -> Result<()> {
        if fd <= 0 {
            return Err(Error::illegal("Illegal descriptor"));
        }
        self.try_bind(fd)
    }

    /// Atomically moves the handle from unset to `fd`.
    ///
    /// Loses the race cleanly: if another thread bound first, the winner's
    /// value is reported in the error and the slot is untouched.
    pub(crate) fn try_bind(&self, fd: RawFd) -> Result<()> {
        let mut current = self.fd.load(Ordering::Acquire);
        loop {
            if current > 0 {
                return Err(Error::already_initialized(current));
            }
            match self
                .fd
                .compare_exchange(current, fd, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    tracing::trace!(fd, "descriptor bound");
                    return Ok(());
                }
                Err(observed) => current = observed,
            }
        }
    }

    /// Atomically takes the bound value out, leaving the handle unset.
    /// Returns `None` if nothing was bound.
    pub(crate) fn take(&self) -> Option<RawFd> {
        let prev = self.fd.swap(UNSET, Ordering::AcqRel);
        (prev > 0).then_some(prev)
    }

    /// Closes the bound descriptor and resets the handle to unset.
    ///
    /// Releasing an unset handle is a no-op. Exactly one caller observes
    /// the bound value even under concurrent releases.
    ///
    /// # Errors
    ///
    /// [`Error::Os`] if `close(2)` fails; the handle is unset either way
    /// (the descriptor is gone from this slot once taken).
    pub fn release(&self) -> Result<()> {
        let Some(fd) = self.take() else {
            return Ok(());
        };
        tracing::trace!(fd, "descriptor released");
        // SAFETY: `fd` was the value this handle held and has just been
        // atomically removed from the slot, so no other path through this
        // handle can close it again.
        let rc = unsafe { libc::close(fd) };
        if rc == -1 {
            return Err(Error::last_os_error_for(fd));
        }
        Ok(())
    }
}

impl Default for SocketHandle {
    fn default() -> Self {
        Self::new()
    }
}
