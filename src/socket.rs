#![allow(unsafe_code)]
//! Socket creation.
//!
//! This module uses unsafe code for the `socket(2)`, `socketpair(2)`,
//! `fcntl(2)` and `close(2)` calls.
//!
//! Both entry points bind freshly created descriptors into
//! [`SocketHandle`]s under the handle's single-assignment contract:
//! afterwards the handle is either bound to a positive descriptor or an
//! error came back and the handle is exactly as it was. A creation that
//! loses a concurrent bind race closes its own descriptor before
//! reporting, so nothing leaks.

use std::io;
use std::os::unix::io::RawFd;

use libc::c_int;

use crate::error::{Error, Result};
use crate::handle::SocketHandle;
use crate::kind::{AddressFamily, SocketKind};

/// Creates a UNIX-domain socket of the kind named by `tag` and binds it
/// into `handle`.
///
/// # Errors
///
/// [`Error::AlreadyInitialized`] if the handle is already bound (its
/// value is untouched); [`Error::IllegalArgument`] ("Illegal type") for
/// an unknown tag; [`Error::Os`] when the kernel refuses the socket. In
/// the latter two cases the handle stays unset.
pub fn create_socket(handle: &SocketHandle, tag: i32) -> Result<()> {
    let bound = handle.raw();
    if bound > 0 {
        return Err(Error::already_initialized(bound));
    }
    let kind = SocketKind::from_tag(tag)?;
    create_socket_of_kind(handle, kind)
}

/// Typed form of [`create_socket`], for callers that already hold a
/// [`SocketKind`].
///
/// # Errors
///
/// As [`create_socket`], minus the tag mapping.
pub fn create_socket_of_kind(handle: &SocketHandle, kind: SocketKind) -> Result<()> {
    let bound = handle.raw();
    if bound > 0 {
        return Err(Error::already_initialized(bound));
    }
    // SAFETY: plain syscall with constant arguments.
    let fd = unsafe { libc::socket(libc::PF_UNIX, kind.to_native(), 0) };
    if fd <= 0 {
        let err = Error::last_os_error();
        if fd == 0 {
            // Zero comes back only when stdin is closed. It is rejected
            // as unbindable here, but it is a live descriptor; reclaim
            // it.
            close_quietly(fd);
        }
        return Err(err);
    }
    bind_or_discard(handle, fd)?;
    tracing::debug!(fd, kind = ?kind, "socket created");
    Ok(())
}

/// Creates a connected descriptor pair and binds one end into each
/// handle.
///
/// The pair is requested with close-on-exec set atomically; kernels that
/// reject the flagged request with `EPROTONOSUPPORT` get a plain request
/// followed by best-effort `FD_CLOEXEC` fixup.
///
/// Both handles must be distinct and unset. On any failure neither
/// handle holds a descriptor afterwards (a half-bound pair is rolled
/// back), and passing the same handle twice fails with
/// [`Error::AlreadyInitialized`] leaving it unset.
///
/// # Errors
///
/// [`Error::AlreadyInitialized`] if either handle is bound;
/// [`Error::IllegalArgument`] for an unknown family ("Unsupported
/// domain") or kind ("Illegal type") tag; [`Error::Os`] when the kernel
/// refuses the pair.
pub fn create_socket_pair(
    first: &SocketHandle,
    second: &SocketHandle,
    family_tag: i32,
    kind_tag: i32,
) -> Result<()> {
    let bound = first.raw();
    if bound > 0 {
        return Err(Error::already_initialized(bound));
    }
    let bound = second.raw();
    if bound > 0 {
        return Err(Error::already_initialized(bound));
    }
    let family = AddressFamily::from_tag(family_tag)?;
    let domain = family.to_native()?;
    let kind = SocketKind::from_tag(kind_tag)?;

    let [a, b] = native_socket_pair(domain, kind.to_native())?;
    if let Err(err) = first.try_bind(a) {
        close_quietly(a);
        close_quietly(b);
        return Err(err);
    }
    if let Err(err) = second.try_bind(b) {
        // Never leave a half-bound pair behind.
        if let Some(fd) = first.take() {
            close_quietly(fd);
        }
        close_quietly(b);
        return Err(err);
    }
    tracing::debug!(first = a, second = b, kind = ?kind, "socket pair created");
    Ok(())
}

/// Binds `fd` into `handle`; a lost race closes `fd` before reporting.
fn bind_or_discard(handle: &SocketHandle, fd: RawFd) -> Result<()> {
    match handle.try_bind(fd) {
        Ok(()) => Ok(()),
        Err(err) => {
            close_quietly(fd);
            Err(err)
        }
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
    target_os = "illumos",
    target_os = "solaris",
))]
fn native_socket_pair(domain: c_int, ty: c_int) -> Result<[RawFd; 2]> {
    let mut sv: [RawFd; 2] = [-1; 2];
    // SAFETY: sv is a valid out-buffer for two descriptors.
    let rc = unsafe { libc::socketpair(domain, ty | libc::SOCK_CLOEXEC, 0, sv.as_mut_ptr()) };
    if rc == 0 {
        return Ok(sv);
    }
    let err = io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::EPROTONOSUPPORT) {
        return native_socket_pair_plain(domain, ty);
    }
    Err(Error::from(err))
}

/// Targets without `SOCK_CLOEXEC` go straight to the plain call.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
    target_os = "illumos",
    target_os = "solaris",
)))]
fn native_socket_pair(domain: c_int, ty: c_int) -> Result<[RawFd; 2]> {
    native_socket_pair_plain(domain, ty)
}

fn native_socket_pair_plain(domain: c_int, ty: c_int) -> Result<[RawFd; 2]> {
    let mut sv: [RawFd; 2] = [-1; 2];
    // SAFETY: sv is a valid out-buffer for two descriptors.
    let rc = unsafe { libc::socketpair(domain, ty, 0, sv.as_mut_ptr()) };
    if rc != 0 {
        return Err(Error::last_os_error());
    }
    for fd in sv {
        // Best effort; a working pair that stays inheritable is still a
        // working pair.
        // SAFETY: fd was just created and is owned here.
        let _ = unsafe { libc::fcntl(fd, libc::F_SETFD, libc::FD_CLOEXEC) };
    }
    Ok(sv)
}

fn close_quietly(fd: RawFd) {
    // SAFETY: every caller passes a descriptor this module just created
    // and still owns.
    let _ = unsafe { libc::close(fd) };
}
