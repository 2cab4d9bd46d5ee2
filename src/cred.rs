#![allow(unsafe_code)]
//! Peer credentials of connected UNIX-domain sockets.
//!
//! This module uses unsafe code for the credential queries
//! (`getsockopt(2)` with `SO_PEERCRED`, `getpeereid(3)`).
//!
//! Which query runs is a target decision. Linux and Android expose the
//! peer's pid, uid and gid through `SO_PEERCRED`; the BSD family and
//! macOS expose the effective uid and gid through `getpeereid`, with no
//! pid. [`UCred::pid`] is therefore optional and `None` never means
//! "pid zero".

use std::os::unix::io::RawFd;

use crate::error::{Error, Result};
use crate::handle::SocketHandle;

/// Credentials of the process at the other end of a connected socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UCred {
    /// Effective user id of the peer.
    pub uid: u32,
    /// Effective group id of the peer.
    pub gid: u32,
    /// Process id of the peer, where the OS reports one.
    pub pid: Option<i32>,
}

/// Mirror of the kernel's `struct ucred`, filled by `SO_PEERCRED`.
#[cfg(any(target_os = "linux", target_os = "android"))]
#[repr(C)]
struct LinuxUcred {
    pid: i32,
    uid: u32,
    gid: u32,
}

/// Queries the credentials of the peer connected to `handle`.
///
/// # Errors
///
/// [`Error::IllegalArgument`] ("Socket closed") when the handle is
/// unset, and [`Error::Os`] when the OS query fails, for instance with
/// `ENOTSOCK` for a descriptor that is not a socket or `ENOTCONN` for
/// one that is not connected.
pub fn peer_credentials(handle: &SocketHandle) -> Result<UCred> {
    let fd = handle.raw();
    if fd <= 0 {
        return Err(Error::illegal("Socket closed"));
    }
    let cred = query(fd)?;
    tracing::trace!(fd, uid = cred.uid, gid = cred.gid, pid = ?cred.pid, "peer credentials");
    Ok(cred)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn query(fd: RawFd) -> Result<UCred> {
    let mut cred = LinuxUcred {
        pid: 0,
        uid: 0,
        gid: 0,
    };
    let mut len = std::mem::size_of::<LinuxUcred>() as libc::socklen_t;
    // SAFETY: `cred` and `len` outlive the call and `len` describes the
    // buffer exactly.
    let rc = unsafe {
        libc::getsockopt(
            fd,
            libc::SOL_SOCKET,
            libc::SO_PEERCRED,
            (&raw mut cred).cast::<libc::c_void>(),
            &raw mut len,
        )
    };
    if rc == -1 {
        return Err(Error::last_os_error_for(fd));
    }
    Ok(UCred {
        uid: cred.uid,
        gid: cred.gid,
        pid: Some(cred.pid),
    })
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
))]
fn query(fd: RawFd) -> Result<UCred> {
    let mut uid: libc::uid_t = 0;
    let mut gid: libc::gid_t = 0;
    // SAFETY: both out-pointers refer to locals that outlive the call.
    let rc = unsafe { libc::getpeereid(fd, &raw mut uid, &raw mut gid) };
    if rc == -1 {
        return Err(Error::last_os_error_for(fd));
    }
    Ok(UCred {
        uid,
        gid,
        pid: None,
    })
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
)))]
fn query(_fd: RawFd) -> Result<UCred> {
    Err(Error::illegal("Peer credentials not supported"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::socket::create_socket_pair;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn unset_handle_is_rejected() {
        init_test("unset_handle_is_rejected");
        let handle = SocketHandle::new();
        let err = peer_credentials(&handle).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        assert_eq!(err.to_string(), "Socket closed");
        crate::test_complete!("unset_handle_is_rejected");
    }

    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly",
    ))]
    #[test]
    fn socket_pair_reports_own_credentials() {
        init_test("socket_pair_reports_own_credentials");
        let first = SocketHandle::new();
        let second = SocketHandle::new();
        create_socket_pair(&first, &second, 1, 1).unwrap();

        let cred = peer_credentials(&first).unwrap();
        // SAFETY: getuid/getgid cannot fail.
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };
        crate::assert_with_log!(cred.uid == uid, "peer uid is our own", uid, cred.uid);
        crate::assert_with_log!(cred.gid == gid, "peer gid is our own", gid, cred.gid);
        #[cfg(any(target_os = "linux", target_os = "android"))]
        assert_eq!(cred.pid, Some(std::process::id() as i32));
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        assert_eq!(cred.pid, None);

        first.release().unwrap();
        second.release().unwrap();
        crate::test_complete!("socket_pair_reports_own_credentials");
    }

    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly",
    ))]
    #[test]
    fn non_socket_descriptor_reports_os_error() {
        init_test("non_socket_descriptor_reports_os_error");
        use std::os::unix::io::IntoRawFd;

        let fd = std::fs::File::open("/dev/null").unwrap().into_raw_fd();
        let handle = SocketHandle::new();
        handle.adopt(fd).unwrap();

        let err = peer_credentials(&handle).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Os);
        crate::assert_with_log!(
            err.errno() == Some(libc::ENOTSOCK),
            "a plain file is not a socket",
            libc::ENOTSOCK,
            err.errno()
        );
        assert_eq!(err.fd(), Some(fd));

        handle.release().unwrap();
        crate::test_complete!("non_socket_descriptor_reports_os_error");
    }
}
