#![allow(missing_docs)]
#![cfg(unix)]
//! Descriptor Zero Integration Tests
//!
//! Runs as its own binary because it closes stdin, which is process
//! global. Keep this file to a single test; a second test in the same
//! process would race it for descriptor zero.
//!
//! Test Coverage:
//! - ZERO-001: A kernel-issued descriptor zero is rejected and reclaimed

#[macro_use]
mod common;

use afsock::{create_socket, ErrorKind, SocketHandle};
use common::*;

/// ZERO-001: A kernel-issued descriptor zero is rejected and reclaimed
///
/// With stdin closed the kernel hands the next socket the lowest free
/// slot, zero. Creation reports an OS error, leaves the handle unset,
/// and closes the descriptor instead of leaking it.
#[test]
fn zero_001_descriptor_zero_is_rejected_and_reclaimed() {
    init_test_logging();
    test_phase!("zero_001_descriptor_zero_is_rejected_and_reclaimed");

    // SAFETY: this binary holds a single test and never reads stdin.
    let rc = unsafe { libc::close(0) };
    if rc != 0 {
        let errno = std::io::Error::last_os_error().raw_os_error();
        assert_eq!(errno, Some(libc::EBADF), "closing stdin");
    }

    let handle = SocketHandle::new();
    let err = create_socket(&handle, 1).expect_err("descriptor zero is unbindable");
    assert_eq!(err.kind(), ErrorKind::Os);
    assert_with_log!(!handle.is_bound(), "handle stays unset", false, handle.is_bound());

    // Slot zero must be free again afterwards.
    // SAFETY: querying flags on a closed slot only reports EBADF.
    let flags = unsafe { libc::fcntl(0, libc::F_GETFD) };
    let errno = std::io::Error::last_os_error().raw_os_error();
    assert_with_log!(flags == -1, "rejected descriptor was closed", -1, flags);
    assert_eq!(errno, Some(libc::EBADF));

    test_complete!("zero_001_descriptor_zero_is_rejected_and_reclaimed");
}
