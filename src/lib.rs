//! afsock: the native capability layer for UNIX-domain sockets.
//!
//! # Overview
//!
//! afsock answers two questions a portable socket stack has to settle
//! before it can do anything else: *what can this platform do*, and
//! *how does a raw descriptor get into a managed handle exactly once*.
//! Capability detection runs once per process and publishes a stable
//! bitmask; socket creation goes through bind-once handles that make the
//! check-and-populate step a single atomic transition.
//!
//! # Core Guarantees
//!
//! - **Stable capability bits**: every capability keeps its bit position forever; new ones only append
//! - **Dependent bits never orphan**: the UNIX-domain prerequisites are enforced after detection and after overrides
//! - **One detection per process**: all callers observe the identical mask, however they race
//! - **Bind-once handles**: a handle accepts one descriptor over its lifetime of use; losers of a bind race close their own descriptor
//! - **No silent truncation**: socket addresses that do not fit the OS structure are rejected, never cut
//!
//! # Module Structure
//!
//! - [`capability`]: Capability bits, one-time platform detection, support report
//! - [`addr`]: UNIX-domain socket addresses and their `sockaddr_un` codec
//! - [`cred`]: Peer credentials of connected sockets
//! - [`env_config`]: Environment-variable capability overrides
//! - [`error`]: Error types
//! - [`handle`]: Bind-once descriptor handles
//! - [`kind`]: Socket kinds and address families with their wire tags
//! - [`socket`]: Socket and socket-pair factories
//! - [`test_utils`]: Shared test logging and assertion helpers

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// The libc boundary casts between C integer widths throughout.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod addr;
pub mod capability;
pub mod cred;
pub mod env_config;
pub mod error;
pub mod handle;
pub mod kind;
pub mod socket;
pub mod test_utils;

// Re-exports for convenient access to core types
pub use addr::UnixSocketAddress;
pub use capability::{
    capabilities, has_capability, Capability, CapabilityReport, CapabilitySet,
};
pub use cred::{peer_credentials, UCred};
pub use env_config::ConfigError;
pub use error::{Error, ErrorKind, Result};
pub use handle::SocketHandle;
pub use kind::{AddressFamily, SocketKind};
pub use socket::{create_socket, create_socket_of_kind, create_socket_pair};
