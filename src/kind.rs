//! Mappings between portable socket tags and OS-native constants.
//!
//! The socket layer exchanges small integer tags with its callers instead
//! of OS constants, because the native numbering differs between kernels
//! (`SOCK_SEQPACKET` is not the same value everywhere, and `AF_TIPC` does
//! not exist everywhere). [`SocketKind`] and [`AddressFamily`] are the
//! closed sets of accepted tags; both directions of each mapping reject
//! unknown values instead of coercing them.

use libc::c_int;
use socket2::{Domain, Type};

use crate::error::{Error, Result};

/// Communication styles a socket can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocketKind {
    /// Connection-oriented byte stream (`SOCK_STREAM`).
    Stream,
    /// Connectionless datagrams (`SOCK_DGRAM`).
    Datagram,
    /// Connection-oriented, record-preserving (`SOCK_SEQPACKET`).
    SeqPacket,
}

impl SocketKind {
    /// All kinds, in tag order.
    pub const ALL: [SocketKind; 3] = [Self::Stream, Self::Datagram, Self::SeqPacket];

    /// Stable portable tag for this kind.
    #[must_use]
    pub const fn tag(self) -> i32 {
        match self {
            Self::Stream => 1,
            Self::Datagram => 2,
            Self::SeqPacket => 3,
        }
    }

    /// Maps a portable tag back to a kind.
    ///
    /// # Errors
    ///
    /// Anything outside the three defined tags is rejected with
    /// [`Error::IllegalArgument`] ("Illegal type").
    pub const fn from_tag(tag: i32) -> Result<Self> {
        match tag {
            1 => Ok(Self::Stream),
            2 => Ok(Self::Datagram),
            3 => Ok(Self::SeqPacket),
            _ => Err(Error::illegal("Illegal type")),
        }
    }

    /// The OS-native constant for this kind on the current target.
    #[must_use]
    pub const fn to_native(self) -> c_int {
        match self {
            Self::Stream => libc::SOCK_STREAM,
            Self::Datagram => libc::SOCK_DGRAM,
            Self::SeqPacket => libc::SOCK_SEQPACKET,
        }
    }

    /// Maps an OS-native constant back to a kind.
    ///
    /// # Errors
    ///
    /// Native values that are not one of the three supported kinds are
    /// rejected with [`Error::IllegalArgument`] ("Illegal type"); raw
    /// sockets and friends do not pass through here silently.
    pub const fn from_native(raw: c_int) -> Result<Self> {
        match raw {
            libc::SOCK_STREAM => Ok(Self::Stream),
            libc::SOCK_DGRAM => Ok(Self::Datagram),
            libc::SOCK_SEQPACKET => Ok(Self::SeqPacket),
            _ => Err(Error::illegal("Illegal type")),
        }
    }
}

impl From<SocketKind> for Type {
    fn from(kind: SocketKind) -> Self {
        Type::from(kind.to_native())
    }
}

/// Address families sockets can be created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// UNIX-domain (`AF_UNIX`).
    Unix,
    /// Linux TIPC cluster sockets (`AF_TIPC`).
    Tipc,
}

impl AddressFamily {
    /// Stable portable tag for this family.
    #[must_use]
    pub const fn tag(self) -> i32 {
        match self {
            Self::Unix => 1,
            Self::Tipc => 30,
        }
    }

    /// Maps a portable tag back to a family.
    ///
    /// # Errors
    ///
    /// Unknown tags are rejected with [`Error::IllegalArgument`]
    /// ("Unsupported domain").
    pub const fn from_tag(tag: i32) -> Result<Self> {
        match tag {
            1 => Ok(Self::Unix),
            30 => Ok(Self::Tipc),
            _ => Err(Error::illegal("Unsupported domain")),
        }
    }

    /// The OS-native domain constant for this family on the current
    /// target.
    ///
    /// # Errors
    ///
    /// Families the target was not compiled with (TIPC outside
    /// Linux/Android) are rejected with [`Error::IllegalArgument`]
    /// ("Unsupported domain").
    pub const fn to_native(self) -> Result<c_int> {
        match self {
            Self::Unix => Ok(libc::AF_UNIX),
            #[cfg(any(target_os = "linux", target_os = "android"))]
            Self::Tipc => Ok(libc::AF_TIPC),
            #[cfg(not(any(target_os = "linux", target_os = "android")))]
            Self::Tipc => Err(Error::illegal("Unsupported domain")),
        }
    }
}

impl TryFrom<AddressFamily> for Domain {
    type Error = Error;

    fn try_from(family: AddressFamily) -> Result<Self> {
        Ok(Domain::from(family.to_native()?))
    }
}
