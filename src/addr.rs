#![allow(unsafe_code)]
//! UNIX-domain socket addresses.
//!
//! This module uses unsafe code to zero-initialize the OS address
//! structure.
//!
//! A [`UnixSocketAddress`] takes one of three forms: a filesystem
//! *pathname*, a Linux *abstract* name (bytes outside the filesystem,
//! marked on the wire by a leading NUL in the name field), or *unnamed*.
//! The codec into `sockaddr_un` is strict in the encode direction
//! (over-long names and interior NULs in pathnames are rejected, never
//! truncated) and total in the decode direction (any kernel-filled
//! structure classifies as exactly one of the three forms; trailing
//! padding after a pathname terminator is not part of the name).

use std::ffi::OsStr;
use std::fmt;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Capacity of the name field in `sockaddr_un` on this target.
const SUN_PATH_LEN: usize =
    std::mem::size_of::<libc::sockaddr_un>() - std::mem::offset_of!(libc::sockaddr_un, sun_path);

/// Offset of the name field inside `sockaddr_un`.
const SUN_PATH_OFFSET: usize = std::mem::offset_of!(libc::sockaddr_un, sun_path);

#[derive(Debug, Clone, PartialEq, Eq)]
enum AddrForm {
    Pathname(PathBuf),
    Abstract(Vec<u8>),
    Unnamed,
}

/// An address a UNIX-domain socket can be bound or connected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnixSocketAddress {
    form: AddrForm,
}

impl UnixSocketAddress {
    /// Longest raw name this target can encode, in bytes. For abstract
    /// names the leading NUL marker counts against this limit.
    pub const MAX_NAME_LEN: usize = SUN_PATH_LEN - 1;

    /// A pathname address.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for an empty path, a path longer than
    /// [`Self::MAX_NAME_LEN`], or a path with an interior NUL byte.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validate_pathname(path.as_os_str().as_bytes())?;
        Ok(Self {
            form: AddrForm::Pathname(path.to_path_buf()),
        })
    }

    /// An abstract-namespace address. The name is the bytes *after* the
    /// leading NUL marker; embedded NULs are legal.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] when the marker plus name exceed
    /// [`Self::MAX_NAME_LEN`].
    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub fn from_abstract_name(name: impl AsRef<[u8]>) -> Result<Self> {
        let name = name.as_ref();
        if 1 + name.len() > Self::MAX_NAME_LEN {
            return Err(Error::illegal("Socket address out of range"));
        }
        Ok(Self {
            form: AddrForm::Abstract(name.to_vec()),
        })
    }

    /// The address of an unbound socket.
    #[must_use]
    pub const fn unnamed() -> Self {
        Self {
            form: AddrForm::Unnamed,
        }
    }

    /// The pathname, if this is a pathname address.
    #[must_use]
    pub fn as_pathname(&self) -> Option<&Path> {
        match &self.form {
            AddrForm::Pathname(path) => Some(path),
            _ => None,
        }
    }

    /// The abstract name (without its leading NUL marker), if this is an
    /// abstract address.
    #[must_use]
    pub fn as_abstract_name(&self) -> Option<&[u8]> {
        match &self.form {
            AddrForm::Abstract(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true for the unnamed form.
    #[must_use]
    pub const fn is_unnamed(&self) -> bool {
        matches!(self.form, AddrForm::Unnamed)
    }

    /// Encodes into the OS address structure, returning it together with
    /// the length to pass to the kernel.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`]: the unnamed form has no encoding
    /// ("Socket address out of range"), abstract names only encode where
    /// the abstract namespace exists, and a decoded name at the very
    /// edge of the structure can exceed what this target re-encodes.
    pub fn to_sockaddr(&self) -> Result<(libc::sockaddr_un, libc::socklen_t)> {
        match &self.form {
            AddrForm::Unnamed => Err(Error::illegal("Socket address out of range")),
            AddrForm::Pathname(path) => {
                let raw = path.as_os_str().as_bytes();
                validate_pathname(raw)?;
                Ok(build_sockaddr(raw, false))
            }
            #[cfg(any(target_os = "linux", target_os = "android"))]
            AddrForm::Abstract(name) => {
                if 1 + name.len() > Self::MAX_NAME_LEN {
                    return Err(Error::illegal("Socket address out of range"));
                }
                Ok(build_sockaddr(name, true))
            }
            #[cfg(not(any(target_os = "linux", target_os = "android")))]
            AddrForm::Abstract(_) => Err(Error::illegal("Abstract namespace not supported")),
        }
    }

    /// Classifies a kernel-filled address structure.
    ///
    /// `len` is the total length the kernel reported. Anything that
    /// leaves no name bytes, or only zero bytes, is unnamed; a leading
    /// NUL marks an abstract name (embedded NULs preserved); anything
    /// else is a pathname cut at its first NUL terminator.
    #[must_use]
    pub fn from_sockaddr(addr: &libc::sockaddr_un, len: libc::socklen_t) -> Self {
        let name_len = (len as usize)
            .saturating_sub(SUN_PATH_OFFSET)
            .min(SUN_PATH_LEN);
        // Where the structure carries its own length, the kernel's idea
        // of it wins.
        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly",
        ))]
        let name_len = name_len.min((addr.sun_len as usize).saturating_sub(SUN_PATH_OFFSET));
        if name_len == 0 {
            return Self::unnamed();
        }
        let bytes: Vec<u8> = addr.sun_path[..name_len]
            .iter()
            .map(|&c| c as u8)
            .collect();
        if bytes[0] == 0 {
            if bytes.iter().all(|&b| b == 0) {
                return Self::unnamed();
            }
            return Self {
                form: AddrForm::Abstract(bytes[1..].to_vec()),
            };
        }
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self {
            form: AddrForm::Pathname(PathBuf::from(OsStr::from_bytes(&bytes[..end]))),
        }
    }
}

impl fmt::Display for UnixSocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            AddrForm::Pathname(path) => write!(f, "{}", path.display()),
            AddrForm::Abstract(name) => write!(f, "@{}", name.escape_ascii()),
            AddrForm::Unnamed => f.write_str("(unnamed)"),
        }
    }
}

fn validate_pathname(raw: &[u8]) -> Result<()> {
    if raw.is_empty() || raw.len() > UnixSocketAddress::MAX_NAME_LEN {
        return Err(Error::illegal("Socket address out of range"));
    }
    if raw.contains(&0) {
        return Err(Error::illegal("Socket address contains NUL byte"));
    }
    Ok(())
}

/// Fills a zeroed `sockaddr_un` with `raw`, leaving the leading NUL
/// marker in place for abstract names. Callers have validated the
/// combined length.
fn build_sockaddr(raw: &[u8], abstract_marker: bool) -> (libc::sockaddr_un, libc::socklen_t) {
    // SAFETY: an all-zero sockaddr_un is a valid value of the type.
    let mut addr: libc::sockaddr_un = unsafe { std::mem::zeroed() };
    addr.sun_family = libc::AF_UNIX as libc::sa_family_t;
    let skip = usize::from(abstract_marker);
    for (dst, src) in addr.sun_path.iter_mut().skip(skip).zip(raw) {
        *dst = *src as libc::c_char;
    }
    let total = SUN_PATH_OFFSET + skip + raw.len();
    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly",
    ))]
    {
        addr.sun_len = total as u8;
    }
    (addr, total as libc::socklen_t)
}
