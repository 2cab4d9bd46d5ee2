#![allow(unsafe_code)]
//! Platform capability detection for the socket layer.
//!
//! This module uses unsafe code for the abstract-namespace autobind probe
//! (`bind(2)` through libc).
//!
//! A [`CapabilitySet`] describes which optional socket-layer features the
//! running platform actually supports. The set is computed at most once
//! per process, on first query, and every later query returns the same
//! bits. A bit is set only when support is compiled in for this target
//! *and* a runtime probe (where one is meaningful) confirmed the feature
//! against the running kernel. Probe sockets are closed before the set is
//! published; queries themselves never touch the OS.
//!
//! # Bit layout
//!
//! Bit positions are stable and append-only; persisted masks stay
//! comparable across releases:
//!
//! | bit    | capability              |
//! |--------|-------------------------|
//! | `1<<0` | `PeerCredentials`       |
//! | `1<<1` | `AncillaryMessages`     |
//! | `1<<2` | `FileDescriptorPassing` |
//! | `1<<3` | `AbstractNamespace`     |
//! | `1<<4` | `UnixDatagrams`         |
//! | `1<<5` | `NativeSocketPair`      |
//! | `1<<6` | `FdAsRedirect`          |
//! | `1<<7` | `Tipc`                  |
//! | `1<<8` | `UnixDomain`            |
//!
//! The six capabilities that only make sense on top of working
//! UNIX-domain sockets (`PeerCredentials` through `NativeSocketPair`)
//! are never reported without `UnixDomain`. `FdAsRedirect` and `Tipc`
//! stand on their own.
//!
//! Each capability can be force-disabled through its
//! `AFSOCK_DISABLE_*` environment variable; see [`crate::env_config`].

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use socket2::{Domain, Socket, Type};

use crate::env_config;

/// Optional socket-layer features a platform may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The identity (uid/gid, pid where the OS offers it) of the peer
    /// process can be retrieved from a connected socket.
    PeerCredentials,
    /// Control messages can travel alongside socket payloads.
    AncillaryMessages,
    /// Open descriptors can be passed to another process over a socket.
    FileDescriptorPassing,
    /// The Linux abstract socket namespace (names outside the
    /// filesystem) is available.
    AbstractNamespace,
    /// UNIX-domain datagram sockets work.
    UnixDatagrams,
    /// The kernel can produce a connected socket pair in one call.
    NativeSocketPair,
    /// A raw descriptor can stand in as a generic byte-stream redirect
    /// target (stdin/stdout style).
    FdAsRedirect,
    /// TIPC cluster sockets are available.
    Tipc,
    /// UNIX-domain sockets work at all.
    UnixDomain,
}

impl Capability {
    /// All capabilities, in bit order.
    pub const ALL: [Capability; 9] = [
        Self::PeerCredentials,
        Self::AncillaryMessages,
        Self::FileDescriptorPassing,
        Self::AbstractNamespace,
        Self::UnixDatagrams,
        Self::NativeSocketPair,
        Self::FdAsRedirect,
        Self::Tipc,
        Self::UnixDomain,
    ];

    /// The stable mask bit for this capability.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::PeerCredentials => 1 << 0,
            Self::AncillaryMessages => 1 << 1,
            Self::FileDescriptorPassing => 1 << 2,
            Self::AbstractNamespace => 1 << 3,
            Self::UnixDatagrams => 1 << 4,
            Self::NativeSocketPair => 1 << 5,
            Self::FdAsRedirect => 1 << 6,
            Self::Tipc => 1 << 7,
            Self::UnixDomain => 1 << 8,
        }
    }

    /// Canonical name, as used in reports and log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeerCredentials => "PeerCredentials",
            Self::AncillaryMessages => "AncillaryMessages",
            Self::FileDescriptorPassing => "FileDescriptorPassing",
            Self::AbstractNamespace => "AbstractNamespace",
            Self::UnixDatagrams => "UnixDatagrams",
            Self::NativeSocketPair => "NativeSocketPair",
            Self::FdAsRedirect => "FdAsRedirect",
            Self::Tipc => "Tipc",
            Self::UnixDomain => "UnixDomain",
        }
    }

    /// The environment variable that force-disables this capability.
    #[must_use]
    pub const fn disable_env_var(self) -> &'static str {
        match self {
            Self::PeerCredentials => env_config::ENV_DISABLE_PEER_CREDENTIALS,
            Self::AncillaryMessages => env_config::ENV_DISABLE_ANCILLARY_MESSAGES,
            Self::FileDescriptorPassing => env_config::ENV_DISABLE_FILE_DESCRIPTOR_PASSING,
            Self::AbstractNamespace => env_config::ENV_DISABLE_ABSTRACT_NAMESPACE,
            Self::UnixDatagrams => env_config::ENV_DISABLE_UNIX_DATAGRAMS,
            Self::NativeSocketPair => env_config::ENV_DISABLE_NATIVE_SOCKET_PAIR,
            Self::FdAsRedirect => env_config::ENV_DISABLE_FD_AS_REDIRECT,
            Self::Tipc => env_config::ENV_DISABLE_TIPC,
            Self::UnixDomain => env_config::ENV_DISABLE_UNIX_DOMAIN,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Platforms whose peer-credential socket option is advertised by the
/// build environment but known not to answer at runtime. OS/400's PASE
/// environment identifies itself as AIX while its `SO_PEERID` never
/// returns credentials, so the whole family is carved out here. Checked
/// against [`std::env::consts::OS`] during detection.
pub const PEER_CREDENTIALS_DENYLIST: &[&str] = &["aix"];

/// An immutable set of [`Capability`] bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(u32);

impl CapabilitySet {
    /// The empty set.
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    /// Every bit this build knows about.
    pub const KNOWN: CapabilitySet = CapabilitySet(
        Capability::PeerCredentials.bit()
            | Capability::AncillaryMessages.bit()
            | Capability::FileDescriptorPassing.bit()
            | Capability::AbstractNamespace.bit()
            | Capability::UnixDatagrams.bit()
            | Capability::NativeSocketPair.bit()
            | Capability::FdAsRedirect.bit()
            | Capability::Tipc.bit()
            | Capability::UnixDomain.bit(),
    );

    /// The bits that presuppose working UNIX-domain sockets.
    pub const UNIX_DOMAIN_DEPENDENT: CapabilitySet = CapabilitySet(
        Capability::PeerCredentials.bit()
            | Capability::AncillaryMessages.bit()
            | Capability::FileDescriptorPassing.bit()
            | Capability::AbstractNamespace.bit()
            | Capability::UnixDatagrams.bit()
            | Capability::NativeSocketPair.bit(),
    );

    /// The capability set of the running process.
    ///
    /// Computed on first call; every call after that (from any thread)
    /// returns the identical bits without touching the OS.
    #[must_use]
    pub fn current() -> Self {
        static DETECTED: OnceLock<CapabilitySet> = OnceLock::new();
        *DETECTED.get_or_init(detect)
    }

    /// Raw bits of this set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Rebuilds a set from raw bits, dropping bits this build does not
    /// know. Masks persisted by newer releases stay readable.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        CapabilitySet(bits & Self::KNOWN.0)
    }

    /// Returns true if `capability` is in the set.
    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Returns true if every bit of `other` is in the set.
    #[must_use]
    pub const fn contains_all(self, other: CapabilitySet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of capabilities in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// This set plus `capability`.
    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        CapabilitySet(self.0 | capability.bit())
    }

    /// This set minus `capability`.
    #[must_use]
    pub const fn without(self, capability: Capability) -> Self {
        CapabilitySet(self.0 & !capability.bit())
    }

    /// Union of two sets.
    #[must_use]
    pub const fn union(self, other: CapabilitySet) -> Self {
        CapabilitySet(self.0 | other.0)
    }

    /// The bits of this set that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: CapabilitySet) -> Self {
        CapabilitySet(self.0 & !other.0)
    }

    /// Clears every UNIX-domain-dependent bit unless `UnixDomain` itself
    /// is present.
    pub(crate) const fn enforce_prerequisites(self) -> Self {
        if self.contains(Capability::UnixDomain) {
            self
        } else {
            self.difference(Self::UNIX_DOMAIN_DEPENDENT)
        }
    }

    /// Iterates over the capabilities present in the set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }

    /// Expands the set into a named-flag snapshot for diagnostics.
    #[must_use]
    pub const fn report(self) -> CapabilityReport {
        CapabilityReport {
            peer_credentials: self.contains(Capability::PeerCredentials),
            ancillary_messages: self.contains(Capability::AncillaryMessages),
            file_descriptor_passing: self.contains(Capability::FileDescriptorPassing),
            abstract_namespace: self.contains(Capability::AbstractNamespace),
            unix_datagrams: self.contains(Capability::UnixDatagrams),
            native_socket_pair: self.contains(Capability::NativeSocketPair),
            fd_as_redirect: self.contains(Capability::FdAsRedirect),
            tipc: self.contains(Capability::Tipc),
            unix_domain: self.contains(Capability::UnixDomain),
        }
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for capability in self.iter() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(capability.name())?;
            first = false;
        }
        Ok(())
    }
}

/// Named-flag view of a [`CapabilitySet`], for support dumps. Field
/// names are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    /// Peer identity retrieval works.
    pub peer_credentials: bool,
    /// Control messages work.
    pub ancillary_messages: bool,
    /// Descriptor passing works.
    pub file_descriptor_passing: bool,
    /// The abstract socket namespace exists.
    pub abstract_namespace: bool,
    /// UNIX-domain datagrams work.
    pub unix_datagrams: bool,
    /// One-call connected socket pairs work.
    pub native_socket_pair: bool,
    /// Descriptors double as stream redirect targets.
    pub fd_as_redirect: bool,
    /// TIPC sockets are available.
    pub tipc: bool,
    /// UNIX-domain sockets work.
    pub unix_domain: bool,
}

/// The capabilities of the running platform, as a set.
///
/// Shorthand for [`CapabilitySet::current`].
#[must_use]
pub fn capabilities() -> CapabilitySet {
    CapabilitySet::current()
}

/// Whether the running platform supports `capability`.
#[must_use]
pub fn has_capability(capability: Capability) -> bool {
    CapabilitySet::current().contains(capability)
}

/// One-time computation behind [`CapabilitySet::current`].
fn detect() -> CapabilitySet {
    let disabled = env_config::disabled_from_env_lenient();
    let raw = detect_raw();
    let effective = raw.difference(disabled).enforce_prerequisites();
    tracing::debug!(
        raw = %raw,
        disabled = %disabled,
        effective = %effective,
        "socket capabilities detected"
    );
    effective
}

/// Runs the per-capability probes, without overrides applied.
fn detect_raw() -> CapabilitySet {
    let mut caps = CapabilitySet::EMPTY;

    if probe_unix_stream() {
        caps = caps.with(Capability::UnixDomain);

        if peer_credentials_supported() {
            caps = caps.with(Capability::PeerCredentials);
        }

        // sendmsg/recvmsg control messages exist on every target this
        // crate compiles for, and SCM_RIGHTS rides on them.
        caps = caps
            .with(Capability::AncillaryMessages)
            .with(Capability::FileDescriptorPassing);

        #[cfg(any(target_os = "linux", target_os = "android"))]
        if probe_abstract_namespace() {
            caps = caps.with(Capability::AbstractNamespace);
        }

        if probe_unix_datagram() {
            caps = caps.with(Capability::UnixDatagrams);
        }

        if probe_socket_pair() {
            caps = caps.with(Capability::NativeSocketPair);
        }
    }

    // Any descriptor can be re-read or re-written as a plain byte stream
    // on these targets, which is all a stdio-style redirect needs.
    caps = caps.with(Capability::FdAsRedirect);

    #[cfg(any(target_os = "linux", target_os = "android"))]
    if probe_tipc() {
        caps = caps.with(Capability::Tipc);
    }

    caps
}

/// True when a peer-credential retrieval mechanism is compiled in for
/// this target and the platform is not on the denylist.
fn peer_credentials_supported() -> bool {
    let mechanism = cfg!(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly",
    ));
    if !mechanism {
        return false;
    }
    if PEER_CREDENTIALS_DENYLIST.contains(&std::env::consts::OS) {
        tracing::debug!(
            os = std::env::consts::OS,
            "peer credentials denylisted on this platform"
        );
        return false;
    }
    true
}

/// Can this kernel hand out an `AF_UNIX` stream socket at all?
fn probe_unix_stream() -> bool {
    probe_socket(Domain::UNIX, Type::STREAM, "unix stream")
}

/// Can this kernel hand out an `AF_UNIX` datagram socket?
fn probe_unix_datagram() -> bool {
    probe_socket(Domain::UNIX, Type::DGRAM, "unix datagram")
}

fn probe_socket(domain: Domain, ty: Type, what: &str) -> bool {
    match Socket::new(domain, ty, None) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(probe = what, error = %err, "capability probe failed");
            false
        }
    }
}

/// Can the kernel produce a connected pair in one call?
fn probe_socket_pair() -> bool {
    match Socket::pair(Domain::UNIX, Type::STREAM, None) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(probe = "socketpair", error = %err, "capability probe failed");
            false
        }
    }
}

/// Autobind probe: binding with only the family set asks the kernel for
/// a fresh abstract name, which only succeeds where the abstract
/// namespace exists. The probe socket (and its kernel-chosen name) is
/// gone before detection returns.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn probe_abstract_namespace() -> bool {
    use std::os::unix::io::AsRawFd;

    let Ok(socket) = Socket::new(Domain::UNIX, Type::STREAM, None) else {
        return false;
    };
    // SAFETY: an all-zero sockaddr_un is valid; only the family field is
    // then filled in.
    let mut addr: libc::sockaddr_un = unsafe { std::mem::zeroed() };
    addr.sun_family = libc::AF_UNIX as libc::sa_family_t;
    let len = std::mem::size_of::<libc::sa_family_t>() as libc::socklen_t;
    // SAFETY: addr outlives the call and len covers only its family
    // field, which is initialized.
    let rc = unsafe {
        libc::bind(
            socket.as_raw_fd(),
            (&raw const addr).cast::<libc::sockaddr>(),
            len,
        )
    };
    if rc != 0 {
        tracing::debug!(
            probe = "abstract autobind",
            error = %std::io::Error::last_os_error(),
            "capability probe failed"
        );
    }
    rc == 0
}

/// TIPC availability depends on the kernel module, so only a live probe
/// answers it.
#[cfg(any(target_os = "linux", target_os = "android"))]
fn probe_tipc() -> bool {
    match Socket::new(
        Domain::from(libc::AF_TIPC),
        Type::from(libc::SOCK_RDM),
        None,
    ) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(probe = "tipc", error = %err, "capability probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[test]
    fn bit_layout_is_stable() {
        init_test("bit_layout_is_stable");
        assert_eq!(Capability::PeerCredentials.bit(), 1);
        assert_eq!(Capability::AncillaryMessages.bit(), 2);
        assert_eq!(Capability::FileDescriptorPassing.bit(), 4);
        assert_eq!(Capability::AbstractNamespace.bit(), 8);
        assert_eq!(Capability::UnixDatagrams.bit(), 16);
        assert_eq!(Capability::NativeSocketPair.bit(), 32);
        assert_eq!(Capability::FdAsRedirect.bit(), 64);
        assert_eq!(Capability::Tipc.bit(), 128);
        assert_eq!(Capability::UnixDomain.bit(), 256);
        assert_eq!(CapabilitySet::KNOWN.bits(), 0b1_1111_1111);
        crate::test_complete!("bit_layout_is_stable");
    }

    #[test]
    fn set_algebra() {
        init_test("set_algebra");
        let set = CapabilitySet::EMPTY
            .with(Capability::UnixDomain)
            .with(Capability::UnixDatagrams);
        assert!(set.contains(Capability::UnixDomain));
        assert!(set.contains(Capability::UnixDatagrams));
        assert!(!set.contains(Capability::Tipc));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());

        let smaller = set.without(Capability::UnixDatagrams);
        assert!(!smaller.contains(Capability::UnixDatagrams));
        assert!(set.contains_all(smaller));
        assert!(!smaller.contains_all(set));

        assert_eq!(smaller.union(set), set);
        assert_eq!(set.difference(smaller).len(), 1);
        crate::test_complete!("set_algebra");
    }

    #[test]
    fn unknown_bits_are_truncated() {
        init_test("unknown_bits_are_truncated");
        let set = CapabilitySet::from_bits_truncate(u32::MAX);
        crate::assert_with_log!(
            set == CapabilitySet::KNOWN,
            "future bits are dropped",
            CapabilitySet::KNOWN,
            set
        );
        crate::test_complete!("unknown_bits_are_truncated");
    }

    #[test]
    fn prerequisite_nesting_clears_dependents() {
        init_test("prerequisite_nesting_clears_dependents");
        for capability in [
            Capability::PeerCredentials,
            Capability::AncillaryMessages,
            Capability::FileDescriptorPassing,
            Capability::AbstractNamespace,
            Capability::UnixDatagrams,
            Capability::NativeSocketPair,
        ] {
            let orphaned = CapabilitySet::EMPTY.with(capability);
            crate::assert_with_log!(
                orphaned.enforce_prerequisites().is_empty(),
                "dependent bit cannot stand alone",
                capability,
                orphaned.enforce_prerequisites()
            );
        }
        // Independent bits survive without UnixDomain.
        let independent = CapabilitySet::EMPTY
            .with(Capability::FdAsRedirect)
            .with(Capability::Tipc);
        assert_eq!(independent.enforce_prerequisites(), independent);
        // With UnixDomain present nothing is cleared.
        let full = CapabilitySet::KNOWN;
        assert_eq!(full.enforce_prerequisites(), full);
        crate::test_complete!("prerequisite_nesting_clears_dependents");
    }

    #[test]
    fn published_mask_honors_nesting() {
        init_test("published_mask_honors_nesting");
        let mask = CapabilitySet::current();
        if !mask.contains(Capability::UnixDomain) {
            assert_eq!(
                mask.difference(CapabilitySet::UNIX_DOMAIN_DEPENDENT),
                mask,
                "dependent bits must be clear when UnixDomain is absent"
            );
        }
        crate::test_complete!("published_mask_honors_nesting");
    }

    #[test]
    fn current_is_idempotent_across_threads() {
        init_test("current_is_idempotent_across_threads");
        let first = CapabilitySet::current();
        let mut workers = Vec::new();
        for _ in 0..4 {
            workers.push(std::thread::spawn(CapabilitySet::current));
        }
        for worker in workers {
            let seen = worker.join().unwrap();
            crate::assert_with_log!(seen == first, "same bits from every thread", first, seen);
        }
        assert_eq!(CapabilitySet::current(), first);
        crate::test_complete!("current_is_idempotent_across_threads");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_detects_the_core_set() {
        init_test("linux_detects_the_core_set");
        let mask = CapabilitySet::current();
        for capability in [
            Capability::UnixDomain,
            Capability::PeerCredentials,
            Capability::AncillaryMessages,
            Capability::FileDescriptorPassing,
            Capability::AbstractNamespace,
            Capability::UnixDatagrams,
            Capability::NativeSocketPair,
            Capability::FdAsRedirect,
        ] {
            crate::assert_with_log!(
                mask.contains(capability),
                "expected on Linux",
                capability,
                mask
            );
        }
        // Tipc depends on the kernel module; either answer is fine here.
        crate::test_complete!("linux_detects_the_core_set");
    }

    #[test]
    fn raw_detection_matches_probe_pipeline() {
        init_test("raw_detection_matches_probe_pipeline");
        let raw = detect_raw();
        // The pipeline output already satisfies nesting even before
        // enforce_prerequisites runs, because dependents are only probed
        // inside the UnixDomain branch.
        assert_eq!(raw.enforce_prerequisites(), raw);
        crate::test_complete!("raw_detection_matches_probe_pipeline");
    }

    #[test]
    fn override_application_is_pure_set_algebra() {
        init_test("override_application_is_pure_set_algebra");
        let raw = CapabilitySet::KNOWN;
        let disabled = CapabilitySet::EMPTY.with(Capability::UnixDomain);
        let effective = raw.difference(disabled).enforce_prerequisites();
        assert!(!effective.contains(Capability::UnixDomain));
        for capability in [
            Capability::PeerCredentials,
            Capability::AncillaryMessages,
            Capability::FileDescriptorPassing,
            Capability::AbstractNamespace,
            Capability::UnixDatagrams,
            Capability::NativeSocketPair,
        ] {
            assert!(
                !effective.contains(capability),
                "disabling UnixDomain must drag {capability} down with it"
            );
        }
        assert!(effective.contains(Capability::FdAsRedirect));
        crate::test_complete!("override_application_is_pure_set_algebra");
    }

    #[test]
    fn display_lists_names() {
        init_test("display_lists_names");
        assert_eq!(CapabilitySet::EMPTY.to_string(), "(none)");
        let set = CapabilitySet::EMPTY
            .with(Capability::UnixDomain)
            .with(Capability::PeerCredentials);
        crate::assert_with_log!(
            set.to_string() == "PeerCredentials|UnixDomain",
            "names in bit order",
            "PeerCredentials|UnixDomain",
            set.to_string()
        );
        crate::test_complete!("display_lists_names");
    }

    #[test]
    fn report_mirrors_bits() {
        init_test("report_mirrors_bits");
        let set = CapabilitySet::EMPTY
            .with(Capability::UnixDomain)
            .with(Capability::UnixDatagrams);
        let report = set.report();
        assert!(report.unix_domain);
        assert!(report.unix_datagrams);
        assert!(!report.tipc);
        assert!(!report.peer_credentials);
        crate::test_complete!("report_mirrors_bits");
    }

    #[test]
    fn iter_yields_bit_order() {
        init_test("iter_yields_bit_order");
        let set = CapabilitySet::EMPTY
            .with(Capability::UnixDomain)
            .with(Capability::AncillaryMessages)
            .with(Capability::Tipc);
        let listed: Vec<_> = set.iter().collect();
        assert_eq!(
            listed,
            vec![
                Capability::AncillaryMessages,
                Capability::Tipc,
                Capability::UnixDomain
            ]
        );
        crate::test_complete!("iter_yields_bit_order");
    }
}
