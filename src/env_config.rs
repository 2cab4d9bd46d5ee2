//! Environment variable overrides for capability detection.
//!
//! Every capability can be force-disabled, which is occasionally needed
//! to sidestep a broken kernel feature or to exercise degraded-platform
//! code paths. Overrides can only clear bits; nothing can force a bit on
//! that the platform does not support.
//!
//! Variables are read once, during the one-time capability computation.
//! Changes made after the first [`CapabilitySet::current`] call have no
//! effect on this process.
//!
//! # Supported Environment Variables
//!
//! | Variable | Type | Clears |
//! |----------|------|--------|
//! | `AFSOCK_DISABLE_PEER_CREDENTIALS` | `bool` | `PeerCredentials` |
//! | `AFSOCK_DISABLE_ANCILLARY_MESSAGES` | `bool` | `AncillaryMessages` |
//! | `AFSOCK_DISABLE_FILE_DESCRIPTOR_PASSING` | `bool` | `FileDescriptorPassing` |
//! | `AFSOCK_DISABLE_ABSTRACT_NAMESPACE` | `bool` | `AbstractNamespace` |
//! | `AFSOCK_DISABLE_UNIX_DATAGRAMS` | `bool` | `UnixDatagrams` |
//! | `AFSOCK_DISABLE_NATIVE_SOCKET_PAIR` | `bool` | `NativeSocketPair` |
//! | `AFSOCK_DISABLE_FD_AS_REDIRECT` | `bool` | `FdAsRedirect` |
//! | `AFSOCK_DISABLE_TIPC` | `bool` | `Tipc` |
//! | `AFSOCK_DISABLE_UNIX_DOMAIN` | `bool` | `UnixDomain` and every bit that depends on it |
//!
//! Booleans accept `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`,
//! case-insensitively. During detection an unparseable value is treated
//! as set (the capability is disabled) and a warning is logged; the
//! strict reader [`disabled_from_env`] reports it as a [`ConfigError`]
//! instead.

use thiserror::Error;

use crate::capability::{Capability, CapabilitySet};

/// Environment variable name disabling `PeerCredentials`.
pub const ENV_DISABLE_PEER_CREDENTIALS: &str = "AFSOCK_DISABLE_PEER_CREDENTIALS";
/// Environment variable name disabling `AncillaryMessages`.
pub const ENV_DISABLE_ANCILLARY_MESSAGES: &str = "AFSOCK_DISABLE_ANCILLARY_MESSAGES";
/// Environment variable name disabling `FileDescriptorPassing`.
pub const ENV_DISABLE_FILE_DESCRIPTOR_PASSING: &str = "AFSOCK_DISABLE_FILE_DESCRIPTOR_PASSING";
/// Environment variable name disabling `AbstractNamespace`.
pub const ENV_DISABLE_ABSTRACT_NAMESPACE: &str = "AFSOCK_DISABLE_ABSTRACT_NAMESPACE";
/// Environment variable name disabling `UnixDatagrams`.
pub const ENV_DISABLE_UNIX_DATAGRAMS: &str = "AFSOCK_DISABLE_UNIX_DATAGRAMS";
/// Environment variable name disabling `NativeSocketPair`.
pub const ENV_DISABLE_NATIVE_SOCKET_PAIR: &str = "AFSOCK_DISABLE_NATIVE_SOCKET_PAIR";
/// Environment variable name disabling `FdAsRedirect`.
pub const ENV_DISABLE_FD_AS_REDIRECT: &str = "AFSOCK_DISABLE_FD_AS_REDIRECT";
/// Environment variable name disabling `Tipc`.
pub const ENV_DISABLE_TIPC: &str = "AFSOCK_DISABLE_TIPC";
/// Environment variable name disabling `UnixDomain`.
pub const ENV_DISABLE_UNIX_DOMAIN: &str = "AFSOCK_DISABLE_UNIX_DOMAIN";

/// Error produced when an override variable holds an unparseable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for {var}: expected bool (true/false/1/0/yes/no/on/off), got {value:?}")]
pub struct ConfigError {
    /// The variable at fault.
    pub var: &'static str,
    /// The rejected content.
    pub value: String,
}

/// Reads the disable variables strictly, stopping at the first
/// unparseable value.
///
/// Only variables that are set in the environment are considered; a
/// variable set to a falsy value clears nothing.
///
/// # Errors
///
/// [`ConfigError`] naming the variable and the rejected value.
pub fn disabled_from_env() -> Result<CapabilitySet, ConfigError> {
    let mut disabled = CapabilitySet::EMPTY;
    for capability in Capability::ALL {
        let var = capability.disable_env_var();
        if let Some(val) = read_env(var) {
            if parse_bool(var, &val)? {
                disabled = disabled.with(capability);
            }
        }
    }
    Ok(disabled)
}

/// The reader capability detection uses: per-variable failures disable
/// the capability (an operator who set the knob gets the safe effect)
/// and are logged rather than propagated.
pub(crate) fn disabled_from_env_lenient() -> CapabilitySet {
    let mut disabled = CapabilitySet::EMPTY;
    for capability in Capability::ALL {
        let var = capability.disable_env_var();
        let Some(val) = read_env(var) else {
            continue;
        };
        match parse_bool(var, &val) {
            Ok(true) => {
                tracing::debug!(var, capability = %capability, "capability disabled by environment");
                disabled = disabled.with(capability);
            }
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(var, error = %err, "unparseable capability override, treating as disabled");
                disabled = disabled.with(capability);
            }
        }
    }
    disabled
}

/// Read an environment variable, returning `None` if unset.
fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_bool(var: &'static str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            var,
            value: val.to_string(),
        }),
    }
}
