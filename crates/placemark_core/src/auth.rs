//! Device-authentication seam for the unlock gate.
//!
//! # Responsibility
//! - Define the contract the platform authentication capability fulfils.
//! - Keep core testable without any biometric/OS dependency.
//!
//! # Invariants
//! - Core never prompts the user itself; it only consumes an outcome.
//! - Authentication failure is reported, never fatal.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a device authentication attempt.
#[derive(Debug)]
pub enum AuthError {
    /// The user was prompted and denied, or the prompt failed.
    Denied,
    /// No authentication capability is available on this device.
    Unavailable(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denied => write!(f, "device authentication denied"),
            Self::Unavailable(reason) => {
                write!(f, "device authentication unavailable: {reason}")
            }
        }
    }
}

impl Error for AuthError {}

/// Platform capability that can vouch for the device owner.
///
/// The mobile shell implements this over its biometric/passcode prompt; tests
/// implement it with fixed outcomes.
pub trait DeviceAuthenticator {
    fn authenticate(&self) -> Result<(), AuthError>;
}

/// Authenticator that relays an already-obtained prompt outcome.
///
/// Host UIs run the actual biometric prompt on their side of the boundary and
/// hand the result across as a boolean.
#[derive(Debug, Clone, Copy)]
pub struct PromptOutcome(pub bool);

impl DeviceAuthenticator for PromptOutcome {
    fn authenticate(&self) -> Result<(), AuthError> {
        if self.0 {
            Ok(())
        } else {
            Err(AuthError::Denied)
        }
    }
}
