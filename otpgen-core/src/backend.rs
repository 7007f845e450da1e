// File:    backend.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Computes HOTP (RFC 4226) and TOTP (RFC 6238) values from a Base32 secret.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::options::{Algorithm, Mode};
use crate::secret;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};
use thiserror::Error;
use totp_rs::TOTP;

/// Largest digit count whose modulus still fits the 31-bit truncated hash.
pub const MAX_DIGITS: u8 = 9;

/// A failure while computing a value. These are fatal for the invocation.
#[derive(Error, Debug)]
pub enum OtpError {
    /// The dispatcher was asked for a value in a mode that has none.
    #[error("no one-time password can be generated in '{0}' mode")]
    UnsupportedMode(Mode),
    /// The secret passed the character screen but is not usable key material.
    #[error("secret could not be decoded into Base32 key material")]
    UndecodableSecret,
    /// The requested digit count cannot be produced.
    #[error("cannot generate {0} digits, expected 1 to 9")]
    UnsupportedDigits(u8),
    /// A time step of zero seconds was requested.
    #[error("the time step interval must be at least one second")]
    ZeroInterval,
    /// The system clock could not be read as Unix time.
    #[error("failed to read the system clock: {0}")]
    Clock(#[from] SystemTimeError),
}

/// The two keyed-hash computations the dispatcher delegates to.
pub trait OtpBackend {
    /// Computes the time-based value for the current instant.
    ///
    /// # Errors
    ///
    /// Returns an [`OtpError`] if the secret cannot be decoded, the parameters
    /// are out of range, or the clock cannot be read.
    fn time_based(
        &self,
        secret: &str,
        digits: u8,
        interval: u64,
        algorithm: Algorithm,
    ) -> Result<String, OtpError>;

    /// Computes the counter-based value at position `counter`.
    ///
    /// # Errors
    ///
    /// Returns an [`OtpError`] if the secret cannot be decoded or the digit
    /// count is out of range.
    fn counter_based(
        &self,
        secret: &str,
        digits: u8,
        algorithm: Algorithm,
        counter: u64,
    ) -> Result<String, OtpError>;
}

/// Where the "current instant" for time-based values comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// The system wall clock.
    System,
    /// A fixed number of seconds since the Unix epoch.
    Fixed(u64),
}

impl Clock {
    fn now(self) -> Result<u64, OtpError> {
        match self {
            Self::System => Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs()),
            Self::Fixed(seconds) => Ok(seconds),
        }
    }
}

/// The RFC 4226 / RFC 6238 backend, built on `totp-rs`.
#[derive(Debug, Clone, Copy)]
pub struct RfcBackend {
    clock: Clock,
}

impl RfcBackend {
    /// A backend reading the system clock.
    #[must_use]
    pub const fn system() -> Self {
        Self {
            clock: Clock::System,
        }
    }

    /// A backend pinned to `clock`.
    #[must_use]
    pub const fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Builds the keyed hash. The moving factor is `input / step`.
    fn hasher(secret: &str, digits: u8, step: u64, algorithm: Algorithm) -> Result<TOTP, OtpError> {
        if digits == 0 || digits > MAX_DIGITS {
            return Err(OtpError::UnsupportedDigits(digits));
        }
        let key = secret::decode(secret).ok_or(OtpError::UndecodableSecret)?;
        let algorithm = match algorithm {
            Algorithm::Sha1 => totp_rs::Algorithm::SHA1,
            Algorithm::Sha256 => totp_rs::Algorithm::SHA256,
            Algorithm::Sha512 => totp_rs::Algorithm::SHA512,
        };
        Ok(TOTP::new_unchecked(algorithm, usize::from(digits), 0, step, key))
    }
}

impl Default for RfcBackend {
    fn default() -> Self {
        Self::system()
    }
}

impl OtpBackend for RfcBackend {
    fn time_based(
        &self,
        secret: &str,
        digits: u8,
        interval: u64,
        algorithm: Algorithm,
    ) -> Result<String, OtpError> {
        if interval == 0 {
            return Err(OtpError::ZeroInterval);
        }
        let hasher = Self::hasher(secret, digits, interval, algorithm)?;
        Ok(hasher.generate(self.clock.now()?))
    }

    fn counter_based(
        &self,
        secret: &str,
        digits: u8,
        algorithm: Algorithm,
        counter: u64,
    ) -> Result<String, OtpError> {
        // A one second step makes the counter itself the moving factor.
        let hasher = Self::hasher(secret, digits, 1, algorithm)?;
        Ok(hasher.generate(counter))
    }
}
