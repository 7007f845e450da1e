// File:    options.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The immutable options record handed to the decision pipeline by the options layer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a generated value unless told otherwise.
pub const DEFAULT_DIGITS: u8 = 6;
/// Length of a time step in seconds unless told otherwise.
pub const DEFAULT_INTERVAL: u64 = 30;

/// The operation an invocation asks for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Time-based one-time password (RFC 6238).
    #[default]
    Time,
    /// Counter-based one-time password (RFC 4226).
    Hmac,
    /// Show the help text.
    Help,
    /// No operation was selected.
    None,
}

impl Mode {
    /// Whether this mode computes a value and therefore needs a shared secret.
    #[must_use]
    pub const fn requires_secret(self) -> bool {
        matches!(self, Self::Time | Self::Hmac)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Time => "time",
            Self::Hmac => "hmac",
            Self::Help => "help",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// The HMAC hash function used to derive values.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// HMAC-SHA-1, the RFC 4226 default.
    #[default]
    Sha1,
    /// HMAC-SHA-256.
    Sha256,
    /// HMAC-SHA-512.
    Sha512,
}

/// A fully parsed invocation.
///
/// The pipeline only reads this record. `digits`, `interval` and `algorithm`
/// are passed straight through to the backend.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// The requested operation.
    pub mode: Mode,
    /// The raw shared secret, not yet checked for format.
    pub secret: String,
    /// The moving factor for [`Mode::Hmac`].
    pub counter: u64,
    /// Number of digits in the generated value.
    pub digits: u8,
    /// Length of a time step in seconds for [`Mode::Time`].
    pub interval: u64,
    /// The HMAC hash function.
    pub algorithm: Algorithm,
    /// A warning raised while the options were parsed.
    #[serde(skip)]
    pub warnings: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            secret: String::new(),
            counter: 0,
            digits: DEFAULT_DIGITS,
            interval: DEFAULT_INTERVAL,
            algorithm: Algorithm::default(),
            warnings: None,
        }
    }
}

impl Options {
    /// Creates options for `mode` with every other field at its default.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the shared secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Sets the counter used by [`Mode::Hmac`].
    #[must_use]
    pub const fn with_counter(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    /// Sets the number of digits.
    #[must_use]
    pub const fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the time step length in seconds.
    #[must_use]
    pub const fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the hash function.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Attaches a parse warning.
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings = Some(warning.into());
        self
    }

    /// The parse warning, if one is present and non-empty.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warnings.as_deref().filter(|w| !w.is_empty())
    }
}

// Keeps the secret out of log lines and panic messages.
impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("mode", &self.mode)
            .field("secret", &"<redacted>")
            .field("counter", &self.counter)
            .field("digits", &self.digits)
            .field("interval", &self.interval)
            .field("algorithm", &self.algorithm)
            .field("warnings", &self.warnings)
            .finish()
    }
}
