// File:    resolve.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Picks the single output of an invocation using a fixed precedence.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::backend::{OtpBackend, OtpError};
use crate::dispatch::compute;
use crate::options::{Mode, Options};
use crate::paint;
use crate::validator::{ValidationError, validate};
use log::debug;

/// The one output an invocation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Help text, shown as is.
    Help(String),
    /// A warning raised while the options were parsed.
    Warning(String),
    /// The options failed validation.
    Error(ValidationError),
    /// A freshly computed one-time password.
    Value(String),
}

impl Resolution {
    /// A short name for the outcome, used in logs and API responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Help(_) => "help",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Value(_) => "value",
        }
    }

    /// Whether the invocation stopped on a warning or a validation error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_))
    }

    /// The undecorated text.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Help(text) | Self::Warning(text) | Self::Value(text) => text.clone(),
            Self::Error(error) => error.to_string(),
        }
    }

    /// The text as printed on a terminal: warnings and errors in red.
    #[must_use]
    pub fn to_terminal(&self) -> String {
        if self.is_failure() {
            paint::red(&self.text())
        } else {
            self.text()
        }
    }
}

/// Resolves `options` to exactly one output.
///
/// Precedence, highest first: help, parse warning, validation error, computed
/// value. `help` is only called when the mode is [`Mode::Help`], and `backend`
/// only once everything else is clear.
///
/// # Errors
///
/// Returns an [`OtpError`] when the value computation itself fails.
pub fn resolve<B, H>(options: &Options, backend: &B, help: H) -> Result<Resolution, OtpError>
where
    B: OtpBackend + ?Sized,
    H: FnOnce() -> String,
{
    let resolution = if options.mode == Mode::Help {
        Resolution::Help(help())
    } else if let Some(warning) = options.warning() {
        Resolution::Warning(warning.to_owned())
    } else if let Err(error) = validate(options) {
        Resolution::Error(error)
    } else {
        Resolution::Value(compute(options, backend)?)
    };
    debug!(
        "Resolved a '{}' invocation to {}.",
        options.mode,
        resolution.kind()
    );
    Ok(resolution)
}
