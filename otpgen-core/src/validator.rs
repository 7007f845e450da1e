// File:    validator.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Decides whether the requested mode can proceed with the supplied secret.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::options::Options;
use crate::secret;
use thiserror::Error;

/// The reason an invocation cannot proceed. At most one is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A generating mode was selected without a secret.
    #[error("You must also specify a --secret. Try --help for help.")]
    MissingSecret,
    /// The secret contains characters outside the Base32 alphabet.
    #[error(
        "Secret must be in RFC4648 Base32 format - http://en.wikipedia.org/wiki/Base32#RFC_4648_Base32_alphabet"
    )]
    InvalidSecretFormat,
}

/// Checks `options` before any value is computed.
///
/// Help and no-mode invocations always pass. The character check only runs
/// once the secret is known to be non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::MissingSecret`] for an empty secret and
/// [`ValidationError::InvalidSecretFormat`] for a secret with characters
/// outside the RFC 4648 alphabet.
pub fn validate(options: &Options) -> Result<(), ValidationError> {
    if !options.mode.requires_secret() {
        return Ok(());
    }
    if options.secret.is_empty() {
        return Err(ValidationError::MissingSecret);
    }
    if !secret::is_base32(&options.secret) {
        return Err(ValidationError::InvalidSecretFormat);
    }
    Ok(())
}
