// File:    dispatch.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Maps a validated mode onto the matching backend computation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::backend::{OtpBackend, OtpError};
use crate::options::{Mode, Options};

/// Computes the value for already validated `options`.
///
/// # Errors
///
/// Returns [`OtpError::UnsupportedMode`] for [`Mode::Help`] and [`Mode::None`],
/// and passes through any failure from `backend`.
pub fn compute<B: OtpBackend + ?Sized>(options: &Options, backend: &B) -> Result<String, OtpError> {
    match options.mode {
        Mode::Time => backend.time_based(
            &options.secret,
            options.digits,
            options.interval,
            options.algorithm,
        ),
        Mode::Hmac => backend.counter_based(
            &options.secret,
            options.digits,
            options.algorithm,
            options.counter,
        ),
        Mode::Help | Mode::None => Err(OtpError::UnsupportedMode(options.mode)),
    }
}
