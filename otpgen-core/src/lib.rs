// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The library crate for otpgen-core, deciding which single output an invocation produces.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # otpgen Core Library
//!
//! This library decides what a one-time password invocation prints: help text,
//! a configuration warning, a validation error, or a freshly computed HOTP/TOTP
//! value. The precedence is fixed and implemented by [`resolve`].
//!
//! ```
//! use otpgen_core::{resolve, Mode, Options, RfcBackend};
//!
//! let options = Options::new(Mode::Time).with_secret("");
//! let resolution = resolve(&options, &RfcBackend::system(), String::new).unwrap();
//! assert_eq!(
//!     resolution.to_terminal(),
//!     "\u{1b}[31mYou must also specify a --secret. Try --help for help.\u{1b}[0m"
//! );
//! ```

/// HOTP/TOTP computation backends.
pub mod backend;
/// Maps a validated mode onto the backend call.
pub mod dispatch;
/// The parsed invocation options consumed by the pipeline.
pub mod options;
/// Terminal text decoration.
pub mod paint;
/// Precedence between help, warnings, validation errors and values.
pub mod resolve;
/// Base32 character screening and decoding of shared secrets.
pub mod secret;
/// Shallow validation of the options before computation.
pub mod validator;

pub use backend::{Clock, OtpBackend, OtpError, RfcBackend};
pub use dispatch::compute;
pub use options::{Algorithm, Mode, Options};
pub use resolve::{Resolution, resolve};
pub use validator::{ValidationError, validate};
