// File:    main.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Entry point of the otpgen command-line tool.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A command-line one-time password generator.
//!
//! Prints exactly one line: help, a warning, a validation error, or the value.

use log::{debug, error};
use otpgen_core::{RfcBackend, resolve};

mod args;

fn main() {
    env_logger::init();
    let options = args::parse(std::env::args_os()).unwrap_or_else(|e| e.exit());
    debug!("Parsed options: {options:?}");

    match resolve(&options, &RfcBackend::system(), args::help_text) {
        Ok(resolution) => {
            println!("{}", resolution.to_terminal());
            if resolution.is_failure() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to generate a one-time password: {e}");
            std::process::exit(1);
        }
    }
}
