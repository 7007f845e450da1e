// File:    args.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Turns command-line arguments into the options record and renders the help text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use otpgen_core::backend::MAX_DIGITS;
use otpgen_core::options::{DEFAULT_DIGITS, DEFAULT_INTERVAL};
use otpgen_core::{Algorithm, Mode, Options};
use std::ffi::OsString;

const EXAMPLES: &str = "EXAMPLES:\n  \n# Generate a time-based one-time password\notpgen --secret JBSWY3DPEHPK3PXP\n\n# Generate a counter-based one-time password\notpgen --hmac --secret JBSWY3DPEHPK3PXP --counter 42\n\n# Read the secret from the environment\nOTPGEN_SECRET=JBSWY3DPEHPK3PXP otpgen --digits 8";

#[derive(Parser, Debug)]
#[command(name = "otpgen", author, version, about, long_about = None)]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
struct Cli {
    /// The shared secret, Base32 encoded
    #[arg(
        short,
        long,
        env = "OTPGEN_SECRET",
        hide_env_values = true,
        num_args = 0..=1,
        default_missing_value = ""
    )]
    secret: Option<String>,

    /// The counter for counter-based one-time passwords
    #[arg(short, long, default_value_t = 0)]
    counter: u64,

    /// Use time-based one-time passwords according to RFC 6238 (default)
    #[arg(short, long, conflicts_with = "hmac")]
    time: bool,

    /// Use counter-based one-time passwords according to RFC 4226
    #[arg(short = 'm', long)]
    hmac: bool,

    /// The hashing algorithm to use
    #[arg(short, long, value_name = "ALGORITHM", value_enum, default_value_t = Digest::Sha1)]
    digest: Digest,

    /// The number of digits
    #[arg(
        short = 'n',
        long,
        value_name = "NUMBER",
        default_value_t = DEFAULT_DIGITS,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_DIGITS))
    )]
    digits: u8,

    /// The time step in seconds for time-based one-time passwords
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval: u64,

    /// Show this message
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Digest {
    Sha1,
    Sha256,
    Sha512,
}

impl From<Digest> for Algorithm {
    fn from(digest: Digest) -> Self {
        match digest {
            Digest::Sha1 => Self::Sha1,
            Digest::Sha256 => Self::Sha256,
            Digest::Sha512 => Self::Sha512,
        }
    }
}

impl Cli {
    fn into_options(self) -> Options {
        let mode = if self.help {
            Mode::Help
        } else if self.time || !self.hmac {
            Mode::Time
        } else {
            Mode::Hmac
        };
        Options::new(mode)
            .with_secret(self.secret.unwrap_or_default())
            .with_counter(self.counter)
            .with_digits(self.digits)
            .with_interval(self.interval)
            .with_algorithm(self.digest.into())
    }
}

/// Parses `args` (program name first) into the options record.
///
/// No arguments at all means help. Parse failures are not fatal: they become
/// the warning on otherwise default options, so the resolver decides what is
/// shown. Only `--version` comes back as an error, for the caller to exit with.
pub(crate) fn parse<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Ok(Options::new(Mode::Help));
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(cli.into_options()),
        Err(e) if e.kind() == ErrorKind::DisplayVersion => Err(e),
        Err(e) => {
            let asked_for_help = args.iter().skip(1).any(|a| *a == "-h" || *a == "--help");
            let mode = if asked_for_help {
                Mode::Help
            } else {
                Mode::default()
            };
            Ok(Options::new(mode).with_warning(warning(&e)))
        }
    }
}

/// The rendered help text, examples included.
pub(crate) fn help_text() -> String {
    let mut command = Cli::command();
    command.render_help().to_string().trim_end().to_owned()
}

fn warning(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .trim_end_matches('.');
    let mut chars = message.chars();
    let capitalized = chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    });
    format!("{capitalized}. Try --help for help.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_help() {
        let options = parse(["otpgen"]).unwrap();
        assert_eq!(options.mode, Mode::Help);
        assert!(options.warning().is_none());
    }

    #[test]
    fn time_is_the_default_mode() {
        let options = parse(["otpgen", "--secret", "JBSWY3DP"]).unwrap();
        assert_eq!(options.mode, Mode::Time);
        assert_eq!(options.secret, "JBSWY3DP");
        assert_eq!(options.digits, 6);
        assert_eq!(options.interval, 30);
        assert_eq!(options.algorithm, Algorithm::Sha1);
    }

    #[test]
    fn short_flags_fill_every_field() {
        let options = parse([
            "otpgen", "-m", "-s", "JBSWY3DP", "-c", "42", "-n", "8", "-d", "sha512",
        ])
        .unwrap();
        assert_eq!(options.mode, Mode::Hmac);
        assert_eq!(options.counter, 42);
        assert_eq!(options.digits, 8);
        assert_eq!(options.algorithm, Algorithm::Sha512);
    }

    #[test]
    fn secret_flag_without_value_is_blank() {
        let options = parse(["otpgen", "--time", "--secret"]).unwrap();
        assert_eq!(options.secret, "");
    }

    #[test]
    fn conflicting_modes_become_a_warning() {
        let options = parse(["otpgen", "--time", "--hmac", "--secret", "JBSWY3DP"]).unwrap();
        let warning = options.warning().unwrap();
        assert!(warning.starts_with("The argument '--time' cannot be used with '--hmac"));
        assert!(warning.ends_with(". Try --help for help."));
        assert_eq!(options.mode, Mode::Time);
    }

    #[test]
    fn out_of_range_digits_become_a_warning() {
        let options = parse(["otpgen", "--digits", "12", "--secret", "JBSWY3DP"]).unwrap();
        assert!(options.warning().unwrap().starts_with("Invalid value '12'"));
    }

    #[test]
    fn zero_interval_becomes_a_warning() {
        let options = parse(["otpgen", "--interval", "0", "--secret", "JBSWY3DP"]).unwrap();
        assert!(options.warning().unwrap().starts_with("Invalid value '0'"));
    }

    #[test]
    fn help_survives_a_parse_failure() {
        let options = parse(["otpgen", "--bogus", "--help"]).unwrap();
        assert_eq!(options.mode, Mode::Help);
        assert!(options.warning().is_some());
    }

    #[test]
    fn version_is_left_to_the_caller() {
        let error = parse(["otpgen", "--version"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn help_text_lists_flags_and_examples() {
        let help = help_text();
        assert!(help.contains("--secret"));
        assert!(help.contains("--hmac"));
        assert!(help.contains("EXAMPLES:"));
    }
}
