// File:    paint.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: ANSI decoration for text shown on a terminal.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

const RED: &str = "\u{1b}[31m";
const RESET: &str = "\u{1b}[0m";

/// Wraps `text` in the ANSI escapes for a red foreground.
#[must_use]
pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_red_and_resets() {
        assert_eq!(red("oops"), "\x1b[31moops\x1b[0m");
    }
}
