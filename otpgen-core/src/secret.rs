// File:    secret.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Screens and decodes Base32 (RFC 4648) shared secrets.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Two separate checks live here. [`is_base32`] only looks at characters and is
//! what the validator uses; [`decode`] turns a secret into key bytes and is only
//! called by the backend. A secret can pass the first and still fail the second.

use base32::Alphabet;

/// The RFC 4648 Base32 alphabet. Padding (`=`) is not part of it.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Returns `true` if every character of `secret` belongs to [`ALPHABET`],
/// ignoring case. Length is not checked.
#[must_use]
pub fn is_base32(secret: &str) -> bool {
    secret
        .chars()
        .all(|c| ALPHABET.contains(c.to_ascii_uppercase()))
}

/// Decodes an unpadded, case-insensitive Base32 secret into key bytes.
///
/// Returns `None` when the secret cannot be decoded or yields no bytes at all.
#[must_use]
pub fn decode(secret: &str) -> Option<Vec<u8>> {
    let normalized = secret.to_ascii_uppercase();
    base32::decode(Alphabet::Rfc4648 { padding: false }, &normalized).filter(|key| !key.is_empty())
}
