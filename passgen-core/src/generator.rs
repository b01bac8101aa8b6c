// File:    generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Generates one-time passwords and random composite passwords from an injected random source.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Generation of OTPs and composite passwords.

use rand::rngs::ThreadRng;

use crate::alphabet::CharClass;
use crate::policy::{MAX_PASSWORD_LENGTH, OTP_LENGTH};
use crate::random::RandomSource;

/// Generates OTPs and passwords by drawing from an owned [`RandomSource`].
///
/// The source is injected at construction, so a seeded source makes the
/// generator fully deterministic. Each generator owns its source; give every
/// concurrent caller its own generator rather than sharing one.
pub struct PasswordGenerator<R> {
    source: R,
}

impl PasswordGenerator<ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Creates a generator that draws from `source`.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Generates a one-time password of exactly
    /// [`OTP_LENGTH`](crate::policy::OTP_LENGTH) decimal digits.
    ///
    /// Each digit is an independent uniform draw, so leading zeros are as
    /// likely as any other digit and are preserved; the result is a string,
    /// never a number.
    #[must_use = "generating consumes draws from the random source"]
    pub fn generate_otp(&mut self) -> String {
        let digits = CharClass::Digit.symbols().as_bytes();
        let mut otp = String::with_capacity(OTP_LENGTH);
        for _ in 0..OTP_LENGTH {
            otp.push(char::from(digits[self.source.next_index(digits.len())]));
        }
        otp
    }

    /// Generates a password of exactly
    /// [`MAX_PASSWORD_LENGTH`](crate::policy::MAX_PASSWORD_LENGTH) characters.
    ///
    /// Each position independently selects one of the four character classes
    /// and then one symbol from that class's alphabet, two draws per
    /// position. Nothing guarantees that all four classes appear, so a
    /// freshly generated password can still fail validation; see
    /// [`crate::validator::validate_password`].
    #[must_use = "generating consumes draws from the random source"]
    pub fn generate_password(&mut self) -> String {
        let mut password = String::with_capacity(MAX_PASSWORD_LENGTH);
        for _ in 0..MAX_PASSWORD_LENGTH {
            let class = CharClass::ALL[self.source.next_index(CharClass::ALL.len())];
            let symbols = class.symbols().as_bytes();
            password.push(char::from(symbols[self.source.next_index(symbols.len())]));
        }
        password
    }
}
