// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Defines the four fixed character classes used to synthesize and validate passwords.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The character classes backing password synthesis and validation.

/// One of the four fixed symbol groups a password character can belong to.
///
/// Each class is backed by a fixed, ordered alphabet. The classes are
/// mutually exclusive: a character belongs to at most one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Uppercase Latin letters `A`-`Z`.
    Uppercase,
    /// Lowercase Latin letters `a`-`z`.
    Lowercase,
    /// Decimal digits `0`-`9`.
    Digit,
    /// The ten accepted special characters `!@#%$^&_.-`.
    Special,
}

impl CharClass {
    /// All classes, in the order used when the generator selects a class.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Special];

    /// The fixed alphabet backing this class. All alphabets are ASCII.
    #[must_use]
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            Self::Digit => "0123456789",
            Self::Special => "!@#%$^&_.-",
        }
    }

    /// Returns `true` if `c` belongs to this class.
    ///
    /// Letters and digits are matched by ASCII range, not locale-aware
    /// Unicode classification. Special characters are matched by exact
    /// membership in the fixed set; any other punctuation belongs to no
    /// class.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Special => Self::Special.symbols().contains(c),
        }
    }

    /// Classifies `c`, returning the class it belongs to, if any.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}
