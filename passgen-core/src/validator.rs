// File:    validator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Validates candidate passwords against the fixed password policy.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Validation of candidate passwords against the fixed policy.

use log::debug;

use crate::alphabet::CharClass;
use crate::error::Error;
use crate::policy::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Checks whether `candidate` satisfies the password policy.
///
/// A valid password is 8 to 14 characters long and contains at least one
/// uppercase letter, one lowercase letter, one digit, and one of the ten
/// accepted special characters. Characters outside all four classes are
/// ignored: they neither satisfy nor violate any rule on their own.
///
/// A `false` result is a normal outcome, not a failure; use
/// [`require_valid_password`] for an error-returning variant. The function
/// is pure: no shared state, and the same verdict for the same input every
/// time.
#[must_use]
pub fn validate_password(candidate: &str) -> bool {
    let length = candidate.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        debug!(
            "candidate rejected: length {length} outside {MIN_PASSWORD_LENGTH}..={MAX_PASSWORD_LENGTH}"
        );
        return false;
    }

    let mut has_uppercase = false;
    let mut has_lowercase = false;
    let mut has_digit = false;
    let mut has_special = false;
    for c in candidate.chars() {
        match CharClass::of(c) {
            Some(CharClass::Uppercase) => has_uppercase = true,
            Some(CharClass::Lowercase) => has_lowercase = true,
            Some(CharClass::Digit) => has_digit = true,
            Some(CharClass::Special) => has_special = true,
            None => {}
        }
    }

    let satisfied = has_uppercase && has_lowercase && has_digit && has_special;
    if !satisfied {
        debug!("candidate rejected: at least one required character class is missing");
    }
    satisfied
}

/// Error-returning variant of [`validate_password`].
///
/// # Errors
///
/// Returns [`Error::InvalidPasswordRequirements`] exactly when
/// [`validate_password`] would return `false`; there are no additional
/// failure conditions.
pub fn require_valid_password(candidate: &str) -> Result<(), Error> {
    if validate_password(candidate) {
        Ok(())
    } else {
        Err(Error::InvalidPasswordRequirements)
    }
}
