//! The fixed password policy.
//!
//! These constants are shared by the generator and the validator: generated
//! passwords always use the maximum policy length, and candidates are only
//! accepted inside the inclusive length band.

/// Number of decimal digits in a generated one-time password.
pub const OTP_LENGTH: usize = 6;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum accepted password length, in characters. Generated passwords are
/// always exactly this long.
pub const MAX_PASSWORD_LENGTH: usize = 14;
