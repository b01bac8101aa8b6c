#![allow(missing_docs)]
use std::collections::VecDeque;

use passgen_core::alphabet::CharClass;
use passgen_core::error::Error;
use passgen_core::generator::PasswordGenerator;
use passgen_core::policy::{MAX_PASSWORD_LENGTH, OTP_LENGTH};
use passgen_core::random::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Replays a fixed script of draw results, checking every requested bound.
struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    fn new(values: &[usize]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.values.pop_front().expect("draw script exhausted");
        assert!(
            value < bound,
            "scripted value {value} does not fit bound {bound}"
        );
        value
    }
}

impl RandomSource for &mut ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        RandomSource::next_index(&mut **self, bound)
    }
}

#[test]
fn otp_is_six_decimal_digits() {
    let mut generator = PasswordGenerator::new(StdRng::seed_from_u64(17));
    for _ in 0..100 {
        let otp = generator.generate_otp();
        assert_eq!(otp.chars().count(), OTP_LENGTH);
        assert!(
            otp.chars().all(|c| c.is_ascii_digit()),
            "non-digit in OTP {otp:?}"
        );
    }
}

#[test]
fn otp_preserves_draw_order_and_leading_zeros() {
    let mut generator = PasswordGenerator::new(ScriptedSource::new(&[3, 1, 4, 1, 5, 9]));
    assert_eq!(generator.generate_otp(), "314159");

    let mut generator = PasswordGenerator::new(ScriptedSource::new(&[0, 0, 0, 1, 2, 3]));
    assert_eq!(generator.generate_otp(), "000123");
}

#[test]
fn otp_consumes_one_draw_per_digit() {
    let script = vec![9; OTP_LENGTH];
    let mut source = ScriptedSource::new(&script);
    let otp = PasswordGenerator::new(&mut source).generate_otp();
    assert_eq!(otp, "999999");
    assert!(source.is_exhausted());
}

#[test]
fn password_is_fourteen_characters_from_the_fixed_alphabets() {
    let mut generator = PasswordGenerator::new(StdRng::seed_from_u64(18));
    for _ in 0..100 {
        let password = generator.generate_password();
        assert_eq!(password.chars().count(), MAX_PASSWORD_LENGTH);
        for c in password.chars() {
            assert!(CharClass::of(c).is_some(), "{c:?} is outside every alphabet");
        }
    }
}

#[test]
fn password_applies_the_fixed_class_mapping() {
    // Pairs of (class selector, symbol index) for all 14 positions.
    let script = [
        0, 0, 0, 25, 1, 0, 1, 25, 2, 0, 2, 9, 3, 0, 3, 9, 0, 1, 1, 1, 2, 1, 3, 1, 0, 2, 1, 2,
    ];
    let mut generator = PasswordGenerator::new(ScriptedSource::new(&script));
    assert_eq!(generator.generate_password(), "AZaz09!-Bb1@Cc");
}

#[test]
fn password_consumes_exactly_two_draws_per_position() {
    let script = vec![0; MAX_PASSWORD_LENGTH * 2];
    let mut source = ScriptedSource::new(&script);
    let password = PasswordGenerator::new(&mut source).generate_password();
    assert_eq!(password.chars().count(), MAX_PASSWORD_LENGTH);
    assert!(
        source.is_exhausted(),
        "password generation should take two draws per position"
    );
}

#[test]
fn seeded_generators_are_deterministic() {
    let mut first = PasswordGenerator::new(StdRng::seed_from_u64(42));
    let mut second = PasswordGenerator::new(StdRng::seed_from_u64(42));
    assert_eq!(first.generate_otp(), second.generate_otp());
    assert_eq!(first.generate_password(), second.generate_password());
}

#[test]
fn checked_draws_reject_a_zero_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(rng.try_next_index(0), Err(Error::InvalidBound));
}

#[test]
fn checked_draws_stay_below_the_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    for bound in 1..=64 {
        let value = rng.try_next_index(bound).expect("positive bound");
        assert!(value < bound);
    }
}
