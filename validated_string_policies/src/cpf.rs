//! Brazilian individual taxpayer numbers (CPF)
//!
//! A CPF is eleven decimal digits, the last two being mod-11 check digits.
//! Any punctuation in the input (such as `529.982.247-25`) is discarded; the
//! stored form is the bare eleven digits.

use std::borrow::Cow;

use validated_string::{policy, Validator};

const LENGTH: usize = 11;

/// Policy for CPF numbers
#[policy(name = "CPF", alias = "Cpf")]
#[derive(Debug)]
pub enum CpfPolicy {}

impl Validator for CpfPolicy {
    fn validate(raw: &str) -> Option<Cow<'_, str>> {
        let digits: Vec<u8> = raw
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        if digits.len() != LENGTH || digits.iter().all(|&d| d == digits[0]) {
            return None;
        }

        if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
            return None;
        }

        if raw.len() == LENGTH {
            Some(Cow::Borrowed(raw))
        } else {
            Some(Cow::Owned(digits.iter().map(|&d| char::from(b'0' + d)).collect()))
        }
    }
}

/// Computes the mod-11 check digit for a run of CPF digits
///
/// The weights descend from `digits.len() + 1` to 2. The first check digit is
/// computed over the first nine digits, the second over the first ten.
pub fn check_digit(digits: &[u8]) -> u8 {
    let sum: usize = digits
        .iter()
        .zip((2..=digits.len() + 1).rev())
        .map(|(&d, weight)| usize::from(d) * weight)
        .sum();

    match 11 - sum % 11 {
        digit @ 0..=9 => digit as u8,
        _ => 0,
    }
}

/// Generates a random, valid CPF
#[cfg(feature = "random")]
pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Cpf {
    loop {
        let mut digits: Vec<u8> = (0..9).map(|_| rng.gen_range(0..10)).collect();
        digits.push(check_digit(&digits));
        digits.push(check_digit(&digits));

        let raw: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        // Only a run of identical digits is rejected here.
        if let Some(cpf) = Cpf::new(&raw) {
            return cpf;
        }
    }
}
