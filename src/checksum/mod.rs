mod denmark_cpr_checksum;
mod finnish_hetu_checksum;
mod iceland_kennitala_checksum;
mod norway_birth_number_checksum;
mod sweden_pin_checksum;

pub use crate::checksum::denmark_cpr_checksum::DenmarkCprChecksum;
pub use crate::checksum::finnish_hetu_checksum::FinnishHetuChecksum;
pub use crate::checksum::iceland_kennitala_checksum::IcelandKennitalaChecksum;
pub use crate::checksum::norway_birth_number_checksum::NorwayBirthNumberChecksum;
pub use crate::checksum::sweden_pin_checksum::SwedenPinChecksum;

/// A check-digit scheme over a fixed-length decimal payload.
pub trait CheckDigitAlgorithm: Send + Sync {
    type CheckDigit: Copy + PartialEq;

    /// Derives the check digit(s) from `payload`. Returns `None` when the payload has the
    /// wrong length or the scheme has no representable check value for it.
    fn compute(&self, payload: &[u32]) -> Option<Self::CheckDigit>;

    fn verify(&self, payload: &[u32], check_digit: Self::CheckDigit) -> bool {
        self.compute(payload) == Some(check_digit)
    }
}

/// Decimal digits of `input`, ignoring any non-digit character.
pub fn digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Appends the `width` least significant decimal digits of `value`, most significant first.
pub(crate) fn push_digits(out: &mut Vec<u32>, value: u32, width: u32) {
    for exponent in (0..width).rev() {
        out.push(value / 10u32.pow(exponent) % 10);
    }
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

#[inline]
fn weighted_sum(payload: &[u32], weights: &[u32]) -> u32 {
    payload
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum()
}
