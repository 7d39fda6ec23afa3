use crate::checksum::{weighted_sum, CheckDigitAlgorithm};

/// The two modulus 11 control digits of a Norwegian fødselsnummer, D-number or H-number,
/// returned as the two-digit value `k1 * 10 + k2`.
pub struct NorwayBirthNumberChecksum;

const K1_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const K2_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

impl CheckDigitAlgorithm for NorwayBirthNumberChecksum {
    type CheckDigit = u32;

    fn compute(&self, payload: &[u32]) -> Option<u32> {
        // payload is DDMMYYNNN with the D/H offsets still applied
        if payload.len() != K1_WEIGHTS.len() {
            return None;
        }

        let k1 = control_digit(weighted_sum(payload, &K1_WEIGHTS))?;

        let mut with_k1 = payload.to_vec();
        with_k1.push(k1);
        let k2 = control_digit(weighted_sum(&with_k1, &K2_WEIGHTS))?;

        Some(k1 * 10 + k2)
    }
}

// 10 and 11 have no single-digit representation
fn control_digit(sum: u32) -> Option<u32> {
    let k = 11 - (sum % 11);
    if k >= 10 {
        None
    } else {
        Some(k)
    }
}
