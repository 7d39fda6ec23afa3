use crate::checksum::{weighted_sum, CheckDigitAlgorithm};

pub struct IcelandKennitalaChecksum;

const MULTIPLIERS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

impl CheckDigitAlgorithm for IcelandKennitalaChecksum {
    type CheckDigit = u32;

    fn compute(&self, payload: &[u32]) -> Option<u32> {
        // payload is DDMMYYNN
        if payload.len() != MULTIPLIERS.len() {
            return None;
        }

        match weighted_sum(payload, &MULTIPLIERS) % 11 {
            0 => Some(0),
            // would be 10, which is never issued
            1 => None,
            remainder => Some(11 - remainder),
        }
    }
}
