use crate::checksum::{weighted_sum, CheckDigitAlgorithm};

/// Historical CPR check digit. Numbers issued from 2007-10-01 onwards may not satisfy it.
pub struct DenmarkCprChecksum;

const MULTIPLIERS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

impl CheckDigitAlgorithm for DenmarkCprChecksum {
    type CheckDigit = u32;

    fn compute(&self, payload: &[u32]) -> Option<u32> {
        // payload is DDMMYYCNN, C being the century digit
        if payload.len() != MULTIPLIERS.len() {
            return None;
        }

        let sum = weighted_sum(payload, &MULTIPLIERS);
        Some((10 - (sum % 10)) % 10)
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn valid_cpr_numbers() {
        let all = digits("211062-5629");
        let (payload, check) = all.split_at(9);
        assert!(DenmarkCprChecksum.verify(payload, check[0]));
    }

    #[test]
    fn invalid_cpr_numbers() {
        let invalid = vec!["211062-5628", "220537-4218", "111111-1118"];
        for number in invalid {
            let all = digits(number);
            let (payload, check) = all.split_at(9);
            assert!(!DenmarkCprChecksum.verify(payload, check[0]), "{number}");
        }
    }
}
