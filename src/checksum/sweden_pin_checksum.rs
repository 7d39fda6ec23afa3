use crate::checksum::{sum_all_digits, CheckDigitAlgorithm};

pub struct SwedenPinChecksum;

const MULTIPLIERS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

impl CheckDigitAlgorithm for SwedenPinChecksum {
    type CheckDigit = u32;

    fn compute(&self, payload: &[u32]) -> Option<u32> {
        /*
         * The payload is YYMMDDNNN, with 60 already added to DD for coordination numbers.
         * Every digit is multiplied by a multiplier from the MULTIPLIERS array and the digits
         * of each product are summed up. The check digit brings the total to a multiple of 10.
         */
        if payload.len() != MULTIPLIERS.len() {
            return None;
        }

        let total: u32 = payload
            .iter()
            .zip(MULTIPLIERS)
            .map(|(digit, multiplier)| sum_all_digits(digit * multiplier))
            .sum();

        Some((10 - (total % 10)) % 10)
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_swedish_pins() {
        let swedish_pins = vec![
            "670919-9530",
            "811228-9874",
            "790315-0667",
            // coordination number
            "200374-4352",
        ];
        for pin in swedish_pins {
            let all = digits(pin);
            let (payload, check) = all.split_at(9);
            assert!(SwedenPinChecksum.verify(payload, check[0]), "{pin}");
        }
    }

    #[test]
    fn test_invalid_swedish_pins() {
        let invalid_swedish_pins = vec!["811228-9873", "670919-9539", "190228-4048"];
        for pin in invalid_swedish_pins {
            let all = digits(pin);
            let (payload, check) = all.split_at(9);
            assert!(!SwedenPinChecksum.verify(payload, check[0]), "{pin}");
        }
    }

    #[test]
    fn wrong_payload_length() {
        assert_eq!(SwedenPinChecksum.compute(&digits("79031506")), None);
        assert_eq!(SwedenPinChecksum.compute(&digits("1979031506")), None);
    }
}
