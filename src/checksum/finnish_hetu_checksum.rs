use crate::checksum::CheckDigitAlgorithm;

pub struct FinnishHetuChecksum;

pub(crate) const CONTROL_CHARS: &str = "0123456789ABCDEFHJKLMNPRSTUVWXY";

impl CheckDigitAlgorithm for FinnishHetuChecksum {
    type CheckDigit = char;

    fn compute(&self, payload: &[u32]) -> Option<char> {
        /*
         * The payload is DDMMYYZZZ, read as a single 9-digit number.
         * The remainder of that number divided by 31 indexes into CONTROL_CHARS, which skips
         * the letters G, I, O, Q and Z.
         */
        if payload.len() != 9 {
            return None;
        }

        let number = payload.iter().fold(0u32, |acc, digit| acc * 10 + digit);
        let remainder = (number % 31) as usize;

        CONTROL_CHARS.as_bytes().get(remainder).map(|c| *c as char)
    }
}
