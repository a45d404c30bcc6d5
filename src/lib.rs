pub mod input;
pub mod report;

mod error;

pub use error::ReportError;

pub mod rule_uuid {
    pub const RULE_UUID_LEN: usize = 36;

    pub const SEPARATOR_OFFSETS: [usize; 4] = [8, 13, 18, 23];

    pub const HEX_PAIR_OFFSETS: [usize; 16] =
        [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

    const X: u8 = 0xFF;

    /// Value of a byte as a hexadecimal digit, or `0xFF` if it is not one.
    pub const HEX_VALUES: [u8; 256] = {
        let mut table = [X; 256];
        let mut i = 0;
        while i < 10 {
            table[b'0' as usize + i] = i as u8;
            i += 1;
        }
        let mut i = 0;
        while i < 6 {
            table[b'a' as usize + i] = 10 + i as u8;
            table[b'A' as usize + i] = 10 + i as u8;
            i += 1;
        }
        table
    };

    pub fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
        let h = HEX_VALUES[hi as usize];
        let l = HEX_VALUES[lo as usize];
        if h == X || l == X {
            return None;
        }
        Some((h << 4) | l)
    }

    /// Accepts exactly `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` with hex digits in either case.
    pub fn is_valid_rule_uuid(s: &str) -> bool {
        let b = s.as_bytes();
        if b.len() != RULE_UUID_LEN {
            return false;
        }
        if SEPARATOR_OFFSETS.iter().any(|&i| b[i] != b'-') {
            return false;
        }
        HEX_PAIR_OFFSETS
            .iter()
            .all(|&i| decode_hex_pair(b[i], b[i + 1]).is_some())
    }
}
