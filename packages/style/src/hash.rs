//! Deterministic class-name hashing

const SEED: u32 = 5381;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash a serialized style rule into a short base-36 string.
///
/// djb2-style: starting from 5381, each UTF-16 code unit is folded in from
/// the end of the string with `h = (h * 33) ^ unit` in wrapping 32-bit
/// arithmetic. Not collision free; only used to derive stable class names.
pub fn hash(input: &str) -> String {
    let mut value = SEED;
    let mut units = [0u16; 2];

    for ch in input.chars().rev() {
        for unit in ch.encode_utf16(&mut units).iter().rev() {
            value = value.wrapping_mul(33) ^ u32::from(*unit);
        }
    }

    to_base36(value)
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(7);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // Only ASCII digits were pushed
    String::from_utf8(digits).unwrap_or_default()
}
