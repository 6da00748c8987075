//! The cipher alphabet: A-Z map to 0-25, digits 0-9 map to 26-35.

pub const ALPHABET_LEN: i32 = 36;

/// Numeric value of a key symbol, or `None` for anything outside A-Z/0-9.
pub fn value_of(symbol: char) -> Option<u8> {
    match symbol {
        'A'..='Z' => Some(symbol as u8 - b'A'),
        '0'..='9' => Some(symbol as u8 - b'0' + 26),
        _ => None,
    }
}

/// Symbol for an alphabet value in `0..36`.
///
/// Values are only ever produced by [`shift`], which normalizes into range.
pub fn symbol_of(value: u8) -> char {
    if value < 26 {
        (b'A' + value) as char
    } else {
        (b'0' + value - 26) as char
    }
}

/// Applies an additive shift of any sign, normalized to `0..36`.
pub fn shift(value: u8, by: i32) -> u8 {
    (i32::from(value) + by).rem_euclid(ALPHABET_LEN) as u8
}
