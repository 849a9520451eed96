//! Random strings and number padding

use crate::math::random_int;

/// Builds a string of `len` characters, each picked at random from `dict`.
///
/// Returns an empty string when `dict` is empty.
pub fn random_string_from(dict: &str, len: usize) -> String {
    let chars: Vec<char> = dict.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let last = chars.len() as i64 - 1;
    (0..len)
        .map(|_| chars[random_int(0, last) as usize])
        .collect()
}

/// Prefixes a `0` to numbers below ten: `7` → `"07"`, `1.3` → `"01.3"`, `24` → `"24"`
pub fn zero_pad(num: f64) -> String {
    if num < 10.0 {
        format!("0{}", num)
    } else {
        num.to_string()
    }
}
