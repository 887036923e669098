use super::{invert_shift, reduce_shift, shift_char};
use crate::error::{CloakError, Result};

/// Shift each codepoint by the codepoint of the key character at the same
/// position, cycling through the key. The cycle starts at index 0 on every
/// call and advances once per text codepoint.
pub fn vigenere_forward(text: &str, key: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    Ok(apply_cycle(text, &shifts))
}

/// Exact inverse of [`vigenere_forward`] under the same key
pub fn vigenere_inverse(text: &str, key: &str) -> Result<String> {
    let shifts: Vec<u32> = key_shifts(key)?.into_iter().map(invert_shift).collect();
    Ok(apply_cycle(text, &shifts))
}

fn key_shifts(key: &str) -> Result<Vec<u32>> {
    if key.is_empty() {
        return Err(CloakError::Configuration(
            "vigenere key must not be empty".into(),
        ));
    }
    Ok(key.chars().map(|k| reduce_shift(k as i64)).collect())
}

fn apply_cycle(text: &str, shifts: &[u32]) -> String {
    text.chars()
        .zip(shifts.iter().cycle())
        .map(|(c, &shift)| shift_char(c, shift))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::MODULUS;

    #[test]
    fn test_vigenere_uses_key_codepoints() {
        // 'a' is 97, '\u{1}' is 1
        let out = vigenere_forward("\0\0\0", "a\u{1}").unwrap();
        let codes: Vec<u32> = out.chars().map(|c| c as u32).collect();
        assert_eq!(codes, vec![97, 1, 97]);
    }

    #[test]
    fn test_vigenere_cycle_position() {
        let key = "abc";
        let text = "\0".repeat(7);
        let out = vigenere_forward(&text, key).unwrap();
        let key_chars: Vec<char> = key.chars().collect();
        for (p, c) in out.chars().enumerate() {
            assert_eq!(c, key_chars[p % key_chars.len()]);
        }
    }

    #[test]
    fn test_vigenere_restarts_each_call() {
        let first = vigenere_forward("\0\0", "xyz").unwrap();
        let second = vigenere_forward("\0\0", "xyz").unwrap();
        assert_eq!(first, "xy");
        assert_eq!(second, "xy");
    }

    #[test]
    fn test_vigenere_roundtrip() {
        let text = "Attack at dawn! ñ 😀";
        let cipher = vigenere_forward(text, "lemon").unwrap();
        assert_ne!(cipher, text);
        assert_eq!(vigenere_inverse(&cipher, "lemon").unwrap(), text);
    }

    #[test]
    fn test_vigenere_wraps_modulus() {
        let top = char::from_u32(MODULUS - 1).unwrap().to_string();
        let out = vigenere_forward(&top, "\u{2}").unwrap();
        assert_eq!(out.chars().next().unwrap() as u32, 1);
    }

    #[test]
    fn test_vigenere_out_of_range_advances_index() {
        let out = vigenere_forward("\0😀\0", "ab").unwrap();
        assert_eq!(out, "a😀a");
        assert_eq!(vigenere_inverse(&out, "ab").unwrap(), "\0😀\0");
    }

    #[test]
    fn test_vigenere_empty_key_rejected() {
        assert!(matches!(vigenere_forward("abc", ""), Err(CloakError::Configuration(_))));
        assert!(matches!(vigenere_inverse("abc", ""), Err(CloakError::Configuration(_))));
        // rejected even when there is nothing to process
        assert!(vigenere_forward("", "").is_err());
    }

    #[test]
    fn test_vigenere_empty_text() {
        assert_eq!(vigenere_forward("", "key").unwrap(), "");
    }
}
