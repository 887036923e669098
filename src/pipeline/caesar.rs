use super::{invert_shift, reduce_shift, shift_char};

/// Shift every codepoint by `shift`, modulo `MODULUS`
pub fn caesar_forward(text: &str, shift: i64) -> String {
    apply_shift(text, reduce_shift(shift))
}

/// Exact inverse of [`caesar_forward`] for the same shift
pub fn caesar_inverse(text: &str, shift: i64) -> String {
    apply_shift(text, invert_shift(reduce_shift(shift)))
}

fn apply_shift(text: &str, shift: u32) -> String {
    if shift == 0 {
        return text.to_string();
    }
    text.chars().map(|c| shift_char(c, shift)).collect()
}
