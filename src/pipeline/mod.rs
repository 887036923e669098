pub mod caesar;
pub mod reverse;
pub mod vigenere;

pub use caesar::*;
pub use reverse::*;
pub use vigenere::*;

/// Shift arithmetic modulus, just below the surrogate block (0xD800-0xDFFF)
pub const MODULUS: u32 = 0xD7FF;

/// Reduce any integer shift into `[0, MODULUS)`
pub fn reduce_shift(shift: i64) -> u32 {
    shift.rem_euclid(MODULUS as i64) as u32
}

/// The shift that undoes `shift` (both already reduced)
pub fn invert_shift(shift: u32) -> u32 {
    (MODULUS - shift) % MODULUS
}

/// Shift a single codepoint by an already-reduced amount.
///
/// Codepoints at or above `MODULUS` are passed through unchanged so that
/// every Unicode text survives a round trip.
pub fn shift_char(c: char, shift: u32) -> char {
    let code = c as u32;
    if code >= MODULUS {
        return c;
    }
    let shifted = (code + shift) % MODULUS;
    // everything below MODULUS is a scalar value
    char::from_u32(shifted).unwrap_or(c)
}
