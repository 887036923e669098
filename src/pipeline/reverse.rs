/// Reverse the codepoint order of `text`
pub fn reverse_forward(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reversal is an involution, so the inverse is the same walk
pub fn reverse_inverse(text: &str) -> String {
    reverse_forward(text)
}
