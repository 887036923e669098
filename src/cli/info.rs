use crate::error::Result;
use crate::keyfile::{fingerprint, read_key_file};
use crate::step::TransformationStep;
use std::path::Path;

/// Describe the steps stored in a key file
pub fn show_info(key_path: &Path) -> Result<String> {
    let steps = read_key_file(key_path)?;

    let mut output = String::new();
    output.push_str("Key File Information\n");
    output.push_str("====================\n\n");
    output.push_str(&format!("File: {}\n", key_path.display()));
    output.push_str(&format!("Steps: {}\n", steps.len()));
    output.push_str(&format!("Fingerprint (SHA-256): {}\n", fingerprint(&steps)?));

    if !steps.is_empty() {
        output.push_str("\nApplication order:\n");
    }
    for (i, step) in steps.iter().enumerate() {
        let detail = match step {
            TransformationStep::Caesar { shift } => format!("shift {}", shift),
            TransformationStep::Reverse => String::from("-"),
            TransformationStep::Vigenere { key } => {
                format!("key {:?} ({} chars)", key, key.chars().count())
            }
        };
        output.push_str(&format!("  {}. {:<8} {}\n", i + 1, step.kind(), detail));
    }

    Ok(output)
}
