use crate::error::Result;
use crate::pipeline::{
    caesar_forward, caesar_inverse, reverse_forward, reverse_inverse, vigenere_forward,
    vigenere_inverse,
};
use crate::step::{TransformationList, TransformationStep};
use tracing::debug;

/// Check every step before any text is touched
pub fn validate(steps: &TransformationList) -> Result<()> {
    steps.iter().try_for_each(TransformationStep::validate)
}

/// Apply each step's forward transform in list order
pub fn encrypt(text: &str, steps: &TransformationList) -> Result<String> {
    validate(steps)?;
    let mut current = text.to_string();
    for (index, step) in steps.iter().enumerate() {
        debug!(index, kind = %step.kind(), "applying forward transform");
        current = apply_forward(&current, step)?;
    }
    Ok(current)
}

/// Undo `encrypt`: walk the list backwards applying each inverse
pub fn decrypt(text: &str, steps: &TransformationList) -> Result<String> {
    validate(steps)?;
    let mut current = text.to_string();
    for (index, step) in steps.iter().enumerate().rev() {
        debug!(index, kind = %step.kind(), "applying inverse transform");
        current = apply_inverse(&current, step)?;
    }
    Ok(current)
}

fn apply_forward(text: &str, step: &TransformationStep) -> Result<String> {
    match step {
        TransformationStep::Caesar { shift } => Ok(caesar_forward(text, *shift)),
        TransformationStep::Reverse => Ok(reverse_forward(text)),
        TransformationStep::Vigenere { key } => vigenere_forward(text, key),
    }
}

fn apply_inverse(text: &str, step: &TransformationStep) -> Result<String> {
    match step {
        TransformationStep::Caesar { shift } => Ok(caesar_inverse(text, *shift)),
        TransformationStep::Reverse => Ok(reverse_inverse(text)),
        TransformationStep::Vigenere { key } => vigenere_inverse(text, key),
    }
}
