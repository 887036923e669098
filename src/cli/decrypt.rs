use crate::chain::decrypt;
use crate::cli::validate_output;
use crate::error::Result;
use crate::keyfile::read_key_file;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub output: Option<PathBuf>,
}

/// Decrypt a text file produced by `encrypt_file` with the same key file
pub fn decrypt_file(input_path: &Path, key_path: &Path, options: &DecryptOptions) -> Result<String> {
    if let Some(output) = &options.output {
        validate_output(output)?;
    }
    let ciphertext = std::fs::read_to_string(input_path)?;
    let steps = read_key_file(key_path)?;

    let plaintext = decrypt(&ciphertext, &steps)?;

    if let Some(output) = &options.output {
        std::fs::write(output, &plaintext)?;
    }
    info!(steps = steps.len(), chars = plaintext.chars().count(), "decrypted");
    Ok(plaintext)
}
