use crate::chain::encrypt;
use crate::cli::validate_output;
use crate::error::Result;
use crate::keyfile::read_key_file;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    /// Write the ciphertext here instead of returning it for display
    pub output: Option<PathBuf>,
}

/// Encrypt a text file with the steps from a key file.
/// Returns the ciphertext; it is also written to `options.output` if set.
pub fn encrypt_file(input_path: &Path, key_path: &Path, options: &EncryptOptions) -> Result<String> {
    if let Some(output) = &options.output {
        validate_output(output)?;
    }
    let plaintext = std::fs::read_to_string(input_path)?;
    let steps = read_key_file(key_path)?;

    let ciphertext = encrypt(&plaintext, &steps)?;

    if let Some(output) = &options.output {
        std::fs::write(output, &ciphertext)?;
    }
    info!(steps = steps.len(), chars = ciphertext.chars().count(), "encrypted");
    Ok(ciphertext)
}
