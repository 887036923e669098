pub mod decrypt;
pub mod encrypt;
pub mod generate;
pub mod info;

pub use decrypt::*;
pub use encrypt::*;
pub use generate::*;
pub use info::*;

use crate::error::{CloakError, Result};
use std::path::Path;

/// Require a file argument that was given and exists
pub fn validate_file<'a>(path: Option<&'a Path>, name: &str) -> Result<&'a Path> {
    let path = path.ok_or_else(|| CloakError::Usage(format!("{} file not provided", name)))?;
    if !path.is_file() {
        return Err(CloakError::Usage(format!("{} file not found", name)));
    }
    Ok(path)
}

/// Reject an output path whose parent directory is missing, or that names a
/// directory, before any work is done
pub fn validate_output(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if path.is_dir() || !parent.is_dir() {
        return Err(CloakError::Usage(format!(
            "cannot write to '{}'",
            path.display()
        )));
    }
    Ok(())
}
