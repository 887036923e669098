use crate::builder::{random_list, KeyBuilder};
use crate::error::{CloakError, Result};
use crate::keyfile::write_key_list;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Options for the generate-key command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Draw this many random steps instead of prompting
    pub random: Option<usize>,
}

/// Build a key list and store it at `output_path`.
///
/// The output file is opened before any prompting so an unwritable path
/// fails early. Prompts go to `prompt_out`, answers come from `prompt_in`.
/// Returns the number of steps stored.
pub fn generate_key_file<R: BufRead, W: Write>(
    output_path: &Path,
    options: &GenerateOptions,
    prompt_in: R,
    mut prompt_out: W,
) -> Result<usize> {
    let file = File::create(output_path).map_err(|e| {
        CloakError::Usage(format!("cannot write to '{}': {}", output_path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let steps = match options.random {
        Some(count) => random_list(&mut rand::thread_rng(), count),
        None => KeyBuilder::new(prompt_in, &mut prompt_out).build()?,
    };

    write_key_list(&mut writer, &steps)?;
    writeln!(prompt_out, "key stored at '{}'", output_path.display())?;
    info!(steps = steps.len(), path = %output_path.display(), "key generated");
    Ok(steps.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyfile::read_key_file;
    use crate::step::TransformationStep;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_generate_interactive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.json");
        let mut out = Vec::new();

        let count = generate_key_file(
            &path,
            &GenerateOptions::default(),
            Cursor::new("1\n5\n2\n\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(count, 2);
        let list = read_key_file(&path).unwrap();
        assert_eq!(
            list.steps(),
            &[TransformationStep::caesar(5), TransformationStep::reverse()]
        );
        assert!(String::from_utf8(out).unwrap().contains("key stored at"));
    }

    #[test]
    fn test_generate_random() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("key.json");

        let options = GenerateOptions { random: Some(6) };
        let count = generate_key_file(&path, &options, Cursor::new(""), std::io::sink()).unwrap();

        assert_eq!(count, 6);
        assert_eq!(read_key_file(&path).unwrap().len(), 6);
    }

    #[test]
    fn test_generate_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("key.json");

        let result = generate_key_file(
            &path,
            &GenerateOptions::default(),
            Cursor::new("2\n\n"),
            std::io::sink(),
        );
        assert!(matches!(result, Err(CloakError::Usage(_))));
    }
}
