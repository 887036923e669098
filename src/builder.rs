use crate::error::{CloakError, Result};
use crate::step::{TransformationKind, TransformationList, TransformationStep};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Bounds offered for Caesar shifts at the prompt
pub const CAESAR_MIN: u64 = 1;
pub const CAESAR_MAX: u64 = 25;

/// Length range of generated Vigenère keys
const RANDOM_KEY_LEN: std::ops::RangeInclusive<usize> = 4..=12;

/// Interactive prompt loop that yields a finished [`TransformationList`].
///
/// Reads answers line by line from `input` and writes prompts and
/// diagnostics to `output`, so it can run against a terminal or a buffer.
pub struct KeyBuilder<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> KeyBuilder<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the prompt loop until an empty line (or end of input) at the menu
    pub fn build(mut self) -> Result<TransformationList> {
        let mut steps = Vec::new();

        loop {
            self.show_menu()?;
            let choice = self.read_int(1, TransformationKind::ALL.len() as u64, true)?;
            let Some(choice) = choice else {
                break;
            };

            let kind = TransformationKind::ALL[(choice - 1) as usize];
            let step = match kind {
                TransformationKind::Caesar => {
                    write!(self.output, "Enter the key ({}-{}): ", CAESAR_MIN, CAESAR_MAX)?;
                    self.output.flush()?;
                    match self.read_int(CAESAR_MIN, CAESAR_MAX, false)? {
                        Some(shift) => TransformationStep::caesar(shift as i64),
                        None => return Err(eof_error()),
                    }
                }
                TransformationKind::Reverse => TransformationStep::reverse(),
                TransformationKind::Vigenere => {
                    write!(self.output, "Enter the key (a word): ")?;
                    self.output.flush()?;
                    let key = self.read_non_empty()?;
                    TransformationStep::vigenere(key)?
                }
            };

            writeln!(self.output, "added: {}\n", step)?;
            debug!(kind = %step.kind(), "step added");
            steps.push(step);
        }

        Ok(TransformationList::new(steps))
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Select an encryption method (e.g. enter '1' for {})",
            TransformationKind::ALL[0]
        )?;
        writeln!(self.output, "or enter nothing to terminate\n")?;
        for (i, kind) in TransformationKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    /// One line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read an integer in `[min, max]`, re-prompting until one is given.
    /// With `can_escape`, an empty line returns `None`.
    fn read_int(&mut self, min: u64, max: u64, can_escape: bool) -> Result<Option<u64>> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None if can_escape => return Ok(None),
                None => return Err(eof_error()),
            };

            if can_escape && line.is_empty() {
                return Ok(None);
            }

            if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
                self.print_error("Integer only")?;
                continue;
            }

            // all digits, so a parse failure can only be overflow
            let value = line.parse::<u64>().unwrap_or(u64::MAX);
            if value < min {
                self.print_error(&format!("Input cannot be less than {}", min))?;
                continue;
            }
            if value > max {
                self.print_error(&format!("Input cannot be more than {}", max))?;
                continue;
            }

            return Ok(Some(value));
        }
    }

    fn read_non_empty(&mut self) -> Result<String> {
        loop {
            match self.read_line()? {
                Some(line) if line.is_empty() => self.print_error("Input cannot be empty")?,
                Some(line) => return Ok(line),
                None => return Err(eof_error()),
            }
        }
    }

    fn print_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\x1b[91m{}\x1b[00m", message)?;
        self.output.flush()?;
        Ok(())
    }
}

fn eof_error() -> CloakError {
    CloakError::InvalidInput("input ended before a key was entered".into())
}

/// Draw `count` random steps: uniform kinds, Caesar shifts in the prompt
/// range and short lowercase Vigenère keys.
pub fn random_list<G: Rng + ?Sized>(rng: &mut G, count: usize) -> TransformationList {
    (0..count)
        .map(|_| match TransformationKind::ALL[rng.gen_range(0..TransformationKind::ALL.len())] {
            TransformationKind::Caesar => {
                TransformationStep::caesar(rng.gen_range(CAESAR_MIN..=CAESAR_MAX) as i64)
            }
            TransformationKind::Reverse => TransformationStep::reverse(),
            TransformationKind::Vigenere => {
                let len = rng.gen_range(RANDOM_KEY_LEN);
                let key: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
                TransformationStep::Vigenere { key }
            }
        })
        .collect()
}
