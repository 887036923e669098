use crate::error::{CloakError, Result};
use std::fmt;

/// Transformation kinds understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    Caesar,
    Reverse,
    Vigenere,
}

impl TransformationKind {
    /// All kinds, in menu order
    pub const ALL: [TransformationKind; 3] = [Self::Caesar, Self::Reverse, Self::Vigenere];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Reverse => "reverse",
            Self::Vigenere => "vigenere",
        }
    }
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for TransformationKind {
    type Err = CloakError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "caesar" => Ok(Self::Caesar),
            "reverse" => Ok(Self::Reverse),
            "vigenere" => Ok(Self::Vigenere),
            _ => Err(CloakError::UnknownKind(s.to_string())),
        }
    }
}

/// One pipeline stage with its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformationStep {
    /// Shift every codepoint by a fixed amount
    Caesar { shift: i64 },
    /// Reverse codepoint order
    Reverse,
    /// Shift by the codepoints of a cycling key
    Vigenere { key: String },
}

impl TransformationStep {
    pub fn caesar(shift: i64) -> Self {
        Self::Caesar { shift }
    }

    pub fn reverse() -> Self {
        Self::Reverse
    }

    /// Build a Vigenère step, rejecting an empty key
    pub fn vigenere(key: impl Into<String>) -> Result<Self> {
        let step = Self::Vigenere { key: key.into() };
        step.validate()?;
        Ok(step)
    }

    pub fn kind(&self) -> TransformationKind {
        match self {
            Self::Caesar { .. } => TransformationKind::Caesar,
            Self::Reverse => TransformationKind::Reverse,
            Self::Vigenere { .. } => TransformationKind::Vigenere,
        }
    }

    /// Check the step is well-formed for its kind
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Vigenere { key } if key.is_empty() => Err(CloakError::Configuration(
                "vigenere key must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TransformationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caesar { shift } => write!(f, "type - caesar, key - {}", shift),
            Self::Reverse => write!(f, "type - reverse, key - None"),
            Self::Vigenere { key } => write!(f, "type - vigenere, key - {}", key),
        }
    }
}

/// Ordered, immutable list of steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationList {
    steps: Vec<TransformationStep>,
}

impl TransformationList {
    pub fn new(steps: Vec<TransformationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[TransformationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransformationStep> {
        self.steps.iter()
    }
}

impl From<Vec<TransformationStep>> for TransformationList {
    fn from(steps: Vec<TransformationStep>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<TransformationStep> for TransformationList {
    fn from_iter<I: IntoIterator<Item = TransformationStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransformationList {
    type Item = &'a TransformationStep;
    type IntoIter = std::slice::Iter<'a, TransformationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
