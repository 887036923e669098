//! Key files: a JSON array of `{"type": ..., "key": ...}` records, one per
//! transformation step, in application order.

use crate::error::{CloakError, Result};
use crate::pipeline::MODULUS;
use crate::step::{TransformationKind, TransformationList, TransformationStep};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::Path;

/// A step as stored on disk, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationDescriptor {
    #[serde(rename = "type", default, deserialize_with = "kind_text")]
    pub kind: String,
    #[serde(default)]
    pub key: Value,
}

impl TryFrom<&TransformationDescriptor> for TransformationStep {
    type Error = CloakError;

    fn try_from(desc: &TransformationDescriptor) -> Result<Self> {
        let kind: TransformationKind = desc.kind.parse()?;
        match kind {
            TransformationKind::Caesar => Ok(TransformationStep::caesar(caesar_shift(&desc.key)?)),
            TransformationKind::Reverse => Ok(TransformationStep::reverse()),
            TransformationKind::Vigenere => match &desc.key {
                Value::String(key) => TransformationStep::vigenere(key.as_str()),
                other => Err(CloakError::Configuration(format!(
                    "vigenere key must be a string, got {}",
                    other
                ))),
            },
        }
    }
}

impl From<&TransformationStep> for TransformationDescriptor {
    fn from(step: &TransformationStep) -> Self {
        let key = match step {
            TransformationStep::Caesar { shift } => Value::from(*shift),
            TransformationStep::Reverse => Value::Null,
            TransformationStep::Vigenere { key } => Value::from(key.as_str()),
        };
        Self {
            kind: step.kind().to_string(),
            key,
        }
    }
}

/// Any JSON value as the kind name; non-strings become their JSON text so
/// they surface as an unknown kind
fn kind_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Integer key (JSON integer, integral float or a string holding an
/// integer). Values outside `i64` are reduced modulo `MODULUS`.
fn caesar_shift(key: &Value) -> Result<i64> {
    let shift = match key {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| reduce_integer_text(&n.to_string()))
            .or_else(|| n.as_f64().and_then(integral_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| reduce_integer_text(s))
        }
        _ => None,
    };
    shift.ok_or_else(|| {
        CloakError::Configuration(format!("caesar key must be an integer, got {}", key))
    })
}

/// Optionally signed decimal digits of any length, reduced into `[0, MODULUS)`
fn reduce_integer_text(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let modulus = MODULUS as i64;
    let rem = digits
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + (b - b'0') as i64) % modulus);
    Some(if negative { (modulus - rem) % modulus } else { rem })
}

fn integral_float(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // 2^53: every integral f64 below this converts exactly
    if value.abs() < 9_007_199_254_740_992.0 {
        Some(value as i64)
    } else {
        Some(value.rem_euclid(MODULUS as f64) as i64)
    }
}

/// Convert descriptors into a validated list
pub fn from_descriptors(descriptors: &[TransformationDescriptor]) -> Result<TransformationList> {
    descriptors.iter().map(TransformationStep::try_from).collect()
}

pub fn to_descriptors(list: &TransformationList) -> Vec<TransformationDescriptor> {
    list.iter().map(TransformationDescriptor::from).collect()
}

/// Parse key-file JSON
pub fn parse_key_list(json: &str) -> Result<TransformationList> {
    let descriptors: Vec<TransformationDescriptor> = serde_json::from_str(json)?;
    from_descriptors(&descriptors)
}

/// Serialize a list to key-file JSON
pub fn to_json(list: &TransformationList) -> Result<String> {
    Ok(serde_json::to_string(&to_descriptors(list))?)
}

pub fn read_key_file(path: &Path) -> Result<TransformationList> {
    let json = fs::read_to_string(path)?;
    parse_key_list(&json)
}

/// Write a list to an already-open writer
pub fn write_key_list<W: Write>(writer: &mut W, list: &TransformationList) -> Result<()> {
    serde_json::to_writer(&mut *writer, &to_descriptors(list))?;
    writer.flush()?;
    Ok(())
}

pub fn write_key_file(path: &Path, list: &TransformationList) -> Result<()> {
    fs::write(path, to_json(list)?)?;
    Ok(())
}

/// SHA-256 of the canonical JSON encoding, hex encoded
pub fn fingerprint(list: &TransformationList) -> Result<String> {
    let json = to_json(list)?;
    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}
