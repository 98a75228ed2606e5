//! BN254 scalar field helpers
//!
//! The hash engine works on field elements; trade terms arrive as `u64` and
//! commitments travel as hex strings. Hex output is lowercase, unprefixed and
//! without leading zeros, matching `BigInt.toString(16)` on the web side.

use crate::error::{GridCommitError, Result};
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};

/// Field element the hash engine consumes and produces
pub type Field = Fr;

/// Embed an unsigned integer (always below the modulus)
pub fn from_u64(value: u64) -> Field {
    Field::from(value)
}

/// Canonical 32-byte big-endian encoding
pub fn to_be_bytes(value: &Field) -> [u8; 32] {
    let bytes = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    let offset = 32 - bytes.len();
    out[offset..].copy_from_slice(&bytes);
    out
}

/// Minimal lowercase hex
pub fn to_hex(value: &Field) -> String {
    let encoded = hex::encode(to_be_bytes(value));
    let trimmed = encoded.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse hex (optional `0x`, any length up to 64 digits) into a canonical
/// field element. Values at or above the modulus are rejected.
pub fn from_hex(hex_str: &str) -> Result<Field> {
    let trimmed = hex_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(GridCommitError::InvalidInput(
            "empty field element".to_string(),
        ));
    }
    if digits.len() > 64 {
        return Err(GridCommitError::InvalidInput(format!(
            "field element too long: {} hex digits",
            digits.len()
        )));
    }

    let padded = format!("{:0>64}", digits);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&padded, &mut bytes)?;

    let value = Field::from_be_bytes_mod_order(&bytes);
    if to_be_bytes(&value) != bytes {
        return Err(GridCommitError::InvalidInput(format!(
            "{} is not a canonical field element",
            hex_str
        )));
    }
    Ok(value)
}
