//! Cryptographic types for GridCommit

use crate::error::Result;
use crate::types::TradeParameters;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::field::{self, Field};

/// Single-use random value mixed into a commitment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salt(pub u64);

impl Salt {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field-element newtypes that travel as minimal hex strings
macro_rules! hex_field_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub Field);

        impl $name {
            pub fn from_field(value: Field) -> Self {
                $name(value)
            }

            pub fn as_field(&self) -> &Field {
                &self.0
            }

            /// Lowercase hex without prefix or leading zeros
            pub fn to_hex(&self) -> String {
                field::to_hex(&self.0)
            }

            /// Parse from hex, rejecting values outside the field
            pub fn from_hex(hex_str: &str) -> Result<Self> {
                field::from_hex(hex_str).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let hex_str = String::deserialize(deserializer)?;
                $name::from_hex(&hex_str).map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_field_type!(
    /// Hash binding the trade terms and salt: H(amount, minPrice, maxPrice, salt)
    Commitment
);

hex_field_type!(
    /// One-time tag derived from a commitment: H(commitment, nonce).
    ///
    /// Nothing records issued nullifiers, so reuse is not detected.
    Nullifier
);

/// Everything a trade proof produces, held by the caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    pub commitment: Commitment,
    pub nullifier: Nullifier,
    pub salt: Salt,
    pub values: TradeParameters,
}
