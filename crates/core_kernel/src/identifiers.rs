//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are sequence numbers rendered with a letter prefix and
//! zero-padded to three digits (`C001`, `L012`). Wider sequences simply
//! grow (`C1000`). Newtype wrappers keep claim and lecturer identifiers
//! from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier string cannot be parsed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid {kind} identifier: {value}")]
pub struct IdParseError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal, $kind:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from its sequence number
            pub fn new(sequence: u32) -> Self {
                Self(sequence)
            }

            /// Returns the sequence number
            pub fn sequence(&self) -> u32 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{:03}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let invalid = || IdParseError {
                    kind: $kind,
                    value: s.to_string(),
                };
                let digits = s.trim().strip_prefix($prefix).ok_or_else(invalid)?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                digits.parse().map(Self).map_err(|_| invalid())
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.to_string()
            }
        }
    };
}

define_id!(ClaimId, "C", "claim");
define_id!(LecturerId, "L", "lecturer");
