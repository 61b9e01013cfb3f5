//! Fixed-width opaque identifiers for elections and proposals.
//!
//! A `Name` is always exactly 32 bytes. Text is stored as its UTF-8 bytes
//! right-padded with zeros; two names are equal only if every byte matches,
//! so padding and case are significant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// Width of every name in bytes.
pub const NAME_LEN: usize = 32;

/// Length of the `0x`-prefixed hex form of a name.
const HEX_FORM_LEN: usize = 2 + NAME_LEN * 2;

/// A 32-byte election or proposal name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name([u8; NAME_LEN]);

impl Name {
    pub const ZERO: Self = Self([0u8; NAME_LEN]);

    pub fn new(bytes: [u8; NAME_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }

    /// Encode UTF-8 text, right-padded with zero bytes.
    pub fn from_text(text: &str) -> Result<Self, NameError> {
        let raw = text.as_bytes();
        if raw.len() > NAME_LEN {
            return Err(NameError::TooLong { len: raw.len() });
        }
        let mut bytes = [0u8; NAME_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self(bytes))
    }

    /// Decode the `0x` + 64 hex digit form.
    pub fn from_hex(s: &str) -> Result<Self, NameError> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| NameError::InvalidHex(s.to_string()))?;
        if digits.len() != NAME_LEN * 2 {
            return Err(NameError::InvalidLength { len: digits.len() });
        }
        let mut bytes = [0u8; NAME_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| NameError::InvalidHex(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// The `0x`-prefixed hex form of all 32 bytes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// The text form with trailing zero padding removed, if the bytes are UTF-8.
    pub fn to_text(&self) -> Option<&str> {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1);
        std::str::from_utf8(&self.0[..end]).ok()
    }
}

impl FromStr for Name {
    type Err = NameError;

    /// `0x` followed by 64 hex digits is the hex form; anything else is text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == HEX_FORM_LEN && s.starts_with("0x") {
            Self::from_hex(s)
        } else {
            Self::from_text(s)
        }
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) => f.write_str(text),
            None => f.write_str(&self.to_hex()),
        }
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
