//! Payload type for the instrumented cache
//!
//! The cache accepts four value shapes, modeled as an explicit sum type
//! with a per-variant encode and decode contract. The store itself only
//! ever sees bytes.

use crate::error::{CacheTraceError, Result};
use std::fmt;

/// A value accepted by [`Cache::store`](crate::cache::Cache::store)
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Raw bytes, stored as-is
    Bytes(Vec<u8>),
    /// Signed integer, stored as decimal text
    Int(i64),
    /// Floating point number, stored as decimal text
    Float(f64),
}

impl Payload {
    /// Encode the payload to the byte form written to the store
    ///
    /// Matches what Redis itself does with these types: text and bytes
    /// pass through, numbers become their decimal representation.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Payload::Text(s) => s.as_bytes().to_vec(),
            Payload::Bytes(b) => b.clone(),
            Payload::Int(i) => i.to_string().into_bytes(),
            Payload::Float(f) => f.to_string().into_bytes(),
        }
    }

    /// Decode stored bytes as UTF-8 text
    pub fn decode_text(bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| CacheTraceError::DecodeError(format!("invalid utf-8: {}", e)))
    }

    /// Decode stored bytes as a decimal integer
    pub fn decode_int(bytes: &[u8]) -> Result<i64> {
        let text = Self::decode_text(bytes)?;
        text.parse::<i64>()
            .map_err(|e| CacheTraceError::DecodeError(format!("invalid integer {:?}: {}", text, e)))
    }

    /// Decode stored bytes as a decimal float
    pub fn decode_float(bytes: &[u8]) -> Result<f64> {
        let text = Self::decode_text(bytes)?;
        text.parse::<f64>()
            .map_err(|e| CacheTraceError::DecodeError(format!("invalid float {:?}: {}", text, e)))
    }
}

impl fmt::Display for Payload {
    /// Rendering used for the inputs history and replay lines
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(s) => write!(f, "{:?}", s),
            Payload::Bytes(b) => write!(f, "{:?}", b),
            Payload::Int(i) => write!(f, "{}", i),
            Payload::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl From<i64> for Payload {
    fn from(i: i64) -> Self {
        Payload::Int(i)
    }
}

impl From<f64> for Payload {
    fn from(f: f64) -> Self {
        Payload::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text() {
        assert_eq!(Payload::Text("foo".to_string()).encode(), b"foo".to_vec());
    }

    #[test]
    fn test_encode_bytes_passthrough() {
        let raw = vec![0u8, 159, 146, 150];
        assert_eq!(Payload::Bytes(raw.clone()).encode(), raw);
    }

    #[test]
    fn test_encode_numbers_as_decimal_text() {
        assert_eq!(Payload::Int(123).encode(), b"123".to_vec());
        assert_eq!(Payload::Int(-7).encode(), b"-7".to_vec());
        assert_eq!(Payload::Float(1.5).encode(), b"1.5".to_vec());
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(Payload::decode_text(b"foo").unwrap(), "foo");
        assert!(Payload::decode_text(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_decode_int() {
        assert_eq!(Payload::decode_int(b"123").unwrap(), 123);
        assert_eq!(Payload::decode_int(b"-7").unwrap(), -7);
        assert!(Payload::decode_int(b"foo").is_err());
    }

    #[test]
    fn test_decode_float() {
        assert_eq!(Payload::decode_float(b"1.5").unwrap(), 1.5);
        assert!(Payload::decode_float(b"").is_err());
    }

    #[test]
    fn test_roundtrip_per_variant() {
        assert_eq!(
            Payload::decode_text(&Payload::from("abc").encode()).unwrap(),
            "abc"
        );
        assert_eq!(Payload::decode_int(&Payload::from(42i64).encode()).unwrap(), 42);
        assert_eq!(
            Payload::decode_float(&Payload::from(2.25f64).encode()).unwrap(),
            2.25
        );
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Payload::from("foo").to_string(), "\"foo\"");
        assert_eq!(Payload::from(123i64).to_string(), "123");
        assert_eq!(Payload::Bytes(vec![1, 2]).to_string(), "[1, 2]");
    }
}
