//! `serde` support, enabled with the `serde` feature.
//!
//! A [`Size`] serializes as its integer byte count. Human-readable formats
//! deserialize it from either an integer or a string such as `"1.5G"`;
//! binary formats read back the integer only.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::size::Size;

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.bytes())
    }
}

struct SizeVisitor;

impl Visitor<'_> for SizeVisitor {
    type Value = Size;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte count or a size string such as \"1.5G\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Size, E> {
        Ok(Size::new(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Size, E> {
        Size::try_from(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Size, E> {
        Size::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Binary formats carry no type tags, so only text formats get the
        // integer-or-string choice.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(SizeVisitor)
        } else {
            deserializer.deserialize_i64(SizeVisitor)
        }
    }
}
