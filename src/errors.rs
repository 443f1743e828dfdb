use std::num::ParseFloatError;

use thiserror::Error;

/// Error type representing the ways a size string can fail to parse.
///
/// Formatting never fails, so this is the only error a caller of
/// [`Size::parse`](crate::Size::parse) has to handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    /// The numeric part in front of the unit could not be read as a decimal number.
    ///
    /// Covers an empty number (`"K"`), a lone decimal point and a literal with a
    /// second decimal point (`"0.1.2ZiB"`). `source` carries the float parser's
    /// error when it was the one to reject the literal.
    #[error("malformed number in size {input:?}")]
    MalformedNumber {
        input: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    /// The characters after the number do not name a known binary unit.
    ///
    /// ```
    /// use ferris_size::{ParseSizeError, Size};
    ///
    /// let err = Size::parse("0ZiB").unwrap_err();
    /// assert_eq!(err.to_string(), r#"unknown unit "ZiB" in size "0ZiB""#);
    /// assert!(matches!(err, ParseSizeError::UnknownUnit { .. }));
    /// ```
    #[error("unknown unit {unit:?} in size {input:?}")]
    UnknownUnit { input: String, unit: String },

    /// The scaled value does not fit in a signed 64-bit byte count.
    #[error("size {input:?} is out of range")]
    OutOfRange { input: String },
}

impl ParseSizeError {
    /// The string that was being parsed.
    pub fn input(&self) -> &str {
        match self {
            ParseSizeError::MalformedNumber { input, .. }
            | ParseSizeError::UnknownUnit { input, .. }
            | ParseSizeError::OutOfRange { input } => input,
        }
    }
}

/// Returned when an unsigned integer is too large to become a [`Size`](crate::Size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} bytes does not fit in a size")]
pub struct TryFromSizeError(pub u64);
