use std::str::FromStr;

use crate::errors::ParseSizeError;
use crate::size::Size;
use crate::unit::Unit;

/// Splits `s` into its leading decimal literal and the unit suffix after it.
///
/// The literal is the longest prefix made of ASCII digits and at most one
/// decimal point. Scanning stops at the first other character, a second
/// decimal point included.
fn split_number_unit(s: &str) -> (&str, &str) {
    let mut seen_point = false;
    let end = s
        .bytes()
        .position(|b| match b {
            b'0'..=b'9' => false,
            b'.' if !seen_point => {
                seen_point = true;
                false
            }
            _ => true,
        })
        .unwrap_or(s.len());

    s.split_at(end)
}

impl Size {
    /// Parses a number followed by an optional binary unit suffix.
    ///
    /// The suffix is matched case-insensitively against `B`, `K`/`KiB`,
    /// `M`/`MiB`, `G`/`GiB`, `T`/`TiB` and `P`/`PiB`; no suffix means bytes.
    /// Fractional values are scaled and rounded to the nearest byte.
    ///
    /// # Errors
    ///
    /// * [`ParseSizeError::MalformedNumber`] if the number is empty, a lone
    ///   decimal point, or has a second decimal point
    /// * [`ParseSizeError::UnknownUnit`] if the suffix is not a known unit
    /// * [`ParseSizeError::OutOfRange`] if the result does not fit in an `i64`
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_size::Size;
    ///
    /// assert_eq!(Size::parse("1.465K").unwrap(), Size::new(1500));
    /// assert_eq!(Size::parse("2t").unwrap(), Size::TIB * 2);
    /// assert_eq!(Size::parse("0mIb").unwrap(), Size::ZERO);
    /// assert_eq!(Size::parse("42").unwrap(), Size::new(42));
    /// assert!(Size::parse("0.1.2ZiB").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Size, ParseSizeError> {
        let result = parse_size_inner(s);
        match &result {
            Ok(size) => log::trace!("parsed size {s:?} as {} bytes", size.bytes()),
            Err(e) => log::debug!("{e}"),
        }
        result
    }
}

fn parse_size_inner(s: &str) -> Result<Size, ParseSizeError> {
    let (number, suffix) = split_number_unit(s);

    let malformed = |source| ParseSizeError::MalformedNumber {
        input: s.to_string(),
        source,
    };

    if suffix.starts_with('.') {
        return Err(malformed(None));
    }

    let unit = Unit::from_suffix(suffix).ok_or_else(|| ParseSizeError::UnknownUnit {
        input: s.to_string(),
        unit: suffix.to_string(),
    })?;

    if number.is_empty() {
        return Err(malformed(None));
    }
    let value: f64 = number.parse().map_err(|e| malformed(Some(e)))?;

    let bytes = (value * unit.bytes() as f64).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if !bytes.is_finite() || bytes >= i64::MAX as f64 {
        return Err(ParseSizeError::OutOfRange {
            input: s.to_string(),
        });
    }

    Ok(Size::new(bytes as i64))
}

/// Free-function form of [`Size::parse`].
pub fn parse_size(s: &str) -> Result<Size, ParseSizeError> {
    Size::parse(s)
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::parse(s)
    }
}

impl TryFrom<&str> for Size {
    type Error = ParseSizeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Size::parse(s)
    }
}
