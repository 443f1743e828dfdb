use crate::format::FormatSpec;
use crate::size::Size;

/// Provides functionality to format numeric byte counts into human-readable strings.
///
/// This trait is particularly useful for displaying file sizes, memory usage, or any other
/// byte-based measurement kept in a plain integer. The output automatically scales from
/// bytes to pebibytes and matches `Size`'s `Display` output.
///
/// # Examples
///
/// ```
/// use ferris_size::ByteSize;
///
/// assert_eq!(50_u64.format_size(), "50");
/// assert_eq!(1024_u64.format_size(), "1K");
/// assert_eq!(1536_usize.format_size(), "1.5K");
/// assert_eq!((1024 * 1024 * 1024_i64).format_size(), "1G");
/// ```
pub trait ByteSize {
    /// Formats the number with an automatically selected unit, two decimals at
    /// most and trailing zeros removed.
    fn format_size(&self) -> String;
}

impl ByteSize for Size {
    fn format_size(&self) -> String {
        self.format(&FormatSpec::auto())
    }
}

impl ByteSize for i64 {
    fn format_size(&self) -> String {
        Size::new(*self).format_size()
    }
}

impl ByteSize for u32 {
    fn format_size(&self) -> String {
        Size::from(*self).format_size()
    }
}

/// Counts above `i64::MAX` saturate.
impl ByteSize for u64 {
    fn format_size(&self) -> String {
        Size::try_from(*self)
            .unwrap_or(Size::new(i64::MAX))
            .format_size()
    }
}

impl ByteSize for usize {
    fn format_size(&self) -> String {
        (*self as u64).format_size()
    }
}
