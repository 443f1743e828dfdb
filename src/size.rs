use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::errors::TryFromSizeError;
use crate::unit::Unit;

/// A count of bytes.
///
/// `Size` is a plain signed 64-bit integer with human-readable formatting and
/// parsing attached. Sizes are meant to be non-negative; negative values are
/// carried through arithmetic but the formatter does not scale them (see
/// [`Size::format`](crate::Size::format)).
///
/// # Examples
///
/// ```
/// use ferris_size::Size;
///
/// let size = Size::new(1_500);
/// assert_eq!(size.to_string(), "1.46K");
/// assert_eq!(Size::parse("1.465K").unwrap(), size);
/// assert_eq!((Size::TIB * 2).to_string(), "2T");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(i64);

impl Size {
    /// No bytes at all.
    pub const ZERO: Size = Size(0);
    /// A single byte.
    pub const BYTE: Size = Size(Unit::Bytes.bytes());
    /// One kibibyte, 1024 bytes.
    pub const KIB: Size = Size(Unit::KiB.bytes());
    /// One mebibyte, 1024² bytes.
    pub const MIB: Size = Size(Unit::MiB.bytes());
    /// One gibibyte, 1024³ bytes.
    pub const GIB: Size = Size(Unit::GiB.bytes());
    /// One tebibyte, 1024⁴ bytes.
    pub const TIB: Size = Size(Unit::TiB.bytes());
    /// One pebibyte, 1024⁵ bytes.
    pub const PIB: Size = Size(Unit::PiB.bytes());

    /// Wraps a raw byte count.
    ///
    /// ```
    /// use ferris_size::Size;
    ///
    /// assert_eq!(Size::new(2048), Size::KIB * 2);
    /// ```
    pub const fn new(bytes: i64) -> Self {
        Size(bytes)
    }

    /// `count` whole units, e.g. `Size::from_unit(3, Unit::GiB)`.
    ///
    /// Overflows the same way `count * unit.bytes()` would.
    pub const fn from_unit(count: i64, unit: Unit) -> Self {
        Size(count * unit.bytes())
    }

    /// The raw byte count.
    pub const fn bytes(self) -> i64 {
        self.0
    }

    /// The byte count expressed in `unit`, e.g. `1.5` for 1536 bytes in KiB.
    pub fn as_unit(self, unit: Unit) -> f64 {
        self.0 as f64 / unit.bytes() as f64
    }

    /// The unit automatic formatting would pick for this size.
    pub fn unit(self) -> Unit {
        Unit::largest_fitting(self.0)
    }

    /// Adds two sizes, returning `None` on overflow.
    pub const fn checked_add(self, rhs: Size) -> Option<Size> {
        match self.0.checked_add(rhs.0) {
            Some(bytes) => Some(Size(bytes)),
            None => None,
        }
    }

    /// Adds two sizes, clamping at `i64::MIN` and `i64::MAX`.
    pub const fn saturating_add(self, rhs: Size) -> Size {
        Size(self.0.saturating_add(rhs.0))
    }
}

impl From<i64> for Size {
    fn from(bytes: i64) -> Self {
        Size(bytes)
    }
}

impl From<u32> for Size {
    fn from(bytes: u32) -> Self {
        Size(i64::from(bytes))
    }
}

impl From<Unit> for Size {
    fn from(unit: Unit) -> Self {
        Size(unit.bytes())
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl TryFrom<u64> for Size {
    type Error = TryFromSizeError;

    fn try_from(bytes: u64) -> Result<Self, Self::Error> {
        i64::try_from(bytes)
            .map(Size)
            .map_err(|_| TryFromSizeError(bytes))
    }
}

impl TryFrom<usize> for Size {
    type Error = TryFromSizeError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Size::try_from(bytes as u64)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size(self.0 + rhs.0)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        self.0 += rhs.0;
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size(self.0 - rhs.0)
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Size) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Size {
    type Output = Size;

    fn mul(self, rhs: i64) -> Size {
        Size(self.0 * rhs)
    }
}

impl Div<i64> for Size {
    type Output = Size;

    fn div(self, rhs: i64) -> Size {
        Size(self.0 / rhs)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Size>>(iter: I) -> Size {
        iter.fold(Size::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Size> for Size {
    fn sum<I: Iterator<Item = &'a Size>>(iter: I) -> Size {
        iter.copied().sum()
    }
}
