use std::fmt::{self, Alignment, Write};

use crate::size::Size;
use crate::unit::Unit;

/// How a [`Size`] picks the unit it is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Largest unit not exceeding the value. Below one KiB the exact byte
    /// count is printed with no suffix.
    #[default]
    Auto,
    /// Exact decimal byte count, no suffix.
    Bytes,
    /// Always divide by the given unit.
    Fixed(Unit),
}

/// Formatting settings consumed by [`Size::format`].
///
/// # Fields
///
/// * `mode` - Unit selection
/// * `precision` - Digits after the decimal point. `None` prints the shortest
///   decimal that reads back as the same `f64`
/// * `trim` - Strip trailing fractional zeros, and the decimal point if nothing is left after it
///
/// # Examples
///
/// ```
/// use ferris_size::{FormatSpec, Size, Unit};
///
/// let size = Size::new(1_500_000);
/// assert_eq!(size.format(&FormatSpec::auto()), "1.43M");
/// assert_eq!(size.format(&FormatSpec::bytes()), "1500000");
/// assert_eq!(size.format(&FormatSpec::float(true, false, None)), "1464.84K");
/// assert_eq!(size.format(&FormatSpec::float(true, true, Some(6))), "0.001397G");
/// assert_eq!(size.format(&FormatSpec::auto().with_unit(Unit::KiB).with_precision(0)), "1465K");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub mode: DisplayMode,
    pub precision: Option<usize>,
    pub trim: bool,
}

impl FormatSpec {
    /// Auto unit, two decimals, trimmed. This is what `Display` uses.
    pub const fn auto() -> Self {
        FormatSpec {
            mode: DisplayMode::Auto,
            precision: Some(2),
            trim: true,
        }
    }

    /// The exact byte count as a plain integer.
    pub const fn bytes() -> Self {
        FormatSpec {
            mode: DisplayMode::Bytes,
            precision: None,
            trim: false,
        }
    }

    /// Auto unit, shortest exact decimal, untrimmed.
    pub const fn shortest() -> Self {
        FormatSpec {
            mode: DisplayMode::Auto,
            precision: None,
            trim: false,
        }
    }

    /// Floating point rendering driven by two unit flags.
    ///
    /// | `kib` | `mib` | unit |
    /// |-------|-------|------|
    /// | off   | off   | auto |
    /// | on    | off   | KiB  |
    /// | off   | on    | MiB  |
    /// | on    | on    | GiB  |
    ///
    /// Without an explicit `precision` two decimals are printed and trailing
    /// zeros trimmed. An explicit precision is printed as is.
    pub const fn float(kib: bool, mib: bool, precision: Option<usize>) -> Self {
        let mode = match (kib, mib) {
            (false, false) => DisplayMode::Auto,
            (true, false) => DisplayMode::Fixed(Unit::KiB),
            (false, true) => DisplayMode::Fixed(Unit::MiB),
            (true, true) => DisplayMode::Fixed(Unit::GiB),
        };

        match precision {
            Some(precision) => FormatSpec {
                mode,
                precision: Some(precision),
                trim: false,
            },
            None => FormatSpec {
                mode,
                precision: Some(2),
                trim: true,
            },
        }
    }

    /// Renders in `unit` regardless of the value, keeping precision and trimming.
    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.mode = DisplayMode::Fixed(unit);
        self
    }

    /// Fixes the number of decimals and turns trimming off.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self.trim = false;
        self
    }

    /// Turns trailing-zero trimming on or off.
    ///
    /// ```
    /// use ferris_size::{FormatSpec, Size};
    ///
    /// let spec = FormatSpec::float(true, false, Some(2)).trimmed(true);
    /// assert_eq!(Size::KIB.format(&spec), "1K");
    /// ```
    pub const fn trimmed(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec::auto()
    }
}

impl Size {
    /// Renders the size according to `spec`.
    ///
    /// In [`DisplayMode::Auto`] values below one KiB are printed as exact
    /// integers and never trimmed. Negative sizes fall in that branch too: they
    /// are printed as integers and never scaled. A fixed unit divides whatever
    /// value it is given, so zero still prints a number (`"0G"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_size::{FormatSpec, Size};
    ///
    /// assert_eq!(Size::new(42).format(&FormatSpec::auto()), "42");
    /// assert_eq!(Size::new(1_500_000_000).format(&FormatSpec::auto()), "1.4G");
    /// assert_eq!(Size::ZERO.format(&FormatSpec::float(true, true, None)), "0G");
    /// assert_eq!(Size::new(1_500_000).format(&FormatSpec::shortest()), "1.430511474609375M");
    /// ```
    pub fn format(&self, spec: &FormatSpec) -> String {
        let unit = match spec.mode {
            DisplayMode::Bytes => return self.bytes().to_string(),
            DisplayMode::Fixed(unit) => unit,
            DisplayMode::Auto => match self.unit() {
                Unit::Bytes => return self.bytes().to_string(),
                unit => unit,
            },
        };

        let value = self.as_unit(unit);
        let mut number = match spec.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        };

        if spec.trim {
            trim_fraction(&mut number);
        }

        number.push_str(unit.suffix());
        number
    }

    /// Wraps the size so it renders with `spec` inside `format!` and friends.
    ///
    /// ```
    /// use ferris_size::{FormatSpec, Size};
    ///
    /// let size = Size::MIB * 2;
    /// assert_eq!(format!("digits: {}", size.display(FormatSpec::bytes())), "digits: 2097152");
    /// ```
    pub fn display(self, spec: FormatSpec) -> SizeDisplay {
        SizeDisplay { size: self, spec }
    }
}

/// Removes trailing zeros after the decimal point, then the point itself if
/// the fraction is gone. Integers are left alone.
fn trim_fraction(number: &mut String) {
    if !number.contains('.') {
        return;
    }

    let len = number.trim_end_matches('0').trim_end_matches('.').len();
    number.truncate(len);
}

/// Writes `s` honouring width, fill and alignment but not precision.
///
/// `Formatter::pad` would also cut `s` down to the precision, which `{:.N}`
/// already spent on the number of decimals.
fn pad(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let len = s.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(s),
    };

    let (before, after) = match f.align() {
        Some(Alignment::Right) => (padding, 0),
        Some(Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(Alignment::Left) | None => (0, padding),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(s)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

/// `{}` renders with [`FormatSpec::auto`]. `{:.N}` keeps the automatic unit
/// but prints exactly `N` decimals without trimming.
///
/// ```
/// use ferris_size::Size;
///
/// let size = Size::new(1_500_000);
/// assert_eq!(format!("{size}"), "1.43M");
/// assert_eq!(format!("{size:.4}"), "1.4305M");
/// assert_eq!(format!("[{size:>8}]"), "[   1.43M]");
/// ```
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = match f.precision() {
            Some(precision) => FormatSpec::auto().with_precision(precision),
            None => FormatSpec::auto(),
        };
        pad(f, &self.format(&spec))
    }
}

/// A [`Size`] paired with the [`FormatSpec`] it should be displayed with.
///
/// Created by [`Size::display`].
#[derive(Debug, Clone, Copy)]
pub struct SizeDisplay {
    size: Size,
    spec: FormatSpec,
}

impl fmt::Display for SizeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(f, &self.size.format(&self.spec))
    }
}
