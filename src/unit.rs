use std::fmt;

/// A power-of-1024 scale factor used when rendering or parsing a [`Size`](crate::Size).
///
/// # Examples
///
/// ```
/// use ferris_size::Unit;
///
/// assert_eq!(Unit::MiB.bytes(), 1024 * 1024);
/// assert_eq!(Unit::MiB.suffix(), "M");
/// assert_eq!(Unit::largest_fitting(1500), Unit::KiB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Bytes,
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 6] = [
        Unit::Bytes,
        Unit::KiB,
        Unit::MiB,
        Unit::GiB,
        Unit::TiB,
        Unit::PiB,
    ];

    /// Number of bytes in one of this unit.
    pub const fn bytes(self) -> i64 {
        match self {
            Unit::Bytes => 1,
            Unit::KiB => 1 << 10,
            Unit::MiB => 1 << 20,
            Unit::GiB => 1 << 30,
            Unit::TiB => 1 << 40,
            Unit::PiB => 1 << 50,
        }
    }

    /// Single-letter suffix appended by the formatter. Plain bytes carry none.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Bytes => "",
            Unit::KiB => "K",
            Unit::MiB => "M",
            Unit::GiB => "G",
            Unit::TiB => "T",
            Unit::PiB => "P",
        }
    }

    /// Picks the largest unit not exceeding `bytes`.
    ///
    /// Anything below one KiB, negative counts included, stays in [`Unit::Bytes`].
    pub fn largest_fitting(bytes: i64) -> Unit {
        Unit::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| bytes >= unit.bytes())
            .unwrap_or(Unit::Bytes)
    }

    /// Looks up a unit by the suffix that follows a number, ignoring ASCII case.
    ///
    /// Accepts the empty string and `B` for bytes, and both the short (`K`) and
    /// IEC (`KiB`) spellings for everything larger.
    ///
    /// ```
    /// use ferris_size::Unit;
    ///
    /// assert_eq!(Unit::from_suffix("mIb"), Some(Unit::MiB));
    /// assert_eq!(Unit::from_suffix("t"), Some(Unit::TiB));
    /// assert_eq!(Unit::from_suffix(""), Some(Unit::Bytes));
    /// assert_eq!(Unit::from_suffix("ZiB"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        const TABLE: [(&str, Unit); 12] = [
            ("", Unit::Bytes),
            ("b", Unit::Bytes),
            ("k", Unit::KiB),
            ("kib", Unit::KiB),
            ("m", Unit::MiB),
            ("mib", Unit::MiB),
            ("g", Unit::GiB),
            ("gib", Unit::GiB),
            ("t", Unit::TiB),
            ("tib", Unit::TiB),
            ("p", Unit::PiB),
            ("pib", Unit::PiB),
        ];

        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(suffix))
            .map(|(_, unit)| *unit)
    }

    /// IEC name of the unit, as used in log and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Bytes => "B",
            Unit::KiB => "KiB",
            Unit::MiB => "MiB",
            Unit::GiB => "GiB",
            Unit::TiB => "TiB",
            Unit::PiB => "PiB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
