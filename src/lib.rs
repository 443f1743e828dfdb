//! A byte count type with human-readable formatting and parsing.
//!
//! [`Size`] wraps a signed 64-bit byte count. It renders with binary unit
//! suffixes (`K`, `M`, `G`, `T`, `P` at powers of 1024) and parses the same
//! notation back.
//!
//! ```
//! use ferris_size::{FormatSpec, Size};
//!
//! let size: Size = "1.5G".parse().unwrap();
//! assert_eq!(size.to_string(), "1.5G");
//! assert_eq!(size.format(&FormatSpec::bytes()), "1610612736");
//! assert_eq!(size.format(&FormatSpec::float(false, true, None)), "1536M");
//! ```

pub mod errors;
pub mod format;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod size;
pub mod traits;
pub mod unit;


pub use errors::{ParseSizeError, TryFromSizeError};
pub use format::{DisplayMode, FormatSpec, SizeDisplay};
pub use parse::parse_size;
pub use size::Size;
pub use traits::ByteSize;
pub use unit::Unit;
