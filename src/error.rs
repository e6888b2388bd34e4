//! Error taxonomy shared by every fallible operation in the crate.
//!
//! All fallible operations are all-or-nothing: when one of these errors is
//! returned, the container is left in the state it was in before the call.
//! Pops on an empty container are an expected outcome, not a fault, and are
//! reported as `Option::None` rather than through this type.

use derive_more::Display;
use derive_more::Error;

/// Convenient alias used throughout the crate.
pub type Result<T> = core::result::Result<T, self::Error>;

/// The failure modes of [`ByteString`](crate::ByteString) and
/// [`InlineVec`](crate::InlineVec) operations.
///
/// # Example
///
/// ```rust
/// use inlay::{ByteString, Error};
///
/// let s = ByteString::try_from("hi").unwrap();
/// assert_eq!(s.at(5), Err(Error::OutOfBounds { index: 5, len: 2 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
  /// The allocator returned failure while promoting, growing, or performing
  /// an exact-fit construction. The requested size is in bytes and includes
  /// the terminator slot where one applies.
  #[display("allocation of {size} bytes failed")]
  AllocationFailure {
    /// Size of the failed allocation request, in bytes.
    size: usize,
  },
  /// An offset argument exceeded the current logical length.
  #[display("index {index} out of bounds for length {len}")]
  OutOfBounds {
    /// The offending offset.
    index: usize,
    /// The logical length at the time of the call.
    len:   usize,
  },
  /// A composite `offset + count` range overran the logical length
  /// (substring, erase_n, view_of, replace).
  #[display("range {index}..{index}+{count} out of bounds for length {len}")]
  InvalidRange {
    /// Start of the offending range.
    index: usize,
    /// Number of bytes in the offending range.
    count: usize,
    /// The logical length at the time of the call.
    len:   usize,
  },
}
