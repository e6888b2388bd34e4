//! A non-owning view into a string's bytes.
//!
//! [`ByteView`] is the borrowing companion of
//! [`ByteString`](crate::ByteString): a `(base pointer, length)` pair whose
//! lifetime is bounded by the string (or slice) it borrows. The view never
//! allocates or frees, and the borrow checker rules out holding one across a
//! mutation of its source. All read-only string operations — search,
//! comparison, iteration — live here; the owning string delegates to its
//! view.

use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::iter::Copied;
use core::slice;

use crate::Error;
use crate::Result;

/// Iterator over the bytes of a view or string, in order. Restartable by
/// calling `iter()` again; lazy and finite.
pub type Bytes<'a> = Copied<slice::Iter<'a, u8>>;

/// A borrowed `(pointer, length)` window into a byte string.
///
/// # Example
///
/// ```rust
/// use inlay::ByteView;
///
/// let view = ByteView::new(b"This is a test test test");
/// assert_eq!(view.find_first(b"test"), Some(10));
/// assert_eq!(view.find_last(b"test"), Some(20));
/// ```
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
  bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
  /// Creates a view over an existing byte slice.
  #[inline]
  pub const fn new(bytes: &'a [u8]) -> Self {
    Self { bytes }
  }

  /// Number of bytes in the view.
  #[inline]
  pub const fn len(&self) -> usize {
    self.bytes.len()
  }

  /// Returns `true` if the view covers no bytes.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// The viewed bytes as a slice.
  #[inline]
  pub const fn as_bytes(&self) -> &'a [u8] {
    self.bytes
  }

  /// Base pointer of the view.
  #[inline]
  pub const fn as_ptr(&self) -> *const u8 {
    self.bytes.as_ptr()
  }

  /// Checked byte access. Fails with [`Error::OutOfBounds`] when
  /// `index >= len()`.
  #[inline]
  pub fn at(&self, index: usize) -> Result<u8> {
    self.bytes.get(index).copied().ok_or(Error::OutOfBounds {
      index,
      len: self.bytes.len(),
    })
  }

  /// First byte of the view, or `None` when empty.
  #[inline]
  pub fn front(&self) -> Option<u8> {
    self.bytes.first().copied()
  }

  /// Last byte of the view, or `None` when empty.
  #[inline]
  pub fn back(&self) -> Option<u8> {
    self.bytes.last().copied()
  }

  /// A narrower view of `count` bytes starting at `offset`. Fails with
  /// [`Error::InvalidRange`] when `offset + count > len()`.
  pub fn subview(&self, offset: usize, count: usize) -> Result<ByteView<'a>> {
    let len = self.bytes.len();
    match offset.checked_add(count) {
      Some(end) if end <= len => Ok(Self::new(&self.bytes[offset..end])),
      _ => Err(Error::InvalidRange {
        index: offset,
        count,
        len,
      }),
    }
  }

  /// Returns `true` if `needle` occurs anywhere in the view. An empty
  /// needle is trivially contained.
  pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
    self.find_first(needle).is_some()
  }

  /// Returns `true` if the view begins with `needle`. An empty needle is
  /// trivially a prefix.
  pub fn starts_with(&self, needle: impl AsRef<[u8]>) -> bool {
    self.bytes.starts_with(needle.as_ref())
  }

  /// Returns `true` if the view ends with `needle`. An empty needle is
  /// trivially a suffix.
  pub fn ends_with(&self, needle: impl AsRef<[u8]>) -> bool {
    self.bytes.ends_with(needle.as_ref())
  }

  /// Lowest starting offset at which `needle` occurs, or `None` when
  /// absent. An empty needle matches at offset 0.
  pub fn find_first(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
    let needle = needle.as_ref();
    if needle.is_empty() {
      return Some(0);
    }
    if needle.len() > self.bytes.len() {
      return None;
    }
    self.bytes.windows(needle.len()).position(|w| w == needle)
  }

  /// Highest starting offset at which `needle` occurs, or `None` when
  /// absent. An empty needle matches at offset `len()`.
  pub fn find_last(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
    let needle = needle.as_ref();
    if needle.is_empty() {
      return Some(self.bytes.len());
    }
    if needle.len() > self.bytes.len() {
      return None;
    }
    self.bytes.windows(needle.len()).rposition(|w| w == needle)
  }

  /// Iterates the viewed bytes front to back.
  #[inline]
  pub fn iter(&self) -> Bytes<'a> {
    self.bytes.iter().copied()
  }
}

impl fmt::Debug for ByteView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ByteView({:?})", DisplayBytes(self.bytes))
  }
}

/// Renders bytes as a string literal with non-printable bytes escaped, for
/// `Debug` output of views and strings.
pub(crate) struct DisplayBytes<'a>(pub(crate) &'a [u8]);

impl fmt::Debug for DisplayBytes<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("\"")?;
    for &byte in self.0 {
      for c in core::ascii::escape_default(byte) {
        fmt::Write::write_char(f, c as char)?;
      }
    }
    f.write_str("\"")
  }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
  #[inline]
  fn from(bytes: &'a [u8]) -> Self {
    Self::new(bytes)
  }
}

impl<'a> From<&'a str> for ByteView<'a> {
  #[inline]
  fn from(s: &'a str) -> Self {
    Self::new(s.as_bytes())
  }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
  #[inline]
  fn from(bytes: &'a [u8; N]) -> Self {
    Self::new(bytes)
  }
}

impl AsRef<[u8]> for ByteView<'_> {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.bytes
  }
}

impl<'a> IntoIterator for ByteView<'a> {
  type IntoIter = Bytes<'a>;
  type Item = u8;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl PartialEq for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.bytes == other.bytes
  }
}

impl Eq for ByteView<'_> {}

impl PartialEq<[u8]> for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    self.bytes == other
  }
}

impl PartialEq<&[u8]> for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &&[u8]) -> bool {
    self.bytes == *other
  }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &&[u8; N]) -> bool {
    self.bytes == *other
  }
}

impl PartialEq<&str> for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.bytes == other.as_bytes()
  }
}

impl PartialOrd for ByteView<'_> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ByteView<'_> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.bytes.cmp(other.bytes)
  }
}

impl Hash for ByteView<'_> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.bytes.hash(state);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HAYSTACK: &[u8] = b"This is a test test test";

  #[test]
  fn find_first_returns_lowest_offset() {
    let view = ByteView::new(HAYSTACK);
    assert_eq!(view.find_first(b"test"), Some(10));
    assert_eq!(view.find_first(b"This"), Some(0));
    assert_eq!(view.find_first(b"absent"), None);
  }

  #[test]
  fn find_last_returns_highest_offset() {
    let view = ByteView::new(HAYSTACK);
    assert_eq!(view.find_last(b"test"), Some(HAYSTACK.len() - 4));
    assert_eq!(view.find_last(b"This"), Some(0));
    assert_eq!(view.find_last(b"absent"), None);
  }

  #[test]
  fn empty_needle_is_trivially_everywhere() {
    let view = ByteView::new(HAYSTACK);
    assert!(view.contains(b""));
    assert!(view.starts_with(b""));
    assert!(view.ends_with(b""));
    assert_eq!(view.find_first(b""), Some(0));
    assert_eq!(view.find_last(b""), Some(HAYSTACK.len()));
  }

  #[test]
  fn prefix_and_suffix() {
    let view = ByteView::new(HAYSTACK);
    assert!(view.starts_with(b"This is"));
    assert!(view.ends_with(b"test test"));
    assert!(!view.starts_with(b"this"));
    assert!(!view.ends_with(b"This"));
  }

  #[test]
  fn needle_longer_than_haystack() {
    let view = ByteView::new(b"hi");
    assert!(!view.contains(b"high"));
    assert_eq!(view.find_first(b"high"), None);
    assert_eq!(view.find_last(b"high"), None);
  }

  #[test]
  fn subview_bounds() {
    let view = ByteView::new(HAYSTACK);
    let sub = view.subview(8, 6).unwrap();
    assert_eq!(sub, b"a test");
    // offset + count == len is the last valid window
    assert!(view.subview(20, 4).is_ok());
    assert_eq!(
      view.subview(20, 5),
      Err(Error::InvalidRange {
        index: 20,
        count: 5,
        len:   HAYSTACK.len(),
      })
    );
  }

  #[test]
  fn checked_access_and_edges() {
    let view = ByteView::new(b"abc");
    assert_eq!(view.at(0), Ok(b'a'));
    assert_eq!(view.at(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
    assert_eq!(view.front(), Some(b'a'));
    assert_eq!(view.back(), Some(b'c'));
    assert_eq!(ByteView::new(b"").front(), None);
  }

  #[test]
  fn iteration_is_restartable() {
    let view = ByteView::new(b"ab");
    let first: alloc::vec::Vec<u8> = view.iter().collect();
    let second: alloc::vec::Vec<u8> = view.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first, b"ab");
  }

  #[test]
  fn debug_escapes_non_printable() {
    let view = ByteView::new(b"a\0b");
    assert_eq!(alloc::format!("{view:?}"), "ByteView(\"a\\x00b\")");
  }
}
