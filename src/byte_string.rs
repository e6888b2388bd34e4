//! A growable, small-string-optimized, allocator-aware byte string.
//!
//! [`ByteString`] keeps short content in a fixed inline buffer and
//! transparently promotes to heap storage obtained from its [`Allocator`]
//! once the content outgrows [`INLINE_CAPACITY`]. Whichever representation
//! is active, the byte after the content is always a null terminator, so the
//! buffer can be handed to APIs expecting C-style strings.
//!
//! This is a byte-oriented container with string-shaped operations, not a
//! Unicode text type: offsets are byte offsets and content may hold any
//! bytes, interior zeros included.
//!
//! ## Examples
//!
//! ```rust
//! use inlay::ByteString;
//!
//! let mut s = ByteString::try_from("This is a ").unwrap();
//! s.append(b"test test test").unwrap();
//! assert_eq!(s, "This is a test test test");
//! assert_eq!(s.find_first(b"test"), Some(10));
//! assert!(!s.is_inline());
//! ```
//!
//! Short strings never touch the heap:
//!
//! ```rust
//! use inlay::{ByteString, INLINE_CAPACITY};
//!
//! let s = ByteString::try_from("short").unwrap();
//! assert!(s.is_inline());
//! assert_eq!(s.capacity(), INLINE_CAPACITY);
//! ```

use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::Allocator;
use crate::ByteView;
use crate::Error;
use crate::Result;
use crate::byte_view::Bytes;
use crate::byte_view::DisplayBytes;
use crate::raw_buf::RawBuf;

/// Number of content bytes the inline representation can hold (the SSO
/// threshold `K`): 23 on 64-bit targets, 11 on 32-bit. Sized so the inline
/// buffer plus its terminator slot fills the same three words the heap
/// representation needs for pointer, length, and capacity.
pub const INLINE_CAPACITY: usize = 3 * core::mem::size_of::<usize>() - 1;

/// A growable byte string with inline storage for up to [`INLINE_CAPACITY`]
/// bytes and a caller-supplied allocator for everything longer.
///
/// Exactly one of two representations is active at any time:
///
/// - **inline**: a fixed buffer inside the handle itself, capacity
///   [`INLINE_CAPACITY`], no heap allocation;
/// - **heap**: an exclusively-owned buffer of `capacity + 1` bytes obtained
///   from the stored [`Allocator`], active whenever
///   `capacity > INLINE_CAPACITY`.
///
/// After every public operation `len() <= capacity()` holds and the byte at
/// offset `len()` is `0`. Dropping the string returns heap storage through
/// the stored allocator's deallocate function.
pub struct ByteString {
  repr:      Repr,
  allocator: Allocator,
}

/// The two mutually-exclusive storage representations.
enum Repr {
  Inline(InlineBuf),
  Heap(HeapBuf),
}

/// The short representation: content plus terminator slot, stored in the
/// handle itself.
struct InlineBuf {
  buf: [u8; INLINE_CAPACITY + 1],
  len: u8,
}

impl InlineBuf {
  const fn empty() -> Self {
    Self {
      buf: [0; INLINE_CAPACITY + 1],
      len: 0,
    }
  }
}

/// The long representation: an allocator-owned buffer and the logical
/// length within it.
struct HeapBuf {
  buf: RawBuf,
  len: usize,
}

impl ByteString {
  /// Creates an empty string using the process-wide default allocator.
  /// Inline representation, capacity [`INLINE_CAPACITY`], no allocation.
  #[inline]
  pub fn new() -> Self {
    Self::new_in(Allocator::default())
  }

  /// Creates an empty string that will allocate through `allocator`.
  #[inline]
  pub const fn new_in(allocator: Allocator) -> Self {
    Self {
      repr: Repr::Inline(InlineBuf::empty()),
      allocator,
    }
  }

  /// Creates an empty string able to hold `capacity` bytes. Eagerly
  /// allocates when `capacity > INLINE_CAPACITY`, otherwise stays inline
  /// (where capacity is always [`INLINE_CAPACITY`]).
  pub fn with_capacity(capacity: usize) -> Result<Self> {
    Self::with_capacity_in(capacity, Allocator::default())
  }

  /// Allocator-supplied counterpart of [`ByteString::with_capacity`].
  pub fn with_capacity_in(capacity: usize, allocator: Allocator) -> Result<Self> {
    let mut string = Self::new_in(allocator);
    if capacity > INLINE_CAPACITY {
      string.repr = Repr::Heap(HeapBuf {
        buf: RawBuf::allocate(capacity, allocator)?,
        len: 0,
      });
    }
    Ok(string)
  }

  /// Copies `bytes` into a new string with exact-fit capacity: for content
  /// longer than [`INLINE_CAPACITY`], `capacity() == bytes.len()` with no
  /// slack.
  pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
    Self::from_bytes_in(bytes, Allocator::default())
  }

  /// Allocator-supplied counterpart of [`ByteString::from_bytes`].
  pub fn from_bytes_in(bytes: impl AsRef<[u8]>, allocator: Allocator) -> Result<Self> {
    let bytes = bytes.as_ref();
    let len = bytes.len();
    let mut string = Self::with_capacity_in(len, allocator)?;
    string.raw_mut()[..len].copy_from_slice(bytes);
    string.set_len(len);
    Ok(string)
  }

  /// Deep copy with shrink-on-clone semantics: the copy's capacity is
  /// re-derived from the source length, so a heap-backed source whose
  /// content fits inline yields an inline copy.
  pub fn try_clone(&self) -> Result<Self> {
    self.clone_in(self.allocator)
  }

  /// Deep copy into storage owned by a different allocator.
  pub fn clone_in(&self, allocator: Allocator) -> Result<Self> {
    Self::from_bytes_in(self.as_bytes(), allocator)
  }

  /// Number of logical bytes stored, terminator excluded.
  #[inline]
  pub const fn len(&self) -> usize {
    match &self.repr {
      Repr::Inline(inline) => inline.len as usize,
      Repr::Heap(heap) => heap.len,
    }
  }

  /// Number of bytes available for content in the active representation,
  /// terminator slot excluded.
  #[inline]
  pub const fn capacity(&self) -> usize {
    match &self.repr {
      Repr::Inline(_) => INLINE_CAPACITY,
      Repr::Heap(heap) => heap.buf.capacity(),
    }
  }

  /// Returns `true` when the string holds no bytes.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns `true` when `len() == capacity()`.
  #[inline]
  pub const fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Returns `true` while the inline representation is active.
  #[inline]
  pub const fn is_inline(&self) -> bool {
    matches!(self.repr, Repr::Inline(_))
  }

  /// The allocator this string was constructed with.
  #[inline]
  pub const fn allocator(&self) -> Allocator {
    self.allocator
  }

  /// The logical content as a slice.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    match &self.repr {
      Repr::Inline(inline) => &inline.buf[..inline.len as usize],
      Repr::Heap(heap) => &heap.buf.as_slice()[..heap.len],
    }
  }

  /// The logical content followed by its null terminator. The result is
  /// safe to hand to APIs expecting null-terminated input (note that the
  /// content itself may contain interior zeros).
  #[inline]
  pub fn as_bytes_with_nul(&self) -> &[u8] {
    match &self.repr {
      Repr::Inline(inline) => &inline.buf[..inline.len as usize + 1],
      Repr::Heap(heap) => &heap.buf.as_slice()[..heap.len + 1],
    }
  }

  /// Base pointer of the active buffer. The pointed-to sequence is always
  /// null-terminated at offset `len()`. Invalidated by any operation that
  /// may reallocate or shift the buffer.
  #[inline]
  pub fn as_ptr(&self) -> *const u8 {
    match &self.repr {
      Repr::Inline(inline) => inline.buf.as_ptr(),
      Repr::Heap(heap) => heap.buf.as_ptr(),
    }
  }

  /// A borrowed view over the whole content.
  #[inline]
  pub fn view(&self) -> ByteView<'_> {
    ByteView::new(self.as_bytes())
  }

  /// A borrowed view of `count` bytes starting at `offset`. Fails with
  /// [`Error::InvalidRange`] when `offset + count > len()`; never
  /// allocates.
  pub fn view_of(&self, offset: usize, count: usize) -> Result<ByteView<'_>> {
    self.view().subview(offset, count)
  }

  /// Checked byte access. Fails with [`Error::OutOfBounds`] when
  /// `index >= len()`.
  #[inline]
  pub fn at(&self, index: usize) -> Result<u8> {
    self.view().at(index)
  }

  /// First byte, or `None` when empty.
  #[inline]
  pub fn front(&self) -> Option<u8> {
    self.view().front()
  }

  /// Last byte, or `None` when empty.
  #[inline]
  pub fn back(&self) -> Option<u8> {
    self.view().back()
  }

  /// Returns `true` if `needle` occurs anywhere in the content.
  pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
    self.view().contains(needle)
  }

  /// Returns `true` if the content begins with `needle`.
  pub fn starts_with(&self, needle: impl AsRef<[u8]>) -> bool {
    self.view().starts_with(needle)
  }

  /// Returns `true` if the content ends with `needle`.
  pub fn ends_with(&self, needle: impl AsRef<[u8]>) -> bool {
    self.view().ends_with(needle)
  }

  /// Lowest starting offset of `needle`, or `None` when absent.
  pub fn find_first(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
    self.view().find_first(needle)
  }

  /// Highest starting offset of `needle`, or `None` when absent.
  pub fn find_last(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
    self.view().find_last(needle)
  }

  /// Independent deep copy of `count` bytes starting at `offset`, with
  /// exact-fit capacity. Fails with [`Error::InvalidRange`] when
  /// `offset + count > len()`.
  pub fn substring(&self, offset: usize, count: usize) -> Result<Self> {
    self.substring_in(offset, count, self.allocator)
  }

  /// Allocator-supplied counterpart of [`ByteString::substring`].
  pub fn substring_in(&self, offset: usize, count: usize, allocator: Allocator) -> Result<Self> {
    let view = self.view().subview(offset, count)?;
    Self::from_bytes_in(view, allocator)
  }

  /// Copy of at most the first `count` bytes, clamped to the current
  /// length.
  pub fn first(&self, count: usize) -> Result<Self> {
    let n = count.min(self.len());
    Self::from_bytes_in(&self.as_bytes()[..n], self.allocator)
  }

  /// Copy of at most the last `count` bytes, clamped to the current
  /// length.
  pub fn last(&self, count: usize) -> Result<Self> {
    let n = count.min(self.len());
    Self::from_bytes_in(&self.as_bytes()[self.len() - n..], self.allocator)
  }

  /// A new string holding `self` followed by `other`, with exact-fit
  /// capacity and an independent buffer.
  pub fn concatenate(&self, other: impl AsRef<[u8]>) -> Result<Self> {
    self.concatenate_in(other, self.allocator)
  }

  /// Allocator-supplied counterpart of [`ByteString::concatenate`].
  pub fn concatenate_in(&self, other: impl AsRef<[u8]>, allocator: Allocator) -> Result<Self> {
    let other = other.as_ref();
    let left = self.len();
    let total = left + other.len();
    let mut string = Self::with_capacity_in(total, allocator)?;
    let buf = string.raw_mut();
    buf[..left].copy_from_slice(self.as_bytes());
    buf[left..total].copy_from_slice(other);
    string.set_len(total);
    Ok(string)
  }

  /// Ensures `capacity() >= additional_capacity`. Unlike the appending
  /// paths this applies no doubling: the new capacity is exactly the
  /// requested one when growth is needed.
  pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
    if new_capacity > self.capacity() {
      self.transition(new_capacity)?;
    }
    Ok(())
  }

  /// Drops slack capacity so `capacity()` matches the content: demotes to
  /// the inline representation when `len() <= INLINE_CAPACITY`, otherwise
  /// reallocates the heap buffer to an exact fit.
  pub fn shrink_to_fit(&mut self) -> Result<()> {
    match &self.repr {
      Repr::Inline(_) => Ok(()),
      Repr::Heap(heap) if heap.buf.capacity() == heap.len => Ok(()),
      Repr::Heap(heap) => {
        let target = heap.len;
        self.transition(target)
      }
    }
  }

  /// Overwrites every byte up to the current capacity with `byte` and sets
  /// `len()` to `capacity()`: fill deliberately expands the logical length
  /// to the full capacity rather than only overwriting existing content.
  pub fn fill(&mut self, byte: u8) {
    let capacity = self.capacity();
    self.raw_mut()[..capacity].fill(byte);
    self.set_len(capacity);
  }

  /// Empties the string in place: `len()` becomes 0 and the content bytes
  /// are zeroed; capacity is unchanged and nothing is deallocated.
  pub fn clear(&mut self) {
    let capacity = self.capacity();
    self.raw_mut()[..capacity].fill(0);
    self.set_len(0);
  }

  /// Inserts `bytes` at byte offset `at`, shifting the tail right. Fails
  /// with [`Error::OutOfBounds`] when `at > len()`; grows via the
  /// amortized-doubling policy when needed.
  pub fn insert(&mut self, bytes: impl AsRef<[u8]>, at: usize) -> Result<()> {
    let bytes = bytes.as_ref();
    let len = self.len();
    if at > len {
      return Err(Error::OutOfBounds { index: at, len });
    }
    if bytes.is_empty() {
      return Ok(());
    }
    self.grow_for_append(bytes.len())?;
    let buf = self.raw_mut();
    buf.copy_within(at..len, at + bytes.len());
    buf[at..at + bytes.len()].copy_from_slice(bytes);
    self.set_len(len + bytes.len());
    Ok(())
  }

  /// Removes the byte at `at`, shifting the tail left. Fails with
  /// [`Error::OutOfBounds`] when `at >= len()`.
  pub fn erase(&mut self, at: usize) -> Result<()> {
    let len = self.len();
    if at >= len {
      return Err(Error::OutOfBounds { index: at, len });
    }
    self.raw_mut().copy_within(at + 1..len, at);
    self.set_len(len - 1);
    Ok(())
  }

  /// Removes `count` bytes starting at `at`, shifting the tail left. Fails
  /// with [`Error::InvalidRange`] when `at + count > len()`.
  pub fn erase_n(&mut self, at: usize, count: usize) -> Result<()> {
    let len = self.len();
    match at.checked_add(count) {
      Some(end) if end <= len => {
        let buf = self.raw_mut();
        buf.copy_within(end..len, at);
        buf[len - count..len].fill(0);
        self.set_len(len - count);
        Ok(())
      }
      _ => Err(Error::InvalidRange {
        index: at,
        count,
        len,
      }),
    }
  }

  /// Sets the logical length to `new_len`. Growing zero-fills the newly
  /// exposed bytes (and grows capacity via the appending policy only when
  /// `new_len > capacity()`); shrinking truncates and re-terminates.
  ///
  /// Equality remains strict over `[0, len())`, so a grown string compares
  /// unequal to its shorter former self.
  pub fn resize(&mut self, new_len: usize) -> Result<()> {
    let len = self.len();
    if new_len > len {
      if new_len > self.capacity() {
        self.grow_for_append(new_len - len)?;
      }
      self.raw_mut()[len..new_len].fill(0);
    } else {
      self.raw_mut()[new_len..len].fill(0);
    }
    self.set_len(new_len);
    Ok(())
  }

  /// Appends one byte. Amortized O(1): growth doubles capacity.
  pub fn push_back(&mut self, byte: u8) -> Result<()> {
    let len = self.len();
    self.grow_for_append(1)?;
    self.raw_mut()[len] = byte;
    self.set_len(len + 1);
    Ok(())
  }

  /// Prepends one byte. O(len): every existing byte shifts right. Use
  /// [`ByteString::prepend`] for bulk front insertion.
  pub fn push_front(&mut self, byte: u8) -> Result<()> {
    let len = self.len();
    self.grow_for_append(1)?;
    let buf = self.raw_mut();
    buf.copy_within(0..len, 1);
    buf[0] = byte;
    self.set_len(len + 1);
    Ok(())
  }

  /// Removes and returns the last byte, or `None` when empty.
  pub fn pop_back(&mut self) -> Option<u8> {
    let len = self.len();
    if len == 0 {
      return None;
    }
    let byte = self.as_bytes()[len - 1];
    // set_len re-terminates at len - 1, zeroing the vacated byte
    self.set_len(len - 1);
    Some(byte)
  }

  /// Removes and returns the first byte, shifting the tail left, or `None`
  /// when empty.
  pub fn pop_front(&mut self) -> Option<u8> {
    let len = self.len();
    if len == 0 {
      return None;
    }
    let byte = self.as_bytes()[0];
    self.raw_mut().copy_within(1..len, 0);
    self.set_len(len - 1);
    Some(byte)
  }

  /// Appends `bytes` in a single growth pass (not per byte).
  pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> Result<()> {
    let len = self.len();
    self.insert(bytes, len)
  }

  /// Prepends `bytes` in a single growth-and-shift pass (not per byte).
  pub fn prepend(&mut self, bytes: impl AsRef<[u8]>) -> Result<()> {
    self.insert(bytes, 0)
  }

  /// Overwrites `bytes.len()` bytes in place starting at `at`. Fails with
  /// [`Error::InvalidRange`] when the replacement would run past the
  /// current length; it never grows the string.
  pub fn replace(&mut self, bytes: impl AsRef<[u8]>, at: usize) -> Result<()> {
    let bytes = bytes.as_ref();
    let len = self.len();
    match at.checked_add(bytes.len()) {
      Some(end) if end <= len => {
        self.raw_mut()[at..end].copy_from_slice(bytes);
        Ok(())
      }
      _ => Err(Error::InvalidRange {
        index: at,
        count: bytes.len(),
        len,
      }),
    }
  }

  /// Iterates the content bytes front to back. Lazy, finite, and
  /// restartable by calling `iter` again; the borrow rules prevent
  /// structural mutation while an iterator is live.
  #[inline]
  pub fn iter(&self) -> Bytes<'_> {
    self.as_bytes().iter().copied()
  }

  /// The full active buffer, terminator slot included. Writes through this
  /// slice must be followed by `set_len` to restore the terminator
  /// invariant.
  fn raw_mut(&mut self) -> &mut [u8] {
    match &mut self.repr {
      Repr::Inline(inline) => &mut inline.buf,
      Repr::Heap(heap) => heap.buf.as_mut_slice(),
    }
  }

  /// Records the logical length and writes the terminator at the new end.
  fn set_len(&mut self, new_len: usize) {
    debug_assert!(new_len <= self.capacity());
    match &mut self.repr {
      Repr::Inline(inline) => {
        inline.buf[new_len] = 0;
        inline.len = new_len as u8;
      }
      Repr::Heap(heap) => {
        heap.buf.as_mut_slice()[new_len] = 0;
        heap.len = new_len;
      }
    }
  }

  /// The representation selector: makes the capacity exactly
  /// `new_capacity`, promoting, demoting, or reallocating as the threshold
  /// comparison dictates. All-or-nothing: on allocation failure the string
  /// is left untouched and the error is propagated.
  fn transition(&mut self, new_capacity: usize) -> Result<()> {
    let len = self.len();
    if new_capacity <= INLINE_CAPACITY {
      if let Repr::Heap(heap) = &self.repr {
        debug_assert!(heap.len <= INLINE_CAPACITY);
        let mut inline = InlineBuf::empty();
        inline.buf[..heap.len].copy_from_slice(&heap.buf.as_slice()[..heap.len]);
        inline.len = heap.len as u8;
        // replacing the repr drops the old RawBuf, returning the heap
        // buffer through the stored allocator
        self.repr = Repr::Inline(inline);
      }
    } else if new_capacity != self.capacity() || self.is_inline() {
      debug_assert!(len <= new_capacity);
      let mut fresh = RawBuf::allocate(new_capacity, self.allocator)?;
      fresh.as_mut_slice()[..len].copy_from_slice(self.as_bytes());
      self.repr = Repr::Heap(HeapBuf { buf: fresh, len });
    }
    Ok(())
  }

  /// The appending growth policy: ensures room for `additional` more bytes
  /// with amortized-doubling, `max(capacity * 2, len + additional)`.
  fn grow_for_append(&mut self, additional: usize) -> Result<()> {
    let needed = self.len() + additional;
    let capacity = self.capacity();
    if needed > capacity {
      self.transition(needed.max(capacity * 2))?;
    }
    Ok(())
  }
}

impl Default for ByteString {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Clone for ByteString {
  /// Deep copy; never aliases heap storage with the source. Allocation
  /// failure on this infallible surface is routed to
  /// [`alloc::alloc::handle_alloc_error`]; use [`ByteString::try_clone`]
  /// to observe it as a result instead.
  fn clone(&self) -> Self {
    match self.try_clone() {
      Ok(string) => string,
      Err(_) => {
        let layout =
          Layout::from_size_align(self.len() + 1, 1).unwrap_or(Layout::new::<u8>());
        alloc::alloc::handle_alloc_error(layout)
      }
    }
  }
}

impl fmt::Debug for ByteString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ByteString({:?})", DisplayBytes(self.as_bytes()))
  }
}

impl fmt::Display for ByteString {
  /// Writes the content with non-printable bytes escaped.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &byte in self.as_bytes() {
      for c in core::ascii::escape_default(byte) {
        fmt::Write::write_char(f, c as char)?;
      }
    }
    Ok(())
  }
}

impl PartialEq for ByteString {
  /// Strict byte-wise equality over `[0, len())`: lengths first, then
  /// content. Capacity and representation never participate.
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl Eq for ByteString {}

impl PartialEq<[u8]> for ByteString {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&[u8]> for ByteString {
  #[inline]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<&[u8; N]> for ByteString {
  #[inline]
  fn eq(&self, other: &&[u8; N]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteString {
  #[inline]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&str> for ByteString {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<str> for ByteString {
  #[inline]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<ByteView<'_>> for ByteString {
  #[inline]
  fn eq(&self, other: &ByteView<'_>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<ByteString> for ByteView<'_> {
  #[inline]
  fn eq(&self, other: &ByteString) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialOrd for ByteString {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ByteString {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

impl Hash for ByteString {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl AsRef<[u8]> for ByteString {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl TryFrom<&[u8]> for ByteString {
  type Error = Error;

  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self> {
    Self::from_bytes(bytes)
  }
}

impl TryFrom<&str> for ByteString {
  type Error = Error;

  #[inline]
  fn try_from(s: &str) -> Result<Self> {
    Self::from_bytes(s.as_bytes())
  }
}

impl TryFrom<ByteView<'_>> for ByteString {
  type Error = Error;

  #[inline]
  fn try_from(view: ByteView<'_>) -> Result<Self> {
    Self::from_bytes(view)
  }
}

impl FromStr for ByteString {
  type Err = Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self> {
    Self::from_bytes(s.as_bytes())
  }
}

impl From<ByteString> for Vec<u8> {
  #[inline]
  fn from(string: ByteString) -> Self {
    string.as_bytes().to_vec()
  }
}

impl<'a> From<&'a ByteString> for ByteView<'a> {
  #[inline]
  fn from(string: &'a ByteString) -> Self {
    string.view()
  }
}

impl<'a> IntoIterator for &'a ByteString {
  type IntoIter = Bytes<'a>;
  type Item = u8;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl serde::Serialize for ByteString {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      serializer.serialize_bytes(self.as_bytes())
    }
  }

  impl<'de> serde::Deserialize<'de> for ByteString {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::Error as _;
      use serde::de::SeqAccess;
      use serde::de::Visitor;

      struct ByteStringVisitor;

      impl<'de> Visitor<'de> for ByteStringVisitor {
        type Value = ByteString;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
          formatter.write_str("bytes, a byte sequence, or a string")
        }

        fn visit_bytes<E: serde::de::Error>(
          self,
          bytes: &[u8],
        ) -> core::result::Result<Self::Value, E> {
          ByteString::from_bytes(bytes).map_err(E::custom)
        }

        fn visit_str<E: serde::de::Error>(
          self,
          s: &str,
        ) -> core::result::Result<Self::Value, E> {
          ByteString::from_bytes(s.as_bytes()).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut string = ByteString::new();
          while let Some(byte) = seq.next_element::<u8>()? {
            string.push_back(byte).map_err(A::Error::custom)?;
          }
          Ok(string)
        }
      }

      deserializer.deserialize_bytes(ByteStringVisitor)
    }
  }
}
