//! Exclusively-owned heap storage for the long representation of
//! [`ByteString`](crate::ByteString).
//!
//! A [`RawBuf`] owns a single allocation of `capacity + 1` bytes (content
//! plus the terminator slot) and remembers the [`Allocator`] it came from so
//! its drop path always returns the memory to the right pair, never to the
//! default system free. This is the only module in the crate that touches
//! raw memory.

use core::ptr::NonNull;
use core::slice;

use crate::Allocator;
use crate::Error;
use crate::Result;

/// An owned, allocator-backed byte buffer of `capacity + 1` bytes.
///
/// Not a public type: the string's buffer manager is its only client.
/// `RawBuf` knows nothing about logical lengths or terminators beyond
/// reserving the extra slot; it hands out the whole zeroed region as a
/// slice and frees itself on drop.
#[derive(Debug)]
pub(crate) struct RawBuf {
  ptr:       NonNull<u8>,
  capacity:  usize,
  allocator: Allocator,
}

impl RawBuf {
  /// Allocates a zeroed buffer able to hold `capacity` content bytes plus
  /// the terminator slot. Fails with [`Error::AllocationFailure`] and no
  /// side effects if the allocator refuses.
  pub(crate) fn allocate(capacity: usize, allocator: Allocator) -> Result<Self> {
    let size = capacity + 1;
    let ptr = allocator
      .allocate(size)
      .ok_or(Error::AllocationFailure { size })?;
    // The allocator contract permits uninitialized memory; zero it so the
    // rest of the crate can treat the region as ordinary initialized bytes.
    // SAFETY: `ptr` is valid for `size` writes.
    unsafe { ptr.as_ptr().write_bytes(0, size) };
    Ok(Self {
      ptr,
      capacity,
      allocator,
    })
  }

  /// Number of content bytes the buffer can hold (terminator excluded).
  #[inline]
  pub(crate) const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Base pointer of the buffer.
  #[inline]
  pub(crate) const fn as_ptr(&self) -> *const u8 {
    self.ptr.as_ptr()
  }

  /// The full region, terminator slot included.
  #[inline]
  pub(crate) fn as_slice(&self) -> &[u8] {
    // SAFETY: the buffer is `capacity + 1` initialized bytes.
    unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.capacity + 1) }
  }

  /// The full region, mutable, terminator slot included.
  #[inline]
  pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
    // SAFETY: the buffer is `capacity + 1` initialized bytes, exclusively
    // owned through `&mut self`.
    unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity + 1) }
  }
}

impl Drop for RawBuf {
  fn drop(&mut self) {
    // SAFETY: `ptr` came from `self.allocator.allocate(capacity + 1)` and
    // is dropped exactly once.
    unsafe { self.allocator.deallocate(self.ptr, self.capacity + 1) };
  }
}

// The buffer is an exclusively-owned allocation; sending it to another
// thread is sound as long as the allocator pair is (callers impose external
// locking per the crate's concurrency contract).
unsafe impl Send for RawBuf {}
unsafe impl Sync for RawBuf {}
