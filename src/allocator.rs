//! The pluggable allocator pair consumed by [`ByteString`](crate::ByteString).
//!
//! An [`Allocator`] is a plain value holding two function pointers: one that
//! allocates a raw byte buffer and one that returns it. A process-wide
//! default pair backed by the global heap is used when a container is
//! constructed without an explicit allocator. The pair stored in a container
//! is immutable after construction and is the only route through which that
//! container's heap storage is ever allocated or freed.

use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;

/// Signature of the allocation half of an [`Allocator`] pair.
///
/// Returns `None` on failure. On success the returned buffer is at least
/// `size` bytes, byte-aligned, and exclusively owned by the caller. The
/// buffer's contents may be uninitialized; [`RawBuf`](crate::raw_buf::RawBuf)
/// zeroes what it hands out.
pub type AllocateFn = fn(size: usize) -> Option<NonNull<u8>>;

/// Signature of the deallocation half of an [`Allocator`] pair.
///
/// # Safety
///
/// `ptr` must have been returned by the paired [`AllocateFn`] with the same
/// `size`, and must not be used after this call.
pub type DeallocateFn = unsafe fn(ptr: NonNull<u8>, size: usize);

/// A swappable pair of allocation/deallocation functions.
///
/// Supplied at construction time via the `*_in` constructors; every byte of
/// heap storage a container owns is obtained from `allocate` and returned
/// through `deallocate`, never through the system free directly.
///
/// # Example
///
/// ```rust
/// use inlay::{Allocator, ByteString};
///
/// let strings = ByteString::new_in(Allocator::default());
/// assert!(strings.is_inline());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Allocator {
  allocate:   AllocateFn,
  deallocate: DeallocateFn,
}

impl Allocator {
  /// Creates an `Allocator` from a custom allocate/deallocate pair.
  pub const fn new(allocate: AllocateFn, deallocate: DeallocateFn) -> Self {
    Self {
      allocate,
      deallocate,
    }
  }

  /// Requests `size` bytes from the allocation function.
  #[inline]
  pub fn allocate(&self, size: usize) -> Option<NonNull<u8>> {
    (self.allocate)(size)
  }

  /// Returns a buffer previously obtained from [`Allocator::allocate`].
  ///
  /// # Safety
  ///
  /// `ptr` must have come from this pair's allocate function with the same
  /// `size`, and must not be used afterward.
  #[inline]
  pub unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize) {
    unsafe { (self.deallocate)(ptr, size) }
  }
}

impl Default for Allocator {
  /// The process-wide default pair, backed by the global heap.
  #[inline]
  fn default() -> Self {
    Self::new(global_allocate, global_deallocate)
  }
}

impl fmt::Debug for Allocator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Allocator")
      .field("allocate", &(self.allocate as *const ()))
      .field("deallocate", &(self.deallocate as *const ()))
      .finish()
  }
}

fn global_allocate(size: usize) -> Option<NonNull<u8>> {
  let layout = Layout::from_size_align(size.max(1), 1).ok()?;
  // SAFETY: layout has non-zero size.
  NonNull::new(unsafe { alloc::alloc::alloc(layout) })
}

unsafe fn global_deallocate(ptr: NonNull<u8>, size: usize) {
  // SAFETY: size/align match the layout the buffer was allocated with, and
  // the caller guarantees `ptr` came from `global_allocate(size)`.
  unsafe {
    let layout = Layout::from_size_align_unchecked(size.max(1), 1);
    alloc::alloc::dealloc(ptr.as_ptr(), layout);
  }
}
