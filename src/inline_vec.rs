//! A generic inline-first growable buffer.
//!
//! `InlineVec<T, N>` is the element-generic sibling of
//! [`ByteString`](crate::ByteString): up to `N` elements live in storage
//! inside the value itself, and the container spills to a heap-backed
//! `Vec<T>` only when the length crosses `N`. It follows the same capacity
//! discipline as the string — amortized-doubling growth on append, exact
//! capacity on explicit reservation, demotion back to inline storage on
//! [`shrink_to_fit`](InlineVec::shrink_to_fit) — expressed once over a type
//! parameter instead of being stamped out per element type.
//!
//! ## Examples
//!
//! ```rust
//! use inlay::InlineVec;
//!
//! let mut vec: InlineVec<u32, 4> = InlineVec::new();
//! for i in 0..4 {
//!   vec.push(i);
//! }
//! assert!(vec.is_inline());
//!
//! // the fifth element crosses the threshold
//! vec.push(4);
//! assert!(!vec.is_inline());
//! assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
//!
//! vec.pop();
//! vec.shrink_to_fit();
//! assert!(vec.is_inline());
//! ```

use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem::MaybeUninit;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::slice;

use alloc::vec::Vec;

use crate::Error;
use crate::Result;

/// A growable container storing up to `N` elements inline before spilling
/// to the heap.
///
/// While the length is at most `N` (and the container has not been grown
/// past it), elements live in the value itself and no allocation occurs.
/// Beyond that, all elements move into a `Vec<T>`; `shrink_to_fit` moves
/// them back once they fit again. Indexed operations are bounds checked and
/// report [`Error::OutOfBounds`] rather than truncating or ignoring bad
/// input.
pub struct InlineVec<T, const N: usize> {
  repr: VecRepr<T, N>,
}

enum VecRepr<T, const N: usize> {
  /// The first `len` slots are initialized.
  Inline {
    slots: [MaybeUninit<T>; N],
    len:   usize,
  },
  /// All elements live in the vector; no inline slot is initialized.
  Heap(Vec<T>),
}

impl<T, const N: usize> InlineVec<T, N> {
  /// Creates an empty container. No heap allocation occurs until more than
  /// `N` elements are pushed.
  pub const fn new() -> Self {
    Self {
      repr: VecRepr::Inline {
        // SAFETY: an array of uninitialized `MaybeUninit<T>` is valid.
        slots: unsafe { MaybeUninit::uninit().assume_init() },
        len:   0,
      },
    }
  }

  /// Creates a container able to hold `capacity` elements without
  /// reallocating: inline when `capacity <= N`, otherwise an eager heap
  /// allocation of exactly `capacity` slots.
  pub fn with_capacity(capacity: usize) -> Self {
    if capacity <= N {
      Self::new()
    } else {
      Self {
        repr: VecRepr::Heap(Vec::with_capacity(capacity)),
      }
    }
  }

  /// Number of elements currently stored.
  pub fn len(&self) -> usize {
    match &self.repr {
      VecRepr::Inline { len, .. } => *len,
      VecRepr::Heap(vec) => vec.len(),
    }
  }

  /// Returns `true` when the container holds no elements.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Slots available in the active representation: `N` while inline, the
  /// heap vector's capacity otherwise.
  pub fn capacity(&self) -> usize {
    match &self.repr {
      VecRepr::Inline { .. } => N,
      VecRepr::Heap(vec) => vec.capacity(),
    }
  }

  /// Returns `true` when `len() == capacity()`.
  pub fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Returns `true` while the inline representation is active.
  pub const fn is_inline(&self) -> bool {
    matches!(self.repr, VecRepr::Inline { .. })
  }

  /// All elements as a slice.
  pub fn as_slice(&self) -> &[T] {
    match &self.repr {
      VecRepr::Inline { slots, len } => {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(slots.as_ptr().cast::<T>(), *len) }
      }
      VecRepr::Heap(vec) => vec.as_slice(),
    }
  }

  /// All elements as a mutable slice.
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    match &mut self.repr {
      VecRepr::Inline { slots, len } => {
        // SAFETY: the first `len` slots are initialized and exclusively
        // borrowed through `&mut self`.
        unsafe { slice::from_raw_parts_mut(slots.as_mut_ptr().cast::<T>(), *len) }
      }
      VecRepr::Heap(vec) => vec.as_mut_slice(),
    }
  }

  /// Appends an element, spilling to the heap when the inline slots are
  /// exhausted. Spill and heap growth both follow the amortized-doubling
  /// policy `max(capacity * 2, len + 1)`.
  pub fn push(&mut self, value: T) {
    match &mut self.repr {
      VecRepr::Inline { slots, len } if *len < N => {
        slots[*len].write(value);
        *len += 1;
        return;
      }
      VecRepr::Heap(vec) => {
        grow_for_append(vec, 1);
        vec.push(value);
        return;
      }
      VecRepr::Inline { .. } => {}
    }
    self.spill(1);
    if let VecRepr::Heap(vec) = &mut self.repr {
      vec.push(value);
    }
  }

  /// Removes and returns the last element, or `None` when empty. The
  /// representation is left as is; use
  /// [`shrink_to_fit`](InlineVec::shrink_to_fit) to demote.
  pub fn pop(&mut self) -> Option<T> {
    match &mut self.repr {
      VecRepr::Inline { slots, len } => {
        if *len == 0 {
          return None;
        }
        *len -= 1;
        // SAFETY: slot `len` was initialized; it is read out exactly once
        // and treated as uninitialized afterward.
        Some(unsafe { slots[*len].assume_init_read() })
      }
      VecRepr::Heap(vec) => vec.pop(),
    }
  }

  /// Inserts `value` at `index`, shifting the tail right. Fails with
  /// [`Error::OutOfBounds`] when `index > len()`.
  pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
    let len = self.len();
    if index > len {
      return Err(Error::OutOfBounds { index, len });
    }
    match &mut self.repr {
      VecRepr::Inline { slots, len } if *len < N => {
        // SAFETY: shifting `len - index` initialized slots one position
        // right stays within the `N` slots because `len < N`.
        unsafe {
          let base = slots.as_mut_ptr().cast::<T>();
          ptr::copy(base.add(index), base.add(index + 1), *len - index);
          base.add(index).write(value);
        }
        *len += 1;
        return Ok(());
      }
      VecRepr::Heap(vec) => {
        grow_for_append(vec, 1);
        vec.insert(index, value);
        return Ok(());
      }
      VecRepr::Inline { .. } => {}
    }
    self.spill(1);
    if let VecRepr::Heap(vec) = &mut self.repr {
      vec.insert(index, value);
    }
    Ok(())
  }

  /// Removes and returns the element at `index`, shifting the tail left.
  /// Fails with [`Error::OutOfBounds`] when `index >= len()`.
  pub fn remove(&mut self, index: usize) -> Result<T> {
    let len = self.len();
    if index >= len {
      return Err(Error::OutOfBounds { index, len });
    }
    match &mut self.repr {
      VecRepr::Inline { slots, len } => {
        // SAFETY: slot `index` is initialized; after the read the tail is
        // shifted left so every slot below the new length is initialized
        // exactly once.
        let value = unsafe {
          let base = slots.as_mut_ptr().cast::<T>();
          let value = base.add(index).read();
          ptr::copy(base.add(index + 1), base.add(index), *len - index - 1);
          value
        };
        *len -= 1;
        Ok(value)
      }
      VecRepr::Heap(vec) => Ok(vec.remove(index)),
    }
  }

  /// Removes all elements. Capacity and representation are unchanged, the
  /// same contract as [`ByteString::clear`](crate::ByteString::clear).
  pub fn clear(&mut self) {
    match &mut self.repr {
      VecRepr::Inline { slots, len } => {
        let count = *len;
        *len = 0;
        for slot in &mut slots[..count] {
          // SAFETY: the first `count` slots were initialized; `len` is
          // already zeroed so a panic mid-drop cannot double-drop.
          unsafe { slot.assume_init_drop() };
        }
      }
      VecRepr::Heap(vec) => vec.clear(),
    }
  }

  /// Drops slack capacity: demotes to inline storage when the elements fit
  /// in `N` slots, otherwise shrinks the heap vector to an exact fit.
  pub fn shrink_to_fit(&mut self) {
    match &mut self.repr {
      VecRepr::Inline { .. } => {}
      VecRepr::Heap(vec) if vec.len() > N => vec.shrink_to_fit(),
      VecRepr::Heap(vec) => {
        let mut slots: [MaybeUninit<T>; N] =
          // SAFETY: an array of uninitialized `MaybeUninit<T>` is valid.
          unsafe { MaybeUninit::uninit().assume_init() };
        let len = vec.len();
        for (slot, value) in slots.iter_mut().zip(vec.drain(..)) {
          slot.write(value);
        }
        self.repr = VecRepr::Inline { slots, len };
      }
    }
  }

  /// Iterates shared references to the elements.
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  /// Iterates mutable references to the elements.
  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }

  /// Consumes the container and returns a plain `Vec<T>` with the same
  /// contents, moving the inline elements out with at most one allocation.
  pub fn into_vec(mut self) -> Vec<T> {
    match &mut self.repr {
      VecRepr::Inline { slots, len } => {
        let count = *len;
        *len = 0;
        let mut vec = Vec::with_capacity(count);
        for slot in &slots[..count] {
          // SAFETY: the first `count` slots were initialized; `len` was
          // zeroed above so drop will not touch them again.
          vec.push(unsafe { slot.assume_init_read() });
        }
        vec
      }
      VecRepr::Heap(heap) => core::mem::take(heap),
    }
  }

  /// Moves the inline elements into a heap vector with room for
  /// `additional` more, using the appending growth policy.
  fn spill(&mut self, additional: usize) {
    if let VecRepr::Inline { slots, len } = &mut self.repr {
      let count = *len;
      *len = 0;
      let mut vec = Vec::with_capacity((N + additional).max(N * 2));
      for slot in &slots[..count] {
        // SAFETY: the first `count` slots were initialized; `len` was
        // zeroed above so they are moved out exactly once.
        vec.push(unsafe { slot.assume_init_read() });
      }
      self.repr = VecRepr::Heap(vec);
    }
  }
}

/// Shared growth rule for the heap representation:
/// `max(capacity * 2, len + additional)`, reserved exactly.
fn grow_for_append<T>(vec: &mut Vec<T>, additional: usize) {
  let needed = vec.len() + additional;
  if needed > vec.capacity() {
    let target = needed.max(vec.capacity() * 2);
    vec.reserve_exact(target - vec.len());
  }
}

impl<T, const N: usize> Drop for InlineVec<T, N> {
  fn drop(&mut self) {
    // heap storage drops itself; inline slots need explicit drops
    self.clear();
  }
}

impl<T, const N: usize> Default for InlineVec<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone, const N: usize> Clone for InlineVec<T, N> {
  /// Deep copy. Like [`ByteString`](crate::ByteString), the copy's
  /// representation is re-derived from the length, so a heap-backed source
  /// whose elements fit inline clones to an inline container.
  fn clone(&self) -> Self {
    let mut copy = Self::with_capacity(self.len());
    for value in self.as_slice() {
      copy.push(value.clone());
    }
    copy
  }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InlineVec<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "InlineVec<{N}> {slice:?}", slice = self.as_slice())
  }
}

impl<T: PartialEq, const N: usize> PartialEq for InlineVec<T, N> {
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for InlineVec<T, N> {
  fn eq(&self, other: &[T]) -> bool {
    self.as_slice() == other
  }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T]> for InlineVec<T, N> {
  fn eq(&self, other: &&[T]) -> bool {
    self.as_slice() == *other
  }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for InlineVec<T, N> {
  fn eq(&self, other: &[T; M]) -> bool {
    self.as_slice() == other
  }
}

impl<T: Eq, const N: usize> Eq for InlineVec<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for InlineVec<T, N> {
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }
}

impl<T: Ord, const N: usize> Ord for InlineVec<T, N> {
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: Hash, const N: usize> Hash for InlineVec<T, N> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_slice().hash(state);
  }
}

impl<T, const N: usize> Index<usize> for InlineVec<T, N> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.as_slice()[index]
  }
}

impl<T, const N: usize> IndexMut<usize> for InlineVec<T, N> {
  fn index_mut(&mut self, index: usize) -> &mut T {
    &mut self.as_mut_slice()[index]
  }
}

impl<T, const N: usize> Extend<T> for InlineVec<T, N> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push(value);
    }
  }
}

impl<T, const N: usize> FromIterator<T> for InlineVec<T, N> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut vec = Self::new();
    vec.extend(iter);
    vec
  }
}

impl<T, const N: usize> IntoIterator for InlineVec<T, N> {
  type IntoIter = alloc::vec::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.into_vec().into_iter()
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineVec<T, N> {
  type IntoIter = slice::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut InlineVec<T, N> {
  type IntoIter = slice::IterMut<'a, T>;
  type Item = &'a mut T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl<T, const N: usize> serde::Serialize for InlineVec<T, N>
  where
    T: serde::Serialize,
  {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      for value in self.as_slice() {
        seq.serialize_element(value)?;
      }
      seq.end()
    }
  }

  impl<'de, T, const N: usize> serde::Deserialize<'de> for InlineVec<T, N>
  where
    T: serde::Deserialize<'de>,
  {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::SeqAccess;
      use serde::de::Visitor;

      struct InlineVecVisitor<T, const N: usize> {
        marker: core::marker::PhantomData<T>,
      }

      impl<'de, T, const N: usize> Visitor<'de> for InlineVecVisitor<T, N>
      where
        T: serde::Deserialize<'de>,
      {
        type Value = InlineVec<T, N>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
          formatter.write_str("a sequence")
        }

        fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut vec = InlineVec::new();
          while let Some(value) = seq.next_element::<T>()? {
            vec.push(value);
          }
          Ok(vec)
        }
      }

      deserializer.deserialize_seq(InlineVecVisitor::<T, N> {
        marker: core::marker::PhantomData,
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_and_pop_inline() {
    let mut vec: InlineVec<u32, 4> = InlineVec::new();
    assert!(vec.is_inline());
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 4);

    vec.push(1);
    vec.push(2);
    vec.push(3);
    assert!(vec.is_inline());
    assert_eq!(vec.as_slice(), &[1, 2, 3]);

    assert_eq!(vec.pop(), Some(3));
    assert_eq!(vec.as_slice(), &[1, 2]);
    assert!(vec.is_inline());
  }

  #[test]
  fn spill_follows_doubling_policy() {
    let mut vec: InlineVec<u32, 3> = InlineVec::new();
    vec.extend([10, 20, 30]);
    assert!(vec.is_inline());

    vec.push(40);
    assert!(!vec.is_inline());
    assert_eq!(vec.as_slice(), &[10, 20, 30, 40]);
    // spill from 3 inline slots reserves max(3 * 2, 3 + 1)
    assert_eq!(vec.capacity(), 6);
  }

  #[test]
  fn shrink_to_fit_demotes() {
    let mut vec: InlineVec<u32, 3> = InlineVec::new();
    vec.extend([1, 2, 3, 4]);
    assert!(!vec.is_inline());

    vec.pop();
    // pop alone never demotes
    assert!(!vec.is_inline());
    vec.shrink_to_fit();
    assert!(vec.is_inline());
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
  }

  #[test]
  fn shrink_to_fit_on_long_content_stays_heap() {
    let mut vec: InlineVec<u8, 2> = InlineVec::with_capacity(16);
    vec.extend([1, 2, 3, 4]);
    vec.shrink_to_fit();
    assert!(!vec.is_inline());
    assert_eq!(vec.capacity(), 4);
  }

  #[test]
  fn with_capacity_selects_representation() {
    let inline: InlineVec<u8, 4> = InlineVec::with_capacity(2);
    assert!(inline.is_inline());
    assert_eq!(inline.capacity(), 4);

    let heap: InlineVec<u8, 4> = InlineVec::with_capacity(12);
    assert!(!heap.is_inline());
    assert_eq!(heap.capacity(), 12);
  }

  #[test]
  fn insert_and_remove_with_bounds() {
    let mut vec: InlineVec<u8, 4> = InlineVec::new();
    vec.extend([1, 3]);
    vec.insert(1, 2).unwrap();
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    vec.insert(3, 4).unwrap();
    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);

    assert_eq!(vec.insert(6, 9), Err(Error::OutOfBounds { index: 6, len: 4 }));

    assert_eq!(vec.remove(0), Ok(1));
    assert_eq!(vec.as_slice(), &[2, 3, 4]);
    assert_eq!(vec.remove(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
  }

  #[test]
  fn insert_into_full_inline_spills() {
    let mut vec: InlineVec<u8, 2> = InlineVec::new();
    vec.extend([1, 3]);
    vec.insert(1, 2).unwrap();
    assert!(!vec.is_inline());
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
  }

  #[test]
  fn clear_keeps_capacity() {
    let mut inline: InlineVec<u8, 4> = InlineVec::new();
    inline.extend([1, 2]);
    inline.clear();
    assert!(inline.is_empty());
    assert!(inline.is_inline());

    let mut heap: InlineVec<u8, 1> = InlineVec::new();
    heap.extend([9, 10, 11]);
    let capacity = heap.capacity();
    heap.clear();
    assert!(heap.is_empty());
    assert!(!heap.is_inline());
    assert_eq!(heap.capacity(), capacity);
  }

  #[test]
  fn drops_run_exactly_once() {
    use alloc::rc::Rc;

    let tracker = Rc::new(());
    {
      let mut vec: InlineVec<Rc<()>, 2> = InlineVec::new();
      for _ in 0..5 {
        vec.push(Rc::clone(&tracker));
      }
      vec.pop();
      vec.remove(0).unwrap();
      assert_eq!(Rc::strong_count(&tracker), 4);
    }
    assert_eq!(Rc::strong_count(&tracker), 1);
  }

  #[test]
  fn clone_rederives_representation() {
    let mut vec: InlineVec<u8, 3> = InlineVec::new();
    vec.extend([1, 2, 3, 4]);
    vec.pop();
    assert!(!vec.is_inline());

    let copy = vec.clone();
    assert!(copy.is_inline());
    assert_eq!(copy, vec);
  }

  #[test]
  fn indexing_and_mutation() {
    let mut vec: InlineVec<i32, 2> = InlineVec::new();
    vec.extend([10, 20]);
    assert_eq!(vec[0], 10);
    vec[1] = 25;
    assert_eq!(vec.as_slice(), &[10, 25]);

    for value in vec.iter_mut() {
      *value *= 2;
    }
    assert_eq!(vec.as_slice(), &[20, 50]);
  }

  #[test]
  fn into_vec_and_iterators() {
    let vec: InlineVec<u8, 2> = [1, 2, 3].into_iter().collect();
    assert_eq!(vec.as_slice(), &[1, 2, 3]);

    let collected: Vec<u8> = vec.iter().copied().collect();
    assert_eq!(collected, &[1, 2, 3]);

    let owned = vec.into_vec();
    assert_eq!(owned, alloc::vec![1, 2, 3]);
  }

  #[test]
  fn zero_inline_capacity_spills_immediately() {
    let mut vec: InlineVec<i32, 0> = InlineVec::new();
    assert!(vec.is_inline());
    vec.push(1);
    assert!(!vec.is_inline());
    assert_eq!(vec.as_slice(), &[1]);
  }

  #[test]
  fn ordering_and_hash() {
    use std::collections::hash_map::DefaultHasher;

    let mut a: InlineVec<i32, 2> = InlineVec::new();
    a.extend([1, 2]);
    let mut b: InlineVec<i32, 2> = InlineVec::new();
    b.extend([1, 3]);
    assert!(a < b);

    let mut h1 = DefaultHasher::new();
    a.hash(&mut h1);
    let mut h2 = DefaultHasher::new();
    a.clone().hash(&mut h2);
    assert_eq!(h1.finish(), h2.finish());
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;

    #[test]
    fn serialize_and_deserialize() {
      let mut vec: InlineVec<u32, 2> = InlineVec::new();
      vec.extend([42, 7, 99]);
      let json = serde_json::to_string(&vec).unwrap();
      assert_eq!(json, "[42,7,99]");
      let back: InlineVec<u32, 2> = serde_json::from_str(&json).unwrap();
      assert_eq!(back.as_slice(), &[42, 7, 99]);
    }
  }
}
