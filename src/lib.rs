//! # inlay
//!
//! ### Allocator-aware, small-string-optimized byte containers
//!
//! This crate provides growable containers that keep short content inline
//! in the value itself and spill to the heap only when they must, with the
//! heap side of the string routed through a caller-supplied allocator pair.
//! At present, this crate includes 2 main types: [`ByteString`] and
//! [`InlineVec`], which are described in detail below.
//!
//! ---
//!
//! ## [`ByteString`]
//!
//! A growable, null-terminated byte string with a small-string
//! optimization: content up to [`INLINE_CAPACITY`] bytes (23 on 64-bit
//! targets) lives in a fixed buffer inside the handle, and longer content
//! moves to a heap buffer obtained through the string's [`Allocator`]. The
//! representation switch is invisible through the API; whichever side is
//! active, the byte after the content is always `0`.
//!
//! ### Example
//!
//! ```rust
//! use inlay::ByteString;
//!
//! # fn main() -> Result<(), inlay::Error> {
//! let mut s = ByteString::try_from("This is a test")?;
//! assert!(s.is_inline());
//!
//! s.append(b" test test")?;
//! assert!(!s.is_inline());
//! assert_eq!(s.find_last(b"test"), Some(20));
//! # Ok(())
//! # }
//! ```
//!
//! ## [`ByteView`]
//!
//! The non-owning companion of [`ByteString`]: a borrowed window into a
//! string's bytes carrying the read-only half of the API (search,
//! comparison, iteration). A view never allocates, and its lifetime ties
//! it to the bytes it borrows.
//!
//! ## [`InlineVec`]
//!
//! The element-generic sibling of [`ByteString`]: an `InlineVec<T, N>`
//! stores up to `N` elements inline and follows the same capacity
//! discipline as the string once it spills to the heap.
//!
//! ---
//!
//! ## Custom allocators
//!
//! An [`Allocator`] is a pair of plain function pointers supplied at
//! construction time through the `*_in` constructors. Every heap byte a
//! string owns is allocated and freed through its stored pair, never
//! through the system allocator directly.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! These types are designed to be used in `no_std` environments (with
//! `alloc`), making them suitable for embedded systems and other
//! resource-constrained applications.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When disabled,
//!   which is the default, the crate operates in `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via the
//!   [serde](https://serde.rs) crate.
//!
//! > † <small>Enabled by default.</small>

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod allocator;
pub mod byte_string;
pub mod byte_view;
pub mod error;
pub mod inline_vec;

mod raw_buf;

pub use allocator::*;
pub use byte_string::*;
pub use byte_view::*;
pub use error::*;
pub use inline_vec::*;
