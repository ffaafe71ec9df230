//! Append-only growable buffers that freeze into immutable sequences.
//!
//! A [`GrowBuf`] accumulates elements in contiguous storage, doubling its
//! capacity whenever an append finds the buffer full, so building a result
//! of unknown size element by element stays amortized O(1) per append.
//! When the size is known up front, [`GrowBuf::with_capacity`] preallocates
//! it and the buffer never reallocates at all. Once construction is done,
//! [`GrowBuf::freeze`] materializes the contents into a [`Seq`], an
//! immutable right-sized sequence that is cheap to clone and safe to hand
//! out.
//!
//! Allocation is fallible throughout: creating a buffer with capacity and
//! growing one report [`AllocError`] instead of aborting, so callers decide
//! what out-of-memory means for them.
//!
//! The crate is `no_std` and only requires `alloc`.
//!
//! # Examples
//!
//! ```rust
//! use growbuf::ByteBuf;
//!
//! let mut buf = ByteBuf::new();
//! assert_eq!(buf.capacity(), 0);
//!
//! for byte in *b"Hello" {
//!     buf.push(byte)?;
//! }
//! assert_eq!(buf.len(), 5);
//! assert_eq!(buf.capacity(), 8); // doubled 0 -> 1 -> 2 -> 4 -> 8
//! # Ok::<(), growbuf::AllocError>(())
//! ```
//!
//! Freezing and viewing the result as text:
//!
//! ```rust
//! use growbuf::ByteBuf;
//!
//! let mut buf = ByteBuf::with_capacity(5)?;
//! for byte in *b"Hello" {
//!     buf.push(byte)?;
//! }
//! let text = buf.freeze();
//! assert_eq!(text.to_str(), Ok("Hello"));
//! # Ok::<(), growbuf::AllocError>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod buf;
mod error;
mod seq;
mod text;

#[cfg(test)]
mod tests;

pub use buf::{ByteBuf, GrowBuf};
pub use error::AllocError;
pub use seq::{ByteSeq, Seq};
pub use text::TextError;
