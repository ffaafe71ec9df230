//! The growable append-only buffer.
//!
//! [`GrowBuf`] owns a contiguous run of elements with an explicit length and
//! capacity. Elements at `[0, len)` are initialized and meaningful; storage
//! at `[len, capacity)` is allocated but logically absent. The buffer is
//! mutated only by appending and by explicit truncation, and is turned into
//! an immutable [`Seq`] once construction is complete.
//!
//! Growth follows the doubling policy: when an append finds `len ==
//! capacity`, storage grows to exactly `max(1, capacity * 2)` elements and
//! the existing elements move once. Geometric doubling bounds cumulative
//! moves across N appends to roughly 2N, so appending is amortized O(1),
//! in contrast to rebuilding an immutable sequence on every append, which
//! costs O(N²) in total copies. When the final size is known up front,
//! [`GrowBuf::with_capacity`] removes even the doubling reallocations.
//!
//! # Examples
//!
//! ```rust
//! use growbuf::ByteBuf;
//!
//! let mut buf = ByteBuf::with_capacity(5)?;
//! for byte in *b"Hello" {
//!     buf.push(byte)?;
//! }
//! assert_eq!(buf.len(), 5);
//! assert_eq!(buf.capacity(), 5);
//! assert_eq!(buf.freeze().to_str(), Ok("Hello"));
//! # Ok::<(), growbuf::AllocError>(())
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::{AllocError, Seq};

/// A growable buffer of bytes, the most common instantiation.
pub type ByteBuf = GrowBuf<u8>;

/// An append-only contiguous buffer with explicit length and capacity.
///
/// See the [module documentation](self) for the growth policy and cost
/// model. All operations that may allocate return [`AllocError`] on
/// allocation failure; nothing is retried at this layer.
pub struct GrowBuf<T> {
    // Capacity transitions go through `ensure_capacity` exclusively, so the
    // vector's own amortization never kicks in and `elems.capacity()` is
    // always a value this module chose.
    elems: Vec<T>,
}

/// Next capacity under the doubling policy: `max(1, cap * 2)`.
///
/// Saturates at `usize::MAX`; the allocation attempt itself reports failure
/// long before the saturation bound matters.
const fn next_capacity(cap: usize) -> usize {
    if cap == 0 { 1 } else { cap.saturating_mul(2) }
}

impl<T> GrowBuf<T> {
    /// Creates an empty buffer with capacity 0.
    ///
    /// Does not allocate; the first append allocates capacity 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// Creates an empty buffer preallocated for exactly `capacity` elements.
    ///
    /// A buffer sized to the known final element count never reallocates
    /// while being filled: appending up to `capacity` elements leaves the
    /// capacity untouched. `with_capacity(0)` is valid and equivalent to
    /// [`GrowBuf::new`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if storage for `capacity` elements cannot be
    /// obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut elems = Vec::new();
        elems
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::new(capacity))?;
        Ok(Self { elems })
    }

    /// Creates a buffer holding a copy of `elems`, with capacity equal to
    /// its length.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if storage cannot be obtained.
    pub fn from_slice(elems: &[T]) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut buf = Self::with_capacity(elems.len())?;
        buf.elems.extend_from_slice(elems);
        Ok(buf)
    }

    /// Appends one element.
    ///
    /// With spare capacity this writes at index `len` and increments the
    /// length, nothing else. At `len == capacity` the storage first grows to
    /// exactly `max(1, capacity * 2)` elements, moving the existing elements
    /// once. Any reference previously taken into the buffer cannot be live
    /// across this call; the borrow checker enforces what the growth step
    /// would otherwise invalidate.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the growth step cannot obtain storage. The
    /// buffer is unchanged and `elem` is dropped.
    pub fn push(&mut self, elem: T) -> Result<(), AllocError> {
        let needed = self
            .elems
            .len()
            .checked_add(1)
            .ok_or(AllocError::new(usize::MAX))?;
        self.ensure_capacity(needed)?;
        self.elems.push(elem);
        Ok(())
    }

    /// Appends every element of `elems`, growing at most once.
    ///
    /// A short slice grows the buffer the same way [`push`](Self::push)
    /// would; a slice longer than one doubling takes the capacity straight
    /// to the required length instead of doubling repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if storage cannot be obtained; the buffer is
    /// unchanged.
    pub fn extend_from_slice(&mut self, elems: &[T]) -> Result<(), AllocError>
    where
        T: Clone,
    {
        let needed = self
            .elems
            .len()
            .checked_add(elems.len())
            .ok_or(AllocError::new(usize::MAX))?;
        self.ensure_capacity(needed)?;
        self.elems.extend_from_slice(elems);
        Ok(())
    }

    /// Preallocates room for exactly `additional` more elements.
    ///
    /// Unlike the growth step inside appends this does not double: it is the
    /// post-construction form of [`GrowBuf::with_capacity`], for callers
    /// that learn the final size after creating the buffer. Does nothing
    /// when the capacity already suffices.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if storage cannot be obtained.
    pub fn reserve_exact(&mut self, additional: usize) -> Result<(), AllocError> {
        let requested = self
            .elems
            .len()
            .checked_add(additional)
            .ok_or(AllocError::new(usize::MAX))?;
        if requested <= self.elems.capacity() {
            return Ok(());
        }
        self.elems
            .try_reserve_exact(additional)
            .map_err(|_| AllocError::new(requested))
    }

    /// Number of logically present elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if no elements have been appended (or all were
    /// truncated away).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Allocated storage size in elements. Always at least [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    /// The initialized prefix, `[0, len)`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elems.as_slice()
    }

    /// Drops every element past `len`. Capacity is retained.
    ///
    /// Does nothing when `len` is not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.elems.truncate(len);
    }

    /// Drops all elements, resetting the length to 0. Capacity is retained.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Materializes the contents into an immutable [`Seq`], copying the
    /// `len` logical elements once into right-sized shared storage.
    ///
    /// The buffer itself is untouched: length and capacity stay as they
    /// were, and it can keep growing afterwards. Freezing twice without an
    /// intervening append yields sequences with identical contents.
    #[must_use]
    pub fn freeze(&self) -> Seq<T>
    where
        T: Clone,
    {
        Seq::from(self.elems.as_slice())
    }

    /// Materializes the contents into an immutable [`Seq`], consuming the
    /// buffer.
    #[must_use]
    pub fn into_seq(self) -> Seq<T> {
        Seq::from(self.elems)
    }

    /// Unwraps the buffer into its backing vector, length and capacity
    /// intact.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elems
    }

    /// Asserts the structural invariants. Used by the fuzz harness.
    ///
    /// # Panics
    ///
    /// Panics if an invariant is violated.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(
            self.elems.len() <= self.elems.capacity(),
            "length {} exceeds capacity {}",
            self.elems.len(),
            self.elems.capacity(),
        );
    }

    /// Grows storage so that `needed` elements fit, applying the doubling
    /// policy. The new capacity is `max(needed, max(1, capacity * 2))`, so
    /// single-element appends double while oversized bulk requests go
    /// straight to the required size.
    fn ensure_capacity(&mut self, needed: usize) -> Result<(), AllocError> {
        let cap = self.elems.capacity();
        if needed <= cap {
            return Ok(());
        }
        let target = next_capacity(cap).max(needed);
        // target >= needed > cap >= len, so this cannot underflow.
        let additional = target - self.elems.len();
        self.elems
            .try_reserve_exact(additional)
            .map_err(|_| AllocError::new(target))
    }
}

impl<T> Default for GrowBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowBuf<T> {
    /// Clones contents and capacity, so preallocation decisions survive the
    /// copy.
    fn clone(&self) -> Self {
        let mut elems = Vec::new();
        elems.reserve_exact(self.elems.capacity());
        elems.extend_from_slice(&self.elems);
        Self { elems }
    }
}

impl<T> fmt::Debug for GrowBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowBuf")
            .field("len", &self.len())
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T> core::ops::Deref for GrowBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for GrowBuf<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for GrowBuf<T> {
    /// Adopts the vector's storage as-is, length and capacity included.
    fn from(elems: Vec<T>) -> Self {
        Self { elems }
    }
}

impl<T: PartialEq> PartialEq for GrowBuf<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowBuf<T> {}

impl<'a, T> IntoIterator for &'a GrowBuf<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(any(test, feature = "serde"))]
impl<T: serde::Serialize> serde::Serialize for GrowBuf<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for GrowBuf<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::*;

    #[test]
    fn new_is_empty_without_allocating() {
        let buf = GrowBuf::<u8>::new();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let buf = GrowBuf::<u8>::with_capacity(7).unwrap();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 7);
    }

    #[test]
    fn push_appends_in_order() {
        let mut buf = GrowBuf::new();
        for n in 0u8..4 {
            buf.push(n).unwrap();
        }
        assert_eq!(buf.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn truncate_and_clear_retain_capacity() {
        let mut buf = GrowBuf::from_slice(b"abcdef").unwrap();
        let cap = buf.capacity();

        buf.truncate(2);
        assert_eq!(buf.as_slice(), b"ab");
        assert_eq!(buf.capacity(), cap);

        // Truncating past the end is a no-op.
        buf.truncate(100);
        assert_eq!(buf.len(), 2);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn clone_preserves_capacity() {
        let mut buf = GrowBuf::<u8>::with_capacity(32).unwrap();
        buf.extend_from_slice(b"xyz").unwrap();

        let copy = buf.clone();
        assert_eq!(copy.as_slice(), b"xyz");
        assert_eq!(copy.capacity(), 32);
    }

    #[test]
    fn from_vec_adopts_length_and_capacity() {
        let mut v = vec![1u8, 2, 3];
        v.reserve_exact(5);
        let cap = v.capacity();

        let buf = GrowBuf::from(v);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn into_vec_round_trips_through_from() {
        let mut buf = GrowBuf::<u8>::with_capacity(8).unwrap();
        buf.extend_from_slice(b"abc").unwrap();

        let v = buf.into_vec();
        assert_eq!(v.as_slice(), b"abc");
        assert_eq!(v.capacity(), 8);

        let back = GrowBuf::from(v);
        assert_eq!(back.as_slice(), b"abc");
        assert_eq!(back.capacity(), 8);
    }

    #[test]
    fn reserve_exact_is_a_noop_when_capacity_suffices() {
        let mut buf = GrowBuf::<u8>::with_capacity(10).unwrap();
        buf.push(1).unwrap();
        buf.reserve_exact(4).unwrap();
        assert_eq!(buf.capacity(), 10);

        buf.reserve_exact(20).unwrap();
        assert_eq!(buf.capacity(), 21);
    }

    #[test]
    fn debug_reports_shape_not_contents() {
        let mut buf = GrowBuf::new();
        buf.extend_from_slice(b"hi").unwrap();
        assert_eq!(format!("{buf:?}"), "GrowBuf { len: 2, cap: 2 }");
    }

    #[test]
    fn deref_exposes_the_initialized_prefix() {
        let buf = GrowBuf::from_slice(&[10u8, 20, 30]).unwrap();
        assert_eq!(buf[1], 20);
        assert_eq!(buf.first(), Some(&10));
    }
}
