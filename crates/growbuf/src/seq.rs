//! Immutable sequences produced by freezing a buffer.
//!
//! A [`Seq`] is the materialized form of a [`GrowBuf`](crate::GrowBuf):
//! exactly `len` elements in right-sized shared storage, with no spare
//! capacity and no append operation. Cloning a sequence shares the storage
//! instead of copying it, so handing a frozen result to several consumers
//! is cheap. Deriving a new sequence from existing ones reserves the exact
//! final size up front and never grows mid-build.

use alloc::{sync::Arc, vec::Vec};
use core::fmt;

use crate::GrowBuf;

/// An immutable sequence of bytes, the most common instantiation.
pub type ByteSeq = Seq<u8>;

/// An immutable, contiguous sequence of elements.
///
/// Obtained from [`GrowBuf::freeze`] or [`GrowBuf::into_seq`], or built
/// directly from a slice, vector, or iterator. The element storage is
/// shared on clone and dropped with the last handle.
pub struct Seq<T> {
    elems: Arc<[T]>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elems: Arc::default(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// All elements, in append order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Concatenates two sequences into a new one.
    ///
    /// Neither input is modified. The result is assembled into storage
    /// reserved at exactly `self.len() + other.len()` elements, so deriving
    /// a sequence this way costs the combined length in copies, however the
    /// inputs were produced. Rebuilding a sequence one element at a time
    /// through `concat` therefore costs quadratic total work; that is what
    /// [`GrowBuf`] exists to avoid.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut elems = Vec::with_capacity(self.len() + other.len());
        elems.extend_from_slice(self.as_slice());
        elems.extend_from_slice(other.as_slice());
        Self {
            elems: elems.into(),
        }
    }

    /// Thaws the sequence back into a buffer so more elements can be
    /// appended, copying the elements into fresh storage with capacity
    /// equal to the current length.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`](crate::AllocError) if storage cannot be
    /// obtained.
    pub fn thaw(&self) -> Result<GrowBuf<T>, crate::AllocError>
    where
        T: Clone,
    {
        GrowBuf::from_slice(self.as_slice())
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Seq<T> {
    /// Shares the storage; no elements are copied.
    fn clone(&self) -> Self {
        Self {
            elems: Arc::clone(&self.elems),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T> core::ops::Deref for Seq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for Seq<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: core::hash::Hash> core::hash::Hash for Seq<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    /// Takes ownership of the elements; sheds any spare capacity.
    fn from(elems: Vec<T>) -> Self {
        Self {
            elems: Arc::from(elems),
        }
    }
}

impl<T: Clone> From<&[T]> for Seq<T> {
    fn from(elems: &[T]) -> Self {
        Self {
            elems: Arc::from(elems),
        }
    }
}

impl<T> From<GrowBuf<T>> for Seq<T> {
    fn from(buf: GrowBuf<T>) -> Self {
        buf.into_seq()
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(any(test, feature = "serde"))]
impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Seq<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
