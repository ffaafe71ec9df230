//! Text views over byte sequences.
//!
//! A [`ByteSeq`](crate::ByteSeq) is raw bytes; nothing about freezing a
//! buffer implies the bytes form text in any encoding. The conversions here
//! make that boundary explicit: [`Seq::to_str`] validates UTF-8 and fails
//! with a [`TextError`] describing where validation stopped, while
//! [`Seq::to_str_lossy`] substitutes U+FFFD for invalid runs and
//! [`Seq::as_bstr`] prints bytes-that-are-conventionally-text without any
//! validation at all.

use alloc::borrow::Cow;

use bstr::{BStr, ByteSlice};
use thiserror::Error;

use crate::Seq;

/// A byte sequence could not be viewed as UTF-8 text.
///
/// Carries the length of the valid prefix and, for errors in the interior
/// of the sequence, the length of the offending byte run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid utf-8 after {valid_up_to} bytes")]
pub struct TextError {
    valid_up_to: usize,
    error_len: Option<usize>,
}

impl TextError {
    /// Length in bytes of the longest valid UTF-8 prefix.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the invalid byte run starting at
    /// [`valid_up_to`](Self::valid_up_to), or `None` when the sequence ends
    /// in the middle of what could still become a valid character.
    #[must_use]
    pub fn error_len(&self) -> Option<usize> {
        self.error_len
    }
}

impl From<bstr::Utf8Error> for TextError {
    fn from(err: bstr::Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

impl Seq<u8> {
    /// Views the bytes as UTF-8 text.
    ///
    /// Validation happens here and nowhere else: appends never inspect
    /// bytes, so a buffer may hold a partial multi-byte character while it
    /// is being filled and only the final frozen sequence needs to decode.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] if the bytes are not valid UTF-8.
    pub fn to_str(&self) -> Result<&str, TextError> {
        Ok(self.as_slice().to_str()?)
    }

    /// Views the bytes as UTF-8 text, replacing invalid runs with U+FFFD.
    ///
    /// Borrows when the bytes are already valid; allocates only when a
    /// substitution is actually made.
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        self.as_slice().to_str_lossy()
    }

    /// Views the bytes as a [`BStr`] for display and byte-string
    /// operations, with no validation.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_slice().as_bstr()
    }
}
