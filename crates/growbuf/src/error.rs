use thiserror::Error;

/// Storage for a requested capacity could not be obtained.
///
/// This is the only way a buffer operation can fail. It is returned by
/// [`GrowBuf::with_capacity`](crate::GrowBuf::with_capacity) and by the
/// growth step inside the appending operations; the caller decides what an
/// out-of-memory condition means for its enclosing system. Nothing at this
/// layer retries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate storage for {requested} elements")]
pub struct AllocError {
    requested: usize,
}

impl AllocError {
    pub(crate) fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// Total capacity, in elements, the failed request asked for.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }
}
