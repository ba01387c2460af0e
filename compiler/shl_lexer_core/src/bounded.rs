//! Fixed-capacity byte buffer for the per-character hot path.
//!
//! Here-document delimiters, word text for keyword lookup and fold words are
//! all collected into inline arrays so a lexing pass never touches the heap.

use thiserror::Error;

/// Returned when a push would grow a [`BoundedBuf`] past its capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("bounded buffer capacity of {capacity} bytes exceeded")]
pub struct CapacityExceeded {
    /// Capacity of the buffer that refused the push.
    pub capacity: usize,
}

/// Inline byte buffer holding at most `N` bytes.
#[derive(Clone)]
pub struct BoundedBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedBuf<N> {
    /// Maximum number of bytes the buffer holds.
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Append one byte, refusing (and leaving the buffer unchanged) when full.
    #[inline]
    pub fn try_push(&mut self, b: u8) -> Result<(), CapacityExceeded> {
        if self.len >= N {
            return Err(CapacityExceeded { capacity: N });
        }
        self.bytes[self.len] = b;
        self.len += 1;
        Ok(())
    }

    /// Append one byte if there is room. Returns whether it was stored.
    ///
    /// For callers that only care about a prefix (keyword lookup, fold words).
    #[inline]
    pub fn push_truncating(&mut self, b: u8) -> bool {
        self.try_push(b).is_ok()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for BoundedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for BoundedBuf<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for BoundedBuf<N> {}

impl<const N: usize> PartialEq<[u8]> for BoundedBuf<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> std::fmt::Debug for BoundedBuf<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundedBuf<{N}>({:?})",
            String::from_utf8_lossy(self.as_bytes())
        )
    }
}
