//! The fixed-capacity byte arena.
//!
//! An [`Arena`] is a single pre-allocated, zero-initialised `Box<[u8]>`
//! with a bump cursor. Bytes are only ever appended at the cursor, cut off
//! the end, or rewritten in place by [`splice`](Arena::splice). The backing
//! region never grows: an operation that would exceed the capacity fails
//! without touching the buffer.

use std::fmt;
use std::ops::Range;
use std::str::Utf8Error;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// A fixed-capacity linear byte buffer with a length cursor.
///
/// Used to stage search paths, shell command lines and interpreter
/// snippets without allocating once per fragment. All addressing is by
/// offset into `[0, len)`; views borrow the arena and are therefore only
/// valid until the next mutation.
///
/// Invariant: `len <= buffer.len()` after every operation.
pub struct Arena {
    /// Backing storage, allocated to full capacity at creation.
    buffer: Box<[u8]>,
    /// Logical length: number of bytes in use from the start of `buffer`.
    len: usize,
    /// Set once by [`destroy`](Arena::destroy).
    destroyed: bool,
}

impl Arena {
    /// Create an arena of `capacity` zeroed bytes.
    ///
    /// Fails with [`ArenaError::ZeroCapacity`] if `capacity` is zero and
    /// with [`ArenaError::AllocationFailed`] if the allocator refuses the
    /// request.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        if capacity == 0 {
            return Err(ArenaError::ZeroCapacity);
        }
        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArenaError::AllocationFailed { capacity })?;
        data.resize(capacity, 0);
        Ok(Self {
            buffer: data.into_boxed_slice(),
            len: 0,
            destroyed: false,
        })
    }

    /// Create an arena from a validated [`ArenaConfig`].
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Release the backing region.
    ///
    /// The buffer is replaced with an empty sentinel, so the arena reports
    /// zero capacity afterwards and every mutating call fails instead of
    /// touching freed memory. Calling this more than once is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.buffer = Box::default();
        self.len = 0;
        self.destroyed = true;
    }

    /// Whether [`destroy`](Arena::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Total capacity in bytes (zero once destroyed).
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still available past the cursor.
    pub fn free_space(&self) -> usize {
        self.buffer.len() - self.len
    }

    /// Reserve `size` bytes at the cursor without writing them.
    ///
    /// Returns the reserved region `[old_len, old_len + size)` so the
    /// caller can fill it in place. The region is NOT cleared: it holds
    /// whatever bytes were last written there (zero on a fresh arena).
    pub fn alloc(&mut self, size: usize) -> Result<&mut [u8], ArenaError> {
        if size == 0 {
            return Err(ArenaError::ZeroSizedAlloc);
        }
        self.ensure_free(size)?;
        let start = self.len;
        self.len += size;
        Ok(&mut self.buffer[start..self.len])
    }

    /// Drop `size` bytes from the end. Shrinking past zero clears.
    pub fn shrink(&mut self, size: usize) {
        self.len = self.len.saturating_sub(size);
    }

    /// Reset to empty in O(1). The backing bytes are left as they are.
    pub fn clear(&mut self) {
        self.shrink(self.len);
    }

    /// Cut the logical length back to `len`. Longer values are ignored.
    ///
    /// Pairs with [`mark`](Arena::mark) to undo a run of appends.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// The current logical length, for a later [`truncate`](Arena::truncate).
    pub fn mark(&self) -> usize {
        self.len
    }

    /// Copy `data` to the end of the arena.
    ///
    /// All-or-nothing: if `data` does not fit, nothing is written. An empty
    /// slice is accepted and changes nothing.
    pub fn append_bytes(&mut self, data: &[u8]) -> Result<(), ArenaError> {
        self.ensure_free(data.len())?;
        let start = self.len;
        self.len += data.len();
        self.buffer[start..self.len].copy_from_slice(data);
        Ok(())
    }

    /// Copy the UTF-8 bytes of `s` to the end of the arena.
    pub fn append_str(&mut self, s: &str) -> Result<(), ArenaError> {
        self.append_bytes(s.as_bytes())
    }

    /// Append formatted text, e.g. `arena.append_fmt(format_args!("{x}"))`.
    ///
    /// All-or-nothing like [`append_bytes`](Arena::append_bytes): if any
    /// piece overflows, the arena is truncated back to its length before
    /// the call.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), ArenaError> {
        let mark = self.len;
        let mut sink = FmtSink {
            arena: self,
            overflow: None,
        };
        let result = fmt::write(&mut sink, args);
        let overflow = sink.overflow.take();
        if result.is_err() {
            self.truncate(mark);
            return Err(overflow.unwrap_or(ArenaError::FormatFailed));
        }
        Ok(())
    }

    /// Borrow the logical contents `[0, len)`.
    pub fn view(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Alias for [`view`](Arena::view).
    pub fn as_bytes(&self) -> &[u8] {
        self.view()
    }

    /// Borrow the logical contents as UTF-8 text.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.view())
    }

    /// Borrow a sub-range of the logical contents.
    ///
    /// Returns `None` if the range is reversed or extends past `len`.
    pub fn slice(&self, range: Range<usize>) -> Option<&[u8]> {
        self.view().get(range)
    }

    /// Mutable access to the whole backing region, including bytes past `len`.
    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.buffer.len());
        self.len = len;
    }

    fn ensure_free(&self, requested: usize) -> Result<(), ArenaError> {
        let available = self.free_space();
        if requested > available {
            return Err(ArenaError::CapacityExceeded {
                requested,
                available,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

/// Lets `write!` target an arena directly.
///
/// Each `write_str` is atomic on its own, but a multi-piece `write!` may
/// leave a prefix behind on overflow. Use [`Arena::append_fmt`] when the
/// whole write must succeed or fail as one.
impl fmt::Write for Arena {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }
}

/// Adapter that remembers why a write failed.
struct FmtSink<'a> {
    arena: &'a mut Arena,
    overflow: Option<ArenaError>,
}

impl fmt::Write for FmtSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.arena.append_str(s).map_err(|e| {
            self.overflow = Some(e);
            fmt::Error
        })
    }
}
