// slot pointers are computed, never stored; callers keep indices within capacity
use crate::error::{VecError, VecResult};
use alloc::alloc::{Layout, alloc, dealloc, realloc};
use core::ptr::{self, NonNull};
use log::{debug, warn};

/// Byte size of `capacity` slots of `width` bytes, or `OutOfMemory` if that does not fit a layout.
#[inline]
pub(crate) fn byte_len(width: usize, capacity: usize) -> VecResult<usize> {
    match width.checked_mul(capacity) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(bytes),
        _ => Err(VecError::OutOfMemory { bytes: usize::MAX }),
    }
}

/*──────────────────── raw slot buffer ───────────────────────*/
/// An owned heap region of `capacity` slots, each `width` bytes wide.
///
/// `RawSlots` knows nothing about which slots are live, that bookkeeping
/// belongs to the vector on top of it. It only allocates, grows and frees.
///
/// # Layout:
///
/// ```text
///   ptr
///    │
///    ▼
///   [ slot 0 | slot 1 | ... | slot capacity-1 ]
///     ◄width►
/// ```
///
/// A zero capacity holds a dangling pointer and owns no allocation.
pub(crate) struct RawSlots {
    ptr: NonNull<u8>,
    capacity: usize,
    width: usize,
}

// the buffer is plain owned bytes
unsafe impl Send for RawSlots {}
unsafe impl Sync for RawSlots {}

impl RawSlots {
    /// Allocates room for `capacity` slots. The memory is left uninitialized.
    pub fn with_capacity(width: usize, capacity: usize) -> VecResult<Self> {
        debug_assert!(width > 0);
        let bytes = byte_len(width, capacity)?;
        let ptr = if bytes == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::layout(bytes)?;
            let p = unsafe { alloc(layout) };
            NonNull::new(p).ok_or_else(|| {
                warn!("allocation of {bytes} bytes failed");
                VecError::OutOfMemory { bytes }
            })?
        };
        Ok(Self {
            ptr,
            capacity,
            width,
        })
    }

    #[inline]
    fn layout(bytes: usize) -> VecResult<Layout> {
        Layout::from_size_align(bytes, 1).map_err(|_| VecError::OutOfMemory { bytes })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pointer to the start of slot `index`.
    ///
    /// `index == capacity` yields the one-past-the-end pointer, which may not be read.
    #[inline(always)]
    pub fn slot(&self, index: usize) -> *mut u8 {
        debug_assert!(index <= self.capacity);
        unsafe { self.ptr.as_ptr().add(index * self.width) }
    }

    /// Resizes the region to `new_capacity` slots, keeping every existing byte.
    ///
    /// On failure nothing changes: the old region and capacity stay valid.
    /// Never shrinks, asking for less than the current capacity is a no-op.
    pub fn grow_to(&mut self, new_capacity: usize) -> VecResult<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let new_bytes = byte_len(self.width, new_capacity)?;
        let old_bytes = self.capacity * self.width;
        let new_layout = Self::layout(new_bytes)?;

        let p = unsafe {
            if old_bytes == 0 {
                alloc(new_layout)
            } else {
                let old_layout = Layout::from_size_align_unchecked(old_bytes, 1);
                realloc(self.ptr.as_ptr(), old_layout, new_bytes)
            }
        };
        let Some(p) = NonNull::new(p) else {
            warn!(
                "growing from {} to {} slots failed ({new_bytes} bytes)",
                self.capacity, new_capacity
            );
            return Err(VecError::OutOfMemory { bytes: new_bytes });
        };

        debug!(
            "grew buffer from {} to {} slots of {} bytes",
            self.capacity, new_capacity, self.width
        );
        self.ptr = p;
        self.capacity = new_capacity;
        Ok(())
    }

    /// New region with the same capacity holding a copy of the first `live` slots.
    pub fn try_clone_prefix(&self, live: usize) -> VecResult<Self> {
        debug_assert!(live <= self.capacity);
        let out = Self::with_capacity(self.width, self.capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.slot(0), out.slot(0), live * self.width);
        }
        Ok(out)
    }
}

impl Drop for RawSlots {
    fn drop(&mut self) {
        let bytes = self.capacity * self.width;
        if bytes != 0 {
            unsafe {
                dealloc(
                    self.ptr.as_ptr(),
                    Layout::from_size_align_unchecked(bytes, 1),
                )
            }
        }
    }
}
