use crate::config::VectorConfig;
use crate::error::{VecError, VecResult};
use crate::raw::RawSlots;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ptr;
use core::slice;
use log::{debug, trace, warn};

/// Copies `bytes` into a fresh heap allocation owned by the caller.
fn owned_copy(bytes: &[u8]) -> VecResult<Box<[u8]>> {
    let mut out = Vec::new();
    out.try_reserve_exact(bytes.len()).map_err(|_| {
        warn!("failed to allocate a {} byte element copy", bytes.len());
        VecError::OutOfMemory { bytes: bytes.len() }
    })?;
    out.extend_from_slice(bytes);
    Ok(out.into_boxed_slice())
}

/*──────────────────── FixedWidthVector ────────────────────────*/

/// A growable, contiguous vector of elements that are all `element_width` bytes wide.
///
/// Elements are stored by value: every copy-in is checked against the width and
/// copied into the buffer, every copy-out hands back an owned `Box<[u8]>`.
/// Borrowed views (`get`, `iter`, `as_bytes`) are tied to `&self`,
/// so no mutation (and no growth) can happen while one is alive.
///
/// # Layout:
///
/// ```text
///   slot(0)
///     │
///     ▼
///   [ elem0, elem1, ... elem(len-1), ... free slots ... ]
///                                   ▲                   ▲
///                                   └─ len              └─ capacity
/// ```
///
/// # Example
///
/// ```rust
/// use fixed_width_vec::FixedWidthVector;
///
/// let mut v = FixedWidthVector::new(4).unwrap();
/// for i in 0..10i32 {
///     v.push(&i.to_ne_bytes()).unwrap();
/// }
/// v.insert(&123i32.to_ne_bytes(), 5).unwrap();
/// assert_eq!(v.get(5).unwrap(), &123i32.to_ne_bytes());
///
/// let removed = v.remove(5).unwrap();
/// assert_eq!(&*removed, &123i32.to_ne_bytes());
/// assert_eq!(v.len(), 10);
/// ```
pub struct FixedWidthVector {
    buf: RawSlots,
    len: usize,
    config: VectorConfig,
}

/*────────── constructors ──────────*/

impl FixedWidthVector {
    /// Creates an empty vector with the default capacity.
    pub fn new(element_width: usize) -> VecResult<Self> {
        Self::with_config(element_width, VectorConfig::default())
    }

    /// Creates an empty vector with room for `capacity` elements.
    pub fn with_capacity(element_width: usize, capacity: usize) -> VecResult<Self> {
        Self::with_config(
            element_width,
            VectorConfig::default().with_initial_capacity(capacity),
        )
    }

    /// Creates an empty vector using `config` for its capacity and growth.
    pub fn with_config(element_width: usize, config: VectorConfig) -> VecResult<Self> {
        if element_width == 0 {
            return Err(VecError::InvalidArgument("element width must be non-zero"));
        }
        config.validate()?;
        let buf = RawSlots::with_capacity(element_width, config.initial_capacity())?;
        debug!(
            "created vector: width={} capacity={}",
            element_width,
            buf.capacity()
        );
        Ok(Self {
            buf,
            len: 0,
            config,
        })
    }

    /// Builds a vector from packed elements.
    ///
    /// `bytes.len()` must be a multiple of `element_width`.
    pub fn from_bytes(element_width: usize, bytes: &[u8]) -> VecResult<Self> {
        if element_width == 0 {
            return Err(VecError::InvalidArgument("element width must be non-zero"));
        }
        let count = bytes.len() / element_width;
        let config = VectorConfig::default();
        let capacity = count.max(config.initial_capacity());
        let mut v = Self::with_config(element_width, config.with_initial_capacity(capacity))?;
        v.push_slice(bytes)?;
        Ok(v)
    }

    /// Deep copy: same width, length, capacity and config, with its own buffer.
    pub fn try_clone(&self) -> VecResult<Self> {
        Ok(Self {
            buf: self.buf.try_clone_prefix(self.len)?,
            len: self.len,
            config: self.config,
        })
    }
}

/*────────── invariants & meta ──────────*/

impl FixedWidthVector {
    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn element_width(&self) -> usize {
        self.buf.width()
    }

    /// Returns the number of additional elements the vector can hold without growing.
    #[inline]
    pub fn room_left(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline]
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    #[inline]
    fn check_width(&self, data: &[u8]) -> VecResult<()> {
        if data.len() != self.element_width() {
            return Err(VecError::WidthMismatch {
                expected: self.element_width(),
                found: data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> VecResult<()> {
        if index >= self.len {
            return Err(VecError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// **Unchecked** view of slot `index` (must be `< len`).
    #[inline(always)]
    fn element(&self, index: usize) -> &[u8] {
        debug_assert!(index < self.len);
        unsafe { slice::from_raw_parts(self.buf.slot(index), self.element_width()) }
    }
}

/*────────── access ──────────*/

impl FixedWidthVector {
    /// Borrowed view of the element at `index`, no copy.
    #[inline]
    pub fn get(&self, index: usize) -> VecResult<&[u8]> {
        self.check_index(index)?;
        Ok(self.element(index))
    }

    /// Owned copy of the element at `index`.
    pub fn get_copied(&self, index: usize) -> VecResult<Box<[u8]>> {
        self.check_index(index)?;
        owned_copy(self.element(index))
    }

    /// Overwrites the element at `index` and returns the previous value.
    pub fn set(&mut self, index: usize, data: &[u8]) -> VecResult<Box<[u8]>> {
        self.check_width(data)?;
        self.check_index(index)?;
        let old = owned_copy(self.element(index))?;
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), self.buf.slot(index), data.len());
        }
        Ok(old)
    }

    /// All occupied bytes, element after element.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.buf.slot(0), self.len * self.element_width()) }
    }

    /// Iterates over borrowed element views in index order.
    #[inline]
    pub fn iter(&self) -> slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_width())
    }
}

/*────────── growth ──────────*/

impl FixedWidthVector {
    /// Multiplies the capacity by the configured growth factor.
    ///
    /// On failure the vector keeps its old buffer and contents.
    pub fn grow(&mut self) -> VecResult<()> {
        let target = self
            .config
            .next_capacity(self.capacity())
            .ok_or(VecError::OutOfMemory { bytes: usize::MAX })?;
        self.buf.grow_to(target)
    }

    /// Makes sure at least `additional` free slots exist, growing geometrically.
    fn reserve(&mut self, additional: usize) -> VecResult<()> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(VecError::OutOfMemory { bytes: usize::MAX })?;
        let mut target = self.capacity();
        while target < needed {
            target = self
                .config
                .next_capacity(target)
                .ok_or(VecError::OutOfMemory { bytes: usize::MAX })?;
        }
        self.buf.grow_to(target)
    }
}

/*────────── push / insert ──────────*/

impl FixedWidthVector {
    /// Appends an element, growing first if the vector is full.
    pub fn push(&mut self, data: &[u8]) -> VecResult<()> {
        self.check_width(data)?;
        self.reserve(1)?;
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), self.buf.slot(self.len), data.len());
        }
        self.len += 1;
        Ok(())
    }

    /// Places an element at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// `index == len` behaves as [`push`](Self::push).
    pub fn insert(&mut self, data: &[u8], index: usize) -> VecResult<()> {
        self.check_width(data)?;
        if index > self.len {
            return Err(VecError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve(1)?;

        let width = self.element_width();
        let tail = self.len - index;
        trace!("insert at {index}: shifting {tail} elements right");
        unsafe {
            let at = self.buf.slot(index);
            ptr::copy(at, self.buf.slot(index + 1), tail * width);
            ptr::copy_nonoverlapping(data.as_ptr(), at, width);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts an element at the front.
    #[inline]
    pub fn unshift(&mut self, data: &[u8]) -> VecResult<()> {
        self.insert(data, 0)
    }

    /// Appends several packed elements at once.
    ///
    /// `bytes.len()` must be a multiple of the element width; nothing is
    /// appended unless everything fits.
    pub fn push_slice(&mut self, bytes: &[u8]) -> VecResult<()> {
        let width = self.element_width();
        if bytes.len() % width != 0 {
            return Err(VecError::WidthMismatch {
                expected: width,
                found: bytes.len() % width,
            });
        }
        let count = bytes.len() / width;
        self.reserve(count)?;
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.buf.slot(self.len), bytes.len());
        }
        self.len += count;
        Ok(())
    }
}

/*────────── pop / remove ──────────*/

impl FixedWidthVector {
    /// Removes the last element and returns it.
    pub fn pop(&mut self) -> VecResult<Box<[u8]>> {
        if self.len == 0 {
            return Err(VecError::Empty);
        }
        let out = owned_copy(self.element(self.len - 1))?;
        self.len -= 1;
        Ok(out)
    }

    /// Removes the element at `index`, shifting everything after it one slot left.
    pub fn remove(&mut self, index: usize) -> VecResult<Box<[u8]>> {
        self.check_index(index)?;
        let out = owned_copy(self.element(index))?;

        let tail = self.len - index - 1;
        trace!("remove at {index}: shifting {tail} elements left");
        unsafe {
            ptr::copy(
                self.buf.slot(index + 1),
                self.buf.slot(index),
                tail * self.element_width(),
            );
        }
        self.len -= 1;
        Ok(out)
    }

    /// Removes the first element.
    #[inline]
    pub fn shift(&mut self) -> VecResult<Box<[u8]>> {
        self.remove(0)
    }

    /// Forgets every element. Capacity, width and buffer contents are untouched.
    #[inline]
    pub fn reset(&mut self) {
        self.len = 0;
    }
}

/*────────── reordering ──────────*/

impl FixedWidthVector {
    /// Exchanges the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> VecResult<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a != b {
            unsafe { self.swap_unchecked(a, b) }
        }
        Ok(())
    }

    /// # Safety
    /// `a` and `b` must be distinct live indices.
    #[inline]
    unsafe fn swap_unchecked(&mut self, a: usize, b: usize) {
        unsafe {
            ptr::swap_nonoverlapping(self.buf.slot(a), self.buf.slot(b), self.element_width());
        }
    }

    /// Reverses the element order in the existing buffer.
    pub fn reverse_in_place(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            unsafe { self.swap_unchecked(i, len - 1 - i) }
        }
    }

    /// Returns a new vector holding the elements in reverse order.
    pub fn reverse(&self) -> VecResult<Self> {
        let mut out = self.derived(self.capacity())?;
        for elem in self.iter().rev() {
            out.push(elem)?;
        }
        Ok(out)
    }
}

/*────────── search & transforms ──────────*/

impl FixedWidthVector {
    /// Empty vector with this one's width and config, sized to `capacity`.
    fn derived(&self, capacity: usize) -> VecResult<Self> {
        Self::with_config(
            self.element_width(),
            self.config.with_initial_capacity(capacity),
        )
    }

    /// Whether any element is byte-equal to `needle`.
    pub fn contains(&self, needle: &[u8]) -> VecResult<bool> {
        self.check_width(needle)?;
        Ok(self.iter().any(|elem| elem == needle))
    }

    /// Builds a new vector from `transform(element, index)` for every element.
    ///
    /// The result keeps this vector's width and capacity. Each returned value is
    /// copied in and then dropped. A `None` from the transform aborts the whole
    /// map with [`VecError::TransformFailed`].
    pub fn map<F, B>(&self, mut transform: F) -> VecResult<Self>
    where
        F: FnMut(&[u8], usize) -> Option<B>,
        B: AsRef<[u8]>,
    {
        let mut out = self.derived(self.capacity())?;
        for (index, elem) in self.iter().enumerate() {
            let Some(mapped) = transform(elem, index) else {
                debug!("map aborted at index {index}");
                return Err(VecError::TransformFailed { index });
            };
            out.push(mapped.as_ref())?;
        }
        Ok(out)
    }

    /// Builds a new vector from the elements for which `predicate(element, index)` holds.
    ///
    /// The result starts from the configured initial capacity, not this vector's.
    pub fn filter<F>(&self, mut predicate: F) -> VecResult<Self>
    where
        F: FnMut(&[u8], usize) -> bool,
    {
        let mut out = self.derived(self.config.initial_capacity())?;
        for (index, elem) in self.iter().enumerate() {
            if predicate(elem, index) {
                out.push(elem)?;
            }
        }
        Ok(out)
    }

    /// Calls `action` on a scratch copy of every element, in index order.
    ///
    /// Writes through the `&mut [u8]` never reach the vector.
    pub fn foreach<F>(&self, mut action: F) -> VecResult<()>
    where
        F: FnMut(&mut [u8], usize),
    {
        if self.is_empty() {
            return Ok(());
        }
        let mut scratch = owned_copy(self.element(0))?;
        for (index, elem) in self.iter().enumerate() {
            scratch.copy_from_slice(elem);
            action(&mut scratch[..], index);
        }
        Ok(())
    }
}

/*────────── traits ──────────*/

impl<'a> IntoIterator for &'a FixedWidthVector {
    type Item = &'a [u8];
    type IntoIter = slice::ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for FixedWidthVector {
    fn eq(&self, other: &Self) -> bool {
        self.element_width() == other.element_width() && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for FixedWidthVector {}

impl fmt::Debug for FixedWidthVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedWidthVector")
            .field("element_width", &self.element_width())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/*──────────────────── tests ───────────────────────────*/
