use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::error::CapacityOverflow;
use crate::util::result::ResultExtension;
use crate::util::trace_alloc;

/// A uniquely owned, contiguous block of `T` that is sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>), except that the handle to the block is null when the Buffer is empty.
///
/// A Buffer can't be cloned: there is only ever one owner of a block, and ownership moves with the
/// value. [`Buffer::take`] moves the block out of a place, [`Buffer::release`] hands it to the
/// caller entirely and [`Buffer::from_raw_parts`] adopts one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Buffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `release` | `O(1)` |
/// | `repeat_default` | `O(n)` |
pub struct Buffer<T> {
    pub(crate) ptr: Option<NonNull<T>>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Returns the number of elements in the Buffer.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// let buf = Buffer::from([1, 2, 3]);
    /// assert_eq!(buf.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the Buffer holds a handle to a block, which is the case for any Buffer with
    /// a non-zero size.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// assert!(!Buffer::<u8>::new().is_allocated());
    /// assert!(Buffer::<u8>::repeat_default(4).is_allocated());
    /// ```
    pub const fn is_allocated(&self) -> bool {
        self.ptr.is_some()
    }

    /// Creates a new, empty Buffer with a null handle. No memory is allocated.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: None,
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new Buffer of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized. A `size` of zero produces an empty Buffer without allocating.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// # use std::mem::MaybeUninit;
    /// let buf: Buffer<MaybeUninit<u8>> = Buffer::new_uninit(5);
    /// assert_eq!(buf.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Buffer<MaybeUninit<T>> {
        if size == 0 {
            return Buffer::new();
        }

        let layout = Buffer::<MaybeUninit<T>>::make_layout(size);
        let ptr = Buffer::<MaybeUninit<T>>::make_ptr(layout);
        trace_alloc!("allocated buffer for {} elements ({} bytes)", size, layout.size());

        Buffer {
            ptr: Some(ptr),
            size,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Buffer with `size` elements, each produced by calling `f` with its index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// let buf = Buffer::from_fn(4, |i| i * i);
    /// assert_eq!(&*buf, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, mut f: F) -> Buffer<T> {
        let buf = Self::new_uninit(size);
        let data = buf.data();

        for i in 0..size {
            // SAFETY: i < size, so the offset is within the allocated range of the Buffer and can't
            // overflow isize::MAX.
            unsafe { data.add(i).write(MaybeUninit::new(f(i))) }
        }

        // SAFETY: Every value has been written above.
        unsafe { buf.assume_init() }
    }

    /// Adopts an existing block of `size` initialized values, taking responsibility for dropping
    /// them and freeing the block.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to have been allocated by the global allocator with the layout of `[T; size]`,
    ///   or be dangling if that layout has a size of zero.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - No other value may own or free the block afterwards.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// let mut buf = Buffer::from([1_u8, 2, 3]);
    /// let (ptr, size) = buf.release().unwrap();
    /// assert!(!buf.is_allocated());
    /// // SAFETY: The parts come straight from a released Buffer.
    /// let buf = unsafe { Buffer::from_raw_parts(ptr, size) };
    /// assert_eq!(&*buf, &[1, 2, 3]);
    /// ```
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, size: usize) -> Buffer<T> {
        Buffer {
            ptr: if size == 0 { None } else { Some(ptr) },
            size,
            _phantom: PhantomData,
        }
    }

    /// Gives up ownership of the held block, returning its pointer and size and leaving this Buffer
    /// empty. The caller becomes responsible for dropping the values and freeing the block, which
    /// can be done by passing the parts back to [`Buffer::from_raw_parts`].
    ///
    /// Returns [`None`] and does nothing if the Buffer is already empty.
    #[must_use = "the released block is leaked unless it is adopted again"]
    pub fn release(&mut self) -> Option<(NonNull<T>, usize)> {
        match self.ptr.take() {
            Some(ptr) => {
                let size = mem::replace(&mut self.size, 0);
                Some((ptr, size))
            },
            None => None,
        }
    }

    /// Moves the held block out of self and into the returned Buffer, leaving self empty.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// let mut a = Buffer::from([1, 2]);
    /// let b = a.take();
    /// assert_eq!(a.size(), 0);
    /// assert_eq!(&*b, &[1, 2]);
    /// ```
    pub fn take(&mut self) -> Buffer<T> {
        mem::replace(self, Buffer::new())
    }

    /// Exchanges the blocks held by self and `other`, without allocating.
    pub fn swap(&mut self, other: &mut Buffer<T>) {
        mem::swap(self, other);
    }

    /// Interprets self as a `Buffer<MaybeUninit<T>>`. The values are not dropped, they simply stop
    /// being tracked as initialized. Acts as the counterpart to [`Buffer::assume_init`].
    pub fn forget_init(self) -> Buffer<MaybeUninit<T>> {
        let this = ManuallyDrop::new(self);
        Buffer {
            ptr: this.ptr.map(NonNull::cast),
            size: this.size,
            _phantom: PhantomData,
        }
    }

    /// Returns the handle to the block, or a well-aligned dangling pointer for an empty Buffer so
    /// that zero-length slices can be formed from it.
    pub(crate) const fn data(&self) -> NonNull<T> {
        match self.ptr {
            Some(ptr) => ptr,
            None => NonNull::dangling(),
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout, which happens for zero-sized types.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Default> Buffer<T> {
    /// Creates a new `Buffer<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Buffer<T> {
        Self::from_fn(count, |_| T::default())
    }
}

impl<T: Clone> Buffer<T> {
    /// Creates a new `Buffer<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Buffer;
    /// let buf = Buffer::repeat_item(5, 3);
    /// assert_eq!(&*buf, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Buffer<T> {
        Self::from_fn(count, |_| item.clone())
    }
}

impl<T> Buffer<MaybeUninit<T>> {
    /// Assume that all values of a `Buffer<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that every value in the Buffer is properly initialized.
    /// Failing to do so is undefined behavior.
    pub unsafe fn assume_init(self) -> Buffer<T> {
        let this = ManuallyDrop::new(self);
        Buffer {
            ptr: this.ptr.map(NonNull::cast),
            size: this.size,
            _phantom: PhantomData,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Buffer<T> {
    fn from(items: [T; N]) -> Self {
        let buf = Self::new_uninit(N);
        let data = buf.data();

        for (i, item) in items.into_iter().enumerate() {
            // SAFETY: The array yields exactly N items, all of which are within the allocated range
            // of the Buffer.
            unsafe { data.add(i).write(MaybeUninit::new(item)) }
        }

        // SAFETY: All N values have been written.
        unsafe { buf.assume_init() }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let Some(ptr) = self.ptr else {
            return;
        };

        // SAFETY: The pointer is nonnull, properly aligned and refers to size initialized values,
        // none of which have been dropped yet.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), self.size));
        }

        let layout = Buffer::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this same layout. Zero-sized
            // layouts aren't allocated and are guarded against deallocation.
            unsafe {
                alloc::dealloc(ptr.as_ptr().cast(), layout)
            }
            trace_alloc!("freed buffer of {} bytes", layout.size());
        }
    }
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized. An empty Buffer yields a
        // dangling pointer, which is valid for a slice of length zero. Buffer's safe API doesn't
        // provide access to raw pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.data().as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref. The mutable borrow of self prevents any other access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.data().as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Buffer<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Buffer<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: A Buffer is the unique owner of its block, so sending it sends the values, which is safe
// when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Buffer<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T: Hash> Hash for Buffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
