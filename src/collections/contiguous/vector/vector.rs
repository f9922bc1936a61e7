use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::ReserveHint;
use crate::collections::contiguous::Buffer;
use crate::collections::contiguous::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;
use crate::util::trace_alloc;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable length contiguous collection, based on [`Buffer<T>`].
///
/// The Vector owns exactly one Buffer, whose size is the Vector's capacity. Whenever the capacity
/// changes, a new Buffer of the required size is allocated, the live values are moved into it and
/// it replaces the old one. The Buffer is never extended in place.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)`*** |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
///
/// \*** Only to drop the values, the capacity is kept.
pub struct Vector<T> {
    pub(crate) buf: Buffer<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new, empty Vector with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::new_uninit(cap),
            len: 0,
        }
    }

    /// Creates a new, empty Vector with the capacity requested by `hint`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::{ReserveHint, Vector};
    /// let vec: Vector<u8> = Vector::with_hint(ReserveHint::new(8));
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn with_hint(hint: ReserveHint) -> Vector<T> {
        let mut vec = Vector::new();
        vec.reserve(hint.cap());
        vec
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is exactly the
    /// value chosen by the last reallocation, see the individual methods for their growth policy.
    pub const fn cap(&self) -> usize {
        self.buf.size()
    }

    /// Returns a reference to the element at `index`, or an error if the index is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::{IndexOutOfBounds, Vector};
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`, or an error if the index is out of
    /// bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Push the provided value onto the end of the Vector. If the Vector is full, its capacity is
    /// doubled first (or set to 1 if it was 0).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.realloc_with_cap(self.grown_cap());
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push a clone of the provided value onto the end of the Vector, see [`Vector::push_back`].
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Move the value out of `value` and onto the end of the Vector, leaving the default value of
    /// `T` in its place. See [`Vector::push_back`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// let mut name = String::from("ferris");
    /// vec.push_back_take(&mut name);
    /// assert_eq!(name, "");
    /// assert_eq!(vec[0], "ferris");
    /// ```
    pub fn push_back_take(&mut self, value: &mut T)
    where
        T: Default,
    {
        self.push_back(mem::take(value));
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap());
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the object.
        unsafe { self.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Popping an empty Vector does nothing and returns [`None`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop_back(), Some(i));
    /// }
    /// assert_eq!(vec.pop_back(), None);
    /// assert_eq!(vec.len(), 0);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector. The
            // value was initialized and, now being past len, won't be read or dropped again.
            Some(unsafe { self.slot(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, shifting all following values towards the
    /// end. Returns the index of the inserted value.
    ///
    /// If the Vector has spare capacity the values are shifted in place, otherwise a new Buffer
    /// with double the capacity (or 1 for an empty Vector) is allocated and the prefix, the value
    /// and the suffix are moved into it.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the memory layout of the Vector would have a size that
    /// exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// assert_eq!(vec.insert(1, 100), 1);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len < self.cap() {
            // SAFETY: index <= len < cap, so both the shifted range and the destination slot are
            // within the Buffer. ptr::copy handles the overlap.
            unsafe {
                ptr::copy(
                    self.slot(index).as_ptr(),
                    self.slot(index + 1).as_ptr(),
                    self.len - index,
                );
                self.slot(index).write(value);
            }
        } else {
            let new_cap = self.grown_cap();
            let mut new_buf = Buffer::<T>::new_uninit(new_cap);
            let src = self.slot(0).as_ptr();
            let dst = new_buf.data().as_ptr().cast::<T>();

            // SAFETY: new_cap > len, so the new Buffer has room for all len values plus the
            // inserted one. The Buffers are distinct allocations and don't overlap. The values are
            // moved rather than copied, the old Buffer only holds MaybeUninit and won't drop them.
            unsafe {
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.len - index);
            }

            trace_alloc!("vector grew from {} to {} for insertion", self.cap(), new_cap);
            self.buf.swap(&mut new_buf);
        }

        self.len += 1;
        index
    }

    /// Inserts a clone of the provided value at the given index, see [`Vector::insert`].
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert(index, value.clone())
    }

    /// Moves the value out of `value` and inserts it at the given index, leaving the default value
    /// of `T` in its place. See [`Vector::insert`].
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_take(&mut self, index: usize, value: &mut T) -> usize
    where
        T: Default,
    {
        self.insert(index, mem::take(value))
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap,
    /// and returns it.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the value is initialized. It is read out before the following
        // values are shifted down over it, so it is never duplicated.
        unsafe {
            let value = self.slot(index).read();
            ptr::copy(
                self.slot(index + 1).as_ptr(),
                self.slot(index).as_ptr(),
                self.len - index - 1,
            );
            self.len -= 1;
            value
        }
    }

    /// Drops the element at the provided index, moving all following values to fill in the gap.
    /// Returns `index`, which now holds the element that followed the erased one (or is equal to
    /// `len` if the last element was erased).
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds, which includes any index on an empty Vector.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// let next = vec.erase(0);
    /// assert_eq!(vec[next], 2);
    /// assert_eq!(&*vec, &[2, 3]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Ensures that the Vector has a capacity of at least `cap`, reallocating to exactly `cap` if
    /// it is currently smaller. The length and values are unchanged.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        if cap > self.cap() {
            self.realloc_with_cap(cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.cap() {
            self.realloc_with_cap(self.len);
        }
    }

    /// Shortens the Vector to `len`, dropping the values past it. The capacity is unchanged. Does
    /// nothing if `len` is greater than or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = mem::replace(&mut self.len, len);
        // SAFETY: The values in len..old_len are initialized. len is updated first, so they can't
        // be observed again even if a drop panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.slot(len).as_ptr(),
                old_len - len,
            ));
        }
    }

    /// Drops all values, setting the length to 0. The capacity and Buffer are kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Changes the length of the Vector to `new_len`, filling new slots with the default value of
    /// `T`. See [`Vector::resize_with`].
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.resize(5);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// assert_eq!(vec.cap(), 10);
    /// vec.resize(1);
    /// assert_eq!(&*vec, &[1]);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Changes the length of the Vector to `new_len`. When growing, new slots are filled by calling
    /// `f`, and if `new_len` exceeds the capacity, the Vector is first reallocated with a capacity
    /// of `new_len * 2`. When shrinking, the values past `new_len` are dropped and the capacity is
    /// kept.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        if new_len > self.cap() {
            let new_cap = new_len.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
            self.realloc_with_cap(new_cap);
        }

        while self.len < new_len {
            // SAFETY: new_len <= cap, so there is room for every value up to it.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Exchanges the contents of self and `other`, without allocating.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Moves the contents of self into the returned Vector, leaving self empty with a capacity of
    /// zero.
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Vector<T> {
        mem::take(self)
    }

    /// Creates a new Vector with `count` default values of `T`. Both the length and capacity will
    /// be `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Vector<T>
    where
        T: Default,
    {
        Buffer::repeat_default(count).into()
    }

    /// Creates a new Vector with `count` clones of `item`. Both the length and capacity will be
    /// `count`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use simple_vector::collections::contiguous::Vector;
    /// let vec = Vector::repeat_item('x', 3);
    /// assert_eq!(&*vec, &['x', 'x', 'x']);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        Buffer::repeat_item(item, count).into()
    }

    /// Returns a pointer to the slot at `index`, which may or may not be initialized.
    pub(crate) const fn slot(&self, index: usize) -> NonNull<T> {
        // SAFETY: Callers only pass index <= cap, which is within (or one past) the allocated range
        // of the Buffer and can't overflow isize::MAX.
        unsafe { self.buf.data().add(index).cast() }
    }

    /// The capacity to grow to when a single value is added to a full Vector.
    ///
    /// # Panics
    /// Panics if doubling the capacity would overflow.
    fn grown_cap(&self) -> usize {
        let doubled = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        cmp::max(doubled, MIN_CAP)
    }

    /// Replaces the internal Buffer with a new one of exactly `new_cap` slots, moving the live
    /// values across. The old Buffer is freed.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut new_buf = Buffer::<T>::new_uninit(new_cap);

        // SAFETY: Both Buffers have room for len values and are distinct allocations. The values
        // are moved: the old Buffer only holds MaybeUninit, so they won't be dropped with it.
        unsafe {
            ptr::copy_nonoverlapping(
                self.slot(0).as_ptr().cast_const(),
                new_buf.data().as_ptr().cast::<T>(),
                self.len,
            );
        }

        trace_alloc!("vector reallocated from {} to {} (len {})", self.cap(), new_cap, self.len);
        self.buf.swap(&mut new_buf);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(*item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector from a literal sequence, with length and capacity equal to `N`.
    fn from(value: [T; N]) -> Self {
        Buffer::from(value).into()
    }
}

impl<T> From<ReserveHint> for Vector<T> {
    fn from(hint: ReserveHint) -> Self {
        Vector::with_hint(hint)
    }
}

impl<T> From<Buffer<T>> for Vector<T> {
    fn from(value: Buffer<T>) -> Self {
        let len = value.size();
        Vector {
            buf: value.forget_init(),
            len,
        }
    }
}

impl<T> From<Vector<T>> for Buffer<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Free all uninit slots past len.
        value.shrink_to_fit();
        value.len = 0;

        // SAFETY: After shrinking, every slot of the Buffer holds one of the len initialized
        // values. Setting len to 0 stops the Vector from dropping them.
        unsafe { value.buf.take().assume_init() }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]) }

        // Implicitly drop self.buf, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull (dangling for an empty Buffer), properly aligned and the range entirely
        // contained within the Buffer. The borrow checker enforces that self isn't mutated due to
        // this function taking a &self.
        unsafe { slice::from_raw_parts(self.slot(0).as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker enforces that self isn't accessed elsewhere
        // due to this function taking a &mut self.
        unsafe { slice::from_raw_parts_mut(self.slot(0).as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Creates an independent copy of the Vector. The capacity of the copy is equal to the length
    /// of the original, any spare capacity is not carried over.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.iter() {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
