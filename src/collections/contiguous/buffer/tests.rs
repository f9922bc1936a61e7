#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::mem::MaybeUninit;

use super::*;
use crate::util::panic::assert_panics;
use crate::util::testing::{DropCounter, Zst};

#[test]
fn test_zero_size_has_null_handle() {
    let buf = Buffer::<u32>::new_uninit(0);
    assert!(!buf.is_allocated(), "A zero sized allocation shouldn't hold a handle.");
    assert_eq!(buf.size(), 0);

    let buf = Buffer::<u32>::repeat_default(0);
    assert!(!buf.is_allocated());
    assert_eq!(&*buf, &[] as &[u32], "An empty Buffer should still deref to an empty slice.");

    let buf = Buffer::<u32>::repeat_default(3);
    assert!(buf.is_allocated());
    assert_eq!(&*buf, &[0, 0, 0], "All slots should hold the default value.");
}

#[test]
fn test_zst_support() {
    let buf = Buffer::<Zst>::repeat_default(5);
    assert!(buf.is_allocated(), "A non-empty Buffer of ZSTs should still hold a handle.");
    assert_eq!(buf[0], Zst, "Indexing with no offset should work.");
    assert_eq!(buf[4], Zst, "Indexing with an in-bounds offset should work.");
    assert_eq!(buf.iter().count(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(buf.into_iter().count(), 5);
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        Buffer::<u64>::new_uninit(usize::MAX);
    });
    assert_panics!({
        Buffer::<u8>::new_uninit(isize::MAX as usize + 1);
    });
}

#[test]
fn test_release_and_adopt() {
    let mut buf = Buffer::from([1_u8, 2, 3]);
    let (ptr, size) = buf.release().expect("A non-empty Buffer should release its block.");

    assert!(!buf.is_allocated(), "Releasing should leave the Buffer empty.");
    assert_eq!(buf.size(), 0);
    assert!(buf.release().is_none(), "Releasing twice should do nothing.");

    // SAFETY: The parts were released by a Buffer of the same type and nothing else owns them.
    let adopted = unsafe { Buffer::from_raw_parts(ptr, size) };
    assert_eq!(&*adopted, &[1, 2, 3], "The adopted Buffer should hold the released values.");
}

#[test]
fn test_take_and_swap() {
    let mut a = Buffer::from([1, 2, 3]);
    let mut b = Buffer::from([4]);

    a.swap(&mut b);
    assert_eq!(&*a, &[4]);
    assert_eq!(&*b, &[1, 2, 3]);

    let c = b.take();
    assert!(!b.is_allocated(), "Taking should leave the source empty.");
    assert_eq!(&*c, &[1, 2, 3], "Taking should move the block as is.");

    let d = b.take();
    assert!(!d.is_allocated(), "Taking from an empty Buffer should produce an empty Buffer.");
}

#[test]
fn test_uninit_round_trip() {
    let mut buf = Buffer::<String>::new_uninit(3);
    for (slot, value) in buf.iter_mut().zip(["a", "b", "c"]) {
        *slot = MaybeUninit::new(value.to_owned());
    }

    // SAFETY: All three values have just been written.
    let buf = unsafe { buf.assume_init() };
    assert_eq!(&*buf, &["a", "b", "c"]);

    let uninit = buf.forget_init();
    assert_eq!(uninit.size(), 3);
    // SAFETY: forget_init doesn't touch the values, so they are all still initialized.
    let buf = unsafe { uninit.assume_init() };
    assert_eq!(buf[2], "c");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let buf = Buffer::from_fn(10, |_| counter.clone());

    drop(buf);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let buf = Buffer::from_fn(5, |i| i);

    assert_eq!(
        buf,
        Buffer::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Buffer::from([0, 1, 2, 5, 4]), buf);

    let borrowed: &[usize] = buf.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&buf),
        state.hash_one(Buffer::from_fn(5, |i| i)),
        "Equal buffers should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&buf),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut buf = Buffer::from_fn(5, |i| i);
    for i in &mut buf {
        *i *= 2;
    }
    assert_eq!(*buf, [0, 2, 4, 6, 8], "Buffer mutated by iterator should equal this slice.");

    let mut iter = buf.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::new();
    let buf = Buffer::from_fn(10, |_| counter.clone());
    let mut iter = buf.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.drops(), 2);

    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping an owned iterator should drop all remaining elements."
    );
}
