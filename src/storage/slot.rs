use std::mem::ManuallyDrop;

use crate::storage::{OptionRepr, RawSlot};

/// Generic option storage: one inline slot plus a presence flag.
///
/// The representation that works for every payload type. The invariant is
/// the obvious one: `present` is true exactly when the slot holds a live
/// `T`. Construction, destruction and cloning are the only places the
/// invariant is re-established; everything else (`take`, `swap`,
/// `replace_with`) moves the struct around as plain bytes.
pub struct SlotRepr<T> {
    slot: RawSlot<T>,
    present: bool,
}

unsafe impl<T> OptionRepr for SlotRepr<T> {
    type Value = T;

    #[inline]
    fn absent() -> Self {
        Self {
            slot: RawSlot::uninit(),
            present: false,
        }
    }

    #[inline]
    fn present(value: T) -> Self {
        Self {
            slot: RawSlot::new(value),
            present: true,
        }
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.present
    }

    #[inline]
    unsafe fn value_ref(&self) -> &T {
        debug_assert!(self.present);
        self.slot.assume_init_ref()
    }

    #[inline]
    unsafe fn value_mut(&mut self) -> &mut T {
        debug_assert!(self.present);
        self.slot.assume_init_mut()
    }

    #[inline]
    unsafe fn into_value(self) -> T {
        debug_assert!(self.present);
        // Suppress the destructor; the payload's ownership moves to the
        // returned value.
        let this = ManuallyDrop::new(self);
        this.slot.assume_init_read()
    }
}

impl<T> Drop for SlotRepr<T> {
    fn drop(&mut self) {
        if self.present {
            unsafe { self.slot.assume_init_drop() }
        }
    }
}

impl<T: Clone> Clone for SlotRepr<T> {
    fn clone(&self) -> Self {
        if self.present {
            Self::present(unsafe { self.value_ref() }.clone())
        } else {
            Self::absent()
        }
    }
}
