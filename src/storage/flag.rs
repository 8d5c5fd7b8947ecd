use std::{marker::PhantomData, mem};

use crate::{marker_type::EmptyValue, storage::OptionRepr, utils};

/// Empty-payload option storage: a single flag byte.
///
/// Because an [`EmptyValue`] payload carries no state, presence is the
/// only information worth storing; the payload itself is folded away into
/// a `PhantomData`. This is why a container over [`Unit`](crate::Unit) is
/// exactly one byte, and why value-free computations can compose through
/// the same combinators as value-carrying ones without a special no-value
/// code path.
pub struct FlagRepr<T: EmptyValue> {
    present: bool,
    _value: PhantomData<T>,
}

unsafe impl<T: EmptyValue> OptionRepr for FlagRepr<T> {
    type Value = T;

    #[inline]
    fn absent() -> Self {
        Self {
            present: false,
            _value: PhantomData,
        }
    }

    #[inline]
    fn present(value: T) -> Self {
        // The payload is zero-size and drop-free; it is logically stored.
        mem::forget(value);
        Self {
            present: true,
            _value: PhantomData,
        }
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.present
    }

    #[inline]
    unsafe fn value_ref(&self) -> &T {
        debug_assert!(self.present);
        utils::dangling_zst_ref()
    }

    #[inline]
    unsafe fn value_mut(&mut self) -> &mut T {
        debug_assert!(self.present);
        utils::dangling_zst_mut()
    }

    #[inline]
    unsafe fn into_value(self) -> T {
        debug_assert!(self.present);
        T::VALUE
    }
}

impl<T: EmptyValue> Copy for FlagRepr<T> {}

impl<T: EmptyValue> Clone for FlagRepr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker_type::Unit;

    #[test]
    fn is_one_byte() {
        assert_eq!(std::mem::size_of::<FlagRepr<Unit>>(), 1);
        assert_eq!(std::mem::size_of::<FlagRepr<()>>(), 1);
    }

    #[test]
    fn tracks_presence_only() {
        let mut repr = FlagRepr::present(Unit);
        assert!(repr.is_present());
        assert_eq!(unsafe { repr.into_value() }, Unit);

        repr = FlagRepr::absent();
        assert!(!repr.is_present());
    }

    #[test]
    fn take_and_swap_move_the_flag() {
        let mut a = FlagRepr::present(());
        let mut b = FlagRepr::<()>::absent();
        a.swap(&mut b);
        assert!(!a.is_present());
        assert!(b.is_present());

        let taken = b.take();
        assert!(!b.is_present());
        assert!(taken.is_present());
    }
}
