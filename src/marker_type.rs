//! Zero-sized marker types.

use std::marker::PhantomData;

/// Zero-size, always-constructible placeholder payload.
///
/// `Unit` lets value-free computations flow through the same container
/// machinery as value-carrying ones: an operation with nothing to return
/// can still produce a present [`UnitOpt`](crate::UnitOpt), and a
/// zero-argument continuation can consume one.
///
/// An option over `Unit` stored in a [`FlagRepr`](crate::FlagRepr) is
/// exactly one byte.
///
/// # Example
///
/// ```
/// use slot_types::{Unit, UnitOpt};
///
/// let done = UnitOpt::some(Unit::of("anything at all"));
/// assert!(done.is_some());
/// assert_eq!(std::mem::size_of::<UnitOpt>(), 1);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

impl Unit {
    /// Constructs a `Unit` from any value, discarding it.
    #[inline]
    pub fn of<T>(_value: T) -> Unit {
        Unit
    }
}

/// Payload types that carry no state at all.
///
/// A container over an `EmptyValue` payload needs only a presence flag;
/// the payload contributes no bytes and no destructor work. See
/// [`FlagRepr`](crate::FlagRepr).
///
/// # Safety
///
/// Implementors must guarantee that `Self` is zero-sized, has no drop
/// obligation, and that every instance is indistinguishable from
/// [`EmptyValue::VALUE`].
pub unsafe trait EmptyValue: Sized {
    /// The sole value of the type.
    const VALUE: Self;
}

unsafe impl EmptyValue for Unit {
    const VALUE: Self = Unit;
}

unsafe impl EmptyValue for () {
    const VALUE: Self = ();
}

unsafe impl<T: ?Sized> EmptyValue for PhantomData<T> {
    const VALUE: Self = PhantomData;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Unit>(), 0);
    }

    #[test]
    fn unit_swallows_any_value() {
        assert_eq!(Unit::of(42), Unit);
        assert_eq!(Unit::of(String::from("x")), Unit);
        assert_eq!(Unit::of(()), Unit);
    }
}
