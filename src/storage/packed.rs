use std::{
    marker::PhantomData,
    num::{
        NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU16, NonZeroU32,
        NonZeroU64, NonZeroU8, NonZeroUsize,
    },
    ptr,
};

use crate::{
    ref_types::{ValMut, ValRef},
    storage::OptionRepr,
};

/// Payload types with a spare bit pattern that can encode "absent".
///
/// A `Niched` payload round-trips through a raw form (`Raw`) that has at
/// least one value, [`NONE`](Niched::NONE), which no live payload ever
/// encodes to. [`PackedRepr`] stores only the raw form, so an option over
/// such a payload needs no separate flag: it is exactly `Raw`-sized. The
/// reference handles use a null address; the `NonZero` integers use zero.
///
/// # Safety
///
/// Implementors must guarantee all of the following:
///
/// - `into_raw` never produces a value for which `is_none` is true.
/// - `Self` and `Raw` are layout-compatible, and every raw value produced
///   by `into_raw` is a valid `Self` bit pattern (this is what makes
///   `raw_as_ref`/`raw_as_mut` sound).
/// - `Self` has no drop obligation; a forgotten payload leaks nothing.
pub unsafe trait Niched: Sized {
    /// The stored form.
    type Raw: Copy;

    /// The bit pattern standing for "absent".
    const NONE: Self::Raw;

    /// Whether `raw` is the absent pattern.
    fn is_none(raw: &Self::Raw) -> bool;

    /// Encodes a live payload.
    fn into_raw(self) -> Self::Raw;

    /// Decodes a live payload.
    ///
    /// # Safety
    ///
    /// `raw` must have been produced by `into_raw`, and ownership of the
    /// payload it encodes must not be claimed twice.
    unsafe fn from_raw(raw: Self::Raw) -> Self;

    /// Reinterprets a stored raw value as the payload, in place.
    ///
    /// # Safety
    ///
    /// `raw` must have been produced by `into_raw`.
    unsafe fn raw_as_ref(raw: &Self::Raw) -> &Self;

    /// Mutable variant of [`raw_as_ref`](Niched::raw_as_ref).
    ///
    /// # Safety
    ///
    /// `raw` must have been produced by `into_raw`.
    unsafe fn raw_as_mut(raw: &mut Self::Raw) -> &mut Self;
}

/// Niche option storage: flag and slot collapsed into one word.
///
/// The defining optimization of the crate. For reference payloads the
/// whole container is a single machine pointer; absence is the null
/// address, so there is nothing left to strip at the combinator level.
pub struct PackedRepr<T: Niched> {
    raw: T::Raw,
    _value: PhantomData<T>,
}

unsafe impl<T: Niched> OptionRepr for PackedRepr<T> {
    type Value = T;

    #[inline]
    fn absent() -> Self {
        Self {
            raw: T::NONE,
            _value: PhantomData,
        }
    }

    #[inline]
    fn present(value: T) -> Self {
        let raw = value.into_raw();
        debug_assert!(!T::is_none(&raw));
        Self {
            raw,
            _value: PhantomData,
        }
    }

    #[inline]
    fn is_present(&self) -> bool {
        !T::is_none(&self.raw)
    }

    #[inline]
    unsafe fn value_ref(&self) -> &T {
        debug_assert!(self.is_present());
        T::raw_as_ref(&self.raw)
    }

    #[inline]
    unsafe fn value_mut(&mut self) -> &mut T {
        debug_assert!(self.is_present());
        T::raw_as_mut(&mut self.raw)
    }

    #[inline]
    unsafe fn into_value(self) -> T {
        debug_assert!(self.is_present());
        T::from_raw(self.raw)
    }
}

// `Niched` payloads own no resources, so duplicating the raw word is a
// complete clone, but only when the payload itself permits copies
// (`ValMut` does not).
impl<T: Niched + Copy> Copy for PackedRepr<T> {}

impl<T: Niched + Copy> Clone for PackedRepr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

unsafe impl<T: Niched + Send> Send for PackedRepr<T> {}
unsafe impl<T: Niched + Sync> Sync for PackedRepr<T> {}

unsafe impl<'a, T> Niched for ValRef<'a, T> {
    type Raw = *const T;

    const NONE: *const T = ptr::null();

    #[inline]
    fn is_none(raw: &*const T) -> bool {
        raw.is_null()
    }

    #[inline]
    fn into_raw(self) -> *const T {
        self.as_ptr()
    }

    #[inline]
    unsafe fn from_raw(raw: *const T) -> Self {
        ValRef::from_raw(raw)
    }

    #[inline]
    unsafe fn raw_as_ref(raw: &*const T) -> &Self {
        // ValRef is repr(transparent) over NonNull, itself transparent
        // over a raw pointer.
        &*(raw as *const *const T as *const Self)
    }

    #[inline]
    unsafe fn raw_as_mut(raw: &mut *const T) -> &mut Self {
        &mut *(raw as *mut *const T as *mut Self)
    }
}

unsafe impl<'a, T> Niched for ValMut<'a, T> {
    type Raw = *mut T;

    const NONE: *mut T = ptr::null_mut();

    #[inline]
    fn is_none(raw: &*mut T) -> bool {
        raw.is_null()
    }

    #[inline]
    fn into_raw(self) -> *mut T {
        self.as_ptr()
    }

    #[inline]
    unsafe fn from_raw(raw: *mut T) -> Self {
        ValMut::from_raw(raw)
    }

    #[inline]
    unsafe fn raw_as_ref(raw: &*mut T) -> &Self {
        &*(raw as *const *mut T as *const Self)
    }

    #[inline]
    unsafe fn raw_as_mut(raw: &mut *mut T) -> &mut Self {
        &mut *(raw as *mut *mut T as *mut Self)
    }
}

unsafe impl<'a, T> Niched for &'a T {
    type Raw = *const T;

    const NONE: *const T = ptr::null();

    #[inline]
    fn is_none(raw: &*const T) -> bool {
        raw.is_null()
    }

    #[inline]
    fn into_raw(self) -> *const T {
        self
    }

    #[inline]
    unsafe fn from_raw(raw: *const T) -> Self {
        &*raw
    }

    #[inline]
    unsafe fn raw_as_ref(raw: &*const T) -> &Self {
        &*(raw as *const *const T as *const Self)
    }

    #[inline]
    unsafe fn raw_as_mut(raw: &mut *const T) -> &mut Self {
        &mut *(raw as *mut *const T as *mut Self)
    }
}

unsafe impl<'a, T> Niched for &'a mut T {
    type Raw = *mut T;

    const NONE: *mut T = ptr::null_mut();

    #[inline]
    fn is_none(raw: &*mut T) -> bool {
        raw.is_null()
    }

    #[inline]
    fn into_raw(self) -> *mut T {
        self
    }

    #[inline]
    unsafe fn from_raw(raw: *mut T) -> Self {
        &mut *raw
    }

    #[inline]
    unsafe fn raw_as_ref(raw: &*mut T) -> &Self {
        &*(raw as *const *mut T as *const Self)
    }

    #[inline]
    unsafe fn raw_as_mut(raw: &mut *mut T) -> &mut Self {
        &mut *(raw as *mut *mut T as *mut Self)
    }
}

macro_rules! impl_niched_nonzero {
    ($($nonzero:ty => $primitive:ty,)*) => {$(
        unsafe impl Niched for $nonzero {
            type Raw = $primitive;

            const NONE: $primitive = 0;

            #[inline]
            fn is_none(raw: &$primitive) -> bool {
                *raw == 0
            }

            #[inline]
            fn into_raw(self) -> $primitive {
                self.get()
            }

            #[inline]
            unsafe fn from_raw(raw: $primitive) -> Self {
                <$nonzero>::new_unchecked(raw)
            }

            #[inline]
            unsafe fn raw_as_ref(raw: &$primitive) -> &Self {
                &*(raw as *const $primitive as *const Self)
            }

            #[inline]
            unsafe fn raw_as_mut(raw: &mut $primitive) -> &mut Self {
                &mut *(raw as *mut $primitive as *mut Self)
            }
        }
    )*};
}

impl_niched_nonzero! {
    NonZeroU8 => u8,
    NonZeroU16 => u16,
    NonZeroU32 => u32,
    NonZeroU64 => u64,
    NonZeroUsize => usize,
    NonZeroI8 => i8,
    NonZeroI16 => i16,
    NonZeroI32 => i32,
    NonZeroI64 => i64,
    NonZeroIsize => isize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_ref_is_one_word() {
        assert_eq!(
            std::mem::size_of::<PackedRepr<ValRef<'_, String>>>(),
            std::mem::size_of::<*const String>(),
        );
        assert_eq!(
            std::mem::size_of::<PackedRepr<&u64>>(),
            std::mem::size_of::<&u64>(),
        );
    }

    #[test]
    fn packed_nonzero_is_primitive_sized() {
        assert_eq!(std::mem::size_of::<PackedRepr<NonZeroU32>>(), 4);
        assert_eq!(std::mem::size_of::<PackedRepr<NonZeroU8>>(), 1);
    }

    #[test]
    fn absent_is_the_null_pattern() {
        let repr = PackedRepr::<ValRef<'_, i32>>::absent();
        assert!(!repr.is_present());

        let repr = PackedRepr::<NonZeroU64>::absent();
        assert!(!repr.is_present());
    }

    #[test]
    fn present_round_trips_through_the_raw_form() {
        let value = 9_i32;
        let repr = PackedRepr::present(ValRef::new(&value));
        assert!(repr.is_present());
        assert_eq!(*unsafe { repr.value_ref() }.get(), 9);
        assert_eq!(*unsafe { repr.into_value() }, 9);
    }

    #[test]
    fn value_mut_rebinds_in_place() {
        let first = 1;
        let second = 2;
        let mut repr = PackedRepr::present(ValRef::new(&first));
        *unsafe { repr.value_mut() } = ValRef::new(&second);
        assert_eq!(*unsafe { repr.value_ref() }.get(), 2);
    }

    #[test]
    fn take_resets_to_null() {
        let value = NonZeroU32::new(5).unwrap();
        let mut repr = PackedRepr::present(value);
        let taken = repr.take();
        assert!(!repr.is_present());
        assert_eq!(unsafe { taken.into_value() }, value);
    }
}
