use std::{
    fmt::{self, Debug, Display},
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

use crate::ref_types::ValRef;

/// A rebindable handle to a unique `T`.
///
/// The mutable counterpart of [`ValRef`]. Unlike `ValRef` it is not
/// `Copy`: duplicating a unique handle would alias the referent. It can be
/// temporarily lent out with [`reborrow`](ValMut::reborrow), or given up
/// permanently in one of two directions: [`get_mut`](ValMut::get_mut)
/// recovers the native `&'a mut T`, and [`into_ref`](ValMut::into_ref)
/// widens it into a shared [`ValRef`]. The widening is one-directional;
/// nothing turns a `ValRef` back into a `ValMut`.
///
/// # Example
///
/// ```
/// use slot_types::ValMut;
///
/// let mut value = 10;
/// let mut handle = ValMut::new(&mut value);
/// *handle += 1;
///
/// let shared = handle.into_ref();
/// assert_eq!(*shared, 11);
/// ```
#[repr(transparent)]
pub struct ValMut<'a, T> {
    ptr: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> ValMut<'a, T> {
    /// Constructs the handle from a unique reference.
    #[inline]
    pub fn new(reference: &'a mut T) -> Self {
        Self {
            ptr: NonNull::from(reference),
            _marker: PhantomData,
        }
    }

    /// Constructs the handle from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to a live `T` for the whole of
    /// `'a`, and nothing else may read or write the referent while the
    /// handle exists.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Self
    where
        T: 'a,
    {
        Self {
            ptr: NonNull::new_unchecked(ptr),
            _marker: PhantomData,
        }
    }

    /// Gets the underlying reference with the full `'a` lifetime,
    /// consuming the handle.
    #[inline]
    pub fn get_mut(self) -> &'a mut T {
        unsafe { &mut *self.ptr.as_ptr() }
    }

    /// Widens the handle into a shared [`ValRef`], consuming it.
    #[inline]
    pub fn into_ref(self) -> ValRef<'a, T> {
        unsafe { ValRef::from_raw(self.ptr.as_ptr()) }
    }

    /// Lends the handle out for a shorter borrow without giving it up.
    #[inline]
    pub fn reborrow(&mut self) -> ValMut<'_, T> {
        ValMut {
            ptr: self.ptr,
            _marker: PhantomData,
        }
    }

    /// The referent's address.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<'a, T> From<&'a mut T> for ValMut<'a, T> {
    #[inline]
    fn from(reference: &'a mut T) -> Self {
        Self::new(reference)
    }
}

unsafe impl<'a, T> Sync for ValMut<'a, T> where &'a mut T: Sync {}
unsafe impl<'a, T> Send for ValMut<'a, T> where &'a mut T: Send {}

impl<'a, T> Deref for ValMut<'a, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }
}

impl<'a, T> DerefMut for ValMut<'a, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { self.ptr.as_mut() }
    }
}

impl<'a, T: Display> Display for ValMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

impl<'a, T: Debug> Debug for ValMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reach_the_referent() {
        let mut value = vec![1, 2, 3];
        let mut handle = ValMut::new(&mut value);
        handle.push(4);
        assert_eq!(value, [1, 2, 3, 4]);
    }

    #[test]
    fn reborrow_keeps_the_original() {
        let mut value = 0;
        let mut handle = ValMut::new(&mut value);
        {
            let mut short = handle.reborrow();
            *short = 5;
        }
        *handle += 1;
        assert_eq!(value, 6);
    }

    #[test]
    fn widening_is_one_directional() {
        let mut value = String::from("x");
        let shared: ValRef<'_, String> = ValMut::new(&mut value).into_ref();
        assert_eq!(&*shared, "x");
    }
}
