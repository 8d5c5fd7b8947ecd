use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
    ptr::NonNull,
};

use crate::utils::ref_as_nonnull;

/// A copyable, rebindable handle to a shared `T`.
///
/// `ValRef<'a, T>` identifies exactly one existing value for as long as the
/// referent lives. It holds only an address and is never null; copying the
/// handle duplicates the address, not the referent, and reassigning a
/// binding rebinds the address.
///
/// There is no implicit conversion to a value copy of `T`: reading the
/// referent goes through [`get`](ValRef::get) or `Deref`, and duplicating
/// it requires an explicit `cloned`/`copied` on the containing option.
///
/// The borrow checker enforces the lifetime contract, including the ban on
/// handles to temporaries; the type adds no runtime checks of its own.
///
/// # Example
///
/// ```
/// use slot_types::ValRef;
///
/// let a = 1;
/// let b = 2;
///
/// let mut handle = ValRef::new(&a);
/// assert_eq!(*handle, 1);
///
/// // Rebinds the address, never the referent.
/// handle = ValRef::new(&b);
/// assert_eq!(*handle, 2);
/// ```
#[repr(transparent)]
pub struct ValRef<'a, T> {
    ptr: NonNull<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> ValRef<'a, T> {
    /// Constructs the handle from a reference.
    #[inline]
    pub const fn new(reference: &'a T) -> Self {
        Self {
            ptr: ref_as_nonnull(reference),
            _marker: PhantomData,
        }
    }

    /// Constructs the handle from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to a live `T` for the whole of
    /// `'a`, and the referent must not be mutated through other pointers
    /// while the handle exists.
    #[inline]
    pub const unsafe fn from_raw(ptr: *const T) -> Self
    where
        T: 'a,
    {
        Self {
            ptr: NonNull::new_unchecked(ptr as *mut T),
            _marker: PhantomData,
        }
    }

    /// Gets the underlying reference with the full `'a` lifetime,
    /// instead of one borrowing from the handle.
    #[inline]
    pub fn get(self) -> &'a T {
        unsafe { &*self.ptr.as_ptr() }
    }

    /// The referent's address.
    #[inline]
    pub const fn as_ptr(self) -> *const T {
        self.ptr.as_ptr() as *const T
    }
}

impl<'a, T> From<&'a T> for ValRef<'a, T> {
    #[inline]
    fn from(reference: &'a T) -> Self {
        Self::new(reference)
    }
}

impl<'a, T> Copy for ValRef<'a, T> {}

impl<'a, T> Clone for ValRef<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

unsafe impl<'a, T> Sync for ValRef<'a, T> where &'a T: Sync {}
unsafe impl<'a, T> Send for ValRef<'a, T> where &'a T: Send {}

impl<'a, T> Deref for ValRef<'a, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<'a, T: Display> Display for ValRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&**self, f)
    }
}

impl<'a, T: Debug> Debug for ValRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&**self, f)
    }
}

// Comparison and hashing go through the referent, like `&T`.

impl<'a, 'b, T: PartialEq> PartialEq<ValRef<'b, T>> for ValRef<'a, T> {
    fn eq(&self, other: &ValRef<'b, T>) -> bool {
        **self == **other
    }
}

impl<'a, T: Eq> Eq for ValRef<'a, T> {}

impl<'a, 'b, T: PartialOrd> PartialOrd<ValRef<'b, T>> for ValRef<'a, T> {
    fn partial_cmp(&self, other: &ValRef<'b, T>) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<'a, T: Ord> Ord for ValRef<'a, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<'a, T: Hash> Hash for ValRef<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_share_the_referent() {
        let value = String::from("shared");
        let a = ValRef::new(&value);
        let b = a;
        assert_eq!(a.as_ptr(), b.as_ptr());
        assert_eq!(&*a, &*b);
    }

    #[test]
    fn get_outlives_the_handle() {
        let value = 7_u32;
        let reference = {
            let handle = ValRef::new(&value);
            handle.get()
        };
        assert_eq!(*reference, 7);
    }

    #[test]
    fn compares_by_referent() {
        let a = 1;
        let b = 1;
        assert_eq!(ValRef::new(&a), ValRef::new(&b));
        assert!(ValRef::new(&a) < ValRef::new(&2));
    }

    #[test]
    fn is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<ValRef<'_, String>>(),
            std::mem::size_of::<*const String>(),
        );
    }
}
