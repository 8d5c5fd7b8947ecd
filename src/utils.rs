use std::ptr::NonNull;

/// Converts a reference to a `NonNull`, usable in `const fn`.
pub(crate) const fn ref_as_nonnull<T>(reference: &T) -> NonNull<T> {
    unsafe { NonNull::new_unchecked(reference as *const T as *mut T) }
}

/// Materializes a shared reference to a zero-size value.
///
/// # Safety
///
/// `T` must be zero-sized.
pub(crate) unsafe fn dangling_zst_ref<'a, T>() -> &'a T {
    debug_assert!(std::mem::size_of::<T>() == 0);
    &*NonNull::<T>::dangling().as_ptr()
}

/// Materializes a unique reference to a zero-size value.
///
/// # Safety
///
/// `T` must be zero-sized.
pub(crate) unsafe fn dangling_zst_mut<'a, T>() -> &'a mut T {
    debug_assert!(std::mem::size_of::<T>() == 0);
    &mut *NonNull::<T>::dangling().as_ptr()
}
