use std::{mem::MaybeUninit, ptr};

/// Uninitialized inline storage for a single `T`.
///
/// A byte buffer sized and aligned for `T`, permanently indeterminate as
/// far as the type system is concerned. There is no bounds checking and no
/// initialization tracking here, which is what keeps the slot exactly
/// `size_of::<T>()` bytes (zero for zero-size `T`). The owning
/// representation tracks liveness and must uphold the single rule: a slot
/// is read only between a `write`/`new` and the matching
/// `assume_init_read`/`assume_init_drop`.
pub struct RawSlot<T> {
    slot: MaybeUninit<T>,
}

impl<T> RawSlot<T> {
    /// An uninitialized slot.
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    /// A slot initialized with `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
        }
    }

    /// Raw read view of the slot's bytes.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Raw write view of the slot's bytes, for placement construction.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }

    /// Placement-constructs `value` in the slot.
    ///
    /// Any previous value is *not* dropped; the caller must have consumed
    /// or destroyed it first.
    #[inline]
    pub fn write(&mut self, value: T) -> &mut T {
        self.slot.write(value)
    }

    /// Live-object view of the slot.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live `T`.
    #[inline]
    pub unsafe fn assume_init_ref(&self) -> &T {
        &*self.slot.as_ptr()
    }

    /// Mutable live-object view of the slot.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live `T`.
    #[inline]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        &mut *self.slot.as_mut_ptr()
    }

    /// Moves the value out by bitwise copy, leaving the slot logically
    /// uninitialized.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live `T`, and it must not be read or
    /// dropped again afterwards.
    #[inline]
    pub unsafe fn assume_init_read(&self) -> T {
        ptr::read(self.slot.as_ptr())
    }

    /// Destroys the value in place, leaving the slot logically
    /// uninitialized.
    ///
    /// # Safety
    ///
    /// The slot must currently hold a live `T`, and it must not be read or
    /// dropped again afterwards.
    #[inline]
    pub unsafe fn assume_init_drop(&mut self) {
        ptr::drop_in_place(self.slot.as_mut_ptr());
    }
}
