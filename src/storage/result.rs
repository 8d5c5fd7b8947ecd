use std::{mem::ManuallyDrop, ptr};

use crate::storage::{OptionRepr, RawSlot, ResultRepr, SlotRepr};

/// Generic result storage: an option slot for the success payload plus a
/// bare slot for the error payload.
///
/// The option part's flag doubles as the ok/err discriminant: the error
/// slot is live exactly when the success slot is empty. Keeping the two
/// payloads in separate slots means neither type constrains the other's
/// layout, at the cost of the struct being the sum of both sizes.
pub struct TwoSlotRepr<T, E> {
    ok: SlotRepr<T>,
    err: RawSlot<E>,
}

unsafe impl<T, E> ResultRepr for TwoSlotRepr<T, E> {
    type Ok = T;
    type Err = E;

    #[inline]
    fn ok(value: T) -> Self {
        Self {
            ok: SlotRepr::present(value),
            err: RawSlot::uninit(),
        }
    }

    #[inline]
    fn err(error: E) -> Self {
        Self {
            ok: SlotRepr::absent(),
            err: RawSlot::new(error),
        }
    }

    #[inline]
    fn is_ok(&self) -> bool {
        self.ok.is_present()
    }

    #[inline]
    unsafe fn ok_ref(&self) -> &T {
        self.ok.value_ref()
    }

    #[inline]
    unsafe fn ok_mut(&mut self) -> &mut T {
        self.ok.value_mut()
    }

    #[inline]
    unsafe fn into_ok(self) -> T {
        debug_assert!(self.is_ok());
        // The error slot is uninitialized, so only the success slot needs
        // to be consumed.
        let this = ManuallyDrop::new(self);
        ptr::read(&this.ok).into_value()
    }

    #[inline]
    unsafe fn err_ref(&self) -> &E {
        debug_assert!(!self.is_ok());
        self.err.assume_init_ref()
    }

    #[inline]
    unsafe fn err_mut(&mut self) -> &mut E {
        debug_assert!(!self.is_ok());
        self.err.assume_init_mut()
    }

    #[inline]
    unsafe fn into_err(self) -> E {
        debug_assert!(!self.is_ok());
        let this = ManuallyDrop::new(self);
        this.err.assume_init_read()
    }
}

impl<T, E> Drop for TwoSlotRepr<T, E> {
    fn drop(&mut self) {
        // The success slot drops itself through its own destructor.
        if !self.ok.is_present() {
            unsafe { self.err.assume_init_drop() }
        }
    }
}

impl<T: Clone, E: Clone> Clone for TwoSlotRepr<T, E> {
    fn clone(&self) -> Self {
        if self.is_ok() {
            Self::ok(unsafe { self.ok_ref() }.clone())
        } else {
            Self::err(unsafe { self.err_ref() }.clone())
        }
    }
}

/// Single-slot result storage for results whose two payloads share a type.
///
/// When success and error carry the same type there is no need for two
/// slots or for conditional destruction: the value is always live and the
/// flag merely records which outcome it represents. Both sets of accessors
/// read the same field.
pub struct UniformRepr<T> {
    value: T,
    is_ok: bool,
}

unsafe impl<T> ResultRepr for UniformRepr<T> {
    type Ok = T;
    type Err = T;

    #[inline]
    fn ok(value: T) -> Self {
        Self { value, is_ok: true }
    }

    #[inline]
    fn err(error: T) -> Self {
        Self {
            value: error,
            is_ok: false,
        }
    }

    #[inline]
    fn is_ok(&self) -> bool {
        self.is_ok
    }

    #[inline]
    unsafe fn ok_ref(&self) -> &T {
        &self.value
    }

    #[inline]
    unsafe fn ok_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    unsafe fn into_ok(self) -> T {
        self.value
    }

    #[inline]
    unsafe fn err_ref(&self) -> &T {
        &self.value
    }

    #[inline]
    unsafe fn err_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    unsafe fn into_err(self) -> T {
        self.value
    }
}

impl<T: Copy> Copy for UniformRepr<T> {}

impl<T: Clone> Clone for UniformRepr<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            is_ok: self.is_ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    struct Probe {
        drops: Rc<Cell<u32>>,
        value: i32,
    }

    impl Probe {
        fn new(drops: &Rc<Cell<u32>>, value: i32) -> Self {
            Self {
                drops: drops.clone(),
                value,
            }
        }
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn ok_and_err_select_the_right_slot() {
        let repr = TwoSlotRepr::<u32, String>::ok(10);
        assert!(repr.is_ok());
        assert_eq!(unsafe { repr.ok_ref() }, &10);

        let repr = TwoSlotRepr::<u32, String>::err(String::from("bad"));
        assert!(!repr.is_ok());
        assert_eq!(unsafe { repr.err_ref() }, "bad");
    }

    #[test]
    fn only_the_live_payload_is_dropped() {
        let ok_drops = Rc::new(Cell::new(0));
        let err_drops = Rc::new(Cell::new(0));

        drop(TwoSlotRepr::<Probe, Probe>::ok(Probe::new(&ok_drops, 1)));
        assert_eq!(ok_drops.get(), 1);
        assert_eq!(err_drops.get(), 0);

        drop(TwoSlotRepr::<Probe, Probe>::err(Probe::new(&err_drops, 2)));
        assert_eq!(ok_drops.get(), 1);
        assert_eq!(err_drops.get(), 1);
    }

    #[test]
    fn into_ok_and_into_err_move_without_double_drop() {
        let drops = Rc::new(Cell::new(0));

        let repr = TwoSlotRepr::<Probe, String>::ok(Probe::new(&drops, 3));
        let probe = unsafe { repr.into_ok() };
        assert_eq!(probe.value, 3);
        assert_eq!(drops.get(), 0);
        drop(probe);
        assert_eq!(drops.get(), 1);

        let repr = TwoSlotRepr::<String, Probe>::err(Probe::new(&drops, 4));
        let probe = unsafe { repr.into_err() };
        assert_eq!(probe.value, 4);
        assert_eq!(drops.get(), 1);
        drop(probe);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn swap_exchanges_mixed_outcomes() {
        let mut a = TwoSlotRepr::<String, u8>::ok(String::from("fine"));
        let mut b = TwoSlotRepr::<String, u8>::err(9);

        a.swap(&mut b);
        assert!(!a.is_ok());
        assert_eq!(unsafe { a.err_ref() }, &9);
        assert!(b.is_ok());
        assert_eq!(unsafe { b.ok_ref() }, "fine");
    }

    #[test]
    fn clone_follows_the_discriminant() {
        let repr = TwoSlotRepr::<Vec<u8>, String>::err(String::from("oops"));
        let copy = repr.clone();
        assert!(!copy.is_ok());
        assert_eq!(unsafe { copy.err_ref() }, "oops");
    }

    #[test]
    fn uniform_repr_shares_one_slot() {
        assert_eq!(
            std::mem::size_of::<UniformRepr<u32>>(),
            std::mem::size_of::<(u32, bool)>(),
        );

        let repr = UniformRepr::ok(7_u32);
        assert!(repr.is_ok());
        assert_eq!(unsafe { repr.ok_ref() }, &7);

        let repr = UniformRepr::err(8_u32);
        assert!(!repr.is_ok());
        assert_eq!(unsafe { repr.into_err() }, 8);
    }

    #[test]
    fn uniform_swap_flips_both_value_and_flag() {
        let mut a = UniformRepr::ok(1);
        let mut b = UniformRepr::err(2);
        a.swap(&mut b);
        assert!(!a.is_ok());
        assert_eq!(unsafe { a.err_ref() }, &2);
        assert!(b.is_ok());
        assert_eq!(unsafe { b.ok_ref() }, &1);
    }
}
