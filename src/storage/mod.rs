//! Storage representations underneath the container value types.
//!
//! Each representation is a plain struct implementing [`OptionRepr`] (or
//! [`ResultRepr`]); the value types in [`option`](crate::option) and
//! [`result`](crate::result) are written once against the trait and never
//! dispatch at runtime. The unchecked accessors concentrate all of the
//! crate's "trust the caller" surface here: a representation is read only
//! between a presence check and the matching destruction, and every layer
//! above maintains that discipline so user code never has to.

mod flag;
mod packed;
mod raw_slot;
mod result;
mod slot;

pub use self::{
    flag::FlagRepr,
    packed::{Niched, PackedRepr},
    raw_slot::RawSlot,
    result::{TwoSlotRepr, UniformRepr},
    slot::SlotRepr,
};

pub use crate::marker_type::EmptyValue;

use std::mem;

/// Capability interface over the option storage strategies.
///
/// An implementor holds zero or one `Value`. The flag (however it is
/// encoded) is authoritative: the unchecked accessors are sound exactly
/// when it reports presence.
///
/// `take`, `replace_with` and `swap` have defaulted implementations in
/// terms of `mem::replace`/`mem::swap`; Rust moves are untyped memory
/// copies, so these are flat operations for every representation.
///
/// # Safety
///
/// Implementors must guarantee that `is_present` faithfully reports
/// whether a live `Value` is stored, that `present`/`absent` establish the
/// corresponding state, and that a stored payload is dropped exactly once.
pub unsafe trait OptionRepr: Sized {
    /// The payload type.
    type Value;

    /// The representation holding no value.
    fn absent() -> Self;

    /// The representation holding `value`.
    fn present(value: Self::Value) -> Self;

    /// Whether a payload is currently stored.
    fn is_present(&self) -> bool;

    /// Shared access to the payload.
    ///
    /// # Safety
    ///
    /// `self.is_present()` must be true.
    unsafe fn value_ref(&self) -> &Self::Value;

    /// Unique access to the payload.
    ///
    /// # Safety
    ///
    /// `self.is_present()` must be true.
    unsafe fn value_mut(&mut self) -> &mut Self::Value;

    /// Moves the payload out.
    ///
    /// # Safety
    ///
    /// `self.is_present()` must be true.
    unsafe fn into_value(self) -> Self::Value;

    /// Extract-and-reset: returns the previous state and leaves `self`
    /// absent.
    #[inline]
    fn take(&mut self) -> Self {
        mem::replace(self, Self::absent())
    }

    /// Replace-in-place: builds the fresh present representation *before*
    /// touching `self`, then swaps it in, returning the previous state.
    ///
    /// The ordering is the transactional guarantee of the whole crate: at
    /// no point can `self` be observed with a flag that disagrees with its
    /// slot.
    #[inline]
    fn replace_with(&mut self, value: Self::Value) -> Self {
        let mut fresh = Self::present(value);
        mem::swap(self, &mut fresh);
        fresh
    }

    /// Exchanges the contents of two representations.
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

/// Capability interface over the result storage strategies.
///
/// An implementor holds exactly one of an `Ok` or an `Err` payload; the
/// ok/err flag selects which set of unchecked accessors is sound.
///
/// # Safety
///
/// Implementors must guarantee that `is_ok` faithfully selects the live
/// payload, and that whichever payload is live is dropped exactly once.
pub unsafe trait ResultRepr: Sized {
    /// The success payload type.
    type Ok;
    /// The error payload type.
    type Err;

    /// The representation holding a success payload.
    fn ok(value: Self::Ok) -> Self;

    /// The representation holding an error payload.
    fn err(error: Self::Err) -> Self;

    /// Whether the success payload is the live one.
    fn is_ok(&self) -> bool;

    /// Shared access to the success payload.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be true.
    unsafe fn ok_ref(&self) -> &Self::Ok;

    /// Unique access to the success payload.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be true.
    unsafe fn ok_mut(&mut self) -> &mut Self::Ok;

    /// Moves the success payload out.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be true.
    unsafe fn into_ok(self) -> Self::Ok;

    /// Shared access to the error payload.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be false.
    unsafe fn err_ref(&self) -> &Self::Err;

    /// Unique access to the error payload.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be false.
    unsafe fn err_mut(&mut self) -> &mut Self::Err;

    /// Moves the error payload out.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be false.
    unsafe fn into_err(self) -> Self::Err;

    /// Exchanges the contents of two representations, including the
    /// mixed ok/err case.
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}
