//! Value-like reference handles.
//!
//! [`ValRef`] and [`ValMut`] are pointer-like handles with reference-like
//! access: they move like plain values, rebind on assignment, and
//! dereference to the referent. Both are
//! `#[repr(transparent)]` over a `NonNull`, which is what lets an option
//! over them collapse to a single machine word (see
//! [`PackedRepr`](crate::PackedRepr)).

mod val_mut;
mod val_ref;

pub use self::{val_mut::ValMut, val_ref::ValRef};
