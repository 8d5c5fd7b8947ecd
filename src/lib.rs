/*!

Option and Result value types with explicit, user-controllable inline storage.

The standard `Option`/`Result` enums leave the choice of in-memory
representation entirely to the compiler. This crate exposes that choice to
the user: a container is a thin value wrapper around one of several concrete
*storage representations*, selected per payload type at compile time and
never through runtime dispatch.

The three option representations:

- [`SlotRepr<T>`]: the general case, an uninitialized inline slot plus a
    presence flag. Works for any `T`.

- [`PackedRepr<T>`]: the niche case, for payloads implementing [`Niched`].
    The absent state is encoded in a spare bit pattern of the payload itself
    (a null address for the reference handles, zero for the `NonZero`
    integers), so the container is exactly as large as the raw payload.

- [`FlagRepr<T>`]: the empty-payload case, for zero-size payloads
    implementing [`EmptyValue`]. The container is a single flag byte.

On top of those, [`Opt`] provides the usual combinator surface (`map`,
`and_then`, `or_else`, `unwrap_or`, ...), and [`Res`] the success-or-error
equivalent with its own pair of representations ([`TwoSlotRepr`] and the
degenerate same-type [`UniformRepr`]).

[`ValRef`] and [`ValMut`] are copyable/rebindable reference handles used as
container payloads; `Opt::as_ref` projects any option into a pointer-sized
[`RefOpt`] without copying or consuming the payload.

# Example

```
use slot_types::{RefOpt, SlotOpt};

let opt = SlotOpt::some(String::from("hello world"));

let len = opt.as_ref().map(|s| s.len());
assert_eq!(len, SlotOpt::some(11));

// `as_ref` is a borrow, the original is still usable.
assert_eq!(opt.unwrap(), "hello world");

// Reference options carry no separate flag byte.
assert_eq!(
    std::mem::size_of::<RefOpt<'_, String>>(),
    std::mem::size_of::<*const String>(),
);
```

*/
#![warn(rust_2018_idioms)]

pub mod marker_type;
pub mod option;
pub mod ref_types;
pub mod result;
pub mod storage;
mod utils;

#[cfg(test)]
mod layout_tests;

pub use crate::{
    marker_type::Unit,
    option::{MutOpt, Opt, PackedOpt, RefOpt, SlotOpt, UnitOpt},
    ref_types::{ValMut, ValRef},
    result::{Res, SlotRes, UniformRes},
    storage::{
        EmptyValue, FlagRepr, Niched, OptionRepr, PackedRepr, RawSlot, ResultRepr, SlotRepr,
        TwoSlotRepr, UniformRepr,
    },
};
