//! An optional-value container generic over its storage representation.

use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    marker_type::Unit,
    ref_types::{ValMut, ValRef},
    result::{Res, SlotRes},
    storage::{FlagRepr, OptionRepr, PackedRepr, SlotRepr},
};

/// A container holding zero or one value, stored inline.
///
/// The second parameter is the storage strategy, one of the
/// [`OptionRepr`] implementors; the aliases below pick the right one for a
/// payload so user code rarely names a representation directly. All
/// strategies expose the same operations with the same semantics; only
/// the layout differs.
///
/// # Example
///
/// ```
/// use slot_types::{RefOpt, SlotOpt};
///
/// let mut opt = SlotOpt::some(String::from("stored inline"));
/// assert_eq!(opt.get().map(String::as_str), Some("stored inline"));
///
/// let prev = opt.take();
/// assert!(opt.is_none());
/// assert_eq!(prev.unwrap(), "stored inline");
///
/// // Optional references carry no separate flag at all.
/// assert_eq!(
///     std::mem::size_of::<RefOpt<'_, String>>(),
///     std::mem::size_of::<&String>(),
/// );
/// ```
pub struct Opt<R: OptionRepr> {
    repr: R,
}

/// The general-purpose form: an inline slot plus a presence flag.
pub type SlotOpt<T> = Opt<SlotRepr<T>>;

/// The niche-packed form for [`Niched`](crate::Niched) payloads:
/// flag and slot share one word.
pub type PackedOpt<T> = Opt<PackedRepr<T>>;

/// An optional shared reference, exactly one pointer wide.
pub type RefOpt<'a, T> = Opt<PackedRepr<ValRef<'a, T>>>;

/// An optional unique reference, exactly one pointer wide.
pub type MutOpt<'a, T> = Opt<PackedRepr<ValMut<'a, T>>>;

/// An optional [`Unit`]: one byte, storing only presence.
pub type UnitOpt = Opt<FlagRepr<Unit>>;

impl<R: OptionRepr> Opt<R> {
    /// Constructs a container holding `value`.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).unwrap(), 10);
    /// ```
    #[inline]
    pub fn some(value: R::Value) -> Self {
        Self {
            repr: R::present(value),
        }
    }

    /// Constructs an empty container.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert!(SlotOpt::<u32>::none().is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Self { repr: R::absent() }
    }

    /// Wraps an already-built representation.
    #[inline]
    pub const fn from_repr(repr: R) -> Self {
        Self { repr }
    }

    /// Unwraps into the underlying representation.
    #[inline]
    pub fn into_repr(self) -> R {
        self.repr
    }

    /// Returns whether a value is stored.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).is_some(), true);
    /// assert_eq!(SlotOpt::<u32>::none().is_some(), false);
    /// ```
    #[inline]
    pub fn is_some(&self) -> bool {
        self.repr.is_present()
    }

    /// Returns whether the container is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).is_none(), false);
    /// assert_eq!(SlotOpt::<u32>::none().is_none(), true);
    /// ```
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.repr.is_present()
    }

    /// Borrows the stored value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).get(), Some(&10));
    /// assert_eq!(SlotOpt::<u32>::none().get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&R::Value> {
        if self.repr.is_present() {
            Some(unsafe { self.repr.value_ref() })
        } else {
            None
        }
    }

    /// Mutably borrows the stored value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::some(10);
    /// if let Some(value) = opt.get_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(opt.get(), Some(&11));
    /// ```
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut R::Value> {
        if self.repr.is_present() {
            Some(unsafe { self.repr.value_mut() })
        } else {
            None
        }
    }

    /// Moves the contents out, leaving `self` empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::some(10);
    /// assert_eq!(opt.take().unwrap(), 10);
    /// assert!(opt.is_none());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            repr: self.repr.take(),
        }
    }

    /// Stores `value`, returning the previous contents.
    ///
    /// The new value is fully constructed before the old one is touched,
    /// so `self` always holds a coherent state.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::some(10);
    /// let prev = opt.replace(20);
    /// assert_eq!(opt.unwrap(), 20);
    /// assert_eq!(prev.unwrap(), 10);
    /// ```
    #[inline]
    pub fn replace(&mut self, value: R::Value) -> Self {
        Self {
            repr: self.repr.replace_with(value),
        }
    }

    /// Exchanges the contents of two containers.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut a = SlotOpt::some(1);
    /// let mut b = SlotOpt::none();
    /// a.swap(&mut b);
    /// assert!(a.is_none());
    /// assert_eq!(b.unwrap(), 1);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.repr.swap(&mut other.repr);
    }

    /// Unwraps the container, returning its contents.
    ///
    /// # Panics
    ///
    /// Panics if `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(500).unwrap(), 500);
    /// ```
    ///
    /// This one panics:
    /// ```should_panic
    /// # use slot_types::*;
    ///
    /// let _ = SlotOpt::<()>::none().unwrap();
    /// ```
    #[inline]
    pub fn unwrap(self) -> R::Value {
        self.expect("attempted to unwrap an empty Opt")
    }

    /// Unwraps the container, returning its contents.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(100).expect("must contain a value"), 100);
    /// ```
    #[inline]
    pub fn expect(self, msg: &str) -> R::Value {
        if self.repr.is_present() {
            unsafe { self.repr.into_value() }
        } else {
            panic!("{}", msg)
        }
    }

    /// Unwraps the container without checking for presence.
    ///
    /// # Safety
    ///
    /// `self.is_some()` must be true.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> R::Value {
        debug_assert!(self.is_some());
        self.repr.into_value()
    }

    /// Returns the stored value, or `def` if `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).unwrap_or(99), 10);
    /// assert_eq!(SlotOpt::<u32>::none().unwrap_or(99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or(self, def: R::Value) -> R::Value {
        match self.into_option() {
            Some(x) => x,
            None => def,
        }
    }

    /// Returns the stored value, or the return value of calling `f` if
    /// `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).unwrap_or_else(|| 77), 10);
    /// assert_eq!(SlotOpt::<u32>::none().unwrap_or_else(|| 77), 77);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> R::Value
    where
        F: FnOnce() -> R::Value,
    {
        match self.into_option() {
            Some(x) => x,
            None => f(),
        }
    }

    /// Returns the stored value, or `Default::default()` if `self` is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).unwrap_or_default(), 10);
    /// assert_eq!(SlotOpt::<u32>::none().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> R::Value
    where
        R::Value: Default,
    {
        self.unwrap_or_else(Default::default)
    }

    /// Borrows the contents as a pointer-sized optional reference.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let opt = SlotOpt::some(10);
    /// assert_eq!(opt.as_ref().map(|x| *x * 2), SlotOpt::some(20));
    /// assert!(SlotOpt::<u32>::none().as_ref().is_none());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> RefOpt<'_, R::Value> {
        match self.get() {
            Some(v) => Opt::some(ValRef::new(v)),
            None => Opt::none(),
        }
    }

    /// Mutably borrows the contents as a pointer-sized optional reference.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::some(10);
    /// if let Some(mut value) = opt.as_mut().into_option() {
    ///     *value = 30;
    /// }
    /// assert_eq!(opt.unwrap(), 30);
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> MutOpt<'_, R::Value> {
        match self.get_mut() {
            Some(v) => Opt::some(ValMut::new(v)),
            None => Opt::none(),
        }
    }

    /// Converts into the standard library's option type.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).into_option(), Some(10));
    /// assert_eq!(SlotOpt::<u32>::none().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<R::Value> {
        if self.repr.is_present() {
            Some(unsafe { self.repr.into_value() })
        } else {
            None
        }
    }

    /// Transforms the contained value with the `f` closure.
    ///
    /// The returned container uses the general slot representation,
    /// whatever `self` used.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).map(|x| x * 2), SlotOpt::some(20));
    /// assert!(SlotOpt::<u32>::none().map(|x| x * 2).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> SlotOpt<U>
    where
        F: FnOnce(R::Value) -> U,
    {
        match self.into_option() {
            Some(x) => Opt::some(f(x)),
            None => Opt::none(),
        }
    }

    /// Transforms (and returns) the contained value with the `f` closure,
    /// or returns `default` if `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).map_or(77, |x| x * 2), 20);
    /// assert_eq!(SlotOpt::<u32>::none().map_or(77, |x| x * 2), 77);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(R::Value) -> U,
    {
        match self.into_option() {
            Some(x) => f(x),
            None => default,
        }
    }

    /// Transforms (and returns) the contained value with the `f` closure,
    /// or returns `otherwise()` if `self` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).map_or_else(|| 77, |x| x * 2), 20);
    /// assert_eq!(SlotOpt::<u32>::none().map_or_else(|| 77, |x| x * 2), 77);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, otherwise: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(R::Value) -> U,
    {
        match self.into_option() {
            Some(x) => f(x),
            None => otherwise(),
        }
    }

    /// Returns `other` if `self` holds a value, an empty container
    /// otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let other = SlotOpt::some("beyond");
    /// assert_eq!(SlotOpt::some(10).and(other.clone()), other);
    /// assert!(SlotOpt::<u32>::none().and(other).is_none());
    /// ```
    #[inline]
    pub fn and<R2>(self, other: Opt<R2>) -> Opt<R2>
    where
        R2: OptionRepr,
    {
        if self.is_some() {
            other
        } else {
            Opt::none()
        }
    }

    /// Chains a fallible computation over the contained value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let half = |x: u32| {
    ///     if x % 2 == 0 {
    ///         SlotOpt::some(x / 2)
    ///     } else {
    ///         SlotOpt::none()
    ///     }
    /// };
    /// assert_eq!(SlotOpt::some(10).and_then(half), SlotOpt::some(5));
    /// assert!(SlotOpt::some(7).and_then(half).is_none());
    /// assert!(SlotOpt::none().and_then(half).is_none());
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Opt<R2>
    where
        R2: OptionRepr,
        F: FnOnce(R::Value) -> Opt<R2>,
    {
        match self.into_option() {
            Some(x) => f(x),
            None => Opt::none(),
        }
    }

    /// Returns `self` if it holds a value, `other` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).or(SlotOpt::some(20)), SlotOpt::some(10));
    /// assert_eq!(SlotOpt::none().or(SlotOpt::some(20)), SlotOpt::some(20));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        if self.is_some() {
            self
        } else {
            other
        }
    }

    /// Returns `self` if it holds a value, `f()` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(
    ///     SlotOpt::none().or_else(|| SlotOpt::some(20)),
    ///     SlotOpt::some(20),
    /// );
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_some() {
            self
        } else {
            f()
        }
    }

    /// Returns whichever of `self`/`other` holds a value, or an empty
    /// container if both or neither do.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(1).xor(SlotOpt::none()), SlotOpt::some(1));
    /// assert_eq!(SlotOpt::none().xor(SlotOpt::some(2)), SlotOpt::some(2));
    /// assert!(SlotOpt::some(1).xor(SlotOpt::some(2)).is_none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self.is_some(), other.is_some()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::none(),
        }
    }

    /// Keeps the contained value only if `predicate` accepts it.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(
    ///     SlotOpt::some(10).filter(|x| *x % 2 == 0),
    ///     SlotOpt::some(10),
    /// );
    /// assert!(SlotOpt::some(7).filter(|x| *x % 2 == 0).is_none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R::Value) -> bool,
    {
        match self.into_option() {
            Some(x) if predicate(&x) => Self::some(x),
            _ => Self::none(),
        }
    }

    /// Transforms into a result, using `err` for the empty case.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotOpt::some(10).ok_or("was empty").unwrap(), 10);
    /// assert_eq!(
    ///     SlotOpt::<u32>::none().ok_or("was empty").unwrap_err(),
    ///     "was empty",
    /// );
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> SlotRes<R::Value, E> {
        match self.into_option() {
            Some(x) => Res::from_ok(x),
            None => Res::from_err(err),
        }
    }

    /// Transforms into a result, calling `err` for the empty case.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(
    ///     SlotOpt::<u32>::none().ok_or_else(|| "was empty").unwrap_err(),
    ///     "was empty",
    /// );
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> SlotRes<R::Value, E>
    where
        F: FnOnce() -> E,
    {
        match self.into_option() {
            Some(x) => Res::from_ok(x),
            None => Res::from_err(err()),
        }
    }

    /// Stores `value` if `self` is empty, then mutably borrows the
    /// contents.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::none();
    /// *opt.get_or_insert(5) += 1;
    /// assert_eq!(opt.unwrap(), 6);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: R::Value) -> &mut R::Value {
        self.get_or_insert_with(|| value)
    }

    /// Stores `f()` if `self` is empty, then mutably borrows the
    /// contents.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut opt = SlotOpt::some(3);
    /// assert_eq!(*opt.get_or_insert_with(|| unreachable!()), 3);
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut R::Value
    where
        F: FnOnce() -> R::Value,
    {
        if !self.repr.is_present() {
            self.repr = R::present(f());
        }
        unsafe { self.repr.value_mut() }
    }

    /// Moves the contents into a container with a different storage
    /// strategy.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    /// use std::num::NonZeroU32;
    ///
    /// let slot = SlotOpt::some(NonZeroU32::new(4).unwrap());
    /// let packed: PackedOpt<NonZeroU32> = slot.convert();
    /// assert_eq!(packed.unwrap().get(), 4);
    /// ```
    #[inline]
    pub fn convert<R2>(self) -> Opt<R2>
    where
        R2: OptionRepr<Value = R::Value>,
    {
        match self.into_option() {
            Some(x) => Opt::some(x),
            None => Opt::none(),
        }
    }
}

impl<'a, T> Opt<PackedRepr<ValRef<'a, T>>> {
    /// Clones out of an optional reference.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let value = String::from("borrowed");
    /// let opt = SlotOpt::some(value.clone());
    /// assert_eq!(opt.as_ref().cloned(), opt);
    /// ```
    #[inline]
    pub fn cloned(self) -> SlotOpt<T>
    where
        T: Clone,
    {
        self.map(|r| r.get().clone())
    }

    /// Copies out of an optional reference.
    #[inline]
    pub fn copied(self) -> SlotOpt<T>
    where
        T: Copy,
    {
        self.map(|r| *r.get())
    }
}

impl<'a, T> Opt<PackedRepr<ValMut<'a, T>>> {
    /// Clones out of an optional unique reference.
    #[inline]
    pub fn cloned(self) -> SlotOpt<T>
    where
        T: Clone,
    {
        self.map(|r| r.get_mut().clone())
    }

    /// Copies out of an optional unique reference.
    #[inline]
    pub fn copied(self) -> SlotOpt<T>
    where
        T: Copy,
    {
        self.map(|r| *r.get_mut())
    }

    /// Downgrades to an optional shared reference.
    #[inline]
    pub fn into_ref(self) -> RefOpt<'a, T> {
        self.map_or_else(Opt::none, |r| Opt::some(r.into_ref()))
    }
}

impl<R: OptionRepr> Default for Opt<R> {
    /// An empty container.
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<R: OptionRepr + Clone> Clone for Opt<R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }
}

impl<R: OptionRepr + Copy> Copy for Opt<R> {}

impl<R> Debug for Opt<R>
where
    R: OptionRepr,
    R::Value: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(v) => f.debug_tuple("Opt::some").field(v).finish(),
            None => f.write_str("Opt::none"),
        }
    }
}

impl<R, R2> PartialEq<Opt<R2>> for Opt<R>
where
    R: OptionRepr,
    R2: OptionRepr,
    R::Value: PartialEq<R2::Value>,
{
    #[inline]
    fn eq(&self, other: &Opt<R2>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<R> Eq for Opt<R>
where
    R: OptionRepr,
    R::Value: Eq,
{
}

impl<R, R2> PartialOrd<Opt<R2>> for Opt<R>
where
    R: OptionRepr,
    R2: OptionRepr,
    R::Value: PartialOrd<R2::Value>,
{
    // Each operand is classified by its own presence flag; an empty
    // container sorts before any non-empty one regardless of argument
    // order.
    #[inline]
    fn partial_cmp(&self, other: &Opt<R2>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<R> Ord for Opt<R>
where
    R: OptionRepr,
    R::Value: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<R> Hash for Opt<R>
where
    R: OptionRepr,
    R::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.get() {
            Some(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<R: OptionRepr> From<Option<R::Value>> for Opt<R> {
    #[inline]
    fn from(option: Option<R::Value>) -> Self {
        match option {
            Some(x) => Self::some(x),
            None => Self::none(),
        }
    }
}

// No `Into<Option<R::Value>>` impl: std's `impl<T> From<T> for Option<T>`
// makes it overlap core's blanket `Into` for the uninferred case where
// `R::Value` is itself an `Opt`. `into_option` is the outgoing conversion.

/// Serializes the same way `Option` does.
impl<R> Serialize for Opt<R>
where
    R: OptionRepr,
    R::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl<'de, R> Deserialize<'de> for Opt<R>
where
    R: OptionRepr,
    R::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<R::Value>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_queries() {
        let opt = SlotOpt::some(String::from("v"));
        assert!(opt.is_some());
        assert!(!opt.is_none());
        assert_eq!(opt.get().map(String::as_str), Some("v"));

        let opt = SlotOpt::<String>::none();
        assert!(opt.is_none());
        assert_eq!(opt.get(), None);
    }

    #[test]
    fn take_replace_swap() {
        let mut opt = SlotOpt::some(1);
        let taken = opt.take();
        assert!(opt.is_none());
        assert_eq!(taken, SlotOpt::some(1));

        let prev = opt.replace(2);
        assert!(prev.is_none());
        assert_eq!(opt, SlotOpt::some(2));

        let mut other = SlotOpt::some(3);
        opt.swap(&mut other);
        assert_eq!(opt, SlotOpt::some(3));
        assert_eq!(other, SlotOpt::some(2));
    }

    #[test]
    #[should_panic(expected = "attempted to unwrap an empty Opt")]
    fn unwrap_panics_on_empty() {
        SlotOpt::<u32>::none().unwrap();
    }

    #[test]
    fn unwrap_unchecked_moves_the_value() {
        let opt = SlotOpt::some(vec![1, 2, 3]);
        assert_eq!(unsafe { opt.unwrap_unchecked() }, vec![1, 2, 3]);
    }

    #[test]
    fn combinators_match_the_standard_option() {
        assert_eq!(SlotOpt::some(2).map(|x| x + 1).unwrap(), 3);
        assert_eq!(SlotOpt::some(2).and(SlotOpt::some("y")).unwrap(), "y");
        assert!(SlotOpt::<u32>::none().and(SlotOpt::some("y")).is_none());
        assert_eq!(SlotOpt::none().or(SlotOpt::some(4)).unwrap(), 4);
        assert!(SlotOpt::some(1).xor(SlotOpt::some(2)).is_none());
        assert!(SlotOpt::some(3).filter(|x| *x > 5).is_none());
    }

    #[test]
    fn as_ref_and_as_mut_are_pointer_sized_views() {
        let mut opt = SlotOpt::some(10_u64);

        let view = opt.as_ref();
        assert_eq!(
            std::mem::size_of_val(&view),
            std::mem::size_of::<*const u64>(),
        );
        assert_eq!(view.copied().unwrap(), 10);

        *opt.as_mut().unwrap() = 20;
        assert_eq!(opt.unwrap(), 20);
    }

    #[test]
    fn empty_sorts_before_non_empty_in_both_argument_orders() {
        let empty = SlotOpt::<u32>::none();
        let full = SlotOpt::some(0_u32);

        assert!(empty < full);
        assert!(full > empty);
        assert_eq!(empty.cmp(&empty), Ordering::Equal);
        assert_eq!(full.cmp(&full), Ordering::Equal);
    }

    #[test]
    fn cross_representation_comparison() {
        let value = 5_u32;
        let packed = RefOpt::some(ValRef::new(&value));
        assert_eq!(packed.copied(), SlotOpt::some(5));
    }

    #[test]
    fn get_or_insert_only_fills_the_empty_case() {
        let mut opt = SlotOpt::none();
        assert_eq!(*opt.get_or_insert(1), 1);
        assert_eq!(*opt.get_or_insert(9), 1);
    }

    #[test]
    fn convert_moves_between_representations() {
        let value = 6_u8;
        let reference: RefOpt<'_, u8> = SlotOpt::some(ValRef::new(&value)).convert();
        assert_eq!(*reference.unwrap(), 6);
    }

    #[test]
    fn serde_matches_the_standard_option() {
        let json = serde_json::to_string(&SlotOpt::some(21)).unwrap();
        assert_eq!(json, "21");
        let opt: SlotOpt<i32> = serde_json::from_str("null").unwrap();
        assert!(opt.is_none());

        let bytes = bincode::serialize(&SlotOpt::some(7_u8)).unwrap();
        let opt: SlotOpt<u8> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(opt.unwrap(), 7);
    }

    #[test]
    fn debug_formatting() {
        assert_eq!(format!("{:?}", SlotOpt::some(3)), "Opt::some(3)");
        assert_eq!(format!("{:?}", SlotOpt::<i32>::none()), "Opt::none");
    }

    #[test]
    fn std_option_bridging_both_directions() {
        let opt = SlotOpt::from(Some(5));
        assert_eq!(opt.get(), Some(&5));
        assert_eq!(opt.into_option(), Some(5));

        let opt = SlotOpt::<u32>::from(None);
        assert_eq!(opt.into_option(), None);

        // Nested containers stay unambiguous.
        let nested: SlotOpt<SlotOpt<u32>> = Opt::some(Opt::some(1));
        assert_eq!(nested.into_option().unwrap().into_option(), Some(1));
    }

    #[test]
    fn map_invokes_the_function_exactly_once_when_present() {
        use std::cell::Cell;

        let calls = Cell::new(0_u32);

        let absent = SlotOpt::<u32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert!(absent.is_none());
        assert_eq!(calls.get(), 0);

        let present = SlotOpt::some(21).map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert_eq!(present.unwrap(), 42);
        assert_eq!(calls.get(), 1);
    }
}
