//! A success-or-error container generic over its storage representation.

use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    option::{Opt, SlotOpt},
    ref_types::{ValMut, ValRef},
    storage::{ResultRepr, TwoSlotRepr, UniformRepr},
};

/// A container holding exactly one of a success or an error value,
/// stored inline.
///
/// Like [`Opt`], the parameter is the storage strategy: [`SlotRes`] keeps
/// the two payloads in separate slots, [`UniformRes`] shares one slot when
/// both payloads have the same type. Unlike the standard result, the
/// panicking extractors never require the payloads to be `Debug`; they
/// panic with a fixed message instead of formatting the other payload.
///
/// # Example
///
/// ```
/// use slot_types::SlotRes;
///
/// let res: SlotRes<u32, String> = SlotRes::from_ok(10);
/// assert_eq!(res.map(|x| x * 2).unwrap(), 20);
///
/// let res: SlotRes<u32, String> = SlotRes::from_err("boom".into());
/// assert_eq!(res.unwrap_or(0), 0);
/// ```
pub struct Res<R: ResultRepr> {
    repr: R,
}

/// The general-purpose form: one slot per payload.
pub type SlotRes<T, E> = Res<TwoSlotRepr<T, E>>;

/// The shared-slot form for results whose payloads have the same type.
pub type UniformRes<T> = Res<UniformRepr<T>>;

impl<R: ResultRepr> Res<R> {
    /// Constructs a container holding the success value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<_, ()>::from_ok(10).unwrap(), 10);
    /// ```
    #[inline]
    pub fn from_ok(value: R::Ok) -> Self {
        Self { repr: R::ok(value) }
    }

    /// Constructs a container holding the error value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<(), _>::from_err(10).unwrap_err(), 10);
    /// ```
    #[inline]
    pub fn from_err(error: R::Err) -> Self {
        Self {
            repr: R::err(error),
        }
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

    /// Returns whether the success value is stored.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, u32>::from_ok(10).is_ok(), true);
    /// assert_eq!(SlotRes::<u32, u32>::from_err(5).is_ok(), false);
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.repr.is_ok()
    }

    /// Returns whether the error value is stored.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, u32>::from_ok(10).is_err(), false);
    /// assert_eq!(SlotRes::<u32, u32>::from_err(5).is_err(), true);
    /// ```
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.repr.is_ok()
    }

    /// Borrows the contents as a standard result of references.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, String>::from_ok(10);
    /// assert_eq!(res.as_result(), Ok(&10));
    /// ```
    #[inline]
    pub fn as_result(&self) -> Result<&R::Ok, &R::Err> {
        if self.repr.is_ok() {
            Ok(unsafe { self.repr.ok_ref() })
        } else {
            Err(unsafe { self.repr.err_ref() })
        }
    }

    /// Mutably borrows the contents as a standard result of references.
    #[inline]
    pub fn as_result_mut(&mut self) -> Result<&mut R::Ok, &mut R::Err> {
        if self.repr.is_ok() {
            Ok(unsafe { self.repr.ok_mut() })
        } else {
            Err(unsafe { self.repr.err_mut() })
        }
    }

    /// Converts into the standard library's result type.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, ()>::from_ok(10).into_result(), Ok(10));
    /// assert_eq!(SlotRes::<(), u32>::from_err(5).into_result(), Err(5));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R::Ok, R::Err> {
        let repr = self.repr;
        if repr.is_ok() {
            Ok(unsafe { repr.into_ok() })
        } else {
            Err(unsafe { repr.into_err() })
        }
    }

    /// Unwraps the container, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if `self` holds an error. The error is not formatted into
    /// the panic message, so no `Debug` bound is required.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, String>::from_ok(500).unwrap(), 500);
    /// ```
    ///
    /// This one panics:
    /// ```should_panic
    /// # use slot_types::*;
    ///
    /// let _ = SlotRes::<(), u32>::from_err(5).unwrap();
    /// ```
    #[inline]
    pub fn unwrap(self) -> R::Ok {
        self.expect("attempted to unwrap an err Res")
    }

    /// Unwraps the container, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if `self` holds an error.
    #[inline]
    pub fn expect(self, msg: &str) -> R::Ok {
        match self.into_result() {
            Ok(x) => x,
            Err(_) => panic!("{}", msg),
        }
    }

    /// Unwraps the container, returning the error value.
    ///
    /// # Panics
    ///
    /// Panics if `self` holds a success value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, String>::from_err("down".into());
    /// assert_eq!(res.unwrap_err(), "down");
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> R::Err {
        self.expect_err("attempted to unwrap_err an ok Res")
    }

    /// Unwraps the container, returning the error value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if `self` holds a success value.
    #[inline]
    pub fn expect_err(self, msg: &str) -> R::Err {
        match self.into_result() {
            Ok(_) => panic!("{}", msg),
            Err(e) => e,
        }
    }

    /// Unwraps the success value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self.is_ok()` must be true.
    #[inline]
    pub unsafe fn unwrap_unchecked(self) -> R::Ok {
        debug_assert!(self.is_ok());
        self.repr.into_ok()
    }

    /// Unwraps the error value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// `self.is_err()` must be true.
    #[inline]
    pub unsafe fn unwrap_err_unchecked(self) -> R::Err {
        debug_assert!(self.is_err());
        self.repr.into_err()
    }

    /// Returns the success value, or `def` for the error case.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, u32>::from_ok(10).unwrap_or(99), 10);
    /// assert_eq!(SlotRes::<u32, u32>::from_err(5).unwrap_or(99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or(self, def: R::Ok) -> R::Ok {
        match self.into_result() {
            Ok(x) => x,
            Err(_) => def,
        }
    }

    /// Returns the success value, or transforms the error with `f`.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, u32>::from_err(5);
    /// assert_eq!(res.unwrap_or_else(|e| e * 2), 10);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> R::Ok
    where
        F: FnOnce(R::Err) -> R::Ok,
    {
        match self.into_result() {
            Ok(x) => x,
            Err(e) => f(e),
        }
    }

    /// Returns the success value, or `Default::default()` for the error
    /// case.
    #[inline]
    pub fn unwrap_or_default(self) -> R::Ok
    where
        R::Ok: Default,
    {
        self.unwrap_or_else(|_| Default::default())
    }

    /// Converts into an optional success value, discarding any error.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert_eq!(SlotRes::<u32, u32>::from_ok(10).ok().unwrap(), 10);
    /// assert!(SlotRes::<u32, u32>::from_err(5).ok().is_none());
    /// ```
    #[inline]
    pub fn ok(self) -> SlotOpt<R::Ok> {
        match self.into_result() {
            Ok(x) => Opt::some(x),
            Err(_) => Opt::none(),
        }
    }

    /// Converts into an optional error value, discarding any success.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// assert!(SlotRes::<u32, u32>::from_ok(10).err().is_none());
    /// assert_eq!(SlotRes::<u32, u32>::from_err(5).err().unwrap(), 5);
    /// ```
    #[inline]
    pub fn err(self) -> SlotOpt<R::Err> {
        match self.into_result() {
            Ok(_) => Opt::none(),
            Err(e) => Opt::some(e),
        }
    }

    /// Transforms the success value with the `f` closure, passing errors
    /// through untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, u32>::from_ok(10);
    /// assert_eq!(res.map(|x| x * 3).unwrap(), 30);
    ///
    /// let res = SlotRes::<u32, u32>::from_err(5);
    /// assert_eq!(res.map(|x| x * 3).unwrap_err(), 5);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> SlotRes<U, R::Err>
    where
        F: FnOnce(R::Ok) -> U,
    {
        match self.into_result() {
            Ok(x) => Res::from_ok(f(x)),
            Err(e) => Res::from_err(e),
        }
    }

    /// Transforms the error value with the `f` closure, passing successes
    /// through untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, u32>::from_err(5);
    /// assert_eq!(res.map_err(|e| e + 1).unwrap_err(), 6);
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> SlotRes<R::Ok, F2>
    where
        F: FnOnce(R::Err) -> F2,
    {
        match self.into_result() {
            Ok(x) => Res::from_ok(x),
            Err(e) => Res::from_err(f(e)),
        }
    }

    /// Folds both cases into one value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, u32>::from_ok(10);
    /// assert_eq!(res.map_or_else(|e| e, |x| x * 2), 20);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, with_err: D, with_ok: F) -> U
    where
        D: FnOnce(R::Err) -> U,
        F: FnOnce(R::Ok) -> U,
    {
        match self.into_result() {
            Ok(x) => with_ok(x),
            Err(e) => with_err(e),
        }
    }

    /// Chains a fallible computation over the success value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let checked = |x: u32| {
    ///     if x < 100 {
    ///         SlotRes::from_ok(x + 1)
    ///     } else {
    ///         SlotRes::from_err(String::from("too big"))
    ///     }
    /// };
    /// let res = SlotRes::<u32, String>::from_ok(10);
    /// assert_eq!(res.and_then(checked).unwrap(), 11);
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Res<R2>
    where
        R2: ResultRepr<Err = R::Err>,
        F: FnOnce(R::Ok) -> Res<R2>,
    {
        match self.into_result() {
            Ok(x) => f(x),
            Err(e) => Res::from_err(e),
        }
    }

    /// Chains a recovery computation over the error value.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let res = SlotRes::<u32, u32>::from_err(5);
    /// assert_eq!(res.or_else(|e| SlotRes::<_, u32>::from_ok(e * 2)).unwrap(), 10);
    /// ```
    #[inline]
    pub fn or_else<R2, F>(self, f: F) -> Res<R2>
    where
        R2: ResultRepr<Ok = R::Ok>,
        F: FnOnce(R::Err) -> Res<R2>,
    {
        match self.into_result() {
            Ok(x) => Res::from_ok(x),
            Err(e) => f(e),
        }
    }

    /// Borrows the contents as a result of pointer-sized reference
    /// handles.
    #[inline]
    pub fn as_ref(&self) -> SlotRes<ValRef<'_, R::Ok>, ValRef<'_, R::Err>> {
        match self.as_result() {
            Ok(x) => Res::from_ok(ValRef::new(x)),
            Err(e) => Res::from_err(ValRef::new(e)),
        }
    }

    /// Mutably borrows the contents as a result of pointer-sized
    /// reference handles.
    #[inline]
    pub fn as_mut(&mut self) -> SlotRes<ValMut<'_, R::Ok>, ValMut<'_, R::Err>> {
        match self.as_result_mut() {
            Ok(x) => Res::from_ok(ValMut::new(x)),
            Err(e) => Res::from_err(ValMut::new(e)),
        }
    }

    /// Exchanges the contents of two containers, including when one holds
    /// a success and the other an error.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let mut a = SlotRes::<u32, String>::from_ok(1);
    /// let mut b = SlotRes::<u32, String>::from_err("e".into());
    /// a.swap(&mut b);
    /// assert_eq!(a.unwrap_err(), "e");
    /// assert_eq!(b.unwrap(), 1);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.repr.swap(&mut other.repr);
    }

    /// Moves the contents into a container with a different storage
    /// strategy.
    ///
    /// # Example
    ///
    /// ```
    /// # use slot_types::*;
    ///
    /// let two_slot = SlotRes::<u32, u32>::from_err(8);
    /// let uniform: UniformRes<u32> = two_slot.convert();
    /// assert_eq!(uniform.unwrap_err(), 8);
    /// ```
    #[inline]
    pub fn convert<R2>(self) -> Res<R2>
    where
        R2: ResultRepr<Ok = R::Ok, Err = R::Err>,
    {
        match self.into_result() {
            Ok(x) => Res::from_ok(x),
            Err(e) => Res::from_err(e),
        }
    }
}

impl<R: ResultRepr + Clone> Clone for Res<R> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }
}

impl<R: ResultRepr + Copy> Copy for Res<R> {}

impl<R> Debug for Res<R>
where
    R: ResultRepr,
    R::Ok: Debug,
    R::Err: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_result() {
            Ok(x) => f.debug_tuple("Res::ok").field(x).finish(),
            Err(e) => f.debug_tuple("Res::err").field(e).finish(),
        }
    }
}

impl<R, R2> PartialEq<Res<R2>> for Res<R>
where
    R: ResultRepr,
    R2: ResultRepr,
    R::Ok: PartialEq<R2::Ok>,
    R::Err: PartialEq<R2::Err>,
{
    #[inline]
    fn eq(&self, other: &Res<R2>) -> bool {
        match (self.as_result(), other.as_result()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => a == b,
            _ => false,
        }
    }
}

impl<R> Eq for Res<R>
where
    R: ResultRepr,
    R::Ok: Eq,
    R::Err: Eq,
{
}

impl<R, R2> PartialOrd<Res<R2>> for Res<R>
where
    R: ResultRepr,
    R2: ResultRepr,
    R::Ok: PartialOrd<R2::Ok>,
    R::Err: PartialOrd<R2::Err>,
{
    // A success sorts before an error; each operand is classified by its
    // own discriminant.
    #[inline]
    fn partial_cmp(&self, other: &Res<R2>) -> Option<Ordering> {
        match (self.as_result(), other.as_result()) {
            (Ok(a), Ok(b)) => a.partial_cmp(b),
            (Err(a), Err(b)) => a.partial_cmp(b),
            (Ok(_), Err(_)) => Some(Ordering::Less),
            (Err(_), Ok(_)) => Some(Ordering::Greater),
        }
    }
}

impl<R> Ord for Res<R>
where
    R: ResultRepr,
    R::Ok: Ord,
    R::Err: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_result(), other.as_result()) {
            (Ok(a), Ok(b)) => a.cmp(b),
            (Err(a), Err(b)) => a.cmp(b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
        }
    }
}

impl<R> Hash for Res<R>
where
    R: ResultRepr,
    R::Ok: Hash,
    R::Err: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_result() {
            Ok(x) => {
                state.write_u8(0);
                x.hash(state);
            }
            Err(e) => {
                state.write_u8(1);
                e.hash(state);
            }
        }
    }
}

impl<R: ResultRepr> From<Result<R::Ok, R::Err>> for Res<R> {
    #[inline]
    fn from(result: Result<R::Ok, R::Err>) -> Self {
        match result {
            Ok(x) => Self::from_ok(x),
            Err(e) => Self::from_err(e),
        }
    }
}

#[allow(clippy::from_over_into)]
impl<R: ResultRepr> Into<Result<R::Ok, R::Err>> for Res<R> {
    #[inline]
    fn into(self) -> Result<R::Ok, R::Err> {
        self.into_result()
    }
}

/// Serializes the same way `Result` does.
impl<R> Serialize for Res<R>
where
    R: ResultRepr,
    R::Ok: Serialize,
    R::Err: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_result().serialize(serializer)
    }
}

impl<'de, R> Deserialize<'de> for Res<R>
where
    R: ResultRepr,
    R::Ok: Deserialize<'de>,
    R::Err: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Result::<R::Ok, R::Err>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_queries() {
        let res = SlotRes::<u32, String>::from_ok(1);
        assert!(res.is_ok());
        assert!(!res.is_err());
        assert_eq!(res.as_result(), Ok(&1));

        let res = SlotRes::<u32, String>::from_err("e".into());
        assert!(res.is_err());
        assert_eq!(res.into_result(), Err(String::from("e")));
    }

    #[test]
    #[should_panic(expected = "attempted to unwrap an err Res")]
    fn unwrap_panics_on_err_without_debug() {
        struct NotDebug;
        SlotRes::<u32, NotDebug>::from_err(NotDebug).unwrap();
    }

    #[test]
    #[should_panic(expected = "attempted to unwrap_err an ok Res")]
    fn unwrap_err_panics_on_ok() {
        SlotRes::<u32, String>::from_ok(1).unwrap_err();
    }

    #[test]
    fn combinators_match_the_standard_result() {
        let res = SlotRes::<u32, String>::from_ok(55);
        assert_eq!(res.map(|x| x + 1).unwrap(), 56);

        let res = SlotRes::<u32, String>::from_err("boom".into());
        assert_eq!(res.map(|x| x + 1).unwrap_err(), "boom");

        let res = SlotRes::<u32, u32>::from_err(4);
        assert_eq!(res.map_err(|e| e * 10).unwrap_err(), 40);
        assert_eq!(
            SlotRes::<u32, u32>::from_err(4).map_or_else(|e| e, |x| x),
            4,
        );
    }

    #[test]
    fn ok_and_err_views() {
        let res = SlotRes::<u32, String>::from_ok(9);
        assert_eq!(res.ok().unwrap(), 9);
        assert!(SlotRes::<u32, String>::from_ok(9).err().is_none());

        let res = SlotRes::<u32, String>::from_err("gone".into());
        assert!(SlotRes::<u32, String>::from_err("gone".into()).ok().is_none());
        assert_eq!(res.err().unwrap(), "gone");
    }

    #[test]
    fn as_ref_borrows_without_consuming() {
        let res = SlotRes::<String, u32>::from_ok("keep".into());
        assert_eq!(res.as_ref().map(|r| r.len()).unwrap(), 4);
        assert!(res.is_ok());
    }

    #[test]
    fn as_mut_edits_in_place() {
        let mut res = SlotRes::<u32, u32>::from_err(1);
        if let Err(e) = res.as_result_mut() {
            *e += 1;
        }
        assert_eq!(res.unwrap_err(), 2);
    }

    #[test]
    fn swap_exchanges_mixed_outcomes() {
        let mut a = SlotRes::<String, u32>::from_ok("yes".into());
        let mut b = SlotRes::<String, u32>::from_err(3);
        a.swap(&mut b);
        assert_eq!(a.unwrap_err(), 3);
        assert_eq!(b.unwrap(), "yes");
    }

    #[test]
    fn ok_sorts_before_err_in_both_argument_orders() {
        let ok = UniformRes::from_ok(9_u32);
        let err = UniformRes::from_err(0_u32);
        assert!(ok < err);
        assert!(err > ok);
    }

    #[test]
    fn uniform_and_two_slot_convert_both_ways() {
        let uniform = UniformRes::<u32>::from_ok(2);
        let two_slot: SlotRes<u32, u32> = uniform.convert();
        assert_eq!(two_slot.as_result(), Ok(&2));

        let back: UniformRes<u32> = two_slot.convert();
        assert_eq!(back.unwrap(), 2);
    }

    #[test]
    fn serde_matches_the_standard_result() {
        let json = serde_json::to_string(&SlotRes::<u32, String>::from_ok(3)).unwrap();
        assert_eq!(json, r#"{"Ok":3}"#);

        let res: SlotRes<u32, String> = serde_json::from_str(r#"{"Err":"x"}"#).unwrap();
        assert_eq!(res.unwrap_err(), "x");

        let bytes = bincode::serialize(&UniformRes::from_err(7_u8)).unwrap();
        let res: UniformRes<u8> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(res.unwrap_err(), 7);
    }

    #[test]
    fn debug_formatting() {
        assert_eq!(
            format!("{:?}", SlotRes::<u32, u32>::from_ok(3)),
            "Res::ok(3)",
        );
        assert_eq!(
            format!("{:?}", SlotRes::<u32, u32>::from_err(4)),
            "Res::err(4)",
        );
    }
}
