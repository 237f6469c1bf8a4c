//! The typed argument binder.
//!
//! Binding pairs the first `n` arguments of a call with `n` typed slots, in
//! order. The slot types are fixed at compile time (tuples of `&mut T` where
//! `T: Slot`); the argument tags are checked at run time.
//!
//! With the default options:
//! - fewer than `n` arguments fails before any slot is touched
//! - extra arguments are ignored
//! - the first argument whose tag does not fit its slot stops the bind;
//!   slots before it keep the values already written

use nwrap_host::{CallContext, HostValue};
use tracing::{debug, trace};

use crate::{BindError, BindOptions, CommitPolicy, Slot};

/// An owned tuple of slot types, convertible from a call's arguments.
pub trait FromArgs: Sized {
    /// Number of arguments consumed.
    const LEN: usize;

    /// Convert arguments `0..LEN` in order, stopping at the first failure.
    ///
    /// Arity is not checked here; `extract` and `bind_with` do that first.
    fn from_args<Cx: CallContext>(call: &Cx) -> Result<Self, BindError>;
}

/// A tuple of mutable references to slots.
pub trait SlotSet {
    /// Number of slots.
    const LEN: usize;

    /// The owned tuple matching these slots.
    type Values: FromArgs;

    /// Convert and write slots one at a time, stopping at the first failure.
    fn bind_each<Cx: CallContext>(self, call: &Cx) -> Result<(), BindError>;

    /// Write already-converted values into the slots.
    fn commit(self, values: Self::Values);
}

fn convert_at<T: Slot, Cx: CallContext>(call: &Cx, position: usize) -> Result<T, BindError> {
    let value = call
        .arg(position)
        .ok_or(BindError::MissingArgument { position })?;
    T::from_host(value).ok_or_else(|| BindError::TypeMismatch {
        position,
        expected: T::KIND,
        found: value.type_tag(),
    })
}

impl FromArgs for () {
    const LEN: usize = 0;

    fn from_args<Cx: CallContext>(_call: &Cx) -> Result<Self, BindError> {
        Ok(())
    }
}

impl SlotSet for () {
    const LEN: usize = 0;
    type Values = ();

    fn bind_each<Cx: CallContext>(self, _call: &Cx) -> Result<(), BindError> {
        Ok(())
    }

    fn commit(self, _values: ()) {}
}

macro_rules! tuple_slots {
    ($len:expr; $($T:ident . $idx:tt),+) => {
        impl<$($T: Slot),+> FromArgs for ($($T,)+) {
            const LEN: usize = $len;

            fn from_args<Cx: CallContext>(call: &Cx) -> Result<Self, BindError> {
                Ok(($(convert_at::<$T, Cx>(call, $idx)?,)+))
            }
        }

        impl<'a, $($T: Slot),+> SlotSet for ($(&'a mut $T,)+) {
            const LEN: usize = $len;
            type Values = ($($T,)+);

            fn bind_each<Cx: CallContext>(self, call: &Cx) -> Result<(), BindError> {
                $(*self.$idx = convert_at::<$T, Cx>(call, $idx)?;)+
                Ok(())
            }

            fn commit(self, values: Self::Values) {
                $(*self.$idx = values.$idx;)+
            }
        }
    };
}

tuple_slots!(1; A.0);
tuple_slots!(2; A.0, B.1);
tuple_slots!(3; A.0, B.1, C.2);
tuple_slots!(4; A.0, B.1, C.2, D.3);
tuple_slots!(5; A.0, B.1, C.2, D.3, E.4);
tuple_slots!(6; A.0, B.1, C.2, D.3, E.4, F.5);
tuple_slots!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
tuple_slots!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
tuple_slots!(9; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
tuple_slots!(10; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
tuple_slots!(11; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
tuple_slots!(12; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);

/// Bind a call's leading arguments into `slots`.
///
/// Returns `true` only if every slot was converted. On `false`, slots before
/// the failing position may already hold converted values.
///
/// ```rust
/// use nwrap::{bind, NativeString};
/// use nwrap_host::memory::{MemCall, MemIsolate, MemValue};
///
/// let isolate = MemIsolate::new();
/// let call = MemCall::new(&isolate, vec![MemValue::string("n"), MemValue::number(3.0)]);
///
/// let mut name = NativeString::new();
/// let mut count = 0u32;
/// assert!(bind(&call, (&mut name, &mut count)));
/// assert_eq!(name, "n");
/// assert_eq!(count, 3);
/// ```
pub fn bind<C: CallContext, S: SlotSet>(call: &C, slots: S) -> bool {
    bind_with(call, slots, &BindOptions::default()).is_ok()
}

/// Like `bind`, but says what went wrong.
pub fn try_bind<C: CallContext, S: SlotSet>(call: &C, slots: S) -> Result<(), BindError> {
    bind_with(call, slots, &BindOptions::default())
}

/// Bind all slots or none of them.
pub fn bind_atomic<C: CallContext, S: SlotSet>(call: &C, slots: S) -> Result<(), BindError> {
    bind_with(
        call,
        slots,
        &BindOptions::default().with_commit(CommitPolicy::Atomic),
    )
}

/// Bind with explicit arity and commit policies.
pub fn bind_with<C: CallContext, S: SlotSet>(
    call: &C,
    slots: S,
    options: &BindOptions,
) -> Result<(), BindError> {
    let result = options
        .arity
        .check(S::LEN, call.len())
        .and_then(|()| match options.commit {
            CommitPolicy::Eager => slots.bind_each(call),
            CommitPolicy::Atomic => {
                <S::Values as FromArgs>::from_args(call).map(|values| slots.commit(values))
            }
        });
    record(&result, S::LEN, call.len());
    result
}

/// Convert a call's leading arguments into a fresh tuple.
///
/// ```rust
/// use nwrap::extract;
/// use nwrap_host::memory::{MemCall, MemIsolate, MemValue};
///
/// let isolate = MemIsolate::new();
/// let call = MemCall::new(&isolate, vec![MemValue::boolean(true), MemValue::number(1.5)]);
///
/// let (flag, ratio): (bool, f64) = extract(&call).unwrap();
/// assert!(flag);
/// assert_eq!(ratio, 1.5);
/// ```
pub fn extract<T: FromArgs, C: CallContext>(call: &C) -> Result<T, BindError> {
    extract_with(call, &BindOptions::default())
}

/// Like `extract`, with an explicit arity policy. The commit policy does not
/// apply: nothing outside the returned tuple is written.
pub fn extract_with<T: FromArgs, C: CallContext>(
    call: &C,
    options: &BindOptions,
) -> Result<T, BindError> {
    let result = options
        .arity
        .check(T::LEN, call.len())
        .and_then(|()| T::from_args(call));
    record(&result, T::LEN, call.len());
    result
}

fn record<T>(result: &Result<T, BindError>, slots: usize, args: usize) {
    match result {
        Ok(_) => trace!(slots, args, "arguments bound"),
        Err(BindError::Arity { expected, got }) => {
            debug!(expected, got, "argument count mismatch")
        }
        Err(BindError::MissingArgument { position }) => {
            debug!(position, args, "argument missing from call")
        }
        Err(BindError::TypeMismatch {
            position,
            expected,
            found,
        }) => debug!(
            position,
            expected = %expected,
            found = %found,
            "argument type mismatch"
        ),
    }
}
