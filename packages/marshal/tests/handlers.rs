//! Handlers written the way a native module would write them: generic over
//! `CallContext`, bind the arguments, work on native values, set the return.

use nwrap::{
    bind_with, set_return, ArityPolicy, BindError, BindOptions, ExactInt64, NativeString,
    SlotKind,
};
use nwrap_host::memory::{MemCall, MemIsolate, MemValue};
use nwrap_host::{CallContext, HostValue, TypeTag};

const MAX_REPEAT_LEN: usize = 1 << 20;

/// What a module would turn into a host exception.
#[derive(Debug, PartialEq, thiserror::Error)]
enum HandlerError {
    #[error("TypeError: {0}")]
    Bind(#[from] BindError),

    #[error("RangeError: {0}")]
    Range(&'static str),
}

type Handler = fn(&mut MemCall, &BindOptions) -> Result<(), HandlerError>;

fn concat<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut a = NativeString::new();
    let mut b = NativeString::new();
    bind_with(&*call, (&mut a, &mut b), options)?;

    set_return(call, a + &b);
    Ok(())
}

fn repeat<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut text = NativeString::new();
    let mut times = 0u32;
    bind_with(&*call, (&mut text, &mut times), options)?;

    let total = (times as usize).checked_mul(text.len());
    if total.map_or(true, |len| len > MAX_REPEAT_LEN) {
        return Err(HandlerError::Range("Invalid string length"));
    }
    set_return(call, text.repeat(times as usize));
    Ok(())
}

fn reverse<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut text = NativeString::new();
    bind_with(&*call, (&mut text,), options)?;

    let reversed: NativeString = text.chars().rev().collect();
    set_return(call, reversed);
    Ok(())
}

fn upper<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut text = NativeString::new();
    bind_with(&*call, (&mut text,), options)?;

    set_return(call, text.to_uppercase());
    Ok(())
}

fn greet<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut name = NativeString::new();
    bind_with(&*call, (&mut name,), options)?;

    let greeting = NativeString::from("Hello, ") + &name + '!';
    set_return(call, &greeting);
    Ok(())
}

fn add<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut a = 0.0f64;
    let mut b = 0.0f64;
    bind_with(&*call, (&mut a, &mut b), options)?;

    set_return(call, a + b);
    Ok(())
}

fn add_i32<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut a = 0i32;
    let mut b = 0i32;
    bind_with(&*call, (&mut a, &mut b), options)?;

    set_return(call, a.wrapping_add(b));
    Ok(())
}

fn to_u32<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut n = 0u32;
    bind_with(&*call, (&mut n,), options)?;

    set_return(call, n);
    Ok(())
}

// int64 has no exact host number form, so these two return decimal strings.
fn to_i64<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut n = 0i64;
    bind_with(&*call, (&mut n,), options)?;

    set_return(call, n.to_string());
    Ok(())
}

fn to_i64_exact<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut n = ExactInt64::default();
    bind_with(&*call, (&mut n,), options)?;

    set_return(call, n.0.to_string());
    Ok(())
}

fn not<C: CallContext>(call: &mut C, options: &BindOptions) -> Result<(), HandlerError> {
    let mut flag = false;
    bind_with(&*call, (&mut flag,), options)?;

    set_return(call, !flag);
    Ok(())
}

fn run(handler: Handler, args: Vec<MemValue>) -> Result<MemValue, HandlerError> {
    run_with(handler, args, &BindOptions::default())
}

fn run_with(
    handler: Handler,
    args: Vec<MemValue>,
    options: &BindOptions,
) -> Result<MemValue, HandlerError> {
    let mut call = MemCall::new(&MemIsolate::new(), args);
    handler(&mut call, options)?;
    Ok(call.take_return().unwrap_or_else(MemValue::undefined))
}

fn s(text: &str) -> MemValue {
    MemValue::string(text)
}

fn n(value: f64) -> MemValue {
    MemValue::number(value)
}

#[test]
fn string_handlers() {
    assert_eq!(run(concat::<MemCall>, vec![s("foo"), s("bar")]).unwrap().to_utf8(), "foobar");
    assert_eq!(run(repeat::<MemCall>, vec![s("ab"), n(3.0)]).unwrap().to_utf8(), "ababab");
    assert_eq!(run(reverse::<MemCall>, vec![s("añb🦀")]).unwrap().to_utf8(), "🦀bña");
    assert_eq!(run(upper::<MemCall>, vec![s("straße")]).unwrap().to_utf8(), "STRASSE");
    assert_eq!(run(greet::<MemCall>, vec![s("Ada")]).unwrap().to_utf8(), "Hello, Ada!");
}

#[test]
fn boxed_strings_come_back_primitive() {
    let ret = run(concat::<MemCall>, vec![MemValue::string_object("a"), s("b")]).unwrap();
    assert_eq!(ret.type_tag(), TypeTag::String);
    assert_eq!(ret.to_utf8(), "ab");
}

#[test]
fn numeric_handlers() {
    assert_eq!(run(add::<MemCall>, vec![n(0.5), n(0.25)]).unwrap().number_value(), 0.75);
    assert_eq!(
        run(add_i32::<MemCall>, vec![n(2_147_483_647.0), n(1.0)])
            .unwrap()
            .number_value(),
        -2_147_483_648.0
    );
    assert_eq!(run(to_u32::<MemCall>, vec![n(4_294_967_296.0)]).unwrap().number_value(), 0.0);
    assert_eq!(
        run(to_u32::<MemCall>, vec![n(-1.0)]).unwrap().number_value(),
        4_294_967_295.0
    );
}

#[test]
fn boxed_false_negates_to_false() {
    let unboxed = run(not::<MemCall>, vec![MemValue::boolean(false)]).unwrap();
    assert_eq!(unboxed.type_tag(), TypeTag::Boolean);
    assert!(unboxed.boolean_value());

    // The box is an object, so it binds as true whatever it holds.
    let boxed = MemValue::boolean_object(false);
    assert_eq!(boxed.to_utf8(), "false");
    assert!(!run(not::<MemCall>, vec![boxed]).unwrap().boolean_value());
}

#[test]
fn int64_handlers() {
    assert_eq!(
        run(to_i64::<MemCall>, vec![n(9_007_199_254_740_993.0)]).unwrap().to_utf8(),
        "9007199254740992"
    );
    assert_eq!(run(to_i64::<MemCall>, vec![n(-2.9)]).unwrap().to_utf8(), "-2");
    assert_eq!(run(to_i64_exact::<MemCall>, vec![n(-42.0)]).unwrap().to_utf8(), "-42");
    assert!(matches!(
        run(to_i64_exact::<MemCall>, vec![n(1.5)]),
        Err(HandlerError::Bind(BindError::TypeMismatch { position: 0, .. }))
    ));
}

#[test]
fn bind_failures_become_type_errors() {
    let err = run(add::<MemCall>, vec![n(1.0), s("2")]).unwrap_err();
    assert_eq!(
        err,
        HandlerError::Bind(BindError::TypeMismatch {
            position: 1,
            expected: SlotKind::Double,
            found: TypeTag::String,
        })
    );
    assert!(err.to_string().starts_with("TypeError: argument 1"));

    let err = run(concat::<MemCall>, vec![s("only")]).unwrap_err();
    assert!(matches!(err, HandlerError::Bind(BindError::Arity { expected: 2, got: 1 })));
}

#[test]
fn options_reach_the_binder() {
    let exact = BindOptions::new().with_arity(ArityPolicy::Exact);
    let args = || vec![MemValue::boolean(true), n(1.0)];

    assert!(run(not::<MemCall>, args()).is_ok());
    assert!(matches!(
        run_with(not::<MemCall>, args(), &exact),
        Err(HandlerError::Bind(BindError::Arity { expected: 1, got: 2 }))
    ));
}

#[test]
fn repeat_rejects_huge_results() {
    assert_eq!(
        run(repeat::<MemCall>, vec![s("ab"), n(-1.0)]),
        Err(HandlerError::Range("Invalid string length"))
    );
    assert_eq!(run(repeat::<MemCall>, vec![s(""), n(-1.0)]).unwrap().to_utf8(), "");
    assert_eq!(run(repeat::<MemCall>, vec![s("x"), n(0.0)]).unwrap().to_utf8(), "");
}

#[test]
fn failed_calls_leave_no_return() {
    let mut call = MemCall::new(&MemIsolate::new(), vec![n(1.0)]);

    assert!(upper(&mut call, &BindOptions::default()).is_err());
    assert!(call.return_value().is_none());
    assert_eq!(call.returns_set(), 0);
}
