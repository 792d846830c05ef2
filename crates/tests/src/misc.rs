//! Tests that don't fit anywhere else.

use crate::check::{Cx, app, i, lam};
use lang_hir::Exp;

#[test]
fn check_then_run() {
  let mut cx = Cx::new();
  let exp = app(i("plus"), [i("true"), i("1")]);
  let e = analysis::run(&mut cx.st, &cx.lang, &cx.basis, &exp).unwrap_err();
  assert!(matches!(e, analysis::Error::Statics(_)));
  assert_eq!(e.to_code(), 2);
  assert_eq!(
    e.display(&cx.st).to_string(),
    "mismatched types: expected `bool`, found `int` in `(plus true)`"
  );
}

#[test]
fn run_err_display() {
  let mut cx = Cx::new();
  let exp = Exp::letrec("x", app(i("succ"), [i("x")]), i("x"));
  let e = analysis::run(&mut cx.st, &cx.lang, &cx.basis, &exp).unwrap_err();
  assert!(matches!(e, analysis::Error::Dynamics(_)));
  assert_eq!(e.to_code(), 11);
  assert_eq!(e.display(&cx.st).to_string(), "unbound name: `x` in `x`");
}

#[test]
fn error_codes() {
  let mut cx = Cx::new();
  let undefined = cx.infer(&i("nope")).unwrap_err();
  let mismatch = cx.infer(&app(i("succ"), [i("red")])).unwrap_err();
  let circularity = cx.infer(&lam(["x"], app(i("x"), [i("x")]))).unwrap_err();
  assert_eq!(undefined.to_code(), 1);
  assert_eq!(mismatch.to_code(), 2);
  assert_eq!(circularity.to_code(), 3);
}

#[test]
fn error_exp() {
  let mut cx = Cx::new();
  let exp = lam(["x"], app(i("succ"), [app(i("y"), [i("x")])]));
  let e = cx.infer(&exp).unwrap_err();
  assert_eq!(*e.exp(), i("y"));
}

#[test]
fn infer_again() {
  // trees are not changed by inferring them.
  let mut cx = Cx::new();
  let exp = Exp::let_("id", lam(["x"], i("x")), app(i("id"), [i("id"), i("3")]));
  let copy = exp.clone();
  let a = cx.infer(&exp).unwrap();
  let b = cx.infer(&exp).unwrap();
  assert_eq!(exp, copy);
  assert_eq!(cx.show(&a.canonical()), "int");
  assert_eq!(cx.show(&b.canonical()), "int");
}

#[test]
fn clone_shares_children() {
  let exp = lam(["a", "b"], app(i("plus"), [i("a"), i("b")]));
  let copy = exp.clone();
  let (Exp::Lambda(_, x), Exp::Lambda(_, y)) = (&exp, &copy) else {
    panic!("not a lambda: {exp}")
  };
  assert!(std::sync::Arc::ptr_eq(x, y));
  assert_eq!(exp, copy);
}
