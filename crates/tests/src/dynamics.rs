//! Running programs.

use crate::check::{Cx, app, check_err, check_run_err, check_val, i, lam, run_unchecked};
use lang_dynamics::{Builtin, ErrorKind, Foreign, Val, ValEnv};
use lang_hir::Exp;
use lang_statics_types::ty::Ty;
use str_util::Name;

#[test]
fn curry() {
  check_val(&app(i("plus"), [i("3"), i("4")]), "7");
}

#[test]
fn curry_closure() {
  let plus = lam(["a", "b"], app(i("plus"), [i("a"), i("b")]));
  check_val(&Exp::let_("plus2", plus, app(i("plus2"), [i("3"), i("4")])), "7");
}

#[test]
fn partial() {
  let exp = Exp::let_("add3", app(i("plus"), [i("3")]), app(i("add3"), [i("4")]));
  check_val(&exp, "7");
}

#[test]
fn lexical_scope() {
  let exp = Exp::let_(
    "x",
    i("1"),
    Exp::let_("f", lam(["y"], i("x")), Exp::let_("x", i("2"), app(i("f"), [i("0")]))),
  );
  check_val(&exp, "1");
}

#[test]
fn closure_captures_param() {
  let exp = Exp::let_("k", lam(["x", "y"], i("x")), app(i("k"), [i("red"), i("5")]));
  check_val(&exp, "red");
}

#[test]
fn lazy_cond() {
  cov_mark::check!(lazy_cond);
  // the other branch is unbound, but never evaluated.
  let val = run_unchecked(&app(i("cond"), [i("true"), i("1"), i("nope")])).unwrap();
  assert_eq!(val.to_string(), "1");
  let val = run_unchecked(&app(i("cond"), [i("false"), i("nope"), i("2")])).unwrap();
  assert_eq!(val.to_string(), "2");
}

#[test]
fn partial_cond() {
  let exp = Exp::let_("c", app(i("cond"), [i("false")]), app(i("c"), [i("1"), i("2")]));
  check_val(&exp, "2");
  // the last arg is given separately, so both branches are already values.
  let exp = Exp::let_("c", app(i("cond"), [i("true"), i("1")]), app(i("c"), [i("2")]));
  check_val(&exp, "1");
  let exp = app(lam(["c"], app(i("c"), [i("true"), i("1"), i("2")])), [i("cond")]);
  check_val(&exp, "1");
}

#[test]
fn cond_not_bool() {
  let kind = check_run_err(&app(i("cond"), [i("5"), i("1"), i("2")]), "condition not a bool: `5`");
  assert!(matches!(kind, ErrorKind::CondNotBool(Val::Int(_))));
}

#[test]
fn unbound() {
  let kind = check_run_err(&i("x"), "unbound name: `x`");
  assert!(matches!(kind, ErrorKind::Unbound(_)));
}

#[test]
fn apply_non_fn() {
  let exp = app(i("5"), [i("3")]);
  check_err(&exp, "mismatched types: expected `int -> T0`, found `int`");
  let kind = check_run_err(&exp, "not a function: `5`");
  assert!(matches!(kind, ErrorKind::NotFn(_)));
}

#[test]
fn tuple() {
  check_val(&app(i("pair"), [i("1"), i("true")]), "(1, true)");
  check_val(&app(i("snd"), [app(i("pair"), [i("1"), i("blue")])]), "blue");
}

#[test]
fn builtin_err() {
  let boom = Builtin::new("boom", 2, |_| Err("no".to_owned()));
  let env = ValEnv::from([(Name::new("boom"), Val::Builtin(boom))]);
  let lang = lang_config::lang::Language::default();
  // not enough args yet.
  let val = lang_dynamics::get(&lang, &env, &app(i("boom"), [i("1")])).unwrap();
  assert!(val.is_fn());
  // the third arg is never given.
  let exp = app(i("boom"), [i("1"), i("2"), i("3")]);
  let e = lang_dynamics::get(&lang, &env, &exp).unwrap_err();
  assert_eq!(e.to_string(), "`boom` failed: no");
  assert_eq!(e.to_code(), 14);
  assert_eq!(e.exp().to_string(), "((boom 1) 2)");
}

#[test]
fn not_fn_in_spine() {
  let e = run_unchecked(&app(i("5"), [i("3"), i("4")])).unwrap_err();
  assert!(matches!(e.kind(), ErrorKind::NotFn(Val::Int(_))));
  assert_eq!(e.exp().to_string(), "(5 3)");
  let e = run_unchecked(&app(i("succ"), [i("1"), i("2")])).unwrap_err();
  assert_eq!(e.to_string(), "not a function: `2`");
  assert_eq!(e.exp().to_string(), "((succ 1) 2)");
  let e = run_unchecked(&app(i("cond"), [i("0"), i("1"), i("2"), i("3")])).unwrap_err();
  assert!(matches!(e.kind(), ErrorKind::CondNotBool(_)));
  assert_eq!(e.exp().to_string(), "(((cond 0) 1) 2)");
}

#[test]
fn foreign() {
  let mut cx = Cx::new();
  let grid = Foreign::new(vec![vec![0u8, 1], vec![2, 3], vec![4, 5]]);
  let height = Builtin::new("height", 1, |args| match &args[0] {
    Val::Foreign(g) => match g.downcast_ref::<Vec<Vec<u8>>>() {
      Some(g) => Ok(Val::Int(g.len().into())),
      None => Err("not a grid".to_owned()),
    },
    v => Err(format!("expected grid, found {}", v.desc())),
  });
  cx.basis.add("grid", Ty::zero("grid"), Val::Foreign(grid));
  cx.basis.add("height", Ty::fun(Ty::zero("grid"), Ty::int()), Val::Builtin(height));
  let (ty, val) = analysis::run(&mut cx.st, &cx.lang, &cx.basis, &app(i("height"), [i("grid")]))
    .unwrap();
  assert_eq!(cx.show(&ty), "int");
  assert_eq!(val.to_string(), "3");
}

#[test]
fn run_again() {
  // trees are not changed by running them.
  let exp = app(i("times"), [i("6"), i("7")]);
  let a = run_unchecked(&exp).unwrap();
  let b = run_unchecked(&exp).unwrap();
  assert_eq!(a.as_int(), b.as_int());
  assert_eq!(a.to_string(), "42");
}
