//! The standard basis.

use crate::Basis;
use lang_dynamics::{Builtin, Val};
use lang_statics_types::St;
use lang_statics_types::ty::Ty;
use num_bigint::BigInt;
use num_traits::{One as _, Zero as _};

/// The name of the type operator of pairs.
pub const PAIR: &str = "*";

type IntOp = fn(&BigInt, &BigInt) -> BigInt;

/// Returns the standard basis: booleans, pairs, `cond`, and integer arithmetic.
///
/// The type variables are made with `st`.
#[must_use]
pub fn std_basis(st: &mut St) -> Basis {
  let mut ret = Basis::default();
  ret.add("true", Ty::bool(), Val::Bool(true));
  ret.add("false", Ty::bool(), Val::Bool(false));
  // pairs
  let (a, b) = (st.var_ty(), st.var_ty());
  let pair_ty = Ty::con(PAIR, vec![a.clone(), b.clone()]);
  let pair = Builtin::new("pair", 2, |args| Ok(Val::Tuple(args)));
  ret.add("pair", Ty::curried([a, b, pair_ty]), Val::Builtin(pair));
  for (name, idx) in [("fst", 0usize), ("snd", 1usize)] {
    let (a, b) = (st.var_ty(), st.var_ty());
    let res = if idx == 0 { a.clone() } else { b.clone() };
    let f = Builtin::new(name, 1, move |args| match args[0].as_tuple() {
      Some([x, y]) => Ok(if idx == 0 { x } else { y }.clone()),
      _ => Err(format!("expected pair, found {}", args[0].desc())),
    });
    ret.add(name, Ty::fun(Ty::con(PAIR, vec![a, b]), res), Val::Builtin(f));
  }
  // cond
  let a = st.var_ty();
  let cond_ty = Ty::curried([Ty::bool(), a.clone(), a.clone(), a]);
  ret.add("cond", cond_ty, Val::Builtin(Builtin::cond()));
  // ints
  let zero = Builtin::new("zero", 1, |args| Ok(Val::Bool(int(&args[0])?.is_zero())));
  ret.add("zero", Ty::fun(Ty::int(), Ty::bool()), Val::Builtin(zero));
  let pred = Builtin::new("pred", 1, |args| Ok(Val::Int(int(&args[0])? - BigInt::one())));
  ret.add("pred", Ty::fun(Ty::int(), Ty::int()), Val::Builtin(pred));
  let succ = Builtin::new("succ", 1, |args| Ok(Val::Int(int(&args[0])? + BigInt::one())));
  ret.add("succ", Ty::fun(Ty::int(), Ty::int()), Val::Builtin(succ));
  let arith: [(&str, IntOp); 3] = [
    ("plus", |a: &BigInt, b: &BigInt| a + b),
    ("minus", |a: &BigInt, b: &BigInt| a - b),
    ("times", |a: &BigInt, b: &BigInt| a * b),
  ];
  for (name, op) in arith {
    let f = Builtin::new(name, 2, move |args| Ok(Val::Int(op(int(&args[0])?, int(&args[1])?))));
    ret.add(name, Ty::curried([Ty::int(), Ty::int(), Ty::int()]), Val::Builtin(f));
  }
  let eq = Builtin::new("eq", 2, |args| Ok(Val::Bool(int(&args[0])? == int(&args[1])?)));
  ret.add("eq", Ty::curried([Ty::int(), Ty::int(), Ty::bool()]), Val::Builtin(eq));
  ret
}

fn int(val: &Val) -> Result<&BigInt, String> {
  val.as_int().ok_or_else(|| format!("expected int, found {}", val.desc()))
}
