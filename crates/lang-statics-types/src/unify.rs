//! Unification: given two types, figuring out whether they can be made the same, and if so, how.

use crate::subst::Subst;
use crate::ty::{Ty, TyVar};

/// An error when unifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A circularity error.
  Circularity(Circularity),
  /// An incompatible error.
  Incompatible(Incompatible),
}

/// A type was circular, i.e. the occurs check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circularity {
  /// This unsolved var appears in `ty`.
  pub var: TyVar,
  /// Contains `var`, but is not equal to `var`. Canonical.
  pub ty: Ty,
}

/// Two type operators had different names or different numbers of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incompatible {
  /// The first type. Canonical.
  pub want: Ty,
  /// The second type. Canonical.
  pub got: Ty,
}

impl From<Circularity> for Error {
  fn from(val: Circularity) -> Self {
    Self::Circularity(val)
  }
}

impl From<Incompatible> for Error {
  fn from(val: Incompatible) -> Self {
    Self::Incompatible(val)
  }
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Unifies `want` and `got`, starting from `subst`, and returns the extended store.
///
/// Takes `subst` by value: on error, the partially extended store is gone, so it can't be reused.
///
/// # Errors
///
/// If the types couldn't be unified.
pub fn unify(mut subst: Subst, want: &Ty, got: &Ty) -> Result<Subst> {
  unify_(&mut subst, want, got)?;
  Ok(subst)
}

/// Folds every solution in `from` into `into`, by unifying each solved variable with its solution
/// in `into`. Use this to merge the stores of independently analysed siblings.
///
/// # Errors
///
/// If the two stores disagree about some variable.
pub fn combine(from: &Subst, mut into: Subst) -> Result<Subst> {
  for (v, ty) in from.iter() {
    unify_(&mut into, &Ty::Var(v), ty)?;
  }
  Ok(into)
}

/// `want` and `got` are made canonical in `subst` upon entry to this function.
fn unify_(subst: &mut Subst, want: &Ty, got: &Ty) -> Result<()> {
  let want = subst.lookup(want);
  let got = subst.lookup(got);
  match (want, got) {
    (Ty::Var(v), ty) | (ty @ Ty::Con(_, _), Ty::Var(v)) => unify_var(subst, v, ty),
    (Ty::Con(want_name, want_args), Ty::Con(got_name, got_args)) => {
      if want_name != got_name || want_args.len() != got_args.len() {
        let want = Ty::Con(want_name, want_args);
        let got = Ty::Con(got_name, got_args);
        return Err(Incompatible { want, got }.into());
      }
      for (want, got) in want_args.iter().zip(got_args.iter()) {
        unify_(subst, want, got)?;
      }
      Ok(())
    }
  }
}

/// `v` is unsolved and `ty` is canonical.
fn unify_var(subst: &mut Subst, v: TyVar, ty: Ty) -> Result<()> {
  // allow solving to itself.
  if ty == Ty::Var(v) {
    return Ok(());
  }
  // forbid circularity.
  if ty.has_var(v) {
    cov_mark::hit!(occurs_check);
    return Err(Circularity { var: v, ty }.into());
  }
  subst.insert(v, ty);
  Ok(())
}
