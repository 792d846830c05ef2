//! The substitution store: what each solved type variable currently stands for.

use crate::ty::{Ty, TyVar};
use fast_hash::FxHashMap;

/// A mapping from [`TyVar`]s to [`Ty`]s.
///
/// Invariants:
///
/// - Every key is a variable that was unsolved (in this store) when it was inserted.
/// - Following the chain of solutions from any variable terminates, since the occurs check in
///   [`crate::unify`] forbids cycles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Subst {
  map: FxHashMap<TyVar, Ty>,
}

impl Subst {
  /// Returns whether this has no solutions.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  /// Returns how many variables are solved.
  #[must_use]
  pub fn len(&self) -> usize {
    self.map.len()
  }

  /// Returns what `v` was directly solved to, without following chains.
  #[must_use]
  pub fn get(&self, v: TyVar) -> Option<&Ty> {
    self.map.get(&v)
  }

  /// Iterates over the solutions, in order of the variable ids.
  pub fn iter(&self) -> impl Iterator<Item = (TyVar, &Ty)> {
    let mut xs: Vec<_> = self.map.iter().map(|(&v, ty)| (v, ty)).collect();
    xs.sort_unstable_by_key(|&(v, _)| v);
    xs.into_iter()
  }

  /// Panics if there was already a solution for `v`.
  pub(crate) fn insert(&mut self, v: TyVar, ty: Ty) {
    assert!(self.map.insert(v, ty).is_none(), "{v} already solved");
  }

  /// Returns the canonical form of `ty`: every solved variable inside it is replaced by its
  /// solution, transitively. The result contains only unsolved variables.
  ///
  /// Does not change the store.
  #[must_use]
  pub fn lookup(&self, ty: &Ty) -> Ty {
    match ty {
      Ty::Var(v) => match self.map.get(v) {
        None => ty.clone(),
        Some(solved) => self.lookup(solved),
      },
      Ty::Con(name, args) => Ty::Con(name.clone(), args.iter().map(|a| self.lookup(a)).collect()),
    }
  }

  /// Returns whether `v`, an unsolved variable, occurs in `ty` once `ty` is made canonical.
  #[must_use]
  pub fn occurs(&self, v: TyVar, ty: &Ty) -> bool {
    match ty {
      Ty::Var(w) => match self.map.get(w) {
        None => v == *w,
        Some(solved) => self.occurs(v, solved),
      },
      Ty::Con(_, args) => args.iter().any(|a| self.occurs(v, a)),
    }
  }
}
