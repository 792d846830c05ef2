//! Generalization, one of the fundamental operations on types for the inference algorithm.
//!
//! Each use of a name whose type has generic variables gets its own copy of those variables, so
//! one use can be specialized to `int` while another is specialized to `bool`.

use crate::St;
use crate::subst::Subst;
use crate::ty::{Ty, TyVar};
use fast_hash::FxHashMap;
use scope_map::ScopeMap;

/// The non-generic type variables: those of lambda parameters and of names being defined by a
/// `letrec`, for the extent of the body that binds them.
///
/// Persistent: [`NonGeneric::with`] leaves the original alone.
#[derive(Debug, Default, Clone)]
pub struct NonGeneric(ScopeMap<TyVar, ()>);

impl NonGeneric {
  /// Returns a new set that also contains `v`.
  #[must_use]
  pub fn with(&self, v: TyVar) -> Self {
    Self(self.0.with(v, ()))
  }

  /// Iterates over the vars, most recently added first.
  pub fn iter(&self) -> impl Iterator<Item = TyVar> + '_ {
    self.0.iter().map(|(&v, _)| v)
  }

  /// Returns whether `v` was added directly.
  #[must_use]
  pub fn contains(&self, v: TyVar) -> bool {
    self.0.contains_key(&v)
  }

  /// Returns whether `v`, an unsolved variable in `subst`, is non-generic: whether it occurs in the
  /// canonical form of any member.
  #[must_use]
  pub fn is_non_generic(&self, subst: &Subst, v: TyVar) -> bool {
    self.iter().any(|ng| subst.occurs(v, &Ty::Var(ng)))
  }
}

/// Returns a copy of `ty` (made canonical in `subst`) where the generic variables are replaced by
/// brand new variables and the non-generic variables are shared.
///
/// Within one call, each generic variable maps to one new variable, however many times it occurs.
pub fn fresh(st: &mut St, subst: &Subst, non_generic: &NonGeneric, ty: &Ty) -> Ty {
  let mut cx = Fresh { st, subst, non_generic, copies: FxHashMap::default() };
  cx.go(&subst.lookup(ty))
}

struct Fresh<'a> {
  st: &'a mut St,
  subst: &'a Subst,
  non_generic: &'a NonGeneric,
  copies: FxHashMap<TyVar, TyVar>,
}

impl Fresh<'_> {
  /// `ty` is canonical.
  fn go(&mut self, ty: &Ty) -> Ty {
    match ty {
      Ty::Var(v) => {
        if self.non_generic.is_non_generic(self.subst, *v) {
          cov_mark::hit!(fresh_non_generic);
          return ty.clone();
        }
        let new_v = *self.copies.entry(*v).or_insert_with(|| self.st.var());
        Ty::Var(new_v)
      }
      Ty::Con(name, args) => Ty::Con(name.clone(), args.iter().map(|a| self.go(a)).collect()),
    }
  }
}
