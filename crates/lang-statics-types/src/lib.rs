//! Types and fundamental operations for static analysis: the type model, the substitution store,
//! unification, and generalization.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

pub mod display;
pub mod generalize;
pub mod subst;
pub mod ty;
pub mod unify;

/// The mutable state of one inference session.
///
/// Contains exactly two counters: one hands out type variable ids, the other hands out display
/// names. They are independent, so variables that are created but never displayed do not use up
/// names.
///
/// Every type variable that takes part in a session, including those in the initial type
/// environment, must come from the same `St`. Variables from different `St`s may compare equal.
#[derive(Debug, Default)]
pub struct St {
  vars: ty::TyVarGen,
  pub(crate) names: display::TyVarNames,
}

impl St {
  /// Returns a fresh type variable.
  pub fn var(&mut self) -> ty::TyVar {
    self.vars.next()
  }

  /// Returns a fresh type variable, as a type.
  pub fn var_ty(&mut self) -> ty::Ty {
    ty::Ty::Var(self.var())
  }

  /// Returns how many type variables were made so far.
  #[must_use]
  pub fn var_count(&self) -> usize {
    self.vars.count()
  }

  /// Restarts both counters from zero.
  ///
  /// Only for test isolation. Any type made before this must not be mixed with types made after.
  pub fn reset(&mut self) {
    self.vars = ty::TyVarGen::default();
    self.names = display::TyVarNames::default();
  }
}
