//! A basis: the names a program may use without defining them.

use fast_hash::FxHashMap;
use lang_dynamics::{Val, ValEnv};
use lang_statics::TyEnv;
use lang_statics_types::ty::Ty;
use str_util::Name;

/// A basis, which gives each name both a type and a value.
#[derive(Debug, Clone, Default)]
pub struct Basis {
  tys: FxHashMap<Name, Ty>,
  vals: FxHashMap<Name, Val>,
}

impl Basis {
  /// Adds `name` with type `ty` and value `val`, replacing any previous entry for `name`.
  ///
  /// `val` should have type `ty`. This is not checked.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  pub fn add<S>(&mut self, name: S, ty: Ty, val: Val)
  where
    S: AsRef<str>,
  {
    let name = Name::new(name.as_ref());
    self.tys.insert(name.clone(), ty);
    self.vals.insert(name, val);
  }

  /// Returns the value of `name`.
  #[must_use]
  pub fn get_val(&self, name: &str) -> Option<&Val> {
    self.vals.get(name)
  }

  /// Returns the names, sorted.
  #[must_use]
  pub fn names(&self) -> Vec<&Name> {
    let mut ret: Vec<_> = self.tys.keys().collect();
    ret.sort_unstable();
    ret
  }

  /// Returns a type environment with the types of this.
  ///
  /// To check many expressions against one basis, make this once and pass it to
  /// `lang_statics::get` directly.
  #[must_use]
  pub fn ty_env(&self) -> TyEnv {
    TyEnv::new(self.tys.clone())
  }

  /// Returns a value environment with the values of this.
  #[must_use]
  pub fn val_env(&self) -> ValEnv {
    ValEnv::new(self.vals.clone())
  }
}
