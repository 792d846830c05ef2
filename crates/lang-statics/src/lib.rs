//! Static analysis: inferring the principal type of an expression.
//!
//! The algorithm is Algorithm W with let-polymorphism, in the style of [this paper][1]. Every node
//! produces its type together with the substitution store of its own subtree. Siblings are analysed
//! independently and their stores are merged with [`lang_statics_types::unify::combine`].
//!
//! [1]: http://lucacardelli.name/Papers/BasicTypechecking.pdf

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

mod error;
mod exp;

use lang_statics_types::St;
use lang_statics_types::generalize::NonGeneric;
use lang_statics_types::subst::Subst;
use lang_statics_types::ty::Ty;

pub use error::{Error, ErrorKind};

/// A mapping from names to their types.
///
/// Persistent: extending it for a body leaves the outer environment alone.
pub type TyEnv = scope_map::ScopeMap<str_util::Name, Ty>;

/// The result of successful inference.
#[derive(Debug, Clone)]
pub struct Inferred {
  /// The type of the whole expression. May mention variables solved in `subst`.
  pub ty: Ty,
  /// The store for the whole expression.
  pub subst: Subst,
}

impl Inferred {
  /// Returns the canonical form of `ty` under the final store.
  #[must_use]
  pub fn lookup(&self, ty: &Ty) -> Ty {
    self.subst.lookup(ty)
  }

  /// Returns the canonical form of the principal type.
  #[must_use]
  pub fn canonical(&self) -> Ty {
    self.lookup(&self.ty)
  }
}

/// Infers the type of `exp` in `env`.
///
/// Every type variable in `env` must come from `st`. All of them are generic, i.e. each use of a
/// name gets its own copy of the variables in its type.
///
/// Does not change `exp` or `env`, so this may be called again on the same inputs. Each call
/// allocates new type variables from `st`, so the results are equal up to renaming.
///
/// # Errors
///
/// If a name was undefined, or types could not be unified. There is no partial result.
pub fn get(
  st: &mut St,
  lang: &lang_config::lang::Language,
  env: &TyEnv,
  exp: &lang_hir::Exp,
) -> Result<Inferred, Error> {
  let mut cx = exp::Cx { st, lang };
  exp::get(&mut cx, env, &NonGeneric::default(), &Subst::default(), exp)
    .map(|(ty, subst)| Inferred { ty, subst })
    .inspect_err(|e| log::debug!("statics error: {e:?}"))
}
