//! The unification of the statics and the dynamics into a single high-level API.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

mod basis;
mod error;
mod std_basis;

pub use basis::Basis;
pub use error::Error;
pub use std_basis::{PAIR, std_basis};

use lang_config::lang::Language;
use lang_dynamics::Val;
use lang_hir::Exp;
use lang_statics_types::St;
use lang_statics_types::ty::Ty;

/// Checks `exp` in `basis`, and if that succeeded, runs it.
///
/// Returns the canonical type and the value. The types in `basis` must come from `st`.
///
/// # Errors
///
/// If checking failed (then `exp` was not run) or running failed.
pub fn run(st: &mut St, lang: &Language, basis: &Basis, exp: &Exp) -> Result<(Ty, Val), Error> {
  let inferred = elapsed::log("statics", || lang_statics::get(st, lang, &basis.ty_env(), exp))
    .map_err(Error::Statics)?;
  let val = elapsed::log("dynamics", || lang_dynamics::get(lang, &basis.val_env(), exp))
    .map_err(Error::Dynamics)?;
  Ok((inferred.canonical(), val))
}
