//! The dynamic semantics, aka, running a program.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

mod error;
mod eval;
mod types;

pub use error::{Error, ErrorKind};
pub use types::{Builtin, Closure, Foreign, Rec, Val};

/// A mapping from names to their values.
///
/// Persistent: extending it for a body leaves the outer environment alone.
pub type ValEnv = scope_map::ScopeMap<str_util::Name, Val>;

/// Evaluates `exp` in `env`.
///
/// Assumes nothing about whether `exp` typechecks. Run the statics first to rule out the errors
/// that typechecking catches.
///
/// # Errors
///
/// If a name was unbound, a non-function was applied, or a builtin rejected its arguments.
pub fn get(
  lang: &lang_config::lang::Language,
  env: &ValEnv,
  exp: &lang_hir::Exp,
) -> Result<Val, Error> {
  let cx = eval::Cx { lang };
  eval::get(cx, env, exp).inspect_err(|e| log::debug!("dynamics error: {e:?}"))
}
