//! Dynamics errors.

use crate::Val;
use lang_hir::Exp;
use std::fmt;
use str_util::Name;

/// A dynamics error.
#[derive(Debug, Clone)]
pub struct Error {
  exp: Exp,
  kind: ErrorKind,
}

/// A kind of dynamics error.
#[derive(Debug, Clone)]
pub enum ErrorKind {
  /// A name was not in any enclosing scope, and was not a literal.
  Unbound(Name),
  /// Something that was not a function was applied to an argument.
  NotFn(Val),
  /// The first argument to `cond` was not a bool.
  CondNotBool(Val),
  /// A builtin rejected its arguments, with a message.
  Builtin(Name, String),
}

impl Error {
  pub(crate) fn new(exp: &Exp, kind: ErrorKind) -> Self {
    Self { exp: exp.clone(), kind }
  }

  /// Returns the kind of this.
  #[must_use]
  pub fn kind(&self) -> &ErrorKind {
    &self.kind
  }

  /// Returns the expression being evaluated when the error happened.
  #[must_use]
  pub fn exp(&self) -> &Exp {
    &self.exp
  }

  /// Returns an error code for this.
  #[must_use]
  pub fn to_code(&self) -> u8 {
    match self.kind {
      ErrorKind::Unbound(_) => 11,
      ErrorKind::NotFn(_) => 12,
      ErrorKind::CondNotBool(_) => 13,
      ErrorKind::Builtin(_, _) => 14,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.kind {
      ErrorKind::Unbound(name) => write!(f, "unbound name: `{name}`"),
      ErrorKind::NotFn(val) => write!(f, "not a function: `{val}`"),
      ErrorKind::CondNotBool(val) => write!(f, "condition not a bool: `{val}`"),
      ErrorKind::Builtin(name, msg) => write!(f, "`{name}` failed: {msg}"),
    }
  }
}

impl std::error::Error for Error {}
