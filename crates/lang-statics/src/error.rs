//! Statics errors.

use lang_hir::Exp;
use lang_statics_types::St;
use lang_statics_types::unify::{self, Circularity, Incompatible};
use std::fmt;
use str_util::Name;

/// A statics error.
#[derive(Debug, Clone)]
pub struct Error {
  exp: Exp,
  kind: ErrorKind,
}

/// A kind of statics error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
  /// A name was not in the environment, and was not a literal.
  Undefined(Name),
  /// Two types could not be unified because their operators were different.
  Mismatch(Incompatible),
  /// Unifying would have made an infinite type.
  Circularity(Circularity),
}

impl Error {
  pub(crate) fn new(exp: &Exp, kind: ErrorKind) -> Self {
    Self { exp: exp.clone(), kind }
  }

  pub(crate) fn unify(exp: &Exp, e: unify::Error) -> Self {
    let kind = match e {
      unify::Error::Circularity(c) => ErrorKind::Circularity(c),
      unify::Error::Incompatible(i) => ErrorKind::Mismatch(i),
    };
    Self::new(exp, kind)
  }

  /// Returns the kind of this.
  #[must_use]
  pub fn kind(&self) -> &ErrorKind {
    &self.kind
  }

  /// Returns the smallest expression the error was found in.
  #[must_use]
  pub fn exp(&self) -> &Exp {
    &self.exp
  }

  /// Displays this error. Type variables get their names from `st`.
  #[must_use]
  pub fn display<'a>(&'a self, st: &'a St) -> impl fmt::Display + 'a {
    ErrorDisplay { kind: &self.kind, st }
  }

  /// Returns an error code for this.
  #[must_use]
  pub fn to_code(&self) -> u8 {
    match self.kind {
      ErrorKind::Undefined(_) => 1,
      ErrorKind::Mismatch(_) => 2,
      ErrorKind::Circularity(_) => 3,
    }
  }
}

struct ErrorDisplay<'a> {
  kind: &'a ErrorKind,
  st: &'a St,
}

impl fmt::Display for ErrorDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      ErrorKind::Undefined(name) => write!(f, "undefined symbol: `{name}`"),
      ErrorKind::Mismatch(i) => {
        let want = i.want.display(self.st);
        let got = i.got.display(self.st);
        write!(f, "mismatched types: expected `{want}`, found `{got}`")
      }
      ErrorKind::Circularity(c) => {
        let var = c.var.display(self.st);
        let ty = c.ty.display(self.st);
        write!(f, "circular type: `{var}` occurs in `{ty}`")
      }
    }
  }
}
