//! The common error type.

use lang_statics_types::St;
use std::fmt;

/// An error from checking or running.
#[derive(Debug, Clone)]
pub enum Error {
  /// Checking failed.
  Statics(lang_statics::Error),
  /// Running failed.
  Dynamics(lang_dynamics::Error),
}

impl Error {
  /// Displays this error, with the expression it happened in.
  #[must_use]
  pub fn display<'a>(&'a self, st: &'a St) -> impl fmt::Display + 'a {
    ErrorDisplay { err: self, st }
  }

  /// Returns an error code for this.
  #[must_use]
  pub fn to_code(&self) -> u8 {
    match self {
      Error::Statics(e) => e.to_code(),
      Error::Dynamics(e) => e.to_code(),
    }
  }
}

struct ErrorDisplay<'a> {
  err: &'a Error,
  st: &'a St,
}

impl fmt::Display for ErrorDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.err {
      Error::Statics(e) => write!(f, "{} in `{}`", e.display(self.st), e.exp()),
      Error::Dynamics(e) => write!(f, "{e} in `{}`", e.exp()),
    }
  }
}
