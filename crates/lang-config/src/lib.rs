//! Configuration.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

pub mod file;
pub mod lang;

use std::fmt;

/// An error when reading configuration.
#[derive(Debug)]
pub enum Error {
  /// The config was not valid TOML, or did not have the right shape.
  CouldNotParse(toml::de::Error),
  /// The version was not the one we support.
  InvalidVersion(u16),
  /// A color name was empty.
  EmptyColor,
  /// A color name was given more than once.
  DuplicateColor(str_util::Name),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::CouldNotParse(e) => write!(f, "couldn't parse config: {e}"),
      Error::InvalidVersion(n) => write!(f, "invalid config version: expected 1, found {n}"),
      Error::EmptyColor => f.write_str("empty color name"),
      Error::DuplicateColor(name) => write!(f, "duplicate color name: {name}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::CouldNotParse(e) => Some(e),
      Error::InvalidVersion(_) | Error::EmptyColor | Error::DuplicateColor(_) => None,
    }
  }
}
