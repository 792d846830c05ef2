//! Displaying types.

use crate::St;
use crate::ty::{FN, Ty, TyVar};
use fast_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

/// Display names for type variables, allocated lazily the first time a variable is shown.
#[derive(Debug, Default)]
pub(crate) struct TyVarNames(RefCell<FxHashMap<TyVar, usize>>);

impl TyVarNames {
  fn get(&self, v: TyVar) -> usize {
    let mut map = self.0.borrow_mut();
    let next = map.len();
    *map.entry(v).or_insert(next)
  }
}

impl Ty {
  /// Returns a value that displays this.
  ///
  /// Type variables are shown as `T0`, `T1`, etc. in the order they are first shown in this `St`.
  /// The type is shown as is, so make it canonical first if it came out of inference.
  #[must_use]
  pub fn display<'a>(&'a self, st: &'a St) -> impl fmt::Display + 'a {
    TyDisplay { ty: self, st, prec: TyPrec::Arrow }
  }
}

impl TyVar {
  /// Returns a value that displays this with its lazily allocated name.
  #[must_use]
  pub fn display(self, st: &St) -> impl fmt::Display + '_ {
    TyVarDisplay { var: self, st }
  }
}

struct TyVarDisplay<'a> {
  var: TyVar,
  st: &'a St,
}

impl fmt::Display for TyVarDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "T{}", self.st.names.get(self.var))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum TyPrec {
  Arrow,
  Param,
}

struct TyDisplay<'a> {
  ty: &'a Ty,
  st: &'a St,
  prec: TyPrec,
}

impl<'a> TyDisplay<'a> {
  fn with(&self, ty: &'a Ty, prec: TyPrec) -> Self {
    Self { ty, st: self.st, prec }
  }
}

impl fmt::Display for TyDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (name, args) = match self.ty {
      Ty::Var(v) => return v.display(self.st).fmt(f),
      Ty::Con(name, args) => (name, args.as_slice()),
    };
    match args {
      [] => name.fmt(f),
      [param, res] if name.as_str() == FN => {
        let needs_parens = self.prec > TyPrec::Arrow;
        if needs_parens {
          f.write_str("(")?;
        }
        self.with(param, TyPrec::Param).fmt(f)?;
        f.write_str(" -> ")?;
        self.with(res, TyPrec::Arrow).fmt(f)?;
        if needs_parens {
          f.write_str(")")?;
        }
        Ok(())
      }
      [lhs, rhs] => {
        write!(f, "({} {name} {})", self.with(lhs, TyPrec::Arrow), self.with(rhs, TyPrec::Arrow))
      }
      [arg] => write!(f, "{name}({})", self.with(arg, TyPrec::Arrow)),
      [first, rest @ ..] => {
        write!(f, "{name}({}", self.with(first, TyPrec::Arrow))?;
        for arg in rest {
          write!(f, ", {}", self.with(arg, TyPrec::Arrow))?;
        }
        f.write_str(")")
      }
    }
  }
}
