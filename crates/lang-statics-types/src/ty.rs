//! The type model.

use std::fmt;
use str_util::Name;

/// The name of the function type operator.
pub const FN: &str = "->";
/// The name of the int type.
pub const INT: &str = "int";
/// The name of the bool type.
pub const BOOL: &str = "bool";
/// The name of the color type.
pub const COLOR: &str = "color";

/// A type variable. Identity is by id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TyVar(idx::Idx);

impl TyVar {
  /// Returns the id of this.
  #[must_use]
  pub fn id(self) -> usize {
    self.0.to_usize()
  }
}

/// Hands out ids, in increasing order.
#[derive(Debug, Default)]
pub(crate) struct TyVarGen(usize);

impl TyVarGen {
  pub(crate) fn next(&mut self) -> TyVar {
    let ret = TyVar(idx::Idx::new(self.0));
    self.0 += 1;
    ret
  }

  pub(crate) fn count(&self) -> usize {
    self.0
  }
}

/// A type.
///
/// Types may share type variables. Sharing a variable between two types means they must be the
/// same type. Copying it out to a new variable (see [`crate::generalize`]) means they need not be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
  /// A type variable.
  Var(TyVar),
  /// A type operator applied to its arguments, like `int` (no arguments) or `T0 -> bool` (two).
  Con(Name, Vec<Ty>),
}

impl Ty {
  /// Returns a type operator.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  #[must_use]
  pub fn con<S>(name: S, args: Vec<Ty>) -> Self
  where
    S: AsRef<str>,
  {
    Ty::Con(Name::new(name.as_ref()), args)
  }

  /// Returns a nullary type operator.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  #[must_use]
  pub fn zero<S>(name: S) -> Self
  where
    S: AsRef<str>,
  {
    Ty::con(name, Vec::new())
  }

  /// Returns the int type.
  #[must_use]
  pub fn int() -> Self {
    Ty::zero(INT)
  }

  /// Returns the bool type.
  #[must_use]
  pub fn bool() -> Self {
    Ty::zero(BOOL)
  }

  /// Returns the color type.
  #[must_use]
  pub fn color() -> Self {
    Ty::zero(COLOR)
  }

  /// Returns the function type from `param` to `res`.
  #[must_use]
  pub fn fun(param: Ty, res: Ty) -> Self {
    Ty::con(FN, vec![param, res])
  }

  /// Returns the curried function type through all the types, so `[a, b, c]` is `a -> b -> c`.
  ///
  /// # Panics
  ///
  /// If there are fewer than two types.
  #[must_use]
  pub fn curried<I>(tys: I) -> Self
  where
    I: IntoIterator<Item = Ty>,
    I::IntoIter: DoubleEndedIterator,
  {
    let mut iter = tys.into_iter().rev();
    let res = iter.next().expect("curried with no types");
    let mut n = 0usize;
    let ret = iter.fold(res, |acc, param| {
      n += 1;
      Ty::fun(param, acc)
    });
    assert!(n > 0, "curried with one type");
    ret
  }

  /// If this is a function type, returns its parameter and result types.
  #[must_use]
  pub fn as_fn(&self) -> Option<(&Ty, &Ty)> {
    match self {
      Ty::Con(name, args) if name.as_str() == FN => match args.as_slice() {
        [param, res] => Some((param, res)),
        _ => None,
      },
      Ty::Var(_) | Ty::Con(_, _) => None,
    }
  }

  /// Returns whether `v` occurs in this. Does not look through any substitution.
  #[must_use]
  pub fn has_var(&self, v: TyVar) -> bool {
    match self {
      Ty::Var(w) => v == *w,
      Ty::Con(_, args) => args.iter().any(|a| a.has_var(v)),
    }
  }
}

impl fmt::Display for TyVar {
  /// Shows the id. Use [`crate::display`] for the lazily allocated names.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.id())
  }
}
