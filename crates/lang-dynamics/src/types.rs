//! Dynamics types.

use crate::ValEnv;
use crate::error::ErrorKind;
use lang_hir::Exp;
use num_bigint::BigInt;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};
use str_util::Name;

/// A value.
#[derive(Debug, Clone)]
pub enum Val {
  /// An integer.
  Int(BigInt),
  /// A boolean.
  Bool(bool),
  /// A color.
  Color(Name),
  /// A tuple.
  Tuple(Vec<Val>),
  /// Some data from outside the language, like a grid.
  Foreign(Foreign),
  /// A function written in the language.
  Closure(Arc<Closure>),
  /// A function provided from outside the language.
  Builtin(Builtin),
  /// The value of a name bound by `letrec`, which may not be known yet.
  ///
  /// Only found in environments. Looking the name up yields the value inside.
  Rec(Rec),
}

impl Val {
  /// Returns the int this is, if it is one.
  #[must_use]
  pub fn as_int(&self) -> Option<&BigInt> {
    match self {
      Val::Int(n) => Some(n),
      _ => None,
    }
  }

  /// Returns the components of this, if it is a tuple.
  #[must_use]
  pub fn as_tuple(&self) -> Option<&[Val]> {
    match self {
      Val::Tuple(vs) => Some(vs.as_slice()),
      _ => None,
    }
  }

  /// Returns whether this may be applied to an argument.
  #[must_use]
  pub fn is_fn(&self) -> bool {
    matches!(self, Val::Closure(_) | Val::Builtin(_))
  }

  /// Returns a description of this value's kind.
  #[must_use]
  pub fn desc(&self) -> &'static str {
    match self {
      Val::Int(_) => "int",
      Val::Bool(_) => "bool",
      Val::Color(_) => "color",
      Val::Tuple(_) => "tuple",
      Val::Foreign(_) => "foreign value",
      Val::Closure(_) => "closure",
      Val::Builtin(_) => "builtin",
      Val::Rec(_) => "recursive binding",
    }
  }
}

impl From<BigInt> for Val {
  fn from(val: BigInt) -> Self {
    Val::Int(val)
  }
}

impl From<bool> for Val {
  fn from(val: bool) -> Self {
    Val::Bool(val)
  }
}

impl fmt::Display for Val {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Val::Int(n) => n.fmt(f),
      Val::Bool(b) => b.fmt(f),
      Val::Color(c) => c.fmt(f),
      Val::Tuple(vs) => {
        f.write_str("(")?;
        for (i, v) in vs.iter().enumerate() {
          if i != 0 {
            f.write_str(", ")?;
          }
          v.fmt(f)?;
        }
        f.write_str(")")
      }
      Val::Foreign(_) => f.write_str("<foreign>"),
      Val::Closure(c) => write!(f, "(fn {} => ..)", c.param),
      Val::Builtin(b) => write!(f, "<builtin {}>", b.name),
      Val::Rec(r) => match r.get() {
        Some(v) => v.fmt(f),
        None => f.write_str("<undefined>"),
      },
    }
  }
}

/// Opaque data from outside the language.
#[derive(Clone)]
pub struct Foreign(Arc<dyn Any + Send + Sync>);

impl Foreign {
  /// Wraps `val`.
  #[must_use]
  pub fn new<T>(val: T) -> Self
  where
    T: Any + Send + Sync,
  {
    Self(Arc::new(val))
  }

  /// Returns the wrapped data, if it has type `T`.
  #[must_use]
  pub fn downcast_ref<T>(&self) -> Option<&T>
  where
    T: Any,
  {
    self.0.downcast_ref()
  }
}

impl fmt::Debug for Foreign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Foreign").finish_non_exhaustive()
  }
}

/// A slot for the value of a `letrec`, filled once the definition is evaluated.
///
/// The definition may capture the slot, so a filled slot can be part of a reference cycle, which
/// is never freed.
#[derive(Clone, Default)]
pub struct Rec(Arc<OnceLock<Val>>);

impl Rec {
  /// Returns the value, if it is known yet.
  #[must_use]
  pub fn get(&self) -> Option<&Val> {
    self.0.get()
  }

  pub(crate) fn fill(&self, val: Val) {
    if self.0.set(val).is_err() {
      unreachable!("letrec slot filled twice");
    }
  }
}

impl fmt::Debug for Rec {
  // the value may contain this very slot.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rec").field("filled", &self.0.get().is_some()).finish()
  }
}

/// A lambda, together with the environment it was evaluated in.
#[derive(Debug, Clone)]
pub struct Closure {
  pub(crate) env: ValEnv,
  pub(crate) param: Name,
  pub(crate) body: Arc<Exp>,
}

type BuiltinFn = dyn Fn(Vec<Val>) -> Result<Val, String> + Send + Sync;

#[derive(Clone)]
pub(crate) enum Imp {
  Strict(Arc<BuiltinFn>),
  /// Selects the second or third argument by the first, which must be a bool.
  Cond,
}

/// A curried function of fixed arity, implemented outside the language.
///
/// Applying it to fewer arguments than its arity returns a builtin waiting for the rest.
#[derive(Clone)]
pub struct Builtin {
  pub(crate) name: Name,
  arity: usize,
  pub(crate) args: Vec<Val>,
  pub(crate) imp: Imp,
}

impl Builtin {
  /// Returns a new builtin. Once `arity` arguments have been given, `f` is called with them, in
  /// order. `f` may reject them by returning an error message.
  ///
  /// # Panics
  ///
  /// If `name` is empty, or `arity` is zero.
  #[must_use]
  pub fn new<S, F>(name: S, arity: usize, f: F) -> Self
  where
    S: AsRef<str>,
    F: Fn(Vec<Val>) -> Result<Val, String> + Send + Sync + 'static,
  {
    assert!(arity != 0, "builtin with zero arity");
    Self { name: Name::new(name.as_ref()), arity, args: Vec::new(), imp: Imp::Strict(Arc::new(f)) }
  }

  /// Returns `cond`, which takes a bool and two more arguments, and returns the second argument if
  /// the bool is true, else the third.
  ///
  /// When directly applied to all of its arguments, only the selected one is evaluated.
  #[must_use]
  pub fn cond() -> Self {
    Self { name: Name::new("cond"), arity: 3, args: Vec::new(), imp: Imp::Cond }
  }

  pub(crate) fn is_cond(&self) -> bool {
    matches!(self.imp, Imp::Cond)
  }

  /// Gives this one more argument.
  pub(crate) fn push(mut self, arg: Val) -> Result<Val, ErrorKind> {
    self.args.push(arg);
    if self.args.len() < self.arity {
      return Ok(Val::Builtin(self));
    }
    let Builtin { name, args, imp, .. } = self;
    match imp {
      Imp::Strict(f) => f(args).map_err(|msg| ErrorKind::Builtin(name, msg)),
      Imp::Cond => {
        let [pred, yes, no]: [Val; 3] = match args.try_into() {
          Ok(xs) => xs,
          Err(_) => unreachable!("cond has arity 3"),
        };
        select(pred, yes, no)
      }
    }
  }
}

impl fmt::Debug for Builtin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Builtin")
      .field("name", &self.name)
      .field("arity", &self.arity)
      .field("args", &self.args)
      .finish_non_exhaustive()
  }
}

/// Returns `yes` if `pred` is true, `no` if it is false.
pub(crate) fn select<T>(pred: Val, yes: T, no: T) -> Result<T, ErrorKind> {
  match pred {
    Val::Bool(true) => Ok(yes),
    Val::Bool(false) => Ok(no),
    pred => Err(ErrorKind::CondNotBool(pred)),
  }
}
