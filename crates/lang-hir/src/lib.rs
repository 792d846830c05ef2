//! High-level Intermediate Representation. The expression tree shared by the statics and the
//! dynamics.
//!
//! Trees are immutable once built. Both walks take them by reference, so one tree may be checked
//! and run any number of times. Children are shared, so cloning a subtree is cheap.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

use std::fmt;
use std::sync::Arc;

pub use num_bigint::BigInt;
pub use str_util::Name;

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
  /// A name, or a literal written as a name, like `x`, `5`, or `red`.
  Ident(Name),
  /// Application of a function to exactly one argument.
  App(Arc<Exp>, Arc<Exp>),
  /// A function of exactly one parameter.
  Lambda(Name, Arc<Exp>),
  /// A non-recursive binding. The name is not in scope in its own definition.
  Let(Name, Arc<Exp>, Arc<Exp>),
  /// A recursive binding. The name is in scope in its own definition.
  Letrec(Name, Arc<Exp>, Arc<Exp>),
}

impl Exp {
  /// Returns an identifier.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  #[must_use]
  pub fn ident<S>(name: S) -> Self
  where
    S: AsRef<str>,
  {
    Exp::Ident(Name::new(name.as_ref()))
  }

  /// Returns an application of `func` to `arg`.
  #[must_use]
  pub fn apply(func: Exp, arg: Exp) -> Self {
    Exp::App(Arc::new(func), Arc::new(arg))
  }

  /// Returns a lambda.
  ///
  /// # Panics
  ///
  /// If `param` is empty.
  #[must_use]
  pub fn lambda<S>(param: S, body: Exp) -> Self
  where
    S: AsRef<str>,
  {
    Exp::Lambda(Name::new(param.as_ref()), Arc::new(body))
  }

  /// Returns a `let`.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  #[must_use]
  pub fn let_<S>(name: S, defn: Exp, body: Exp) -> Self
  where
    S: AsRef<str>,
  {
    Exp::Let(Name::new(name.as_ref()), Arc::new(defn), Arc::new(body))
  }

  /// Returns a `letrec`.
  ///
  /// # Panics
  ///
  /// If `name` is empty.
  #[must_use]
  pub fn letrec<S>(name: S, defn: Exp, body: Exp) -> Self
  where
    S: AsRef<str>,
  {
    Exp::Letrec(Name::new(name.as_ref()), Arc::new(defn), Arc::new(body))
  }

  /// Returns `func` applied to each of `args` in turn, i.e. `f a b c` is `((f a) b) c`.
  ///
  /// # Panics
  ///
  /// If `args` is empty.
  #[must_use]
  pub fn apply_many<I>(func: Exp, args: I) -> Self
  where
    I: IntoIterator<Item = Exp>,
  {
    let mut args = args.into_iter().peekable();
    assert!(args.peek().is_some(), "apply_many with no args");
    args.fold(func, Exp::apply)
  }

  /// Returns nested lambdas, one per parameter, i.e. `fn a, b => e` is `fn a => fn b => e`.
  ///
  /// # Panics
  ///
  /// If `params` is empty, or any param is empty.
  #[must_use]
  pub fn lambda_many<I, S>(params: I, body: Exp) -> Self
  where
    I: IntoIterator<Item = S>,
    I::IntoIter: DoubleEndedIterator,
    S: AsRef<str>,
  {
    let mut params = params.into_iter().rev().peekable();
    assert!(params.peek().is_some(), "lambda_many with no params");
    params.fold(body, |body, param| Exp::lambda(param, body))
  }

  /// Returns a description of this expression's kind.
  #[must_use]
  pub fn desc(&self) -> &'static str {
    match self {
      Exp::Ident(_) => "identifier",
      Exp::App(_, _) => "application",
      Exp::Lambda(_, _) => "lambda",
      Exp::Let(_, _, _) => "let",
      Exp::Letrec(_, _, _) => "letrec",
    }
  }
}

impl fmt::Display for Exp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Exp::Ident(name) => name.fmt(f),
      Exp::App(func, arg) => write!(f, "({func} {arg})"),
      Exp::Lambda(param, body) => write!(f, "(fn {param} => {body})"),
      Exp::Let(name, defn, body) => write!(f, "(let {name} = {defn} in {body})"),
      Exp::Letrec(name, defn, body) => write!(f, "(letrec {name} = {defn} in {body})"),
    }
  }
}

/// A literal, i.e. an identifier that means something without being bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lit {
  /// An integer.
  Int(BigInt),
  /// A color, by name.
  Color(Name),
}

impl Lit {
  /// Returns the literal this name denotes under the language config, if any.
  #[must_use]
  pub fn get(lang: &lang_config::lang::Language, name: &Name) -> Option<Self> {
    if lang.ints {
      if let Ok(n) = name.as_str().parse::<BigInt>() {
        return Some(Lit::Int(n));
      }
    }
    lang.is_color(name.as_str()).then(|| Lit::Color(name.clone()))
  }
}
