//! Helpers for writing tests.

use lang_config::lang::Language;
use lang_hir::Exp;
use lang_statics_types::St;
use lang_statics_types::ty::Ty;

pub(crate) fn i(name: &str) -> Exp {
  Exp::ident(name)
}

pub(crate) fn app<const N: usize>(func: Exp, args: [Exp; N]) -> Exp {
  Exp::apply_many(func, args)
}

pub(crate) fn lam<const N: usize>(params: [&str; N], body: Exp) -> Exp {
  Exp::lambda_many(params, body)
}

/// A session with the standard basis.
pub(crate) struct Cx {
  pub(crate) st: St,
  pub(crate) lang: Language,
  pub(crate) basis: analysis::Basis,
}

impl Cx {
  pub(crate) fn new() -> Self {
    Self::with_lang(Language::default())
  }

  pub(crate) fn with_lang(lang: Language) -> Self {
    // ignore the error, which happens when the logger was already set up by another test.
    let _ = env_logger::builder().is_test(true).try_init();
    let mut st = St::default();
    let basis = analysis::std_basis(&mut st);
    Self { st, lang, basis }
  }

  pub(crate) fn infer(&mut self, exp: &Exp) -> Result<lang_statics::Inferred, lang_statics::Error> {
    lang_statics::get(&mut self.st, &self.lang, &self.basis.ty_env(), exp)
  }

  pub(crate) fn show(&self, ty: &Ty) -> String {
    ty.display(&self.st).to_string()
  }
}

/// Checks that `exp` has the type displayed as `want` in the standard basis.
#[track_caller]
pub(crate) fn check_ty(exp: &Exp, want: &str) {
  let mut cx = Cx::new();
  match cx.infer(exp) {
    Ok(inferred) => {
      let got = cx.show(&inferred.canonical());
      pretty_assertions::assert_eq!(want, got, "wrong type for {exp}");
    }
    Err(e) => panic!("{exp}: unexpected statics error: {}", e.display(&cx.st)),
  }
}

/// Checks that `exp` fails to typecheck in the standard basis, with the message `want`.
#[track_caller]
pub(crate) fn check_err(exp: &Exp, want: &str) -> lang_statics::ErrorKind {
  let mut cx = Cx::new();
  match cx.infer(exp) {
    Ok(inferred) => panic!("{exp}: unexpected pass with type {}", cx.show(&inferred.canonical())),
    Err(e) => {
      let got = e.display(&cx.st).to_string();
      pretty_assertions::assert_eq!(want, got, "wrong error for {exp}");
      e.kind().clone()
    }
  }
}

/// Checks that `exp` typechecks in the standard basis, then runs to the value displayed as `want`.
#[track_caller]
pub(crate) fn check_val(exp: &Exp, want: &str) {
  let mut cx = Cx::new();
  match analysis::run(&mut cx.st, &cx.lang, &cx.basis, exp) {
    Ok((_, val)) => pretty_assertions::assert_eq!(want, val.to_string(), "wrong value for {exp}"),
    Err(e) => panic!("{exp}: unexpected error: {}", e.display(&cx.st)),
  }
}

/// Runs `exp` in the standard basis without typechecking it first.
pub(crate) fn run_unchecked(exp: &Exp) -> Result<lang_dynamics::Val, lang_dynamics::Error> {
  let cx = Cx::new();
  lang_dynamics::get(&cx.lang, &cx.basis.val_env(), exp)
}

/// Checks that running `exp`, without typechecking it first, fails with the message `want`.
#[track_caller]
pub(crate) fn check_run_err(exp: &Exp, want: &str) -> lang_dynamics::ErrorKind {
  match run_unchecked(exp) {
    Ok(val) => panic!("{exp}: unexpected value {val}"),
    Err(e) => {
      pretty_assertions::assert_eq!(want, e.to_string(), "wrong error for {exp}");
      e.kind().clone()
    }
  }
}
