//! Evaluating expressions.

use crate::error::{Error, ErrorKind};
use crate::types::{Closure, Rec, select};
use crate::{Val, ValEnv};
use lang_config::lang::Language;
use lang_hir::{Exp, Lit};
use std::sync::Arc;

#[derive(Clone, Copy)]
pub(crate) struct Cx<'a> {
  pub(crate) lang: &'a Language,
}

type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn get(cx: Cx<'_>, env: &ValEnv, exp: &Exp) -> Result<Val> {
  log::trace!("get {}", exp.desc());
  match exp {
    Exp::Ident(name) => {
      if let Some(val) = env.get(name) {
        return match val {
          Val::Rec(r) => r.get().cloned().ok_or_else(|| {
            cov_mark::hit!(rec_not_yet_defined);
            Error::new(exp, ErrorKind::Unbound(name.clone()))
          }),
          val => Ok(val.clone()),
        };
      }
      match Lit::get(cx.lang, name) {
        Some(Lit::Int(n)) => Ok(Val::Int(n)),
        Some(Lit::Color(c)) => Ok(Val::Color(c)),
        None => Err(Error::new(exp, ErrorKind::Unbound(name.clone()))),
      }
    }
    Exp::App(_, _) => get_app(cx, env, exp),
    Exp::Lambda(param, body) => Ok(Val::Closure(Arc::new(Closure {
      env: env.clone(),
      param: param.clone(),
      body: Arc::clone(body),
    }))),
    Exp::Let(name, defn, body) => {
      let val = get(cx, env, defn)?;
      get(cx, &env.with(name.clone(), val), body)
    }
    Exp::Letrec(name, defn, body) => {
      let rec = Rec::default();
      let env = env.with(name.clone(), Val::Rec(rec.clone()));
      let val = get(cx, &env, defn)?;
      rec.fill(val);
      get(cx, &env, body)
    }
  }
}

/// Evaluates a whole spine of applications `f a1 .. an` left to right, so that `cond` can see
/// its branches before they are evaluated.
fn get_app(cx: Cx<'_>, env: &ValEnv, exp: &Exp) -> Result<Val> {
  // each application with its arg. the innermost is on the top.
  let mut spine = Vec::<(&Exp, &Exp)>::new();
  let mut head = exp;
  while let Exp::App(func, arg) = head {
    spine.push((head, &**arg));
    head = &**func;
  }
  let mut func = get(cx, env, head)?;
  while let Some((app, arg)) = spine.pop() {
    if let Val::Builtin(b) = &func
      && b.is_cond()
      && b.args.len() == 1
      && let Some((app, no)) = spine.pop()
    {
      cov_mark::hit!(lazy_cond);
      let pred = b.args[0].clone();
      let chosen = select(pred, arg, no).map_err(|k| Error::new(app, k))?;
      func = get(cx, env, chosen)?;
      continue;
    }
    let arg = get(cx, env, arg)?;
    func = apply(cx, func, arg).map_err(|k| k.into_error(app))?;
  }
  Ok(func)
}

enum ApplyError {
  Kind(ErrorKind),
  Inner(Error),
}

impl ApplyError {
  fn into_error(self, exp: &Exp) -> Error {
    match self {
      ApplyError::Kind(kind) => Error::new(exp, kind),
      ApplyError::Inner(e) => e,
    }
  }
}

fn apply(cx: Cx<'_>, func: Val, arg: Val) -> Result<Val, ApplyError> {
  match func {
    Val::Closure(clos) => {
      let env = clos.env.with(clos.param.clone(), arg);
      get(cx, &env, &clos.body).map_err(ApplyError::Inner)
    }
    Val::Builtin(b) => b.push(arg).map_err(ApplyError::Kind),
    func => Err(ApplyError::Kind(ErrorKind::NotFn(func))),
  }
}
