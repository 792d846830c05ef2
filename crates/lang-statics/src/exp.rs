//! Inferring the types of expressions.

use crate::TyEnv;
use crate::error::{Error, ErrorKind};
use lang_config::lang::Language;
use lang_hir::{Exp, Lit};
use lang_statics_types::St;
use lang_statics_types::generalize::{NonGeneric, fresh};
use lang_statics_types::subst::Subst;
use lang_statics_types::ty::Ty;
use lang_statics_types::unify::{combine, unify};

pub(crate) struct Cx<'a> {
  pub(crate) st: &'a mut St,
  pub(crate) lang: &'a Language,
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns the type of `exp` and the store for the subtree rooted at `exp`.
///
/// `ctx` holds what is known from the definitions of the enclosing `let`s and `letrec`s. It is only
/// consulted when copying the type of a name, and never returned as part of the result.
pub(crate) fn get(
  cx: &mut Cx<'_>,
  env: &TyEnv,
  ng: &NonGeneric,
  ctx: &Subst,
  exp: &Exp,
) -> Result<(Ty, Subst)> {
  log::trace!("get {}", exp.desc());
  match exp {
    Exp::Ident(name) => {
      if let Some(ty) = env.get(name) {
        return Ok((fresh(cx.st, ctx, ng, ty), Subst::default()));
      }
      let ty = match Lit::get(cx.lang, name) {
        Some(Lit::Int(_)) => Ty::int(),
        Some(Lit::Color(_)) => Ty::color(),
        None => return Err(Error::new(exp, ErrorKind::Undefined(name.clone()))),
      };
      Ok((ty, Subst::default()))
    }
    Exp::App(func, arg) => {
      let (func_ty, func_subst) = get(cx, env, ng, ctx, func)?;
      let (arg_ty, arg_subst) = get(cx, env, ng, ctx, arg)?;
      let res_ty = cx.st.var_ty();
      let subst = combine(&func_subst, arg_subst).map_err(|e| Error::unify(exp, e))?;
      let want = Ty::fun(arg_ty, res_ty.clone());
      let subst = unify(subst, &want, &func_ty).map_err(|e| Error::unify(exp, e))?;
      Ok((res_ty, subst))
    }
    Exp::Lambda(param, body) => {
      let param_var = cx.st.var();
      let env = env.with(param.clone(), Ty::Var(param_var));
      let ng = ng.with(param_var);
      let (body_ty, subst) = get(cx, &env, &ng, ctx, body)?;
      Ok((Ty::fun(Ty::Var(param_var), body_ty), subst))
    }
    Exp::Let(name, defn, body) => {
      let (defn_ty, defn_subst) = get(cx, env, ng, ctx, defn)?;
      let env = env.with(name.clone(), defn_ty);
      bind_body(cx, &env, ng, ctx, defn_subst, exp, body)
    }
    Exp::Letrec(name, defn, body) => {
      let name_var = cx.st.var();
      let env = env.with(name.clone(), Ty::Var(name_var));
      let (defn_ty, defn_subst) = get(cx, &env, &ng.with(name_var), ctx, defn)?;
      let defn_subst =
        unify(defn_subst, &Ty::Var(name_var), &defn_ty).map_err(|e| Error::unify(exp, e))?;
      // the name is generic again in the body.
      bind_body(cx, &env, ng, ctx, defn_subst, exp, body)
    }
  }
}

/// Analyses the body of a `let` or `letrec` whose definition had store `defn_subst`, and merges
/// the two stores.
fn bind_body(
  cx: &mut Cx<'_>,
  env: &TyEnv,
  ng: &NonGeneric,
  ctx: &Subst,
  defn_subst: Subst,
  exp: &Exp,
  body: &Exp,
) -> Result<(Ty, Subst)> {
  let body_ctx = combine(&defn_subst, ctx.clone()).map_err(|e| Error::unify(exp, e))?;
  let (body_ty, body_subst) = get(cx, env, ng, &body_ctx, body)?;
  let subst = combine(&defn_subst, body_subst).map_err(|e| Error::unify(exp, e))?;
  Ok((body_ty, subst))
}
