//! A persistent map of nested scopes, optimized for the use-case of layering one binding over an
//! outer scope while other holders of the outer scope keep seeing it unchanged.

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

use fast_hash::{FxHashMap, FxHashSet};
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

/// A scope map.
///
/// The outermost scope is a hash map. Every inner scope binds exactly one key, and points at its
/// enclosing scope. Cloning is O(1), and so is [`ScopeMap::with`].
#[derive(Debug)]
pub struct ScopeMap<K, V> {
  base: Arc<FxHashMap<K, V>>,
  top: Option<Arc<Frame<K, V>>>,
}

#[derive(Debug)]
struct Frame<K, V> {
  key: K,
  val: V,
  parent: Option<Arc<Frame<K, V>>>,
}

impl<K, V> ScopeMap<K, V> {
  /// Returns a new scope map whose outermost scope is `base`.
  #[must_use]
  pub fn new(base: FxHashMap<K, V>) -> Self {
    Self { base: Arc::new(base), top: None }
  }

  /// Returns how many inner scopes have been layered over the outermost scope.
  #[must_use]
  pub fn depth(&self) -> usize {
    self.frames().count()
  }

  /// Returns whether there are no bindings at all.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.top.is_none() && self.base.is_empty()
  }

  fn frames(&self) -> impl Iterator<Item = &Frame<K, V>> {
    std::iter::successors(self.top.as_deref(), |fr| fr.parent.as_deref())
  }
}

impl<K, V> ScopeMap<K, V>
where
  K: Hash + Eq,
{
  /// Returns a new scope map with one new scope binding `k` to `v` layered over this one.
  ///
  /// This one is left unchanged.
  #[must_use]
  pub fn with(&self, k: K, v: V) -> Self {
    let frame = Frame { key: k, val: v, parent: self.top.clone() };
    Self { base: Arc::clone(&self.base), top: Some(Arc::new(frame)) }
  }

  /// Gets the value at the key from the innermost scope that binds it.
  #[must_use]
  pub fn get<Q>(&self, k: &Q) -> Option<&V>
  where
    Q: ?Sized + Hash + Eq,
    K: Borrow<Q>,
  {
    match self.frames().find(|fr| Borrow::<Q>::borrow(&fr.key) == k) {
      Some(fr) => Some(&fr.val),
      None => self.base.get(k),
    }
  }

  /// Returns whether some scope binds the key.
  #[must_use]
  pub fn contains_key<Q>(&self, k: &Q) -> bool
  where
    Q: ?Sized + Hash + Eq,
    K: Borrow<Q>,
  {
    self.get(k).is_some()
  }

  /// Returns an iterator over the visible keys and values, innermost first. Shadowed bindings are
  /// skipped.
  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
    let mut iter = self.frames().map(|fr| (&fr.key, &fr.val)).chain(self.base.iter());
    let mut seen = FxHashSet::<&K>::default();
    std::iter::from_fn(move || {
      loop {
        let (k, v) = iter.next()?;
        if seen.insert(k) {
          return Some((k, v));
        }
      }
    })
  }
}

impl<K, V> Clone for ScopeMap<K, V> {
  fn clone(&self) -> Self {
    Self { base: Arc::clone(&self.base), top: self.top.clone() }
  }
}

impl<K, V> Default for ScopeMap<K, V> {
  fn default() -> Self {
    Self::new(FxHashMap::default())
  }
}

impl<K, V> Drop for ScopeMap<K, V> {
  fn drop(&mut self) {
    // unlink iteratively, so dropping a long chain does not recur once per frame.
    let mut cur = self.top.take();
    while let Some(fr) = cur {
      cur = match Arc::try_unwrap(fr) {
        Ok(mut fr) => fr.parent.take(),
        Err(_) => break,
      };
    }
  }
}

impl<K, V> FromIterator<(K, V)> for ScopeMap<K, V>
where
  K: Hash + Eq,
{
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ScopeMap<K, V>
where
  K: Hash + Eq,
{
  fn from(value: [(K, V); N]) -> Self {
    value.into_iter().collect()
  }
}
