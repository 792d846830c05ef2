//! Persistent scopes.

use fast_hash::FxHashMap;
use scope_map::ScopeMap;

#[test]
fn with_leaves_original() {
  let outer = ScopeMap::from([("a", 1), ("b", 2)]);
  let inner = outer.with("a", 3);
  assert_eq!(outer.get("a"), Some(&1));
  assert_eq!(inner.get("a"), Some(&3));
  assert_eq!(inner.get("b"), Some(&2));
  assert_eq!(outer.depth(), 0);
  assert_eq!(inner.depth(), 1);
}

#[test]
fn siblings() {
  let outer: ScopeMap<&str, i32> = ScopeMap::default();
  assert!(outer.is_empty());
  let left = outer.with("x", 1);
  let right = outer.with("y", 2);
  assert!(left.contains_key("x"));
  assert!(!left.contains_key("y"));
  assert!(right.contains_key("y"));
  assert!(!right.contains_key("x"));
  assert!(outer.is_empty());
}

#[test]
fn iter_skips_shadowed() {
  let map = ScopeMap::new(FxHashMap::from_iter([("a", 0)])).with("b", 1).with("a", 2);
  let got: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
  assert_eq!(got, vec![("a", 2), ("b", 1)]);
}

#[test]
fn long_chain() {
  let mut map = ScopeMap::default();
  for n in 0..200_000u32 {
    map = map.with(n, n);
  }
  assert_eq!(map.get(&0u32), Some(&0));
  drop(map);
}
