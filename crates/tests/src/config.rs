//! Reading the language config.

use lang_config::Error;
use lang_config::lang::{DEFAULT_COLORS, Language};

#[test]
fn default() {
  let lang = Language::default();
  assert!(lang.ints);
  assert_eq!(lang.colors().len(), DEFAULT_COLORS.len());
  assert_eq!(lang.color_index("black"), Some(0));
  assert_eq!(lang.color_index("sky"), Some(8));
  assert!(lang.is_color("maroon"));
  assert!(!lang.is_color("cyan"));
}

#[test]
fn minimal() {
  let lang = Language::from_toml("version = 1").unwrap();
  assert!(lang.ints);
  assert_eq!(lang.colors().len(), 10);
}

#[test]
fn colors() {
  let lang = Language::from_toml(
    r#"
version = 1
[literals]
ints = true
colors = ["white", "cyan"]
"#,
  )
  .unwrap();
  assert_eq!(lang.color_index("cyan"), Some(1));
  assert!(!lang.is_color("black"));
}

#[test]
fn bad_version() {
  let e = Language::from_toml("version = 2").unwrap_err();
  assert!(matches!(e, Error::InvalidVersion(2)));
  assert_eq!(e.to_string(), "invalid config version: expected 1, found 2");
}

#[test]
fn unknown_field() {
  let e = Language::from_toml("version = 1\nfoo = 3").unwrap_err();
  assert!(matches!(e, Error::CouldNotParse(_)));
}

#[test]
fn dupe_color() {
  let e = Language::from_toml("version = 1\n[literals]\ncolors = [\"red\", \"red\"]").unwrap_err();
  assert!(matches!(e, Error::DuplicateColor(name) if name.as_str() == "red"));
}

#[test]
fn empty_color() {
  let e = Language::from_toml("version = 1\n[literals]\ncolors = [\"\"]").unwrap_err();
  assert!(matches!(e, Error::EmptyColor));
}

#[test]
fn file_name() {
  assert_eq!(lang_config::file::NAME, "lang.toml");
}
