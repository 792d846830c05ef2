//! Configuration stored in a config file.

use serde::Deserialize;
use str_util::SmolStr;

/// The name of the config file.
pub const NAME: &str = "lang.toml";

/// The root config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Root {
  /// The version. Should be 1.
  pub version: u16,
  /// The literals config.
  #[serde(default)]
  pub literals: Literals,
}

/// Which identifiers are recognized as literals when they are not otherwise bound.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Literals {
  /// Whether identifiers that parse as integers are int literals. Defaults to on.
  pub ints: Option<bool>,
  /// The color names. Replaces the default palette when present.
  pub colors: Option<Vec<SmolStr>>,
}
