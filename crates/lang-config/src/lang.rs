//! Parsed configuration for the language.

use crate::{Error, file};
use fast_hash::FxHashSet;
use str_util::Name;

/// The default colors, in palette order.
pub const DEFAULT_COLORS: [&str; 10] =
  ["black", "blue", "red", "green", "yellow", "grey", "magenta", "orange", "sky", "maroon"];

/// Parsed configuration for the language.
#[derive(Debug, Clone)]
pub struct Language {
  /// Whether identifiers that parse as integers are int literals.
  pub ints: bool,
  /// The color names, in palette order.
  colors: Vec<Name>,
  color_set: FxHashSet<Name>,
}

impl Default for Language {
  fn default() -> Self {
    let colors = DEFAULT_COLORS.iter().copied().map(Name::new).collect();
    Self::with_colors(true, colors)
  }
}

impl Language {
  fn with_colors(ints: bool, colors: Vec<Name>) -> Self {
    let color_set = colors.iter().cloned().collect();
    Self { ints, colors, color_set }
  }

  /// Parses the contents of a config file.
  ///
  /// # Errors
  ///
  /// If the contents were not a valid config.
  pub fn from_toml(contents: &str) -> Result<Self, Error> {
    let root: file::Root = toml::from_str(contents).map_err(Error::CouldNotParse)?;
    Self::from_file(root)
  }

  /// Converts a parsed config file into the language config.
  ///
  /// # Errors
  ///
  /// If the config had an unsupported version or bad color names.
  pub fn from_file(root: file::Root) -> Result<Self, Error> {
    if root.version != 1 {
      return Err(Error::InvalidVersion(root.version));
    }
    let mut ret = Self::default();
    if let Some(ints) = root.literals.ints {
      ret.ints = ints;
    }
    if let Some(colors) = root.literals.colors {
      let mut names = Vec::<Name>::with_capacity(colors.len());
      for color in colors {
        if color.is_empty() {
          return Err(Error::EmptyColor);
        }
        let name = Name::new(color);
        if names.contains(&name) {
          return Err(Error::DuplicateColor(name));
        }
        names.push(name);
      }
      ret = Self::with_colors(ret.ints, names);
    }
    Ok(ret)
  }

  /// Returns whether this is a color name.
  #[must_use]
  pub fn is_color(&self, s: &str) -> bool {
    self.color_set.contains(s)
  }

  /// Returns the index of the color in the palette, if it is one.
  #[must_use]
  pub fn color_index(&self, s: &str) -> Option<usize> {
    self.colors.iter().position(|c| c.as_str() == s)
  }

  /// Returns the color names, in palette order.
  #[must_use]
  pub fn colors(&self) -> &[Name] {
    &self.colors
  }
}
