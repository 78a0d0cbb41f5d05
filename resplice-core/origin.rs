use std::sync::Arc;

use crate::Tendril;

/// Provenance of a leaf fragment: where its text sat in the original file.
///
/// `line` is 1-based and `column` 0-based, following source-map convention.
/// `source` is a shared identifier for the originating file; the engine never
/// reads the file itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
  pub line:   usize,
  pub column: usize,
  pub source: Arc<str>,
  pub name:   Option<Tendril>,
}

impl Origin {
  pub fn new(line: usize, column: usize, source: Arc<str>) -> Self {
    Self {
      line,
      column,
      source,
      name: None,
    }
  }

  pub fn with_name(mut self, name: impl Into<Tendril>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Same origin, shifted right within its line. Negative shifts saturate at
  /// column 0; they occur when overlapping replacements force a split point
  /// before the text already consumed.
  #[must_use]
  pub fn shift_column(&self, delta: isize) -> Self {
    let column = if delta < 0 {
      self.column.saturating_sub(delta.unsigned_abs())
    } else {
      self.column + delta as usize
    };
    Self {
      column,
      ..self.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shift_column_saturates() {
    let origin = Origin::new(3, 4, Arc::from("a.js"));
    assert_eq!(origin.shift_column(2).column, 6);
    assert_eq!(origin.shift_column(-2).column, 2);
    assert_eq!(origin.shift_column(-9).column, 0);
    assert_eq!(origin.shift_column(-9).line, 3);
  }
}
