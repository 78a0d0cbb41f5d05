//! The edit list and its two sort strategies.
//!
//! Edits are recorded append-only and never reordered in place: every render
//! call builds a fresh sorted view, so repeated renders on the same list are
//! order-independent and reproducible. The tie-break between edits with
//! identical ranges is the recording order, nothing else.

use smallvec::SmallVec;
use thiserror::Error;

use resplice_core::Tendril;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
  #[error("invalid edit range: end {end} is before start {start} - 1")]
  InvalidRange { start: isize, end: isize },
}

/// One requested change against the original content.
///
/// `end` is inclusive. A pure insertion is marked by `end == start - 1`: a
/// zero-width range that distinguishes "insert before position P" from
/// "replace the single character at P". Offsets are char offsets and may lie
/// outside the content; such edits become headers or footers at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub start: isize,
  pub end:   isize,
  pub text:  Tendril,
  pub order: usize,
}

impl Edit {
  pub fn is_insertion(&self) -> bool {
    self.end == self.start - 1
  }

  fn sort_key(&self) -> (isize, isize, usize) {
    (self.end, self.start, self.order)
  }
}

/// A sorted view over an [`EditList`], built fresh per render call.
pub type SortedEdits<'a> = SmallVec<[&'a Edit; 8]>;

/// Append-only record of requested edits.
#[derive(Debug, Clone, Default)]
pub struct EditList {
  edits: Vec<Edit>,
}

impl EditList {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a replacement of the inclusive char range `start..=end`.
  ///
  /// No bounds are checked against the content length; out-of-range edits
  /// are legal and resolved at render time. The only rejected shape is
  /// `end < start - 1`, which names no range at all; the list is left
  /// unmodified in that case.
  pub fn replace(&mut self, start: isize, end: isize, text: impl Into<Tendril>) -> Result<()> {
    if end < start - 1 {
      return Err(EditError::InvalidRange { start, end });
    }
    let order = self.edits.len();
    tracing::trace!(start, end, order, "recording edit");
    self.edits.push(Edit {
      start,
      end,
      text: text.into(),
      order,
    });
    Ok(())
  }

  /// Record an insertion before char position `pos`.
  pub fn insert(&mut self, pos: isize, text: impl Into<Tendril>) -> Result<()> {
    self.replace(pos, pos - 1, text)
  }

  pub fn len(&self) -> usize {
    self.edits.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edits.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
    self.edits.iter()
  }

  /// Ascending order: `end`, then `start`, then recording order. Lets a
  /// position cursor advance left-to-right through the content exactly once.
  pub fn sorted_ascending(&self) -> SortedEdits<'_> {
    let mut sorted: SortedEdits<'_> = self.edits.iter().collect();
    sorted.sort_unstable_by_key(|edit| edit.sort_key());
    sorted
  }

  /// Descending order: `end`, then `start`, then recording order, all
  /// reversed. Lets the flat splicer work on the suffix of the
  /// still-unprocessed string without invalidating the offsets of edits not
  /// yet applied.
  pub fn sorted_descending(&self) -> SortedEdits<'_> {
    let mut sorted: SortedEdits<'_> = self.edits.iter().collect();
    sorted.sort_unstable_by_key(|edit| std::cmp::Reverse(edit.sort_key()));
    sorted
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn keys(edits: &SortedEdits<'_>) -> Vec<(isize, isize, usize)> {
    edits.iter().map(|e| (e.start, e.end, e.order)).collect()
  }

  #[test]
  fn orders_are_total_and_mirror_each_other() {
    let mut list = EditList::new();
    list.replace(5, 10, "a").unwrap();
    list.replace(0, 3, "b").unwrap();
    list.replace(5, 10, "c").unwrap();
    list.insert(4, "d").unwrap();

    let asc = keys(&list.sorted_ascending());
    assert_eq!(asc, vec![
      (0, 3, 1),
      (4, 3, 3),
      (5, 10, 0),
      (5, 10, 2),
    ]);

    let mut desc = keys(&list.sorted_descending());
    desc.reverse();
    assert_eq!(asc, desc);
  }

  #[test]
  fn sorting_does_not_reorder_the_list() {
    let mut list = EditList::new();
    list.replace(9, 9, "x").unwrap();
    list.replace(1, 1, "y").unwrap();
    let _ = list.sorted_ascending();
    let _ = list.sorted_descending();

    let recorded: Vec<_> = list.iter().map(|e| e.order).collect();
    assert_eq!(recorded, vec![0, 1]);
  }

  #[test]
  fn insert_uses_zero_width_marker() {
    let mut list = EditList::new();
    list.insert(3, "X").unwrap();
    let edit = list.iter().next().unwrap();
    assert_eq!((edit.start, edit.end), (3, 2));
    assert!(edit.is_insertion());
  }

  #[test]
  fn rejects_backwards_range_and_leaves_list_untouched() {
    let mut list = EditList::new();
    list.replace(0, 1, "ok").unwrap();

    let err = list.replace(5, 2, "bad").unwrap_err();
    assert!(matches!(err, EditError::InvalidRange { start: 5, end: 2 }));
    assert_eq!(list.len(), 1);

    // The insertion marker itself is the last legal shape.
    list.replace(5, 4, "insert").unwrap();
    assert_eq!(list.len(), 2);
  }

  #[test]
  fn out_of_bounds_edits_are_accepted() {
    let mut list = EditList::new();
    list.replace(-4, -2, "header").unwrap();
    list.replace(1000, 2000, "footer").unwrap();
    assert_eq!(list.len(), 2);
  }
}
