//! Stream-mode splicing.
//!
//! Applies the ascending-sorted edits to content arriving as consecutive
//! chunks of arbitrary size, without ever materializing the whole text. A
//! replacement whose span crosses a chunk boundary leaves a count of owed
//! characters behind; the following chunks are consumed until the debt is
//! paid off. Edits starting at or past the total content length are
//! collected by [`StreamSplicer::finish`] as trailing synthetic content.

use resplice_core::{
  Tendril,
  chars::{
    len_chars,
    split_at_char,
  },
};

use crate::edit::SortedEdits;

#[derive(Debug)]
pub struct StreamSplicer<'a> {
  edits:   SortedEdits<'a>,
  index:   usize,
  /// Absolute char offset of the start of the next chunk.
  current: isize,
  /// Chars of an overhanging replacement still to be consumed from
  /// upcoming chunks.
  remove:  isize,
}

impl<'a> StreamSplicer<'a> {
  pub fn new(edits: SortedEdits<'a>) -> Self {
    Self {
      edits,
      index: 0,
      current: 0,
      remove: 0,
    }
  }

  /// Splice the next chunk of original content, returning its edited form
  /// (possibly empty when the chunk lies entirely inside a replaced range).
  pub fn feed(&mut self, chunk: &str) -> Tendril {
    let len = len_chars(chunk) as isize;
    let end_offset = self.current + len;

    if self.remove > len {
      self.remove -= len;
      self.current = end_offset;
      return Tendril::new();
    }

    let mut rest = chunk;
    if self.remove > 0 {
      rest = split_at_char(rest, self.remove as usize).1;
      self.current += self.remove;
      self.remove = 0;
    }

    let mut out = Tendril::new();
    while let Some(&edit) = self.edits.get(self.index) {
      if edit.start >= end_offset {
        break;
      }
      let end = edit.end + 1;
      let keep = (edit.start - self.current).max(0) as usize;
      let (before, _) = split_at_char(rest, keep);
      out.push_str(before);
      out.push_str(&edit.text);

      if end <= end_offset {
        // The whole span is inside this chunk; drop it and keep scanning
        // for more edits further along.
        let skip = (end - self.current).max(0) as usize;
        rest = split_at_char(rest, skip).1;
        self.current = self.current.max(end);
      } else {
        rest = "";
        self.remove = end - end_offset;
      }
      self.index += 1;
    }

    out.push_str(rest);
    self.current = end_offset;
    out
  }

  /// Texts of all edits the fed content never reached, concatenated in
  /// ascending order. Call once after the last chunk.
  pub fn finish(&mut self) -> Tendril {
    let mut out = Tendril::new();
    for edit in &self.edits[self.index..] {
      out.push_str(&edit.text);
    }
    self.index = self.edits.len();
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::edit::EditList;

  fn run(list: &EditList, chunks: &[&str]) -> String {
    let mut splicer = StreamSplicer::new(list.sorted_ascending());
    let mut out = String::new();
    for chunk in chunks {
      out.push_str(&splicer.feed(chunk));
    }
    out.push_str(&splicer.finish());
    out
  }

  #[test]
  fn replacement_crossing_a_chunk_boundary() {
    let mut list = EditList::new();
    list.replace(2, 5, "Z").unwrap();
    assert_eq!(run(&list, &["abc", "def", "ghi"]), "abZghi");
  }

  #[test]
  fn replacement_swallowing_whole_chunks() {
    let mut list = EditList::new();
    list.replace(1, 7, "-").unwrap();
    assert_eq!(run(&list, &["abc", "def", "ghi"]), "a-i");
  }

  #[test]
  fn several_edits_in_one_chunk() {
    let mut list = EditList::new();
    list.replace(1, 2, "a").unwrap();
    list.insert(5, "b").unwrap();
    list.replace(7, 7, "c").unwrap();
    assert_eq!(run(&list, &["0123456789"]), "0a34b56c89");
  }

  #[test]
  fn header_and_footer_edits() {
    let mut list = EditList::new();
    list.replace(-2, -1, "H").unwrap();
    list.replace(10, 10, "F").unwrap();
    assert_eq!(run(&list, &["hi"]), "HhiF");
  }

  #[test]
  fn insertion_exactly_on_a_chunk_boundary() {
    let mut list = EditList::new();
    list.insert(3, "X").unwrap();
    assert_eq!(run(&list, &["abc", "def"]), "abcXdef");
  }

  #[test]
  fn multibyte_content_splits_on_char_offsets() {
    let mut list = EditList::new();
    list.replace(1, 2, "é").unwrap();
    assert_eq!(run(&list, &["äö", "üß"]), "äéß");
  }

  #[test]
  fn no_edits_passes_chunks_through() {
    let list = EditList::new();
    assert_eq!(run(&list, &["ab", "", "cd"]), "abcd");
  }
}
