//! The engine facade: one edit list, three output modes.
//!
//! [`ReplaceSource`] wraps any [`TextSource`] and records edits against it.
//! Rendering never mutates the engine: each call sorts the edit list into
//! the order its mode needs, allocates fresh traversal state, and leaves
//! the recorded edits untouched, so repeated renders are reproducible and
//! the three modes always describe the same edit set.

use resplice_core::{
  ChunkedText,
  Node,
  Tendril,
  TextSource,
  chars::split_at_char_clamped,
};

use crate::{
  cursor::EditCursor,
  edit::{
    EditList,
    Result,
    SortedEdits,
  },
  stream::StreamSplicer,
  tree,
};

pub struct ReplaceSource<S> {
  source: S,
  name:   Option<Tendril>,
  edits:  EditList,
}

impl<S: TextSource> ReplaceSource<S> {
  pub fn new(source: S) -> Self {
    Self {
      source,
      name: None,
      edits: EditList::new(),
    }
  }

  pub fn with_name(source: S, name: impl Into<Tendril>) -> Self {
    Self {
      source,
      name: Some(name.into()),
      edits: EditList::new(),
    }
  }

  /// The wrapped original, untouched.
  pub fn original(&self) -> &S {
    &self.source
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// The edits recorded so far, in call order.
  pub fn edits(&self) -> &EditList {
    &self.edits
  }

  /// Record a replacement of the inclusive char range `start..=end` of the
  /// original content.
  pub fn replace(&mut self, start: isize, end: isize, text: impl Into<Tendril>) -> Result<()> {
    self.edits.replace(start, end, text)
  }

  /// Record an insertion before char position `pos`.
  pub fn insert(&mut self, pos: isize, text: impl Into<Tendril>) -> Result<()> {
    self.edits.insert(pos, text)
  }

  /// Render the edited content as a flat string.
  pub fn render_text(&self) -> String {
    let content = self.source.content();
    splice_str(&content, self.edits.sorted_descending())
  }

  /// Render the edited content as a fragment tree whose unmodified leaves
  /// keep their origins, for source-map generation.
  pub fn render_tree(&self) -> Node {
    let node = self.source.node();
    if self.edits.is_empty() {
      return node;
    }
    let mut cursor = EditCursor::new(self.edits.sorted_ascending());
    tree::splice_tree(&node, &mut cursor)
  }

  /// Render the edited content chunk by chunk as the original streams
  /// through, with footer edits appended as trailing synthetic content.
  pub fn render_stream(&self) -> ChunkedText {
    let chunks = self.source.chunks();
    if self.edits.is_empty() {
      return chunks;
    }
    tracing::debug!(
      edits = self.edits.len(),
      chunks = chunks.chunks.len(),
      "splicing chunked content"
    );
    let mut splicer = StreamSplicer::new(self.edits.sorted_ascending());
    let mut out = chunks.map_chunks(|chunk| splicer.feed(chunk));
    out.push_trailing(splicer.finish());
    out
  }

  /// Char length of the rendered content.
  pub fn size(&self) -> usize {
    self.render_text().chars().count()
  }
}

/// Flat-mode splicing over descending-sorted edits.
///
/// The remaining string is always a prefix of the original, so every edit's
/// offsets stay valid without adjustment: split off the finalized tail at
/// `end + 1`, split again at `start`, keep the head as the next remainder
/// and drop the replaced span. Segments accumulate back-to-front and are
/// concatenated in reverse at the end; each char of the original is copied
/// at most once.
fn splice_str(content: &str, sorted: SortedEdits<'_>) -> String {
  let mut segments: Vec<&str> = Vec::with_capacity(sorted.len() * 2 + 1);
  let mut rem = content;

  for edit in &sorted {
    let (left, tail) = split_at_char_clamped(rem, edit.end + 1);
    let (head, _) = split_at_char_clamped(left, edit.start);
    segments.push(tail);
    segments.push(&edit.text);
    rem = head;
  }
  segments.push(rem);

  let mut out = String::with_capacity(segments.iter().map(|s| s.len()).sum());
  for segment in segments.iter().rev() {
    out.push_str(segment);
  }
  out
}

/// Convenience for callers that already hold the content as a plain string.
pub fn splice_content(content: &str, edits: &EditList) -> String {
  splice_str(content, edits.sorted_descending())
}
