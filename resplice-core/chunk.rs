//! Chunked text: the streamed form of an original source.
//!
//! Content arrives as consecutive chunks (typically one per line), each
//! optionally tagged with an [`Origin`]. The engine rewrites a stream by
//! mapping every chunk through a transform and appending any synthetic
//! trailing text afterwards; chunk boundaries are arbitrary and carry no
//! semantic weight.

use crate::{
  Origin,
  Tendril,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
  pub text:   Tendril,
  pub origin: Option<Origin>,
}

impl Chunk {
  pub fn new(text: impl Into<Tendril>, origin: Option<Origin>) -> Self {
    Self {
      text: text.into(),
      origin,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkedText {
  pub chunks: Vec<Chunk>,
}

impl ChunkedText {
  pub fn new(chunks: Vec<Chunk>) -> Self {
    Self { chunks }
  }

  /// Rewrite every chunk through `f`, keeping each chunk's origin. Chunks
  /// whose rewritten text is empty are dropped: they would contribute
  /// nothing to the output but still claim a mapping slot.
  #[must_use]
  pub fn map_chunks<F>(&self, mut f: F) -> ChunkedText
  where
    F: FnMut(&str) -> Tendril,
  {
    let chunks = self
      .chunks
      .iter()
      .filter_map(|chunk| {
        let text = f(&chunk.text);
        if text.is_empty() {
          return None;
        }
        Some(Chunk {
          text,
          origin: chunk.origin.clone(),
        })
      })
      .collect();
    ChunkedText { chunks }
  }

  /// Append synthetic trailing content with no provenance.
  pub fn push_trailing(&mut self, text: impl Into<Tendril>) {
    let text = text.into();
    if text.is_empty() {
      return;
    }
    self.chunks.push(Chunk { text, origin: None });
  }

  /// Concatenation of all chunk text.
  pub fn text(&self) -> String {
    let mut out = String::new();
    for chunk in &self.chunks {
      out.push_str(&chunk.text);
    }
    out
  }

  pub fn len_chars(&self) -> usize {
    self.chunks.iter().map(|c| c.text.chars().count()).sum()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  #[test]
  fn map_chunks_keeps_origins_and_drops_empties() {
    let origin = Origin::new(2, 0, Arc::from("x.js"));
    let chunks = ChunkedText::new(vec![
      Chunk::new("abc", None),
      Chunk::new("def", Some(origin.clone())),
    ]);

    let mapped = chunks.map_chunks(|text| {
      if text == "abc" {
        Tendril::new()
      } else {
        let mut s = Tendril::from(text);
        s.push('!');
        s
      }
    });

    assert_eq!(mapped.chunks.len(), 1);
    assert_eq!(mapped.chunks[0].text, "def!");
    assert_eq!(mapped.chunks[0].origin.as_ref(), Some(&origin));
  }

  #[test]
  fn push_trailing_ignores_empty_text() {
    let mut chunks = ChunkedText::new(vec![Chunk::new("hi", None)]);
    chunks.push_trailing("");
    chunks.push_trailing("F");
    assert_eq!(chunks.text(), "hiF");
    assert_eq!(chunks.chunks.len(), 2);
    assert!(chunks.chunks[1].origin.is_none());
  }
}
