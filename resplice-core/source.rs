//! The capability an original text exposes to the engine.
//!
//! [`TextSource`] replaces a wrapper-class hierarchy with a trait at the
//! seam: the engine borrows the source read-only and asks for the same data
//! in whichever shape the requested output mode needs. Implementations must
//! return identical content from every accessor and across repeated calls.

use std::{
  borrow::Cow,
  sync::Arc,
};

use crate::{
  Chunk,
  ChunkedText,
  Fragment,
  Node,
  Origin,
  Tendril,
};

pub trait TextSource {
  /// The whole original text.
  fn content(&self) -> Cow<'_, str>;

  /// The original text as a position-annotated fragment tree.
  fn node(&self) -> Node;

  /// The original text as consecutive chunks with positions.
  fn chunks(&self) -> ChunkedText;
}

/// A plain string with no provenance. Tree and chunk forms are a single
/// untagged run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
  content: Tendril,
}

impl RawSource {
  pub fn new(content: impl Into<Tendril>) -> Self {
    Self {
      content: content.into(),
    }
  }
}

impl TextSource for RawSource {
  fn content(&self) -> Cow<'_, str> {
    Cow::Borrowed(&self.content)
  }

  fn node(&self) -> Node {
    Node::root(vec![Fragment::Raw(self.content.clone())])
  }

  fn chunks(&self) -> ChunkedText {
    ChunkedText::new(vec![Chunk::new(self.content.clone(), None)])
  }
}

/// A string that came from a named file. Tree and chunk forms are split per
/// line (line terminators kept with their line), each line carrying a
/// 1-based line origin at column 0, which is the granularity map generation
/// wants for unprocessed input.
#[derive(Debug, Clone)]
pub struct OriginSource {
  content: Tendril,
  source:  Arc<str>,
}

impl OriginSource {
  pub fn new(content: impl Into<Tendril>, source: impl Into<Arc<str>>) -> Self {
    Self {
      content: content.into(),
      source:  source.into(),
    }
  }

  pub fn source_name(&self) -> &str {
    &self.source
  }

  fn lines(&self) -> impl Iterator<Item = &str> {
    split_lines_inclusive(&self.content)
  }
}

impl TextSource for OriginSource {
  fn content(&self) -> Cow<'_, str> {
    Cow::Borrowed(&self.content)
  }

  fn node(&self) -> Node {
    let children = self
      .lines()
      .enumerate()
      .map(|(i, line)| {
        let origin = Origin::new(i + 1, 0, Arc::clone(&self.source));
        Fragment::Node(Node::leaf(Some(origin), line))
      })
      .collect();
    Node::root(children)
  }

  fn chunks(&self) -> ChunkedText {
    let chunks = self
      .lines()
      .enumerate()
      .map(|(i, line)| {
        let origin = Origin::new(i + 1, 0, Arc::clone(&self.source));
        Chunk::new(line, Some(origin))
      })
      .collect();
    ChunkedText::new(chunks)
  }
}

/// Split after every `\n`, keeping the terminator with its line. The final
/// piece may lack a terminator; an empty input yields no lines.
fn split_lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
  let mut rest = text;
  std::iter::from_fn(move || {
    if rest.is_empty() {
      return None;
    }
    let split = match rest.find('\n') {
      Some(pos) => pos + 1,
      None => rest.len(),
    };
    let (line, tail) = rest.split_at(split);
    rest = tail;
    Some(line)
  })
}
