//! Position-annotated fragment trees.
//!
//! A [`Node`] is an ordered sequence of child fragments, optionally tagged
//! with the [`Origin`] its text came from. Raw children carry no provenance
//! of their own: a map encoder attributes them to the enclosing node's
//! origin. The engine rebuilds these trees when rendering in tree mode so
//! that every unmodified character keeps its provenance while replaced
//! ranges stay synthetic.

use crate::{
  Origin,
  Tendril,
};

/// One child of a [`Node`]: either plain text or a nested node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
  Raw(Tendril),
  Node(Node),
}

impl Fragment {
  pub fn raw(text: impl Into<Tendril>) -> Self {
    Fragment::Raw(text.into())
  }

  pub fn len_chars(&self) -> usize {
    match self {
      Fragment::Raw(s) => s.chars().count(),
      Fragment::Node(n) => n.len_chars(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
  pub origin:   Option<Origin>,
  pub children: Vec<Fragment>,
}

impl Node {
  /// A leaf: a single run of text under one origin.
  pub fn leaf(origin: Option<Origin>, text: impl Into<Tendril>) -> Self {
    Self {
      origin,
      children: vec![Fragment::Raw(text.into())],
    }
  }

  /// An origin-less interior node.
  pub fn root(children: Vec<Fragment>) -> Self {
    Self {
      origin: None,
      children,
    }
  }

  pub fn len_chars(&self) -> usize {
    self.children.iter().map(Fragment::len_chars).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.children.is_empty()
  }

  /// Document-order concatenation of all leaf text.
  pub fn flatten(&self) -> String {
    let mut out = String::new();
    self.write_into(&mut out);
    out
  }

  fn write_into(&self, out: &mut String) {
    for child in &self.children {
      match child {
        Fragment::Raw(s) => out.push_str(s),
        Fragment::Node(n) => n.write_into(out),
      }
    }
  }

  /// Visit every raw run in document order together with the origin of its
  /// enclosing node. This is the accessor a source-map encoder consumes;
  /// encoding the map itself is the collaborator's job.
  pub fn for_each_leaf<F>(&self, mut f: F)
  where
    F: FnMut(&str, Option<&Origin>),
  {
    self.visit_leaves(&mut f);
  }

  fn visit_leaves<F>(&self, f: &mut F)
  where
    F: FnMut(&str, Option<&Origin>),
  {
    for child in &self.children {
      match child {
        Fragment::Raw(s) => f(s, self.origin.as_ref()),
        Fragment::Node(n) => n.visit_leaves(f),
      }
    }
  }
}
