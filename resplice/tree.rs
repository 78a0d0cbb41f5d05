//! Tree-mode splicing.
//!
//! Rebuilds a source's fragment tree under an [`EditCursor`] so that every
//! unmodified character keeps the origin of the leaf it came from, while
//! replacement text appears as synthetic leaves attributed to the enclosing
//! fragment's origin. A source map generated from the output therefore
//! preserves provenance for everything the edits left alone.

use resplice_core::{
  Fragment,
  Node,
  Origin,
  Tendril,
  chars::{
    len_chars,
    split_at_char,
  },
};

use crate::cursor::EditCursor;

/// Apply the cursor's edits to `root`, producing a new origin-less root
/// node: header texts first, then the rebuilt tree, then footer texts.
pub fn splice_tree(root: &Node, cursor: &mut EditCursor<'_>) -> Node {
  let mut output = Vec::new();
  for text in cursor.header() {
    output.push(Fragment::Raw(text.clone()));
  }
  splice_node(root, cursor, &mut output, 0);
  for text in cursor.footer() {
    output.push(Fragment::Raw(text.clone()));
  }
  Node::root(output)
}

/// Walk one node's children in document order, threading the absolute char
/// offset through. If all of a node's children were raw text, the rebuilt
/// pieces splice directly into the parent output instead of keeping a
/// wrapper node around them.
fn splice_node(
  node: &Node,
  cursor: &mut EditCursor<'_>,
  output: &mut Vec<Fragment>,
  mut position: usize,
) -> usize {
  let mut children = Vec::new();
  let mut all_raw = true;

  for child in &node.children {
    match child {
      Fragment::Raw(text) => {
        position = splice_text(&mut children, cursor, text, position, node.origin.as_ref());
      },
      Fragment::Node(inner) => {
        position = splice_node(inner, cursor, &mut children, position);
        all_raw = false;
      },
    }
  }

  if !children.is_empty() {
    if all_raw {
      output.append(&mut children);
    } else {
      output.push(Fragment::Node(Node {
        origin: node.origin.clone(),
        children,
      }));
    }
  }
  position
}

/// Splice one raw run. There may be several edits inside a single run, so
/// this loops over the remainder until the cursor points past it; an edit
/// spanning past the run keeps the cursor suppressing into the next one.
fn splice_text(
  output: &mut Vec<Fragment>,
  cursor: &mut EditCursor<'_>,
  text: &str,
  start_position: usize,
  origin: Option<&Origin>,
) -> usize {
  let mut rest = text;
  let mut position = start_position;
  let mut len = len_chars(rest) as isize;

  loop {
    let mut split = cursor.position() - position as isize;
    // Overlapping edits can put the next boundary before text already
    // consumed; remember the shortfall for the column adjustment below.
    let mut overlap = 0;
    if split < 0 {
      overlap = split;
      split = 0;
    }

    if split >= len || cursor.is_done() {
      if cursor.is_emitting() && !rest.is_empty() {
        push_piece(output, origin, rest);
      }
      return position + len as usize;
    }

    let emitting = cursor.advance();
    let (before, after) = split_at_char(rest, split as usize);
    if !emitting {
      // Start of a replaced range: the untouched prefix goes out under the
      // enclosing origin, then the replacement text once. When the cursor
      // just found an end instead, the prefix is the suppressed span and is
      // dropped.
      if !before.is_empty() {
        push_piece(output, origin, before);
      }
      if let Some(value) = cursor.value() {
        if !value.is_empty() {
          match origin {
            Some(origin) => {
              let shifted = origin.shift_column(overlap);
              output.push(Fragment::Node(Node::leaf(Some(shifted), value.clone())));
            },
            None => output.push(Fragment::Raw(value.clone())),
          }
        }
      }
    }

    rest = after;
    position += split as usize;
    len -= split;
  }
}

fn push_piece(output: &mut Vec<Fragment>, origin: Option<&Origin>, text: &str) {
  match origin {
    Some(origin) => output.push(Fragment::Node(Node::leaf(Some(origin.clone()), text))),
    None => output.push(Fragment::Raw(Tendril::from(text))),
  }
}
