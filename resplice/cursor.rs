//! Per-render traversal state over the ascending-sorted edits.
//!
//! The cursor drives the tree walker: it tracks the next position of
//! interest (the active edit's start while emitting, its end + 1 while
//! suppressing) and flips between states as the walk reaches those
//! positions. It also resolves edits lying entirely outside the content:
//! contiguous before-start edits are flattened into a header list up front,
//! and whatever is left unconsumed after the walk becomes the footer.

use resplice_core::Tendril;

use crate::edit::SortedEdits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
  /// Copying untouched original text.
  Emitting,

  /// Inside a replaced range; original text is dropped.
  Suppressing,

  /// No edits remain; everything left is emitted verbatim.
  Done,
}

#[derive(Debug)]
pub struct EditCursor<'a> {
  edits:    SortedEdits<'a>,
  index:    usize,
  state:    CursorState,
  position: isize,
  value:    Option<&'a Tendril>,
}

impl<'a> EditCursor<'a> {
  pub fn new(edits: SortedEdits<'a>) -> Self {
    let state = if edits.is_empty() {
      CursorState::Done
    } else {
      CursorState::Emitting
    };
    // Initial position in case `header` is never consulted.
    let position = edits.first().map_or(0, |edit| edit.start.max(0));
    Self {
      edits,
      index: 0,
      state,
      position,
      value: None,
    }
  }

  /// Offset the walk should next stop at, clamped to the content start.
  pub fn position(&self) -> isize {
    self.position
  }

  pub fn is_done(&self) -> bool {
    self.state == CursorState::Done
  }

  /// Whether original text at the current position should be copied out.
  /// `Done` emits: past the last edit everything is untouched.
  pub fn is_emitting(&self) -> bool {
    self.state != CursorState::Suppressing
  }

  /// Replacement text captured when the cursor last flipped to
  /// `Suppressing`.
  pub fn value(&self) -> Option<&'a Tendril> {
    self.value
  }

  /// Flip states at the current position of interest and report whether the
  /// cursor is emitting afterwards. At an edit's start this captures the
  /// replacement text and aims for the end; at its end it aims for the next
  /// edit's start, or finishes.
  pub fn advance(&mut self) -> bool {
    match self.state {
      CursorState::Done => true,
      CursorState::Emitting => {
        let edit = self.edits[self.index];
        self.position = (edit.end + 1).max(0);
        self.value = Some(&edit.text);
        self.state = CursorState::Suppressing;
        false
      },
      CursorState::Suppressing => {
        self.index += 1;
        match self.edits.get(self.index) {
          Some(next) => {
            self.position = next.start.max(0);
            self.state = CursorState::Emitting;
          },
          None => self.state = CursorState::Done,
        }
        true
      },
    }
  }

  /// Texts of contiguous edits lying entirely before the content start, to
  /// be prepended before any original text. The last edit whose start is
  /// negative stays inline when nothing after it also starts at or before 0,
  /// so its replacement is still attributed a position during the walk.
  pub fn header(&mut self) -> Vec<&'a Tendril> {
    let mut output = Vec::new();
    while self.state != CursorState::Done {
      let edit = self.edits[self.index];
      self.position = edit.start;
      let next_at_start = self
        .edits
        .get(self.index + 1)
        .is_some_and(|next| next.start <= 0);
      if edit.start < 0 && next_at_start {
        output.push(&edit.text);
        self.index += 1;
      } else {
        break;
      }
    }
    self.position = self.position.max(0);
    output
  }

  /// Texts of all edits not consumed by the walk, i.e. those starting at or
  /// past the end of the content, to be appended after it. A suppression
  /// left open by the walk is closed first.
  pub fn footer(&mut self) -> Vec<&'a Tendril> {
    if self.state == CursorState::Suppressing {
      self.advance();
    }
    if self.state == CursorState::Done {
      Vec::new()
    } else {
      self.edits[self.index..].iter().map(|edit| &edit.text).collect()
    }
  }
}
