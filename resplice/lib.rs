//! A replacement-source engine.
//!
//! Records range replacements and point insertions against an immutable
//! original text and renders the result in three interchangeable modes that
//! all agree on the same edit set:
//!
//! - [`ReplaceSource::render_text`], a flat string;
//! - [`ReplaceSource::render_tree`], a position-annotated fragment tree
//!   suitable for source-map generation;
//! - [`ReplaceSource::render_stream`], a chunked form, spliced as the
//!   content streams through without ever materializing the whole text.
//!
//! The engine decides *how* to splice, never *what*: discovering which
//! ranges to replace, naming assets, hashing and writing files all belong to
//! the caller. Edits may legally start before offset 0 or extend past the
//! end of the content; those are prepended and appended consistently in
//! every mode.
//!
//! ```ignore
//! use resplice::{RawSource, ReplaceSource};
//!
//! let mut source = ReplaceSource::new(RawSource::new("hello world"));
//! source.replace(6, 10, "rust")?;
//! assert_eq!(source.render_text(), "hello rust");
//! ```

pub mod cursor;
pub mod edit;
pub mod engine;
pub mod stream;
pub mod tree;

pub use edit::{
  Edit,
  EditError,
  EditList,
  Result,
};
pub use engine::ReplaceSource;
pub use resplice_core::{
  Chunk,
  ChunkedText,
  Fragment,
  Node,
  Origin,
  OriginSource,
  RawSource,
  Tendril,
  TextSource,
};
