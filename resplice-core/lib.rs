//! Content model for the replacement-source engine: provenance-carrying
//! fragment trees, chunked text, and the [`TextSource`] capability that
//! original texts expose to the engine.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod chars;
pub mod chunk;
pub mod node;
pub mod origin;
pub mod source;

pub use chunk::{
  Chunk,
  ChunkedText,
};
pub use node::{
  Fragment,
  Node,
};
pub use origin::Origin;
pub use source::{
  OriginSource,
  RawSource,
  TextSource,
};

pub type Tendril = SmartString<LazyCompact>;
