//! Benchmarks for the three render modes.
//!
//! Run with: `cargo bench -p resplice --bench splice`

use divan::{
  Bencher,
  black_box,
};
use resplice::{
  OriginSource,
  RawSource,
  ReplaceSource,
  TextSource,
};

fn main() {
  divan::main();
}

fn make_ascii_text(size: usize) -> String {
  let line = "The quick brown fox jumps over the lazy dog.\n";
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  s.truncate(size);
  s
}

fn clamp_count(len: usize, count: usize, span: usize) -> usize {
  let max = if span == 0 { len } else { len / (span + 1) };
  count.min(max.max(1))
}

fn make_engine<S: TextSource>(source: S, count: usize, span: usize) -> ReplaceSource<S> {
  let len = source.content().chars().count();
  let count = clamp_count(len, count, span);
  let step = len / (count + 1);
  let mut engine = ReplaceSource::new(source);

  for i in 0..count {
    let start = (i + 1) * step;
    let end = (start + span).min(len);
    engine
      .replace(start as isize, end as isize - 1, "xyz")
      .unwrap();
  }

  engine
}

const SIZE: usize = 100 * 1024;
const SPAN: usize = 3;

mod render_text {
  use super::*;

  #[divan::bench(args = [1, 8, 64])]
  fn flat(bencher: Bencher, count: usize) {
    let engine = make_engine(RawSource::new(make_ascii_text(SIZE)), count, SPAN);

    bencher.bench(|| black_box(black_box(&engine).render_text()));
  }
}

mod render_tree {
  use super::*;

  #[divan::bench(args = [1, 8, 64])]
  fn per_line_origins(bencher: Bencher, count: usize) {
    let source = OriginSource::new(make_ascii_text(SIZE), "bench.txt");
    let engine = make_engine(source, count, SPAN);

    bencher.bench(|| black_box(black_box(&engine).render_tree()));
  }
}

mod render_stream {
  use super::*;

  #[divan::bench(args = [1, 8, 64])]
  fn per_line_chunks(bencher: Bencher, count: usize) {
    let source = OriginSource::new(make_ascii_text(SIZE), "bench.txt");
    let engine = make_engine(source, count, SPAN);

    bencher.bench(|| black_box(black_box(&engine).render_stream()));
  }
}
