//! Pure transformations used by the fetcher.
//!
//! Nothing in this module performs I/O.

mod glyph;

pub use glyph::decode_glyph;
