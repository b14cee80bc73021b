//! Core mesh data structures and the deduplication pass.
//!
//! # Overview
//!
//! The pipeline has three stages:
//!
//! 1. A file parser (see [`crate::io`]) produces flat [`Attributes`] arrays
//!    plus per-corner [`IndexTriple`]s.
//! 2. [`Attributes::resolve`] expands the triples into a flat [`Vertex`]
//!    stream, one fully-populated vertex per triangle corner.
//! 3. [`index`] deduplicates the stream into an [`IndexedMesh`]: a vertex
//!    buffer of unique vertices plus an index buffer, ready for GPU upload.
//!
//! Each stage is a pure transformation; invalid input fails in stage 2
//! (out-of-range attribute indices) or earlier, never in stage 3.
//!
//! # Index Types
//!
//! The index buffer is generic over the [`VertexIndex`] trait, so callers
//! can pick `u16`, `u32` (the default), or `u64` elements to match their
//! draw path:
//!
//! ```
//! use crumb::mesh::{index, IndexedMesh, Vertex};
//!
//! let soup = vec![Vertex::from_position([0.0, 0.0, 0.0])];
//! let small: IndexedMesh<u16> = index(&soup).unwrap();
//! let typical: IndexedMesh = index(&soup).unwrap();
//! ```

mod attributes;
mod index;
mod indexer;
mod vertex;

pub use attributes::{Attributes, IndexTriple};
pub use index::VertexIndex;
pub use indexer::{index, index_all, IndexedMesh};
pub use vertex::Vertex;
