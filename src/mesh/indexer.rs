//! Vertex deduplication.
//!
//! Model-file parsers emit a triangle soup: three fully-expanded vertices
//! per triangle, with corners shared between triangles repeated verbatim.
//! [`index`] collapses that soup into a vertex buffer of unique vertices
//! plus an index buffer referencing it, the form GPUs expect for indexed
//! drawing.
//!
//! # Example
//!
//! ```
//! use crumb::mesh::{index, IndexedMesh, Vertex};
//!
//! let soup = vec![
//!     Vertex::from_position([0.0, 0.0, 0.0]),
//!     Vertex::from_position([1.0, 0.0, 0.0]),
//!     Vertex::from_position([0.0, 0.0, 0.0]),
//! ];
//!
//! let mesh: IndexedMesh = index(&soup).unwrap();
//! assert_eq!(mesh.num_vertices(), 2);
//! assert_eq!(mesh.indices(), &[0, 1, 0]);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rayon::prelude::*;

use super::index::VertexIndex;
use super::vertex::Vertex;
use crate::error::{MeshError, Result};

/// A deduplicated mesh: unique vertices plus an index buffer.
///
/// Produced by [`index`]. The vertex buffer holds each distinct vertex
/// once, in order of first occurrence in the input stream; the index
/// buffer has one entry per input vertex and replays the original stream
/// when resolved against the vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedMesh<I: VertexIndex = u32> {
    vertices: Vec<Vertex>,
    indices: Vec<I>,
}

impl<I: VertexIndex> IndexedMesh<I> {
    /// The deduplicated vertex buffer, in first-occurrence order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The index buffer, one entry per input vertex.
    pub fn indices(&self) -> &[I] {
        &self.indices
    }

    /// Number of unique vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices (equals the input stream length).
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Whether the mesh holds no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The vertex buffer as raw bytes, ready for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes, ready for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Fraction of input vertices eliminated by deduplication.
    ///
    /// Returns `0.0` for an empty mesh.
    pub fn dedup_ratio(&self) -> f64 {
        if self.indices.is_empty() {
            return 0.0;
        }
        1.0 - self.vertices.len() as f64 / self.indices.len() as f64
    }

    /// Replay the index buffer against the vertex buffer, reconstructing
    /// the original unindexed stream.
    pub fn reconstruct(&self) -> Vec<Vertex> {
        self.indices
            .iter()
            .map(|&i| self.vertices[i.to_usize()])
            .collect()
    }
}

/// Deduplicate a triangle-soup vertex stream.
///
/// Walks the stream once, in order. The first occurrence of each distinct
/// vertex is appended to the vertex buffer; every occurrence (first or
/// repeat) appends that vertex's buffer position to the index buffer. Two
/// vertices are the same only if all their float components match
/// bit-for-bit; there is no epsilon welding.
///
/// The result is deterministic for a given input order, and replaying the
/// index buffer against the vertex buffer reconstructs the input exactly.
/// The empty stream yields two empty buffers.
///
/// # Errors
///
/// Returns [`MeshError::IndexOverflow`] if the stream contains more unique
/// vertices than the index type `I` can address (only possible for `u16`
/// and `u32` buffers).
///
/// # Example
///
/// ```
/// use crumb::mesh::{index, IndexedMesh, Vertex};
///
/// let a = Vertex::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
/// let b = Vertex::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
///
/// // A quad split into two triangles shares two corners.
/// let mesh: IndexedMesh<u16> = index(&[a, b, a, b, a, b]).unwrap();
/// assert_eq!(mesh.num_vertices(), 2);
/// assert_eq!(mesh.num_indices(), 6);
/// ```
pub fn index<I: VertexIndex>(stream: &[Vertex]) -> Result<IndexedMesh<I>> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<I> = Vec::with_capacity(stream.len());
    let mut unique: HashMap<Vertex, I> = HashMap::new();

    for &vertex in stream {
        let idx = match unique.entry(vertex) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                if vertices.len() > I::MAX_INDEX {
                    return Err(MeshError::IndexOverflow {
                        unique: vertices.len() + 1,
                        max: I::MAX_INDEX,
                    });
                }
                let idx = I::from_usize(vertices.len());
                vertices.push(vertex);
                *entry.insert(idx)
            }
        };
        indices.push(idx);
    }

    Ok(IndexedMesh { vertices, indices })
}

/// Deduplicate several independent vertex streams in parallel.
///
/// Each stream gets its own lookup table, so the calls share no state;
/// the output order matches the input order. Fails if any single stream
/// fails.
pub fn index_all<I: VertexIndex>(streams: &[Vec<Vertex>]) -> Result<Vec<IndexedMesh<I>>> {
    streams
        .par_iter()
        .map(|stream| index(stream))
        .collect()
}
