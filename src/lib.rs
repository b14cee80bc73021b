//! # Crumb
//!
//! Triangle-soup vertex indexing for GPU mesh upload.
//!
//! Model-file parsers hand back an unindexed triangle soup: three
//! fully-expanded vertices per triangle, with every shared corner repeated.
//! Crumb collapses that soup into a deduplicated vertex buffer plus an
//! index buffer referencing it, the compact form indexed drawing expects.
//! Deduplication is exact: two vertices collapse only when every float
//! component matches bit-for-bit, so the pass never alters geometry.
//!
//! ## Features
//!
//! - **Single-pass deduplication**: first-occurrence order, expected O(n)
//! - **Flexible index width**: u16, u32, or u64 index buffers
//! - **GPU-ready layout**: `#[repr(C)]` interleaved vertices, raw byte views
//! - **OBJ front-end**: load unindexed OBJ files straight into indexed form
//!
//! ## Quick Start
//!
//! ```no_run
//! use crumb::prelude::*;
//!
//! // Load an OBJ file; parsing, validation, and deduplication run in order.
//! let mesh: IndexedMesh = crumb::io::load("bunny.obj").unwrap();
//!
//! println!("corners: {}", mesh.num_indices());
//! println!("unique vertices: {}", mesh.num_vertices());
//! println!("removed: {:.1}%", mesh.dedup_ratio() * 100.0);
//!
//! // Flat byte views, ready for vertex/index buffer upload.
//! let _vertex_data = mesh.vertex_bytes();
//! let _index_data = mesh.index_bytes();
//! ```
//!
//! ## Indexing a Stream Directly
//!
//! ```
//! use crumb::prelude::*;
//!
//! let a = Vertex::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
//! let b = Vertex::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
//! let c = Vertex::new([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
//! let d = Vertex::new([1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]);
//!
//! // A quad as two triangles: corners b and c appear twice.
//! let soup = vec![a, b, c, b, d, c];
//!
//! let mesh: IndexedMesh = index(&soup).unwrap();
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.indices(), &[0, 1, 2, 1, 3, 2]);
//! assert_eq!(mesh.reconstruct(), soup);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use crumb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        index, index_all, Attributes, IndexTriple, IndexedMesh, Vertex, VertexIndex,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_attribute_to_gpu_pipeline() {
        // A unit square: 4 positions, 1 normal, quad split into 2 triangles.
        let attributes = Attributes {
            positions: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
            normals: vec![0.0, 0.0, 1.0],
            texcoords: vec![],
        };
        let corner = |p| IndexTriple {
            position: p,
            normal: Some(0),
            texcoord: None,
        };
        let corners = [
            corner(0), corner(1), corner(2), //
            corner(0), corner(2), corner(3),
        ];

        let stream = attributes.resolve(&corners).unwrap();
        let mesh: IndexedMesh = index(&stream).unwrap();

        // Two corners are shared between the triangles.
        assert_eq!(mesh.num_indices(), 6);
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.reconstruct(), stream);

        // 4 vertices of 32 bytes, 6 indices of 4 bytes.
        assert_eq!(mesh.vertex_bytes().len(), 128);
        assert_eq!(mesh.index_bytes().len(), 24);
    }
}
