//! Attribute arrays and per-corner index triples.
//!
//! Model-file formats like Wavefront OBJ store geometry as flat attribute
//! arrays (positions, normals, texture coordinates) referenced by
//! per-corner index triples, so a corner can reuse a position with a
//! different normal. [`Attributes::resolve`] expands that representation
//! into the flat [`Vertex`] stream that [`index()`](super::index()) consumes,
//! validating every index along the way.

use super::vertex::Vertex;
use crate::error::{MeshError, Result};

/// Flat attribute arrays as emitted by a model-file parser.
///
/// Positions are stored three floats per entry, normals three, texture
/// coordinates two, matching the OBJ data layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// Flat position array, 3 floats per entry.
    pub positions: Vec<f32>,
    /// Flat normal array, 3 floats per entry.
    pub normals: Vec<f32>,
    /// Flat texture-coordinate array, 2 floats per entry.
    pub texcoords: Vec<f32>,
}

/// Per-corner attribute indices.
///
/// The position index is mandatory; normal and texture-coordinate indices
/// are optional because OBJ faces may omit them (`f 1 2 3` or `f 1//4 ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTriple {
    /// Index into the position array.
    pub position: usize,
    /// Index into the normal array, if the corner has one.
    pub normal: Option<usize>,
    /// Index into the texture-coordinate array, if the corner has one.
    pub texcoord: Option<usize>,
}

impl IndexTriple {
    /// A corner referencing only a position.
    pub fn position_only(position: usize) -> Self {
        IndexTriple {
            position,
            normal: None,
            texcoord: None,
        }
    }
}

impl Attributes {
    /// Number of position entries.
    pub fn num_positions(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of normal entries.
    pub fn num_normals(&self) -> usize {
        self.normals.len() / 3
    }

    /// Number of texture-coordinate entries.
    pub fn num_texcoords(&self) -> usize {
        self.texcoords.len() / 2
    }

    /// Expand per-corner index triples into a flat vertex stream.
    ///
    /// Corners with no normal or texture-coordinate index get the zero
    /// vector for that attribute, so two corners that omit an attribute
    /// still deduplicate against each other downstream.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::AttributeIndexOutOfRange`] if any triple
    /// references an attribute entry that does not exist. Malformed models
    /// fail here, before indexing ever runs.
    ///
    /// # Example
    ///
    /// ```
    /// use crumb::mesh::{Attributes, IndexTriple};
    ///
    /// let attributes = Attributes {
    ///     positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    ///     normals: vec![],
    ///     texcoords: vec![],
    /// };
    /// let corners = [IndexTriple::position_only(0), IndexTriple::position_only(1)];
    ///
    /// let stream = attributes.resolve(&corners).unwrap();
    /// assert_eq!(stream.len(), 2);
    /// assert_eq!(stream[1].position, [1.0, 0.0, 0.0]);
    /// assert_eq!(stream[1].normal, [0.0, 0.0, 0.0]);
    /// ```
    pub fn resolve(&self, corners: &[IndexTriple]) -> Result<Vec<Vertex>> {
        let mut stream = Vec::with_capacity(corners.len());

        for (corner, triple) in corners.iter().enumerate() {
            let mut vertex = Vertex::default();

            if triple.position >= self.num_positions() {
                return Err(MeshError::AttributeIndexOutOfRange {
                    attribute: "position",
                    corner,
                    index: triple.position,
                    count: self.num_positions(),
                });
            }
            vertex.position = [
                self.positions[3 * triple.position],
                self.positions[3 * triple.position + 1],
                self.positions[3 * triple.position + 2],
            ];

            if let Some(ni) = triple.normal {
                if ni >= self.num_normals() {
                    return Err(MeshError::AttributeIndexOutOfRange {
                        attribute: "normal",
                        corner,
                        index: ni,
                        count: self.num_normals(),
                    });
                }
                vertex.normal = [
                    self.normals[3 * ni],
                    self.normals[3 * ni + 1],
                    self.normals[3 * ni + 2],
                ];
            }

            if let Some(ti) = triple.texcoord {
                if ti >= self.num_texcoords() {
                    return Err(MeshError::AttributeIndexOutOfRange {
                        attribute: "texcoord",
                        corner,
                        index: ti,
                        count: self.num_texcoords(),
                    });
                }
                vertex.texcoord = [self.texcoords[2 * ti], self.texcoords[2 * ti + 1]];
            }

            stream.push(vertex);
        }

        Ok(stream)
    }
}
