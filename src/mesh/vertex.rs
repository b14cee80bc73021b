//! The interleaved vertex type used as the deduplication key.
//!
//! A [`Vertex`] is one corner of a triangle as emitted by a model-file
//! parser: position, normal, and texture coordinate, interleaved and laid
//! out for direct GPU upload. Equality and hashing compare the raw bit
//! patterns of every float component, so two vertices are "the same" only
//! if a file produced them byte-for-byte identically.

use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point2, Point3, Vector3};

/// An interleaved mesh vertex: position, normal, and texture coordinate.
///
/// The layout is `#[repr(C)]` with no padding (32 bytes), so a slice of
/// vertices can be uploaded to the GPU as-is via [`bytemuck::cast_slice`].
///
/// Equality is exact: every component is compared bit-for-bit, with no
/// epsilon tolerance. This means `-0.0` and `0.0` are *different* vertices,
/// and a NaN component equals itself if the bit patterns match. Welding
/// nearly-equal vertices is deliberately out of scope; only corners that
/// originate from the same attribute data collapse together.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Vertex normal, or the zero vector if the source model defines none.
    pub normal: [f32; 3],
    /// Texture coordinate, or the zero vector if the source model defines none.
    pub texcoord: [f32; 2],
}

impl Vertex {
    /// Create a vertex from raw attribute arrays.
    pub fn new(position: [f32; 3], normal: [f32; 3], texcoord: [f32; 2]) -> Self {
        Vertex {
            position,
            normal,
            texcoord,
        }
    }

    /// Create a vertex with only a position; normal and texcoord are zero.
    pub fn from_position(position: [f32; 3]) -> Self {
        Vertex {
            position,
            ..Vertex::default()
        }
    }

    /// Create a vertex from nalgebra types.
    pub fn from_parts(position: Point3<f32>, normal: Vector3<f32>, texcoord: Point2<f32>) -> Self {
        Vertex {
            position: position.coords.into(),
            normal: normal.into(),
            texcoord: texcoord.coords.into(),
        }
    }

    /// The position as an nalgebra point.
    pub fn position_point(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// The normal as an nalgebra vector.
    pub fn normal_vector(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }

    /// The texture coordinate as an nalgebra point.
    pub fn texcoord_point(&self) -> Point2<f32> {
        Point2::from(self.texcoord)
    }

    /// All eight float components as raw bit patterns, in field order.
    ///
    /// This is the key used for equality and hashing.
    fn component_bits(&self) -> [u32; 8] {
        [
            self.position[0].to_bits(),
            self.position[1].to_bits(),
            self.position[2].to_bits(),
            self.normal[0].to_bits(),
            self.normal[1].to_bits(),
            self.normal[2].to_bits(),
            self.texcoord[0].to_bits(),
            self.texcoord[1].to_bits(),
        ]
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.component_bits() == other.component_bits()
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.component_bits().hash(state);
    }
}
