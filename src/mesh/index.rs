//! Index types for the index buffer.
//!
//! The index buffer is generic over its element type so callers can match
//! the width their GPU draw path expects (u16 for small meshes, u32 for
//! typical meshes, u64 for massive ones).

use std::fmt::Debug;
use std::hash::Hash;

use bytemuck::Pod;

/// Trait for types that can be used as index-buffer elements.
///
/// This trait is implemented for `u16`, `u32`, and `u64`. The `Pod` bound
/// allows the finished index buffer to be viewed as raw bytes for GPU
/// upload.
pub trait VertexIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Pod + Send + Sync + 'static
{
    /// The largest vertex position this index type can address.
    const MAX_INDEX: usize;

    /// Convert from usize to this index type.
    ///
    /// Callers must check against [`Self::MAX_INDEX`] first; the conversion
    /// itself only `debug_assert`s.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;
}

impl VertexIndex for u16 {
    const MAX_INDEX: usize = u16::MAX as usize;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX_INDEX, "index {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl VertexIndex for u32 {
    const MAX_INDEX: usize = u32::MAX as usize;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX_INDEX, "index {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl VertexIndex for u64 {
    // A vertex buffer is addressed by usize, so u64 can always hold any
    // position that fits in memory.
    const MAX_INDEX: usize = usize::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}
