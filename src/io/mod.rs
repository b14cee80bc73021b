//! Mesh file I/O.
//!
//! This module provides functions for loading unindexed model files as
//! deduplicated meshes, and for writing those meshes back out.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | Wavefront OBJ | `.obj` | ✓ | ✓ | Geometry only, no materials |
//!
//! # Usage
//!
//! The easiest way to load and save meshes is using the automatic format
//! detection:
//!
//! ```no_run
//! use crumb::io::{load, save};
//! use crumb::mesh::IndexedMesh;
//!
//! // Load with automatic format detection
//! let mesh: IndexedMesh = load("model.obj").unwrap();
//!
//! // Save with automatic format detection
//! save(&mesh, "deduped.obj").unwrap();
//! ```
//!
//! You can also use format-specific functions:
//!
//! ```no_run
//! use crumb::io::obj;
//! use crumb::mesh::IndexedMesh;
//!
//! let mesh: IndexedMesh = obj::load("model.obj").unwrap();
//! obj::save(&mesh, "deduped.obj").unwrap();
//! ```

pub mod obj;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::{IndexedMesh, VertexIndex};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Example
///
/// ```no_run
/// use crumb::io::load;
/// use crumb::mesh::IndexedMesh;
///
/// let mesh: IndexedMesh = load("model.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>, I: VertexIndex>(path: P) -> Result<IndexedMesh<I>> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Obj => obj::load(path),
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Example
///
/// ```no_run
/// use crumb::io::save;
/// use crumb::mesh::{index, IndexedMesh};
///
/// let mesh: IndexedMesh = index(&[]).unwrap();
/// save(&mesh, "output.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>, I: VertexIndex>(mesh: &IndexedMesh<I>, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Obj => obj::save(mesh, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("obj"), Some(Format::Obj));
        assert_eq!(Format::from_extension("OBJ"), Some(Format::Obj));
        assert_eq!(Format::from_extension("stl"), None);
        assert_eq!(Format::from_path("models/bunny.obj"), Some(Format::Obj));
        assert_eq!(Format::from_path("models/bunny"), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let result: Result<IndexedMesh> = load("mesh.xyz");
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedFormat { .. })
        ));
    }
}
