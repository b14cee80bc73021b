//! Error types for crumb.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while loading or indexing a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Syntax error in a mesh file.
    #[error("parse error in {path} at line {line}: {message}")]
    ParseError {
        /// The file path.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        /// Error message.
        message: String,
    },

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// A face corner references an attribute index outside the attribute array.
    #[error("corner {corner} references {attribute} index {index}, but only {count} are defined")]
    AttributeIndexOutOfRange {
        /// The attribute name ("position", "normal", or "texcoord").
        attribute: &'static str,
        /// The corner position in the face stream.
        corner: usize,
        /// The out-of-range index.
        index: usize,
        /// Number of attribute entries actually defined.
        count: usize,
    },

    /// The mesh has more unique vertices than the chosen index type can address.
    #[error("mesh has {unique} unique vertices, exceeding index capacity {max}")]
    IndexOverflow {
        /// Number of unique vertices encountered so far.
        unique: usize,
        /// Largest index representable by the chosen index type.
        max: usize,
    },
}
