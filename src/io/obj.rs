//! Wavefront OBJ format support.
//!
//! This module parses OBJ geometry (`v`, `vn`, `vt`, `f` records) into
//! attribute arrays and per-corner index triples, and writes deduplicated
//! meshes back out. Material libraries, groups, and smoothing groups are
//! ignored; only geometry is read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::{index, Attributes, IndexTriple, IndexedMesh, VertexIndex};

/// Load an OBJ file as a deduplicated mesh.
///
/// Parses the file, resolves its index triples into a flat vertex stream
/// (missing normals and texture coordinates become zero vectors), and runs
/// the deduplication pass. Any syntax or out-of-range-index failure
/// surfaces here, before indexing.
///
/// # Example
///
/// ```no_run
/// use crumb::io::obj;
/// use crumb::mesh::IndexedMesh;
///
/// let mesh: IndexedMesh = obj::load("bunny.obj").unwrap();
/// println!("{} unique vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>, I: VertexIndex>(path: P) -> Result<IndexedMesh<I>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (attributes, corners) = parse(BufReader::new(file), path)?;
    let stream = attributes.resolve(&corners)?;
    index(&stream)
}

/// Parse OBJ geometry into attribute arrays and per-corner index triples.
///
/// Faces with more than three corners are fan-triangulated; negative OBJ
/// indices (relative to the attributes defined so far) are resolved to
/// absolute 0-based indices. `path` is used only for error reporting.
pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<(Attributes, Vec<IndexTriple>)> {
    let mut attributes = Attributes::default();
    let mut corners: Vec<IndexTriple> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_no + 1;

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let [x, y, z] = parse_floats(&mut tokens, path, line_no, "v")?;
                attributes.positions.extend_from_slice(&[x, y, z]);
            }
            "vn" => {
                let [x, y, z] = parse_floats(&mut tokens, path, line_no, "vn")?;
                attributes.normals.extend_from_slice(&[x, y, z]);
            }
            "vt" => {
                // A third (w) component is legal in OBJ and ignored here.
                let [u, v] = parse_floats(&mut tokens, path, line_no, "vt")?;
                attributes.texcoords.extend_from_slice(&[u, v]);
            }
            "f" => {
                let face: Vec<IndexTriple> = tokens
                    .map(|corner| parse_corner(corner, &attributes, path, line_no))
                    .collect::<Result<_>>()?;
                if face.len() < 3 {
                    return Err(MeshError::ParseError {
                        path: path.to_path_buf(),
                        line: line_no,
                        message: format!("face has {} corners, need at least 3", face.len()),
                    });
                }
                // Fan triangulation for polygons.
                for i in 1..face.len() - 1 {
                    corners.push(face[0]);
                    corners.push(face[i]);
                    corners.push(face[i + 1]);
                }
            }
            // Comments, object/group names, materials, smoothing groups.
            _ => {}
        }
    }

    Ok((attributes, corners))
}

/// Parse exactly N float tokens from a record.
fn parse_floats<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    line: usize,
    keyword: &str,
) -> Result<[f32; N]> {
    let mut out = [0.0f32; N];
    for slot in out.iter_mut() {
        let token = tokens.next().ok_or_else(|| MeshError::ParseError {
            path: path.to_path_buf(),
            line,
            message: format!("'{}' record needs {} components", keyword, N),
        })?;
        *slot = token.parse().map_err(|_| MeshError::ParseError {
            path: path.to_path_buf(),
            line,
            message: format!("invalid float '{}' in '{}' record", token, keyword),
        })?;
    }
    Ok(out)
}

/// Parse one face corner: `p`, `p/t`, `p//n`, or `p/t/n`.
fn parse_corner(
    corner: &str,
    attributes: &Attributes,
    path: &Path,
    line: usize,
) -> Result<IndexTriple> {
    let mut fields = corner.split('/');

    let position = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| MeshError::ParseError {
            path: path.to_path_buf(),
            line,
            message: format!("corner '{}' has no position index", corner),
        })
        .and_then(|f| resolve_index(f, attributes.num_positions(), corner, path, line))?;

    let texcoord = match fields.next() {
        None | Some("") => None,
        Some(f) => Some(resolve_index(f, attributes.num_texcoords(), corner, path, line)?),
    };

    let normal = match fields.next() {
        None | Some("") => None,
        Some(f) => Some(resolve_index(f, attributes.num_normals(), corner, path, line)?),
    };

    Ok(IndexTriple {
        position,
        normal,
        texcoord,
    })
}

/// Resolve one OBJ index field to an absolute 0-based index.
///
/// OBJ indices are 1-based; negative values count back from the most
/// recently defined attribute. Range checking of the resolved index is
/// left to [`Attributes::resolve`].
fn resolve_index(
    field: &str,
    count: usize,
    corner: &str,
    path: &Path,
    line: usize,
) -> Result<usize> {
    let raw: i64 = field.parse().map_err(|_| MeshError::ParseError {
        path: path.to_path_buf(),
        line,
        message: format!("invalid index '{}' in corner '{}'", field, corner),
    })?;

    let resolved = if raw > 0 {
        Some(raw as usize - 1)
    } else if raw < 0 {
        count.checked_sub(raw.unsigned_abs() as usize)
    } else {
        None
    };

    resolved.ok_or_else(|| MeshError::ParseError {
        path: path.to_path_buf(),
        line,
        message: format!("index '{}' in corner '{}' is out of range", field, corner),
    })
}

/// Save a deduplicated triangle mesh to an OBJ file.
///
/// Every unique vertex is written once as a `v`/`vt`/`vn` block, and each
/// triangle becomes an `f` record whose corners reference that block, so
/// the file round-trips through [`load`] without regaining duplicates.
///
/// # Errors
///
/// Fails with [`MeshError::SaveError`] if the index buffer length is not
/// a multiple of three.
pub fn save<P: AsRef<Path>, I: VertexIndex>(mesh: &IndexedMesh<I>, path: P) -> Result<()> {
    let path = path.as_ref();

    if mesh.num_indices() % 3 != 0 {
        return Err(MeshError::SaveError {
            path: path.to_path_buf(),
            message: format!(
                "index buffer length {} is not a multiple of 3",
                mesh.num_indices()
            ),
        });
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Generated by crumb")?;
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.position[0], v.position[1], v.position[2])?;
        writeln!(writer, "vt {} {}", v.texcoord[0], v.texcoord[1])?;
        writeln!(writer, "vn {} {} {}", v.normal[0], v.normal[1], v.normal[2])?;
    }

    for tri in mesh.indices().chunks(3) {
        write!(writer, "f")?;
        for &i in tri {
            let i = i.to_usize() + 1;
            write!(writer, " {}/{}/{}", i, i, i)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn parse_str(source: &str) -> Result<(Attributes, Vec<IndexTriple>)> {
        parse(Cursor::new(source), &PathBuf::from("test.obj"))
    }

    #[test]
    fn test_parse_triangle() {
        let (attributes, corners) = parse_str(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();

        assert_eq!(attributes.num_positions(), 3);
        assert_eq!(corners.len(), 3);
        assert_eq!(corners[0], IndexTriple::position_only(0));
        assert_eq!(corners[2], IndexTriple::position_only(2));
    }

    #[test]
    fn test_parse_full_corners() {
        let (_, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1\n",
        )
        .unwrap();

        assert_eq!(
            corners[1],
            IndexTriple {
                position: 1,
                normal: Some(0),
                texcoord: Some(1),
            }
        );
    }

    #[test]
    fn test_parse_position_and_normal_only() {
        let (_, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n",
        )
        .unwrap();

        assert_eq!(
            corners[0],
            IndexTriple {
                position: 0,
                normal: Some(0),
                texcoord: None,
            }
        );
    }

    #[test]
    fn test_fan_triangulation() {
        let (_, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             f 1 2 3 4\n",
        )
        .unwrap();

        // One quad becomes two triangles: (0,1,2) and (0,2,3).
        assert_eq!(corners.len(), 6);
        assert_eq!(corners[0].position, 0);
        assert_eq!(corners[3].position, 0);
        assert_eq!(corners[4].position, 2);
        assert_eq!(corners[5].position, 3);
    }

    #[test]
    fn test_negative_indices() {
        let (_, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             f -3 -2 -1\n",
        )
        .unwrap();

        assert_eq!(corners[0].position, 0);
        assert_eq!(corners[1].position, 1);
        assert_eq!(corners[2].position, 2);
    }

    #[test]
    fn test_comments_and_unknown_records_ignored() {
        let (attributes, corners) = parse_str(
            "# a comment\n\
             o bunny\n\
             usemtl fur\n\
             s off\n\
             v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();

        assert_eq!(attributes.num_positions(), 3);
        assert_eq!(corners.len(), 3);
    }

    #[test]
    fn test_malformed_float() {
        let err = parse_str("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, MeshError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_short_vertex_record() {
        let err = parse_str("v 0 0\n").unwrap_err();
        assert!(matches!(err, MeshError::ParseError { .. }));
    }

    #[test]
    fn test_face_with_too_few_corners() {
        let err = parse_str("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, MeshError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_negative_index_out_of_range() {
        let err = parse_str("v 0 0 0\nf -2 -1 -1\n").unwrap_err();
        assert!(matches!(err, MeshError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse_str("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, MeshError::ParseError { .. }));
    }

    #[test]
    fn test_out_of_range_index_fails_in_resolve() {
        // The parser accepts forward references; resolve() rejects them.
        let (attributes, corners) = parse_str("v 0 0 0\nf 1 2 3\n").unwrap();
        let err = attributes.resolve(&corners).unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeIndexOutOfRange {
                attribute: "position",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_resolve_index_pipeline() {
        // Two triangles sharing an edge: 6 corners, 4 unique vertices.
        let (attributes, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\n\
             vn 0 0 1\n\
             f 1//1 2//1 3//1\n\
             f 2//1 4//1 3//1\n",
        )
        .unwrap();

        let stream = attributes.resolve(&corners).unwrap();
        let mesh: IndexedMesh = index(&stream).unwrap();

        assert_eq!(mesh.num_indices(), 6);
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.reconstruct(), stream);
    }

    #[test]
    fn test_same_position_different_normal_stays_distinct() {
        let (attributes, corners) = parse_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\nvn 0 1 0\n\
             f 1//1 2//1 3//1\n\
             f 1//2 2//2 3//2\n",
        )
        .unwrap();

        let stream = attributes.resolve(&corners).unwrap();
        let mesh: IndexedMesh = index(&stream).unwrap();

        // Shared positions but different normals: nothing collapses.
        assert_eq!(mesh.num_vertices(), 6);
    }
}
