//! Wavefront OBJ model loading
//!
//! Supports the subset the scene models use: positions, normals, and faces.
//! Faces with more than three vertices are triangulated as fans.

use crate::assets::AssetError;
use crate::render::{Mesh, Vertex};
use std::fs;
use std::path::Path;

/// Load an OBJ file into a mesh
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, AssetError> {
    let path = path.as_ref();
    log::debug!("Loading model from {:?}", path);
    let text = fs::read_to_string(path)?;
    let mesh = parse_obj(&text)?;
    log::info!(
        "Loaded model {:?}: {} vertices, {} triangles",
        path,
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ source text into a mesh
pub fn parse_obj(text: &str) -> Result<Mesh, AssetError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => positions.push(parse_vec3(parts, line_no)?),
            Some("vn") => normals.push(parse_vec3(parts, line_no)?),
            Some("f") => {
                let corners: Vec<&str> = parts.collect();
                if corners.len() < 3 {
                    return Err(AssetError::Parse(format!(
                        "line {}: face needs at least 3 vertices",
                        line_no + 1
                    )));
                }
                let mut face: Vec<u32> = Vec::with_capacity(corners.len());
                for corner in corners {
                    face.push(push_corner(
                        corner,
                        &positions,
                        &normals,
                        &mut vertices,
                        line_no,
                    )?);
                }
                // Fan triangulation
                for i in 1..face.len() - 1 {
                    indices.push(face[0]);
                    indices.push(face[i]);
                    indices.push(face[i + 1]);
                }
            }
            // vt, o, g, s, usemtl, mtllib carry no geometry we use
            _ => {}
        }
    }

    if indices.is_empty() {
        return Err(AssetError::Parse("no faces found".into()));
    }
    Ok(Mesh::new(vertices, indices))
}

fn parse_vec3<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<[f32; 3], AssetError> {
    let mut out = [0.0f32; 3];
    for slot in &mut out {
        let token = parts.next().ok_or_else(|| {
            AssetError::Parse(format!("line {}: expected 3 components", line_no + 1))
        })?;
        *slot = token.parse().map_err(|_| {
            AssetError::Parse(format!("line {}: bad float {:?}", line_no + 1, token))
        })?;
    }
    Ok(out)
}

/// Resolve one `f` entry (`v`, `v/vt`, `v//vn`, or `v/vt/vn`) into a vertex,
/// returning its index.
fn push_corner(
    corner: &str,
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    vertices: &mut Vec<Vertex>,
    line_no: usize,
) -> Result<u32, AssetError> {
    let mut refs = corner.split('/');
    let pos_idx = resolve_index(refs.next(), positions.len(), line_no)?
        .ok_or_else(|| AssetError::Parse(format!("line {}: missing position index", line_no + 1)))?;
    let _tex = refs.next(); // texture coordinates unused
    let normal_idx = resolve_index(refs.next(), normals.len(), line_no)?;

    let normal = normal_idx.map_or([0.0, 0.0, 1.0], |i| normals[i]);
    vertices.push(Vertex {
        position: positions[pos_idx],
        normal,
    });
    Ok((vertices.len() - 1) as u32)
}

/// Parse a 1-based (possibly negative, relative) OBJ index into a 0-based one
fn resolve_index(
    token: Option<&str>,
    len: usize,
    line_no: usize,
) -> Result<Option<usize>, AssetError> {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(None),
    };
    let raw: i64 = token
        .parse()
        .map_err(|_| AssetError::Parse(format!("line {}: bad index {:?}", line_no + 1, token)))?;
    let resolved = if raw < 0 {
        len as i64 + raw
    } else {
        raw - 1
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(AssetError::Parse(format!(
            "line {}: index {} out of bounds",
            line_no + 1,
            raw
        )));
    }
    Ok(Some(resolved as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";

    #[test]
    fn parses_triangle_with_normals() {
        let mesh = parse_obj(TRIANGLE).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn triangulates_quads_as_fans() {
        let quad = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let mesh = parse_obj(quad).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn negative_indices_resolve_from_end() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let mesh = parse_obj(obj).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn rejects_empty_and_malformed_input() {
        assert!(matches!(parse_obj(""), Err(AssetError::Parse(_))));
        assert!(matches!(
            parse_obj("v 0 0 0\nf 1 2 3\n"),
            Err(AssetError::Parse(_))
        ));
        assert!(matches!(
            parse_obj("v a b c\n"),
            Err(AssetError::Parse(_))
        ));
    }
}
