//! Binary triangle-soup model loader.
//!
//! Fixed layout: an 80-byte free-form header (ignored), a little-endian
//! `u32` triangle count, then 50-byte records of 3x`f32` normal, three
//! 3x`f32` vertices, and 2 ignored attribute bytes. A file truncated after
//! `N` complete records loads exactly `N` triangles and logs the
//! discrepancy instead of failing.

use super::AssetError;
use crate::geometry::{Mesh, Triangle, Vertex};
use cgmath::{InnerSpace, Vector3};
use log::{debug, warn};
use std::fs;
use std::path::Path;

const HEADER_LEN: usize = 80;
const RECORD_LEN: usize = 50;

/// Reads a model file, scaling every vertex position by `scale`.
pub fn read(path: &Path, scale: f64) -> Result<Mesh, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&bytes, scale, path)
}

/// Parses an in-memory model file, scaling every vertex position by
/// `scale`. `path` is used only for diagnostics.
pub fn parse(bytes: &[u8], scale: f64, path: &Path) -> Result<Mesh, AssetError> {
    if bytes.len() < HEADER_LEN + 4 {
        return Err(AssetError::TruncatedHeader {
            path: path.to_path_buf(),
        });
    }

    let declared = u32::from_le_bytes(
        bytes[HEADER_LEN..HEADER_LEN + 4]
            .try_into()
            .unwrap_or([0; 4]),
    ) as usize;
    let body = &bytes[HEADER_LEN + 4..];
    let complete = body.len() / RECORD_LEN;
    let count = declared.min(complete);

    if count < declared {
        warn!(
            "{}: declares {} triangles but holds {} complete records",
            path.display(),
            declared,
            complete
        );
    }

    let mut triangles = Vec::with_capacity(count);
    for record in body.chunks_exact(RECORD_LEN).take(count) {
        let mut stored_normal = read_vector(record, 0);
        let v1 = read_vector(record, 12) * scale;
        let v2 = read_vector(record, 24) * scale;
        let v3 = read_vector(record, 36) * scale;

        if stored_normal.magnitude2() == 0.0 {
            // Some exporters write null normals; recompute from the winding.
            let cross = (v2 - v1).cross(v3 - v1);
            if cross.magnitude2() > 0.0 {
                stored_normal = cross.normalize();
            }
        }

        triangles.push(Triangle::new(
            Vertex::new(v1, stored_normal),
            Vertex::new(v2, stored_normal),
            Vertex::new(v3, stored_normal),
        ));
    }

    debug!("{}: loaded {} triangles", path.display(), triangles.len());
    Ok(Mesh::Triangles(triangles))
}

fn read_vector(record: &[u8], offset: usize) -> Vector3<f64> {
    let f = |i: usize| {
        f32::from_le_bytes(record[offset + i * 4..offset + (i + 1) * 4].try_into().unwrap_or([0; 4]))
            as f64
    };
    Vector3::new(f(0), f(1), f(2))
}
