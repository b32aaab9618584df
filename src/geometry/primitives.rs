//! # Procedural Primitive Generation
//!
//! Pure mesh generators for the built-in shapes. Every shape is authored
//! centered on the origin and aligned along the local Z axis (the canonical
//! axis); the node-level constructors in [`crate::scene::shapes`] reposition
//! them with [`crate::math::align`].
//!
//! All solid shapes are triangle lists with counter-clockwise winding when
//! viewed from outside. Facet count is an explicit parameter here; the
//! shape constructors pass [`super::FACETS`].

use super::{quad, Mesh, Triangle, Vertex};
use cgmath::{InnerSpace, Vector2, Vector3};
use std::f64::consts::PI;

/// Generates a box with the given extents, centered on the origin.
///
/// Eight corners at `±size/2` per axis and six quad faces with flat
/// axis-aligned normals, 12 triangles in total.
pub fn cuboid(size: Vector3<f64>) -> Mesh {
    let s = size / 2.0;

    let ppp = Vector3::new(s.x, s.y, s.z);
    let npp = Vector3::new(-s.x, s.y, s.z);
    let nnp = Vector3::new(-s.x, -s.y, s.z);
    let pnp = Vector3::new(s.x, -s.y, s.z);
    let ppn = Vector3::new(s.x, s.y, -s.z);
    let npn = Vector3::new(-s.x, s.y, -s.z);
    let nnn = Vector3::new(-s.x, -s.y, -s.z);
    let pnn = Vector3::new(s.x, -s.y, -s.z);

    let mut triangles = Vec::with_capacity(12);
    let mut face = |corners: [Vector3<f64>; 4], normal: Vector3<f64>| {
        quad(
            &mut triangles,
            [
                Vertex::new(corners[0], normal),
                Vertex::new(corners[1], normal),
                Vertex::new(corners[2], normal),
                Vertex::new(corners[3], normal),
            ],
        );
    };

    face([nnp, pnp, ppp, npp], Vector3::unit_z()); // Z+
    face([nnn, npn, ppn, pnn], -Vector3::unit_z()); // Z-
    face([pnn, ppn, ppp, pnp], Vector3::unit_x()); // X+
    face([nnn, nnp, npp, npn], -Vector3::unit_x()); // X-
    face([npn, npp, ppp, ppn], Vector3::unit_y()); // Y+
    face([nnn, pnn, pnp, nnp], -Vector3::unit_y()); // Y-

    Mesh::Triangles(triangles)
}

/// Generates the 12 edges of a box as line segments.
///
/// Drawn without lighting state, so no normals are involved.
pub fn wire_cuboid(size: Vector3<f64>) -> Mesh {
    let s = size / 2.0;

    let ppp = Vector3::new(s.x, s.y, s.z);
    let npp = Vector3::new(-s.x, s.y, s.z);
    let nnp = Vector3::new(-s.x, -s.y, s.z);
    let pnp = Vector3::new(s.x, -s.y, s.z);
    let ppn = Vector3::new(s.x, s.y, -s.z);
    let npn = Vector3::new(-s.x, s.y, -s.z);
    let nnn = Vector3::new(-s.x, -s.y, -s.z);
    let pnn = Vector3::new(s.x, -s.y, -s.z);

    Mesh::Lines(vec![
        [nnp, pnp],
        [nnn, pnn],
        [nnp, npp],
        [nnn, npn],
        [ppp, npp],
        [ppn, npn],
        [ppp, pnp],
        [ppn, pnn],
        [nnn, nnp],
        [pnn, pnp],
        [npn, npp],
        [ppn, ppp],
    ])
}

/// Generates a sphere of the given radius, centered on the origin.
///
/// Latitude rings walk from the bottom pole (`z = -radius`) to the top;
/// each vertex normal is its normalized position.
pub fn sphere(radius: f64, facets: u32) -> Mesh {
    let f = facets as f64;
    let mut triangles = Vec::with_capacity((facets * facets) as usize);

    for j in 0..facets / 2 {
        let phi1 = j as f64 * 2.0 * PI / f;
        let phi2 = (j + 1) as f64 * 2.0 * PI / f;
        let (r1, z1) = (radius * phi1.sin(), -radius * phi1.cos());
        let (r2, z2) = (radius * phi2.sin(), -radius * phi2.cos());

        for i in 0..facets {
            let theta1 = i as f64 * 2.0 * PI / f;
            let theta2 = (i + 1) as f64 * 2.0 * PI / f;

            let corners = [
                Vector3::new(r1 * theta1.cos(), r1 * theta1.sin(), z1),
                Vector3::new(r1 * theta2.cos(), r1 * theta2.sin(), z1),
                Vector3::new(r2 * theta2.cos(), r2 * theta2.sin(), z2),
                Vector3::new(r2 * theta1.cos(), r2 * theta1.sin(), z2),
            ];
            quad(
                &mut triangles,
                corners.map(|p| Vertex::new(p, p.normalize())),
            );
        }
    }

    Mesh::Triangles(triangles)
}

/// Generates a generalized cylinder along Z, from a circle of `radius` at
/// `z = -length/2` to a circle of `end_radius` at `z = +length/2`.
///
/// A zero `end_radius` makes a cone. Lateral normals follow the
/// normalized-XY-projection convention: at angular position theta the
/// normal is `(cos theta, sin theta, 0)`. This is exact for straight
/// cylinders and an approximation for frusta; at a cone apex it is the
/// well-defined limit of the projection rule.
pub fn cylinder(length: f64, radius: f64, end_radius: f64, facets: u32) -> Mesh {
    let f = facets as f64;
    let half = length / 2.0;
    let mut triangles = Vec::new();

    // Lateral surface
    for i in 0..facets {
        let theta1 = i as f64 * 2.0 * PI / f;
        let theta2 = (i + 1) as f64 * 2.0 * PI / f;
        let side = |r: f64, theta: f64, z: f64| {
            Vertex::new(
                Vector3::new(r * theta.cos(), r * theta.sin(), z),
                Vector3::new(theta.cos(), theta.sin(), 0.0),
            )
        };
        quad(
            &mut triangles,
            [
                side(radius, theta1, -half),
                side(radius, theta2, -half),
                side(end_radius, theta2, half),
                side(end_radius, theta1, half),
            ],
        );
    }

    // Top cap, counter-clockwise seen from above
    if end_radius > 0.0 {
        fan(&mut triangles, end_radius, half, Vector3::unit_z(), facets, 1.0);
    }

    // Bottom cap winds the other way so it faces down
    if radius > 0.0 {
        fan(&mut triangles, radius, -half, -Vector3::unit_z(), facets, -1.0);
    }

    Mesh::Triangles(triangles)
}

/// Triangulates a circular cap as a fan anchored at its first rim vertex.
fn fan(
    out: &mut Vec<Triangle>,
    radius: f64,
    z: f64,
    normal: Vector3<f64>,
    facets: u32,
    winding: f64,
) {
    let f = facets as f64;
    let rim = |i: u32| {
        let theta = winding * i as f64 * 2.0 * PI / f;
        Vertex::new(
            Vector3::new(radius * theta.cos(), radius * theta.sin(), z),
            normal,
        )
    };
    for i in 1..facets - 1 {
        out.push(Triangle::new(rim(0), rim(i), rim(i + 1)));
    }
}

/// Generates a capsule: a cylinder of the given length with hemispherical
/// end caps of the given radius, centered on the origin along Z.
///
/// The ring walk shares the sphere's index scheme but switches the per-ring
/// Z offset from the bottom-cap frame to the top-cap frame as the ring
/// index crosses `facets/4`. Each vertex normal is taken relative to the
/// hemisphere center that generated its ring rather than the absolute
/// position; adjacent rings at the body/cap seam belong to different
/// curvature centers.
pub fn capsule(length: f64, radius: f64, facets: u32) -> Mesh {
    let f = facets as f64;
    let half = length / 2.0;
    let mut triangles = Vec::new();

    let mut jadj1: i32 = 0;
    let mut jadj2: i32 = 1;
    let mut zadj1 = -half;
    let mut zadj2 = -half;

    for j in 0..=facets / 2 {
        if j == facets / 4 {
            // Ring 2 enters the body: hold its latitude, jump to the top frame
            jadj2 -= 1;
            zadj2 += length;
        } else if j == facets / 4 + 1 {
            // Ring 1 follows into the top cap
            jadj1 -= 1;
            zadj1 += length;
        }

        let phi1 = (j as i32 + jadj1) as f64 * 2.0 * PI / f;
        let phi2 = (j as i32 + jadj2) as f64 * 2.0 * PI / f;
        let (r1, z1) = (radius * phi1.sin(), -radius * phi1.cos() + zadj1);
        let (r2, z2) = (radius * phi2.sin(), -radius * phi2.cos() + zadj2);

        let vert = |p: Vector3<f64>, z_center: f64| {
            Vertex::new(p, (p - Vector3::new(0.0, 0.0, z_center)).normalize())
        };

        for i in 0..facets {
            let theta1 = i as f64 * 2.0 * PI / f;
            let theta2 = (i + 1) as f64 * 2.0 * PI / f;

            quad(
                &mut triangles,
                [
                    vert(Vector3::new(r1 * theta1.cos(), r1 * theta1.sin(), z1), zadj1),
                    vert(Vector3::new(r1 * theta2.cos(), r1 * theta2.sin(), z1), zadj1),
                    vert(Vector3::new(r2 * theta2.cos(), r2 * theta2.sin(), z2), zadj2),
                    vert(Vector3::new(r2 * theta1.cos(), r2 * theta1.sin(), z2), zadj2),
                ],
            );
        }
    }

    Mesh::Triangles(triangles)
}

/// Generates a single quad spanned by the edge vectors `vx` and `vy`,
/// centered on `center`.
///
/// The normal is `normalize(vx × vy)`. Texture coordinates run from 0 to
/// `repeat` across the quad so a bound texture tiles `repeat` times.
pub fn plane(vx: Vector3<f64>, vy: Vector3<f64>, center: Vector3<f64>, repeat: f64) -> Mesh {
    let normal = vx.cross(vy).normalize();
    let corner = |sx: f64, sy: f64, u: f64, v: f64| {
        Vertex::textured(
            center + vx * (sx / 2.0) + vy * (sy / 2.0),
            normal,
            Vector2::new(u, v),
        )
    };

    let mut triangles = Vec::with_capacity(2);
    quad(
        &mut triangles,
        [
            corner(-1.0, -1.0, 0.0, 0.0),
            corner(1.0, -1.0, repeat, 0.0),
            corner(1.0, 1.0, repeat, repeat),
            corner(-1.0, 1.0, 0.0, repeat),
        ],
    );
    Mesh::Triangles(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;
    use std::collections::HashMap;

    fn face_normal(t: &Triangle) -> Vector3<f64> {
        let [a, b, c] = t.vertices;
        (b.position - a.position).cross(c.position - a.position)
    }

    fn assert_outward_winding(mesh: &Mesh, centroid: Vector3<f64>) {
        for t in mesh.triangles() {
            let n = face_normal(t);
            if n.magnitude2() < 1e-18 {
                continue; // degenerate pole triangle
            }
            assert!(
                n.dot(t.centroid() - centroid) > 0.0,
                "inward-facing triangle at {:?}",
                t.centroid()
            );
        }
    }

    fn key(v: Vector3<f64>) -> (i64, i64, i64) {
        let q = |x: f64| (x * 1e9).round() as i64;
        (q(v.x), q(v.y), q(v.z))
    }

    /// Every edge of a closed mesh is shared by exactly two triangles.
    /// Zero-area triangles (pole and apex quads collapse one side) carry no
    /// surface and are excluded from the edge count.
    fn assert_closed(mesh: &Mesh) {
        let mut edges: HashMap<_, u32> = HashMap::new();
        for t in mesh.triangles() {
            if face_normal(t).magnitude2() < 1e-18 {
                continue;
            }
            for i in 0..3 {
                let a = key(t.vertices[i].position);
                let b = key(t.vertices[(i + 1) % 3].position);
                let edge = if a < b { (a, b) } else { (b, a) };
                *edges.entry(edge).or_insert(0) += 1;
            }
        }
        for (edge, count) in edges {
            assert_eq!(count, 2, "edge {:?} shared by {} triangles", edge, count);
        }
    }

    #[test]
    fn cuboid_has_twelve_surface_triangles() {
        let size = Vector3::new(2.0, 2.0, 0.05);
        let mesh = cuboid(size);
        assert_eq!(mesh.triangle_count(), 12);

        for t in mesh.triangles() {
            for v in t.vertices {
                let p = v.position;
                let on_face = (p.x.abs() - 1.0).abs() < 1e-12
                    || (p.y.abs() - 1.0).abs() < 1e-12
                    || (p.z.abs() - 0.025).abs() < 1e-12;
                assert!(on_face, "vertex {:?} not on the box surface", p);
                assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0 && p.z.abs() <= 0.025);
            }
        }
    }

    #[test]
    fn cuboid_is_closed_and_outward() {
        let mesh = cuboid(Vector3::new(1.0, 2.0, 3.0));
        assert_closed(&mesh);
        assert_outward_winding(&mesh, Vector3::zero());
    }

    #[test]
    fn wire_cuboid_has_twelve_edges() {
        match wire_cuboid(Vector3::new(2.0, 2.0, 2.0)) {
            Mesh::Lines(lines) => {
                assert_eq!(lines.len(), 12);
                for [a, b] in lines {
                    assert!((a - b).magnitude() > 0.0);
                }
            }
            Mesh::Triangles(_) => panic!("wire box must be a line mesh"),
        }
    }

    #[test]
    fn sphere_normals_match_positions() {
        let radius = 2.5;
        let mesh = sphere(radius, 8);
        assert_eq!(mesh.triangle_count(), 8 * 4 * 2);
        assert_closed(&mesh);
        assert_outward_winding(&mesh, Vector3::zero());

        for t in mesh.triangles() {
            for v in t.vertices {
                assert!((v.position.magnitude() - radius).abs() < 1e-12);
                assert!((v.normal - v.position / radius).magnitude() < 1e-12);
            }
        }
    }

    #[test]
    fn cylinder_is_closed_and_outward() {
        let mesh = cylinder(2.0, 0.5, 0.5, 8);
        // 8 lateral quads plus two 6-triangle caps
        assert_eq!(mesh.triangle_count(), 8 * 2 + 6 + 6);
        assert_closed(&mesh);
        assert_outward_winding(&mesh, Vector3::zero());
    }

    #[test]
    fn cylinder_lateral_normals_ignore_z() {
        let mesh = cylinder(2.0, 0.5, 0.25, 8);
        for t in mesh.triangles() {
            for v in t.vertices {
                assert!((v.normal.magnitude() - 1.0).abs() < 1e-12);
                if v.normal.z == 0.0 {
                    // Lateral vertex: normal is the normalized XY projection
                    // of the position, even on the tapered top ring where the
                    // true surface normal would tilt.
                    let expected = Vector3::new(v.position.x, v.position.y, 0.0).normalize();
                    assert!((v.normal - expected).magnitude() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn cone_has_no_top_cap_and_finite_normals() {
        let mesh = cylinder(3.0, 1.0, 0.0, 8);
        assert_eq!(mesh.triangle_count(), 8 * 2 + 6);
        assert_closed(&mesh);
        assert_outward_winding(&mesh, Vector3::new(0.0, 0.0, -0.5));
        for t in mesh.triangles() {
            for v in t.vertices {
                assert!(v.normal.x.is_finite() && v.normal.y.is_finite());
                assert!((v.normal.magnitude() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn capsule_extends_length_plus_two_radii() {
        let (length, radius) = (3.0, 0.75);
        let mesh = capsule(length, radius, 8);

        let mut z_min = f64::MAX;
        let mut z_max = f64::MIN;
        for t in mesh.triangles() {
            for v in t.vertices {
                z_min = z_min.min(v.position.z);
                z_max = z_max.max(v.position.z);
            }
        }
        assert!((z_min - (-length / 2.0 - radius)).abs() < 1e-12);
        assert!((z_max - (length / 2.0 + radius)).abs() < 1e-12);
    }

    #[test]
    fn capsule_normals_point_away_from_ring_centers() {
        let (length, radius) = (2.0, 0.5);
        let mesh = capsule(length, radius, 8);
        assert_eq!(mesh.triangle_count(), (8 / 2 + 1) * 8 * 2);
        assert_closed(&mesh);
        assert_outward_winding(&mesh, Vector3::zero());

        for t in mesh.triangles() {
            for v in t.vertices {
                assert!((v.normal.magnitude() - 1.0).abs() < 1e-12);
                // Every vertex sits at distance `radius` from one of the two
                // hemisphere centers (body vertices belong to both caps'
                // cylindrical continuation, where the rule degenerates to the
                // XY projection).
                let bottom = (v.position - Vector3::new(0.0, 0.0, -length / 2.0)).magnitude();
                let top = (v.position - Vector3::new(0.0, 0.0, length / 2.0)).magnitude();
                assert!(
                    (bottom - radius).abs() < 1e-9 || (top - radius).abs() < 1e-9,
                    "vertex {:?} off both hemispheres",
                    v.position
                );
            }
        }
    }

    #[test]
    fn plane_spans_edge_vectors_with_tiled_uvs() {
        let vx = Vector3::new(4.0, 0.0, 0.0);
        let vy = Vector3::new(0.0, 2.0, 0.0);
        let center = Vector3::new(1.0, 1.0, 0.0);
        let mesh = plane(vx, vy, center, 3.0);

        assert_eq!(mesh.triangle_count(), 2);
        for t in mesh.triangles() {
            for v in t.vertices {
                assert_eq!(v.normal, Vector3::unit_z());
                let uv = v.uv.expect("plane vertices carry uvs");
                assert!(uv.x == 0.0 || uv.x == 3.0);
                assert!(uv.y == 0.0 || uv.y == 3.0);
                assert!((v.position.x - 1.0).abs() <= 2.0 + 1e-12);
                assert!((v.position.y - 1.0).abs() <= 1.0 + 1e-12);
                assert_eq!(v.position.z, 0.0);
            }
        }
    }
}
