//! Triangle meshes and procedural generators.
//!
//! Meshes own their triangles by value; there is no shared vertex index.
//! All generators wind triangles counter-clockwise when seen from outside,
//! which is what the rasterizer treats as front-facing.

use crate::colors;
use crate::math::vec3::Vec3;

/// A vertex with a position and an RGB color in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Exactly three vertices, counter-clockwise from the front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Unnormalized face normal `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (b.position - a.position).cross(c.position - a.position)
    }

    pub fn centroid(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (a.position + b.position + c.position) / 3.0
    }

    /// Copy of this triangle moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        let mut moved = *self;
        for vertex in &mut moved.vertices {
            vertex.position = vertex.position + offset;
        }
        moved
    }
}

/// Height function for [`Mesh::terrain`]: the default rolling hills.
pub fn wave_height(x: f32, z: f32) -> f32 {
    0.6 * (x * 0.2).sin() * (z * 0.2).cos()
}

/// A named, ordered list of triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    name: String,
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Axis-aligned cube of edge `size` centered at the origin.
    ///
    /// Each corner is colored by its position mapped into the RGB cube, so
    /// every face shows a gradient.
    pub fn cube(size: f32) -> Self {
        // (normal, u, v) with u x v == normal, so corners walked as
        // -u-v, +u-v, +u+v, -u+v are counter-clockwise from outside.
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
            (Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
            (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        ];

        let corner = |n: Vec3, u: Vec3, v: Vec3, su: f32, sv: f32| {
            let unit = (n + u * su + v * sv) * 0.5;
            Vertex::new(unit * size, unit + Vec3::splat(0.5))
        };

        let mut triangles = Vec::with_capacity(12);
        for (n, u, v) in FACES {
            let quad = [
                corner(n, u, v, -1.0, -1.0),
                corner(n, u, v, 1.0, -1.0),
                corner(n, u, v, 1.0, 1.0),
                corner(n, u, v, -1.0, 1.0),
            ];
            triangles.push(Triangle::new(quad[0], quad[1], quad[2]));
            triangles.push(Triangle::new(quad[0], quad[2], quad[3]));
        }
        Self::new("cube", triangles)
    }

    /// Square of edge `size` at y = 0, centered at the origin, facing +Y.
    pub fn ground_plane(size: f32, color: Vec3) -> Self {
        let h = size * 0.5;
        let v0 = Vertex::new(Vec3::new(-h, 0.0, -h), color);
        let v1 = Vertex::new(Vec3::new(h, 0.0, -h), color);
        let v2 = Vertex::new(Vec3::new(h, 0.0, h), color);
        let v3 = Vertex::new(Vec3::new(-h, 0.0, h), color);

        Self::new(
            "ground_plane",
            vec![Triangle::new(v0, v2, v1), Triangle::new(v0, v3, v2)],
        )
    }

    /// Height field over `cells` x `cells` grid squares of edge `scale`,
    /// starting at the origin and extending along +X and +Z.
    ///
    /// `height` maps world (x, z) to elevation. Vertex colors blend from dark
    /// to light grass with elevation.
    pub fn terrain<F>(cells: u32, scale: f32, height: F) -> Self
    where
        F: Fn(f32, f32) -> f32,
    {
        let side = cells as usize + 1;
        let mut points = Vec::with_capacity(side * side);
        for iz in 0..side {
            for ix in 0..side {
                let x = ix as f32 * scale;
                let z = iz as f32 * scale;
                points.push(Vec3::new(x, height(x, z), z));
            }
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let range = max_y - min_y;
        let vertex = |p: Vec3| {
            let t = if range > 0.0 { (p.y - min_y) / range } else { 0.5 };
            Vertex::new(p, colors::GRASS_DARK.lerp(colors::GRASS_LIGHT, t))
        };

        let mut triangles = Vec::with_capacity((cells * cells * 2) as usize);
        for iz in 0..cells as usize {
            for ix in 0..cells as usize {
                let p0 = vertex(points[iz * side + ix]);
                let p1 = vertex(points[iz * side + ix + 1]);
                let p2 = vertex(points[(iz + 1) * side + ix]);
                let p3 = vertex(points[(iz + 1) * side + ix + 1]);

                triangles.push(Triangle::new(p0, p2, p1));
                triangles.push(Triangle::new(p1, p2, p3));
            }
        }

        Self::new("terrain", triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_has_twelve_outward_facing_triangles() {
        let cube = Mesh::cube(1.0);
        assert_eq!(cube.len(), 12);
        for triangle in cube.triangles() {
            // Centered at the origin, so the centroid points outward.
            assert!(triangle.normal().dot(triangle.centroid()) > 0.0);
        }
    }

    #[test]
    fn cube_corners_sit_on_half_extent() {
        let cube = Mesh::cube(2.0);
        for triangle in cube.triangles() {
            for v in triangle.vertices {
                assert_relative_eq!(v.position.x.abs(), 1.0);
                assert_relative_eq!(v.position.y.abs(), 1.0);
                assert_relative_eq!(v.position.z.abs(), 1.0);
                assert!(v.color.x == 0.0 || v.color.x == 1.0);
            }
        }
    }

    #[test]
    fn ground_plane_faces_up() {
        let plane = Mesh::ground_plane(100.0, colors::GRASS);
        assert_eq!(plane.len(), 2);
        for triangle in plane.triangles() {
            let n = triangle.normal().normalize();
            assert_relative_eq!(n.y, 1.0);
        }
    }

    #[test]
    fn translated_moves_every_vertex() {
        let plane = Mesh::ground_plane(2.0, colors::GRASS);
        let moved = plane.triangles()[0].translated(Vec3::new(10.0, 0.0, -4.0));
        assert_relative_eq!(moved.centroid().x, plane.triangles()[0].centroid().x + 10.0);
        assert_relative_eq!(moved.centroid().z, plane.triangles()[0].centroid().z - 4.0);
        assert_eq!(moved.normal(), plane.triangles()[0].normal());
    }

    #[test]
    fn terrain_follows_height_function() {
        let terrain = Mesh::terrain(4, 1.0, |x, z| x + 2.0 * z);
        assert_eq!(terrain.len(), 32);
        for triangle in terrain.triangles() {
            assert!(triangle.normal().y > 0.0);
            for v in triangle.vertices {
                assert_relative_eq!(v.position.y, v.position.x + 2.0 * v.position.z);
            }
        }
    }

    #[test]
    fn flat_terrain_uses_mid_color() {
        let terrain = Mesh::terrain(2, 2.0, |_, _| 0.0);
        let expected = colors::GRASS_DARK.lerp(colors::GRASS_LIGHT, 0.5);
        assert_eq!(terrain.triangles()[0].vertices[0].color, expected);
    }

    #[test]
    fn wave_height_is_zero_on_the_x_axis_origin() {
        assert_relative_eq!(wave_height(0.0, 0.0), 0.0);
        assert!(wave_height(7.85, 0.0) > 0.59);
    }
}
