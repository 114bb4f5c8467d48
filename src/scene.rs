//! Preset scenes.
//!
//! A [`Scene`] is a list of meshes with their transforms plus the camera
//! the scene starts from.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::colors;
use crate::math::vec3::Vec3;
use crate::mesh::{self, Mesh};
use crate::transform::Transform;

/// Radians per second the cube preset turns around Y.
pub const DEFAULT_SPIN: f32 = 0.5;

pub const TERRAIN_CELLS: u32 = 80;
pub const TERRAIN_SCALE: f32 = 1.0;
pub const PLANE_SIZE: f32 = 100.0;
/// Edge of one ground tile. Tiles that reach behind the camera are
/// dropped whole, so they are kept small.
pub const PLANE_TILE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// A single vertex-colored cube, turning slowly.
    #[default]
    Cube,
    /// Rolling height-field terrain.
    Terrain,
    /// A flat ground plane.
    Plane,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneKind::Cube => "cube",
            SceneKind::Terrain => "terrain",
            SceneKind::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// A mesh placed in the world.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: Transform::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    kind: SceneKind,
    objects: Vec<SceneObject>,
    camera_start: Camera,
    /// Y rotation applied to every object per second.
    pub spin: f32,
}

impl Scene {
    pub fn new(kind: SceneKind, objects: Vec<SceneObject>, camera_start: Camera) -> Self {
        Self {
            kind,
            objects,
            camera_start,
            spin: 0.0,
        }
    }

    pub fn preset(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Cube => Self::cube(),
            SceneKind::Terrain => Self::terrain(),
            SceneKind::Plane => Self::plane(),
        }
    }

    /// Unit cube at the origin seen from (2.5, 2, 2.5).
    pub fn cube() -> Self {
        let camera = Camera::looking_at(Vec3::new(2.5, 2.0, 2.5), Vec3::ZERO);
        let mut scene = Self::new(
            SceneKind::Cube,
            vec![SceneObject::new(Mesh::cube(1.0))],
            camera,
        );
        scene.spin = DEFAULT_SPIN;
        scene
    }

    /// Wave terrain seen from just past its +Z edge.
    pub fn terrain() -> Self {
        let extent = TERRAIN_CELLS as f32 * TERRAIN_SCALE;
        let center = Vec3::new(extent * 0.5, 0.0, extent * 0.5);
        let camera = Camera::looking_at(Vec3::new(center.x, 3.0, extent + 5.0), center);
        let terrain = Mesh::terrain(TERRAIN_CELLS, TERRAIN_SCALE, mesh::wave_height);
        Self::new(SceneKind::Terrain, vec![SceneObject::new(terrain)], camera)
    }

    /// Flat grass at eye height 1.7, looking down -Z.
    pub fn plane() -> Self {
        let tile = Mesh::ground_plane(PLANE_TILE, colors::GRASS);
        let tiles = (PLANE_SIZE / PLANE_TILE) as u32;
        let start = -PLANE_SIZE * 0.5 + PLANE_TILE * 0.5;

        let capacity = (tiles * tiles) as usize * tile.len();
        let mut ground = Mesh::new("ground", Vec::with_capacity(capacity));
        for iz in 0..tiles {
            for ix in 0..tiles {
                let offset = Vec3::new(
                    start + ix as f32 * PLANE_TILE,
                    0.0,
                    start + iz as f32 * PLANE_TILE,
                );
                for triangle in tile.triangles() {
                    ground.push(triangle.translated(offset));
                }
            }
        }
        Self::new(SceneKind::Plane, vec![SceneObject::new(ground)], Camera::default())
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn camera_start(&self) -> Camera {
        self.camera_start.clone()
    }

    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.len()).sum()
    }

    /// Advances animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.spin == 0.0 {
            return;
        }
        for object in &mut self.objects {
            object.transform.rotate_y(self.spin * dt);
        }
    }
}
