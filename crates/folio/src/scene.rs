//! Hero background: a slowly spinning particle cloud with a few floating wireframe
//! cubes, seen through a perspective camera that drifts toward the pointer.

use crate::geometry::{Point, Size};
use crate::paint::{DrawOp, rgba};
use crate::schedule::{FrameOutcome, FrameTask};
use palette::Srgba;
use rand::Rng;
use std::ops::{Add, Sub};

pub const FRAME_MS: f64 = 1000.0 / 60.0;
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos, self.z)
    }

    /// Euler rotation in XYZ order (z applied first, x last).
    pub fn rotate(self, euler: Vec3) -> Self {
        self.rotate_z(euler.z).rotate_y(euler.y).rotate_x(euler.x)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub particle_spread: f64,
    pub particle_size: f64,
    pub cube_count: usize,
    pub cube_spread: f64,
    pub cube_edge: f64,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub camera_distance: f64,
    pub particle_color: Srgba<f64>,
    pub cube_color: Srgba<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            particle_spread: 10.0,
            particle_size: 0.005,
            cube_count: 5,
            cube_spread: 5.0,
            cube_edge: 0.1,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_distance: 3.0,
            particle_color: rgba(99, 102, 241, 0.8),
            cube_color: rgba(139, 92, 246, 0.6),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    const POINTER_GAIN: f64 = 0.0005;
    const EASING: f64 = 0.05;

    fn focal(&self) -> f64 {
        1.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Eases toward a target derived from the pointer offset (relative to the viewport
    /// centre, screen y down).
    pub fn follow(&mut self, pointer: Point) {
        let target = (pointer.x * Self::POINTER_GAIN, -pointer.y * Self::POINTER_GAIN);
        self.position.x += (target.0 - self.position.x) * Self::EASING;
        self.position.y += (target.1 - self.position.y) * Self::EASING;
    }

    /// Perspective projection onto a viewport. The camera looks down -z. Returns the
    /// screen point and depth, or `None` outside the near/far range.
    pub fn project(&self, point: Vec3, viewport: Size) -> Option<(Point, f64)> {
        let relative = point - self.position;
        let depth = -relative.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let focal = self.focal();
        let ndc_x = focal / self.aspect * relative.x / depth;
        let ndc_y = focal * relative.y / depth;
        Some((
            Point::new(
                (ndc_x + 1.0) / 2.0 * viewport.width,
                (1.0 - ndc_y) / 2.0 * viewport.height,
            ),
            depth,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingCube {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl FloatingCube {
    fn vertices(&self, edge: f64) -> [Vec3; 8] {
        let h = edge / 2.0;
        let mut vertices = [Vec3::default(); 8];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let corner = Vec3::new(
                if i & 1 == 0 { -h } else { h },
                if i & 2 == 0 { -h } else { h },
                if i & 4 == 0 { -h } else { h },
            );
            *vertex = corner.rotate(self.rotation) + self.position;
        }
        vertices
    }
}

#[derive(Debug, Clone)]
pub struct BackgroundScene {
    config: SceneConfig,
    particles: Vec<Vec3>,
    cloud_rotation: Vec3,
    cubes: Vec<FloatingCube>,
    camera: Camera,
    viewport: Size,
    pointer: Point,
    clock_ms: f64,
}

impl BackgroundScene {
    const CLOUD_SPIN: Vec3 = Vec3 {
        x: 0.0005,
        y: 0.001,
        z: 0.0,
    };
    const CUBE_SPIN: f64 = 0.01;
    const CUBE_SPIN_STEP: f64 = 0.002;
    const CUBE_BOB: f64 = 0.0005;

    pub fn new(config: SceneConfig, viewport: Size, rng: &mut impl Rng) -> Self {
        let mut scatter = |spread: f64| {
            Vec3::new(
                (rng.random::<f64>() - 0.5) * spread,
                (rng.random::<f64>() - 0.5) * spread,
                (rng.random::<f64>() - 0.5) * spread,
            )
        };

        let particles = (0..config.particle_count)
            .map(|_| scatter(config.particle_spread))
            .collect();
        let cubes = (0..config.cube_count)
            .map(|_| FloatingCube {
                position: scatter(config.cube_spread),
                rotation: Vec3::default(),
            })
            .collect();

        let camera = Camera {
            position: Vec3::new(0.0, 0.0, config.camera_distance),
            fov_degrees: config.fov_degrees,
            aspect: viewport.aspect(),
            near: config.near,
            far: config.far,
        };

        Self {
            config,
            particles,
            cloud_rotation: Vec3::default(),
            cubes,
            camera,
            viewport,
            pointer: Point::default(),
            clock_ms: 0.0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn cubes(&self) -> &[FloatingCube] {
        &self.cubes
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    /// `position` is in surface coordinates.
    pub fn pointer_moved(&mut self, position: Point) {
        let center = self.viewport.center();
        self.pointer = Point::new(position.x - center.x, position.y - center.y);
    }

    pub fn step(&mut self) {
        self.clock_ms += FRAME_MS;
        self.cloud_rotation = self.cloud_rotation + Self::CLOUD_SPIN;

        for (i, cube) in self.cubes.iter_mut().enumerate() {
            let spin = Self::CUBE_SPIN + i as f64 * Self::CUBE_SPIN_STEP;
            cube.rotation.x += spin;
            cube.rotation.y += spin;
            cube.position.y += (self.clock_ms * 0.001 + i as f64).sin() * Self::CUBE_BOB;
        }

        self.camera.follow(self.pointer);
    }

    pub fn draw(&self) -> Vec<DrawOp> {
        let focal_px = self.camera.focal() * self.viewport.height / 2.0;
        let mut ops = Vec::with_capacity(self.particles.len() + self.cubes.len() * 12);

        ops.extend(self.particles.iter().filter_map(|&particle| {
            let (center, depth) = self
                .camera
                .project(particle.rotate(self.cloud_rotation), self.viewport)?;
            Some(DrawOp::FillCircle {
                center,
                radius: (self.config.particle_size * focal_px / depth).max(0.5),
                color: self.config.particle_color,
            })
        }));

        for cube in &self.cubes {
            let projected = cube
                .vertices(self.config.cube_edge)
                .map(|v| self.camera.project(v, self.viewport).map(|(p, _)| p));
            for (a, b) in CUBE_EDGES {
                if let (Some(from), Some(to)) = (projected[a], projected[b]) {
                    ops.push(DrawOp::Line {
                        from,
                        to,
                        color: self.config.cube_color,
                        line_width: 1.0,
                    });
                }
            }
        }
        ops
    }
}

impl FrameTask for BackgroundScene {
    fn frame(&mut self) -> FrameOutcome {
        self.step();
        FrameOutcome::Continue
    }
}
