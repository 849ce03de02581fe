//! Geometry for the decorative background: spinning wireframe solids over a
//! slowly turning particle field, projected to 2D for a canvas.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::{Add, Mul};

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
const NEAR_PLANE: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Vec3) -> f64 {
        (self + other * -1.0).length()
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    pub fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos, self.z)
    }

    /// Applies x, then y, then z rotation.
    pub fn rotate(self, angles: Vec3) -> Self {
        self.rotate_x(angles.x).rotate_y(angles.y).rotate_z(angles.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
    /// Screen pixels per world unit at this depth.
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: 14.0, fov_degrees: 60.0 }
    }
}

impl Camera {
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Point2> {
        let depth = point.z + self.distance;
        if depth <= NEAR_PLANE {
            return None;
        }
        let focal = (height / 2.0) / (self.fov_degrees.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Point2 {
            x: width / 2.0 + point.x * scale,
            y: height / 2.0 - point.y * scale,
            scale,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    fn connect_at(vertices: Vec<Vec3>, edge_length: f64) -> Self {
        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if (vertices[i].distance(vertices[j]) - edge_length).abs() < 1e-6 {
                    edges.push((i, j));
                }
            }
        }
        Self { vertices, edges }
    }

    fn scaled(mut self, size: f64) -> Self {
        let radius = self.vertices.iter().map(|v| v.length()).fold(0.0, f64::max);
        if radius > 0.0 {
            self.vertices.iter_mut().for_each(|v| *v = *v * (size / radius));
        }
        self
    }

    pub fn tetrahedron(size: f64) -> Self {
        let vertices = vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ];
        Self::connect_at(vertices, 8f64.sqrt()).scaled(size)
    }

    pub fn cube(size: f64) -> Self {
        let vertices = (0..8)
            .map(|i| {
                let sign = |bit: i32| if i & bit == 0 { -1.0 } else { 1.0 };
                Vec3::new(sign(1), sign(2), sign(4))
            })
            .collect();
        Self::connect_at(vertices, 2.0).scaled(size)
    }

    pub fn octahedron(size: f64) -> Self {
        let vertices = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        Self::connect_at(vertices, 2f64.sqrt()).scaled(size)
    }

    pub fn icosahedron(size: f64) -> Self {
        let mut vertices = Vec::with_capacity(12);
        for a in [-1.0, 1.0] {
            for b in [-GOLDEN_RATIO, GOLDEN_RATIO] {
                vertices.push(Vec3::new(0.0, a, b));
                vertices.push(Vec3::new(a, b, 0.0));
                vertices.push(Vec3::new(b, 0.0, a));
            }
        }
        Self::connect_at(vertices, 2.0).scaled(size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneShape {
    pub wireframe: Wireframe,
    pub position: Vec3,
    /// Radians per second around each axis.
    pub spin: Vec3,
    pub color: &'static str,
    phase: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub at: Point2,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub segments: Vec<Segment>,
    pub dots: Vec<Dot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub shapes: Vec<SceneShape>,
    pub particles: Vec<Particle>,
    /// Radians per second the particle field turns around y.
    pub field_spin: f64,
}

impl Scene {
    pub fn new(seed: u64, particle_count: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let particles = (0..particle_count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-12.0..12.0),
                    rng.gen_range(-8.0..8.0),
                    rng.gen_range(-10.0..10.0),
                ),
                size: rng.gen_range(0.5..1.8),
            })
            .collect();

        let shape = |wireframe, position, spin, color| SceneShape {
            wireframe,
            position,
            spin,
            color,
            phase: 0.0,
        };
        let mut shapes = vec![
            shape(Wireframe::icosahedron(2.2), Vec3::new(-6.5, 2.5, -2.0), Vec3::new(0.2, 0.35, 0.0), "#60a5fa"),
            shape(Wireframe::cube(1.6), Vec3::new(6.0, 3.0, -4.0), Vec3::new(0.4, 0.25, 0.1), "#a78bfa"),
            shape(Wireframe::octahedron(1.8), Vec3::new(5.5, -3.5, 0.0), Vec3::new(0.15, 0.5, 0.2), "#f472b6"),
            shape(Wireframe::tetrahedron(1.4), Vec3::new(-5.0, -4.0, 1.0), Vec3::new(0.5, 0.1, 0.3), "#34d399"),
        ];
        for shape in shapes.iter_mut() {
            shape.phase = rng.gen_range(0.0..std::f64::consts::TAU);
        }

        Self {
            camera: Camera::default(),
            shapes,
            particles,
            field_spin: 0.05,
        }
    }

    /// Projected geometry at `t` seconds for a `width` x `height` viewport.
    pub fn frame(&self, t: f64, width: f64, height: f64) -> Frame {
        let mut frame = Frame::default();

        for shape in &self.shapes {
            let bob = Vec3::new(0.0, (t * 0.6 + shape.phase).sin() * 0.4, 0.0);
            let projected: Vec<Option<Point2>> = shape.wireframe.vertices.iter()
                .map(|v| v.rotate(shape.spin * t) + shape.position + bob)
                .map(|v| self.camera.project(v, width, height))
                .collect();

            for &(a, b) in &shape.wireframe.edges {
                if let (Some(from), Some(to)) = (projected[a], projected[b]) {
                    frame.segments.push(Segment { from, to, color: shape.color });
                }
            }
        }

        let field_angle = t * self.field_spin;
        for particle in &self.particles {
            let position = particle.position.rotate_y(field_angle);
            if let Some(at) = self.camera.project(position, width, height) {
                let alpha = (1.0 - (position.z + 10.0) / 30.0).clamp(0.15, 0.9);
                frame.dots.push(Dot {
                    at,
                    radius: (particle.size * at.scale * 0.04).clamp(0.4, 3.0),
                    alpha,
                });
            }
        }

        frame
    }
}
