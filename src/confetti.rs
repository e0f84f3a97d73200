use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

pub const DEFAULT_PARTICLES: usize = 150;

pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(0xEF, 0x44, 0x44),
    Color32::from_rgb(0xB9, 0x1C, 0x1C),
    Color32::from_rgb(0xFF, 0xFF, 0xFF),
    Color32::from_rgb(0xFC, 0xA5, 0xA5),
    Color32::from_rgb(0xFF, 0xD7, 0x00),
];

/// Particles re-enter slightly above the top edge.
const WRAP_Y: f32 = -20.0;
/// Speeds and spin rates are expressed per frame at this rate.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Top-left corner of the unrotated rectangle.
    pub pos: Pos2,
    pub size: Vec2,
    pub color: Color32,
    pub speed: f32,
    /// Rotation in radians.
    pub angle: f32,
    pub spin: f32,
}

/// Confetti overlay state. Inactive overlays hold no particles.
pub struct Confetti {
    particles: Vec<Particle>,
    viewport: Vec2,
    count: usize,
    lifetime: Option<Duration>,
    started: Option<Instant>,
    rng: StdRng,
}

impl Confetti {
    pub fn new(count: usize, lifetime: Option<Duration>) -> Self {
        Self::with_rng(count, lifetime, StdRng::from_entropy())
    }

    pub fn from_seed(count: usize, lifetime: Option<Duration>, seed: u64) -> Self {
        Self::with_rng(count, lifetime, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, lifetime: Option<Duration>, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            viewport: Vec2::ZERO,
            count,
            lifetime,
            started: None,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Seed a fresh set of particles above the viewport and start the clock.
    pub fn activate(&mut self, viewport: Vec2, now: Instant) {
        self.viewport = viewport;
        self.particles.clear();
        for _ in 0..self.count {
            let particle = self.spawn();
            self.particles.push(particle);
        }
        self.started = Some(now);
        tracing::debug!(particles = self.particles.len(), "confetti started");
    }

    pub fn deactivate(&mut self) {
        if self.started.take().is_some() {
            tracing::debug!("confetti stopped");
        }
        self.particles.clear();
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Advance every particle by `dt` of wall time.
    ///
    /// Deactivates the overlay once its lifetime has elapsed.
    pub fn step(&mut self, dt: Duration, now: Instant) {
        let Some(started) = self.started else {
            return;
        };
        if let Some(lifetime) = self.lifetime {
            if now.saturating_duration_since(started) >= lifetime {
                self.deactivate();
                return;
            }
        }
        let frames = dt.as_secs_f32() * REFERENCE_FPS;
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y;
        for p in &mut self.particles {
            p.pos.y += p.speed * frames;
            p.angle += p.spin * frames;
            if p.pos.y > height {
                p.pos.y = WRAP_Y;
                p.pos.x = self.rng.gen_range(0.0..width);
            }
        }
    }

    pub fn paint(&self, painter: &egui::Painter) {
        for p in &self.particles {
            painter.add(egui::Shape::convex_polygon(
                particle_corners(p).to_vec(),
                p.color,
                Stroke::NONE,
            ));
        }
    }

    fn spawn(&mut self) -> Particle {
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);
        let rng = &mut self.rng;
        Particle {
            pos: Pos2::new(rng.gen_range(0.0..width), rng.gen_range(-height..0.0)),
            size: Vec2::new(rng.gen_range(5.0..15.0), rng.gen_range(5.0..15.0)),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            speed: rng.gen_range(2.0..7.0),
            angle: rng.gen_range(0.0..360.0),
            spin: rng.gen_range(-0.1..0.1),
        }
    }
}

/// Corners of the particle rectangle rotated about its centre.
pub fn particle_corners(p: &Particle) -> [Pos2; 4] {
    let centre = p.pos + p.size / 2.0;
    let half = p.size / 2.0;
    let (sin, cos) = p.angle.sin_cos();
    let rotate = |v: Vec2| centre + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
    [
        rotate(Vec2::new(-half.x, -half.y)),
        rotate(Vec2::new(half.x, -half.y)),
        rotate(Vec2::new(half.x, half.y)),
        rotate(Vec2::new(-half.x, half.y)),
    ]
}
