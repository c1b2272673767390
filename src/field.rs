// The particle field: a fixed set of drifting points that link up with nearby
// neighbours and lean towards the pointer. Host-agnostic; the browser glue in
// `app` feeds it resize/pointer events and calls `step` once per frame.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

/// Counts from one call to `ParticleField::step`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    pointer: [f64; 2],
    bounds: [f64; 2],
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng>(bounds: [f64; 2], config: FieldConfig, rng: &mut R) -> ParticleField {
        let particles: Vec<Particle> = (0..config.particle_count)
            .map(|_| Particle::random(rng, bounds, &config))
            .collect();
        log::debug!(
            "created {} particles in {}x{}",
            particles.len(),
            bounds[0],
            bounds[1]
        );
        ParticleField {
            particles,
            pointer: [0.0, 0.0],
            bounds,
            config,
        }
    }

    // Fixed starting state, mostly for tests. The configured count follows the
    // given particles.
    pub fn from_particles(
        bounds: [f64; 2],
        mut config: FieldConfig,
        particles: Vec<Particle>,
    ) -> ParticleField {
        config.particle_count = particles.len();
        ParticleField {
            particles,
            pointer: [0.0, 0.0],
            bounds,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    pub fn pointer(&self) -> [f64; 2] {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    // Only the reflection bounds change. Existing particles keep their
    // positions even if they now sit outside the surface.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.bounds == [width, height] {
            return false;
        }
        log::debug!(
            "bounds {}x{} -> {}x{}",
            self.bounds[0],
            self.bounds[1],
            width,
            height
        );
        self.bounds = [width, height];
        true
    }

    pub fn step<S: Surface>(&mut self, surface: &mut S) -> Result<FrameStats, S::Error> {
        let bounds = self.bounds;
        let config = &self.config;
        surface.clear_rect(0.0, 0.0, bounds[0], bounds[1])?;

        let mut stats = FrameStats {
            particles: self.particles.len(),
            links: 0,
        };
        for i in 0..self.particles.len() {
            self.particles[i].advance();
            self.particles[i].reflect(bounds);

            let particle = self.particles[i];
            surface.fill_circle(
                particle.pos,
                particle.radius,
                config.color,
                config.particle_alpha,
            )?;

            // Earlier particles have already moved this frame, later ones haven't
            let first = if config.unique_links { i + 1 } else { 0 };
            for (j, other) in self.particles.iter().enumerate().skip(first) {
                if i == j {
                    continue;
                }
                if let Some(alpha) = config.link_alpha_at(particle.distance_to(other)) {
                    surface.stroke_line(
                        particle.pos,
                        other.pos,
                        config.color,
                        alpha,
                        config.link_width,
                    )?;
                    stats.links += 1;
                }
            }

            let particle = &mut self.particles[i];
            particle.attract(self.pointer, config.pointer_radius, config.pointer_pull);
            if let Some(max_speed) = config.max_speed {
                particle.limit_speed(max_speed);
            }
        }
        log::trace!("frame: {:?}", stats);
        Ok(stats)
    }
}
