// Simple particle struct to keep track of individual position, velocity, and size

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniformly placed inside `bounds`, with a small random drift
    pub fn random<R: Rng>(rng: &mut R, bounds: [f64; 2], config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * bounds[0];
        let pos_y = rng.gen::<f64>() * bounds[1];
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.initial_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.initial_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    pub fn advance(&mut self) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }

    // Flips velocity on every axis the particle is currently outside of.
    // Position is left alone, so a particle past the edge flips each frame
    // until it drifts back in.
    pub fn reflect(&mut self, bounds: [f64; 2]) {
        if self.pos[0] < 0.0 || self.pos[0] > bounds[0] {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > bounds[1] {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(
            &glm::vec2(self.pos[0], self.pos[1]),
            &glm::vec2(other.pos[0], other.pos[1]),
        )
    }

    pub fn attract(&mut self, pointer: [f64; 2], radius: f64, pull: f64) {
        let dx = pointer[0] - self.pos[0];
        let dy = pointer[1] - self.pos[1];
        if glm::length(&glm::vec2(dx, dy)) < radius {
            self.vel[0] += dx * pull;
            self.vel[1] += dy * pull;
        }
    }

    pub fn speed(&self) -> f64 {
        glm::length(&glm::vec2(self.vel[0], self.vel[1]))
    }

    pub fn limit_speed(&mut self, max_speed: f64) {
        let speed = self.speed();
        if speed > max_speed && speed > 0.0 {
            let scale = max_speed / speed;
            self.vel[0] *= scale;
            self.vel[1] *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = FieldConfig::default();
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, [800.0, 600.0], &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -0.25 && p.vel[0] < 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn reflects_only_outside_bounds() {
        let mut p = Particle::new(799.0, 300.0, 0.4, 0.0, 2.0);
        p.advance();
        p.reflect([800.0, 600.0]);
        assert_eq!(p.vel, [0.4, 0.0]);

        let mut p = Particle::new(801.0, 300.0, 0.4, 0.0, 2.0);
        p.advance();
        p.reflect([800.0, 600.0]);
        assert_eq!(p.vel, [-0.4, 0.0]);
    }

    #[test]
    fn lingering_outside_flips_every_time() {
        let mut p = Particle::new(-5.0, -5.0, 0.1, 0.1, 1.0);
        p.reflect([10.0, 10.0]);
        assert_eq!(p.vel, [-0.1, -0.1]);
        p.reflect([10.0, 10.0]);
        assert_eq!(p.vel, [0.1, 0.1]);
    }

    #[test]
    fn edge_is_inside() {
        let mut p = Particle::new(0.0, 600.0, 1.0, 1.0, 1.0);
        p.reflect([800.0, 600.0]);
        assert_eq!(p.vel, [1.0, 1.0]);
    }

    #[test]
    fn attraction_is_strict_and_proportional() {
        let mut near = Particle::new(100.0, 100.0, 0.0, 0.0, 1.0);
        near.attract([200.0, 100.0], 150.0, 0.0001);
        assert!((near.vel[0] - 0.01).abs() < 1e-15);
        assert_eq!(near.vel[1], 0.0);

        let mut far = Particle::new(100.0, 100.0, 0.0, 0.0, 1.0);
        far.attract([250.0, 100.0], 150.0, 0.0001);
        assert_eq!(far.vel, [0.0, 0.0]);
    }

    #[test]
    fn limit_speed_keeps_direction() {
        let mut p = Particle::new(0.0, 0.0, 3.0, 4.0, 1.0);
        p.limit_speed(1.0);
        assert!((p.speed() - 1.0).abs() < 1e-12);
        assert!((p.vel[0] - 0.6).abs() < 1e-12);
        assert!((p.vel[1] - 0.8).abs() < 1e-12);

        let mut slow = Particle::new(0.0, 0.0, 0.1, 0.0, 1.0);
        slow.limit_speed(1.0);
        assert_eq!(slow.vel, [0.1, 0.0]);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Particle::new(0.0, 0.0, 0.0, 0.0, 1.0);
        let b = Particle::new(3.0, 4.0, 0.0, 0.0, 1.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
