// Tunables for the particle field. Defaults reproduce the portfolio page's
// background effect.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Each velocity component is drawn from `[-initial_speed, initial_speed)`.
    pub initial_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub color: Color,
    pub particle_alpha: f64,
    /// Pairs closer than this (strictly) are connected by a line.
    pub link_distance: f64,
    /// Link alpha at zero distance, falling off linearly to 0 at `link_distance`.
    pub link_alpha: f64,
    pub link_width: f64,
    /// Particles strictly inside this radius are pulled towards the pointer.
    pub pointer_radius: f64,
    pub pointer_pull: f64,
    /// Draw each connected pair once instead of once per endpoint.
    pub unique_links: bool,
    /// Speed cap applied after pointer attraction. `None` leaves velocity
    /// growth near the pointer unbounded.
    pub max_speed: Option<f64>,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 100;
    pub const LINK_DISTANCE: f64 = 120.0;
    pub const POINTER_RADIUS: f64 = 150.0;

    pub fn link_alpha_at(&self, distance: f64) -> Option<f64> {
        if distance < self.link_distance {
            Some((self.link_alpha * (1.0 - distance / self.link_distance)).max(0.0))
        } else {
            None
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            initial_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            color: Color::from_u32(0x00ff88ff),
            particle_alpha: 0.5,
            link_distance: FieldConfig::LINK_DISTANCE,
            link_alpha: 0.2,
            link_width: 0.5,
            pointer_radius: FieldConfig::POINTER_RADIUS,
            pointer_pull: 0.0001,
            unique_links: false,
            max_speed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_threshold_is_strict() {
        let config = FieldConfig::default();
        assert_eq!(config.link_alpha_at(120.0), None);
        assert_eq!(config.link_alpha_at(500.0), None);
    }

    #[test]
    fn link_alpha_falls_off_linearly() {
        let config = FieldConfig::default();
        assert_eq!(config.link_alpha_at(0.0), Some(0.2));
        let half = config.link_alpha_at(60.0).unwrap();
        assert!((half - 0.1).abs() < 1e-12);
    }

    #[test]
    fn link_alpha_just_inside_threshold() {
        let config = FieldConfig::default();
        let alpha = config.link_alpha_at(119.999).unwrap();
        let expected = 0.2 * (1.0 - 119.999 / 120.0);
        assert!(alpha > 0.0);
        assert!((alpha - expected).abs() < 1e-15);
        assert!((alpha - 1.6667e-6).abs() < 1e-9);
    }
}
