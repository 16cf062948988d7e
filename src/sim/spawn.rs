//! Initial body placement
//!
//! Bodies start below the bottom edge, staggered by index so they enter the
//! surface one after another, and drift upward.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::world::Bounds;
use crate::settings::Settings;

/// Spawn `settings.body_count` bodies from a seed
///
/// Labels run from "1" upward in spawn order.
pub fn spawn_bodies(settings: &Settings, bounds: Bounds, seed: u64) -> Vec<Body> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..settings.body_count)
        .map(|i| spawn_body(&mut rng, settings, bounds, i))
        .collect()
}

fn spawn_body(rng: &mut Pcg32, settings: &Settings, bounds: Bounds, index: usize) -> Body {
    let radius = rng.random::<f32>() * (settings.radius_max - settings.radius_min)
        + settings.radius_min;
    let x = rng.random::<f32>() * (bounds.width - radius * 2.0) + radius;
    let y = bounds.height + radius + index as f32 * settings.spawn_spacing;

    // Horizontal in [-speed, speed), vertical upward in (-speed, 0]
    let vx = (rng.random::<f32>() - 0.5) * 2.0 * settings.speed;
    let vy = -rng.random::<f32>() * settings.speed;

    let label = (index + 1).to_string();
    Body::new(
        Vec2::new(x, y),
        Vec2::new(vx, vy),
        radius,
        &settings.body_color,
        &label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_count_and_labels() {
        let bodies = spawn_bodies(&Settings::default(), bounds(), 7);
        assert_eq!(bodies.len(), 20);
        assert_eq!(bodies[0].label, "1");
        assert_eq!(bodies[19].label, "20");
        assert!(bodies.iter().all(|b| b.visible && b.color == "blue"));
    }

    #[test]
    fn test_spawn_ranges() {
        let settings = Settings::default();
        let b = bounds();
        for (i, body) in spawn_bodies(&settings, b, 42).iter().enumerate() {
            assert!(body.radius >= 20.0 && body.radius <= 70.0);
            assert!(body.pos.x >= body.radius - 1e-3);
            assert!(body.pos.x <= b.width - body.radius + 1e-3);
            let expected_y = b.height + body.radius + i as f32 * 50.0;
            assert!((body.pos.y - expected_y).abs() < 1e-3);
            assert!(body.vel.x.abs() <= 3.0);
            assert!(body.vel.y <= 0.0 && body.vel.y >= -3.0);
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let a = spawn_bodies(&Settings::default(), bounds(), 1234);
        let b = spawn_bodies(&Settings::default(), bounds(), 1234);
        let c = spawn_bodies(&Settings::default(), bounds(), 4321);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
