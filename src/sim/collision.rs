//! Circle/circle collision detection and response
//!
//! Response is deliberately simple: the two bodies trade velocity vectors
//! outright and are each pushed apart by the full overlap (plus a margin)
//! along the line of centers.

use glam::Vec2;

use super::body::Body;
use crate::consts::COLLISION_MARGIN;
use crate::{direction, distance};

/// Contact between two overlapping circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Angle of the line from the first center to the second (radians)
    pub angle: f32,
    /// Distance each body is pushed along that line
    pub overlap: f32,
}

/// Check two circles for overlap
///
/// Touching circles (distance == r_a + r_b) do not collide. Coincident centers
/// report an angle of 0, so the pair separates along +X.
pub fn circle_contact(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> Option<Contact> {
    let dist = distance(a_pos, b_pos);
    let radii = a_radius + b_radius;
    if dist >= radii {
        return None;
    }

    let delta = b_pos - a_pos;
    let angle = if delta == Vec2::ZERO {
        0.0
    } else {
        delta.y.atan2(delta.x)
    };

    Some(Contact {
        angle,
        overlap: radii - dist + COLLISION_MARGIN,
    })
}

/// Apply a contact: swap velocities and push the bodies apart
pub fn resolve_contact(a: &mut Body, b: &mut Body, contact: &Contact) {
    std::mem::swap(&mut a.vel, &mut b.vel);

    let push = direction(contact.angle) * contact.overlap;
    a.pos -= push;
    b.pos += push;
}

/// Mutable references to two distinct elements of a slice
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut requires distinct indices");
    if i < j {
        let (lo, hi) = items.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn body(x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), r, "blue", "b")
    }

    #[test]
    fn test_no_contact_when_apart_or_touching() {
        assert!(circle_contact(Vec2::ZERO, 10.0, Vec2::new(30.0, 0.0), 10.0).is_none());
        // Exactly tangent
        assert!(circle_contact(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn test_contact_angle_and_overlap() {
        let c = circle_contact(Vec2::new(100.0, 97.0), 20.0, Vec2::new(100.0, 70.0), 20.0)
            .unwrap();
        assert!((c.angle + FRAC_PI_2).abs() < 1e-6);
        assert!((c.overlap - 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_centers_use_zero_angle() {
        let c = circle_contact(Vec2::new(5.0, 5.0), 10.0, Vec2::new(5.0, 5.0), 10.0).unwrap();
        assert_eq!(c.angle, 0.0);
        assert_eq!(c.overlap, 21.0);

        let mut a = body(5.0, 5.0, 10.0, 1.0, 0.0);
        let mut b = body(5.0, 5.0, 10.0, 0.0, 1.0);
        resolve_contact(&mut a, &mut b, &c);
        assert_eq!(a.pos, Vec2::new(-16.0, 5.0));
        assert_eq!(b.pos, Vec2::new(26.0, 5.0));
    }

    #[test]
    fn test_resolve_swaps_velocities_exactly() {
        let mut a = body(0.0, 0.0, 10.0, 1.5, -2.0);
        let mut b = body(15.0, 0.0, 10.0, -0.25, 3.0);
        let c = circle_contact(a.pos, a.radius, b.pos, b.radius).unwrap();
        resolve_contact(&mut a, &mut b, &c);

        assert_eq!(a.vel, Vec2::new(-0.25, 3.0));
        assert_eq!(b.vel, Vec2::new(1.5, -2.0));
        // 15 + 2 * (20 - 15 + 1)
        assert!((distance(a.pos, b.pos) - 27.0).abs() < 1e-4);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut v = vec![1, 2, 3];
        {
            let (a, b) = pair_mut(&mut v, 0, 2);
            std::mem::swap(a, b);
        }
        assert_eq!(v, vec![3, 2, 1]);
        {
            let (a, b) = pair_mut(&mut v, 2, 1);
            assert_eq!((*a, *b), (1, 2));
        }
    }
}
