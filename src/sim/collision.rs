//! Collision checks between balloons and the defender tip
//!
//! The defender contributes a point, the balloon its own radius.

use glam::Vec2;

/// Whether a balloon centered at `pos` is close enough to `tip` to pop.
/// Touching exactly at the rim does not count.
#[inline]
pub fn balloon_tip_hit(pos: Vec2, radius: f32, tip: Vec2) -> bool {
    pos.distance(tip) < radius
}

/// Whether a balloon has fully left the top of the field
#[inline]
pub fn balloon_escaped(pos: Vec2, radius: f32) -> bool {
    pos.y + radius <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hit_is_strict_at_rim() {
        let tip = Vec2::new(200.0, 50.0);
        assert!(!balloon_tip_hit(Vec2::new(220.0, 50.0), 20.0, tip));
        assert!(!balloon_tip_hit(Vec2::new(212.0, 66.0), 20.0, tip));
        assert!(balloon_tip_hit(Vec2::new(211.0, 66.0), 20.0, tip));
    }

    #[test]
    fn test_escape_boundary() {
        assert!(balloon_escaped(Vec2::new(0.0, -20.0), 20.0));
        assert!(!balloon_escaped(Vec2::new(0.0, -19.5), 20.0));
    }

    proptest! {
        #[test]
        fn prop_tip_inside_balloon_always_hits(
            x in 0.0f32..1000.0,
            y in -100.0f32..1000.0,
            radius in 0.001f32..100.0,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!(balloon_tip_hit(p, radius, p));
        }
    }
}
