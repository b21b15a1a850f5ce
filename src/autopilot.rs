//! Demo pointer input
//!
//! Stands in for the mouse in headless runs: chases the balloon that will
//! reach the defender's tip soonest, at a bounded speed.

use crate::sim::{Balloon, Defender, Field};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Maximum pointer travel per frame
    pub max_speed: f32,
}

impl Autopilot {
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed: max_speed.max(0.0),
        }
    }

    /// Column of the most urgent balloon that has not risen past the tip
    pub fn target(&self, defender: &Defender, balloons: &[Balloon]) -> Option<f32> {
        let tip_y = defender.tip().y;
        balloons
            .iter()
            .filter(|b| b.pos.y + b.radius > tip_y && b.lift_speed > 0.0)
            .min_by(|a, b| {
                let ta = (a.pos.y - tip_y) / a.lift_speed;
                let tb = (b.pos.y - tip_y) / b.lift_speed;
                ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|b| b.pos.x)
    }

    /// Next pointer x, kept inside the field
    pub fn steer(&self, defender: &Defender, balloons: &[Balloon], field: &Field) -> f32 {
        let x = match self.target(defender, balloons) {
            Some(target) => {
                let delta = (target - defender.x).clamp(-self.max_speed, self.max_speed);
                defender.x + delta
            }
            None => defender.x,
        };
        x.clamp(0.0, field.width())
    }
}
