//! Wind model
//!
//! A soft-bounded random walk stepped once per second. Near the bound the step
//! is biased back toward zero instead of being clamped.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_WIND, WIND_ADD};
use crate::round_half_up;

/// Signed horizontal wind (positive blows toward +x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind(pub i32);

impl Wind {
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Advance one second using a uniform sample `r` in [0, 1)
    pub fn step_with(&mut self, r: f32) {
        let add = WIND_ADD as f32;
        if self.0 + WIND_ADD > MAX_WIND {
            self.0 -= round_half_up(r * add) as i32;
        } else if self.0 - WIND_ADD < -MAX_WIND {
            self.0 += round_half_up(r * add) as i32;
        } else {
            self.0 += round_half_up((r * 2.0 - 1.0) * add) as i32;
        }
    }

    /// Advance one second drawing from `rng`
    pub fn step(&mut self, rng: &mut impl Rng) {
        let before = self.0;
        self.step_with(rng.random::<f32>());
        log::trace!("Wind {} -> {}", before, self.0);
    }

    /// Horizontal drift for a balloon at `x`. Drift tapers to zero at the
    /// edge the wind is pushing toward.
    #[inline]
    pub fn drift_at(&self, x: f32, field_width: f32) -> f32 {
        let wind = self.0 as f32;
        if self.0 >= 0 {
            wind * (field_width - x) / field_width
        } else {
            wind * x / field_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_step_pulls_back_near_upper_bound() {
        let mut wind = Wind(9);
        wind.step_with(0.99);
        assert_eq!(wind.value(), 7);
        let mut wind = Wind(9);
        wind.step_with(0.0);
        assert_eq!(wind.value(), 9);
    }

    #[test]
    fn test_step_pulls_back_near_lower_bound() {
        let mut wind = Wind(-9);
        wind.step_with(0.99);
        assert_eq!(wind.value(), -7);
    }

    #[test]
    fn test_step_unbiased_in_the_middle() {
        let mut wind = Wind(0);
        wind.step_with(0.0);
        assert_eq!(wind.value(), -2);
        let mut wind = Wind(0);
        wind.step_with(0.5);
        assert_eq!(wind.value(), 0);
        let mut wind = Wind(0);
        wind.step_with(0.99);
        assert_eq!(wind.value(), 2);
    }

    #[test]
    fn test_drift_tapers_toward_target_edge() {
        let wind = Wind(10);
        assert_eq!(wind.drift_at(0.0, 400.0), 10.0);
        assert_eq!(wind.drift_at(400.0, 400.0), 0.0);
        let wind = Wind(-10);
        assert_eq!(wind.drift_at(10.0, 400.0), -0.25);
        assert_eq!(wind.drift_at(0.0, 400.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_wind_stays_bounded(samples in proptest::collection::vec(0.0f32..1.0, 1..500)) {
            let mut wind = Wind::default();
            for r in samples {
                wind.step_with(r);
                prop_assert!(wind.value().abs() <= MAX_WIND + WIND_ADD);
            }
        }

        #[test]
        fn prop_seeded_wind_stays_bounded(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut wind = Wind::default();
            for _ in 0..1000 {
                wind.step(&mut rng);
                prop_assert!(wind.value().abs() <= MAX_WIND + WIND_ADD);
            }
        }
    }
}
