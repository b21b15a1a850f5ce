//! The player's pointer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFENDER_HEIGHT, DEFENDER_WIDTH};

/// A spike hanging from the top edge. Only its tip pops balloons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    /// Horizontal pointer position (owned by the input side)
    pub x: f32,
    /// Length of the spike, the tip sits at y = height
    pub height: f32,
    /// Base width (drawing only)
    pub width: f32,
}

impl Defender {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            height: DEFENDER_HEIGHT,
            width: DEFENDER_WIDTH,
        }
    }

    /// Point balloons must approach to be popped
    #[inline]
    pub fn tip(&self) -> Vec2 {
        Vec2::new(self.x, self.height)
    }
}
