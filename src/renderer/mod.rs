//! Render collaborator interface
//!
//! The simulation never draws. Hosts implement [`Renderer`] and the driver
//! feeds it once per frame plus on every HUD-relevant change.

pub mod ascii;
pub mod text;

pub use ascii::AsciiCanvas;
pub use text::TextRenderer;

use crate::sim::{Balloon, Defender, Field, MatchSummary};

pub trait Renderer {
    /// Draw one frame: the defender and the live balloons in id order
    fn draw_frame(&mut self, field: &Field, defender: &Defender, balloons: &[Balloon]);

    /// Score or miss count changed
    fn tally_changed(&mut self, _score: u32, _missed: u32) {}

    /// Countdown changed
    fn clock_changed(&mut self, _remaining_secs: u32) {}

    /// Terminal event, delivered exactly once
    fn match_finished(&mut self, summary: &MatchSummary);
}
