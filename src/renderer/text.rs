//! Log-backed renderer for headless runs

use super::Renderer;
use super::ascii::AsciiCanvas;
use crate::hud::{format_score, format_summary, format_timer};
use crate::sim::{Balloon, Defender, Field, MatchSummary};

/// Writes HUD changes to the log and, every `snapshot_every` frames, an ASCII
/// picture of the field at debug level.
pub struct TextRenderer {
    canvas: AsciiCanvas,
    snapshot_every: u64,
    frames: u64,
    score: u32,
    missed: u32,
    summary: Option<MatchSummary>,
}

impl TextRenderer {
    /// `snapshot_every = 0` disables snapshots
    pub fn new(snapshot_every: u64) -> Self {
        Self {
            canvas: AsciiCanvas::new(40, 30),
            snapshot_every,
            frames: 0,
            score: 0,
            missed: 0,
            summary: None,
        }
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// Latest tally seen
    pub fn tally(&self) -> (u32, u32) {
        (self.score, self.missed)
    }

    pub fn summary(&self) -> Option<MatchSummary> {
        self.summary
    }
}

impl Renderer for TextRenderer {
    fn draw_frame(&mut self, field: &Field, defender: &Defender, balloons: &[Balloon]) {
        self.frames += 1;
        if self.snapshot_every == 0 || self.frames % self.snapshot_every != 0 {
            return;
        }
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        self.canvas.paint(field, defender, balloons);
        log::debug!("--- frame {} ({} balloons) ---", self.frames, balloons.len());
        for line in self.canvas.lines() {
            log::debug!("|{}|", line);
        }
        if !balloons.is_empty() {
            log::debug!("{}", balloon_legend(balloons));
        }
    }

    fn tally_changed(&mut self, score: u32, missed: u32) {
        self.score = score;
        self.missed = missed;
        log::info!("Score {}  missed {}", format_score(score), missed);
    }

    fn clock_changed(&mut self, remaining_secs: u32) {
        log::info!("Time {}", format_timer(remaining_secs));
    }

    fn match_finished(&mut self, summary: &MatchSummary) {
        self.summary = Some(*summary);
        log::info!("{}", format_summary(summary));
    }
}

/// One `id:color@x,y` entry per balloon, for snapshot logs
fn balloon_legend(balloons: &[Balloon]) -> String {
    balloons
        .iter()
        .map(|b| format!("{}:{}@{:.0},{:.0}", b.id, b.color.to_hex(), b.pos.x, b.pos.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;
    use glam::Vec2;

    #[test]
    fn test_legend_lists_balloon_colors() {
        let balloons = [
            Balloon::new(1, Vec2::new(120.0, 300.4), 20.0, Color(0x8125A7), 3.0),
            Balloon::new(4, Vec2::new(60.0, 610.0), 10.0, Color(0x0000FF), 3.0),
        ];
        assert_eq!(
            balloon_legend(&balloons),
            "1:#8125A7@120,300 4:#0000FF@60,610"
        );
        assert_eq!(balloon_legend(&[]), "");
    }

    #[test]
    fn test_tracks_tally_and_summary() {
        let mut renderer = TextRenderer::new(0);
        let field = Field::new(400.0, 600.0).unwrap();
        renderer.draw_frame(&field, &Defender::new(200.0), &[]);
        renderer.tally_changed(3, 1);
        renderer.match_finished(&MatchSummary { score: 3, missed: 1 });
        assert_eq!(renderer.frames_drawn(), 1);
        assert_eq!(renderer.tally(), (3, 1));
        assert_eq!(renderer.summary(), Some(MatchSummary { score: 3, missed: 1 }));
    }
}
