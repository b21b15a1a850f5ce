//! Match driver
//!
//! Owns the match clock and the defender, and interleaves the countdown,
//! spawner and frame steps on one thread in time order. Each step completes
//! before the next begins.

use crate::autopilot::Autopilot;
use crate::consts::SECOND_MS;
use crate::error::ConfigError;
use crate::renderer::Renderer;
use crate::sim::{Defender, Field, MatchEvent, MatchPhase, MatchSummary, SimulationEngine};

/// Largest clock advance honoured per call (stalled hosts skip ahead)
pub const MAX_ADVANCE_MS: f64 = 250.0;

/// Step kinds, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    Second,
    Spawn,
    Frame,
}

pub struct MatchDriver {
    engine: SimulationEngine,
    defender: Defender,
    autopilot: Option<Autopilot>,
    clock_ms: f64,
    frame_ms: f64,
    next_second_ms: f64,
    next_frame_ms: f64,
}

impl MatchDriver {
    /// Fails unless `frame_rate_hz` is finite and positive
    pub fn new(field: Field, seed: u64, frame_rate_hz: f64) -> Result<Self, ConfigError> {
        if !(frame_rate_hz.is_finite() && frame_rate_hz > 0.0) {
            return Err(ConfigError::FrameRate(frame_rate_hz));
        }
        let defender = Defender::new(field.width() / 2.0);
        let frame_ms = SECOND_MS / frame_rate_hz;
        Ok(Self {
            engine: SimulationEngine::new(field, seed),
            defender,
            autopilot: None,
            clock_ms: 0.0,
            frame_ms,
            next_second_ms: SECOND_MS,
            next_frame_ms: frame_ms,
        })
    }

    /// Let the autopilot move the pointer before every frame
    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn defender(&self) -> &Defender {
        &self.defender
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn is_finished(&self) -> bool {
        self.engine.phase() == MatchPhase::Finished
    }

    /// Input from the pointer. Ignored once time is up.
    pub fn set_pointer_x(&mut self, x: f32) {
        if self.engine.state().ended() {
            return;
        }
        self.defender.x = x;
    }

    /// Start the match at the current clock
    pub fn start(&mut self, renderer: &mut impl Renderer) {
        self.engine.start(self.clock_ms);
        self.next_second_ms = self.clock_ms + SECOND_MS;
        self.next_frame_ms = self.clock_ms + self.frame_ms;
        self.dispatch(renderer);
    }

    /// Advance the clock by `dt_ms`, running every step that falls due.
    /// Returns the number of frames processed.
    pub fn advance(&mut self, dt_ms: f64, renderer: &mut impl Renderer) -> u32 {
        if self.engine.phase() == MatchPhase::NotStarted {
            return 0;
        }
        let dt_ms = if dt_ms > MAX_ADVANCE_MS {
            log::warn!("Clock jumped {:.0} ms, clamping to {:.0} ms", dt_ms, MAX_ADVANCE_MS);
            MAX_ADVANCE_MS
        } else {
            dt_ms.max(0.0)
        };
        let target = self.clock_ms + dt_ms;

        let mut frames = 0;
        while !self.is_finished() {
            let Some((at, step)) = self.next_step() else {
                break;
            };
            if at > target {
                break;
            }
            self.clock_ms = at;

            match step {
                Step::Second => {
                    self.engine.tick_second();
                    self.next_second_ms += SECOND_MS;
                }
                Step::Spawn => self.engine.poll_spawner(self.clock_ms),
                Step::Frame => {
                    self.run_frame(renderer);
                    self.next_frame_ms += self.frame_ms;
                    frames += 1;
                }
            }
            self.dispatch(renderer);
        }

        if !self.is_finished() {
            self.clock_ms = target;
        }
        frames
    }

    /// Start if needed and run until the match is finished
    pub fn run_to_completion(&mut self, renderer: &mut impl Renderer) -> MatchSummary {
        if self.engine.phase() == MatchPhase::NotStarted {
            self.start(renderer);
        }
        while !self.is_finished() {
            self.advance(self.frame_ms, renderer);
        }
        self.engine.state().summary()
    }

    /// Earliest pending step; ties go to the lower [`Step`]
    fn next_step(&self) -> Option<(f64, Step)> {
        let mut candidates = Vec::with_capacity(3);
        if self.engine.phase() == MatchPhase::Running {
            candidates.push((self.next_second_ms, Step::Second));
        }
        if let Some(due) = self.engine.spawner().due_ms() {
            candidates.push((due, Step::Spawn));
        }
        if self.engine.state().is_live() {
            candidates.push((self.next_frame_ms, Step::Frame));
        }
        candidates
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
    }

    fn run_frame(&mut self, renderer: &mut impl Renderer) {
        if let Some(pilot) = self.autopilot {
            let x = pilot.steer(&self.defender, self.engine.balloons(), self.engine.field());
            self.set_pointer_x(x);
        }
        self.engine.tick_frame(&self.defender);
        renderer.draw_frame(self.engine.field(), &self.defender, self.engine.balloons());
    }

    fn dispatch(&mut self, renderer: &mut impl Renderer) {
        for event in self.engine.drain_events() {
            match event {
                MatchEvent::TallyChanged { score, missed } => renderer.tally_changed(score, missed),
                MatchEvent::ClockChanged { remaining_secs } => renderer.clock_changed(remaining_secs),
                MatchEvent::Finished(summary) => renderer.match_finished(&summary),
                MatchEvent::PhaseChanged(phase) => log::info!("Phase -> {:?}", phase),
                other => log::trace!("{:?}", other),
            }
        }
    }
}
