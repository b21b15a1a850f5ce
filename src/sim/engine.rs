//! Simulation engine
//!
//! Three entry points, each run to completion before the next:
//! - [`SimulationEngine::tick_second`] advances the countdown, difficulty and wind
//! - [`SimulationEngine::poll_spawner`] fires due spawns on the match clock
//! - [`SimulationEngine::tick_frame`] moves balloons and resolves pops/escapes

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::balloon::{Balloon, Color};
use super::defender::Defender;
use super::difficulty::Difficulty;
use super::field::Field;
use super::spawner::Spawner;
use super::state::{MatchEvent, MatchPhase, MatchState};
use crate::consts::TIME_LIMIT;

/// Counts resolved during a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub popped: u32,
    pub escaped: u32,
}

/// Owns one match: state, live balloons, spawn schedule and RNG
pub struct SimulationEngine {
    field: Field,
    state: MatchState,
    /// Live balloons (sorted by id)
    balloons: Vec<Balloon>,
    spawner: Spawner,
    rng: Pcg32,
    events: Vec<MatchEvent>,
    next_id: u32,
}

impl SimulationEngine {
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            state: MatchState::new(seed),
            balloons: Vec::new(),
            spawner: Spawner::default(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Take the notifications produced since the last drain
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin the match at `now_ms` on the match clock. One balloon appears
    /// immediately, the next is scheduled one spawn interval later.
    pub fn start(&mut self, now_ms: f64) {
        if self.state.phase != MatchPhase::NotStarted {
            log::warn!("Ignoring start in phase {:?}", self.state.phase);
            return;
        }
        self.state.difficulty = Difficulty::at(0);
        self.set_phase(MatchPhase::Running);
        self.events.push(MatchEvent::TallyChanged {
            score: 0,
            missed: 0,
        });
        self.events.push(MatchEvent::ClockChanged {
            remaining_secs: self.state.remaining_secs(),
        });

        self.spawn_balloon();
        self.spawner
            .arm(now_ms, self.state.difficulty.spawn_interval_ms);
        log::info!(
            "Match started (seed {}, field {}x{})",
            self.state.seed,
            self.field.width(),
            self.field.height()
        );
    }

    /// Once-per-second countdown step
    pub fn tick_second(&mut self) {
        if self.state.phase != MatchPhase::Running {
            return;
        }

        self.state.elapsed_secs += 1;
        self.events.push(MatchEvent::ClockChanged {
            remaining_secs: self.state.remaining_secs(),
        });

        if self.state.elapsed_secs >= TIME_LIMIT {
            self.set_phase(MatchPhase::Ending);
            log::info!(
                "Time up with {} balloons airborne",
                self.balloons.len()
            );
            return;
        }

        self.state.difficulty = Difficulty::at(self.state.elapsed_secs);
        self.state.wind.step(&mut self.rng);
    }

    /// Fire every spawn due at or before `now_ms`. After the match has ended
    /// the queued spawn still fires once, then the spawner stops.
    pub fn poll_spawner(&mut self, now_ms: f64) {
        if !self.state.is_live() {
            return;
        }

        while self.spawner.take_due(now_ms) {
            self.spawn_balloon();
            if self.state.ended() {
                self.spawner.stop();
                log::debug!("Spawner stopped after {} spawns", self.spawner.fired());
                break;
            }
            self.spawner
                .reschedule(self.state.difficulty.spawn_interval_ms);
        }
        self.check_finished();
    }

    /// Per-frame physics: move every balloon, then pop or drop it
    pub fn tick_frame(&mut self, defender: &Defender) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.state.is_live() {
            return report;
        }

        self.state.frames += 1;
        let tip = defender.tip();
        let wind = self.state.wind;

        for balloon in &mut self.balloons {
            balloon.advance(wind, &self.field);

            if balloon.is_ready_to_blast(tip) {
                balloon.alive = false;
                report.popped += 1;
                self.events.push(MatchEvent::Popped { id: balloon.id });
                log::debug!("Balloon {} popped at {:?}", balloon.id, balloon.pos);
            } else if balloon.has_escaped() {
                balloon.alive = false;
                report.escaped += 1;
                self.events.push(MatchEvent::Escaped { id: balloon.id });
                log::debug!("Balloon {} escaped", balloon.id);
            }
        }
        self.balloons.retain(|b| b.alive);

        if report.popped > 0 || report.escaped > 0 {
            self.state.score += report.popped;
            self.state.missed += report.escaped;
            self.events.push(MatchEvent::TallyChanged {
                score: self.state.score,
                missed: self.state.missed,
            });
        }

        self.check_finished();
        report
    }

    /// Add a balloon with explicit geometry (scripted hosts and tests)
    pub fn insert_balloon(&mut self, pos: Vec2, radius: f32, color: Color, lift_speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.balloons
            .push(Balloon::new(id, pos, radius, color, lift_speed));
        self.state.spawned += 1;
        self.events.push(MatchEvent::Spawned { id });
        id
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_balloon(&mut self) {
        let id = self.next_entity_id();
        let balloon = Balloon::spawn(
            id,
            &self.field,
            self.state.difficulty.lift_speed,
            &mut self.rng,
        );
        log::debug!(
            "Spawned balloon {} at x={} r={} lift={}",
            id,
            balloon.pos.x,
            balloon.radius,
            balloon.lift_speed
        );
        self.balloons.push(balloon);
        self.state.spawned += 1;
        self.events.push(MatchEvent::Spawned { id });
    }

    fn set_phase(&mut self, phase: MatchPhase) {
        self.state.phase = phase;
        self.events.push(MatchEvent::PhaseChanged(phase));
    }

    fn check_finished(&mut self) {
        if self.state.phase == MatchPhase::Ending
            && self.spawner.is_stopped()
            && self.balloons.is_empty()
        {
            self.set_phase(MatchPhase::Finished);
            let summary = self.state.summary();
            log::info!(
                "Match finished: {} blasted, {} missed",
                summary.score,
                summary.missed
            );
            self.events.push(MatchEvent::Finished(summary));
        }
    }
}
