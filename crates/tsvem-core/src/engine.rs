// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Lifetime Simulation Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-step lifetime simulation over the parallelism ladder.
//!
//! The engine accumulates void growth at the current level until the
//! level's resistance-gain limit is exceeded, rolls back to the last
//! accepted step boundary, records that instant as the level's lifetime,
//! and demotes to the next lower parallelism level. Void growth is
//! cumulative across levels: a demotion rolls back one step, it never
//! resets the void.

use std::fmt;

use tsvem_types::config::PhysicalConstants;
use tsvem_types::constants::{M_TO_UM, SECONDS_PER_YEAR};
use tsvem_types::error::{EmError, EmResult};

use crate::profile::DegradationProfile;

/// Explicit engine state: stepping at a level index, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Stepping(usize),
    Done,
}

/// Result of one call to [`LifetimeEngine::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Gain stayed within the limit; the step was accepted.
    Committed,
    /// The level's limit was exceeded; state rolled back one step and
    /// the level's lifetime was recorded.
    ThresholdCrossed(LevelLifetime),
    /// The engine had already finished; nothing changed.
    Done,
}

/// Lifetime achieved at one parallelism level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLifetime {
    /// Number of simultaneous SA activations at this level.
    pub parallelism: u32,
    /// Simulated time at which the level's limit was reached [s].
    pub lifetime_seconds: f64,
}

impl LevelLifetime {
    pub fn lifetime_years(&self) -> f64 {
        self.lifetime_seconds / SECONDS_PER_YEAR
    }
}

impl fmt::Display for LevelLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} SA parallelism: lifetime {:e} s ({:.2} years)",
            self.parallelism,
            self.lifetime_seconds,
            self.lifetime_years()
        )
    }
}

/// Mutable accumulators of the stepping loop. Each quantity carries a
/// last-accepted snapshot; a rollback restores the full triple, never a
/// partial one.
#[derive(Debug, Clone, Copy, Default)]
struct SimulationState {
    elapsed_time: f64,
    void_radius: f64,
    resistance_gain: f64,
    last_time: f64,
    last_void_radius: f64,
    last_resistance_gain: f64,
    parallelism: u32,
}

/// The stepping state machine over an ordered set of degradation
/// profiles (highest parallelism first) and matching gain limits.
#[derive(Debug)]
pub struct LifetimeEngine {
    constants: PhysicalConstants,
    profiles: Vec<DegradationProfile>,
    limits: Vec<f64>,
    state: EngineState,
    sim: SimulationState,
    record: Vec<LevelLifetime>,
}

impl LifetimeEngine {
    /// Validate the configuration and set up the initial state.
    ///
    /// All malformed-input detection happens here, before any stepping:
    /// a failed construction has performed zero steps.
    pub fn new(
        constants: PhysicalConstants,
        profiles: Vec<DegradationProfile>,
        limits: Vec<f64>,
    ) -> EmResult<Self> {
        constants.validate()?;

        if profiles.is_empty() {
            return Err(EmError::InvalidConfiguration(
                "no degradation profiles supplied".into(),
            ));
        }
        if limits.len() != profiles.len() {
            return Err(EmError::InvalidConfiguration(format!(
                "{} resistance-gain limits for {} parallelism levels",
                limits.len(),
                profiles.len()
            )));
        }
        for pair in profiles.windows(2) {
            if pair[1].parallelism >= pair[0].parallelism {
                return Err(EmError::InvalidConfiguration(format!(
                    "parallelism levels must be strictly decreasing, got {} then {}",
                    pair[0].parallelism, pair[1].parallelism
                )));
            }
        }
        for (profile, &limit) in profiles.iter().zip(&limits) {
            if profile.parallelism < 1 {
                return Err(EmError::InvalidParallelism(profile.parallelism));
            }
            if !limit.is_finite() || limit <= 0.0 {
                return Err(EmError::InvalidConfiguration(format!(
                    "resistance-gain limit for {}x must be finite and positive, got {limit}",
                    profile.parallelism
                )));
            }
            // Non-progress guard: a level that never grows its void would
            // step forever without ever reaching its limit.
            if !profile.void_growth_per_step.is_finite() || profile.void_growth_per_step <= 0.0 {
                return Err(EmError::InvalidConfiguration(format!(
                    "void growth per step for {}x must be finite and positive, got {:e}",
                    profile.parallelism, profile.void_growth_per_step
                )));
            }
        }
        for pair in limits.windows(2) {
            if pair[1] <= pair[0] {
                return Err(EmError::InvalidConfiguration(format!(
                    "resistance-gain limits must be strictly increasing \
                     toward lower parallelism, got {} then {}",
                    pair[0], pair[1]
                )));
            }
        }

        let sim = SimulationState {
            parallelism: profiles[0].parallelism,
            ..Default::default()
        };
        Ok(LifetimeEngine {
            constants,
            profiles,
            limits,
            state: EngineState::Stepping(0),
            sim,
            record: Vec::new(),
        })
    }

    fn resistance_gain(&self, void_radius: f64) -> f64 {
        self.constants.res_gain_slope * void_radius * M_TO_UM + self.constants.res_gain_intercept
    }

    /// Advance the simulation by one time step.
    pub fn step(&mut self) -> StepOutcome {
        let level = match self.state {
            EngineState::Stepping(level) => level,
            EngineState::Done => return StepOutcome::Done,
        };

        self.sim.elapsed_time += self.constants.time_step;
        self.sim.void_radius += self.profiles[level].void_growth_per_step;
        self.sim.resistance_gain = self.resistance_gain(self.sim.void_radius);

        if self.sim.resistance_gain > self.limits[level] {
            // The level's lifetime is the last instant before the limit
            // was exceeded, so undo exactly this step.
            self.sim.elapsed_time = self.sim.last_time;
            self.sim.void_radius = self.sim.last_void_radius;
            self.sim.resistance_gain = self.sim.last_resistance_gain;

            let record = LevelLifetime {
                parallelism: self.profiles[level].parallelism,
                lifetime_seconds: self.sim.elapsed_time,
            };
            self.record.push(record.clone());

            self.sim.parallelism /= 2;
            self.state = if self.sim.parallelism < 1 || level + 1 == self.profiles.len() {
                EngineState::Done
            } else {
                EngineState::Stepping(level + 1)
            };
            StepOutcome::ThresholdCrossed(record)
        } else {
            self.sim.last_time = self.sim.elapsed_time;
            self.sim.last_void_radius = self.sim.void_radius;
            self.sim.last_resistance_gain = self.sim.resistance_gain;
            StepOutcome::Committed
        }
    }

    /// Step until `Done`; returns the full lifetime record.
    pub fn run(&mut self) -> &[LevelLifetime] {
        while self.state != EngineState::Done {
            self.step();
        }
        &self.record
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Parallelism at the level currently being stepped (halves on each
    /// demotion; 0 once the ladder is exhausted).
    pub fn current_parallelism(&self) -> u32 {
        self.sim.parallelism
    }

    pub fn elapsed_time(&self) -> f64 {
        self.sim.elapsed_time
    }

    pub fn void_radius(&self) -> f64 {
        self.sim.void_radius
    }

    pub fn record(&self) -> &[LevelLifetime] {
        &self.record
    }

    pub fn into_record(self) -> Vec<LevelLifetime> {
        self.record
    }
}
