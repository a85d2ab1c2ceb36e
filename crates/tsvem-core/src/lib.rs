// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Degradation Model & Lifetime Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electromigration lifetime modeling for TSV buses in 3D-stacked DRAM.
//!
//! Vacancy flux through the TSV barrier drives void growth; accumulated
//! void radius maps linearly to resistance gain, and each subarray
//! parallelism level fails once its resistance-gain limit is exceeded.
//! The engine walks the parallelism ladder from the top down and records
//! the lifetime achieved at every level.

pub mod engine;
pub mod material;
pub mod profile;

pub use engine::{EngineState, LevelLifetime, LifetimeEngine, StepOutcome};
pub use material::DerivedConstants;
pub use profile::{build_profiles, parallelism_levels, DegradationProfile};

use tsvem_types::config::PhysicalConstants;
use tsvem_types::error::{EmError, EmResult};

/// Full lifetime study: validate, derive, build one degradation profile
/// per parallelism level, and run the engine to completion.
///
/// `limits` holds one resistance-gain limit [%] per level, highest
/// parallelism first. Returns one `LevelLifetime` per level, in the same
/// order. Any validation failure is raised before a single step runs.
pub fn run_lifetime_study(
    max_parallelism: u32,
    limits: &[f64],
    constants: &PhysicalConstants,
) -> EmResult<Vec<LevelLifetime>> {
    constants.validate()?;
    if max_parallelism < 1 {
        return Err(EmError::InvalidConfiguration(format!(
            "max_parallelism must be >= 1, got {max_parallelism}"
        )));
    }
    let derived = DerivedConstants::derive(constants)?;
    let profiles = build_profiles(max_parallelism, constants, &derived)?;
    let mut engine = LifetimeEngine::new(constants.clone(), profiles, limits.to_vec())?;
    engine.run();
    Ok(engine.into_record())
}
