// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — TSV Degradation Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-parallelism-level electromigration stress on the TSV bus.
//!
//! Each simultaneous subarray activation draws IDD0 through the shared
//! bus; the per-device share of that current sets the vacancy flux and
//! thus the void growth rate for the level.

use tsvem_types::config::PhysicalConstants;
use tsvem_types::constants::{K_BOLTZMANN, Q_ELECTRON};
use tsvem_types::error::{EmError, EmResult};

use crate::material::DerivedConstants;

/// Steady-state degradation parameters for one parallelism level.
/// Immutable once built; the engine only reads `void_growth_per_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationProfile {
    /// Number of simultaneous SA activations.
    pub parallelism: u32,
    /// Total bus current [A].
    pub total_current: f64,
    /// Per-device share of the bus current [A].
    pub current_per_device: f64,
    /// Current density through the TSV cross-section [A/m^2].
    pub current_density: f64,
    /// Electromigration vacancy flux [m^-2 s^-1].
    pub vacancy_flux: f64,
    /// Void radius growth per simulation step [m].
    pub void_growth_per_step: f64,
}

impl DegradationProfile {
    /// Evaluate the closed-form EM model for one parallelism level.
    pub fn build(
        parallelism: u32,
        constants: &PhysicalConstants,
        derived: &DerivedConstants,
    ) -> EmResult<Self> {
        if parallelism < 1 {
            return Err(EmError::InvalidParallelism(parallelism));
        }

        let total_current = f64::from(parallelism) * constants.idd0;
        let current_per_device = total_current / constants.devices_per_bus;
        let current_density = current_per_device / derived.tsv_cross_section_area;

        // Black-style drift term: D_v * c_v * (q Z* / k_B T) * rho * j.
        let vacancy_flux = derived.vacancy_diffusivity
            * derived.vacancy_concentration
            * (Q_ELECTRON * constants.effective_charge)
            / (K_BOLTZMANN * constants.temperature)
            * constants.barrier_resistivity
            * current_density;

        let void_growth_per_step = (constants.ratio_captured_vacancies
            * constants.ratio_vacancy_volume
            * constants.atomic_volume
            * constants.effective_void_radius
            * vacancy_flux
            * constants.time_step)
            / constants.tsv_void_thickness;

        Ok(DegradationProfile {
            parallelism,
            total_current,
            current_per_device,
            current_density,
            vacancy_flux,
            void_growth_per_step,
        })
    }
}

/// Descending halving ladder from `max_parallelism` down to and
/// including 1 (integer division, remainders discarded). Empty for 0.
pub fn parallelism_levels(max_parallelism: u32) -> Vec<u32> {
    let mut levels = Vec::new();
    let mut level = max_parallelism;
    while level > 1 {
        levels.push(level);
        level /= 2;
    }
    if max_parallelism >= 1 {
        levels.push(1);
    }
    levels
}

/// One profile per level of the halving ladder, highest first.
pub fn build_profiles(
    max_parallelism: u32,
    constants: &PhysicalConstants,
    derived: &DerivedConstants,
) -> EmResult<Vec<DegradationProfile>> {
    if max_parallelism < 1 {
        return Err(EmError::InvalidConfiguration(format!(
            "max_parallelism must be >= 1, got {max_parallelism}"
        )));
    }
    parallelism_levels(max_parallelism)
        .into_iter()
        .map(|level| DegradationProfile::build(level, constants, derived))
        .collect()
}
