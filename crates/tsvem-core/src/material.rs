// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Derived Material Quantities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quantities derived once from [`PhysicalConstants`] and reused by every
//! degradation profile: Boltzmann-weighted vacancy statistics and the TSV
//! cross-section.

use tsvem_types::config::PhysicalConstants;
use tsvem_types::constants::K_BOLTZMANN;
use tsvem_types::error::{EmError, EmResult};

/// Closed-form derivations from the physical constants, cached because
/// the exponentials are shared by every parallelism level.
#[derive(Debug, Clone, Copy)]
pub struct DerivedConstants {
    /// Equilibrium vacancy concentration [m^-3].
    pub vacancy_concentration: f64,
    /// Vacancy diffusivity at operating temperature [m^2/s].
    pub vacancy_diffusivity: f64,
    /// TSV cross-sectional area [m^2].
    pub tsv_cross_section_area: f64,
}

impl DerivedConstants {
    /// Evaluate the Arrhenius factors and the cross-section.
    ///
    /// `c_v = c_atomic * exp(-E_a / (k_B * T))`,
    /// `D_v = D_0 * exp(-E_a / (k_B * T))`,
    /// `A = pi * r_tsv^2`.
    ///
    /// An exponent extreme enough to underflow the Arrhenius factor to
    /// zero (or overflow it) makes the model meaningless, so every
    /// derived value must come out finite and positive.
    pub fn derive(constants: &PhysicalConstants) -> EmResult<Self> {
        constants.validate()?;

        let arrhenius =
            (-constants.activation_energy / (K_BOLTZMANN * constants.temperature)).exp();
        let vacancy_concentration = constants.atomic_concentration * arrhenius;
        let vacancy_diffusivity = constants.initial_diffusivity * arrhenius;
        let tsv_cross_section_area =
            std::f64::consts::PI * constants.tsv_radius * constants.tsv_radius;

        ensure_derived("vacancy_concentration", vacancy_concentration)?;
        ensure_derived("vacancy_diffusivity", vacancy_diffusivity)?;
        ensure_derived("tsv_cross_section_area", tsv_cross_section_area)?;
        Ok(DerivedConstants {
            vacancy_concentration,
            vacancy_diffusivity,
            tsv_cross_section_area,
        })
    }
}

fn ensure_derived(name: &'static str, value: f64) -> EmResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EmError::InvalidConstant { name, value })
    }
}
