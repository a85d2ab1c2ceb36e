// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{EmError, EmResult};

/// Material, process, and electrical parameters of the TSV
/// electromigration model.
///
/// Immutable after construction; every other component takes it by shared
/// reference. Defaults describe a Cu TSV with a Ta barrier in a 3D-stacked
/// DRAM at 453 K. Partial JSON overrides are supported: absent fields fall
/// back to the defaults, so a process-corner file only needs to list what
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Fraction of drifting vacancies captured by the growing void.
    pub ratio_captured_vacancies: f64,
    /// Vacancy volume as a fraction of the atomic volume.
    pub ratio_vacancy_volume: f64,
    /// Atomic volume of the interconnect metal [m^3].
    pub atomic_volume: f64,
    /// Thickness of the void nucleation layer under the barrier [m].
    pub tsv_void_thickness: f64,
    /// Pre-exponential vacancy diffusivity [m^2/s].
    pub initial_diffusivity: f64,
    /// Vacancy formation/migration activation energy [J].
    pub activation_energy: f64,
    /// Operating temperature [K].
    pub temperature: f64,
    /// Effective charge number Z* of the electromigration driving force.
    pub effective_charge: f64,
    /// Barrier-layer resistivity [Ohm·m].
    pub barrier_resistivity: f64,
    /// TSV radius [m].
    pub tsv_radius: f64,
    /// Effective radius of the growing void [m].
    pub effective_void_radius: f64,
    /// Atomic concentration of the interconnect metal [m^-3].
    pub atomic_concentration: f64,
    /// Activation current drawn per simultaneous SA activation (IDD0) [A].
    pub idd0: f64,
    /// DRAM devices sharing one TSV bus; normalizes bus current to a
    /// per-device share. Encodes a bus-width assumption, so it is a
    /// config value rather than an inline literal.
    pub devices_per_bus: f64,
    /// Simulation time step [s].
    pub time_step: f64,
    /// Resistance-gain slope [% per µm of void radius].
    pub res_gain_slope: f64,
    /// Resistance-gain intercept [%].
    pub res_gain_intercept: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            ratio_captured_vacancies: 1.0,
            ratio_vacancy_volume: 0.4,
            atomic_volume: 1.18e-29,
            tsv_void_thickness: 5.0e-9,
            initial_diffusivity: 4.7e-3,
            activation_energy: 1.30e-19,
            temperature: 4.53e2,
            effective_charge: 1.0,
            barrier_resistivity: 3.0e-6,
            tsv_radius: 1.15e-6,
            effective_void_radius: 1.15e-6,
            atomic_concentration: 1.53e28,
            idd0: 55.0e-3,
            devices_per_bus: 64.0,
            time_step: 5.0e6,
            res_gain_slope: 7.78,
            res_gain_intercept: -8.73944,
        }
    }
}

fn ensure_positive(name: &'static str, value: f64) -> EmResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EmError::InvalidConstant { name, value })
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> EmResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EmError::InvalidConstant { name, value })
    }
}

impl PhysicalConstants {
    /// Load from a JSON file. Fields absent from the file keep their
    /// defaults; the result is validated before it is returned.
    pub fn from_file(path: &str) -> EmResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let constants: Self = serde_json::from_str(&contents)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Check every constant that appears under an exponential, as a
    /// divisor, or squared. Runs eagerly, before any derivation or
    /// stepping, so a bad override never produces a partial result.
    pub fn validate(&self) -> EmResult<()> {
        ensure_non_negative("ratio_captured_vacancies", self.ratio_captured_vacancies)?;
        ensure_non_negative("ratio_vacancy_volume", self.ratio_vacancy_volume)?;
        ensure_positive("atomic_volume", self.atomic_volume)?;
        ensure_positive("tsv_void_thickness", self.tsv_void_thickness)?;
        ensure_positive("initial_diffusivity", self.initial_diffusivity)?;
        ensure_positive("activation_energy", self.activation_energy)?;
        ensure_positive("temperature", self.temperature)?;
        ensure_positive("effective_charge", self.effective_charge)?;
        ensure_positive("barrier_resistivity", self.barrier_resistivity)?;
        ensure_positive("tsv_radius", self.tsv_radius)?;
        ensure_positive("effective_void_radius", self.effective_void_radius)?;
        ensure_positive("atomic_concentration", self.atomic_concentration)?;
        ensure_positive("idd0", self.idd0)?;
        ensure_positive("devices_per_bus", self.devices_per_bus)?;
        ensure_positive("time_step", self.time_step)?;
        // Resistance gain must stay a strictly increasing function of the
        // void radius; the intercept may be negative (it is by default).
        ensure_positive("res_gain_slope", self.res_gain_slope)?;
        if !self.res_gain_intercept.is_finite() {
            return Err(EmError::InvalidConstant {
                name: "res_gain_intercept",
                value: self.res_gain_intercept,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        PhysicalConstants::default()
            .validate()
            .expect("Baseline constants must validate");
    }

    #[test]
    fn test_negative_temperature_rejected() {
        let constants = PhysicalConstants {
            temperature: -1.0,
            ..Default::default()
        };
        let err = constants.validate().unwrap_err();
        assert!(
            matches!(err, EmError::InvalidConstant { name: "temperature", .. }),
            "Expected InvalidConstant for temperature, got {err}"
        );
    }

    #[test]
    fn test_nan_slope_rejected() {
        let constants = PhysicalConstants {
            res_gain_slope: f64::NAN,
            ..Default::default()
        };
        assert!(constants.validate().is_err(), "NaN slope must not validate");
    }

    #[test]
    fn test_partial_json_override() {
        // A corner file only overrides what it changes.
        let constants: PhysicalConstants =
            serde_json::from_str(r#"{ "temperature": 3.58e2 }"#).unwrap();
        assert_eq!(constants.temperature, 3.58e2);
        assert_eq!(constants.idd0, PhysicalConstants::default().idd0);
    }
}
