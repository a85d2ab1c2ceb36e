// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Boltzmann constant (J/K).
/// NOTE: two-digit value — the resistance-gain calibration was fitted
/// against this rounding, so it is kept rather than the full CODATA value.
pub const K_BOLTZMANN: f64 = 1.38e-23;

/// Elementary charge (C). Same rounding note as `K_BOLTZMANN`.
pub const Q_ELECTRON: f64 = 1.6e-19;

/// Metres to microns. The resistance-gain slope is calibrated per micron
/// of void radius while the growth model works in metres.
pub const M_TO_UM: f64 = 1.0e6;

/// Seconds in a Julian year (365.25 days), for lifetime reporting.
pub const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 24.0 * 365.25;
