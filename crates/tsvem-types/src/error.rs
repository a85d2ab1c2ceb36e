// ─────────────────────────────────────────────────────────────────────
// TSV-EM Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmError {
    #[error("Invalid constant `{name}`: value {value:e} must be finite and positive")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Invalid parallelism level {0}: must be >= 1")]
    InvalidParallelism(u32),

    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EmResult<T> = Result<T, EmError>;
