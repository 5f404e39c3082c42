//! Logarithmic (decibel) summation of noise sources.
//!
//! Levels from independent sources add as energies, not as decibels:
//! `L = 10 log10(sum(10^(L_i / 10)))`. This crate only combines levels that
//! were computed elsewhere; it does not model propagation.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("at least one noise level is required")]
    EmptyLevels,
    #[error("noise level {value} at index {index} is not finite")]
    NonFinite { index: usize, value: f64 },
    #[error("combined sound energy overflows for levels {levels:?}")]
    Overflow { levels: Vec<f64> },
    #[error("spectrum lengths differ: airframe has {airframe} bands, engine has {engine}")]
    LengthMismatch { airframe: usize, engine: usize },
}

/// Energy sum of several sound levels, in dB.
pub fn decibel_sum(levels: &[f64]) -> Result<f64, NoiseError> {
    if levels.is_empty() {
        return Err(NoiseError::EmptyLevels);
    }
    let mut energy = 0.0_f64;
    for (index, &value) in levels.iter().enumerate() {
        if !value.is_finite() {
            return Err(NoiseError::NonFinite { index, value });
        }
        energy += pressure_ratio(value);
    }
    if !energy.is_finite() {
        return Err(NoiseError::Overflow {
            levels: levels.to_vec(),
        });
    }
    Ok(10.0 * energy.log10())
}

/// Combine airframe and engine levels, optionally leaving the engine out.
///
/// With `include_engine == false` the result is the airframe level itself.
pub fn combine_airframe_engine(
    airframe_db: f64,
    engine_db: f64,
    include_engine: bool,
) -> Result<f64, NoiseError> {
    if include_engine {
        decibel_sum(&[airframe_db, engine_db])
    } else {
        decibel_sum(&[airframe_db])
    }
}

/// Band-by-band [`combine_airframe_engine`] over two spectra.
pub fn combine_spectra(
    airframe: &[f64],
    engine: &[f64],
    include_engine: bool,
) -> Result<Vec<f64>, NoiseError> {
    if airframe.len() != engine.len() {
        return Err(NoiseError::LengthMismatch {
            airframe: airframe.len(),
            engine: engine.len(),
        });
    }
    if airframe.is_empty() {
        return Err(NoiseError::EmptyLevels);
    }
    debug!(bands = airframe.len(), include_engine, "combining noise spectra");
    airframe
        .iter()
        .zip(engine)
        .enumerate()
        .map(|(index, (&a, &e))| {
            combine_airframe_engine(a, e, include_engine).map_err(|err| match err {
                NoiseError::NonFinite { value, .. } => NoiseError::NonFinite { index, value },
                other => other,
            })
        })
        .collect()
}

#[inline]
fn pressure_ratio(level_db: f64) -> f64 {
    10f64.powf(level_db / 10.0)
}
