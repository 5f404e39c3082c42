//! Turning case files into blender inputs and evaluating them.

use airframe_aerodas::{
    AerodasError, AerodynamicState, AircraftAggregate, CoefficientCurve, Geometry, Settings, Wing,
    lift_drag_total, setup_data,
};
use airframe_config::{AngleUnitConfig, CaseConfig, CurveConfig};
use airframe_core::AngleUnit;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("case '{case}': {source}")]
    Aerodas {
        case: String,
        #[source]
        source: AerodasError,
    },
}

/// Blender inputs built from a case file, ready to evaluate.
#[derive(Debug, Clone)]
pub struct PreparedCase {
    pub name: String,
    pub geometry: Geometry,
    pub settings: Settings,
    pub state: AerodynamicState,
}

/// Outcome of evaluating one case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub alpha_rad: Vec<f64>,
    pub aggregate: AircraftAggregate,
}

/// Convert a parsed case into geometry, settings and a populated state.
///
/// Angle samples are converted to radians here; curves are copied as-is.
pub fn prepare(config: &CaseConfig) -> PreparedCase {
    let unit = match config.angle_unit {
        AngleUnitConfig::Degrees => AngleUnit::Degrees,
        AngleUnitConfig::Radians => AngleUnit::Radians,
    };
    let alpha = config
        .angle_of_attack
        .iter()
        .map(|&a| unit.to_radians(a))
        .collect();

    let geometry = Geometry {
        reference_area_m2: config.geometry.reference_area_m2,
        wings: config
            .geometry
            .wings
            .iter()
            .map(|w| Wing {
                tag: w.tag.clone(),
                reference_area_m2: w.reference_area_m2,
                vertical: w.vertical,
            })
            .collect(),
    };

    let settings = Settings {
        section_zero_lift_angle_of_attack: config.settings.section_zero_lift_angle_of_attack,
        drag_coefficient_increment: config.settings.drag_coefficient_increment,
    };

    let mut state = AerodynamicState::new(alpha);
    setup_data(&mut state);
    for (tag, curve) in &config.pre_stall {
        state.insert_pre_stall(tag.clone(), to_curve(curve));
    }
    for (tag, curve) in &config.post_stall {
        state.insert_post_stall(tag.clone(), to_curve(curve));
    }

    PreparedCase {
        name: config.name.clone(),
        geometry,
        settings,
        state,
    }
}

/// Prepare and evaluate a case in one step.
pub fn evaluate(config: &CaseConfig) -> Result<CaseResult, CaseError> {
    let mut prepared = prepare(config);
    let aggregate = lift_drag_total(&mut prepared.state, &prepared.settings, &prepared.geometry)
        .map_err(|source| CaseError::Aerodas {
            case: prepared.name.clone(),
            source,
        })?;
    info!(
        case = %prepared.name,
        samples = aggregate.len(),
        wings = prepared.geometry.wings.len(),
        "evaluated case"
    );
    Ok(CaseResult {
        name: prepared.name,
        alpha_rad: prepared.state.angle_of_attack().to_vec(),
        aggregate,
    })
}

fn to_curve(curve: &CurveConfig) -> CoefficientCurve {
    CoefficientCurve::new(curve.lift_coefficient.clone(), curve.drag_coefficient.clone())
}
