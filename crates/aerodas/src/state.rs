//! Per-evaluation-point aerodynamic state.
//!
//! Upstream models fill in the pre-stall and post-stall curves for each wing;
//! [`lift_drag_total`] blends them and stores the totals back into the state,
//! where [`drag_total`] can pick them up later.

use tracing::debug;

use crate::blend::blend_geometry;
use crate::{AerodasError, AircraftAggregate, CoefficientCurve, CurveSet, Geometry, Settings};

/// Coefficient data for one evaluation point (one set of angle-of-attack samples).
#[derive(Debug, Clone, Default)]
pub struct AerodynamicState {
    angle_of_attack: Vec<f64>,
    pre_stall_coefficients: CurveSet,
    post_stall_coefficients: CurveSet,
    totals: Option<AircraftAggregate>,
}

impl AerodynamicState {
    pub fn new(angle_of_attack: Vec<f64>) -> Self {
        Self {
            angle_of_attack,
            ..Self::default()
        }
    }

    /// Angle-of-attack samples in radians.
    pub fn angle_of_attack(&self) -> &[f64] {
        &self.angle_of_attack
    }

    /// Move to a new evaluation point. Previously computed totals are dropped.
    pub fn set_angle_of_attack(&mut self, angle_of_attack: Vec<f64>) {
        self.angle_of_attack = angle_of_attack;
        self.totals = None;
    }

    pub fn pre_stall_coefficients(&self) -> &CurveSet {
        &self.pre_stall_coefficients
    }

    pub fn post_stall_coefficients(&self) -> &CurveSet {
        &self.post_stall_coefficients
    }

    pub fn insert_pre_stall(&mut self, tag: impl Into<String>, curve: CoefficientCurve) {
        self.pre_stall_coefficients.insert(tag.into(), curve);
        self.totals = None;
    }

    pub fn insert_post_stall(&mut self, tag: impl Into<String>, curve: CoefficientCurve) {
        self.post_stall_coefficients.insert(tag.into(), curve);
        self.totals = None;
    }

    /// Aircraft lift coefficient, if [`lift_drag_total`] has run for this point.
    pub fn lift_coefficient(&self) -> Result<&[f64], AerodasError> {
        self.totals
            .as_ref()
            .map(|t| t.lift_coefficient.as_slice())
            .ok_or(AerodasError::MissingValue("lift coefficient"))
    }

    /// Both totals, if computed.
    pub fn totals(&self) -> Option<&AircraftAggregate> {
        self.totals.as_ref()
    }
}

/// Reset the coefficient containers ahead of a fresh evaluation.
pub fn setup_data(state: &mut AerodynamicState) {
    state.pre_stall_coefficients = CurveSet::new();
    state.post_stall_coefficients = CurveSet::new();
    state.totals = None;
}

/// Sum lift and drag contributions from all of the wings.
///
/// On success the totals are written into `state` and also returned. On
/// failure the state keeps no totals.
pub fn lift_drag_total(
    state: &mut AerodynamicState,
    settings: &Settings,
    geometry: &Geometry,
) -> Result<AircraftAggregate, AerodasError> {
    state.totals = None;
    let totals = blend_geometry(
        geometry,
        &state.pre_stall_coefficients,
        &state.post_stall_coefficients,
        &state.angle_of_attack,
        settings,
    )?;
    debug!(samples = totals.len(), "stored aircraft lift and drag totals");
    state.totals = Some(totals.clone());
    Ok(totals)
}

/// Aircraft drag coefficient computed by the last [`lift_drag_total`] call.
pub fn drag_total(state: &AerodynamicState) -> Result<&[f64], AerodasError> {
    state
        .totals
        .as_ref()
        .map(|t| t.drag_coefficient.as_slice())
        .ok_or(AerodasError::MissingValue("drag coefficient"))
}
