//! AERODAS lift and drag totals.
//!
//! Implements the blending step of the semi-empirical stall model described in
//! D. A. Spera, "Models of Lift and Drag Coefficients of Stalled and Unstalled
//! Airfoils in Wind Turbines and Wind Tunnels" (NASA TR). Each wing carries a
//! pre-stall and a post-stall coefficient curve sampled over the same angles of
//! attack; the blender picks between them per sample and sums the result over
//! all wings, weighted by reference area.
//!
//! Producing the curves themselves is left to the caller.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

pub mod blend;
pub mod state;

pub use blend::{blend, blend_geometry, blend_wing, select_drag, select_lift};
pub use state::{AerodynamicState, drag_total, lift_drag_total, setup_data};

/// A lifting or stabilising surface as seen by the blender.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub tag: String,
    pub reference_area_m2: f64,
    /// Vertical surfaces add drag but no lift to the aircraft totals.
    pub vertical: bool,
}

impl Wing {
    pub fn horizontal(tag: impl Into<String>, reference_area_m2: f64) -> Self {
        Self {
            tag: tag.into(),
            reference_area_m2,
            vertical: false,
        }
    }

    pub fn vertical(tag: impl Into<String>, reference_area_m2: f64) -> Self {
        Self {
            tag: tag.into(),
            reference_area_m2,
            vertical: true,
        }
    }
}

/// Aircraft-level geometry consumed by [`blend_geometry`].
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub reference_area_m2: f64,
    pub wings: Vec<Wing>,
}

/// Lift and drag coefficients sampled at each angle of attack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientCurve {
    pub lift_coefficient: Vec<f64>,
    pub drag_coefficient: Vec<f64>,
}

impl CoefficientCurve {
    pub fn new(lift_coefficient: Vec<f64>, drag_coefficient: Vec<f64>) -> Self {
        Self {
            lift_coefficient,
            drag_coefficient,
        }
    }
}

/// Coefficient curves keyed by wing tag.
pub type CurveSet = BTreeMap<String, CoefficientCurve>;

/// Model tunables supplied by the caller at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    /// Selection pivot between the max and min lift branches (radians).
    pub section_zero_lift_angle_of_attack: f64,
    /// Parasitic drag correction added once to every total drag sample.
    pub drag_coefficient_increment: f64,
}

/// Whole-aircraft coefficients, one value per angle-of-attack sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AircraftAggregate {
    pub lift_coefficient: Vec<f64>,
    pub drag_coefficient: Vec<f64>,
}

impl AircraftAggregate {
    pub fn len(&self) -> usize {
        self.lift_coefficient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lift_coefficient.is_empty()
    }
}

/// Which of the two AERODAS curves a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallRegime {
    PreStall,
    PostStall,
}

impl fmt::Display for StallRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StallRegime::PreStall => f.write_str("pre-stall"),
            StallRegime::PostStall => f.write_str("post-stall"),
        }
    }
}

/// Broad failure categories, independent of the diagnostic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ShapeMismatch,
    InvalidGeometry,
    MissingValue,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AerodasError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("{0} has not been computed for this evaluation point")]
    MissingValue(&'static str),
}

impl AerodasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AerodasError::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
            AerodasError::InvalidGeometry(_) => ErrorKind::InvalidGeometry,
            AerodasError::MissingValue(_) => ErrorKind::MissingValue,
        }
    }
}
