//! Per-wing curve selection and area-weighted summation.

use tracing::{debug, trace};

use crate::{
    AerodasError, AircraftAggregate, CoefficientCurve, CurveSet, Geometry, Settings, StallRegime,
    Wing,
};

/// Lift selection (Equations 3a and 3b).
///
/// Above the zero-lift pivot the larger of the two curves wins; at or below it
/// the smaller one does. NaN operands behave like `fmax`/`fmin`.
#[inline]
pub fn select_lift(alpha: f64, zero_lift_aoa: f64, cl_pre: f64, cl_post: f64) -> f64 {
    if alpha <= zero_lift_aoa {
        cl_pre.min(cl_post)
    } else {
        cl_pre.max(cl_post)
    }
}

/// Drag selection (Equation 3c). No angle-of-attack dependence.
#[inline]
pub fn select_drag(cd_pre: f64, cd_post: f64) -> f64 {
    cd_pre.max(cd_post)
}

/// Blend a single wing's pre- and post-stall curves into one curve.
pub fn blend_wing(
    tag: &str,
    alpha: &[f64],
    zero_lift_aoa: f64,
    pre: &CoefficientCurve,
    post: &CoefficientCurve,
) -> Result<CoefficientCurve, AerodasError> {
    check_curve(tag, StallRegime::PreStall, pre, alpha.len())?;
    check_curve(tag, StallRegime::PostStall, post, alpha.len())?;
    Ok(blend_wing_unchecked(alpha, zero_lift_aoa, pre, post))
}

/// Sum the blended coefficients of every wing into aircraft totals.
///
/// Every curve must have one sample per entry of `alpha`. All inputs are
/// validated before anything is accumulated.
pub fn blend(
    wings: &[Wing],
    curves_pre: &CurveSet,
    curves_post: &CurveSet,
    alpha: &[f64],
    zero_lift_aoa: f64,
    total_reference_area: f64,
    drag_increment: f64,
) -> Result<AircraftAggregate, AerodasError> {
    // Written so that NaN is rejected too.
    if !(total_reference_area > 0.0) {
        return Err(AerodasError::InvalidGeometry(format!(
            "total reference area must be positive, got {total_reference_area}"
        )));
    }
    if wings.is_empty() {
        return Err(AerodasError::InvalidGeometry(
            "geometry has no wings".to_string(),
        ));
    }
    if alpha.is_empty() {
        return Err(AerodasError::ShapeMismatch(
            "angle of attack has no samples".to_string(),
        ));
    }

    let samples = alpha.len();
    let inputs = wings
        .iter()
        .map(|wing| {
            let pre = lookup(curves_pre, wing, StallRegime::PreStall)?;
            let post = lookup(curves_post, wing, StallRegime::PostStall)?;
            check_curve(&wing.tag, StallRegime::PreStall, pre, samples)?;
            check_curve(&wing.tag, StallRegime::PostStall, post, samples)?;
            Ok((wing, pre, post))
        })
        .collect::<Result<Vec<_>, AerodasError>>()?;

    debug!(
        wings = wings.len(),
        samples,
        zero_lift_aoa,
        total_reference_area,
        "blending AERODAS coefficients"
    );

    let (lift_total, mut drag_total) = inputs.into_iter().fold(
        (vec![0.0_f64; samples], vec![0.0_f64; samples]),
        |(mut lift_total, mut drag_total), (wing, pre, post)| {
            let area = wing.reference_area_m2;
            let blended = blend_wing_unchecked(alpha, zero_lift_aoa, pre, post);
            trace!(wing = %wing.tag, area, vertical = wing.vertical, "adding wing contribution");

            for (total, cd) in drag_total.iter_mut().zip(&blended.drag_coefficient) {
                *total += cd * area / total_reference_area;
            }
            if !wing.vertical {
                for (total, cl) in lift_total.iter_mut().zip(&blended.lift_coefficient) {
                    *total += cl * area / total_reference_area;
                }
            }
            (lift_total, drag_total)
        },
    );

    for cd in &mut drag_total {
        *cd += drag_increment;
    }

    Ok(AircraftAggregate {
        lift_coefficient: lift_total,
        drag_coefficient: drag_total,
    })
}

/// [`blend`] driven by the geometry and settings records.
pub fn blend_geometry(
    geometry: &Geometry,
    curves_pre: &CurveSet,
    curves_post: &CurveSet,
    alpha: &[f64],
    settings: &Settings,
) -> Result<AircraftAggregate, AerodasError> {
    blend(
        &geometry.wings,
        curves_pre,
        curves_post,
        alpha,
        settings.section_zero_lift_angle_of_attack,
        geometry.reference_area_m2,
        settings.drag_coefficient_increment,
    )
}

fn blend_wing_unchecked(
    alpha: &[f64],
    zero_lift_aoa: f64,
    pre: &CoefficientCurve,
    post: &CoefficientCurve,
) -> CoefficientCurve {
    let lift_coefficient = alpha
        .iter()
        .zip(pre.lift_coefficient.iter().zip(&post.lift_coefficient))
        .map(|(&a, (&cl_pre, &cl_post))| select_lift(a, zero_lift_aoa, cl_pre, cl_post))
        .collect();
    let drag_coefficient = pre
        .drag_coefficient
        .iter()
        .zip(&post.drag_coefficient)
        .map(|(&cd_pre, &cd_post)| select_drag(cd_pre, cd_post))
        .collect();
    CoefficientCurve {
        lift_coefficient,
        drag_coefficient,
    }
}

fn lookup<'a>(
    curves: &'a CurveSet,
    wing: &Wing,
    regime: StallRegime,
) -> Result<&'a CoefficientCurve, AerodasError> {
    curves.get(&wing.tag).ok_or_else(|| {
        AerodasError::ShapeMismatch(format!("wing '{}' has no {regime} coefficients", wing.tag))
    })
}

fn check_curve(
    tag: &str,
    regime: StallRegime,
    curve: &CoefficientCurve,
    samples: usize,
) -> Result<(), AerodasError> {
    for (quantity, values) in [
        ("lift", &curve.lift_coefficient),
        ("drag", &curve.drag_coefficient),
    ] {
        if values.len() != samples {
            return Err(AerodasError::ShapeMismatch(format!(
                "wing '{tag}' {regime} {quantity} coefficient has {} samples, expected {samples}",
                values.len()
            )));
        }
    }
    Ok(())
}
