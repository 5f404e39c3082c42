//! Core units, constants, and shared primitives for the airframe aerodynamics workspace.

/// Conversion factors.
pub mod constants {
    /// Radians per degree.
    pub const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::RAD_PER_DEG;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * RAD_PER_DEG
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v / RAD_PER_DEG
    }
}

/// Angle unit tag carried alongside sampled angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Express `value` (given in this unit) in radians.
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => units::deg_to_rad(value),
            AngleUnit::Radians => value,
        }
    }
}

/// Element-wise helpers over sampled sequences.
pub mod series {
    /// Largest absolute difference between two equally long sequences.
    ///
    /// Returns `None` when the lengths differ. A NaN on either side yields NaN,
    /// so callers comparing against a tolerance fail closed.
    pub fn max_abs_difference(a: &[f64], b: &[f64]) -> Option<f64> {
        if a.len() != b.len() {
            return None;
        }
        Some(a.iter().zip(b).fold(0.0_f64, |acc, (x, y)| {
            let diff = (x - y).abs();
            if diff.is_nan() || acc.is_nan() {
                f64::NAN
            } else {
                acc.max(diff)
            }
        }))
    }

    /// Index and value of the largest finite element.
    pub fn argmax(values: &[f64]) -> Option<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best, (i, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })
    }

    /// Index and value of the smallest finite element.
    pub fn argmin(values: &[f64]) -> Option<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best, (i, v)| match best {
                Some((_, b)) if b <= v => best,
                _ => Some((i, v)),
            })
    }
}
