//! Gradient line / circle placement shared by the raster and vector backends.

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{HueforgeError, HueforgeResult};
use crate::gradient::model::{GradientShape, GradientSpec};

/// Where a gradient lives in target pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientGeometry {
    /// Offset 0 at `start`, offset 1 at `end`.
    Linear {
        /// Position of offset 0.
        start: Point,
        /// Position of offset 1.
        end: Point,
    },
    /// Offset 0 at `center`, offset 1 at distance `radius`.
    Radial {
        /// Circle centre.
        center: Point,
        /// Outer radius.
        radius: f64,
    },
}

impl GradientGeometry {
    /// Geometry for `spec` on a `width x height` target.
    pub fn for_spec(spec: &GradientSpec, width: f64, height: f64) -> HueforgeResult<Self> {
        match spec.shape {
            GradientShape::Linear => {
                let (start, end) = linear_endpoints(spec.angle, width, height)?;
                Ok(Self::Linear { start, end })
            }
            GradientShape::Radial => {
                let (center, radius) = radial_params(width, height)?;
                Ok(Self::Radial { center, radius })
            }
        }
    }

    /// Gradient offset (unclamped) at point `p`.
    pub fn offset_at(&self, p: Point) -> f64 {
        match *self {
            Self::Linear { start, end } => {
                let axis = end - start;
                let len2 = axis.hypot2();
                if len2 <= 0.0 {
                    return 0.0;
                }
                (p - start).dot(axis) / len2
            }
            Self::Radial { center, radius } => {
                if radius <= 0.0 {
                    return 1.0;
                }
                (p - center).hypot() / radius
            }
        }
    }
}

/// Endpoints of a CSS-angled linear gradient spanning the whole target.
///
/// 0° points up, 90° right; the line is centred and as long as the diagonal so no corner
/// is left outside the ramp.
pub fn linear_endpoints(angle_deg: f64, width: f64, height: f64) -> HueforgeResult<(Point, Point)> {
    check_dims(width, height)?;
    if !angle_deg.is_finite() {
        return Err(HueforgeError::validation("angle must be finite"));
    }
    let theta = (angle_deg - 90.0).to_radians();
    let half_diag = width.hypot(height) / 2.0;
    let center = Point::new(width / 2.0, height / 2.0);
    let dir = Vec2::new(theta.cos(), theta.sin()) * half_diag;
    Ok((center + dir, center - dir))
}

/// Centre and radius of the radial gradient: midpoint and half the longer side.
pub fn radial_params(width: f64, height: f64) -> HueforgeResult<(Point, f64)> {
    check_dims(width, height)?;
    Ok((
        Point::new(width / 2.0, height / 2.0),
        width.max(height) / 2.0,
    ))
}

fn check_dims(width: f64, height: f64) -> HueforgeResult<()> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(HueforgeError::validation(format!(
            "gradient geometry needs positive dimensions (got {width}x{height})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/geometry.rs"]
mod tests;
