//! Coordinate transforms applied to box primitives
//!
//! Transforms are given as an ordered sequence of named operations and
//! their arguments, e.g. `["RotateAxis", "z", "90", "Translate", "1,0,0"]`.
//! Vector arguments are comma separated.

use nalgebra::{Point3, Rotation3, Unit, Vector3};

use super::KernelError;
use crate::coordinate::{Axis, Coordinate3};

/// A single transform operation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOp {
    /// Shift by a vector
    Translate(Coordinate3),
    /// Uniform scaling about the origin
    Scale(f64),
    /// Rotation about a coordinate axis, in degrees
    RotateAxis(Axis, f64),
    /// Rotation about an arbitrary vector through the origin, in degrees
    RotateOrigin(Coordinate3, f64),
}

impl TransformOp {
    /// Name of the operation as written in a transform sequence
    pub fn name(&self) -> &'static str {
        match self {
            TransformOp::Translate(_) => "Translate",
            TransformOp::Scale(_) => "Scale",
            TransformOp::RotateAxis(..) => "RotateAxis",
            TransformOp::RotateOrigin(..) => "RotateOrigin",
        }
    }

    /// Apply the operation to a point
    pub fn apply(&self, point: Coordinate3) -> Coordinate3 {
        let p = Point3::from(point);
        let out = match self {
            TransformOp::Translate(v) => p + Vector3::from(*v),
            TransformOp::Scale(s) => p * *s,
            TransformOp::RotateAxis(axis, deg) => {
                let v = match axis {
                    Axis::X => Vector3::x_axis(),
                    Axis::Y => Vector3::y_axis(),
                    Axis::Z => Vector3::z_axis(),
                };
                Rotation3::from_axis_angle(&v, deg.to_radians()) * p
            }
            TransformOp::RotateOrigin(v, deg) => {
                let v = Unit::new_normalize(Vector3::from(*v));
                Rotation3::from_axis_angle(&v, deg.to_radians()) * p
            }
        };
        [out.x, out.y, out.z]
    }
}

/// Apply a sequence of operations to a point, first to last
pub fn apply_all(ops: &[TransformOp], point: Coordinate3) -> Coordinate3 {
    ops.iter().fold(point, |p, op| op.apply(p))
}

/// Parse an ordered sequence of named operations and their arguments
pub fn parse_transform<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<TransformOp>, KernelError> {
    let mut ops = Vec::new();
    let mut iter = tokens.iter().map(|t| t.as_ref().trim());

    while let Some(name) = iter.next() {
        let mut arg = |what: &str| {
            iter.next()
                .ok_or_else(|| KernelError::InvalidTransform(format!("{name}: missing {what}")))
        };

        let op = match name {
            "Translate" => TransformOp::Translate(parse_vector(name, arg("vector")?)?),
            "Scale" => TransformOp::Scale(parse_scalar(name, arg("factor")?)?),
            "RotateAxis" => {
                let axis_token = arg("axis")?;
                let axis = Axis::from_str(axis_token).ok_or_else(|| {
                    KernelError::InvalidTransform(format!("{name}: invalid axis '{axis_token}'"))
                })?;
                TransformOp::RotateAxis(axis, parse_scalar(name, arg("angle")?)?)
            }
            "RotateOrigin" => {
                let v = parse_vector(name, arg("vector")?)?;
                if v.iter().all(|&c| c == 0.0) {
                    return Err(KernelError::InvalidTransform(format!(
                        "{name}: rotation vector must be non-zero"
                    )));
                }
                TransformOp::RotateOrigin(v, parse_scalar(name, arg("angle")?)?)
            }
            other => {
                return Err(KernelError::InvalidTransform(format!(
                    "unknown operation '{other}'"
                )))
            }
        };
        ops.push(op);
    }

    Ok(ops)
}

fn parse_scalar(op: &str, token: &str) -> Result<f64, KernelError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| KernelError::InvalidTransform(format!("{op}: invalid number '{token}'")))
}

fn parse_vector(op: &str, token: &str) -> Result<Coordinate3, KernelError> {
    let parts: Vec<&str> = token.split(',').collect();
    if parts.len() != 3 {
        return Err(KernelError::InvalidTransform(format!(
            "{op}: expected 3 components, got '{token}'"
        )));
    }
    let mut v = [0.0; 3];
    for (slot, part) in v.iter_mut().zip(parts) {
        *slot = parse_scalar(op, part.trim())?;
    }
    Ok(v)
}
