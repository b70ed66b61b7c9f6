//! The one shape this service produces: a box with a centered through-hole.

use truck_modeling::topology::Solid;

use crate::primitives;
use crate::types::KernelError;

/// Diameter of the hole drilled through every generated box, in model units.
pub const HOLE_DIAMETER: f64 = 50.0;

/// Tolerance for boolean operations.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Overshoot fraction applied to the cutting cylinder so its end caps
/// never coincide with the box faces.
const CUT_OVERSHOOT: f64 = 0.1;

/// Build a `width` × `height` × `depth` box centered at the origin with a
/// vertical [`HOLE_DIAMETER`] through-hole down its center.
pub fn drilled_box(width: f64, height: f64, depth: f64) -> Result<Solid, KernelError> {
    if width.min(height) <= HOLE_DIAMETER {
        return Err(KernelError::InvalidGeometry {
            message: format!(
                "hole of diameter {} does not fit a {}x{} cross-section",
                HOLE_DIAMETER, width, height
            ),
        });
    }

    let block = primitives::make_box(width, height, depth);

    let overshoot = depth * CUT_OVERSHOOT;
    let mut cutter = primitives::make_cylinder(
        HOLE_DIAMETER / 2.0,
        -depth / 2.0 - overshoot,
        depth + 2.0 * overshoot,
    )?;

    // Subtraction = block ∩ ¬cutter. not() mutates in place.
    cutter.not();
    truck_shapeops::and(&block, &cutter, BOOLEAN_TOLERANCE).ok_or_else(|| {
        KernelError::BooleanFailed {
            reason: "subtracting the hole cylinder returned no solid".to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drilled_box_keeps_outer_dimensions() {
        let solid = drilled_box(120.0, 100.0, 60.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Drilled box should stay a single shell");

        let shell = &boundaries[0];
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for v in shell.vertex_iter() {
            let p = v.point();
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        let eps = 1e-6;
        assert!((max[0] - min[0] - 120.0).abs() < eps, "Width should be 120");
        assert!((max[1] - min[1] - 100.0).abs() < eps, "Height should be 100");
        assert!((max[2] - min[2] - 60.0).abs() < eps, "Depth should be 60");
    }

    #[test]
    fn drilled_box_has_hole_faces() {
        let plain_faces = {
            let solid = primitives::make_box(120.0, 100.0, 60.0);
            solid.boundaries()[0].face_iter().count()
        };

        let solid = drilled_box(120.0, 100.0, 60.0).unwrap();
        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Drilled box should stay a single shell");
        let drilled_faces = boundaries[0].face_iter().count();

        assert!(
            drilled_faces > plain_faces,
            "Drilling must add faces ({} vs {})",
            drilled_faces,
            plain_faces
        );
    }

    #[test]
    fn hole_must_fit_cross_section() {
        let err = drilled_box(30.0, 120.0, 60.0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry { .. }));

        // Diameter equal to a side is tangent, also rejected.
        let err = drilled_box(50.0, 120.0, 60.0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidGeometry { .. }));
    }
}
