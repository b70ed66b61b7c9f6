//! Primitive builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder — everything is successive sweeps.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{Point3, Rad, Vector3};

use crate::types::KernelError;

/// Create a box solid via successive translational sweeps.
/// Centered at the origin, matching the upstream CAD convention.
pub fn make_box(w: f64, h: f64, d: f64) -> Solid {
    let v = builder::vertex(Point3::new(-w / 2.0, -h / 2.0, -d / 2.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, d))
}

/// Create a cylinder solid: circle wire → face → translational sweep.
/// Base circle centered at (0, 0, `z_bottom`), extending along +Z.
pub fn make_cylinder(radius: f64, z_bottom: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, z_bottom));
    let wire = builder::rsweep(
        &v,
        Point3::new(0.0, 0.0, z_bottom),
        Vector3::unit_z(),
        Rad(2.0 * PI),
    );
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::InvalidGeometry {
        message: format!("failed to close circular face: {}", e),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_topology() {
        let solid = make_box(1.0, 2.0, 3.0);

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Box should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();

        // Deduplicate edges and vertices
        let mut edge_ids = std::collections::HashSet::new();
        for edge in shell.edge_iter() {
            edge_ids.insert(edge.id());
        }
        let mut vert_ids = std::collections::HashSet::new();
        for v in shell.vertex_iter() {
            vert_ids.insert(v.id());
        }

        assert_eq!(faces.len(), 6, "Box should have 6 faces");
        assert_eq!(edge_ids.len(), 12, "Box should have 12 edges");
        assert_eq!(vert_ids.len(), 8, "Box should have 8 vertices");

        // Euler's formula: V - E + F = 2
        let v = vert_ids.len() as i64;
        let e = edge_ids.len() as i64;
        let f = faces.len() as i64;
        assert_eq!(v - e + f, 2, "Euler formula must hold");
    }

    #[test]
    fn box_is_centered() {
        let solid = make_box(2.0, 3.0, 4.0);
        let boundaries = solid.boundaries();
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

        let eps = 1e-10;
        assert!((min[0] + 1.0).abs() < eps && (max[0] - 1.0).abs() < eps);
        assert!((min[1] + 1.5).abs() < eps && (max[1] - 1.5).abs() < eps);
        assert!((min[2] + 2.0).abs() < eps && (max[2] - 2.0).abs() < eps);
    }

    #[test]
    fn cylinder_topology() {
        let solid = make_cylinder(1.0, 0.0, 2.0).unwrap();

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Cylinder should have 1 shell");

        let shell = &boundaries[0];
        let faces: Vec<_> = shell.face_iter().collect();

        // truck may produce more faces depending on internal sweep
        // division. At minimum: top + bottom + side(s).
        assert!(faces.len() >= 3, "Cylinder should have at least 3 faces");
    }

    #[test]
    fn cylinder_z_range() {
        let solid = make_cylinder(1.0, -3.0, 6.0).unwrap();
        let boundaries = solid.boundaries();
        let shell = &boundaries[0];

        let mut min_z = f64::MAX;
        let mut max_z = f64::MIN;
        for v in shell.vertex_iter() {
            let p = v.point();
            min_z = min_z.min(p[2]);
            max_z = max_z.max(p[2]);
        }

        let eps = 1e-10;
        assert!((min_z + 3.0).abs() < eps, "Base should sit at z = -3");
        assert!((max_z - 3.0).abs() < eps, "Top should sit at z = 3");
    }
}
