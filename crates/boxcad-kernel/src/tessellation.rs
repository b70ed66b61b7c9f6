//! Tessellation from B-rep solid to a flat triangle mesh.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, TriangleMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a non-indexed `TriangleMesh`.
///
/// Everything is merged into a single PolygonMesh first; vertices are then
/// expanded per triangle so positions and normals stay parallel, which is
/// what the mesh-format writers want.
pub fn tessellate_solid(solid: &TruckSolid, tolerance: f64) -> Result<TriangleMesh, KernelError> {
    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    let mut vertices: Vec<f32> = Vec::with_capacity(tri_faces.len() * 9);
    let mut out_normals: Vec<f32> = Vec::with_capacity(tri_faces.len() * 9);
    let mut indices: Vec<u32> = Vec::with_capacity(tri_faces.len() * 3);

    for tri in tri_faces {
        let p0 = positions[tri[0].pos];
        let p1 = positions[tri[1].pos];
        let p2 = positions[tri[2].pos];

        // Flat normal as fallback for vertices the mesh carries none for.
        let e1 = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
        let e2 = [p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let flat_normal = if len > 1e-12 {
            [nx / len, ny / len, nz / len]
        } else {
            [0.0, 0.0, 1.0]
        };

        for v in tri.iter() {
            let p = positions[v.pos];
            vertices.push(p[0] as f32);
            vertices.push(p[1] as f32);
            vertices.push(p[2] as f32);

            let n = match v.nor {
                Some(i) => {
                    let n = normals[i];
                    [n[0], n[1], n[2]]
                }
                None => flat_normal,
            };
            out_normals.push(n[0] as f32);
            out_normals.push(n[1] as f32);
            out_normals.push(n[2] as f32);

            indices.push(indices.len() as u32);
        }
    }

    if indices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "tessellation produced no triangles".to_string(),
        });
    }

    Ok(TriangleMesh {
        vertices,
        normals: out_normals,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;

    #[test]
    fn box_mesh_is_well_formed() {
        let solid = make_box(10.0, 10.0, 10.0);
        let mesh = tessellate_solid(&solid, 0.1).unwrap();

        assert!(mesh.triangle_count() > 0);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        assert_eq!(mesh.vertices.len(), mesh.vertex_count() * 3);

        // A closed box tessellates to at least 2 triangles per face.
        assert!(mesh.triangle_count() >= 12);
    }

    #[test]
    fn box_mesh_stays_in_bounds() {
        let solid = make_box(4.0, 6.0, 8.0);
        let mesh = tessellate_solid(&solid, 0.1).unwrap();

        for chunk in mesh.vertices.chunks_exact(3) {
            assert!(chunk[0].abs() <= 2.0 + 1e-4);
            assert!(chunk[1].abs() <= 3.0 + 1e-4);
            assert!(chunk[2].abs() <= 4.0 + 1e-4);
        }
    }
}
