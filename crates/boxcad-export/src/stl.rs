use boxcad_kernel::TriangleMesh;

/// Convert a `TriangleMesh` to binary STL.
///
/// The file is an 80-byte header, a little-endian u32 triangle count,
/// then 50 bytes per triangle: facet normal (3 f32), three vertices
/// (9 f32), and a zero u16 attribute count.
pub fn mesh_to_stl(mesh: &TriangleMesh) -> Vec<u8> {
    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    // 80-byte header
    let header = b"boxcad STL export";
    buf.extend_from_slice(header);
    buf.extend_from_slice(&vec![0u8; 80 - header.len()]);

    // Triangle count (u32 LE)
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    let vertex = |i: usize| -> [f32; 3] {
        let base = mesh.indices[i] as usize * 3;
        [
            mesh.vertices[base],
            mesh.vertices[base + 1],
            mesh.vertices[base + 2],
        ]
    };

    for t in 0..tri_count {
        let v0 = vertex(t * 3);
        let v1 = vertex(t * 3 + 1);
        let v2 = vertex(t * 3 + 2);

        // Face normal via cross product of edges; the per-vertex normals
        // may be smoothed and STL wants the flat facet normal.
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let normal = if len > 1e-12 {
            [nx / len, ny / len, nz / len]
        } else {
            [0.0, 0.0, 0.0]
        };

        for c in &normal {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in &[v0, v1, v2] {
            for c in v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}
