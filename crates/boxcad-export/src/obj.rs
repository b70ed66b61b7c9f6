use std::fmt::Write;

use boxcad_kernel::TriangleMesh;

/// Convert a `TriangleMesh` to ASCII Wavefront OBJ.
///
/// Positions and normals come out 1:1 (the mesh is non-indexed), so faces
/// reference the same 1-based index for both.
pub fn mesh_to_obj(mesh: &TriangleMesh) -> String {
    let mut out = String::new();
    out.push_str("# boxcad OBJ export\n");

    for p in mesh.vertices.chunks_exact(3) {
        let _ = writeln!(out, "v {} {} {}", p[0], p[1], p[2]);
    }
    for n in mesh.normals.chunks_exact(3) {
        let _ = writeln!(out, "vn {} {} {}", n[0], n[1], n[2]);
    }
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
    }

    out
}
