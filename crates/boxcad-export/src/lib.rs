pub mod errors;
pub mod obj;
pub mod step;
pub mod stl;

pub use errors::ExportError;

use std::fs;
use std::path::{Path, PathBuf};

use boxcad_kernel::tessellate_solid;
use boxcad_types::FileFormat;
use truck_modeling::Solid;

/// Basename of the single overwritten output file per format.
pub const OUTPUT_BASENAME: &str = "box_model";

/// Serialize a solid into the requested format.
///
/// `mesh_tolerance` only matters for the mesh formats (STL, OBJ); STEP
/// serializes the exact B-rep.
pub fn export_solid(
    solid: &Solid,
    format: FileFormat,
    mesh_tolerance: f64,
) -> Result<Vec<u8>, ExportError> {
    match format {
        FileFormat::Stl => {
            let mesh = tessellate_solid(solid, mesh_tolerance)?;
            Ok(stl::mesh_to_stl(&mesh))
        }
        FileFormat::Obj => {
            let mesh = tessellate_solid(solid, mesh_tolerance)?;
            Ok(obj::mesh_to_obj(&mesh).into_bytes())
        }
        FileFormat::Step => Ok(step::solid_to_step(solid).into_bytes()),
    }
}

/// Export a solid and write it to `dir/box_model.<ext>`, replacing any
/// previous model of the same format. Returns the path and the bytes so
/// callers can serve the download without re-reading the file.
pub fn write_model(
    solid: &Solid,
    format: FileFormat,
    dir: &Path,
    mesh_tolerance: f64,
) -> Result<(PathBuf, Vec<u8>), ExportError> {
    let bytes = export_solid(solid, format, mesh_tolerance)?;
    let path = dir.join(format!("{}.{}", OUTPUT_BASENAME, format.extension()));
    fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok((path, bytes))
}
