//! STEP AP203 export via truck-stepio.

use truck_modeling::Solid;
use truck_stepio::out;

/// Serialize a solid to a complete STEP document string.
pub fn solid_to_step(solid: &Solid) -> String {
    let compressed = solid.compress();
    out::CompleteStepDisplay::new(out::StepModel::from(&compressed), Default::default()).to_string()
}
