pub mod model;
pub mod primitives;
pub mod tessellation;
pub mod types;

pub use model::{drilled_box, HOLE_DIAMETER};
pub use primitives::{make_box, make_cylinder};
pub use tessellation::tessellate_solid;
pub use types::{KernelError, TriangleMesh};
