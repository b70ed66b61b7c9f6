use std::path::PathBuf;

use boxcad_kernel::KernelError;

/// Errors during model export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
