//! Shared wire types for the box model service.

use serde::{Deserialize, Serialize};

/// Export formats the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Stl,
    Step,
    Obj,
}

impl FileFormat {
    /// All supported formats, in the order they are advertised to clients.
    pub const ALL: [FileFormat; 3] = [FileFormat::Stl, FileFormat::Step, FileFormat::Obj];

    /// Parse the exact lowercase wire tag. Anything else is unsupported.
    pub fn from_tag(tag: &str) -> Option<FileFormat> {
        match tag {
            "stl" => Some(FileFormat::Stl),
            "step" => Some(FileFormat::Step),
            "obj" => Some(FileFormat::Obj),
            _ => None,
        }
    }

    /// The wire tag, which doubles as the file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Stl => "stl",
            FileFormat::Step => "step",
            FileFormat::Obj => "obj",
        }
    }

    /// Media type for download responses.
    pub fn media_type(&self) -> &'static str {
        match self {
            FileFormat::Stl => "model/stl",
            FileFormat::Step => "model/step",
            FileFormat::Obj => "model/obj",
        }
    }
}

/// A single model generation request.
///
/// Transient value object: no identity, no lifecycle beyond the request
/// that carries it. Dimensions are in model units.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelRequest {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Raw format tag; validated against [`FileFormat::from_tag`] by the
    /// handler so an unknown tag gets a proper 400 instead of a body
    /// rejection.
    #[serde(default = "default_format")]
    pub file_format: String,
}

fn default_format() -> String {
    "stl".to_string()
}
