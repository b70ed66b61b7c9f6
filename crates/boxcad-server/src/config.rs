//! Environment-derived server settings.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Origins allowed by default: the local dev frontend.
const DEFAULT_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MODEL_DIR: &str = "generated_models";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the single overwritten output file per format.
    pub model_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> ServerConfig {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_DIR));

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            model_dir,
            allowed_origins,
        }
    }
}

/// Split a `;`-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
