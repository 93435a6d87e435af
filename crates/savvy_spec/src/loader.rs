//! Structure definition loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::StructureSpec;

/// Serialization format of a structure definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl SpecFormat {
    /// Pick a format from the file extension. Anything unrecognized is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("json") => SpecFormat::Json,
            Some("toml") => SpecFormat::Toml,
            _ => SpecFormat::Yaml,
        }
    }
}

/// Loader for structure definitions.
pub struct StructureLoader;

impl StructureLoader {
    /// Read and parse a structure definition from disk.
    pub fn load(path: impl AsRef<Path>) -> SpecResult<StructureSpec> {
        let path = path.as_ref();
        debug!("Loading structure definition from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| SpecError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, SpecFormat::from_path(path), path)
    }

    /// Parse a structure definition from text. `origin` only labels errors.
    pub fn parse(
        content: &str,
        format: SpecFormat,
        origin: impl Into<PathBuf>,
    ) -> SpecResult<StructureSpec> {
        let parsed: Result<StructureSpec, String> = match format {
            SpecFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SpecFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SpecFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        let spec = parsed.map_err(|message| SpecError::Malformed {
            path: origin.into(),
            message,
        })?;

        debug!(
            "Parsed {} folder(s) and {} template(s)",
            spec.folders.len(),
            spec.templates.len()
        );
        Ok(spec)
    }
}
